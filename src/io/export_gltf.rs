// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! GLTF/GLB batch exporter
//!
//! Writes one named node + mesh per export object so the `UCX_` collider
//! names survive the trip into the engine importer.

use super::ExportNode;
use anyhow::{Context, Result};
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export a batch of named objects to GLTF or GLB format, chosen by the file
/// extension.
pub fn export_gltf(nodes: &[ExportNode], path: &Path) -> Result<()> {
    let is_glb = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("glb"));

    if is_glb {
        export_glb(nodes, path)
    } else {
        export_gltf_separate(nodes, path)
    }
}

/// Export to GLB (binary GLTF)
fn export_glb(nodes: &[ExportNode], path: &Path) -> Result<()> {
    // GLB buffer 0 has no uri; the BIN chunk is the buffer.
    let (gltf_json_val, buffer_data) = build_gltf_json(nodes, None);

    let json_string = serde_json::to_string(&gltf_json_val)?;
    let mut json_offset = json_string.len();
    align_to_multiple_of_four(&mut json_offset);
    let json_padding = json_offset - json_string.len();

    let mut buffer_offset = buffer_data.len();
    align_to_multiple_of_four(&mut buffer_offset);
    let buffer_padding = buffer_offset - buffer_data.len();

    let total_length = 12 + 8 + json_offset + 8 + buffer_offset;

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create GLB file: {}", path.display()))?;

    // GLB header
    file.write_all(&0x46546C67u32.to_le_bytes())?; // magic: "glTF"
    file.write_all(&2u32.to_le_bytes())?; // version
    file.write_all(&(total_length as u32).to_le_bytes())?;

    // JSON chunk
    file.write_all(&(json_offset as u32).to_le_bytes())?;
    file.write_all(&0x4E4F534Au32.to_le_bytes())?; // type: "JSON"
    file.write_all(json_string.as_bytes())?;
    for _ in 0..json_padding {
        file.write_all(b" ")?;
    }

    // BIN chunk
    file.write_all(&(buffer_offset as u32).to_le_bytes())?;
    file.write_all(&0x004E4942u32.to_le_bytes())?; // type: "BIN\0"
    file.write_all(&buffer_data)?;
    for _ in 0..buffer_padding {
        file.write_all(&[0])?;
    }

    Ok(())
}

/// Export to GLTF with a sibling .bin file
fn export_gltf_separate(nodes: &[ExportNode], path: &Path) -> Result<()> {
    // The .bin sits next to the .gltf; batch exports share a directory, so
    // the buffer name must follow the file stem rather than a fixed name.
    let bin_name = format!(
        "{}.bin",
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("buffer")
    );
    let (gltf_json_val, buffer_data) = build_gltf_json(nodes, Some(&bin_name));

    let json_string = serde_json::to_string_pretty(&gltf_json_val)?;
    std::fs::write(path, json_string)
        .with_context(|| format!("Failed to write GLTF file: {}", path.display()))?;

    let bin_path = path.with_file_name(&bin_name);
    std::fs::write(&bin_path, buffer_data)
        .with_context(|| format!("Failed to write GLTF buffer: {}", bin_path.display()))?;

    Ok(())
}

fn build_gltf_json(nodes: &[ExportNode], bin_uri: Option<&str>) -> (serde_json::Value, Vec<u8>) {
    let mut buffer_data: Vec<u8> = Vec::new();
    let mut buffer_views = Vec::new();
    let mut accessors = Vec::new();
    let mut meshes = Vec::new();
    let mut node_entries = Vec::new();

    for (node_index, node) in nodes.iter().enumerate() {
        let mesh = &node.mesh;
        let bbox = mesh.bounding_box();

        // Positions
        let position_offset = buffer_data.len();
        for vertex in &mesh.vertices {
            buffer_data.extend_from_slice(&vertex.position.x.to_le_bytes());
            buffer_data.extend_from_slice(&vertex.position.y.to_le_bytes());
            buffer_data.extend_from_slice(&vertex.position.z.to_le_bytes());
        }
        let position_length = buffer_data.len() - position_offset;

        // Normals
        let normal_offset = buffer_data.len();
        for vertex in &mesh.vertices {
            buffer_data.extend_from_slice(&vertex.normal.x.to_le_bytes());
            buffer_data.extend_from_slice(&vertex.normal.y.to_le_bytes());
            buffer_data.extend_from_slice(&vertex.normal.z.to_le_bytes());
        }
        let normal_length = buffer_data.len() - normal_offset;

        // Indices
        let indices_offset = buffer_data.len();
        for triangle in &mesh.triangles {
            buffer_data.extend_from_slice(&(triangle.indices[0] as u32).to_le_bytes());
            buffer_data.extend_from_slice(&(triangle.indices[1] as u32).to_le_bytes());
            buffer_data.extend_from_slice(&(triangle.indices[2] as u32).to_le_bytes());
        }
        let indices_length = buffer_data.len() - indices_offset;

        let view_base = buffer_views.len();
        buffer_views.push(json!({
            "buffer": 0,
            "byteOffset": position_offset,
            "byteLength": position_length,
            "target": 34962
        }));
        buffer_views.push(json!({
            "buffer": 0,
            "byteOffset": normal_offset,
            "byteLength": normal_length,
            "target": 34962
        }));
        buffer_views.push(json!({
            "buffer": 0,
            "byteOffset": indices_offset,
            "byteLength": indices_length,
            "target": 34963
        }));

        let accessor_base = accessors.len();
        accessors.push(json!({
            "bufferView": view_base,
            "byteOffset": 0,
            "componentType": 5126,
            "count": mesh.vertices.len(),
            "type": "VEC3",
            "min": [bbox.min.x, bbox.min.y, bbox.min.z],
            "max": [bbox.max.x, bbox.max.y, bbox.max.z]
        }));
        accessors.push(json!({
            "bufferView": view_base + 1,
            "byteOffset": 0,
            "componentType": 5126,
            "count": mesh.vertices.len(),
            "type": "VEC3"
        }));
        accessors.push(json!({
            "bufferView": view_base + 2,
            "byteOffset": 0,
            "componentType": 5125,
            "count": mesh.triangles.len() * 3,
            "type": "SCALAR"
        }));

        meshes.push(json!({
            "name": node.name,
            "primitives": [
                {
                    "attributes": {
                        "POSITION": accessor_base,
                        "NORMAL": accessor_base + 1
                    },
                    "indices": accessor_base + 2,
                    "mode": 4
                }
            ]
        }));
        node_entries.push(json!({
            "name": node.name,
            "mesh": node_index
        }));
    }

    let buffer = match bin_uri {
        Some(uri) => json!({ "byteLength": buffer_data.len(), "uri": uri }),
        None => json!({ "byteLength": buffer_data.len() }),
    };

    let gltf = json!({
        "asset": {
            "generator": "ucxport",
            "version": "2.0"
        },
        "scene": 0,
        "scenes": [
            {
                "nodes": (0..nodes.len()).collect::<Vec<usize>>()
            }
        ],
        "nodes": node_entries,
        "meshes": meshes,
        "accessors": accessors,
        "bufferViews": buffer_views,
        "buffers": [buffer]
    });

    (gltf, buffer_data)
}

fn align_to_multiple_of_four(n: &mut usize) {
    *n = (*n + 3) & !3;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Mesh, Triangle, Vertex};
    use nalgebra::{Point3, Vector3};
    use tempfile::NamedTempFile;

    fn triangle_node(name: &str) -> ExportNode {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()));
        mesh.add_vertex(Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()));
        mesh.add_vertex(Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()));
        mesh.add_triangle(Triangle::new([0, 1, 2]));
        ExportNode::new(name, mesh)
    }

    #[test]
    fn test_export_glb_header() -> Result<()> {
        let nodes = vec![triangle_node("Wall"), triangle_node("UCX_Wall_01")];

        let file = NamedTempFile::with_suffix(".glb")?;
        export_gltf(&nodes, file.path())?;

        let content = std::fs::read(file.path())?;
        assert_eq!(&content[0..4], b"glTF");
        // Total length field matches the file size
        let total = u32::from_le_bytes([content[8], content[9], content[10], content[11]]);
        assert_eq!(total as usize, content.len());

        Ok(())
    }

    #[test]
    fn test_export_gltf_named_nodes() -> Result<()> {
        let nodes = vec![triangle_node("Wall"), triangle_node("UCX_Wall_01")];

        let file = NamedTempFile::with_suffix(".gltf")?;
        export_gltf(&nodes, file.path())?;

        let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(file.path())?)?;
        assert_eq!(doc["nodes"][0]["name"], "Wall");
        assert_eq!(doc["nodes"][1]["name"], "UCX_Wall_01");
        assert_eq!(doc["meshes"].as_array().map(|m| m.len()), Some(2));

        // Sibling buffer exists under the file's stem
        let stem = file.path().file_stem().unwrap().to_str().unwrap();
        let bin_path = file.path().with_file_name(format!("{}.bin", stem));
        assert!(bin_path.exists());
        std::fs::remove_file(bin_path)?;

        Ok(())
    }
}

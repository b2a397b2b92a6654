// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! STL batch exporter

use super::ExportNode;
use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Export a batch of named objects to a single binary STL file.
///
/// STL carries no node names, so the `UCX_` association is flattened away in
/// this format; glTF/GLB is the format that preserves collider pairing.
pub fn export_stl(nodes: &[ExportNode], path: &Path) -> Result<()> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

    let mut combined = Mesh::new();
    for node in nodes {
        combined.merge(&node.mesh);
    }

    let triangles: Vec<StlTriangle> = combined
        .triangles
        .iter()
        .map(|tri| {
            let v0 = &combined.vertices[tri.indices[0]];
            let v1 = &combined.vertices[tri.indices[1]];
            let v2 = &combined.vertices[tri.indices[2]];

            let normal = (v0.normal + v1.normal + v2.normal) / 3.0;

            StlTriangle {
                normal: Normal::new([normal.x, normal.y, normal.z]),
                vertices: [
                    StlVertex::new([v0.position.x, v0.position.y, v0.position.z]),
                    StlVertex::new([v1.position.x, v1.position.y, v1.position.z]),
                    StlVertex::new([v2.position.x, v2.position.y, v2.position.z]),
                ],
            }
        })
        .collect();

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;

    stl_io::write_stl(&mut file, triangles.iter())
        .with_context(|| format!("Failed to write STL file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Triangle, Vertex};
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
    fn test_export_stl_flattens_batch() -> Result<()> {
        let nodes = vec![triangle_node("Wall"), triangle_node("UCX_Wall_01")];

        let file = NamedTempFile::with_suffix(".stl")?;
        export_stl(&nodes, file.path())?;

        let mut reader = File::open(file.path())?;
        let stl = stl_io::read_stl(&mut reader)?;
        assert_eq!(stl.faces.len(), 2);

        Ok(())
    }
}

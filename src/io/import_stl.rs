// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! STL mesh importer

use crate::geometry::{Mesh, Triangle, Vertex};
use anyhow::{Context, Result};
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::path::Path;

/// Import a binary or ASCII STL file as an indexed mesh.
///
/// Vertex normals are accumulated from the facet normals (recomputed from the
/// vertex winding when a facet stores a zero normal) and normalized.
pub fn import_stl(path: &Path) -> Result<Mesh> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open STL file: {}", path.display()))?;
    let stl = stl_io::read_stl(&mut file)
        .with_context(|| format!("Failed to read STL file: {}", path.display()))?;

    let mut mesh = Mesh::with_capacity(stl.vertices.len(), stl.faces.len());
    for vertex in &stl.vertices {
        mesh.add_vertex(Vertex::new(
            Point3::new(vertex[0], vertex[1], vertex[2]),
            Vector3::zeros(),
        ));
    }

    for face in &stl.faces {
        let [a, b, c] = face.vertices;
        let mut normal = Vector3::new(face.normal[0], face.normal[1], face.normal[2]);
        if normal.norm_squared() < 1e-12 {
            let p0 = mesh.vertices[a].position;
            let p1 = mesh.vertices[b].position;
            let p2 = mesh.vertices[c].position;
            let cross = (p1 - p0).cross(&(p2 - p0));
            // Degenerate facets contribute nothing
            normal = if cross.norm_squared() > 1e-12 {
                cross.normalize()
            } else {
                Vector3::zeros()
            };
        }

        for index in face.vertices {
            mesh.vertices[index].normal += normal;
        }
        mesh.add_triangle(Triangle::new([a, b, c]));
    }

    for vertex in &mut mesh.vertices {
        let length = vertex.normal.norm();
        if length > 0.0 {
            vertex.normal /= length;
        } else {
            vertex.normal = Vector3::z();
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_missing_file() {
        let result = import_stl(Path::new("/nonexistent/mesh.stl"));
        assert!(result.is_err());
    }

    #[test]
    fn test_import_ascii_stl() -> Result<()> {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::with_suffix(".stl")?;
        writeln!(file, "solid tri")?;
        writeln!(file, "  facet normal 0 0 1")?;
        writeln!(file, "    outer loop")?;
        writeln!(file, "      vertex 0 0 0")?;
        writeln!(file, "      vertex 1 0 0")?;
        writeln!(file, "      vertex 0 1 0")?;
        writeln!(file, "    endloop")?;
        writeln!(file, "  endfacet")?;
        writeln!(file, "endsolid tri")?;
        file.flush()?;

        let mesh = import_stl(file.path())?;
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert!(crate::utils::math::approx_eq(
            (mesh.vertices[0].normal - Vector3::z()).norm(),
            0.0,
            1e-6,
        ));
        Ok(())
    }
}

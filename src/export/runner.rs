// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Export execution
//!
//! Bakes each batch into world (or object-local) space and writes it to its
//! own interchange file. The original workflow achieved per-object origins by
//! copying objects into a scratch scene; here the same effect is a plain
//! translation by the base object's location.

use super::{ExportBatch, ExportConfig, ExportFormat, ExportPlan};
use crate::io::{self, ExportNode};
use crate::scene::{Scene, SceneObject};
use crate::utils::math::z_up_to_y_up;
use anyhow::{Context, Result};
use nalgebra::{Matrix4, Vector3};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of one exported batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub base: String,
    pub output: PathBuf,
    pub nodes: usize,
    pub triangles: usize,
    pub duration: Duration,
}

/// Execute `plan` against `scene`, writing one file per batch.
///
/// Batches are independent and run in parallel; results come back in plan
/// order. A failing batch aborts the whole run.
pub fn run(scene: &Scene, plan: &ExportPlan, config: &ExportConfig) -> Result<Vec<BatchResult>> {
    std::fs::create_dir_all(&config.export_path).with_context(|| {
        format!(
            "Failed to create export directory: {}",
            config.export_path.display()
        )
    })?;

    plan.batches
        .par_iter()
        .map(|batch| run_batch(scene, batch, config))
        .collect()
}

fn run_batch(scene: &Scene, batch: &ExportBatch, config: &ExportConfig) -> Result<BatchResult> {
    let start = Instant::now();

    let base = scene
        .get(&batch.base)
        .with_context(|| format!("Export batch references missing object: {}", batch.base))?;

    // Per-object origin: the base lands at the file origin and its colliders
    // keep their offsets relative to it.
    let origin = config.use_object_origin.then_some(base.location);

    let matrix = if config.scale != 1.0 || config.convert_axes {
        let mut matrix = Matrix4::new_scaling(config.scale);
        if config.convert_axes {
            matrix = z_up_to_y_up() * matrix;
        }
        Some(matrix)
    } else {
        None
    };

    let mut nodes = Vec::with_capacity(batch.node_count());
    nodes.push(bake(base, origin.as_ref(), matrix.as_ref()));
    for name in &batch.colliders {
        let collider = scene
            .get(name)
            .with_context(|| format!("Export batch references missing collider: {}", name))?;
        nodes.push(bake(collider, origin.as_ref(), matrix.as_ref()));
    }

    match config.format {
        ExportFormat::Stl => io::export_stl(&nodes, &batch.output)?,
        ExportFormat::Gltf | ExportFormat::Glb => io::export_gltf(&nodes, &batch.output)?,
    }

    Ok(BatchResult {
        base: batch.base.clone(),
        output: batch.output.clone(),
        nodes: nodes.len(),
        triangles: nodes.iter().map(|node| node.mesh.triangle_count()).sum(),
        duration: start.elapsed(),
    })
}

/// Clone an object's mesh with its location baked in, shifted by the batch
/// origin and run through the scale/axis matrix.
fn bake(
    object: &SceneObject,
    origin: Option<&Vector3<f32>>,
    matrix: Option<&Matrix4<f32>>,
) -> ExportNode {
    let mut mesh = object.mesh.clone();

    let mut offset = object.location;
    if let Some(origin) = origin {
        offset -= origin;
    }
    mesh.translate(&offset);

    if let Some(matrix) = matrix {
        mesh.transform(matrix);
    }

    ExportNode::new(object.name.clone(), mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Mesh, Triangle, Vertex};
    use nalgebra::Point3;
    use std::path::Path;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()));
        mesh.add_vertex(Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()));
        mesh.add_vertex(Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()));
        mesh.add_triangle(Triangle::new([0, 1, 2]));
        mesh
    }

    fn test_scene() -> Scene {
        let mut scene = Scene::new();

        let mut wall = SceneObject::new("Wall", triangle_mesh());
        wall.location = Vector3::new(5.0, 0.0, 0.0);
        scene.objects.push(wall);

        let mut collider = SceneObject::new("UCX_Wall_01", triangle_mesh());
        collider.location = Vector3::new(6.0, 0.0, 0.0);
        scene.objects.push(collider);

        scene
    }

    fn plain_config(dir: &Path) -> ExportConfig {
        ExportConfig {
            format: ExportFormat::Stl,
            convert_axes: false,
            export_path: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_object_origin_adjustment() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let scene = test_scene();
        let config = plain_config(dir.path());

        let plan = ExportPlan::build(&scene, &config);
        let results = run(&scene, &plan, &config)?;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].nodes, 2);
        assert_eq!(results[0].triangles, 2);

        // Base lands at the origin; the collider keeps its +1 offset.
        let mut reader = std::fs::File::open(&results[0].output)?;
        let stl = stl_io::read_stl(&mut reader)?;
        let max_x = stl
            .vertices
            .iter()
            .map(|v| v[0])
            .fold(f32::NEG_INFINITY, f32::max);
        let min_x = stl
            .vertices
            .iter()
            .map(|v| v[0])
            .fold(f32::INFINITY, f32::min);
        assert_eq!(min_x, 0.0);
        assert_eq!(max_x, 2.0);

        Ok(())
    }

    #[test]
    fn test_world_origin_keeps_locations() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let scene = test_scene();
        let config = ExportConfig {
            use_object_origin: false,
            ..plain_config(dir.path())
        };

        let plan = ExportPlan::build(&scene, &config);
        let results = run(&scene, &plan, &config)?;

        let mut reader = std::fs::File::open(&results[0].output)?;
        let stl = stl_io::read_stl(&mut reader)?;
        let min_x = stl
            .vertices
            .iter()
            .map(|v| v[0])
            .fold(f32::INFINITY, f32::min);
        assert_eq!(min_x, 5.0);

        Ok(())
    }

    #[test]
    fn test_missing_collider_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let scene = test_scene();
        let config = plain_config(dir.path());

        let mut plan = ExportPlan::build(&scene, &config);
        plan.batches[0].colliders.push("UCX_Wall_09".into());

        let err = run(&scene, &plan, &config).unwrap_err();
        assert!(err.to_string().contains("UCX_Wall_09"));
    }
}

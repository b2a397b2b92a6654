// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! ucxport
//!
//! Prepares and batch-exports meshes for Unreal Engine 4: parsing and
//! organizing the `UCX_` collision-mesh naming convention, and writing each
//! base mesh together with its colliders to its own interchange file with
//! per-object origin adjustment.

pub mod cli;
pub mod export;
pub mod geometry;
pub mod io;
pub mod naming;
pub mod scene;
pub mod utils;

pub use export::{run, BatchResult, ExportConfig, ExportFormat, ExportPlan};
pub use geometry::Mesh;
pub use naming::{decode, encode, ColliderName, UCX_PREFIX};
pub use scene::{Scene, SceneObject};

use anyhow::Result;
use std::path::Path;

/// Load a scene (manifest file or directory) and export every batch it
/// yields under `config`.
pub fn export_scene(path: &Path, config: &ExportConfig) -> Result<Vec<BatchResult>> {
    let scene = Scene::load(path)?;
    let plan = ExportPlan::build(&scene, config);
    export::run(&scene, &plan, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_smoke() {
        let collider = decode("UCX_Wall_03").unwrap();
        assert_eq!(collider.base, "Wall");
        assert_eq!(collider.index, Some(3));
    }
}

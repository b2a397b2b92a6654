// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Scene manifest loading
//!
//! A manifest is a JSON file listing the objects of a scene by name, with a
//! mesh path (relative to the manifest) and an optional world location:
//!
//! ```json
//! {
//!   "objects": [
//!     { "name": "Wall", "mesh": "meshes/wall.stl", "location": [0, 2, 0] },
//!     { "name": "UCX_Wall_01", "mesh": "meshes/wall_box.stl" }
//!   ]
//! }
//! ```

use super::{Scene, SceneObject};
use crate::io::import_stl;
use anyhow::{Context, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scene description as written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub objects: Vec<ManifestObject>,
}

/// One object entry in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestObject {
    pub name: String,
    pub mesh: PathBuf,
    #[serde(default)]
    pub location: [f32; 3],
    #[serde(default = "default_selected")]
    pub selected: bool,
}

fn default_selected() -> bool {
    true
}

/// Load a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    let manifest: Manifest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
    Ok(manifest)
}

impl Manifest {
    /// Resolve mesh paths against `root` and import every object's mesh.
    pub fn into_scene(self, root: &Path) -> Result<Scene> {
        let mut scene = Scene::new();

        for entry in self.objects {
            let mesh_path = root.join(&entry.mesh);
            let mesh = import_stl(&mesh_path)
                .with_context(|| format!("While loading object '{}'", entry.name))?;

            let object = SceneObject {
                location: Vector3::new(entry.location[0], entry.location[1], entry.location[2]),
                selected: entry.selected,
                source: Some(mesh_path),
                ..SceneObject::new(entry.name, mesh)
            };
            scene.objects.push(object);
        }

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_defaults() -> Result<()> {
        let manifest: Manifest = serde_json::from_str(
            r#"{ "objects": [ { "name": "Wall", "mesh": "wall.stl" } ] }"#,
        )?;
        assert_eq!(manifest.objects[0].location, [0.0, 0.0, 0.0]);
        assert!(manifest.objects[0].selected);
        Ok(())
    }

    #[test]
    fn test_missing_manifest() {
        assert!(load_manifest(Path::new("/nonexistent/scene.json")).is_err());
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Working scene model
//!
//! A [`Scene`] is the host-free stand-in for a DCC scene graph: a flat list
//! of named objects with mesh data and a world location. Scenes come from a
//! JSON manifest or from discovering STL files in a directory, where the file
//! stem is the object name.

pub mod manifest;

pub use manifest::{load_manifest, Manifest, ManifestObject};

use crate::geometry::Mesh;
use crate::io::import_stl;
use crate::naming::{self, ColliderName, RenameStep};
use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A named object in the working scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub mesh: Mesh,
    pub location: Vector3<f32>,
    pub selected: bool,
    /// File the mesh was loaded from, when it came from disk. Rename
    /// operations use this to move the file along with the name.
    pub source: Option<PathBuf>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            location: Vector3::zeros(),
            selected: true,
            source: None,
        }
    }
}

/// A flat scene of named objects.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Load a scene from a manifest file, or discover one from a directory.
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::discover(path)
        } else {
            let manifest = load_manifest(path)?;
            let root = path.parent().unwrap_or(Path::new("."));
            manifest.into_scene(root)
        }
    }

    /// Build a scene from every `.stl` file under `dir`. File stems become
    /// object names, so collider files are expected to be named
    /// `UCX_<base>_<index>.stl`.
    pub fn discover(dir: &Path) -> Result<Self> {
        let mut objects = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_stl = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"));
            if !is_stl {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let mesh = import_stl(path)?;
            let mut object = SceneObject::new(name, mesh);
            object.source = Some(path.to_path_buf());
            objects.push(object);
        }

        if objects.is_empty() {
            bail!("No STL files found under: {}", dir.display());
        }

        Ok(Self { objects })
    }

    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|object| object.name.as_str())
    }

    /// Objects that are not colliders, in scene order.
    pub fn base_meshes(&self) -> Vec<&SceneObject> {
        self.objects
            .iter()
            .filter(|object| !naming::is_collider(&object.name))
            .collect()
    }

    /// Colliders belonging to `base`, sorted by index (unknown first).
    pub fn colliders_of(&self, base: &str) -> Vec<&SceneObject> {
        naming::colliders_for(base, self.names())
            .into_iter()
            .filter_map(|(name, _)| self.get(&name))
            .collect()
    }

    /// Colliders whose base mesh is missing from the scene.
    pub fn orphan_colliders(&self) -> Vec<(&SceneObject, ColliderName)> {
        self.objects
            .iter()
            .filter_map(|object| naming::decode(&object.name).map(|collider| (object, collider)))
            .filter(|(_, collider)| !self.contains(&collider.base))
            .collect()
    }
}

/// Apply a rename plan to STL files in `dir`: `<from>.stl` becomes
/// `<to>.stl`. Returns the number of files actually renamed.
///
/// Renames run in two phases through temporary names, since a step's target
/// may still be occupied by a later step's source (e.g. shifting indices
/// down by one). A failure in phase one moves the already-renamed files back
/// to their original names before returning the error.
pub fn apply_renames(dir: &Path, steps: &[RenameStep]) -> Result<usize> {
    let stl = |name: &str| dir.join(format!("{}.stl", name));
    let tmp = |name: &str| dir.join(format!("{}.stl.renaming", name));

    let active: Vec<&RenameStep> = steps.iter().filter(|step| !step.is_noop()).collect();

    for (done, step) in active.iter().enumerate() {
        let from = stl(&step.from);
        if let Err(err) = std::fs::rename(&from, tmp(&step.to)) {
            for step in &active[..done] {
                let _ = std::fs::rename(tmp(&step.to), stl(&step.from));
            }
            return Err(err)
                .with_context(|| format!("Failed to rename: {}", from.display()));
        }
    }
    for step in &active {
        let to = stl(&step.to);
        std::fs::rename(tmp(&step.to), &to)
            .with_context(|| format!("Failed to rename into place: {}", to.display()))?;
    }

    Ok(active.len())
}

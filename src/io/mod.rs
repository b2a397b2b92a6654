// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Interchange-format import and export

mod export_gltf;
mod export_stl;
mod import_stl;

pub use export_gltf::export_gltf;
pub use export_stl::export_stl;
pub use import_stl::import_stl;

use crate::geometry::Mesh;

/// A named mesh ready to be written to an interchange file.
///
/// Node names carry the `UCX_` convention through to the target engine's
/// importer, so exporters that support named nodes must preserve them.
#[derive(Debug, Clone)]
pub struct ExportNode {
    pub name: String,
    pub mesh: Mesh,
}

impl ExportNode {
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
        }
    }
}

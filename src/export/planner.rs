// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Export planning
//!
//! A plan is computed up front so it can be reported (and inspected in
//! tests) before any file is written: one batch per exported base mesh, with
//! its colliders in index order.

use super::ExportConfig;
use crate::naming;
use crate::scene::Scene;
use std::path::PathBuf;

/// One output file: a base mesh plus its colliders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBatch {
    pub base: String,
    pub colliders: Vec<String>,
    pub output: PathBuf,
}

impl ExportBatch {
    /// Number of nodes the output file will contain.
    pub fn node_count(&self) -> usize {
        1 + self.colliders.len()
    }
}

/// The full set of batches an export run will produce.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    pub batches: Vec<ExportBatch>,
}

impl ExportPlan {
    /// Build the plan for `scene` under `config`.
    ///
    /// Colliders are never batches of their own; they only ride along with
    /// their base mesh. Orphan colliders are therefore silently skipped here
    /// (the inspect workflow surfaces them).
    pub fn build(scene: &Scene, config: &ExportConfig) -> Self {
        let mut batches = Vec::new();

        for object in &scene.objects {
            if naming::is_collider(&object.name) {
                continue;
            }
            if config.selected_only && !object.selected {
                continue;
            }

            let colliders = if config.include_collision {
                scene
                    .colliders_of(&object.name)
                    .into_iter()
                    .map(|collider| collider.name.clone())
                    .collect()
            } else {
                Vec::new()
            };

            let output = config
                .export_path
                .join(format!("{}.{}", object.name, config.format.extension()));

            batches.push(ExportBatch {
                base: object.name.clone(),
                colliders,
                output,
            });
        }

        Self { batches }
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

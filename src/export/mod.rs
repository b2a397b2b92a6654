// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Export planning and execution

mod config;
mod planner;
mod runner;

pub use config::{ExportConfig, ExportFormat};
pub use planner::{ExportBatch, ExportPlan};
pub use runner::{run, BatchResult};

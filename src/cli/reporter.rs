// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! CLI output reporter with colored formatting

use crate::export::{BatchResult, ExportPlan};
use crate::naming::RenameStep;
use crate::scene::Scene;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Summarize an export plan before running it
    pub fn report_plan(plan: &ExportPlan) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {} {}",
            "Export plan:".bold(),
            plan.len().to_string().cyan(),
            if plan.len() == 1 { "file" } else { "files" }
        );
        println!("{}", "━".repeat(80).bright_black());

        for batch in &plan.batches {
            let colliders = if batch.colliders.is_empty() {
                "no colliders".bright_black().to_string()
            } else {
                format!("{} colliders", batch.colliders.len())
                    .green()
                    .to_string()
            };
            println!(
                "  {} {} ({})",
                batch.base.cyan(),
                format!("-> {}", batch.output.display()).bright_black(),
                colliders
            );
        }
    }

    /// Report one finished export batch
    pub fn report_batch(result: &BatchResult) {
        println!(
            "  {} {} {} ({} nodes, {} triangles) {}",
            "✅".green(),
            result.base.cyan(),
            format!("-> {}", result.output.display()).bright_black(),
            result.nodes,
            result.triangles,
            Self::format_duration(result.duration).yellow()
        );
    }

    /// Report a rename plan, marking no-ops
    pub fn report_renames(steps: &[RenameStep], applied: bool) {
        let verb = if applied { "Renamed" } else { "Would rename" };
        for step in steps {
            if step.is_noop() {
                println!(
                    "  {} {}",
                    step.from.bright_black(),
                    "(unchanged)".bright_black()
                );
            } else {
                println!("  {} {} {}", verb, step.from.yellow(), format!("-> {}", step.to).green());
            }
        }
    }

    /// Report base meshes, their colliders, and naming problems
    pub fn report_inspection(scene: &Scene) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{}", "Scene inspection".bold());
        println!("{}", "━".repeat(80).bright_black());

        for base in scene.base_meshes() {
            println!(
                "  {} ({} triangles)",
                base.name.cyan().bold(),
                base.mesh.triangle_count()
            );
            for collider in scene.colliders_of(&base.name) {
                let index = crate::naming::decode(&collider.name).and_then(|c| c.index);
                match index {
                    Some(index) => println!(
                        "    {} {} (index {})",
                        "◆".green(),
                        collider.name,
                        index
                    ),
                    None => println!(
                        "    {} {} {}",
                        "◆".yellow(),
                        collider.name,
                        "(index unknown)".yellow()
                    ),
                }
            }
        }

        let orphans = scene.orphan_colliders();
        if !orphans.is_empty() {
            println!("\n  {}", "Orphan colliders:".red().bold());
            for (object, collider) in orphans {
                println!(
                    "    {} {} {}",
                    "❌".red(),
                    object.name,
                    format!("(no base object found: {})", collider.base).bright_black()
                );
            }
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    fn format_duration(duration: Duration) -> String {
        let ms = duration.as_secs_f64() * 1000.0;
        if ms < 1000.0 {
            format!("{:.1}ms", ms)
        } else {
            format!("{:.2}s", duration.as_secs_f64())
        }
    }
}

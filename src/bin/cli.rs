// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! ucxport CLI

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use ucxport::cli::Reporter;
use ucxport::{naming, scene, ExportConfig, ExportFormat, ExportPlan, Scene};

#[derive(Parser)]
#[command(name = "ucxport")]
#[command(about = "UCX collision naming and batch export for Unreal Engine 4", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scene manifest or directory of STL files
    #[arg(value_name = "SCENE")]
    scene: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export each base mesh (with its colliders) to its own file
    Export {
        /// Scene manifest or directory of STL files
        scene: PathBuf,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Export all meshes, not just selected ones
        #[arg(long)]
        all: bool,

        /// Keep world locations instead of per-object origins
        #[arg(long)]
        world_origin: bool,

        /// Leave collision meshes out of the export
        #[arg(long)]
        no_collision: bool,

        /// Keep the source Z-up axes instead of converting to Y-up
        #[arg(long)]
        keep_axes: bool,

        /// Uniform export scale
        #[arg(short, long)]
        scale: Option<f32>,

        /// Config file (TOML); defaults to ucxport.toml when present
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Renumber collider STL files for a base mesh
    Rename {
        /// Directory holding the STL files
        dir: PathBuf,

        /// Base mesh the colliders belong to
        #[arg(short, long)]
        base: String,

        /// Additional file stems to adopt as colliders of the base
        #[arg(long)]
        adopt: Vec<String>,

        /// Show the plan without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// List base meshes, their colliders, and naming problems
    Inspect {
        /// Scene manifest or directory of STL files
        scene: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Export {
            scene,
            out,
            format,
            all,
            world_origin,
            no_collision,
            keep_axes,
            scale,
            config,
        }) => {
            let mut export_config = match config {
                Some(path) => ExportConfig::from_file(path)?,
                None => ExportConfig::load()?,
            };
            if let Some(out) = out {
                export_config.export_path = out.clone();
            }
            if let Some(format) = format {
                export_config.format = *format;
            }
            if let Some(scale) = scale {
                export_config.scale = *scale;
            }
            if *all {
                export_config.selected_only = false;
            }
            if *world_origin {
                export_config.use_object_origin = false;
            }
            if *no_collision {
                export_config.include_collision = false;
            }
            if *keep_axes {
                export_config.convert_axes = false;
            }

            export_command(scene, &export_config, cli.verbose)?;
        }
        Some(Commands::Rename {
            dir,
            base,
            adopt,
            dry_run,
        }) => {
            rename_command(dir, base, adopt, *dry_run)?;
        }
        Some(Commands::Inspect { scene }) => {
            let scene = Scene::load(scene)?;
            Reporter::report_inspection(&scene);
        }
        Some(Commands::Version) => {
            println!("ucxport v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Default behavior: export the given scene with defaults
            if let Some(scene) = &cli.scene {
                let config = ExportConfig::load()?;
                export_command(scene, &config, cli.verbose)?;
            } else {
                eprintln!("Error: Scene manifest or directory required");
                eprintln!("Usage: ucxport <SCENE> | ucxport export <SCENE> [options]");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn export_command(scene_path: &Path, config: &ExportConfig, verbose: bool) -> Result<()> {
    if !scene_path.exists() {
        Reporter::report_error(&format!("Scene not found: {}", scene_path.display()));
        std::process::exit(1);
    }

    let scene = Scene::load(scene_path)?;
    let plan = ExportPlan::build(&scene, config);

    if plan.is_empty() {
        Reporter::report_warning("No meshes to export");
        return Ok(());
    }

    if verbose {
        Reporter::report_plan(&plan);
        println!();
    }

    let progress = if plan.len() > 2 && !verbose {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::default_spinner());
        bar.set_message(format!("Exporting {} files...", plan.len()));
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(bar)
    } else {
        None
    };

    let results = ucxport::run(&scene, &plan, config);

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    for result in results? {
        Reporter::report_batch(&result);
    }

    Ok(())
}

fn rename_command(dir: &Path, base: &str, adopt: &[String], dry_run: bool) -> Result<()> {
    let scene = Scene::discover(dir)?;

    if !scene.contains(base) {
        bail!("No base object found: {}", base);
    }
    for name in adopt {
        if !scene.contains(name) {
            bail!("Adopted mesh not found in {}: {}", dir.display(), name);
        }
    }

    let steps = naming::rename_plan(
        base,
        scene.names(),
        adopt.iter().map(|name| name.as_str()),
    );

    if steps.is_empty() {
        Reporter::report_info(&format!("No colliders found for {}", base));
        return Ok(());
    }

    if dry_run {
        Reporter::report_renames(&steps, false);
    } else {
        let renamed = scene::apply_renames(dir, &steps)?;
        Reporter::report_renames(&steps, true);
        Reporter::report_info(&format!("{} files renamed", renamed));
    }

    Ok(())
}

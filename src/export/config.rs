// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Export configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Target interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Gltf,
    Glb,
    Stl,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Gltf => "gltf",
            ExportFormat::Glb => "glb",
            ExportFormat::Stl => "stl",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gltf" => Ok(ExportFormat::Gltf),
            "glb" => Ok(ExportFormat::Glb),
            "stl" => Ok(ExportFormat::Stl),
            other => anyhow::bail!("Unsupported export format: {}", other),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Export each object with its own origin as the origin of the file
    pub use_object_origin: bool,
    /// Only export selected meshes (if false, exports all meshes)
    pub selected_only: bool,
    /// Include collision meshes (`UCX_` names) with their respective meshes
    pub include_collision: bool,
    /// Uniform export scale
    pub scale: f32,
    /// Convert from Z-up to the Y-up frame the engine importer expects
    pub convert_axes: bool,
    /// Target format
    pub format: ExportFormat,
    /// Directory the interchange files are written to
    pub export_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            use_object_origin: true,
            selected_only: true,
            include_collision: true,
            scale: 1.0,
            convert_axes: true,
            format: ExportFormat::Glb,
            export_path: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: ExportConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `ucxport.toml` if present, then apply environment variable
    /// overrides.
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from("ucxport.toml").exists() {
            Self::from_file("ucxport.toml")?
        } else {
            Self::default()
        };

        if let Ok(path) = std::env::var("UCXPORT_EXPORT_PATH") {
            config.export_path = PathBuf::from(path);
        }

        if let Ok(scale) = std::env::var("UCXPORT_SCALE") {
            if let Ok(scale) = scale.parse() {
                config.scale = scale;
            }
        }

        if let Ok(format) = std::env::var("UCXPORT_FORMAT") {
            if let Ok(format) = format.parse() {
                config.format = format;
            }
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

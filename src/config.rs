//! Chart settings.
//!
//! Stored as `settings.json` in the OS config directory. Every field carries
//! a default so a partial file is valid; a missing or broken file yields the
//! built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GanttError, Result};

/// Layout and interaction parameters for the Gantt modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub row_height: f32,
    /// Width of the name column left of the time axis.
    pub name_column_width: f32,
    /// Horizontal indent per tree level.
    pub indent: f32,
    /// How far connectors run right before turning vertical.
    pub elbow_offset: f32,
    pub tooltip_width: f32,
    pub tooltip_height: f32,
    /// Gap between a bar and its tooltip, and between a tooltip and the
    /// viewport edge.
    pub tooltip_margin: f32,
    pub modal: ModalConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub min_width: f32,
    pub min_height: f32,
    /// Largest size as a fraction of the viewport.
    pub max_viewport_fraction: f32,
    pub initial_width: f32,
    pub initial_height: f32,
    /// Cap on the initial size as a fraction of the viewport.
    pub initial_viewport_fraction: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            row_height: 30.0,
            name_column_width: 240.0,
            indent: 20.0,
            elbow_offset: 20.0,
            tooltip_width: 300.0,
            tooltip_height: 100.0,
            tooltip_margin: 10.0,
            modal: ModalConfig::default(),
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            min_width: 800.0,
            min_height: 400.0,
            max_viewport_fraction: 0.95,
            initial_width: 1200.0,
            initial_height: 800.0,
            initial_viewport_fraction: 0.8,
        }
    }
}

impl ChartConfig {
    /// Location of the settings file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "JobGantt")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("no config directory available, using default chart settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded chart settings");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "invalid chart settings, using defaults"
                );
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| GanttError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GanttError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| GanttError::io(path, e))
    }
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use quadbrot_core::{NavCommand, ViewState, DEFAULT_MAX_ITERATIONS};
use quadbrot_render::{ComputeOptions, Mode, DEFAULT_MIN_BLOCK_SIZE};

// ---------------------------------------------------------------------------
// Run settings
// ---------------------------------------------------------------------------

/// Everything one headless run needs: the view, the output size and the
/// computation tuning. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_min_block_size")]
    pub min_block_size: u32,
    /// Worker threads; absent means one per available core.
    #[serde(default)]
    pub threads: Option<usize>,
    #[serde(default)]
    pub view: ViewState,
    /// Navigation applied to `view`, in order, before computing.
    #[serde(default)]
    pub commands: Vec<NavCommand>,
}

fn default_width() -> u32 {
    400
}
fn default_height() -> u32 {
    400
}
fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}
fn default_min_block_size() -> u32 {
    DEFAULT_MIN_BLOCK_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_iterations: default_max_iterations(),
            mode: Mode::default(),
            min_block_size: default_min_block_size(),
            threads: None,
            view: ViewState::default(),
            commands: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file gives the defaults. A file that exists but cannot be
    /// read or parsed is an error, so a typo such as an unknown mode stops
    /// the run instead of silently computing something else.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {e}", path.display()))?;
        let settings = Self::from_json(&json)
            .map_err(|e| format!("Failed to parse settings file {}: {e}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The configured view with all navigation commands applied.
    pub fn resolved_view(&self) -> ViewState {
        let mut view = self.view;
        for &command in &self.commands {
            view.apply(command);
        }
        view
    }

    pub fn compute_options(&self) -> ComputeOptions {
        ComputeOptions {
            mode: self.mode,
            min_block_size: self.min_block_size,
            threads: self.threads,
        }
    }
}

//! Locations the driver reads from when no explicit path is given.

use std::path::PathBuf;

/// Directory containing the running executable. Falls back to the current directory.
pub fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Settings file used when none is passed on the command line.
pub fn default_settings_path() -> PathBuf {
    exe_directory().join("quadbrot.json")
}

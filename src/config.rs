//! Process-wide resolver settings and their JSON discovery.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_SETTINGS_FILE: &str = "assets.config.json";

/// Process-wide resolution defaults, applied once at startup and read on every call.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Whether resolved pipeline paths embed the content digest by default.
    pub digest: bool,
    /// Mount prefix prepended to pipeline and manifest results.
    pub prefix: String,
    /// Directory plain filesystem assets are served from.
    ///
    /// The resolver itself never reads the directory; tooling such as the bundled
    /// CLI uses it to verify that filesystem fallback results exist on disk.
    pub public_path: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            digest: false,
            prefix: "/assets".into(),
            public_path: "./public".into(),
        }
    }
}

impl ResolverSettings {
    /// Attempt to load settings from the provided directory.
    ///
    /// When the settings file does not exist or fails to parse we fall back to default
    /// values so downstream callers can continue operating with sensible assumptions.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_SETTINGS_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read settings from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

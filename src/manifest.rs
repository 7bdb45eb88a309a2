//! Loading and querying the precompiled asset manifest emitted by a build step.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::lookup::{LookupError, ManifestLookup};

/// Deserialised representation of the manifest JSON a fingerprinting build emits.
///
/// The file maps logical source names to their built, digest-embedding paths:
///
/// ```json
/// { "assets": { "application.js": "application-abc123.js" } }
/// ```
///
/// Producing the file belongs to the build step; this type only loads and queries it.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct JsonManifest {
  #[serde(default)]
  assets: BTreeMap<String, String>,
}

impl JsonManifest {
  /// Load a manifest from disk.
  pub fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("manifest not found at {}", path.display()))?;
    Self::parse(&content)
  }

  /// Parse a manifest from its JSON text.
  pub fn parse(content: &str) -> Result<Self> {
    serde_json::from_str(content).context("failed to parse asset manifest JSON")
  }

  /// Built path recorded for a logical source, if any.
  pub fn entry(&self, logical_path: &str) -> Option<&str> {
    self.assets.get(logical_path).map(String::as_str)
  }

  /// Number of entries in the manifest.
  pub fn len(&self) -> usize {
    self.assets.len()
  }

  /// Returns `true` when the manifest holds no entries.
  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }
}

impl From<BTreeMap<String, String>> for JsonManifest {
  fn from(assets: BTreeMap<String, String>) -> Self {
    Self { assets }
  }
}

impl ManifestLookup for JsonManifest {
  fn lookup(&self, logical_path: &str) -> Result<Option<String>, LookupError> {
    Ok(self.entry(logical_path).map(str::to_string))
  }
}

//! Collaborator seams between the resolver and its asset backends.
//!
//! The resolver consumes two narrow interfaces: a precomputed manifest lookup and a
//! live pipeline lookup. Both signal a missing entry with `Ok(None)` rather than an
//! error, so the decision tree can fall through to the next strategy; an `Err` means
//! the collaborator itself failed and is propagated to the caller untouched.

use std::collections::{BTreeMap, HashMap};

/// Error raised by a lookup collaborator for faults other than a missing entry.
pub type LookupError = Box<dyn std::error::Error + Send + Sync>;

/// Resolved asset handle returned by a live pipeline lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineAsset {
    /// Source-relative name of the asset before any fingerprinting.
    pub logical_path: String,
    /// Physical path embedding the content digest, used for cache busting.
    pub digest_path: String,
    /// Content digest value of the compiled asset.
    pub digest: String,
}

/// Lookup against a precomputed manifest mapping logical names to built paths.
pub trait ManifestLookup {
    /// Resolved physical path for the logical source, or `None` when the manifest has
    /// no entry for it.
    fn lookup(&self, logical_path: &str) -> Result<Option<String>, LookupError>;
}

/// Logical-to-physical resolution against a live, possibly uncompiled, asset graph.
pub trait PipelineLookup {
    /// Resolve the source to a concrete pipeline asset, or `None` when unknown.
    ///
    /// Expanding extensionless or partial names into a concrete asset is this
    /// collaborator's concern; the resolver passes the source through as given.
    fn resolve(&self, logical_path: &str) -> Result<Option<PipelineAsset>, LookupError>;
}

impl ManifestLookup for BTreeMap<String, String> {
    fn lookup(&self, logical_path: &str) -> Result<Option<String>, LookupError> {
        Ok(self.get(logical_path).cloned())
    }
}

impl ManifestLookup for HashMap<String, String> {
    fn lookup(&self, logical_path: &str) -> Result<Option<String>, LookupError> {
        Ok(self.get(logical_path).cloned())
    }
}

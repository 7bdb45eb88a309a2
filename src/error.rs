//! Errors surfaced while computing asset paths.

use crate::lookup::LookupError;

/// Errors that can occur while computing an asset path.
///
/// A missing manifest or pipeline entry is not an error; it falls through to the next
/// resolution strategy. These variants cover configuration faults and collaborator
/// failures, both of which abort the single call without touching resolver state.
#[derive(Debug)]
pub enum ResolveError {
  /// The source string was empty; nothing can be resolved.
  EmptySource,
  /// A digested path was explicitly requested but no manifest or pipeline lookup
  /// is configured.
  NoLookupBackend,
  /// The manifest collaborator failed for a reason other than a missing entry.
  Manifest {
    /// Logical path that was being resolved.
    path: String,
    /// Source error reported by the collaborator.
    source: LookupError,
  },
  /// The pipeline collaborator failed for a reason other than a missing entry.
  Pipeline {
    /// Logical path that was being resolved.
    path: String,
    /// Source error reported by the collaborator.
    source: LookupError,
  },
}

impl std::fmt::Display for ResolveError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::EmptySource => write!(f, "cannot resolve an empty asset source"),
      Self::NoLookupBackend => write!(
        f,
        "a digested path was requested but no manifest or pipeline lookup is configured"
      ),
      Self::Manifest { path, source } => {
        write!(f, "manifest lookup failed for {path}: {source}")
      }
      Self::Pipeline { path, source } => {
        write!(f, "pipeline lookup failed for {path}: {source}")
      }
    }
  }
}

impl std::error::Error for ResolveError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Manifest { source, .. } | Self::Pipeline { source, .. } => {
        let source: &(dyn std::error::Error + 'static) = &**source;
        Some(source)
      }
      _ => None,
    }
  }
}

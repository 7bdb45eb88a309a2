#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lookup;
pub mod manifest;
pub mod resolve;
pub mod resolver;

pub use config::ResolverSettings;
pub use error::ResolveError;
pub use lookup::{LookupError, ManifestLookup, PipelineAsset, PipelineLookup};
pub use manifest::JsonManifest;
pub use resolver::{AssetResolver, ResolveOptions};

//! The asset path decision tree and its template-facing entry points.

use crate::config::ResolverSettings;
use crate::error::ResolveError;
use crate::lookup::{ManifestLookup, PipelineLookup};
use crate::resolve::{
    apply_default_extension, is_external_reference, join_public_prefix,
    make_filesystem_asset_path, make_pipeline_asset_path,
};

/// Per-call resolution options.
///
/// Every field defaults to the process-wide configuration when unset; explicit values
/// always win.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Default extension appended when the source has none.
    pub ext: Option<String>,
    /// Subdirectory prepended for assets the pipeline does not manage.
    pub dir: Option<String>,
    /// Whether to prefer the digested path; unset falls back to the global default.
    pub digest: Option<bool>,
    /// Mount prefix override for this call.
    pub prefix: Option<String>,
    /// Append the `?body=1` query flag to pipeline results.
    pub body: bool,
}

impl ResolveOptions {
    /// Fill unset `dir` and `ext` fields with the provided defaults.
    ///
    /// Caller-supplied values always take precedence; the derived entry points use this
    /// to layer their conventions under whatever the caller passed.
    pub fn with_defaults(mut self, dir: Option<&str>, ext: Option<&str>) -> Self {
        if self.dir.is_none() {
            self.dir = dir.map(str::to_string);
        }
        if self.ext.is_none() {
            self.ext = ext.map(str::to_string);
        }
        self
    }
}

/// Computes public URLs for static assets from a fixed set of collaborators.
///
/// Construct one resolver at startup, attach the manifest and pipeline collaborators
/// that exist in the deployment, and share it by reference. Every call is a pure
/// function of the source, the options and the settings; the resolver never mutates
/// its configuration or collaborator state.
pub struct AssetResolver {
    settings: ResolverSettings,
    manifest: Option<Box<dyn ManifestLookup + Send + Sync>>,
    pipeline: Option<Box<dyn PipelineLookup + Send + Sync>>,
}

impl AssetResolver {
    /// Create a resolver with no lookup collaborators attached.
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            settings,
            manifest: None,
            pipeline: None,
        }
    }

    /// Attach the precompiled manifest collaborator.
    pub fn with_manifest(mut self, manifest: impl ManifestLookup + Send + Sync + 'static) -> Self {
        self.manifest = Some(Box::new(manifest));
        self
    }

    /// Attach the live pipeline collaborator.
    pub fn with_pipeline(mut self, pipeline: impl PipelineLookup + Send + Sync + 'static) -> Self {
        self.pipeline = Some(Box::new(pipeline));
        self
    }

    /// Settings the resolver was configured with.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Compute the public URL for an asset reference.
    ///
    /// External URIs come back untouched. Local references are resolved against the
    /// manifest first and the live pipeline second; when neither collaborator knows
    /// the source the path is composed from the public directory layout alone.
    pub fn asset_path(
        &self,
        source: &str,
        options: &ResolveOptions,
    ) -> Result<String, ResolveError> {
        if source.is_empty() {
            return Err(ResolveError::EmptySource);
        }
        if is_external_reference(source) {
            return Ok(source.to_string());
        }

        let source = apply_default_extension(source, options.ext.as_deref());

        if options.digest == Some(true) && self.manifest.is_none() && self.pipeline.is_none() {
            return Err(ResolveError::NoLookupBackend);
        }

        if let Some(manifest) = self.manifest.as_deref() {
            match manifest.lookup(&source) {
                Ok(Some(entry)) => {
                    return Ok(join_public_prefix(self.effective_prefix(options), &entry));
                }
                Ok(None) => {}
                Err(err) => {
                    return Err(ResolveError::Manifest {
                        path: source,
                        source: err,
                    });
                }
            }
        }

        if let Some(pipeline) = self.pipeline.as_deref() {
            match pipeline.resolve(&source) {
                Ok(Some(asset)) => {
                    return Ok(make_pipeline_asset_path(
                        &asset,
                        options.digest.unwrap_or(self.settings.digest),
                        self.effective_prefix(options),
                        options.body,
                    ));
                }
                Ok(None) => {}
                Err(err) => {
                    return Err(ResolveError::Pipeline {
                        path: source,
                        source: err,
                    });
                }
            }
        }

        Ok(make_filesystem_asset_path(&source, options.dir.as_deref()))
    }

    /// Resolve a script reference, defaulting to the `javascripts` directory and the
    /// `js` extension.
    pub fn javascript_path(
        &self,
        source: &str,
        options: &ResolveOptions,
    ) -> Result<String, ResolveError> {
        let options = options.clone().with_defaults(Some("javascripts"), Some("js"));
        self.asset_path(source, &options)
    }

    /// Resolve a stylesheet reference, defaulting to the `stylesheets` directory and
    /// the `css` extension.
    pub fn stylesheet_path(
        &self,
        source: &str,
        options: &ResolveOptions,
    ) -> Result<String, ResolveError> {
        let options = options.clone().with_defaults(Some("stylesheets"), Some("css"));
        self.asset_path(source, &options)
    }

    /// Resolve an image reference, defaulting to the `images` directory.
    pub fn image_path(
        &self,
        source: &str,
        options: &ResolveOptions,
    ) -> Result<String, ResolveError> {
        let options = options.clone().with_defaults(Some("images"), None);
        self.asset_path(source, &options)
    }

    fn effective_prefix<'a>(&'a self, options: &'a ResolveOptions) -> &'a str {
        options.prefix.as_deref().unwrap_or(&self.settings.prefix)
    }
}

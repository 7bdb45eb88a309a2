//! Command line helper for inspecting how asset references resolve.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use asset_path_resolver::{AssetResolver, JsonManifest, ResolveOptions, ResolverSettings};

/// Resolve asset references the way template helpers would.
#[derive(Debug, Parser)]
#[command(name = "asset_paths", version, about)]
struct Cli {
    /// Settings JSON file; when omitted, discovered from the current directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Manifest JSON file mapping logical paths to built paths.
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Mount prefix override.
    #[arg(long)]
    prefix: Option<String>,
    /// Prefer digested paths for pipeline-managed assets.
    #[arg(long)]
    digest: bool,
    /// Default subdirectory for filesystem assets.
    #[arg(long)]
    dir: Option<String>,
    /// Default extension appended to extensionless sources.
    #[arg(long)]
    ext: Option<String>,
    /// Append the body-only query flag to pipeline results.
    #[arg(long)]
    body: bool,
    /// Verify that resolved local paths exist under the configured public directory.
    #[arg(long)]
    check: bool,
    /// Asset references to resolve.
    #[arg(required = true)]
    sources: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => ResolverSettings::from_path(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => ResolverSettings::discover(Path::new(".")),
    };
    let public_root = PathBuf::from(&settings.public_path);

    let mut resolver = AssetResolver::new(settings);
    if let Some(path) = &cli.manifest {
        resolver = resolver.with_manifest(JsonManifest::load(path)?);
    }

    let options = ResolveOptions {
        ext: cli.ext.clone(),
        dir: cli.dir.clone(),
        digest: cli.digest.then_some(true),
        prefix: cli.prefix.clone(),
        body: cli.body,
    };

    let mut missing = 0usize;
    for source in &cli.sources {
        let resolved = resolver
            .asset_path(source, &options)
            .with_context(|| format!("failed to resolve {source}"))?;

        if cli.check && is_local_path(&resolved) {
            let relative = resolved.split('?').next().unwrap_or_default();
            let candidate = public_root.join(relative.trim_start_matches('/'));
            if candidate.exists() {
                println!("{source} -> {resolved}");
            } else {
                missing += 1;
                eprintln!(
                    "{source} -> {resolved} (missing under {})",
                    public_root.display()
                );
            }
        } else {
            println!("{source} -> {resolved}");
        }
    }

    Ok(if missing == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// External references resolve to themselves and have nothing to verify on disk.
fn is_local_path(resolved: &str) -> bool {
    resolved.starts_with('/') && !resolved.starts_with("//")
}

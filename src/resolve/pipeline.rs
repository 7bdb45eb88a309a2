use crate::lookup::PipelineAsset;

/// Compose the public path for an asset the pipeline resolved.
///
/// The digested path is chosen when `digest` is set so that browsers re-fetch the
/// asset whenever its content hash changes; the plain logical path is used otherwise.
/// The `body` flag appends the query string that asks the pipeline server for the
/// asset body without its required dependencies.
pub fn make_pipeline_asset_path(
    asset: &PipelineAsset,
    digest: bool,
    prefix: &str,
    body: bool,
) -> String {
    let chosen = if digest {
        &asset.digest_path
    } else {
        &asset.logical_path
    };

    let mut path = join_public_prefix(prefix, chosen);
    if body {
        path.push_str("?body=1");
    }
    path
}

/// Join the mount prefix and an asset path with exactly one separating slash.
pub(crate) fn join_public_prefix(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

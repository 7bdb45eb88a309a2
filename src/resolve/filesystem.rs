/// Compose the public path for an asset served straight from the public directory.
///
/// Absolute sources keep their own directory layout and are only slash-normalised;
/// relative sources are mounted under the default subdirectory when one is configured.
/// The result always begins with a single `/` and never consults manifest or pipeline
/// state.
pub fn make_filesystem_asset_path(source: &str, dir: Option<&str>) -> String {
    let composed = if source.starts_with('/') {
        source.to_string()
    } else {
        match dir {
            Some(dir) => format!("/{dir}/{source}"),
            None => format!("/{source}"),
        }
    };
    collapse_duplicate_slashes(&composed)
}

fn collapse_duplicate_slashes(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}

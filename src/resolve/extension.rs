use std::path::Path;

/// Append the default extension to a source that does not already carry one.
///
/// The returned value is what every downstream lookup sees; the original reference the
/// caller passed is never modified. Sources that already end in an extension pass
/// through unchanged, as do calls without a default configured.
pub fn apply_default_extension(source: &str, ext: Option<&str>) -> String {
    match ext {
        Some(ext) if Path::new(source).extension().is_none() => format!("{source}.{ext}"),
        _ => source.to_string(),
    }
}

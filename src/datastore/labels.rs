use once_cell::sync::Lazy;
use regex::Regex;

static NON_MACHINE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_]+").expect("valid pattern"));

/// Turns a human column label into a machine name: lowercase, with every run
/// of characters outside `[a-z0-9_]` collapsed into one underscore. A label
/// with no usable characters at all is kept lowercased as it is.
pub fn machine_name(label: &str) -> String {
    let lowered = label.to_lowercase();
    let collapsed = NON_MACHINE_CHARS.replace_all(&lowered, "_");
    let trimmed = collapsed.trim_matches('_');

    if trimmed.is_empty() {
        lowered
    } else {
        trimmed.to_string()
    }
}

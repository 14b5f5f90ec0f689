use crate::flow::Flow;

/// Lowercases `value` and collapses every run of characters outside
/// `a-z0-9` into a single hyphen, trimming hyphens at both ends. Returns
/// `fallback` when nothing survives.
pub fn slugify(value: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Suggested download filename for a flow's exported document: the slug of
/// its name, or its id when the name is empty, with a `.yaml` extension.
pub fn export_filename(flow: &Flow) -> String {
    let base = if !flow.name.is_empty() {
        flow.name.as_str()
    } else if !flow.id.is_empty() {
        flow.id.as_str()
    } else {
        "flow"
    };
    format!("{}.yaml", slugify(base, "flow"))
}

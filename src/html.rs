//! HTML escaping helpers

/// Escape a value for use inside a double-quoted HTML attribute or as text
pub fn escape_attr(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render a class attribute value from a base class and optional extras
pub fn class_list<'a>(base: &str, extras: impl IntoIterator<Item = &'a str>) -> String {
    let mut classes = base.to_string();
    for extra in extras {
        let extra = extra.trim();
        if extra.is_empty() {
            continue;
        }
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(extra);
    }
    escape_attr(&classes)
}

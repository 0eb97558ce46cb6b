//! Shared string utilities.

/// Return the last component of a `/`-separated path, ignoring trailing
/// slashes (e.g., "resources/js/app.js" -> "app.js").
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // "/" and "" have no last component
        return trimmed;
    }
    match trimmed.rfind('/') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Convert a string to camelCase (e.g., "get_js_entries" -> "getJsEntries")
pub fn to_camel_case(s: &str) -> String {
    let mut parts = s.split('_').filter(|p| !p.is_empty());
    let mut result = parts.next().map(str::to_lowercase).unwrap_or_default();
    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            result.extend(c.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(basename("resources/js/app.js"), "app.js");
        assert_eq!(basename("app.js"), "app.js");
        assert_eq!(basename("resources/images/"), "images");
        assert_eq!(basename("/abs/path/logo.svg"), "logo.svg");
        assert_eq!(basename("_shared.a1b2.js"), "_shared.a1b2.js");
        assert_eq!(basename("/"), "");
        assert_eq!(basename(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("get_js_entries"), "getJsEntries");
        assert_eq!(to_camel_case("get_generated_date"), "getGeneratedDate");
        assert_eq!(to_camel_case("hello"), "hello");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_camel_case_skips_empty_segments() {
        assert_eq!(to_camel_case("get__css_entries"), "getCssEntries");
        assert_eq!(to_camel_case("_private"), "private");
    }
}

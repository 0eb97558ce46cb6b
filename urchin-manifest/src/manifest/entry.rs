use serde::{Deserialize, Deserializer};

/// A single manifest.json entry, keyed by its original module path.
///
/// Keys Vite emits that the helper has no use for (`imports`, `assets`,
/// `isDynamicEntry`, `name`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Versioned output path, relative to the asset root.
    pub file: String,

    /// Original source path. Only its presence matters: it marks the entry
    /// as a directly referenceable asset.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub src: Option<String>,

    /// Whether the entry is a build entry point.
    #[serde(default)]
    pub is_entry: bool,

    /// CSS files emitted for this entry point.
    #[serde(default)]
    pub css: Vec<String>,

    /// Keys of other manifest entries this entry may load lazily.
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
}

impl ManifestEntry {
    /// Create an entry with only its output file set.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Mark the entry as a source asset.
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Mark the entry as an entry point.
    pub fn entry_point(mut self) -> Self {
        self.is_entry = true;
        self
    }

    /// Add a CSS file.
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css.push(css.into());
        self
    }

    /// Add a dynamic import reference.
    pub fn with_dynamic_import(mut self, key: impl Into<String>) -> Self {
        self.dynamic_imports.push(key.into());
        self
    }

    /// Whether the entry carries a `src` field.
    pub fn has_src(&self) -> bool {
        self.src.is_some()
    }
}

/// A present `src` key counts even when its value is `null`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(
        Option::<String>::deserialize(deserializer)?.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let entry: ManifestEntry = serde_json::from_str(
            r#"{
                "file": "main.abc123.js",
                "src": "main.js",
                "isEntry": true,
                "css": ["main.def456.css"],
                "dynamicImports": ["lazy.js"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            entry,
            ManifestEntry::new("main.abc123.js")
                .with_src("main.js")
                .entry_point()
                .with_css("main.def456.css")
                .with_dynamic_import("lazy.js")
        );
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let entry: ManifestEntry = serde_json::from_str(r#"{"file": "chunk.js"}"#).unwrap();

        assert_eq!(entry.file, "chunk.js");
        assert!(!entry.has_src());
        assert!(!entry.is_entry);
        assert!(entry.css.is_empty());
        assert!(entry.dynamic_imports.is_empty());
    }

    #[test]
    fn test_null_src_still_counts_as_present() {
        let entry: ManifestEntry =
            serde_json::from_str(r#"{"file": "logo.svg", "src": null}"#).unwrap();
        assert!(entry.has_src());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let entry: ManifestEntry = serde_json::from_str(
            r#"{"file": "a.js", "imports": ["_b.js"], "isDynamicEntry": true, "name": "a"}"#,
        )
        .unwrap();
        assert_eq!(entry, ManifestEntry::new("a.js"));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = serde_json::from_str::<ManifestEntry>(r#"{"src": "a.js"}"#);
        assert!(result.is_err());
    }
}

//! PHP naming rules.

use eyre::{Result, bail};

/// Validate a PHP namespace and return it in canonical form.
///
/// A single leading `\` (fully-qualified form) is accepted and dropped. Every
/// `\`-separated segment must be a PHP identifier: a letter or underscore
/// followed by letters, digits or underscores.
pub fn validate_namespace(namespace: &str) -> Result<String> {
    let trimmed = namespace.strip_prefix('\\').unwrap_or(namespace);
    if trimmed.is_empty() {
        bail!("namespace must not be empty");
    }

    for segment in trimmed.split('\\') {
        if !is_identifier(segment) {
            bail!(
                "invalid namespace '{}': '{}' is not a valid PHP identifier",
                namespace,
                segment
            );
        }
    }

    Ok(trimmed.to_string())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

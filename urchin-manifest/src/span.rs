//! Helpers for locating positions inside the raw manifest text.

use miette::SourceSpan;

/// Convert a 1-based line/column pair (as reported by serde_json) into a
/// byte offset into `src`.
///
/// A column of 0 points at the start of the line. Returns `None` when the
/// line is past the end of the source.
pub(crate) fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut line_start = 0;
    for _ in 1..line {
        let newline = src[line_start..].find('\n')?;
        line_start += newline + 1;
    }

    let line_len = src[line_start..].find('\n').unwrap_or(src.len() - line_start);
    let offset = line_start + column.saturating_sub(1).min(line_len);
    Some(floor_char_boundary(src, offset))
}

/// A one-character span at `offset`, or an empty span at end of input.
pub(crate) fn point(src: &str, offset: usize) -> SourceSpan {
    let len = src[offset..].chars().next().map_or(0, char::len_utf8);
    SourceSpan::from((offset, len))
}

/// Find the span of `name` inside the `dynamicImports` array of the entry
/// keyed by `importer`.
///
/// This is a textual search: it looks for the importer's key, then the next
/// `"dynamicImports"` key, then the quoted name after it. No span is better
/// than a wrong one, so any miss returns `None`.
pub(crate) fn find_dynamic_import(src: &str, importer: &str, name: &str) -> Option<SourceSpan> {
    let quoted_name = quote(name)?;

    let entry_start = find_key(src, &quote(importer)?)?;
    let imports_start =
        entry_start + src[entry_start..].find("\"dynamicImports\"")? + "\"dynamicImports\"".len();
    let array_end = imports_start + src[imports_start..].find(']')?;
    let name_pos = imports_start + src[imports_start..array_end].find(&quoted_name)?;

    // Skip the opening quote so the label sits on the name itself
    Some(SourceSpan::from((name_pos + 1, quoted_name.len() - 2)))
}

/// Locate a quoted object key, tolerating whitespace before its colon.
fn find_key(src: &str, key: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(rel) = src[search_from..].find(key) {
        let pos = search_from + rel;
        let after = src[pos + key.len()..].trim_start();
        if after.starts_with(':') {
            return Some(pos);
        }
        search_from = pos + key.len();
    }
    None
}

/// JSON-quote a string the way it would appear in the manifest.
fn quote(s: &str) -> Option<String> {
    serde_json::to_string(s).ok()
}

fn floor_char_boundary(src: &str, mut offset: usize) -> usize {
    while offset > 0 && !src.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

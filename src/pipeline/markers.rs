//! Marker protocol — lossless location and replacement of the embedded
//! content region inside an assembled artifact.
//!
//! The start/end markers are literal tokens that legitimately generated text
//! never contains. Extraction is "leftmost start, first end after it".

use std::sync::LazyLock;

use regex::Regex;

/// Opens the embedded content region.
pub const CONTENT_START: &str = "/* UI_CONTENT_START */";
/// Closes the embedded content region.
pub const CONTENT_END: &str = "/* UI_CONTENT_END */";

/// Canonical name of the content function.
pub const CONTENT_FN: &str = "UIContent";
/// Name of the top-level shell function in an assembled artifact.
pub const SHELL_FN: &str = "GeneratedUI";

/// Legacy artifacts predate the markers; their content is recovered from the
/// function block itself.
static LEGACY_CONTENT_FN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)function\s+UIContent\s*\(\)\s*\{(.*?)\n\}").expect("static regex"));

/// Extract the raw content region between the markers, if both are present.
#[must_use]
pub fn extract_content(artifact: &str) -> Option<&str> {
    let start = artifact.find(CONTENT_START)?;
    let after = start + CONTENT_START.len();
    let end = artifact[after..].find(CONTENT_END)?;
    Some(&artifact[after..after + end])
}

/// Replace the marked content region with `content`, keeping everything
/// outside the markers byte-identical. Returns `None` if the artifact has no
/// marked region.
#[must_use]
pub fn splice_content(artifact: &str, content: &str) -> Option<String> {
    let start = artifact.find(CONTENT_START)?;
    let after = start + CONTENT_START.len();
    let end = after + artifact[after..].find(CONTENT_END)?;
    Some(format!("{}\n{}\n{}", &artifact[..after], content.trim(), &artifact[end..]))
}

/// Recover the content function from a previously assembled artifact, in
/// `export default` form, to use as modification-mode context.
///
/// Prefers the marked region; falls back to legacy function-block extraction;
/// passes unrecognized text through unchanged.
#[must_use]
pub fn unwrap_previous(artifact: &str) -> String {
    if let Some(region) = extract_content(artifact) {
        return region
            .trim()
            .replace("function UIContent", "export default function UIContent");
    }

    if let Some(caps) = LEGACY_CONTENT_FN.captures(artifact) {
        let body = caps.get(1).map_or("", |m| m.as_str());
        return format!("export default function UIContent() {{{body}\n}}");
    }

    artifact.to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(content: &str) -> String {
        format!("shell-head\n{CONTENT_START}\n{content}\n{CONTENT_END}\nshell-tail")
    }

    #[test]
    fn extract_returns_region_between_markers() {
        let art = artifact("function UIContent() { return <Button label=\"Go\" />; }");
        let region = extract_content(&art).unwrap();
        assert!(region.contains("function UIContent"));
        assert!(!region.contains("shell-head"));
        assert!(!region.contains("shell-tail"));
    }

    #[test]
    fn extract_uses_leftmost_start_first_end() {
        let art = format!("{CONTENT_START}one{CONTENT_END}{CONTENT_START}two{CONTENT_END}");
        assert_eq!(extract_content(&art), Some("one"));
    }

    #[test]
    fn extract_missing_markers_is_none() {
        assert!(extract_content("function UIContent() {}").is_none());
        let start_only = format!("{CONTENT_START} dangling");
        assert!(extract_content(&start_only).is_none());
    }

    #[test]
    fn splice_preserves_outside_bytes() {
        let art = artifact("old content");
        let spliced = splice_content(&art, "new content").unwrap();
        assert!(spliced.starts_with("shell-head\n"));
        assert!(spliced.ends_with("\nshell-tail"));
        assert_eq!(extract_content(&spliced).map(str::trim), Some("new content"));
    }

    #[test]
    fn splice_without_markers_is_none() {
        assert!(splice_content("no markers here", "x").is_none());
    }

    #[test]
    fn unwrap_prefers_marked_region() {
        let art = artifact("function UIContent() { return <Card title=\"X\" />; }");
        let unwrapped = unwrap_previous(&art);
        assert!(unwrapped.starts_with("export default function UIContent"));
        assert!(!unwrapped.contains("shell-head"));
    }

    #[test]
    fn unwrap_falls_back_to_legacy_function_block() {
        let legacy = "function UIContent() {\n  return <Input />;\n}\nexport default GeneratedUI;";
        let unwrapped = unwrap_previous(legacy);
        assert!(unwrapped.starts_with("export default function UIContent() {"));
        assert!(unwrapped.contains("return <Input />;"));
    }

    #[test]
    fn unwrap_passes_unrecognized_text_through() {
        assert_eq!(unwrap_previous("just some text"), "just some text");
    }
}

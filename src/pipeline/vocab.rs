//! Fixed component vocabulary.
//!
//! The closed set of capitalized tags a content artifact may reference. The
//! validator rejects anything outside it, and the preview registry implements
//! exactly the renderable subset.

/// Components the content synthesizer may emit directly.
pub const CONTENT_COMPONENTS: &[&str] = &["Button", "Card", "Input", "Table", "Modal", "Chart"];

/// Full whitelist for validation: content components plus the shell-owned
/// names that appear in assembled artifacts.
pub const ALLOWED_COMPONENTS: &[&str] = &[
    "Button",
    "Card",
    "Input",
    "Table",
    "Modal",
    "Sidebar",
    "Navbar",
    "Chart",
    "UIContent",
    "GeneratedUI",
];

#[must_use]
pub fn is_allowed(name: &str) -> bool {
    ALLOWED_COMPONENTS.contains(&name)
}

//! Layout assembler — deterministic shell wrapping.
//!
//! DESIGN
//! ======
//! No LLM calls, no dynamic styling. Wraps the validated content inside one of
//! two fixed shells chosen by the plan's layout, injects sidebar/navbar data
//! from the plan, and embeds the content between the markers so it can be
//! re-extracted and re-substituted losslessly. Total function: any internal
//! failure is swallowed and replaced by a minimal renderable error shell.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::markers::{CONTENT_END, CONTENT_START};
use super::plan::{Layout, Plan};

static EXPORT_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    // Tolerant of missing parentheses and line breaks in the wrapper.
    Regex::new(r"export\s+default\s+function\s+(?:UIContent|GeneratedUI)(?:\s*\([^)]*\))?").expect("static regex")
});

/// Strip any `export default` wrapper and re-normalize to the canonical
/// `function UIContent()` form. Idempotent.
#[must_use]
pub fn sanitize_content(code: &str) -> String {
    EXPORT_WRAPPER
        .replace_all(code, "function UIContent()")
        .trim()
        .to_string()
}

/// Wrap content in the shell selected by the plan. Always returns renderable
/// text — assembly failures degrade to a fixed error shell and are never
/// propagated.
#[must_use]
pub fn assemble(plan: &Plan, content: &str) -> String {
    match assemble_inner(plan, content) {
        Ok(code) => code,
        Err(e) => {
            warn!(error = %e, "designer: assembly failed, emitting error shell");
            error_shell()
        }
    }
}

fn assemble_inner(plan: &Plan, content: &str) -> Result<String, serde_json::Error> {
    let cleaned = sanitize_content(content);
    let pattern = plan.layout_pattern.class_suffix();

    let content_container = format!("<div className=\"layout-{pattern}\">\n          <UIContent />\n        </div>");

    let shell = match plan.layout {
        Layout::Centered => format!(
            "<div className=\"component-centered-wrapper\">\n        {content_container}\n    </div>"
        ),
        Layout::Dashboard => {
            let sidebar_items = serde_json::to_string(&plan.sidebar)?;
            let navbar_links = serde_json::to_string(&plan.navbar)?;
            format!(
                "<div className=\"component-app-wrapper\">\n      \
                 <Sidebar items={{{sidebar_items}}} />\n      \
                 <div className=\"component-main-content\">\n        \
                 <Navbar links={{{navbar_links}}} />\n        \
                 <div className=\"component-page-content\">\n          \
                 {content_container}\n        \
                 </div>\n      \
                 </div>\n    \
                 </div>"
            )
        }
    };

    // If sanitization produced nothing, the shell still renders (nothing)
    // instead of throwing at preview time.
    let embedded = if cleaned.is_empty() {
        "function UIContent() { return <UIContentFallback />; }".to_string()
    } else {
        cleaned
    };

    Ok(format!(
        "function UIContentFallback() {{\n  return null;\n}}\n\n\
         /* --- THE CONTENT COMPONENT --- */\n\
         {CONTENT_START}\n{embedded}\n{CONTENT_END}\n\n\
         export default function GeneratedUI() {{\n  return (\n    {shell}\n  );\n}}"
    ))
}

/// Guaranteed-renderable minimal shell: no markers, no navigation data.
fn error_shell() -> String {
    "export default function GeneratedUI() {\n  return (\n    \
     <div className=\"component-app-wrapper\">\n      \
     <div className=\"component-main-content\">\n        \
     <div className=\"component-page-content\">\n          \
     <div>Error rendering UI</div>\n        \
     </div>\n      \
     </div>\n    \
     </div>\n  );\n}"
        .to_string()
}

#[cfg(test)]
#[path = "designer_test.rs"]
mod tests;

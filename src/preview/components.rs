//! Fixed leaf component implementations for the preview renderer.
//!
//! DESIGN
//! ======
//! Each entry turns an attribute map plus pre-rendered child HTML into the
//! markup the client stylesheet targets (`component-*` class names). This is
//! the closed world the evaluator resolves capitalized tags against; nothing
//! generated at runtime can extend it.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use serde_json::Value;

/// Evaluated attributes of one element.
pub type AttrMap = HashMap<String, Value>;

/// Renders one component: attributes + child HTML in, HTML out.
pub type ComponentFn = fn(&AttrMap, &str) -> String;

/// The component registry. Keys are the capitalized tag names the parser
/// produces.
pub static REGISTRY: LazyLock<HashMap<&'static str, ComponentFn>> = LazyLock::new(|| {
    let mut m: HashMap<&'static str, ComponentFn> = HashMap::new();
    m.insert("Button", button);
    m.insert("Card", card);
    m.insert("Input", input);
    m.insert("Table", table);
    m.insert("Modal", modal);
    m.insert("Chart", chart);
    m.insert("Sidebar", sidebar);
    m.insert("Navbar", navbar);
    m
});

/// HTML-escape text content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// ATTRIBUTE HELPERS
// =============================================================================

/// A string attribute, rendering numbers and booleans as text. Objects and
/// arrays degrade to the empty string.
fn text_attr(attrs: &AttrMap, name: &str) -> String {
    match attrs.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn array_attr<'a>(attrs: &'a AttrMap, name: &str) -> &'a [Value] {
    match attrs.get(name) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

fn object_text(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// =============================================================================
// LEAF COMPONENTS
// =============================================================================

fn button(attrs: &AttrMap, children: &str) -> String {
    let label = text_attr(attrs, "label");
    let inner = if label.is_empty() { children.to_string() } else { escape_html(&label) };
    let inner = if inner.is_empty() { "Button".to_string() } else { inner };
    format!(r#"<button class="component-button">{inner}</button>"#)
}

fn card(attrs: &AttrMap, children: &str) -> String {
    let title = text_attr(attrs, "title");
    let mut out = String::from(r#"<div class="component-card">"#);
    if !title.is_empty() {
        let _ = write!(out, r#"<div class="component-card-title">{}</div>"#, escape_html(&title));
    }
    let body = if children.is_empty() {
        escape_html(&text_attr(attrs, "content"))
    } else {
        children.to_string()
    };
    let _ = write!(out, r#"<div class="component-card-content">{body}</div></div>"#);
    out
}

fn input(attrs: &AttrMap, _children: &str) -> String {
    let mut out = String::from(r#"<div class="component-input-container">"#);
    let label = text_attr(attrs, "label");
    if !label.is_empty() {
        let _ = write!(out, r#"<label class="component-input-label">{}</label>"#, escape_html(&label));
    }
    let _ = write!(
        out,
        r#"<input class="component-input-field" placeholder="{}" value="{}" /></div>"#,
        escape_html(&text_attr(attrs, "placeholder")),
        escape_html(&text_attr(attrs, "value")),
    );
    out
}

fn table(attrs: &AttrMap, _children: &str) -> String {
    let data = array_attr(attrs, "data");
    let explicit = array_attr(attrs, "columns");

    // Column set: explicit {header, accessor} pairs, else inferred from the
    // keys of the first row with capitalized headers.
    let columns: Vec<(String, String)> = if explicit.is_empty() {
        data.first()
            .and_then(Value::as_object)
            .map(|row| {
                row.keys()
                    .map(|k| {
                        let mut header = k.clone();
                        if let Some(first) = header.get_mut(0..1) {
                            first.make_ascii_uppercase();
                        }
                        (header, k.clone())
                    })
                    .collect()
            })
            .unwrap_or_default()
    } else {
        explicit
            .iter()
            .map(|col| (object_text(col, "header"), object_text(col, "accessor")))
            .collect()
    };

    let mut out = String::from(
        r#"<div class="component-table-container"><table class="component-table"><thead><tr class="component-table-header">"#,
    );
    for (header, _) in &columns {
        let _ = write!(out, r#"<th class="component-table-cell">{}</th>"#, escape_html(header));
    }
    out.push_str("</tr></thead><tbody>");

    if data.is_empty() {
        let _ = write!(
            out,
            r#"<tr><td class="component-table-cell" colspan="{}">No data available</td></tr>"#,
            columns.len().max(1)
        );
    } else {
        for row in data {
            out.push_str(r#"<tr class="component-table-row">"#);
            for (_, accessor) in &columns {
                let _ = write!(
                    out,
                    r#"<td class="component-table-cell">{}</td>"#,
                    escape_html(&object_text(row, accessor))
                );
            }
            out.push_str("</tr>");
        }
    }
    out.push_str("</tbody></table></div>");
    out
}

fn modal(attrs: &AttrMap, children: &str) -> String {
    if attrs.get("isOpen") == Some(&Value::Bool(false)) {
        return String::new();
    }
    format!(
        concat!(
            r#"<div class="component-modal-overlay"><div class="component-modal-content">"#,
            r#"<div class="component-modal-header"><h3 class="component-modal-title">{title}</h3>"#,
            r#"<button class="component-modal-close">&times;</button></div>"#,
            r#"<div class="component-modal-body">{body}</div>"#,
            r#"<div class="component-modal-footer"><button class="component-button">Close</button></div>"#,
            r#"</div></div>"#,
        ),
        title = escape_html(&text_attr(attrs, "title")),
        body = children,
    )
}

fn chart(attrs: &AttrMap, _children: &str) -> String {
    let mut bars = String::new();
    for value in array_attr(attrs, "data") {
        let height = value.as_f64().unwrap_or(0.0).clamp(0.0, 100.0);
        let _ = write!(bars, r#"<div class="component-chart-bar" style="height: {height}%"></div>"#);
    }
    format!(
        concat!(
            r#"<div class="component-chart-container">"#,
            r#"<div class="component-chart-header"><h4 class="component-chart-title">{title}</h4>"#,
            r#"<span class="component-chart-type">{kind}</span></div>"#,
            r#"<div class="component-chart-content"><div class="component-chart-placeholder">"#,
            r#"<div class="component-chart-bars">{bars}</div>"#,
            r#"</div></div></div>"#,
        ),
        title = escape_html(&text_attr(attrs, "title")),
        kind = escape_html(&text_attr(attrs, "type")),
        bars = bars,
    )
}

fn sidebar(attrs: &AttrMap, _children: &str) -> String {
    let mut items = String::new();
    for item in array_attr(attrs, "items") {
        let link = match object_text(item, "link") {
            l if l.is_empty() => "#".to_string(),
            l => l,
        };
        let _ = write!(
            items,
            r#"<li class="component-sidebar-item"><a href="{}" class="component-sidebar-link">{}</a></li>"#,
            escape_html(&link),
            escape_html(&object_text(item, "label")),
        );
    }
    format!(r#"<div class="component-sidebar"><ul class="component-sidebar-list">{items}</ul></div>"#)
}

fn navbar(attrs: &AttrMap, _children: &str) -> String {
    let mut links = String::new();
    for link in array_attr(attrs, "links") {
        let url = match object_text(link, "url") {
            u if u.is_empty() => "#".to_string(),
            u => u,
        };
        let _ = write!(
            links,
            r#"<li class="component-navbar-item"><a href="{}" class="component-navbar-link">{}</a></li>"#,
            escape_html(&url),
            escape_html(&object_text(link, "label")),
        );
    }
    format!(
        concat!(
            r#"<nav class="component-navbar"><div class="component-navbar-brand">{brand}</div>"#,
            r#"<ul class="component-navbar-links">{links}</ul></nav>"#,
        ),
        brand = escape_html(&text_attr(attrs, "brand")),
        links = links,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> AttrMap {
        value.as_object().unwrap().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    #[test]
    fn button_prefers_label_over_children() {
        let html = button(&attrs(json!({"label": "Save"})), "ignored");
        assert_eq!(html, r#"<button class="component-button">Save</button>"#);
    }

    #[test]
    fn card_renders_title_and_children() {
        let html = card(&attrs(json!({"title": "Stats"})), "<b>42</b>");
        assert!(html.contains(r#"<div class="component-card-title">Stats</div>"#));
        assert!(html.contains(r#"<div class="component-card-content"><b>42</b></div>"#));
    }

    #[test]
    fn table_infers_columns_from_first_row() {
        let html = table(&attrs(json!({"data": [{"name": "Ada", "role": "Eng"}]})), "");
        assert!(html.contains(r#"<th class="component-table-cell">Name</th>"#));
        assert!(html.contains(r#"<td class="component-table-cell">Ada</td>"#));
    }

    #[test]
    fn empty_table_shows_placeholder_row() {
        let html = table(&AttrMap::new(), "");
        assert!(html.contains("No data available"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        assert_eq!(modal(&attrs(json!({"isOpen": false})), "body"), "");
        assert!(modal(&attrs(json!({"title": "Hi"})), "body").contains("component-modal-overlay"));
    }

    #[test]
    fn chart_bars_are_clamped_percentages() {
        let html = chart(&attrs(json!({"title": "Load", "type": "bar", "data": [30, 250]})), "");
        assert!(html.contains("height: 30%"));
        assert!(html.contains("height: 100%"));
    }

    #[test]
    fn sidebar_defaults_missing_links_to_hash() {
        let html = sidebar(&attrs(json!({"items": [{"label": "Home"}]})), "");
        assert!(html.contains(r##"<a href="#" class="component-sidebar-link">Home</a>"##));
    }

    #[test]
    fn text_content_is_escaped() {
        let html = button(&attrs(json!({"label": "<script>"})), "");
        assert!(html.contains("&lt;script&gt;"));
    }
}

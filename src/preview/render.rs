//! Artifact evaluation for the preview renderer.
//!
//! DESIGN
//! ======
//! The artifact is a set of plain function declarations. Rendering strips
//! module-syntax noise, indexes every `function Name() { ... }` body, finds
//! the entry function (`GeneratedUI`, else `UIContent`), pulls the returned
//! JSX-like expression out of its body, parses it, and walks the tree.
//! Capitalized tags resolve against locally declared functions first, then
//! the fixed registry; lowercase tags emit plain HTML. A depth cap guards
//! against self-referential declarations.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::markers;
use super::components::{self, AttrMap, REGISTRY};
use super::parse::{self, Attr, AttrValue, Node};

/// Recursion cap for local function expansion.
const MAX_DEPTH: usize = 16;

static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*import\b[^\n]*\n?").unwrap());
static EXPORT_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+default\s+").unwrap());
static FUNCTION_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+([A-Za-z_][A-Za-z0-9_]*)\s*\([^)]*\)\s*\{").unwrap());

/// Render a complete artifact to HTML.
///
/// # Errors
///
/// Returns a descriptive error string when no entry function exists, the
/// returned expression cannot be parsed, or an unknown component is
/// referenced.
pub fn render_artifact(source: &str) -> Result<String, String> {
    let without_imports = IMPORT_LINE.replace_all(source, "");
    let stripped = EXPORT_DEFAULT.replace_all(&without_imports, "");
    let functions = index_functions(&stripped);

    let entry = if functions.contains_key(markers::SHELL_FN) {
        markers::SHELL_FN
    } else if functions.contains_key(markers::CONTENT_FN) {
        markers::CONTENT_FN
    } else {
        return Err(format!("no {} or {} function found", markers::SHELL_FN, markers::CONTENT_FN));
    };

    render_function(entry, &functions, 0)
}

/// Index every top-level `function Name(...) { body }` by name.
fn index_functions(source: &str) -> HashMap<String, String> {
    let mut functions = HashMap::new();
    for caps in FUNCTION_DECL.captures_iter(source) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Some(body) = balanced_block(&source[whole.end() - 1..]) {
            functions.insert(name.as_str().to_string(), body);
        }
    }
    functions
}

/// The contents of a `{ ... }` block starting at the given text's first
/// character (which must be `{`), braces balanced and quote-aware.
fn balanced_block(text: &str) -> Option<String> {
    let mut depth = 0usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in text.char_indices() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => in_string = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[1..idx].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract the expression returned by a function body.
///
/// Handles `return null;`, `return (expr);` and `return expr;`.
fn returned_expr(body: &str) -> Result<Option<String>, String> {
    let Some(pos) = body.find("return") else {
        return Err("function has no return statement".to_string());
    };
    let rest = body[pos + "return".len()..].trim_start();

    if rest.starts_with("null") {
        return Ok(None);
    }
    if let Some(inner) = rest.strip_prefix('(') {
        let mut depth = 1usize;
        for (idx, c) in inner.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(Some(inner[..idx].trim().to_string()));
                    }
                }
                _ => {}
            }
        }
        return Err("unbalanced parentheses in return statement".to_string());
    }

    // Unparenthesized: take everything up to the final semicolon or the end
    // of the body.
    let expr = rest.trim_end().trim_end_matches(';').trim();
    if expr.is_empty() {
        Err("empty return statement".to_string())
    } else {
        Ok(Some(expr.to_string()))
    }
}

/// Render a named local function by evaluating its returned expression.
fn render_function(
    name: &str,
    functions: &HashMap<String, String>,
    depth: usize,
) -> Result<String, String> {
    if depth > MAX_DEPTH {
        return Err(format!("component nesting too deep at <{name}>"));
    }
    let body = functions.get(name).ok_or_else(|| format!("unknown function {name}"))?;
    match returned_expr(body)? {
        None => Ok(String::new()),
        Some(expr) => {
            let tree = parse::parse_node(&expr)?;
            evaluate(&tree, functions, depth)
        }
    }
}

/// Walk one parsed node to HTML.
fn evaluate(node: &Node, functions: &HashMap<String, String>, depth: usize) -> Result<String, String> {
    if depth > MAX_DEPTH {
        return Err("component nesting too deep".to_string());
    }
    match node {
        Node::Text(text) => Ok(components::escape_html(text)),
        // Bare child expressions carry data, not markup. Strings and numbers
        // print; anything else is dropped.
        Node::Expr(expr) => Ok(match serde_json::from_str::<serde_json::Value>(expr) {
            Ok(serde_json::Value::String(s)) => components::escape_html(&s),
            Ok(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }),
        Node::Fragment(children) => render_children(children, functions, depth),
        Node::Element { name, attrs, children } => {
            let children_html = render_children(children, functions, depth)?;

            if name.chars().next().is_some_and(char::is_lowercase) {
                return Ok(html_element(name, attrs, &children_html));
            }
            // Locally declared functions shadow registry components.
            if functions.contains_key(name) {
                return render_function(name, functions, depth + 1);
            }
            match REGISTRY.get(name.as_str()) {
                Some(component) => Ok(component(&eval_attrs(attrs), &children_html)),
                None => Err(format!("unknown component <{name}>")),
            }
        }
    }
}

fn render_children(
    children: &[Node],
    functions: &HashMap<String, String>,
    depth: usize,
) -> Result<String, String> {
    let mut out = String::new();
    for child in children {
        out.push_str(&evaluate(child, functions, depth)?);
    }
    Ok(out)
}

/// Evaluate attributes into JSON values. Expression attributes that are not
/// valid JSON degrade to null rather than failing the render.
fn eval_attrs(attrs: &[Attr]) -> AttrMap {
    let mut map = AttrMap::new();
    for attr in attrs {
        let value = match &attr.value {
            AttrValue::Literal(text) => serde_json::Value::String(text.clone()),
            AttrValue::Bare => serde_json::Value::Bool(true),
            AttrValue::Expr(expr) => {
                serde_json::from_str(expr).unwrap_or(serde_json::Value::Null)
            }
        };
        map.insert(attr.name.clone(), value);
    }
    map
}

/// Emit a plain HTML element. `className` maps to `class`; only literal
/// attribute values are carried through.
fn html_element(name: &str, attrs: &[Attr], children_html: &str) -> String {
    let mut out = format!("<{name}");
    for attr in attrs {
        let html_name = if attr.name == "className" { "class" } else { attr.name.as_str() };
        match &attr.value {
            AttrValue::Literal(text) => {
                let _ = write!(out, r#" {html_name}="{}""#, components::escape_html(text));
            }
            AttrValue::Bare => {
                let _ = write!(out, " {html_name}");
            }
            AttrValue::Expr(_) => {}
        }
    }
    let _ = write!(out, ">{children_html}</{name}>");
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

//! Recursive descent parser for the JSX-like content subset.
//!
//! DESIGN
//! ======
//! The generated artifacts only ever contain a small slice of JSX: elements
//! with string or brace-expression attributes, fragments, text, and embedded
//! `{...}` expressions. This parser covers exactly that slice. Expressions
//! are captured as raw text (quote-aware balanced-brace scanning) and left
//! for the evaluator to interpret; no attempt is made to parse JavaScript.

// =============================================================================
// TREE
// =============================================================================

/// One node of the parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `<Name attr=... >children</Name>` or `<Name ... />`.
    Element { name: String, attrs: Vec<Attr>, children: Vec<Node> },
    /// `<>children</>`.
    Fragment(Vec<Node>),
    /// Literal text between tags, whitespace-collapsed.
    Text(String),
    /// A `{...}` expression, raw and unevaluated.
    Expr(String),
}

/// A single attribute on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// `name="text"` or `name='text'`.
    Literal(String),
    /// `name={expr}`, raw expression text without the outer braces.
    Expr(String),
    /// Valueless attribute, e.g. `disabled`.
    Bare,
}

// =============================================================================
// PARSER
// =============================================================================

/// Parse a single top-level node (element or fragment).
///
/// Trailing whitespace is permitted; any other trailing text is an error.
///
/// # Errors
///
/// Returns a descriptive error string if parsing fails.
pub fn parse_node(input: &str) -> Result<Node, String> {
    let mut parser = Parser { chars: input.chars().collect(), pos: 0 };
    parser.skip_whitespace();
    if !parser.at('<') {
        return Err("expected element or fragment".to_string());
    }
    let node = parser.parse_tag()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(format!("unexpected trailing text at offset {}", parser.pos));
    }
    Ok(node)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn expect(&mut self, c: char) -> Result<(), String> {
        if self.at(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(format!("expected '{c}' at offset {}", self.pos))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Parse a tag opening at the current `<`.
    fn parse_tag(&mut self) -> Result<Node, String> {
        self.expect('<')?;

        // Fragment: <>...</>
        if self.at('>') {
            self.pos += 1;
            let children = self.parse_children()?;
            self.expect('<')?;
            self.expect('/')?;
            self.expect('>')?;
            return Ok(Node::Fragment(children));
        }

        let name = self.parse_identifier()?;
        let attrs = self.parse_attrs()?;

        // Self-closing.
        if self.at('/') {
            self.pos += 1;
            self.expect('>')?;
            return Ok(Node::Element { name, attrs, children: Vec::new() });
        }

        self.expect('>')?;
        let children = self.parse_children()?;
        self.expect('<')?;
        self.expect('/')?;
        let close = self.parse_identifier()?;
        if close != name {
            return Err(format!("mismatched closing tag: expected </{name}>, found </{close}>"));
        }
        self.skip_whitespace();
        self.expect('>')?;
        Ok(Node::Element { name, attrs, children })
    }

    fn parse_identifier(&mut self) -> Result<String, String> {
        let start = self.pos;
        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(format!("expected tag name at offset {}", self.pos));
        }
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            self.pos += 1;
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attrs(&mut self) -> Result<Vec<Attr>, String> {
        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('>' | '/') => return Ok(attrs),
                Some(c) if c.is_ascii_alphabetic() => {
                    let name = self.parse_identifier()?;
                    self.skip_whitespace();
                    let value = if self.at('=') {
                        self.pos += 1;
                        self.skip_whitespace();
                        self.parse_attr_value()?
                    } else {
                        AttrValue::Bare
                    };
                    attrs.push(Attr { name, value });
                }
                Some(c) => return Err(format!("unexpected '{c}' in attribute list")),
                None => return Err("unterminated tag".to_string()),
            }
        }
    }

    fn parse_attr_value(&mut self) -> Result<AttrValue, String> {
        match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c != q) {
                    self.pos += 1;
                }
                let text: String = self.chars[start..self.pos].iter().collect();
                self.expect(q)?;
                Ok(AttrValue::Literal(text))
            }
            Some('{') => Ok(AttrValue::Expr(self.parse_braced_expr()?)),
            _ => Err(format!("expected attribute value at offset {}", self.pos)),
        }
    }

    /// Consume a `{...}` block, returning the inner text. Brace depth is
    /// tracked and braces inside string literals are ignored.
    fn parse_braced_expr(&mut self) -> Result<String, String> {
        self.expect('{')?;
        let start = self.pos;
        let mut depth = 1usize;
        while let Some(c) = self.bump() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(self.chars[start..self.pos - 1].iter().collect());
                    }
                }
                '"' | '\'' | '`' => self.skip_string(c)?,
                _ => {}
            }
        }
        Err("unterminated expression".to_string())
    }

    /// Skip a string literal whose opening quote was just consumed.
    fn skip_string(&mut self, quote: char) -> Result<(), String> {
        while let Some(c) = self.bump() {
            if c == '\\' {
                self.bump();
            } else if c == quote {
                return Ok(());
            }
        }
        Err("unterminated string literal".to_string())
    }

    /// Parse child nodes until a closing tag (`</`) is reached.
    fn parse_children(&mut self) -> Result<Vec<Node>, String> {
        let mut children = Vec::new();
        loop {
            match self.peek() {
                None => return Err("unterminated element".to_string()),
                Some('<') => {
                    if self.chars.get(self.pos + 1) == Some(&'/') {
                        return Ok(children);
                    }
                    children.push(self.parse_tag()?);
                }
                Some('{') => {
                    let expr = self.parse_braced_expr()?;
                    let trimmed = expr.trim();
                    // JSX comments ({/* ... */}) produce no node.
                    if !(trimmed.starts_with("/*") && trimmed.ends_with("*/")) {
                        children.push(Node::Expr(trimmed.to_string()));
                    }
                }
                Some(_) => {
                    if let Some(text) = self.parse_text() {
                        children.push(Node::Text(text));
                    }
                }
            }
        }
    }

    /// Consume literal text up to the next `<` or `{`. Whitespace runs
    /// collapse to a single space; runs containing a newline at either edge
    /// are dropped entirely. Returns `None` for whitespace-only runs.
    fn parse_text(&mut self) -> Option<String> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c != '<' && c != '{') {
            self.pos += 1;
        }
        let raw: String = self.chars[start..self.pos].iter().collect();
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            return None;
        }
        let keep_leading = raw.starts_with(|c: char| c.is_whitespace())
            && !raw[..raw.len() - raw.trim_start().len()].contains('\n');
        let keep_trailing = raw.ends_with(|c: char| c.is_whitespace())
            && !raw[raw.trim_end().len()..].contains('\n');
        let mut text = String::new();
        if keep_leading {
            text.push(' ');
        }
        text.push_str(&collapsed);
        if keep_trailing {
            text.push(' ');
        }
        Some(text)
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

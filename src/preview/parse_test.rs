use super::*;

#[test]
fn parses_self_closing_element() {
    let node = parse_node(r#"<Button label="Go" />"#).unwrap();
    assert_eq!(
        node,
        Node::Element {
            name: "Button".into(),
            attrs: vec![Attr { name: "label".into(), value: AttrValue::Literal("Go".into()) }],
            children: vec![],
        }
    );
}

#[test]
fn parses_nested_elements_and_text() {
    let node = parse_node("<Card title=\"Login\">\n  <Input />\n  Sign in below\n</Card>").unwrap();
    let Node::Element { name, children, .. } = node else { panic!("expected element") };
    assert_eq!(name, "Card");
    assert_eq!(children.len(), 2);
    assert!(matches!(&children[0], Node::Element { name, .. } if name == "Input"));
    assert_eq!(children[1], Node::Text("Sign in below".into()));
}

#[test]
fn parses_fragment() {
    let node = parse_node("<>\n  <Button />\n  <Chart />\n</>").unwrap();
    let Node::Fragment(children) = node else { panic!("expected fragment") };
    assert_eq!(children.len(), 2);
}

#[test]
fn expression_attr_is_captured_raw() {
    let node = parse_node(r##"<Sidebar items={[{"label":"Home","link":"#"}]} />"##).unwrap();
    let Node::Element { attrs, .. } = node else { panic!("expected element") };
    assert_eq!(
        attrs[0].value,
        AttrValue::Expr(r##"[{"label":"Home","link":"#"}]"##.into())
    );
}

#[test]
fn braces_inside_strings_do_not_close_expressions() {
    let node = parse_node(r#"<Button label={"a } b"} />"#).unwrap();
    let Node::Element { attrs, .. } = node else { panic!("expected element") };
    assert_eq!(attrs[0].value, AttrValue::Expr(r#""a } b""#.into()));
}

#[test]
fn bare_attribute_has_no_value() {
    let node = parse_node("<Input disabled />").unwrap();
    let Node::Element { attrs, .. } = node else { panic!("expected element") };
    assert_eq!(attrs[0], Attr { name: "disabled".into(), value: AttrValue::Bare });
}

#[test]
fn child_expressions_become_expr_nodes() {
    let node = parse_node("<Card>{count}</Card>").unwrap();
    let Node::Element { children, .. } = node else { panic!("expected element") };
    assert_eq!(children, vec![Node::Expr("count".into())]);
}

#[test]
fn jsx_comments_are_dropped() {
    let node = parse_node("<Card>{/* placeholder */}<Button /></Card>").unwrap();
    let Node::Element { children, .. } = node else { panic!("expected element") };
    assert_eq!(children.len(), 1);
}

#[test]
fn mismatched_closing_tag_is_an_error() {
    let err = parse_node("<Card><Button /></Modal>").unwrap_err();
    assert!(err.contains("mismatched closing tag"));
}

#[test]
fn unterminated_element_is_an_error() {
    assert!(parse_node("<Card><Button />").is_err());
    assert!(parse_node("<Card").is_err());
}

#[test]
fn trailing_garbage_is_an_error() {
    let err = parse_node("<Button /> extra").unwrap_err();
    assert!(err.contains("trailing"));
}

#[test]
fn lowercase_html_tags_parse_too() {
    let node = parse_node(r#"<div className="layout-grid"><UIContent /></div>"#).unwrap();
    let Node::Element { name, attrs, children } = node else { panic!("expected element") };
    assert_eq!(name, "div");
    assert_eq!(attrs[0].name, "className");
    assert_eq!(children.len(), 1);
}

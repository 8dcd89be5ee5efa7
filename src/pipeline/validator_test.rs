use super::*;
use crate::api::ErrorCode;

#[test]
fn accepts_vocabulary_content() {
    let code = r#"function UIContent(){ return <><Button label="Go"/><Card title="X"><Input/></Card></>; }"#;
    assert_eq!(validate(code), Ok(()));
}

#[test]
fn rejects_empty() {
    assert_eq!(validate(""), Err(ContentViolation::Empty));
    assert_eq!(validate("   \n  "), Err(ContentViolation::Empty));
}

#[test]
fn rejects_import() {
    let code = "import axe from \"axe\";\nfunction UIContent() { return <Button />; }";
    assert_eq!(validate(code), Err(ContentViolation::ForbiddenImport));
}

#[test]
fn rejects_require_call() {
    let code = "const fs = require(\"fs\");\nfunction UIContent() { return <Button />; }";
    assert_eq!(validate(code), Err(ContentViolation::ForbiddenImport));
}

#[test]
fn rejects_inline_style_object() {
    let code = "function UIContent() { return <Card style={{ color: \"red\" }} />; }";
    assert_eq!(validate(code), Err(ContentViolation::InlineStyle));
}

#[test]
fn inline_style_check_tolerates_spacing() {
    let code = "function UIContent() { return <Card style = {{color:\"red\"}} />; }";
    assert_eq!(validate(code), Err(ContentViolation::InlineStyle));
}

#[test]
fn rejects_styled_factory() {
    let code = "const Box = styled.div;\nfunction UIContent() { return <Card />; }";
    assert_eq!(validate(code), Err(ContentViolation::CssInJs));
}

#[test]
fn rejects_backtick_css_block() {
    let code = "const css = `body { margin: 0 }`;\nfunction UIContent() { return <Card />; }";
    assert_eq!(validate(code), Err(ContentViolation::CssInJs));
}

#[test]
fn rejects_unknown_component_by_name() {
    let code = "function UIContent(){ return <Foo/>; }";
    assert_eq!(validate(code), Err(ContentViolation::UnknownComponent("Foo".into())));
}

#[test]
fn reports_first_unknown_component() {
    let code = "function UIContent(){ return <><Widget/><Gadget/></>; }";
    assert_eq!(validate(code), Err(ContentViolation::UnknownComponent("Widget".into())));
}

#[test]
fn rejects_missing_content_fn() {
    let code = "function Dashboard(){ return <Button/>; }";
    assert_eq!(validate(code), Err(ContentViolation::MissingContentFn));
}

#[test]
fn checks_run_in_rule_order() {
    // Both an import and an unknown component: import wins.
    let code = "import x from \"y\";\nfunction UIContent(){ return <Foo/>; }";
    assert_eq!(validate(code), Err(ContentViolation::ForbiddenImport));
}

#[test]
fn lowercase_tags_are_not_vocabulary_checked() {
    let code = "function UIContent(){ return <Card><Button label=\"ok\"/></Card>; }";
    assert_eq!(validate(code), Ok(()));
}

#[test]
fn violation_error_codes() {
    assert_eq!(ContentViolation::ForbiddenImport.error_code(), "E_FORBIDDEN_IMPORT");
    assert_eq!(ContentViolation::InlineStyle.error_code(), "E_INLINE_STYLE");
    assert_eq!(ContentViolation::CssInJs.error_code(), "E_CSS_IN_JS");
    assert_eq!(ContentViolation::UnknownComponent("X".into()).error_code(), "E_UNKNOWN_COMPONENT");
    assert_eq!(ContentViolation::MissingContentFn.error_code(), "E_MISSING_CONTENT_FN");
}

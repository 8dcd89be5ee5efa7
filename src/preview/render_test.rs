use super::*;

const SIMPLE: &str = "function UIContent() {\n  return <Button label=\"Go\" />;\n}";

#[test]
fn renders_content_function_alone() {
    let html = render_artifact(SIMPLE).unwrap();
    assert_eq!(html, r#"<button class="component-button">Go</button>"#);
}

#[test]
fn shell_function_takes_precedence_over_content() {
    let source = "\
function UIContent() {\n  return <Button label=\"inner\" />;\n}\n\
function GeneratedUI() {\n  return (\n    <div className=\"component-app-wrapper\">\n      <UIContent />\n    </div>\n  );\n}";
    let html = render_artifact(source).unwrap();
    assert!(html.starts_with(r#"<div class="component-app-wrapper">"#));
    assert!(html.contains(">inner</button>"));
}

#[test]
fn import_and_export_syntax_is_stripped() {
    let source = "import React from \"react\";\nexport default function UIContent() {\n  return <Card title=\"Hi\"></Card>;\n}";
    let html = render_artifact(source).unwrap();
    assert!(html.contains("component-card-title"));
}

#[test]
fn returning_null_renders_nothing() {
    let html = render_artifact("function UIContent() {\n  return null;\n}").unwrap();
    assert_eq!(html, "");
}

#[test]
fn fragment_children_concatenate() {
    let source = "function UIContent() {\n  return (\n    <>\n      <Button label=\"A\" />\n      <Button label=\"B\" />\n    </>\n  );\n}";
    let html = render_artifact(source).unwrap();
    assert!(html.contains(">A</button>"));
    assert!(html.contains(">B</button>"));
}

#[test]
fn json_expression_attrs_reach_components() {
    let source = r#"function UIContent() {
  return <Sidebar items={[{"label":"Home","link":"/home"}]} />;
}"#;
    let html = render_artifact(source).unwrap();
    assert!(html.contains(r#"<a href="/home" class="component-sidebar-link">Home</a>"#));
}

#[test]
fn local_function_shadows_registry() {
    let source = "\
function Card() {\n  return <Button label=\"custom\" />;\n}\n\
function UIContent() {\n  return <Card />;\n}";
    let html = render_artifact(source).unwrap();
    assert_eq!(html, r#"<button class="component-button">custom</button>"#);
}

#[test]
fn self_recursive_function_hits_depth_cap() {
    let source = "function UIContent() {\n  return <UIContent />;\n}";
    let err = render_artifact(source).unwrap_err();
    assert!(err.contains("too deep"));
}

#[test]
fn unknown_component_is_an_error() {
    let err = render_artifact("function UIContent() {\n  return <Rocket />;\n}").unwrap_err();
    assert!(err.contains("unknown component <Rocket>"));
}

#[test]
fn missing_entry_function_is_an_error() {
    let err = render_artifact("function Helper() {\n  return <Button />;\n}").unwrap_err();
    assert!(err.contains("no GeneratedUI or UIContent function"));
}

#[test]
fn malformed_jsx_is_an_error() {
    assert!(render_artifact("function UIContent() {\n  return <Card><Button /></Modal>;\n}").is_err());
}

#[test]
fn bare_text_and_numeric_expressions_render() {
    let source = "function UIContent() {\n  return <Card title=\"T\">Total: {42}</Card>;\n}";
    let html = render_artifact(source).unwrap();
    assert!(html.contains("Total: 42"));
}

#[test]
fn full_assembled_artifact_renders_end_to_end() {
    let plan = crate::pipeline::plan::parse_plan(
        r##"{
        "layout": "dashboard",
        "layoutPattern": "grid",
        "sidebar": [{"label": "Home", "link": "#"}],
        "navbar": [{"label": "Docs", "url": "#"}],
        "components": []
    }"##,
    )
    .unwrap();
    let artifact = crate::pipeline::designer::assemble(
        &plan,
        "function UIContent() { return <Chart title=\"Load\" type=\"bar\" data={[10, 20]} />; }",
    );

    let html = render_artifact(&artifact).unwrap();
    assert!(html.contains("component-app-wrapper"));
    assert!(html.contains("component-sidebar-link"));
    assert!(html.contains("component-navbar-link"));
    assert!(html.contains("layout-grid"));
    assert!(html.contains("component-chart-bar"));
}

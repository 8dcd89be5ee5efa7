use super::*;
use crate::pipeline::markers;
use crate::pipeline::plan::parse_plan;

fn dashboard_plan() -> Plan {
    parse_plan(
        r##"{
        "layout": "dashboard",
        "layoutPattern": "grid",
        "sidebar": [{"label": "Home", "link": "#"}],
        "navbar": [{"label": "Profile", "url": "#"}],
        "components": []
    }"##,
    )
    .unwrap()
}

fn centered_plan() -> Plan {
    parse_plan(r#"{"layout": "centered", "components": []}"#).unwrap()
}

const CONTENT: &str = "function UIContent() { return <Button label=\"Go\" />; }";

// =========================================================================
// sanitize_content
// =========================================================================

#[test]
fn sanitize_unwraps_export_default() {
    let code = "export default function UIContent() { return <Card />; }";
    assert_eq!(sanitize_content(code), "function UIContent() { return <Card />; }");
}

#[test]
fn sanitize_renames_alternate_export() {
    let code = "export default function GeneratedUI() { return <Card />; }";
    assert_eq!(sanitize_content(code), "function UIContent() { return <Card />; }");
}

#[test]
fn sanitize_tolerates_missing_parens_and_breaks() {
    let code = "export default function UIContent\n{ return <Card />; }";
    assert_eq!(sanitize_content(code), "function UIContent()\n{ return <Card />; }");
}

#[test]
fn sanitize_is_idempotent() {
    let once = sanitize_content("export default function UIContent() { return <Card />; }");
    assert_eq!(sanitize_content(&once), once);
}

// =========================================================================
// assemble — marker discipline
// =========================================================================

#[test]
fn markers_appear_exactly_once_in_order() {
    for plan in [dashboard_plan(), centered_plan()] {
        let artifact = assemble(&plan, CONTENT);
        assert_eq!(artifact.matches(markers::CONTENT_START).count(), 1);
        assert_eq!(artifact.matches(markers::CONTENT_END).count(), 1);
        let start = artifact.find(markers::CONTENT_START).unwrap();
        let end = artifact.find(markers::CONTENT_END).unwrap();
        assert!(start < end);
    }
}

#[test]
fn round_trip_preserves_shell_bytes() {
    let plan = dashboard_plan();
    let artifact = assemble(&plan, CONTENT);
    let region = markers::extract_content(&artifact).unwrap().trim().to_string();
    let reassembled = assemble(&plan, &region);
    assert_eq!(artifact, reassembled);
}

// =========================================================================
// assemble — layout choice
// =========================================================================

#[test]
fn centered_shell_has_no_navigation() {
    let artifact = assemble(&centered_plan(), CONTENT);
    assert!(artifact.contains("component-centered-wrapper"));
    assert!(!artifact.contains("<Sidebar"));
    assert!(!artifact.contains("<Navbar"));
}

#[test]
fn dashboard_shell_has_both_navigation_surfaces() {
    let artifact = assemble(&dashboard_plan(), CONTENT);
    assert!(artifact.contains("component-app-wrapper"));
    assert!(artifact.contains("<Sidebar items="));
    assert!(artifact.contains("<Navbar links="));
    // Plan data is serialized into the shell.
    assert!(artifact.contains(r##"{"label":"Home","link":"#"}"##));
    assert!(artifact.contains(r##"{"label":"Profile","url":"#"}"##));
}

#[test]
fn layout_pattern_tags_the_inner_container() {
    let artifact = assemble(&dashboard_plan(), CONTENT);
    assert!(artifact.contains("layout-grid"));

    let artifact = assemble(&centered_plan(), CONTENT);
    assert!(artifact.contains("layout-stack"));
}

// =========================================================================
// assemble — degradation
// =========================================================================

#[test]
fn empty_content_gets_fallback_function() {
    let artifact = assemble(&centered_plan(), "   ");
    let region = markers::extract_content(&artifact).unwrap();
    assert!(region.contains("return <UIContentFallback />"));
}

#[test]
fn assembled_artifact_declares_shell_and_fallback() {
    let artifact = assemble(&dashboard_plan(), CONTENT);
    assert!(artifact.contains("function UIContentFallback()"));
    assert!(artifact.contains("export default function GeneratedUI()"));
}

#[test]
fn export_wrapped_content_is_normalized_before_embedding() {
    let wrapped = "export default function GeneratedUI() { return <Card />; }";
    let artifact = assemble(&centered_plan(), wrapped);
    let region = markers::extract_content(&artifact).unwrap();
    assert!(region.contains("function UIContent()"));
    assert!(!region.contains("export default"));
}

//! SVG regression tests
//!
//! Pins the exact output for a canonical element so changes to the inset
//! formula, coordinate rounding or document layout show up as diffs.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use smooth_corners::{
    render_svg_with_config, Geometry, RenderConfig, StylePropertyMap, SvgConfig,
};

fn canonical_props() -> StylePropertyMap {
    StylePropertyMap::new().with("--border-width", "2")
}

#[test]
fn test_four_step_squircle_document() {
    // Four samples land on the axes, which keeps every coordinate round.
    let config = RenderConfig::new().with_steps(4);
    let svg = render_svg_with_config(Geometry::new(100.0, 100.0), &canonical_props(), &config);

    assert_snapshot!(svg, @r###"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100">
      <path class="sc-fill" d="M99 51 L49 99 L1 49 L51 1 Z" fill="transparent" stroke="none"/>
      <path class="sc-stroke" d="M99 51 L49 99 L1 49 L51 1 Z" fill="none" stroke="black" stroke-width="2"/>
    </svg>
    "###);
}

#[test]
fn test_compact_document_has_single_line() {
    let config = RenderConfig::new()
        .with_steps(4)
        .with_svg(SvgConfig::new().with_standalone(false).with_pretty_print(false));
    let svg = render_svg_with_config(Geometry::new(100.0, 100.0), &canonical_props(), &config);

    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100">"#,
            r#"<path class="sc-fill" d="M99 51 L49 99 L1 49 L51 1 Z" fill="transparent" stroke="none"/>"#,
            r#"<path class="sc-stroke" d="M99 51 L49 99 L1 49 L51 1 Z" fill="none" stroke="black" stroke-width="2"/>"#,
            "</svg>"
        )
    );
}

#[test]
fn test_default_resolution_vertex_count() {
    let svg = render_svg_with_config(
        Geometry::new(300.0, 120.0),
        &StylePropertyMap::new(),
        &RenderConfig::new(),
    );
    let fill = svg
        .lines()
        .find(|l| l.contains("sc-fill"))
        .expect("fill path");
    assert_eq!(fill.matches('M').count(), 1);
    assert_eq!(fill.matches(" L").count(), 359);
    assert_eq!(fill.matches('Z').count(), 1);
}

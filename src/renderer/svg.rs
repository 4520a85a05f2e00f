//! SVG generation from drawing commands

use log::trace;

use crate::geometry::{Point, Transform};

use super::path::{format_coord, PathData};
use super::{DrawingSurface, SvgConfig};

/// Prefix of the `class` attribute on emitted paths (`sc-fill`, `sc-stroke`)
const CLASS_PREFIX: &str = "sc-";

/// A drawing surface that serialises fills and strokes as SVG `<path>` elements
///
/// Follows canvas semantics: points are mapped through the transform that is
/// current when they are added, non-finite coordinates are dropped, and line
/// widths that are not finite and positive are ignored.
pub struct SvgSurface {
    config: SvgConfig,
    width: f64,
    height: f64,
    transform: Transform,
    fill_style: String,
    stroke_style: String,
    line_width: f64,
    path: PathData,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Create a surface of the given size in user units
    pub fn new(width: f64, height: f64, config: SvgConfig) -> Self {
        Self {
            config,
            width,
            height,
            transform: Transform::identity(),
            fill_style: "black".to_string(),
            stroke_style: "black".to_string(),
            line_width: 1.0,
            path: PathData::new(),
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn coord(&self, v: f64) -> String {
        format_coord(v, self.config.precision)
    }

    /// Number of `<path>` elements emitted so far
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The current path, in surface coordinates
    pub fn current_path(&self) -> &PathData {
        &self.path
    }

    fn push_path(&mut self, kind: &str, paint: String) {
        if self.path.is_empty() {
            return;
        }
        let d = self.path.to_svg_d(self.config.precision);
        trace!("svg {} with {} vertices", kind, self.path.vertex_count());
        self.elements.push(format!(
            r#"{}<path class="{}{}" d="{}"{}/>"#,
            self.indent_str(),
            CLASS_PREFIX,
            kind,
            d,
            paint
        ));
    }

    /// Build the final SVG string
    pub fn finish(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let (w, h) = (self.coord(self.width), self.coord(self.height));
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }

    fn map(&self, x: f64, y: f64) -> Option<Point> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(self.transform.apply(Point::new(x, y)))
    }
}

impl DrawingSurface for SvgSurface {
    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if let Some(p) = self.map(x, y) {
            self.path.move_to(p);
        }
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if let Some(p) = self.map(x, y) {
            self.path.line_to(p);
        }
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_style = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn fill(&mut self) {
        let paint = format!(r#" fill="{}" stroke="none""#, escape_xml(&self.fill_style));
        self.push_path("fill", paint);
    }

    fn stroke(&mut self) {
        let paint = format!(
            r#" fill="none" stroke="{}" stroke-width="{}""#,
            escape_xml(&self.stroke_style),
            self.line_width
        );
        self.push_path("stroke", paint);
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(surface: &mut SvgSurface) {
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(10.0, 0.0);
        surface.line_to(10.0, 10.0);
        surface.close_path();
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"x" onload="y"#), "x&quot; onload=&quot;y");
    }

    #[test]
    fn test_fill_and_stroke_emit_paths() {
        let mut surface = SvgSurface::new(20.0, 20.0, SvgConfig::default());
        triangle(&mut surface);
        surface.set_fill_style("red");
        surface.set_stroke_style("#00f");
        surface.set_line_width(3.0);
        surface.fill();
        surface.stroke();

        let svg = surface.finish();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="20" height="20" viewBox="0 0 20 20""#));
        assert!(svg.contains(
            r#"<path class="sc-fill" d="M0 0 L10 0 L10 10 Z" fill="red" stroke="none"/>"#
        ));
        assert!(svg.contains(r##"fill="none" stroke="#00f" stroke-width="3""##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_transform_applies_to_new_points() {
        let mut surface = SvgSurface::new(20.0, 20.0, SvgConfig::default());
        surface.set_transform(Transform::translate(5.0, 5.0));
        triangle(&mut surface);
        assert_eq!(surface.current_path().to_svg_d(2), "M5 5 L15 5 L15 15 Z");
    }

    #[test]
    fn test_non_finite_points_are_dropped() {
        let mut surface = SvgSurface::new(20.0, 20.0, SvgConfig::default());
        surface.begin_path();
        surface.move_to(f64::NAN, 0.0);
        surface.line_to(1.0, f64::INFINITY);
        surface.close_path();
        surface.fill();
        assert_eq!(surface.element_count(), 0);
    }

    #[test]
    fn test_invalid_line_width_is_ignored() {
        let mut surface = SvgSurface::new(20.0, 20.0, SvgConfig::default());
        surface.set_line_width(4.0);
        surface.set_line_width(0.0);
        surface.set_line_width(-1.0);
        surface.set_line_width(f64::NAN);
        triangle(&mut surface);
        surface.stroke();
        assert!(surface.finish().contains(r#"stroke-width="4""#));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false);
        let mut surface = SvgSurface::new(10.0, 10.0, config);
        triangle(&mut surface);
        surface.fill();
        surface.stroke();
        let svg = surface.finish();
        assert!(!svg.contains('\n'));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"<path class="sc-fill""#));
        assert!(svg.contains(r#"<path class="sc-stroke""#));
    }
}

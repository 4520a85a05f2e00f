//! Path data accumulated by a surface and its SVG `d` serialisation

use crate::geometry::{BoundaryPath, Point};

/// A segment of the current path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Close the current subpath back to its start
    Close,
}

/// An ordered list of segments, possibly several subpaths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed polygon through every point of a boundary
    pub fn from_boundary(path: &BoundaryPath) -> Self {
        let mut data = Self::new();
        for (i, p) in path.iter().enumerate() {
            if i == 0 {
                data.move_to(*p);
            } else {
                data.line_to(*p);
            }
        }
        if !data.is_empty() {
            data.close();
        }
        data
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn move_to(&mut self, p: Point) {
        self.segments.push(PathSegment::MoveTo(p));
    }

    /// Line to `p`; without a current point this starts a subpath instead
    pub fn line_to(&mut self, p: Point) {
        if self.segments.is_empty() {
            self.move_to(p);
        } else {
            self.segments.push(PathSegment::LineTo(p));
        }
    }

    /// Close the current subpath; ignored when there is nothing to close
    pub fn close(&mut self) {
        if matches!(self.segments.last(), None | Some(PathSegment::Close)) {
            return;
        }
        self.segments.push(PathSegment::Close);
    }

    /// Number of vertices (move and line segments)
    pub fn vertex_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| !matches!(s, PathSegment::Close))
            .count()
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self, precision: usize) -> String {
        let mut d = String::new();

        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => {
                    d.push_str(&format!(
                        "M{} {}",
                        format_coord(p.x, precision),
                        format_coord(p.y, precision)
                    ));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!(
                        "L{} {}",
                        format_coord(p.x, precision),
                        format_coord(p.y, precision)
                    ));
                }
                PathSegment::Close => d.push('Z'),
            }
        }

        d
    }
}

/// Round to `precision` decimals and print without trailing zeros
///
/// Negative zero prints as `0`.
pub fn format_coord(v: f64, precision: usize) -> String {
    let scale = 10f64.powi(precision as i32);
    let rounded = (v * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

//! Drawing surfaces the painter renders onto
//!
//! [`DrawingSurface`] is the canvas-style command interface used by the
//! painter. [`SvgSurface`] turns those commands into an SVG document and
//! [`RecordingSurface`] keeps them for inspection.

pub mod config;
pub mod path;
pub mod recording;
pub mod svg;

pub use config::SvgConfig;
pub use path::{PathData, PathSegment};
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

use crate::geometry::Transform;

/// The subset of a 2D canvas context needed to paint a filled, stroked path
pub trait DrawingSurface {
    /// Replace the current transform
    fn set_transform(&mut self, transform: Transform);

    /// Discard the current path
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn close_path(&mut self);

    fn set_fill_style(&mut self, color: &str);

    fn set_stroke_style(&mut self, color: &str);

    fn set_line_width(&mut self, width: f64);

    /// Fill the current path with the fill style
    fn fill(&mut self);

    /// Stroke the current path with the stroke style and line width
    fn stroke(&mut self);
}

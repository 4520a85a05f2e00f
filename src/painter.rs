//! Paint providers and the smooth-corners painter
//!
//! A paint provider is invoked once per repaint with a surface, the element
//! geometry and the element's custom properties. It keeps no state between
//! calls.

use log::debug;

use crate::geometry::{BoundaryPath, Geometry, Transform};
use crate::properties::{ConfigResolver, InputProperty, PropertySource, ShapeParameters};
use crate::renderer::{DrawingSurface, PathData, PathSegment};
use crate::superellipse::{Superellipse, DEFAULT_STEPS};

/// Something a host can register by name and ask to paint a background
pub trait PaintProvider: Send + Sync {
    /// The custom properties this provider reads
    fn input_properties(&self) -> &'static [InputProperty];

    /// Draw onto `surface` for an element of the given geometry
    fn paint(
        &self,
        surface: &mut dyn DrawingSurface,
        geometry: Geometry,
        properties: &dyn PropertySource,
    );
}

/// Paints a superellipse background with a border
#[derive(Debug, Clone, Default)]
pub struct SmoothCornersPainter {
    resolver: ConfigResolver,
    steps: Option<usize>,
}

impl SmoothCornersPainter {
    /// The name the painter is registered under
    pub const NAME: &'static str = "smooth-corners";

    pub fn new() -> Self {
        Self::default()
    }

    /// Use a resolver with custom defaults
    pub fn with_resolver(mut self, resolver: ConfigResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Override the sampling density
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// The outline for an element, in element-centred coordinates
    pub fn boundary(&self, geometry: Geometry, params: &ShapeParameters) -> BoundaryPath {
        Superellipse::new(
            geometry.half_width(),
            geometry.half_height(),
            params.smoothness,
            params.stroke_width,
        )
        .with_steps(self.steps.unwrap_or(DEFAULT_STEPS))
        .boundary()
    }
}

/// Draw a closed outline, fill it, then stroke it
pub fn draw_boundary(
    surface: &mut dyn DrawingSurface,
    center: Transform,
    boundary: &BoundaryPath,
    params: &ShapeParameters,
) {
    surface.set_transform(center);
    surface.begin_path();
    surface.set_fill_style(&params.fill_color);
    surface.set_stroke_style(&params.stroke_color);
    surface.set_line_width(params.stroke_width);

    for segment in PathData::from_boundary(boundary).segments {
        match segment {
            PathSegment::MoveTo(p) => surface.move_to(p.x, p.y),
            PathSegment::LineTo(p) => surface.line_to(p.x, p.y),
            PathSegment::Close => surface.close_path(),
        }
    }

    surface.fill();
    surface.stroke();
}

impl PaintProvider for SmoothCornersPainter {
    fn input_properties(&self) -> &'static [InputProperty] {
        &InputProperty::ALL
    }

    fn paint(
        &self,
        surface: &mut dyn DrawingSurface,
        geometry: Geometry,
        properties: &dyn PropertySource,
    ) {
        let params = self.resolver.resolve(properties);
        debug!(
            "painting {}x{} smooth-corners n={} border={} fill={} stroke={}",
            geometry.width,
            geometry.height,
            params.smoothness,
            params.stroke_width,
            params.fill_color,
            params.stroke_color
        );

        let boundary = self.boundary(geometry, &params);
        let center = geometry.center();
        draw_boundary(
            surface,
            Transform::translate(center.x, center.y),
            &boundary,
            &params,
        );
    }
}

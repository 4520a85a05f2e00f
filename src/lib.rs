//! Smooth Corners - superellipse backgrounds for rectangular elements
//!
//! This library samples a superellipse ("squircle") sized to an element,
//! insets it for the border width, and fills and strokes it on a drawing
//! surface. The shape is driven by four CSS custom properties:
//! `--smooth-corners`, `--bg-color`, `--border-color` and `--border-width`.
//!
//! # Example
//!
//! ```rust
//! use smooth_corners::{render_svg, Geometry, StylePropertyMap};
//!
//! let props = StylePropertyMap::parse_declarations("--smooth-corners: 5; --bg-color: #eee");
//! let svg = render_svg(Geometry::new(120.0, 80.0), &props);
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r##"fill="#eee""##));
//! ```

pub mod geometry;
pub mod painter;
pub mod properties;
pub mod registry;
pub mod renderer;
pub mod stylesheet;
pub mod superellipse;

pub use geometry::{BoundaryPath, Geometry, Point, Transform};
pub use painter::{PaintProvider, SmoothCornersPainter};
pub use properties::{
    ConfigResolver, InputProperty, PropertyDefaults, PropertySource, PropertyValue,
    ShapeParameters, StylePropertyMap,
};
pub use registry::{register_smooth_corners, PaintRegistry, RegistryError};
pub use renderer::{DrawingSurface, RecordingSurface, SvgConfig, SvgSurface};
pub use stylesheet::{Stylesheet, StylesheetError};
pub use superellipse::{generate_boundary, Superellipse};

/// Configuration for rendering one element to SVG
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet supplying declared values and defaults
    pub stylesheet: Stylesheet,
    /// Sampling density override
    pub steps: Option<usize>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the number of outline samples
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    fn painter(&self) -> SmoothCornersPainter {
        let painter = SmoothCornersPainter::new().with_resolver(self.stylesheet.resolver());
        match self.steps {
            Some(steps) => painter.with_steps(steps),
            None => painter,
        }
    }
}

/// Render an element to SVG with default configuration
pub fn render_svg(geometry: Geometry, properties: &dyn PropertySource) -> String {
    render_svg_with_config(geometry, properties, &RenderConfig::default())
}

/// Render an element to SVG with custom configuration
///
/// Values in `properties` take precedence over the stylesheet's declared
/// values, which take precedence over its defaults.
///
/// # Example
///
/// ```rust
/// use smooth_corners::{render_svg_with_config, Geometry, RenderConfig, Stylesheet, StylePropertyMap};
///
/// let stylesheet = Stylesheet::from_str(r#"
/// [defaults]
/// border-width = 3
/// "#).unwrap();
/// let config = RenderConfig::new().with_stylesheet(stylesheet).with_steps(64);
///
/// let svg = render_svg_with_config(Geometry::new(100.0, 100.0), &StylePropertyMap::new(), &config);
/// assert!(svg.contains(r#"stroke-width="3""#));
/// ```
pub fn render_svg_with_config(
    geometry: Geometry,
    properties: &dyn PropertySource,
    config: &RenderConfig,
) -> String {
    // Blank caller values fall through to the stylesheet, not to the defaults
    let mut overrides = StylePropertyMap::new();
    for prop in InputProperty::ALL {
        if crate::properties::first_value(properties, prop).is_none() {
            continue;
        }
        for token in properties.get(prop.name()).unwrap_or_default() {
            overrides.append(prop.name(), token.as_str());
        }
    }

    let mut declared = config.stylesheet.property_map();
    declared.merge(&overrides);

    let mut surface = SvgSurface::new(geometry.width, geometry.height, config.svg.clone());
    config.painter().paint(&mut surface, geometry, &declared);
    surface.finish()
}

//! Core geometric types shared by the shape generator and the renderer

/// A 2D point in element-centred coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The bounding box of the element being painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half the element width (the superellipse `a` radius)
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half the element height (the superellipse `b` radius)
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Centre of the element in surface coordinates
    pub fn center(&self) -> Point {
        Point::new(self.half_width(), self.half_height())
    }
}

/// A 2D affine transform in canvas order `[a, b, c, d, e, f]`
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// A pure translation by `(tx, ty)`
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Map a point through this transform
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// An ordered, implicitly closed outline
///
/// The last point connects back to the first when drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    points: Vec<Point>,
}

impl BoundaryPath {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Iterate the closed polygon's edges, including last → first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Largest absolute x and y over all points
    pub fn extent(&self) -> (f64, f64) {
        self.points.iter().fold((0.0_f64, 0.0_f64), |(mx, my), p| {
            (mx.max(p.x.abs()), my.max(p.y.abs()))
        })
    }

    /// Signed area via the shoelace formula (positive for y-down clockwise order)
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(p, q)| p.x * q.y - q.x * p.y).sum::<f64>() / 2.0
    }
}

impl<'a> IntoIterator for &'a BoundaryPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

use crate::error::{Result, RidgeError};

/// A point on the canvas; y grows downward, like raster coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Three vertices; the order only matters for the stroke winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.0
    }

    /// Shoelace formula; positive when the vertices wind clockwise on screen.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.0;
        ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)) * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

/// Ordered points of a silhouette.
///
/// The first and last points close the outline onto the baseline; everything
/// in between is an interior point. x never decreases along the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeSequence {
    points: Vec<Point>,
}

impl RidgeSequence {
    /// Wrap a hand-built point list.
    ///
    /// Rejects non-finite coordinates and any step where x decreases. Length is
    /// not checked here, so short sequences can still reach [`crate::triangulate`].
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(RidgeError::invalid_argument(format!(
                "ridge point {p} is not finite"
            )));
        }
        if let Some(w) = points.windows(2).find(|w| w[1].x < w[0].x) {
            return Err(RidgeError::invalid_argument(format!(
                "ridge x must not decrease: {} followed by {}",
                w[0], w[1]
            )));
        }
        Ok(Self { points })
    }

    /// Generator output already satisfies the invariants.
    pub(crate) fn from_generated(points: Vec<Point>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
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

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Points strictly between the two baseline anchors.
    pub fn interior(&self) -> &[Point] {
        if self.points.len() < 2 {
            return &[];
        }
        &self.points[1..self.points.len() - 1]
    }

    /// The closed silhouette: every point, with the first repeated at the end.
    pub fn outline(&self) -> Vec<Point> {
        let mut outline = self.points.clone();
        if let Some(&first) = self.points.first() {
            outline.push(first);
        }
        outline
    }

    /// Trapezoidal-rule area between the interior polyline and `baseline`.
    ///
    /// This is exactly the area the triangulation covers.
    pub fn interior_area(&self, baseline: f64) -> f64 {
        self.interior()
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * ((baseline - w[0].y) + (baseline - w[1].y)) * 0.5)
            .sum()
    }
}

impl<'a> IntoIterator for &'a RidgeSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

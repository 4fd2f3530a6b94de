use crate::error::{Result, RidgeError};
use crate::geometry::{Point, RidgeSequence, Triangle};

/// Split the area under the interior ridge into triangles.
///
/// The first and last points of `ridge` only close the outline and are never
/// used here. Every consecutive pair of interior points `(a, b)` yields the
/// trapezoid between segment `a-b` and the baseline, cut along its diagonal:
///
/// - left:  `(a.x, baseline), a, b`
/// - right: `b, (b.x, baseline), (a.x, baseline)`
///
/// Neighbouring trapezoids only share a vertical edge, so the triangles tile
/// the region with no gaps or overlaps. `k` interior points give `2 * (k - 1)`
/// triangles, and none at all when `k < 2`.
///
/// `width` is the canvas width the ridge was generated for.
pub fn triangulate(ridge: &RidgeSequence, width: f64, baseline: f64) -> Result<Vec<Triangle>> {
    if ridge.len() < 2 {
        return Err(RidgeError::invalid_argument(format!(
            "triangulation needs at least 2 ridge points, got {}",
            ridge.len()
        )));
    }

    let interior = ridge.interior();
    debug_assert!(
        interior.iter().all(|p| p.x >= 0.0 && p.x <= width),
        "interior points must lie within the canvas width"
    );

    let mut triangles = Vec::with_capacity(2 * interior.len().saturating_sub(1));
    for pair in interior.windows(2) {
        let (top_a, top_b) = (pair[0], pair[1]);
        let foot_a = Point::new(top_a.x, baseline);
        let foot_b = Point::new(top_b.x, baseline);

        triangles.push(Triangle::new(foot_a, top_a, top_b));
        triangles.push(Triangle::new(top_b, foot_b, foot_a));
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::triangulate;
    use crate::geometry::{Point, RidgeSequence, Triangle};
    use crate::ridge::generate;
    use crate::source::{FixedSource, RngSource};

    #[test]
    fn triangulate_fixed_ridge() {
        let mut src = FixedSource::constant(0.5).unwrap();
        let ridge = generate(3, 300.0, 100.0, &mut src).unwrap();
        let tris = triangulate(&ridge, 300.0, 100.0).unwrap();
        assert_eq!(tris.len(), 4);

        let interior = ridge.interior();
        let (a, b) = (interior[0], interior[1]);
        assert_eq!(
            tris[0],
            Triangle::new(Point::new(a.x, 100.0), a, b),
            "left triangle"
        );
        assert_eq!(
            tris[1],
            Triangle::new(b, Point::new(b.x, 100.0), Point::new(a.x, 100.0)),
            "right triangle"
        );
    }

    #[test]
    fn triangulate_never_uses_anchors() {
        let mut src = RngSource::seeded(3);
        let ridge = generate(6, 600.0, 400.0, &mut src).unwrap();
        let tris = triangulate(&ridge, 600.0, 400.0).unwrap();
        let first = *ridge.first().unwrap();
        let last = *ridge.last().unwrap();
        for t in &tris {
            assert!(!t.vertices().contains(&first));
            assert!(!t.vertices().contains(&last));
        }
    }

    #[test]
    fn triangulate_count_law() {
        for n in 1..20 {
            let mut src = RngSource::seeded(n as u64);
            let ridge = generate(n, 1000.0, 500.0, &mut src).unwrap();
            let tris = triangulate(&ridge, 1000.0, 500.0).unwrap();
            assert_eq!(tris.len(), 2 * (n - 1));
        }
    }

    #[test]
    fn triangulate_covers_area_exactly() {
        for seed in 0..25 {
            let mut src = RngSource::seeded(seed);
            let ridge = generate(15, 2436.0, 1125.0, &mut src).unwrap();
            let tris = triangulate(&ridge, 2436.0, 1125.0).unwrap();

            let covered: f64 = tris.iter().map(Triangle::area).sum();
            let expected = ridge.interior_area(1125.0);
            assert!(
                (covered - expected).abs() < 1e-6 * expected,
                "covered {covered}, expected {expected}"
            );
        }
    }

    #[test]
    fn triangulate_pairs_tile_each_trapezoid() {
        let mut src = RngSource::seeded(11);
        let ridge = generate(8, 800.0, 600.0, &mut src).unwrap();
        let tris = triangulate(&ridge, 800.0, 600.0).unwrap();
        for (pair, tri_pair) in ridge.interior().windows(2).zip(tris.chunks(2)) {
            let (a, b) = (pair[0], pair[1]);
            let trapezoid = (b.x - a.x) * ((600.0 - a.y) + (600.0 - b.y)) * 0.5;
            let sum = tri_pair[0].area() + tri_pair[1].area();
            assert!((sum - trapezoid).abs() < 1e-6);
            // both halves lie within the trapezoid's x span
            for t in tri_pair {
                assert!(t.vertices().iter().all(|p| p.x >= a.x && p.x <= b.x));
            }
        }
    }

    #[test]
    fn triangulate_degenerate_ridges() {
        // two anchors only
        let bare = RidgeSequence::new(vec![Point::new(0.0, 10.0), Point::new(10.0, 10.0)]).unwrap();
        assert!(triangulate(&bare, 10.0, 10.0).unwrap().is_empty());

        // a single interior point
        let mut src = RngSource::seeded(5);
        let one = generate(1, 10.0, 10.0, &mut src).unwrap();
        assert!(triangulate(&one, 10.0, 10.0).unwrap().is_empty());
    }

    #[test]
    fn triangulate_rejects_short_ridge() {
        let single = RidgeSequence::new(vec![Point::new(1.0, 1.0)]).unwrap();
        let err = triangulate(&single, 10.0, 10.0).unwrap_err();
        assert!(err.is_invalid_argument());

        let empty = RidgeSequence::new(Vec::new()).unwrap();
        assert!(triangulate(&empty, 10.0, 10.0).is_err());
    }
}

use crate::errors::TransformError;
use ncollide2d::na::{Isometry2, Point2};
use tracing::debug;

/// How a parsed profile gets positioned in the destination frame: stretched
/// between a leading and trailing edge pick, or scaled about the origin.
#[derive(Debug, Clone, Copy)]
pub enum Placement {
    Anchors { le: Point2<f64>, te: Point2<f64> },
    Scale(f64),
}

impl Placement {
    pub fn apply(&self, points: &[Point2<f64>]) -> Result<Vec<Point2<f64>>, TransformError> {
        match self {
            Placement::Anchors { le, te } => Ok(place_by_anchors(points, le, te)),
            Placement::Scale(factor) => place_by_scale(points, *factor),
        }
    }
}

/// Maps profile coordinates onto the chord segment running from `le` to
/// `te`. In homogeneous form the transform is
///
/// ```text
/// c*cos(a)   -c*sin(a)   le.x
/// c*sin(a)    c*cos(a)   le.y
/// 0           0          1
/// ```
///
/// where `c` is the chord length and `a` its angle from the x axis, so a
/// profile whose own chord spans (0, 0) to (1, 0) lands exactly between the
/// two anchors. The input is used as-is; no normalization happens here.
///
/// Coincident anchors give `c = 0` and collapse every point onto `le`.
/// Callers that consider that a user error must reject the pick themselves.
pub fn place_by_anchors(
    points: &[Point2<f64>],
    le: &Point2<f64>,
    te: &Point2<f64>,
) -> Vec<Point2<f64>> {
    let chord = te - le;
    let scale = chord.norm();
    let rotation = Isometry2::rotation(chord.y.atan2(chord.x));
    debug!(chord = scale, "placing profile between anchors");

    points
        .iter()
        .map(|p| *le + scale * (rotation * p.coords))
        .collect()
}

/// Scales every point about the origin, leaving orientation and position
/// alone. The factor must be a positive finite number.
pub fn place_by_scale(
    points: &[Point2<f64>],
    factor: f64,
) -> Result<Vec<Point2<f64>>, TransformError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidArgument(factor));
    }

    Ok(points
        .iter()
        .map(|p| Point2::new(p.x * factor, p.y * factor))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    fn sample_points(p: &[(f64, f64)]) -> Vec<Point2<f64>> {
        p.iter().map(|(a, b)| Point2::new(*a, *b)).collect()
    }

    fn foil() -> Vec<Point2<f64>> {
        sample_points(&[(1.0, 0.0), (0.5, 0.1), (0.0, 0.0), (0.5, -0.1)])
    }

    #[test]
    fn test_identity_chord_leaves_points_unchanged() {
        let points = foil();
        let result = place_by_anchors(&points, &Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0));

        for (p, r) in points.iter().zip(result.iter()) {
            assert_relative_eq!(p.x, r.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, r.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_double_chord_doubles_coordinates() {
        let points = foil();
        let result = place_by_anchors(&points, &Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0));

        for (p, r) in points.iter().zip(result.iter()) {
            assert_relative_eq!(p.x * 2.0, r.x, epsilon = 1e-12);
            assert_relative_eq!(p.y * 2.0, r.y, epsilon = 1e-12);
        }
    }

    #[test_case((0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (0.0, 1.0) ; "quarter turn")]
    #[test_case((0.0, 0.0), (0.0, 1.0), (0.5, 0.1), (-0.1, 0.5) ; "quarter turn off axis")]
    #[test_case((1.0, 1.0), (2.0, 1.0), (0.5, -0.1), (1.5, 0.9) ; "translated chord")]
    #[test_case((0.0, 0.0), (-1.0, 0.0), (0.5, 0.0), (-0.5, 0.0) ; "reversed chord")]
    fn test_anchor_transform(le: (f64, f64), te: (f64, f64), p: (f64, f64), e: (f64, f64)) {
        let result = place_by_anchors(
            &[Point2::new(p.0, p.1)],
            &Point2::new(le.0, le.1),
            &Point2::new(te.0, te.1),
        );

        assert_relative_eq!(e.0, result[0].x, epsilon = 1e-10);
        assert_relative_eq!(e.1, result[0].y, epsilon = 1e-10);
    }

    #[test]
    fn test_coincident_anchors_collapse_to_anchor() {
        let le = Point2::new(3.0, -2.0);
        let result = place_by_anchors(&foil(), &le, &le);

        for r in result.iter() {
            assert_relative_eq!(le.x, r.x, epsilon = 1e-12);
            assert_relative_eq!(le.y, r.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_anchor_transform_matches_matrix_form() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let le: Point2<f64> = Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let te: Point2<f64> = Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let p: Point2<f64> = Point2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));

            let c = (te - le).norm();
            let a = (te.y - le.y).atan2(te.x - le.x);
            let ex = c * a.cos() * p.x - c * a.sin() * p.y + le.x;
            let ey = c * a.sin() * p.x + c * a.cos() * p.y + le.y;

            let result = place_by_anchors(&[p], &le, &te);
            assert_relative_eq!(ex, result[0].x, epsilon = 1e-9);
            assert_relative_eq!(ey, result[0].y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_scale_placement() {
        let result = place_by_scale(&sample_points(&[(1.0, 1.0), (2.0, 0.0)]), 3.0).unwrap();

        assert_eq!(2, result.len());
        assert_relative_eq!(3.0, result[0].x, epsilon = 1e-12);
        assert_relative_eq!(3.0, result[0].y, epsilon = 1e-12);
        assert_relative_eq!(6.0, result[1].x, epsilon = 1e-12);
        assert_relative_eq!(0.0, result[1].y, epsilon = 1e-12);
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-2.0 ; "negative")]
    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinite")]
    fn test_scale_rejects_bad_factors(factor: f64) {
        let result = place_by_scale(&foil(), factor);
        assert!(matches!(result, Err(TransformError::InvalidArgument(_))));
    }

    #[test]
    fn test_placement_dispatch() {
        let points = foil();

        let anchored = Placement::Anchors {
            le: Point2::new(0.0, 0.0),
            te: Point2::new(2.0, 0.0),
        };
        let scaled = Placement::Scale(2.0);

        let a = anchored.apply(&points).unwrap();
        let b = scaled.apply(&points).unwrap();

        for (p, q) in a.iter().zip(b.iter()) {
            assert_relative_eq!(p.x, q.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, q.y, epsilon = 1e-12);
        }

        assert!(Placement::Scale(-1.0).apply(&points).is_err());
    }
}

//! Projection and closest-point queries

use super::primitives::Segment;
use crate::foundation::math::{utils, Vec3};

/// Vector projection of `v1` onto the direction of `v2`
///
/// NaN when `v2` is the zero vector.
pub fn project(v1: &Vec3, v2: &Vec3) -> Vec3 {
    let direction = v2.normalize();
    direction * v1.dot(&direction)
}

/// Closest point to `point` on the infinite line through `segment`
///
/// The projection parameter is not clamped, so the result can lie past
/// either end of the segment. Use [`closest_point_on_segment`] for the
/// clamped version.
pub fn closest_point(point: &Vec3, segment: &Segment) -> Vec3 {
    segment.origin + project(&(point - segment.origin), &segment.diff)
}

/// Closest point to `point` on the segment itself (`t` clamped to `[0, 1]`)
///
/// A zero-length segment returns its origin.
pub fn closest_point_on_segment(point: &Vec3, segment: &Segment) -> Vec3 {
    let length_squared = segment.diff.norm_squared();
    if length_squared == 0.0 {
        return segment.origin;
    }
    let t = (point - segment.origin).dot(&segment.diff) / length_squared;
    segment.point_at(utils::clamp(t, 0.0, 1.0))
}

/// Some vector perpendicular to `v`
///
/// `(-y, x, 0)` unless both x and y are zero, then `(0, -z, y)`. The zero
/// vector maps to the zero vector.
pub fn perpendicular(v: &Vec3) -> Vec3 {
    if v.x != 0.0 || v.y != 0.0 {
        return Vec3::new(-v.y, v.x, 0.0);
    }
    Vec3::new(0.0, -v.z, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_project() {
        let v1 = Vec3::new(-2.0, -1.0, 2.0);
        let v2 = Vec3::new(0.45, 0.0, 0.0);
        assert_relative_eq!(project(&v1, &v2), Vec3::new(-2.0, 0.0, 0.0), epsilon = EPSILON);

        let onto_diagonal = project(&Vec3::new(1.0, 0.0, 0.0), &Vec3::new(2.0, 2.0, 0.0));
        assert_relative_eq!(onto_diagonal, Vec3::new(0.5, 0.5, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_closest_point_is_unclamped() {
        let segment = Segment::new(Vec3::new(-2.0, -1.0, 0.0), Vec3::new(3.0, 2.0, 2.0));
        let point = Vec3::new(-1.5, 0.6, 0.6);
        let closest = closest_point(&point, &segment);
        // residual is perpendicular to the segment direction
        assert_relative_eq!((point - closest).dot(&segment.diff), 0.0, epsilon = EPSILON);

        // a point far past the end projects past the end
        let past_end = Segment::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(
            closest_point(&Vec3::new(5.0, 1.0, 0.0), &past_end),
            Vec3::new(5.0, 0.0, 0.0),
            epsilon = EPSILON
        );
        assert_relative_eq!(
            closest_point(&Vec3::new(-3.0, 1.0, 0.0), &past_end),
            Vec3::new(-3.0, 0.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_closest_point_on_segment_clamps() {
        let segment = Segment::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(closest_point_on_segment(&Vec3::new(5.0, 1.0, 0.0), &segment), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(closest_point_on_segment(&Vec3::new(-3.0, 1.0, 0.0), &segment), Vec3::zeros());
        assert_relative_eq!(
            closest_point_on_segment(&Vec3::new(0.25, -2.0, 3.0), &segment),
            Vec3::new(0.25, 0.0, 0.0),
            epsilon = EPSILON
        );

        let degenerate = Segment::new(Vec3::new(1.0, 2.0, 3.0), Vec3::zeros());
        assert_eq!(closest_point_on_segment(&Vec3::zeros(), &degenerate), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_perpendicular() {
        for v in [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -4.0),
        ] {
            let p = perpendicular(&v);
            assert_eq!(p.dot(&v), 0.0);
            assert!(p.norm() > 0.0);
        }
        assert_eq!(perpendicular(&Vec3::new(1.0, 2.0, 3.0)), Vec3::new(-2.0, 1.0, 0.0));
        assert_eq!(perpendicular(&Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(perpendicular(&Vec3::zeros()), Vec3::zeros());
    }
}

//! Pairwise intersection tests
//!
//! One named function per shape pair. All tests are inclusive on the
//! boundary (touching counts as intersecting).
//!
//! # Line family vs plane
//!
//! `dot(normal, diff) == 0` is an exact comparison and is classified as
//! "no intersection", even when the line lies inside the plane. Otherwise
//! `t = (distance - dot(origin, normal)) / dot` and the hit is kept if `t`
//! falls in the primitive's range: `[0, 1]` for a segment, `[0, inf)` for a
//! ray, anything for a line.
//!
//! # Line family vs AABB
//!
//! Slab test. An axis whose direction component is exactly zero is not
//! divided through: it either contains the origin (no constraint) or the
//! query misses outright.

use log::trace;

use super::primitives::{Aabb, Line, Obb, Plane, Ray, Segment, Sphere, Triangle};
use crate::foundation::math::Vec3;

/// Parameter where `origin + t * diff` crosses `plane`, `None` when parallel
fn plane_crossing(origin: &Vec3, diff: &Vec3, plane: &Plane) -> Option<f32> {
    let dot = plane.normal.dot(diff);
    if dot == 0.0 {
        return None;
    }
    Some((plane.distance - origin.dot(&plane.normal)) / dot)
}

/// Sphere vs sphere
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let radius_sum = a.radius + b.radius;
    (a.center - b.center).norm() <= radius_sum
}

/// Sphere vs plane: unsigned center distance against the radius
pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(&sphere.center).abs() <= sphere.radius
}

/// Segment parameter of the plane crossing, if it lies in `[0, 1]`
pub fn segment_plane_t(segment: &Segment, plane: &Plane) -> Option<f32> {
    plane_crossing(&segment.origin, &segment.diff, plane).filter(|t| (0.0..=1.0).contains(t))
}

/// Line parameter of the plane crossing; `None` only when parallel
pub fn line_plane_t(line: &Line, plane: &Plane) -> Option<f32> {
    plane_crossing(&line.origin, &line.diff, plane)
}

/// Ray parameter of the plane crossing, if it is not behind the origin
pub fn ray_plane_t(ray: &Ray, plane: &Plane) -> Option<f32> {
    plane_crossing(&ray.origin, &ray.diff, plane).filter(|t| *t >= 0.0)
}

/// Segment vs plane
pub fn segment_plane(segment: &Segment, plane: &Plane) -> bool {
    segment_plane_t(segment, plane).is_some()
}

/// Line vs plane
pub fn line_plane(line: &Line, plane: &Plane) -> bool {
    line_plane_t(line, plane).is_some()
}

/// Ray vs plane
pub fn ray_plane(ray: &Ray, plane: &Plane) -> bool {
    ray_plane_t(ray, plane).is_some()
}

/// Point where the segment crosses the plane
pub fn segment_plane_point(segment: &Segment, plane: &Plane) -> Option<Vec3> {
    segment_plane_t(segment, plane).map(|t| segment.point_at(t))
}

/// Point where the line crosses the plane
pub fn line_plane_point(line: &Line, plane: &Plane) -> Option<Vec3> {
    line_plane_t(line, plane).map(|t| line.point_at(t))
}

/// Point where the ray crosses the plane
pub fn ray_plane_point(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    ray_plane_t(ray, plane).map(|t| ray.point_at(t))
}

/// Keep `point` if it lies inside `triangle` (which it is coplanar with)
fn inside_triangle(triangle: &Triangle, plane: &Plane, point: Vec3) -> Option<Vec3> {
    let inside = triangle.contains_coplanar_point(&point, &plane.normal);
    trace!("triangle hit candidate {:?} inside={}", point, inside);
    inside.then_some(point)
}

/// Point where the segment passes through the triangle
pub fn triangle_segment_point(triangle: &Triangle, segment: &Segment) -> Option<Vec3> {
    let plane = triangle.plane();
    let point = segment_plane_point(segment, &plane)?;
    inside_triangle(triangle, &plane, point)
}

/// Point where the line passes through the triangle
pub fn triangle_line_point(triangle: &Triangle, line: &Line) -> Option<Vec3> {
    let plane = triangle.plane();
    let point = line_plane_point(line, &plane)?;
    inside_triangle(triangle, &plane, point)
}

/// Point where the ray passes through the triangle
pub fn triangle_ray_point(triangle: &Triangle, ray: &Ray) -> Option<Vec3> {
    let plane = triangle.plane();
    let point = ray_plane_point(ray, &plane)?;
    inside_triangle(triangle, &plane, point)
}

/// Triangle vs segment
pub fn triangle_segment(triangle: &Triangle, segment: &Segment) -> bool {
    triangle_segment_point(triangle, segment).is_some()
}

/// Triangle vs line
pub fn triangle_line(triangle: &Triangle, line: &Line) -> bool {
    triangle_line_point(triangle, line).is_some()
}

/// Triangle vs ray
pub fn triangle_ray(triangle: &Triangle, ray: &Ray) -> bool {
    triangle_ray_point(triangle, ray).is_some()
}

/// AABB vs AABB: every axis interval overlaps
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    (a.min.x <= b.max.x && a.max.x >= b.min.x)
        && (a.min.y <= b.max.y && a.max.y >= b.min.y)
        && (a.min.z <= b.max.z && a.max.z >= b.min.z)
}

/// AABB vs sphere: distance from the clamped center to the center
pub fn aabb_sphere(aabb: &Aabb, sphere: &Sphere) -> bool {
    let closest = aabb.closest_point(&sphere.center);
    (closest - sphere.center).norm() <= sphere.radius
}

/// OBB vs sphere: same as [`aabb_sphere`] in the box's local frame
pub fn obb_sphere(obb: &Obb, sphere: &Sphere) -> bool {
    let closest = obb.closest_point(&sphere.center);
    (closest - sphere.center).norm() <= sphere.radius
}

/// Entry/exit parameters of `origin + t * diff` through the box
///
/// Returns `(t_near, t_far)` with `t_near <= t_far`, or `None` when the
/// infinite line misses. Either end may be infinite when the direction is
/// zero on every axis that constrains it.
pub fn slab_interval(aabb: &Aabb, origin: &Vec3, diff: &Vec3) -> Option<(f32, f32)> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let (o, d) = (origin[axis], diff[axis]);
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

        if d == 0.0 {
            if o < lo || o > hi {
                trace!("slab miss: parallel to axis {} outside [{}, {}]", axis, lo, hi);
                return None;
            }
            continue;
        }

        let t_lo = (lo - o) / d;
        let t_hi = (hi - o) / d;
        t_near = t_near.max(t_lo.min(t_hi));
        t_far = t_far.min(t_lo.max(t_hi));
    }

    (t_near <= t_far).then_some((t_near, t_far))
}

/// AABB vs segment
pub fn aabb_segment(aabb: &Aabb, segment: &Segment) -> bool {
    slab_interval(aabb, &segment.origin, &segment.diff).is_some_and(|(t_near, t_far)| 0.0 <= t_far && t_near <= 1.0)
}

/// AABB vs line
pub fn aabb_line(aabb: &Aabb, line: &Line) -> bool {
    slab_interval(aabb, &line.origin, &line.diff).is_some()
}

/// AABB vs ray
pub fn aabb_ray(aabb: &Aabb, ray: &Ray) -> bool {
    slab_interval(aabb, &ray.origin, &ray.diff).is_some_and(|(_, t_far)| t_far >= 0.0)
}

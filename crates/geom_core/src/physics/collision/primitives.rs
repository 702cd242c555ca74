//! Primitive shapes
//!
//! Plain value types in world space. The line family (segment, line, ray)
//! shares the parametric form `origin + t * diff`; only the valid range of
//! `t` differs. None of the constructors validate or normalize their input,
//! except [`Aabb::try_new`].

use serde::{Deserialize, Serialize};

use crate::error::{Axis, GeometryError, GeometryResult};
use crate::foundation::math::{utils, Mat4, Vec3};

/// A sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center point
    pub center: Vec3,
    /// Radius (expected to be >= 0)
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A closed segment, `t` in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub origin: Vec3,
    /// Offset from start to end
    pub diff: Vec3,
}

impl Segment {
    /// Creates a new segment
    pub fn new(origin: Vec3, diff: Vec3) -> Self {
        Self { origin, diff }
    }

    /// Point at parameter `t`
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.diff * t
    }

    /// End point (`t = 1`)
    pub fn end(&self) -> Vec3 {
        self.origin + self.diff
    }
}

/// An infinite line, `t` unbounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// A point on the line
    pub origin: Vec3,
    /// Direction
    pub diff: Vec3,
}

impl Line {
    /// Creates a new line
    pub fn new(origin: Vec3, diff: Vec3) -> Self {
        Self { origin, diff }
    }

    /// Point at parameter `t`
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.diff * t
    }
}

/// A half-line, `t` in `[0, inf)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Start point
    pub origin: Vec3,
    /// Direction (not required to be normalized)
    pub diff: Vec3,
}

impl Ray {
    /// Creates a new ray
    pub fn new(origin: Vec3, diff: Vec3) -> Self {
        Self { origin, diff }
    }

    /// Point at parameter `t`
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.diff * t
    }
}

/// A plane `dot(normal, p) = distance`
///
/// `normal` should be unit length; nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Plane normal
    pub normal: Vec3,
    /// Distance from the origin along `normal`
    pub distance: f32,
}

impl Plane {
    /// Creates a new plane
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Supporting plane of a triangle, oriented by its winding
    pub fn from_triangle(triangle: &Triangle) -> Self {
        let normal = triangle.normal();
        Self {
            normal,
            distance: triangle.vertices[0].dot(&normal),
        }
    }

    /// Signed distance of `point` from the plane (positive on the normal side)
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// The point of the plane closest to the origin
    pub fn center(&self) -> Vec3 {
        self.normal * self.distance
    }
}

/// A triangle; winding decides the normal direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Vertices in winding order
    pub vertices: [Vec3; 3],
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { vertices: [v0, v1, v2] }
    }

    /// Unit normal `normalize(cross(v1 - v0, v2 - v1))`
    ///
    /// NaN for a degenerate (collinear) triangle.
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(&(v2 - v1)).normalize()
    }

    /// Supporting plane
    pub fn plane(&self) -> Plane {
        Plane::from_triangle(self)
    }

    /// Same-side test for a point already on the triangle's plane
    ///
    /// Each edge's cross product with the vector to the point must not point
    /// against `normal`. Points on an edge or vertex count as inside.
    pub fn contains_coplanar_point(&self, point: &Vec3, normal: &Vec3) -> bool {
        let [v0, v1, v2] = self.vertices;
        let cross01 = (v1 - v0).cross(&(point - v1));
        let cross12 = (v2 - v1).cross(&(point - v2));
        let cross20 = (v0 - v2).cross(&(point - v0));
        cross01.dot(normal) >= 0.0 && cross12.dot(normal) >= 0.0 && cross20.dot(normal) >= 0.0
    }
}

/// Axis-aligned bounding box
///
/// Invariant: `min <= max` on every axis. [`Aabb::new`] does not check it;
/// comparisons against a box that breaks it give meaningless answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box without validating the bounds
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box, rejecting `min > max` on any axis
    pub fn try_new(min: Vec3, max: Vec3) -> GeometryResult<Self> {
        for (axis, (lo, hi)) in [Axis::X, Axis::Y, Axis::Z].into_iter().zip(min.iter().zip(max.iter())) {
            if lo > hi {
                return Err(GeometryError::InvalidBounds { axis });
            }
        }
        Ok(Self { min, max })
    }

    /// Copy with min/max swapped per axis where they were inverted
    pub fn normalized(&self) -> Self {
        Self {
            min: self.min.inf(&self.max),
            max: self.min.sup(&self.max),
        }
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half the size along each axis
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Closest point inside the box to `point` (per-axis clamp)
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        Vec3::new(
            utils::clamp(point.x, self.min.x, self.max.x),
            utils::clamp(point.y, self.min.y, self.max.y),
            utils::clamp(point.z, self.min.z, self.max.z),
        )
    }

    /// The eight corners; bit 0 of the index picks max x, bit 1 max y, bit 2 max z
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }
}

/// Oriented bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    /// Center point
    pub center: Vec3,
    /// Orthonormal local axes (x, y, z)
    pub orientations: [Vec3; 3],
    /// Half-extent along each local axis
    pub size: Vec3,
}

impl Obb {
    /// Creates a new oriented box
    pub fn new(center: Vec3, orientations: [Vec3; 3], size: Vec3) -> Self {
        Self { center, orientations, size }
    }

    /// An OBB that matches an axis-aligned box
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            orientations: [Vec3::x(), Vec3::y(), Vec3::z()],
            size: aabb.half_extents(),
        }
    }

    /// Local-to-world matrix: rows are the axes, row 3 is the center
    pub fn world_matrix(&self) -> Mat4 {
        let [x, y, z] = self.orientations;
        let c = self.center;
        Mat4::new(
            x.x, x.y, x.z, 0.0,
            y.x, y.y, y.z, 0.0,
            z.x, z.y, z.z, 0.0,
            c.x, c.y, c.z, 1.0,
        )
    }

    /// The eight corners, indexed like [`Aabb::corners`]
    pub fn corners(&self) -> [Vec3; 8] {
        let [x, y, z] = self.orientations;
        std::array::from_fn(|i| {
            let sx = if i & 1 == 0 { -self.size.x } else { self.size.x };
            let sy = if i & 2 == 0 { -self.size.y } else { self.size.y };
            let sz = if i & 4 == 0 { -self.size.z } else { self.size.z };
            self.center + x * sx + y * sy + z * sz
        })
    }

    /// Closest point inside the box to `point`, clamped in the box's local frame
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        let local = point - self.center;
        let mut result = self.center;
        for (axis, half) in self.orientations.iter().zip(self.size.iter()) {
            let d = utils::clamp(local.dot(axis), -half, *half);
            result += axis * d;
        }
        result
    }
}

//! Tagged shape union with pairwise dispatch
//!
//! Lets callers hold heterogeneous primitives (for example a scene loaded
//! from a config file) and ask "do these two intersect" without knowing the
//! concrete pair at compile time.

use serde::{Deserialize, Serialize};

use super::intersect;
use super::primitives::{Aabb, Line, Obb, Plane, Ray, Segment, Sphere, Triangle};
use crate::error::{GeometryError, GeometryResult};

/// Shape discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// [`Sphere`]
    Sphere,
    /// [`Segment`]
    Segment,
    /// [`Line`]
    Line,
    /// [`Ray`]
    Ray,
    /// [`Plane`]
    Plane,
    /// [`Triangle`]
    Triangle,
    /// [`Aabb`]
    Aabb,
    /// [`Obb`]
    Obb,
}

/// Any primitive, in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// A sphere
    Sphere(Sphere),
    /// A segment
    Segment(Segment),
    /// An infinite line
    Line(Line),
    /// A ray
    Ray(Ray),
    /// A plane
    Plane(Plane),
    /// A triangle
    Triangle(Triangle),
    /// An axis-aligned box
    Aabb(Aabb),
    /// An oriented box
    Obb(Obb),
}

impl Shape {
    /// Discriminant of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Segment(_) => ShapeKind::Segment,
            Self::Line(_) => ShapeKind::Line,
            Self::Ray(_) => ShapeKind::Ray,
            Self::Plane(_) => ShapeKind::Plane,
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Aabb(_) => ShapeKind::Aabb,
            Self::Obb(_) => ShapeKind::Obb,
        }
    }

    /// Test if this shape intersects another
    ///
    /// Argument order does not matter. Pairs without a test (plane vs plane,
    /// segment vs ray, ...) return [`GeometryError::UnsupportedPair`].
    pub fn intersects(&self, other: &Shape) -> GeometryResult<bool> {
        let hit = match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => intersect::sphere_sphere(a, b),

            (Self::Sphere(sphere), Self::Plane(plane)) |
            (Self::Plane(plane), Self::Sphere(sphere)) => intersect::sphere_plane(sphere, plane),

            (Self::Segment(segment), Self::Plane(plane)) |
            (Self::Plane(plane), Self::Segment(segment)) => intersect::segment_plane(segment, plane),

            (Self::Line(line), Self::Plane(plane)) |
            (Self::Plane(plane), Self::Line(line)) => intersect::line_plane(line, plane),

            (Self::Ray(ray), Self::Plane(plane)) |
            (Self::Plane(plane), Self::Ray(ray)) => intersect::ray_plane(ray, plane),

            (Self::Triangle(triangle), Self::Segment(segment)) |
            (Self::Segment(segment), Self::Triangle(triangle)) => intersect::triangle_segment(triangle, segment),

            (Self::Triangle(triangle), Self::Line(line)) |
            (Self::Line(line), Self::Triangle(triangle)) => intersect::triangle_line(triangle, line),

            (Self::Triangle(triangle), Self::Ray(ray)) |
            (Self::Ray(ray), Self::Triangle(triangle)) => intersect::triangle_ray(triangle, ray),

            (Self::Aabb(a), Self::Aabb(b)) => intersect::aabb_aabb(a, b),

            (Self::Aabb(aabb), Self::Sphere(sphere)) |
            (Self::Sphere(sphere), Self::Aabb(aabb)) => intersect::aabb_sphere(aabb, sphere),

            (Self::Aabb(aabb), Self::Segment(segment)) |
            (Self::Segment(segment), Self::Aabb(aabb)) => intersect::aabb_segment(aabb, segment),

            (Self::Aabb(aabb), Self::Line(line)) |
            (Self::Line(line), Self::Aabb(aabb)) => intersect::aabb_line(aabb, line),

            (Self::Aabb(aabb), Self::Ray(ray)) |
            (Self::Ray(ray), Self::Aabb(aabb)) => intersect::aabb_ray(aabb, ray),

            (Self::Obb(obb), Self::Sphere(sphere)) |
            (Self::Sphere(sphere), Self::Obb(obb)) => intersect::obb_sphere(obb, sphere),

            _ => {
                return Err(GeometryError::UnsupportedPair {
                    first: self.kind(),
                    second: other.kind(),
                })
            }
        };
        Ok(hit)
    }
}

impl From<Sphere> for Shape {
    fn from(value: Sphere) -> Self {
        Self::Sphere(value)
    }
}

impl From<Segment> for Shape {
    fn from(value: Segment) -> Self {
        Self::Segment(value)
    }
}

impl From<Line> for Shape {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<Ray> for Shape {
    fn from(value: Ray) -> Self {
        Self::Ray(value)
    }
}

impl From<Plane> for Shape {
    fn from(value: Plane) -> Self {
        Self::Plane(value)
    }
}

impl From<Triangle> for Shape {
    fn from(value: Triangle) -> Self {
        Self::Triangle(value)
    }
}

impl From<Aabb> for Shape {
    fn from(value: Aabb) -> Self {
        Self::Aabb(value)
    }
}

impl From<Obb> for Shape {
    fn from(value: Obb) -> Self {
        Self::Obb(value)
    }
}

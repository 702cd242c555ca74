//! Collision detection between geometric primitives
//!
//! Every test is a pure function over world-space value types; nothing is
//! cached and nothing is mutated.
//!
//! # Module Organization
//!
//! - [`primitives`] - Sphere, segment, line, ray, plane, triangle, AABB, OBB
//! - [`intersect`] - One named intersection test per shape pair
//! - [`query`] - Projection, closest point and perpendicular helpers
//! - [`shape`] - Tagged [`Shape`] union with pairwise dispatch

pub mod primitives;
pub mod intersect;
pub mod query;
pub mod shape;


// Re-export commonly used types
pub use primitives::{Aabb, Line, Obb, Plane, Ray, Segment, Sphere, Triangle};
pub use query::{closest_point, closest_point_on_segment, perpendicular, project};
pub use shape::{Shape, ShapeKind};

//! Physics module for collision detection
//!
//! Provides primitive shapes and the narrow-phase intersection tests between
//! them. There is no broad phase, response, or simulation state.

pub mod collision;

pub use collision::{
    Aabb,
    Line,
    Obb,
    Plane,
    Ray,
    Segment,
    Shape,
    ShapeKind,
    Sphere,
    Triangle,
};

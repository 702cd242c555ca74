//! # Geom Core
//!
//! 3D vector/matrix algebra and collision queries between geometric
//! primitives, plus the camera math and wireframe generators needed to
//! visualize them.
//!
//! ## Features
//!
//! - **Row-vector matrix helpers**: affine, perspective, orthographic and
//!   viewport matrices, cofactor inverse, projective transform
//! - **Collision tests**: sphere, plane, segment/line/ray, triangle, AABB, OBB
//! - **Queries**: projection, closest point, perpendicular
//! - **Wireframes**: line lists for every primitive, projected to screen space
//!
//! ## Quick Start
//!
//! ```rust
//! use geom_core::prelude::*;
//!
//! let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
//! let segment = Segment::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0));
//! assert!(intersect::aabb_segment(&aabb, &segment));
//!
//! let projector = ScreenProjector::from_camera(&Camera::default(), &Viewport::default());
//! let screen = draw::aabb(&aabb).project(&projector);
//! assert_eq!(screen.len(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod error;

pub mod config;
pub mod debug;
pub mod foundation;
pub mod physics;
pub mod render;

pub use error::{GeometryError, GeometryResult};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, DemoConfig, SceneConfig},
        debug::{draw, LineList},
        error::{GeometryError, GeometryResult},
        foundation::math::{compose_hierarchy, EulerTransform, Mat4, Mat4Ext, Vec2, Vec3, Vec3Ext, Vec4},
        physics::collision::{
            intersect, Aabb, Line, Obb, Plane, Ray, Segment, Shape, ShapeKind, Sphere, Triangle,
        },
        render::{Camera, ScreenProjector, Viewport},
    };
}

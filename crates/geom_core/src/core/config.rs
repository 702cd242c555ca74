//! # Demo Configuration
//!
//! Everything the collision demo reads at startup: log level, camera,
//! viewport, and the scene it queries. Every section has defaults, so a
//! config file only needs the values it changes.
//!
//! ## Example (TOML)
//!
//! ```toml
//! log_level = "debug"
//!
//! [camera]
//! fov_y = 0.6
//!
//! [scene.sphere]
//! center = [0.0, 0.5, 0.0]
//! radius = 1.0
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::math::{constants, EulerTransform, Vec3};
use crate::physics::collision::{Aabb, Line, Obb, Plane, Ray, Segment, Sphere, Triangle};
use crate::render::camera::{Camera, Viewport};

pub use crate::config::{Config, ConfigError};

/// # Scene Configuration
///
/// Primitives the demo tests against each other, plus the three-link
/// transform chain (shoulder → elbow → hand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Sphere tested against the plane and the boxes
    pub sphere: Sphere,
    /// Plane tested against the sphere and the line family
    pub plane: Plane,
    /// Segment tested against the plane, triangle and boxes
    pub segment: Segment,
    /// Ray tested against the plane, triangle and boxes
    pub ray: Ray,
    /// Line tested against the plane, triangle and boxes
    pub line: Line,
    /// Triangle tested against the line family
    pub triangle: Triangle,
    /// First box
    pub aabb_a: Aabb,
    /// Second box
    pub aabb_b: Aabb,
    /// Oriented box tested against the sphere
    pub obb: Obb,
    /// Quadratic Bézier control points
    pub bezier: [Vec3; 3],
    /// Local transforms of the hierarchy, parent first
    pub hierarchy: Vec<EulerTransform>,
    /// Radius of the spheres drawn at each hierarchy joint
    pub joint_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let unit = Vec3::new(1.0, 1.0, 1.0);
        Self {
            sphere: Sphere::new(Vec3::zeros(), 0.6),
            plane: Plane::new(Vec3::new(0.0, 1.0, 0.0), 1.0),
            segment: Segment::new(Vec3::new(-0.7, 0.3, 0.0), Vec3::new(2.0, -0.5, 0.0)),
            ray: Ray::new(Vec3::new(0.0, 0.5, -2.0), Vec3::new(0.0, 0.0, 1.0)),
            line: Line::new(Vec3::new(-0.25, -2.0, -0.25), Vec3::new(0.0, 1.0, 0.0)),
            triangle: Triangle::new(
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ),
            aabb_a: Aabb::new(Vec3::new(-0.5, -0.5, -0.5), Vec3::zeros()),
            aabb_b: Aabb::new(Vec3::new(0.2, 0.2, 0.2), Vec3::new(1.0, 1.0, 1.0)),
            obb: Obb::new(
                Vec3::new(-1.0, 0.0, 0.0),
                [Vec3::x(), Vec3::y(), Vec3::z()],
                Vec3::new(0.5, 0.5, 0.5),
            ),
            bezier: [
                Vec3::new(-0.8, 0.58, 1.0),
                Vec3::new(1.76, 1.0, -0.3),
                Vec3::new(0.94, -0.7, 2.3),
            ],
            hierarchy: vec![
                EulerTransform::new(unit, Vec3::new(0.0, 0.0, -6.8), Vec3::new(0.2, 1.0, 0.0)),
                EulerTransform::new(unit, Vec3::new(0.0, 0.0, -1.4), Vec3::new(0.4, 0.0, 0.0)),
                EulerTransform::new(unit, Vec3::zeros(), Vec3::new(0.3, 0.0, 0.0)),
            ],
            joint_radius: 0.03,
        }
    }
}

impl SceneConfig {
    /// Validate the scene
    ///
    /// Boxes must have `min <= max` on every axis; radii must not be negative or NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Aabb::try_new(self.aabb_a.min, self.aabb_a.max)?;
        Aabb::try_new(self.aabb_b.min, self.aabb_b.max)?;

        if !(self.sphere.radius >= 0.0) {
            return Err(ConfigError::Invalid(format!("Sphere radius must be non-negative: {}", self.sphere.radius)));
        }
        if !(self.joint_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!("Joint radius must be non-negative: {}", self.joint_radius)));
        }
        Ok(())
    }
}

/// # Complete Demo Configuration
///
/// Top-level configuration read by the demo binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Default log level, overridable with `RUST_LOG`
    pub log_level: String,
    /// Camera placement and projection
    pub camera: Camera,
    /// Target screen rectangle
    pub viewport: Viewport,
    /// Scene contents
    pub scene: SceneConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            camera: Camera::default(),
            viewport: Viewport::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set camera
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Set viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    fn validate_camera(camera: &Camera) -> Result<(), ConfigError> {
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(ConfigError::Invalid(format!(
                "Clip planes must satisfy 0 < near < far (near = {}, far = {})",
                camera.near, camera.far
            )));
        }
        if !(camera.fov_y > 0.0 && camera.fov_y < constants::PI) {
            return Err(ConfigError::Invalid(format!(
                "Field of view must be in (0, pi) radians: {}",
                camera.fov_y
            )));
        }
        if camera.aspect == 0.0 || !camera.aspect.is_finite() {
            return Err(ConfigError::Invalid(format!("Aspect ratio must be non-zero: {}", camera.aspect)));
        }
        Ok(())
    }

    fn validate_viewport(viewport: &Viewport) -> Result<(), ConfigError> {
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Viewport size must be positive: {}x{}",
                viewport.width, viewport.height
            )));
        }
        Ok(())
    }
}

impl Config for DemoConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_camera(&self.camera)?;
        Self::validate_viewport(&self.viewport)?;
        self.scene.validate()
    }
}

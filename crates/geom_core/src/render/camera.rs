//! # Camera and Screen Mapping
//!
//! Builds the world → clip → screen chain used to turn world-space line lists
//! into pixel coordinates.
//!
//! ## Pipeline
//! 1. `view = inverse(camera world matrix)`
//! 2. `view_projection = view · perspective`
//! 3. `screen = transform_coord(transform_coord(p, view_projection), viewport)`
//!
//! All matrices use the row-vector convention described in
//! [`crate::foundation::math`], so composition reads left to right.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::GeometryResult;
use crate::foundation::math::{EulerTransform, Mat4, Mat4Ext, Vec3};

/// Default vertical field of view in radians
pub const DEFAULT_FOV_Y: f32 = 0.45;

/// Default near clip distance
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far clip distance
pub const DEFAULT_FAR: f32 = 100.0;

/// Default window width in pixels
pub const DEFAULT_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: f32 = 720.0;

/// Perspective camera placed by an Euler transform
///
/// The camera looks down its local +Z axis with +Y up. Moving and turning
/// the camera means editing `transform`; matrices are rebuilt on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Camera placement in world space
    pub transform: EulerTransform,

    /// Vertical field of view in radians
    pub fov_y: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to the near clipping plane
    pub near: f32,

    /// Distance to the far clipping plane
    pub far: f32,
}

impl Default for Camera {
    /// Slightly pitched down, pulled back from the origin, 1280x720
    fn default() -> Self {
        Self {
            transform: EulerTransform::new(
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(0.26, 0.0, 0.0),
                Vec3::new(0.0, 1.9, -6.49),
            ),
            fov_y: DEFAULT_FOV_Y,
            aspect: DEFAULT_WIDTH / DEFAULT_HEIGHT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl Camera {
    /// Create a camera from its transform and projection parameters
    pub fn new(transform: EulerTransform, fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            transform,
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// Move the camera by a world-space offset
    pub fn translate_by(&mut self, delta: Vec3) {
        self.transform.translate += delta;
        trace!("Camera translate updated to: {:?}", self.transform.translate);
    }

    /// Turn the camera by Euler angle deltas (radians)
    pub fn rotate_by(&mut self, delta: Vec3) {
        self.transform.rotate += delta;
        trace!("Camera rotate updated to: {:?}", self.transform.rotate);
    }

    /// Camera-to-world matrix
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// World-to-camera matrix
    ///
    /// Produces NaN/Inf entries when the transform has a zero scale; use
    /// [`Camera::checked_view_projection`] to catch that.
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().cofactor_inverse()
    }

    /// Perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_fov_matrix(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let view_projection = self.view_matrix() * self.projection_matrix();
        debug!("View-projection: {:?}", view_projection.to_grid());
        view_projection
    }

    /// Combined view-projection matrix, failing if the camera matrix is singular
    pub fn checked_view_projection(&self) -> GeometryResult<Mat4> {
        let view = self.world_matrix().checked_inverse()?;
        Ok(view * self.projection_matrix())
    }
}

/// Screen rectangle and depth range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Left edge in pixels
    pub left: f32,
    /// Top edge in pixels
    pub top: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Depth mapped from NDC z = 0
    pub min_depth: f32,
    /// Depth mapped from NDC z = 1
    pub max_depth: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Viewport {
    /// Full-window viewport at the origin with depth `[0, 1]`
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// NDC-to-screen matrix (y flipped so +Y is down on screen)
    pub fn matrix(&self) -> Mat4 {
        Mat4::viewport_matrix(self.left, self.top, self.width, self.height, self.min_depth, self.max_depth)
    }
}

/// World-space to screen-space mapper
///
/// Holds the two matrices so a whole line list can be projected without
/// rebuilding them per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjector {
    /// World-to-clip matrix
    pub view_projection: Mat4,
    /// NDC-to-screen matrix
    pub viewport: Mat4,
}

impl ScreenProjector {
    /// Create a projector from precomputed matrices
    pub fn new(view_projection: Mat4, viewport: Mat4) -> Self {
        Self {
            view_projection,
            viewport,
        }
    }

    /// Create a projector for a camera rendering into a viewport
    pub fn from_camera(camera: &Camera, viewport: &Viewport) -> Self {
        Self::new(camera.view_projection(), viewport.matrix())
    }

    /// Create a projector, failing if the camera matrix is singular
    pub fn checked_from_camera(camera: &Camera, viewport: &Viewport) -> GeometryResult<Self> {
        Ok(Self::new(camera.checked_view_projection()?, viewport.matrix()))
    }

    /// Map a world point to screen space
    ///
    /// A point on the camera plane (clip `w == 0`) yields Inf/NaN.
    pub fn project_point(&self, point: &Vec3) -> Vec3 {
        let ndc = self.view_projection.transform_coord(point);
        self.viewport.transform_coord(&ndc)
    }

    /// Map a world point to screen space, rejecting clip `w == 0`
    pub fn checked_project_point(&self, point: &Vec3) -> GeometryResult<Vec3> {
        let ndc = self.view_projection.checked_transform_coord(point)?;
        self.viewport.checked_transform_coord(&ndc)
    }
}

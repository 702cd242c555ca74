//! Math utilities and types
//!
//! Vector and matrix aliases over nalgebra plus the row-vector transform
//! helpers used by the collision and camera code.
//!
//! # Conventions
//!
//! Matrices use the row-vector convention: a point is a row vector on the
//! left, `p' = p · M`. Element `(r, c)` of a [`Mat4`] is row `r`, column `c`,
//! translation lives in row 3, and `a * b` applies `a` first, then `b`.
//! nalgebra's own `transform_point`/`new_translation` helpers assume column
//! vectors, so everything here goes through [`Mat4Ext`] instead.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

pub use nalgebra::{Matrix4, RowVector4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type (point or direction, by context)
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type (row-vector convention)
pub type Mat4 = Matrix4<f32>;

/// Scale / Euler rotation / translation triple
///
/// Rotation is in radians, applied X then Y then Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EulerTransform {
    /// Per-axis scale factors
    pub scale: Vec3,

    /// Euler angles in radians
    pub rotate: Vec3,

    /// Translation
    pub translate: Vec3,
}

impl Default for EulerTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotate: Vec3::zeros(),
            translate: Vec3::zeros(),
        }
    }
}

impl EulerTransform {
    /// Create a transform from its three parts
    pub fn new(scale: Vec3, rotate: Vec3, translate: Vec3) -> Self {
        Self { scale, rotate, translate }
    }

    /// Create a transform with only translation
    pub fn from_translation(translate: Vec3) -> Self {
        Self {
            translate,
            ..Default::default()
        }
    }

    /// Convert to an affine matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::affine_matrix(&self.scale, &self.rotate, &self.translate)
    }
}

/// Chain local matrices into world matrices, parent first
///
/// `world[0] = local[0]` and `world[i] = local[i] * world[i - 1]`.
pub fn compose_hierarchy(locals: &[Mat4]) -> Vec<Mat4> {
    let mut worlds: Vec<Mat4> = Vec::with_capacity(locals.len());
    for local in locals {
        let world = match worlds.last() {
            Some(parent) => local * parent,
            None => *local,
        };
        worlds.push(world);
    }
    worlds
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Clamp a value between min and max
    ///
    /// Unlike `f32::clamp` this never panics: with `min > max` the result is
    /// `min` for values below it and `max` otherwise.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Checked operations on [`Vec3`]
pub trait Vec3Ext {
    /// Normalize, failing on a zero-length vector instead of producing NaN
    fn normalize_checked(&self) -> GeometryResult<Vec3>;
}

impl Vec3Ext for Vec3 {
    fn normalize_checked(&self) -> GeometryResult<Vec3> {
        let length = self.norm();
        if length == 0.0 {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(self / length)
    }
}

/// Row-vector constructors and operations for [`Mat4`]
pub trait Mat4Ext {
    /// Build from a row-major `[[f32; 4]; 4]` grid
    fn from_grid(rows: [[f32; 4]; 4]) -> Mat4;

    /// Copy out as a row-major `[[f32; 4]; 4]` grid
    fn to_grid(&self) -> [[f32; 4]; 4];

    /// Per-axis scale matrix
    fn scale_matrix(scale: &Vec3) -> Mat4;

    /// Rotation about the X axis
    fn rotate_x_matrix(radian: f32) -> Mat4;

    /// Rotation about the Y axis
    fn rotate_y_matrix(radian: f32) -> Mat4;

    /// Rotation about the Z axis
    fn rotate_z_matrix(radian: f32) -> Mat4;

    /// Translation matrix (translation in row 3)
    fn translate_matrix(translate: &Vec3) -> Mat4;

    /// Scale, then rotate X·Y·Z, then translate
    fn affine_matrix(scale: &Vec3, rotate: &Vec3, translate: &Vec3) -> Mat4;

    /// Symmetric perspective projection
    fn perspective_fov_matrix(fov_y: f32, aspect_ratio: f32, near_clip: f32, far_clip: f32) -> Mat4;

    /// Orthographic projection
    fn orthographic_matrix(left: f32, top: f32, right: f32, bottom: f32, near_clip: f32, far_clip: f32) -> Mat4;

    /// NDC to screen space
    fn viewport_matrix(left: f32, top: f32, width: f32, height: f32, min_depth: f32, max_depth: f32) -> Mat4;

    /// Determinant by cofactor expansion along row 0
    fn cofactor_determinant(&self) -> f32;

    /// Inverse via the adjugate; NaN/Inf on a singular matrix
    fn cofactor_inverse(&self) -> Mat4;

    /// Inverse via the adjugate, rejecting a zero determinant
    fn checked_inverse(&self) -> GeometryResult<Mat4>;

    /// Transform a point with perspective divide
    fn transform_coord(&self, point: &Vec3) -> Vec3;

    /// Transform a point with perspective divide, rejecting `w == 0`
    fn checked_transform_coord(&self, point: &Vec3) -> GeometryResult<Vec3>;

    /// Transform a direction by the upper 3x3 block (no translation, no divide)
    fn transform_direction(&self, direction: &Vec3) -> Vec3;
}

/// `v · M` for a homogeneous row vector
fn row_multiply(m: &Mat4, v: &Vec4) -> Vec4 {
    (v.transpose() * m).transpose()
}

/// Determinant of the 3x3 minor left after removing `row` and `col`
fn minor(m: &Mat4, row: usize, col: usize) -> f32 {
    let mut cells = [0.0_f32; 9];
    let mut index = 0;
    for r in (0..4).filter(|&r| r != row) {
        for c in (0..4).filter(|&c| c != col) {
            cells[index] = m[(r, c)];
            index += 1;
        }
    }
    let [a, b, c, d, e, f, g, h, i] = cells;
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

fn cofactor(m: &Mat4, row: usize, col: usize) -> f32 {
    let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
    sign * minor(m, row, col)
}

impl Mat4Ext for Mat4 {
    fn from_grid(rows: [[f32; 4]; 4]) -> Mat4 {
        Mat4::from_fn(|r, c| rows[r][c])
    }

    fn to_grid(&self) -> [[f32; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self[(r, c)];
            }
        }
        rows
    }

    fn scale_matrix(scale: &Vec3) -> Mat4 {
        Mat4::new(
            scale.x, 0.0, 0.0, 0.0,
            0.0, scale.y, 0.0, 0.0,
            0.0, 0.0, scale.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rotate_x_matrix(radian: f32) -> Mat4 {
        let (sin, cos) = radian.sin_cos();
        Mat4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, cos, sin, 0.0,
            0.0, -sin, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rotate_y_matrix(radian: f32) -> Mat4 {
        let (sin, cos) = radian.sin_cos();
        Mat4::new(
            cos, 0.0, -sin, 0.0,
            0.0, 1.0, 0.0, 0.0,
            sin, 0.0, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rotate_z_matrix(radian: f32) -> Mat4 {
        let (sin, cos) = radian.sin_cos();
        Mat4::new(
            cos, sin, 0.0, 0.0,
            -sin, cos, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn translate_matrix(translate: &Vec3) -> Mat4 {
        Mat4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            translate.x, translate.y, translate.z, 1.0,
        )
    }

    fn affine_matrix(scale: &Vec3, rotate: &Vec3, translate: &Vec3) -> Mat4 {
        let rotation = Mat4::rotate_x_matrix(rotate.x)
            * (Mat4::rotate_y_matrix(rotate.y) * Mat4::rotate_z_matrix(rotate.z));
        Mat4::scale_matrix(scale) * rotation * Mat4::translate_matrix(translate)
    }

    fn perspective_fov_matrix(fov_y: f32, aspect_ratio: f32, near_clip: f32, far_clip: f32) -> Mat4 {
        let cot = 1.0 / (fov_y * 0.5).tan();
        let depth = far_clip - near_clip;

        let mut result = Mat4::zeros();
        result[(0, 0)] = cot / aspect_ratio;
        result[(1, 1)] = cot;
        result[(2, 2)] = far_clip / depth;
        result[(2, 3)] = 1.0;
        result[(3, 2)] = -near_clip * far_clip / depth;
        result
    }

    fn orthographic_matrix(left: f32, top: f32, right: f32, bottom: f32, near_clip: f32, far_clip: f32) -> Mat4 {
        let mut result = Mat4::zeros();
        result[(0, 0)] = 2.0 / (right - left);
        result[(1, 1)] = 2.0 / (top - bottom);
        result[(2, 2)] = 1.0 / (far_clip - near_clip);
        result[(3, 0)] = (left + right) / (left - right);
        result[(3, 1)] = (top + bottom) / (bottom - top);
        result[(3, 2)] = near_clip / (near_clip - far_clip);
        result[(3, 3)] = 1.0;
        result
    }

    fn viewport_matrix(left: f32, top: f32, width: f32, height: f32, min_depth: f32, max_depth: f32) -> Mat4 {
        let mut result = Mat4::zeros();
        result[(0, 0)] = width * 0.5;
        result[(1, 1)] = -height * 0.5;
        result[(2, 2)] = max_depth - min_depth;
        result[(3, 0)] = left + width * 0.5;
        result[(3, 1)] = top + height * 0.5;
        result[(3, 2)] = min_depth;
        result[(3, 3)] = 1.0;
        result
    }

    fn cofactor_determinant(&self) -> f32 {
        (0..4).map(|c| self[(0, c)] * cofactor(self, 0, c)).sum()
    }

    fn cofactor_inverse(&self) -> Mat4 {
        let det = self.cofactor_determinant();
        // adjugate is the transposed cofactor matrix
        Mat4::from_fn(|r, c| cofactor(self, c, r) / det)
    }

    fn checked_inverse(&self) -> GeometryResult<Mat4> {
        let det = self.cofactor_determinant();
        if det == 0.0 {
            trace!("checked_inverse: singular matrix {:?}", self);
            return Err(GeometryError::SingularMatrix);
        }
        Ok(Mat4::from_fn(|r, c| cofactor(self, c, r) / det))
    }

    fn transform_coord(&self, point: &Vec3) -> Vec3 {
        let h = row_multiply(self, &point.push(1.0));
        debug_assert!(h.w != 0.0, "transform_coord: w == 0 for point {point:?}");
        Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w)
    }

    fn checked_transform_coord(&self, point: &Vec3) -> GeometryResult<Vec3> {
        let h = row_multiply(self, &point.push(1.0));
        if h.w == 0.0 {
            return Err(GeometryError::DegenerateProjection);
        }
        Ok(Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w))
    }

    fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        row_multiply(self, &direction.push(0.0)).xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f32 = 1e-5;

    fn sample_matrix() -> Mat4 {
        Mat4::affine_matrix(
            &Vec3::new(1.2, 0.79, -2.1),
            &Vec3::new(0.4, 1.43, -0.8),
            &Vec3::new(2.7, -4.15, 1.57),
        )
    }

    #[test]
    fn test_vector_basics() {
        let v1 = Vec3::new(1.0, 3.0, -5.0);
        let v2 = Vec3::new(4.0, -1.0, 2.0);

        assert_eq!(v1 + v2, Vec3::new(5.0, 2.0, -3.0));
        assert_eq!(v1 - v2, Vec3::new(-3.0, 4.0, -7.0));
        assert_eq!(4.0 * v1, Vec3::new(4.0, 12.0, -20.0));
        assert_eq!(v1 * 4.0, 4.0 * v1);
        assert_eq!(-v1, Vec3::new(-1.0, -3.0, 5.0));
        assert_eq!(v1.dot(&v2), -9.0);
        assert_eq!(v1.cross(&v2), Vec3::new(1.0, -22.0, -13.0));
        assert_relative_eq!(v1.norm(), 35.0_f32.sqrt(), epsilon = EPSILON);
        assert_relative_eq!(v1.lerp(&v2, 0.5), Vec3::new(2.5, 1.0, -1.5), epsilon = EPSILON);

        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_normalize_has_unit_length() {
        for v in [
            Vec3::new(1.0, 3.0, -5.0),
            Vec3::new(0.001, 0.0, 0.0),
            Vec3::new(-250.0, 12.5, 99.0),
        ] {
            assert_relative_eq!(v.normalize().norm(), 1.0, epsilon = EPSILON);
            let checked = v.normalize_checked().unwrap();
            assert_relative_eq!(checked.norm(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert!(Vec3::zeros().normalize().x.is_nan());
        assert_eq!(Vec3::zeros().normalize_checked(), Err(GeometryError::DegenerateVector));
    }

    #[test]
    fn test_grid_roundtrip_and_layout() {
        let rows = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        let m = Mat4::from_grid(rows);
        assert_eq!(m[(0, 3)], 4.0);
        assert_eq!(m[(3, 0)], 13.0);
        assert_eq!(m.to_grid(), rows);
    }

    #[test]
    fn test_multiply_matches_row_major_product() {
        let a = Mat4::from_grid([
            [3.2, 0.7, 9.6, 4.4],
            [5.5, 1.3, 7.8, 2.1],
            [6.9, 8.0, 2.6, 1.0],
            [0.5, 7.2, 5.1, 3.3],
        ]);
        let b = Mat4::from_grid([
            [4.1, 6.5, 3.3, 2.2],
            [8.8, 0.6, 9.9, 7.7],
            [1.1, 5.5, 6.6, 0.0],
            [3.3, 9.9, 8.8, 2.2],
        ]);
        let product = a * b;
        let expected_00 = 3.2 * 4.1 + 0.7 * 8.8 + 9.6 * 1.1 + 4.4 * 3.3;
        assert_relative_eq!(product[(0, 0)], expected_00, epsilon = 1e-3);
        let expected_31 = 0.5 * 6.5 + 7.2 * 0.6 + 5.1 * 5.5 + 3.3 * 9.9;
        assert_relative_eq!(product[(3, 1)], expected_31, epsilon = 1e-3);
    }

    #[test]
    fn test_multiply_is_associative() {
        let a = sample_matrix();
        let b = Mat4::affine_matrix(&Vec3::new(0.5, 2.0, 1.0), &Vec3::new(-0.3, 0.2, 2.4), &Vec3::new(1.0, 0.0, -3.0));
        let c = Mat4::perspective_fov_matrix(0.63, 1.33, 0.1, 150.0);
        assert_relative_eq!((a * b) * c, a * (b * c), epsilon = 1e-3);
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let m = sample_matrix();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_cofactor_determinant_matches_nalgebra() {
        let m = Mat4::from_grid([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 4.0, 0.0, 2.0],
            [0.0, 1.0, 5.0, 1.0],
            [3.0, 2.0, 1.0, 6.0],
        ]);
        assert_relative_eq!(m.cofactor_determinant(), m.determinant(), epsilon = 1e-3);
        assert_eq!(Mat4::identity().cofactor_determinant(), 1.0);
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let m = sample_matrix();
        assert_relative_eq!(m * m.cofactor_inverse(), Mat4::identity(), epsilon = 1e-4);
        assert_relative_eq!(m.checked_inverse().unwrap() * m, Mat4::identity(), epsilon = 1e-4);
    }

    #[test]
    fn test_singular_inverse() {
        let singular = Mat4::scale_matrix(&Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(singular.checked_inverse(), Err(GeometryError::SingularMatrix));
        let silent = singular.cofactor_inverse();
        assert!(silent.iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_translate_and_scale_points() {
        let t = Mat4::translate_matrix(&Vec3::new(4.1, 2.6, 0.8));
        assert_relative_eq!(t.transform_coord(&Vec3::zeros()), Vec3::new(4.1, 2.6, 0.8), epsilon = EPSILON);

        let s = Mat4::scale_matrix(&Vec3::new(1.5, 5.2, 7.3));
        assert_relative_eq!(s.transform_coord(&Vec3::new(1.0, 1.0, 1.0)), Vec3::new(1.5, 5.2, 7.3), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_directions() {
        let quarter = constants::HALF_PI;
        // row-vector rotation about Z takes +X to +Y
        let z = Mat4::rotate_z_matrix(quarter).transform_coord(&Vec3::x());
        assert_abs_diff_eq!(z, Vec3::y(), epsilon = EPSILON);
        // about X takes +Y to +Z
        let x = Mat4::rotate_x_matrix(quarter).transform_coord(&Vec3::y());
        assert_abs_diff_eq!(x, Vec3::z(), epsilon = EPSILON);
        // about Y takes +Z to +X
        let y = Mat4::rotate_y_matrix(quarter).transform_coord(&Vec3::z());
        assert_abs_diff_eq!(y, Vec3::x(), epsilon = EPSILON);
    }

    #[test]
    fn test_affine_matrix_composition_order() {
        let scale = Vec3::new(1.2, 0.79, -2.1);
        let rotate = Vec3::new(0.4, 1.43, -0.8);
        let translate = Vec3::new(2.7, -4.15, 1.57);
        let composed = Mat4::scale_matrix(&scale)
            * Mat4::rotate_x_matrix(rotate.x)
            * Mat4::rotate_y_matrix(rotate.y)
            * Mat4::rotate_z_matrix(rotate.z)
            * Mat4::translate_matrix(&translate);
        let affine = Mat4::affine_matrix(&scale, &rotate, &translate);
        assert_relative_eq!(affine, composed, epsilon = EPSILON);
        assert_eq!(affine[(3, 0)], 2.7);
        assert_eq!(affine[(3, 3)], 1.0);
        assert_eq!(affine[(0, 3)], 0.0);
    }

    #[test]
    fn test_transform_inverse_roundtrip() {
        let m = sample_matrix();
        let inverse = m.cofactor_inverse();
        for v in [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-7.5, 0.25, 4.0), Vec3::zeros()] {
            let back = inverse.transform_coord(&m.transform_coord(&v));
            assert_relative_eq!(back, v, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_perspective_layout() {
        let p = Mat4::perspective_fov_matrix(0.63, 1.33, 0.1, 1000.0);
        let cot = 1.0 / (0.315_f32).tan();
        assert_relative_eq!(p[(0, 0)], cot / 1.33, epsilon = EPSILON);
        assert_relative_eq!(p[(1, 1)], cot, epsilon = EPSILON);
        assert_relative_eq!(p[(2, 2)], 1000.0 / 999.9, epsilon = EPSILON);
        assert_eq!(p[(2, 3)], 1.0);
        assert_relative_eq!(p[(3, 2)], -100.0 / 999.9, epsilon = EPSILON);
        assert_eq!(p[(3, 3)], 0.0);

        // near plane maps to depth 0, far plane to depth 1
        let near = p.transform_coord(&Vec3::new(0.0, 0.0, 0.1));
        let far = p.transform_coord(&Vec3::new(0.0, 0.0, 1000.0));
        assert_abs_diff_eq!(near.z, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_orthographic_and_viewport() {
        let o = Mat4::orthographic_matrix(-160.0, 160.0, 200.0, 300.0, 0.0, 1000.0);
        assert_relative_eq!(o[(0, 0)], 2.0 / 360.0, epsilon = EPSILON);
        assert_relative_eq!(o[(1, 1)], 2.0 / -140.0, epsilon = EPSILON);
        assert_relative_eq!(o[(3, 0)], 40.0 / -360.0, epsilon = EPSILON);

        let v = Mat4::viewport_matrix(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
        let center = v.transform_coord(&Vec3::zeros());
        assert_relative_eq!(center, Vec3::new(640.0, 360.0, 0.0), epsilon = EPSILON);
        let top_left = v.transform_coord(&Vec3::new(-1.0, 1.0, 1.0));
        assert_relative_eq!(top_left, Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_checked_transform_rejects_zero_w() {
        let p = Mat4::perspective_fov_matrix(0.45, 1.0, 0.1, 100.0);
        // a point on the eye plane has w = z = 0
        assert_eq!(p.checked_transform_coord(&Vec3::new(1.0, 1.0, 0.0)), Err(GeometryError::DegenerateProjection));
        assert!(p.checked_transform_coord(&Vec3::new(1.0, 1.0, 5.0)).is_ok());
    }

    #[test]
    fn test_transform_direction_ignores_translation() {
        let m = Mat4::affine_matrix(&Vec3::new(2.0, 2.0, 2.0), &Vec3::zeros(), &Vec3::new(10.0, 20.0, 30.0));
        assert_relative_eq!(m.transform_direction(&Vec3::x()), Vec3::new(2.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_compose_hierarchy() {
        let shoulder = EulerTransform::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, -6.8), Vec3::new(0.2, 1.0, 0.0));
        let elbow = EulerTransform::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, -1.4), Vec3::new(0.4, 0.0, 0.0));
        let hand = EulerTransform::from_translation(Vec3::new(0.3, 0.0, 0.0));
        let locals = [shoulder.to_matrix(), elbow.to_matrix(), hand.to_matrix()];

        let worlds = compose_hierarchy(&locals);
        assert_eq!(worlds.len(), 3);
        assert_eq!(worlds[0], locals[0]);
        assert_relative_eq!(worlds[2], locals[2] * locals[1] * locals[0], epsilon = EPSILON);
        assert_relative_eq!(worlds[0].transform_coord(&Vec3::zeros()), Vec3::new(0.2, 1.0, 0.0), epsilon = EPSILON);
        assert!(compose_hierarchy(&[]).is_empty());
    }

    #[test]
    fn test_utils() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::HALF_PI), 90.0, epsilon = 1e-4);
        assert_eq!(utils::clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(utils::clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(utils::clamp(0.5, 1.0, 0.0), 1.0);
        assert_eq!(utils::lerp(2.0, 4.0, 0.25), 2.5);
    }
}

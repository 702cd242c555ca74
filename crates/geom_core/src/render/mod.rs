//! View and projection setup
//!
//! The camera, viewport and the world-to-screen mapping built from them.

pub mod camera;

pub use camera::{Camera, ScreenProjector, Viewport};

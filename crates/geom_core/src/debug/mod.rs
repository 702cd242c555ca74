//! Debug visualization
//!
//! Wireframe line lists for every primitive, ready to be projected to
//! screen space and handed to whatever draws lines.

pub mod draw;

pub use draw::LineList;

//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and row-vector matrix operations
//! - Logging utilities

pub mod math;
pub mod logging;

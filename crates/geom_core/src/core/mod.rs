//! # Core Module
//!
//! Shared configuration for applications built on the geometry core.

pub mod config;

pub use config::{Config, ConfigError, DemoConfig, SceneConfig};

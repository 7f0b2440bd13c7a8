//! Configuration module for bizbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BizbookPaths;
pub use settings::Settings;

//! Configuration module for Fatora
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FatoraPaths;
pub use settings::Settings;

//! vkforge-core: pipeline logic for vkforge
//!
//! This crate provides the dependency recipe, the imgui bindings copy, the
//! project configuration, and the bootstrap/build/run pipeline steps.

pub mod bindings;
pub mod config;
mod error;
pub mod pipeline;
pub mod recipe;

pub use config::{BuildType, Project};
pub use error::CoreError;
pub use pipeline::BootstrapOptions;

// Re-export platform types used at the CLI boundary
pub use vkforge_platform::{HostInfo, Os, PlatformError, Tool};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

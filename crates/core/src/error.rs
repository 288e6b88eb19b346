//! Error types for vkforge-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while driving the pipeline
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("platform error: {0}")]
  Platform(#[from] vkforge_platform::PlatformError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("recipe already exists (use --force to overwrite): {}", path.display())]
  RecipeExists { path: PathBuf },

  #[error("package not resolved by conan: {package} (run bootstrap?)")]
  PackageNotResolved { package: String },

  #[error("imgui bindings not found at {}", path.display())]
  BindingsMissing { path: PathBuf },

  #[error("build directory not found: {} (run bootstrap first)", path.display())]
  BuildDirMissing { path: PathBuf },

  #[error("project binary not found: {} (did the build produce it?)", path.display())]
  BinaryMissing { path: PathBuf },
}

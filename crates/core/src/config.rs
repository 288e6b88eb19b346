//! Project configuration.
//!
//! Build type, build directory, and binary name are parameters rather than
//! literals scattered through the pipeline; the CLI overrides them per
//! invocation (flags first, then `VKFORGE_*` env vars, then defaults).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

pub const DEFAULT_BIN_NAME: &str = "cpp_vulkan_conan_template";
pub const DEFAULT_BUILD_DIR: &str = "./build";

/// CMake/Conan build configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BuildType {
  #[default]
  Debug,
  Release,
}

impl BuildType {
  /// The capitalized identifier both Conan and CMake expect
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for BuildType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "debug" => Ok(Self::Debug),
      "release" => Ok(Self::Release),
      other => Err(format!("unknown build type: {} (expected debug or release)", other)),
    }
  }
}

/// Identity of the C++ project being driven
#[derive(Debug, Clone, Serialize)]
pub struct Project {
  /// Name of the binary CMake produces
  pub bin_name: String,
  /// Directory Conan and CMake generate into, relative to the project root
  pub build_dir: PathBuf,
}

impl Project {
  pub fn new(bin_name: impl Into<String>, build_dir: impl Into<PathBuf>) -> Self {
    Self {
      bin_name: bin_name.into(),
      build_dir: build_dir.into(),
    }
  }

  /// Defaults, with `VKFORGE_BIN_NAME` / `VKFORGE_BUILD_DIR` taken into
  /// account when set.
  pub fn from_env() -> Self {
    let bin_name = std::env::var("VKFORGE_BIN_NAME").unwrap_or_else(|_| DEFAULT_BIN_NAME.to_string());
    let build_dir = std::env::var("VKFORGE_BUILD_DIR").unwrap_or_else(|_| DEFAULT_BUILD_DIR.to_string());
    Self::new(bin_name, build_dir)
  }
}

impl Default for Project {
  fn default() -> Self {
    Self::new(DEFAULT_BIN_NAME, DEFAULT_BUILD_DIR)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_type_identifiers_are_capitalized() {
    assert_eq!(BuildType::Debug.as_str(), "Debug");
    assert_eq!(BuildType::Release.as_str(), "Release");
  }

  #[test]
  fn build_type_parses_case_insensitively() {
    assert_eq!("debug".parse::<BuildType>().unwrap(), BuildType::Debug);
    assert_eq!("Release".parse::<BuildType>().unwrap(), BuildType::Release);
    assert!("profile".parse::<BuildType>().is_err());
  }

  #[test]
  fn default_build_type_is_debug() {
    assert_eq!(BuildType::default(), BuildType::Debug);
  }

  #[test]
  fn default_project_matches_template() {
    let project = Project::default();
    assert_eq!(project.bin_name, "cpp_vulkan_conan_template");
    assert_eq!(project.build_dir, PathBuf::from("./build"));
  }
}

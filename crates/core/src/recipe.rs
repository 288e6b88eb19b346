//! Conan dependency recipe.
//!
//! The third-party stack of the C++ project is declared here as a fixed,
//! ordered requirement list and rendered to a `conanfile.py`. A Python recipe
//! (rather than `conanfile.txt`) is required because the `vulkan-headers`
//! requirement carries a version-conflict override, which the text format
//! cannot express.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::error::CoreError;

/// File name the rendered recipe is written under
pub const RECIPE_FILE: &str = "conanfile.py";

/// Conan generators the recipe declares for CMake integration
pub const GENERATORS: [&str; 2] = ["CMakeToolchain", "CMakeDeps"];

/// A single pinned requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
  pub name: &'static str,
  pub version: &'static str,
  /// Overrides version conflicts raised by transitive requirements
  pub force: bool,
}

impl Requirement {
  const fn pinned(name: &'static str, version: &'static str) -> Self {
    Self {
      name,
      version,
      force: false,
    }
  }

  const fn forced(name: &'static str, version: &'static str) -> Self {
    Self {
      name,
      version,
      force: true,
    }
  }

  /// Conan reference string, `name/version`
  pub fn reference(&self) -> String {
    format!("{}/{}", self.name, self.version)
  }
}

/// The full dependency set, in declaration order.
pub const REQUIREMENTS: [Requirement; 12] = [
  Requirement::pinned("spdlog", "1.14.1"),
  Requirement::pinned("glfw", "3.4"),
  Requirement::forced("vulkan-headers", "1.3.290.0"),
  Requirement::pinned("vk-bootstrap", "0.7"),
  Requirement::pinned("vulkan-memory-allocator", "cci.20231120"),
  Requirement::pinned("glm", "cci.20230113"),
  Requirement::pinned("imgui", "cci.20230105+1.89.2.docking"),
  Requirement::pinned("stb", "cci.20230920"),
  Requirement::pinned("entt", "3.13.2"),
  Requirement::pinned("shaderc", "2024.1"),
  Requirement::pinned("tinyobjloader", "2.0.0-rc10"),
  Requirement::pinned("tinygltf", "2.9.0"),
];

/// Render the recipe file contents.
///
/// Output is deterministic: requirements appear in [`REQUIREMENTS`] order.
pub fn render() -> String {
  let mut out = String::new();
  out.push_str("from conan import ConanFile\n\n\n");
  out.push_str("class ProjectRecipe(ConanFile):\n");
  out.push_str("    settings = \"os\", \"compiler\", \"build_type\", \"arch\"\n");

  let generators = GENERATORS
    .iter()
    .map(|g| format!("\"{}\"", g))
    .collect::<Vec<_>>()
    .join(", ");
  let _ = writeln!(out, "    generators = {}", generators);

  out.push_str("\n    def requirements(self):\n");
  for req in REQUIREMENTS {
    if req.force {
      let _ = writeln!(out, "        self.requires(\"{}\", force=True)", req.reference());
    } else {
      let _ = writeln!(out, "        self.requires(\"{}\")", req.reference());
    }
  }
  out
}

/// Write the rendered recipe to `dir/conanfile.py`.
///
/// Refuses to overwrite an existing file unless `force` is set, so a
/// hand-edited recipe is never clobbered by accident.
pub fn write(dir: &Path, force: bool) -> Result<std::path::PathBuf, CoreError> {
  let path = dir.join(RECIPE_FILE);
  if path.exists() && !force {
    return Err(CoreError::RecipeExists { path });
  }
  std::fs::write(&path, render())?;
  info!(path = %path.display(), "recipe written");
  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn declares_exactly_twelve_requirements_in_order() {
    let refs: Vec<String> = REQUIREMENTS.iter().map(|r| r.reference()).collect();
    assert_eq!(
      refs,
      [
        "spdlog/1.14.1",
        "glfw/3.4",
        "vulkan-headers/1.3.290.0",
        "vk-bootstrap/0.7",
        "vulkan-memory-allocator/cci.20231120",
        "glm/cci.20230113",
        "imgui/cci.20230105+1.89.2.docking",
        "stb/cci.20230920",
        "entt/3.13.2",
        "shaderc/2024.1",
        "tinyobjloader/2.0.0-rc10",
        "tinygltf/2.9.0",
      ]
    );
  }

  #[test]
  fn only_vulkan_headers_is_forced() {
    let forced: Vec<&str> = REQUIREMENTS.iter().filter(|r| r.force).map(|r| r.name).collect();
    assert_eq!(forced, ["vulkan-headers"]);
  }

  #[test]
  fn render_declares_both_generators() {
    let recipe = render();
    assert!(recipe.contains("generators = \"CMakeToolchain\", \"CMakeDeps\""));
  }

  #[test]
  fn render_emits_force_override() {
    let recipe = render();
    assert!(recipe.contains("self.requires(\"vulkan-headers/1.3.290.0\", force=True)"));
    assert!(recipe.contains("self.requires(\"spdlog/1.14.1\")"));
  }

  #[test]
  fn render_preserves_declaration_order() {
    let recipe = render();
    let spdlog = recipe.find("spdlog/1.14.1").unwrap();
    let glfw = recipe.find("glfw/3.4").unwrap();
    let tinygltf = recipe.find("tinygltf/2.9.0").unwrap();
    assert!(spdlog < glfw && glfw < tinygltf);
  }

  #[test]
  fn write_creates_recipe_file() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), false).unwrap();
    assert_eq!(path, temp.path().join("conanfile.py"));
    let content = std::fs::read_to_string(path).unwrap();
    assert_eq!(content, render());
  }

  #[test]
  fn write_refuses_to_clobber_without_force() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("conanfile.py"), "# hand edited\n").unwrap();

    let err = write(temp.path(), false).unwrap_err();
    assert!(matches!(err, CoreError::RecipeExists { .. }));

    write(temp.path(), true).unwrap();
    let content = std::fs::read_to_string(temp.path().join("conanfile.py")).unwrap();
    assert_eq!(content, render());
  }
}

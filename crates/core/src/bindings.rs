//! ImGui backend bindings copy.
//!
//! The imgui Conan package ships its GLFW/Vulkan backend sources under
//! `res/bindings`, a sibling of its include directory, and the C++ build
//! compiles them directly out of the build directory. After `conan install`
//! this module locates the resolved package and copies the three backend
//! files next to the generated toolchain files.
//!
//! The package folder is recovered from the CMakeDeps data file Conan writes
//! into the build directory (`imgui-*-data.cmake`), which contains a line of
//! the form:
//!
//! ```cmake
//! set(imgui_PACKAGE_FOLDER_DEBUG "/home/user/.conan2/p/imgui1234/p")
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::CoreError;

/// Backend sources the C++ build expects to find in the build directory
pub const BINDING_FILES: [&str; 3] = ["imgui_impl_glfw.cpp", "imgui_impl_glfw.h", "imgui_impl_vulkan.h"];

const PACKAGE_FOLDER_VAR: &str = "imgui_PACKAGE_FOLDER_";

/// Copy the imgui backend bindings into `build_dir`.
///
/// Hard failure if the package cannot be located or any expected file is
/// absent; a missing bindings directory must never be skipped silently, the
/// C++ build would only fail later with a far worse error.
pub fn install(build_dir: &Path) -> Result<(), CoreError> {
  let package_dir = locate_package(build_dir)?;
  let bindings_dir = bindings_dir(&package_dir);

  if !bindings_dir.is_dir() {
    return Err(CoreError::BindingsMissing { path: bindings_dir });
  }

  for file in BINDING_FILES {
    let src = bindings_dir.join(file);
    if !src.is_file() {
      return Err(CoreError::BindingsMissing { path: src });
    }
    std::fs::copy(&src, build_dir.join(file))?;
    debug!(file, "binding copied");
  }

  info!(from = %bindings_dir.display(), to = %build_dir.display(), "imgui bindings installed");
  Ok(())
}

/// The bindings directory is a sibling of the package include directory.
fn bindings_dir(package_dir: &Path) -> PathBuf {
  package_dir.join("include").join("..").join("res").join("bindings")
}

/// Find the imgui package folder via the CMakeDeps data file.
fn locate_package(build_dir: &Path) -> Result<PathBuf, CoreError> {
  let data_file = find_data_file(build_dir)?;
  let content = std::fs::read_to_string(&data_file)?;

  parse_package_folder(&content).ok_or(CoreError::PackageNotResolved {
    package: "imgui".to_string(),
  })
}

fn find_data_file(build_dir: &Path) -> Result<PathBuf, CoreError> {
  for entry in std::fs::read_dir(build_dir)? {
    let entry = entry?;
    let name = entry.file_name();
    let Some(name) = name.to_str() else { continue };
    if name.starts_with("imgui-") && name.ends_with("-data.cmake") {
      return Ok(entry.path());
    }
  }
  Err(CoreError::PackageNotResolved {
    package: "imgui".to_string(),
  })
}

/// Extract the quoted path from the `set(imgui_PACKAGE_FOLDER_<CFG> "...")` line.
fn parse_package_folder(content: &str) -> Option<PathBuf> {
  for line in content.lines() {
    let Some(idx) = line.find(PACKAGE_FOLDER_VAR) else {
      continue;
    };
    let rest = &line[idx + PACKAGE_FOLDER_VAR.len()..];
    let open = rest.find('"')?;
    let rest = &rest[open + 1..];
    let close = rest.find('"')?;
    let path = &rest[..close];
    if !path.is_empty() {
      return Some(PathBuf::from(path));
    }
  }
  None
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn write_data_file(build_dir: &Path, package_dir: &Path) {
    let content = format!(
      "# Conan generated file\nset(imgui_PACKAGE_FOLDER_DEBUG \"{}\")\nset(imgui_INCLUDE_DIRS_DEBUG \"{}/include\")\n",
      package_dir.display(),
      package_dir.display()
    );
    std::fs::write(build_dir.join("imgui-debug-x86_64-data.cmake"), content).unwrap();
  }

  fn populate_bindings(package_dir: &Path) {
    let bindings = package_dir.join("res").join("bindings");
    std::fs::create_dir_all(package_dir.join("include")).unwrap();
    std::fs::create_dir_all(&bindings).unwrap();
    for file in BINDING_FILES {
      std::fs::write(bindings.join(file), format!("// {}\n", file)).unwrap();
    }
  }

  #[test]
  fn parse_extracts_quoted_path() {
    let content = "set(imgui_PACKAGE_FOLDER_RELEASE \"/opt/conan/p/imguiabc/p\")\n";
    assert_eq!(
      parse_package_folder(content),
      Some(PathBuf::from("/opt/conan/p/imguiabc/p"))
    );
  }

  #[test]
  fn parse_ignores_unrelated_lines() {
    assert_eq!(parse_package_folder("set(glfw_PACKAGE_FOLDER_DEBUG \"/x\")\n"), None);
    assert_eq!(parse_package_folder(""), None);
  }

  #[test]
  fn install_copies_all_three_files() {
    let temp = TempDir::new().unwrap();
    let build_dir = temp.path().join("build");
    let package_dir = temp.path().join("pkg");
    std::fs::create_dir_all(&build_dir).unwrap();
    populate_bindings(&package_dir);
    write_data_file(&build_dir, &package_dir);

    install(&build_dir).unwrap();

    for file in BINDING_FILES {
      assert!(build_dir.join(file).is_file(), "{} should be copied", file);
    }
  }

  #[test]
  fn install_fails_when_bindings_dir_absent() {
    let temp = TempDir::new().unwrap();
    let build_dir = temp.path().join("build");
    let package_dir = temp.path().join("pkg");
    std::fs::create_dir_all(&build_dir).unwrap();
    // Package exists but ships no res/bindings directory
    std::fs::create_dir_all(package_dir.join("include")).unwrap();
    write_data_file(&build_dir, &package_dir);

    let err = install(&build_dir).unwrap_err();
    assert!(matches!(err, CoreError::BindingsMissing { .. }));
  }

  #[test]
  fn install_fails_when_a_file_is_absent() {
    let temp = TempDir::new().unwrap();
    let build_dir = temp.path().join("build");
    let package_dir = temp.path().join("pkg");
    std::fs::create_dir_all(&build_dir).unwrap();
    populate_bindings(&package_dir);
    std::fs::remove_file(package_dir.join("res").join("bindings").join("imgui_impl_vulkan.h")).unwrap();
    write_data_file(&build_dir, &package_dir);

    let err = install(&build_dir).unwrap_err();
    assert!(matches!(err, CoreError::BindingsMissing { path } if path.ends_with("imgui_impl_vulkan.h")));
  }

  #[test]
  fn install_fails_when_package_not_resolved() {
    let temp = TempDir::new().unwrap();
    let build_dir = temp.path().join("build");
    std::fs::create_dir_all(&build_dir).unwrap();

    let err = install(&build_dir).unwrap_err();
    assert!(matches!(err, CoreError::PackageNotResolved { .. }));
  }
}

//! Pipeline steps: submodule sync, dependency resolution, CMake generation,
//! compilation, and launching the built binary.
//!
//! Each step is one external tool invocation. Steps run strictly in sequence
//! and the first failure aborts the pipeline; no step's exit status is
//! assumed.

use std::path::{Path, PathBuf};

use tracing::info;
use vkforge_platform::{Os, Tool};

use crate::bindings;
use crate::config::{BuildType, Project};
use crate::error::CoreError;
use crate::recipe::{self, RECIPE_FILE};

/// Toolchain file Conan's CMakeToolchain generator emits into the build dir
pub const TOOLCHAIN_FILE: &str = "conan_toolchain.cmake";

/// CMake generator used on Windows
pub const WINDOWS_GENERATOR: &str = "Visual Studio 17 2022";

/// Options for [`bootstrap`]
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
  /// Sync nested git submodules before resolving dependencies
  pub sync: bool,
  pub build_type: BuildType,
}

/// Prepare the build environment.
///
/// Optionally syncs submodules, writes the recipe if absent, resolves
/// dependencies through Conan, installs the imgui bindings, and generates
/// native build files with CMake.
pub async fn bootstrap(project: &Project, options: &BootstrapOptions) -> Result<(), CoreError> {
  if options.sync {
    info!("syncing submodules");
    sync_submodules().run().await?;
  }

  if !Path::new(RECIPE_FILE).exists() {
    recipe::write(Path::new("."), false)?;
  }

  info!(build_type = %options.build_type, "resolving dependencies");
  conan_install(project, options.build_type).run().await?;

  bindings::install(&project.build_dir)?;

  let os = Os::current();
  info!(os = %os, "generating build files");
  cmake_generate(project, os, options.build_type).run().await?;

  Ok(())
}

/// Compile the generated project with `cmake --build .`.
pub async fn compile(project: &Project) -> Result<(), CoreError> {
  if !project.build_dir.is_dir() {
    return Err(CoreError::BuildDirMissing {
      path: project.build_dir.clone(),
    });
  }

  info!("building");
  cmake_build(project).run().await?;
  Ok(())
}

/// Compile, then execute the project binary.
///
/// The binary is launched only when the build step exits with status zero;
/// any build failure propagates and no execution is attempted.
pub async fn run(project: &Project, build_type: BuildType) -> Result<(), CoreError> {
  compile(project).await?;

  let binary = binary_path(Os::current(), project, build_type);
  if !binary.is_file() {
    return Err(CoreError::BinaryMissing { path: binary });
  }

  info!(binary = %binary.display(), "launching");
  Tool::new(binary.display().to_string()).run().await?;
  Ok(())
}

/// `git submodule update --init --recursive`
pub fn sync_submodules() -> Tool {
  Tool::new("git").args(["submodule", "update", "--init", "--recursive"])
}

/// `conan install . --build missing --output-folder=<dir> --settings=build_type=<type>`
pub fn conan_install(project: &Project, build_type: BuildType) -> Tool {
  Tool::new("conan").args([
    "install".to_string(),
    ".".to_string(),
    "--build".to_string(),
    "missing".to_string(),
    format!("--output-folder={}", project.build_dir.display()),
    format!("--settings=build_type={}", build_type),
  ])
}

/// `cmake ..` with platform-dispatched generator arguments, cwd=<build-dir>
pub fn cmake_generate(project: &Project, os: Os, build_type: BuildType) -> Tool {
  Tool::new("cmake")
    .arg("..")
    .args(generator_args(os, build_type))
    .current_dir(&project.build_dir)
}

/// `cmake --build .`, cwd=<build-dir>
pub fn cmake_build(project: &Project) -> Tool {
  Tool::new("cmake").args(["--build", "."]).current_dir(&project.build_dir)
}

/// Generator arguments per host OS.
///
/// Windows gets the Visual Studio project generator; every other system,
/// including unrecognized ones, gets the default generator with an explicit
/// build type.
pub fn generator_args(os: Os, build_type: BuildType) -> Vec<String> {
  let toolchain = format!("-DCMAKE_TOOLCHAIN_FILE={}", TOOLCHAIN_FILE);
  match os {
    Os::Windows => vec!["-G".to_string(), WINDOWS_GENERATOR.to_string(), toolchain],
    Os::Linux | Os::MacOs | Os::Other => {
      vec![toolchain, format!("-DCMAKE_BUILD_TYPE={}", build_type)]
    }
  }
}

/// Expected path of the compiled binary.
///
/// Multi-config generators (Visual Studio) nest the binary under a
/// per-configuration subdirectory; single-config generators emit it at the
/// top of the build directory.
pub fn binary_path(os: Os, project: &Project, build_type: BuildType) -> PathBuf {
  match os {
    Os::Windows => project
      .build_dir
      .join(build_type.as_str())
      .join(format!("{}.exe", project.bin_name)),
    Os::Linux | Os::MacOs | Os::Other => project.build_dir.join(&project.bin_name),
  }
}

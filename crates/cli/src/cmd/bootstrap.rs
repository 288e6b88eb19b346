//! Implementation of the `vkforge bootstrap` command.
//!
//! Resolves the C++ dependency set through Conan and generates native build
//! files with CMake, optionally syncing git submodules first.

use anyhow::{Context, Result};
use tracing::info;

use vkforge_core::{BootstrapOptions, BuildType, Project, pipeline};

use crate::output::{print_info, print_success};

pub fn cmd_bootstrap(project: &Project, sync: bool, build_type: BuildType) -> Result<()> {
  let options = BootstrapOptions { sync, build_type };
  info!(build_type = %options.build_type, sync = options.sync, "bootstrap requested");

  print_info(&format!(
    "Bootstrapping {} ({} build)",
    project.bin_name, options.build_type
  ));

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  rt.block_on(pipeline::bootstrap(project, &options))
    .context("Bootstrap failed")?;

  print_success(&format!(
    "Environment ready in {}",
    project.build_dir.display()
  ));
  Ok(())
}

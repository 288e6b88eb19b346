//! Implementation of the `vkforge run` command.
//!
//! Compiles the generated project and, only if the build exits cleanly,
//! launches the resulting binary with inherited stdio.

use anyhow::{Context, Result};
use tracing::info;

use vkforge_core::{BuildType, Project, pipeline};

use crate::output::print_info;

pub fn cmd_run(project: &Project, build_type: BuildType) -> Result<()> {
  info!(binary = %project.bin_name, build_type = %build_type, "run requested");
  print_info(&format!("Building {}", project.bin_name));

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  rt.block_on(pipeline::run(project, build_type)).context("Run failed")?;

  Ok(())
}

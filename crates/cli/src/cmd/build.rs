//! Implementation of the `vkforge build` command.

use anyhow::{Context, Result};
use tracing::info;

use vkforge_core::{Project, pipeline};

use crate::output::print_success;

pub fn cmd_build(project: &Project) -> Result<()> {
  info!(build_dir = %project.build_dir.display(), "build requested");

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  rt.block_on(pipeline::compile(project)).context("Build failed")?;

  print_success("Build complete");
  Ok(())
}

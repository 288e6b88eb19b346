//! Implementation of the `vkforge recipe` command.

use std::path::Path;

use anyhow::{Context, Result};

use vkforge_core::recipe;

use crate::output::print_success;

pub fn cmd_recipe(write: bool, force: bool) -> Result<()> {
  if !write {
    print!("{}", recipe::render());
    return Ok(());
  }

  let path = recipe::write(Path::new("."), force).context("Failed to write recipe")?;
  print_success(&format!("Recipe written to {}", path.display()));
  Ok(())
}

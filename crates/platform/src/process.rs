//! External tool invocation.
//!
//! Every pipeline step shells out to a native tool (git, conan, cmake, the
//! compiled project binary). This module is the single place processes are
//! spawned: arguments are passed verbatim, stdio is inherited so the tool
//! owns its own output, and the exit status of every invocation is checked.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::PlatformError;

/// A single external tool invocation.
#[derive(Debug, Clone)]
pub struct Tool {
  program: String,
  args: Vec<String>,
  cwd: Option<PathBuf>,
}

impl Tool {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: None,
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  /// Set the working directory for the invocation.
  pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
    self.cwd = Some(dir.as_ref().to_path_buf());
    self
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  /// The full argument vector, for logging and tests.
  pub fn argv(&self) -> &[String] {
    &self.args
  }

  /// Run the tool to completion with inherited stdio.
  ///
  /// Returns `Ok(())` only for an exit status of exactly zero. A missing
  /// executable becomes [`PlatformError::ToolNotFound`]; any non-zero exit
  /// (or signal termination) becomes [`PlatformError::ToolFailed`].
  pub async fn run(&self) -> Result<(), PlatformError> {
    info!(tool = %self.program, args = ?self.args, "invoking");

    let mut command = Command::new(&self.program);
    command
      .args(&self.args)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit());

    if let Some(ref cwd) = self.cwd {
      debug!(cwd = %cwd.display(), "working directory");
      command.current_dir(cwd);
    }

    let status = command.status().await.map_err(|e| {
      if e.kind() == std::io::ErrorKind::NotFound {
        PlatformError::ToolNotFound {
          tool: self.program.clone(),
        }
      } else {
        PlatformError::Io(e)
      }
    })?;

    if !status.success() {
      return Err(PlatformError::ToolFailed {
        tool: self.program.clone(),
        code: status.code(),
      });
    }

    debug!(tool = %self.program, "completed");
    Ok(())
  }
}

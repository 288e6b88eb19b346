//! Error types for vkforge-platform

use thiserror::Error;

/// Errors that can occur when invoking external tools
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("tool not found on PATH: {tool}")]
  ToolNotFound { tool: String },

  #[error("{tool} exited with {}", exit_description(code))]
  ToolFailed { tool: String, code: Option<i32> },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

fn exit_description(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("status {}", code),
    None => "no exit status (terminated by signal)".to_string(),
  }
}

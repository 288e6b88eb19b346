//! Operating system detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host operating system, as seen by the toolchain dispatch.
///
/// Unrecognized systems map to [`Os::Other`] rather than failing detection;
/// every dispatch site treats `Other` exactly like Linux/Darwin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Linux,
  MacOs,
  Windows,
  Other,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Self {
    Self::from_name(std::env::consts::OS)
  }

  /// Map an OS name (as in `std::env::consts::OS`) to a variant
  pub fn from_name(name: &str) -> Self {
    match name {
      "linux" => Self::Linux,
      "macos" => Self::MacOs,
      "windows" => Self::Windows,
      _ => Self::Other,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
      Self::Other => "unknown",
    }
  }

  pub fn is_windows(&self) -> bool {
    matches!(self, Self::Windows)
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Host information reported by `vkforge info`
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
  pub os: Os,
  pub arch: &'static str,
  pub hostname: String,
  pub username: String,
}

impl HostInfo {
  /// Gather current host information
  pub fn current() -> Self {
    Self {
      os: Os::current(),
      arch: std::env::consts::ARCH,
      hostname: whoami::fallible::hostname().unwrap_or_else(|_| "unknown".to_string()),
      username: whoami::username(),
    }
  }
}

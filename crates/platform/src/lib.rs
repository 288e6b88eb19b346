//! Platform detection and external-process plumbing for vkforge
//!
//! This crate provides the two host-facing concerns of the pipeline:
//! - OS detection (toolchain dispatch keys off the host OS)
//! - External tool invocation with exit-status checking

mod error;
mod os;
mod process;

pub use error::PlatformError;
pub use os::{HostInfo, Os};
pub use process::Tool;

//! CLI output formatting utilities.
//!
//! Colored status lines on the terminal, plus an optional JSON mode for
//! scripted consumers of `vkforge info`.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub fn print_success(message: &str) {
  let mark = "✓".if_supports_color(Stream::Stdout, |s| s.green());
  println!("{mark} {message}");
}

pub fn print_info(message: &str) {
  let mark = "•".if_supports_color(Stream::Stdout, |s| s.blue());
  println!("{mark} {message}");
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    "✗".if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

/// Indented `label: value` line for the info report.
pub fn print_stat(label: &str, value: &str) {
  let label = label.if_supports_color(Stream::Stdout, |s| s.dimmed());
  println!("  {label}: {value}");
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{json}");
  Ok(())
}

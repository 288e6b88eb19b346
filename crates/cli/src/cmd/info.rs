//! Implementation of the `vkforge info` command.

use anyhow::Result;
use serde::Serialize;

use vkforge_core::{BuildType, HostInfo, Os, Project, pipeline};

use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Serialize)]
struct InfoReport<'a> {
  host: &'a HostInfo,
  project: &'a Project,
  build_type: BuildType,
  generator_args: Vec<String>,
  binary_path: String,
}

pub fn cmd_info(project: &Project, build_type: BuildType, format: OutputFormat) -> Result<()> {
  let host = HostInfo::current();
  let generator_args = pipeline::generator_args(host.os, build_type);
  let binary_path = pipeline::binary_path(host.os, project, build_type);

  if format.is_json() {
    return print_json(&InfoReport {
      host: &host,
      project,
      build_type,
      generator_args,
      binary_path: binary_path.display().to_string(),
    });
  }

  println!("vkforge v{}", env!("CARGO_PKG_VERSION"));
  println!();
  print_stat("Platform", &format!("{}-{}", host.arch, host.os));
  print_stat("User", &format!("{}@{}", host.username, host.hostname));
  print_stat("Binary", &project.bin_name);
  print_stat("Build dir", &project.build_dir.display().to_string());
  print_stat("Build type", build_type.as_str());
  print_stat("Run path", &binary_path.display().to_string());
  print_stat("CMake args", &generator_args.join(" "));

  // Visual Studio ignores CMAKE_BUILD_TYPE at generation time
  if host.os == Os::Windows {
    print_stat("Generator", "Visual Studio 17 2022 (multi-config)");
  }

  Ok(())
}

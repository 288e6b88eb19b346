use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vkforge_core::{BuildType, Project};

mod cmd;
mod output;

use output::OutputFormat;

/// vkforge - build-environment driver for the C++/Vulkan template
#[derive(Parser)]
#[command(name = "vkforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Flags shared by every command that touches the project tree.
///
/// Unset flags fall back to `VKFORGE_BIN_NAME` / `VKFORGE_BUILD_DIR`, then to
/// the template defaults.
#[derive(Args)]
struct ProjectArgs {
  /// Name of the binary CMake produces
  #[arg(long)]
  bin_name: Option<String>,

  /// Directory Conan and CMake generate into
  #[arg(long)]
  build_dir: Option<String>,

  /// Build configuration
  #[arg(long, default_value = "debug")]
  build_type: BuildType,
}

impl ProjectArgs {
  fn project(&self) -> Project {
    let mut project = Project::from_env();
    if let Some(ref name) = self.bin_name {
      project.bin_name = name.clone();
    }
    if let Some(ref dir) = self.build_dir {
      project.build_dir = dir.into();
    }
    project
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve dependencies and generate native build files
  Bootstrap {
    #[command(flatten)]
    project: ProjectArgs,

    /// Sync git submodules first
    #[arg(long)]
    sync: bool,
  },

  /// Compile the generated project
  Build {
    #[command(flatten)]
    project: ProjectArgs,
  },

  /// Compile, then launch the project binary
  Run {
    #[command(flatten)]
    project: ProjectArgs,
  },

  /// Print or write the Conan dependency recipe
  Recipe {
    /// Write conanfile.py to the current directory instead of printing it
    #[arg(long)]
    write: bool,

    /// Overwrite an existing conanfile.py
    #[arg(long)]
    force: bool,
  },

  /// Show host platform and project configuration
  Info {
    #[command(flatten)]
    project: ProjectArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },
}

fn main() {
  let cli = Cli::parse();

  // Initialize logging; --verbose turns on debug events for every crate
  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  let result: Result<()> = match cli.command {
    Commands::Bootstrap { project, sync } => cmd::cmd_bootstrap(&project.project(), sync, project.build_type),
    Commands::Build { project } => cmd::cmd_build(&project.project()),
    Commands::Run { project } => cmd::cmd_run(&project.project(), project.build_type),
    Commands::Recipe { write, force } => cmd::cmd_recipe(write, force),
    Commands::Info { project, format } => cmd::cmd_info(&project.project(), project.build_type, format),
  };

  if let Err(err) = result {
    // {:#} renders the full context chain on one line
    output::print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

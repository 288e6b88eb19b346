mod bootstrap;
mod build;
mod info;
mod recipe;
mod run;

pub use bootstrap::cmd_bootstrap;
pub use build::cmd_build;
pub use info::cmd_info;
pub use recipe::cmd_recipe;
pub use run::cmd_run;

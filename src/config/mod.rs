#[cfg(feature = "cli")]
pub mod cli;
pub mod menu_file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use menu_file::{FileCatalog, MenuFile};

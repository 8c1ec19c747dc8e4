#[cfg(feature = "cli")]
pub mod args;
pub mod cli;

#[cfg(feature = "cli")]
pub use args::CliConfig;
pub use cli::LocalStorage;

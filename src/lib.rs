pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LocalStorage;

pub use adapters::http::CompletionClient;
pub use core::planner::PlanGenerator;
pub use utils::error::{PlannerError, Result};

pub mod credentials;
pub mod planner;
pub mod prompts;

pub use crate::domain::model::{ChatMessage, ProjectGoal, ProjectPlan};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

use crate::adapters::http::CompletionClient;
use crate::core::credentials::ApiKey;
use crate::core::prompts::build_messages;
use crate::domain::model::ProjectGoal;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{PlannerError, Result};

pub struct PlanGenerator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PlanGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Reads the goal, asks the model for a plan and writes it to the output path.
    ///
    /// Preconditions are checked in order: goal file readable, goal non-empty,
    /// credential present. Nothing touches the network until all three pass, and
    /// the output file is only written once a completion has been received.
    pub async fn generate(&self, goal_file: &str) -> Result<String> {
        let goal = self.load_goal(goal_file).await?;
        tracing::debug!("Loaded project goal ({} chars)", goal.as_str().len());

        let api_key = ApiKey::from_env(self.config.api_key_var())?;
        let client = CompletionClient::new(self.config.base_url(), api_key)?;
        let messages = build_messages(&goal);

        println!("Generating project plan with LLM...");
        let plan = client.complete(self.config.model(), &messages).await?;
        tracing::debug!("Received plan ({} bytes)", plan.as_str().len());

        let output_path = self.config.output_path();
        self.storage
            .write_file(output_path, plan.into_inner().as_bytes())
            .await?;

        println!("Project plan saved to {}", output_path);
        Ok(output_path.to_string())
    }

    async fn load_goal(&self, goal_file: &str) -> Result<ProjectGoal> {
        let raw = self.storage.read_file(goal_file).await.map_err(|e| {
            tracing::debug!("Failed to read goal file {}: {}", goal_file, e);
            PlannerError::GoalFileNotFound {
                path: goal_file.to_string(),
            }
        })?;

        ProjectGoal::parse(&String::from_utf8_lossy(&raw)).ok_or_else(|| {
            PlannerError::GoalFileEmpty {
                path: goal_file.to_string(),
            }
        })
    }
}

use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::core::credentials::API_KEY_ENV;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_OUTPUT_PATH: &str = "project_plan.md";

#[derive(Debug, Clone, Parser)]
#[command(name = "project-planner", version)]
#[command(about = "Generate a markdown project plan for converting the Waku confession board app")]
pub struct CliConfig {
    /// Text file describing the app you want
    #[arg(value_name = "PROJECT_GOAL_FILE")]
    pub goal_file: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, env = "OPENROUTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn api_key_var(&self) -> &str {
        API_KEY_ENV
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("model", &self.model)?;
        validate_non_empty_string("output", &self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["project-planner", "goal.txt"]).unwrap();
        assert_eq!(config.goal_file, "goal.txt");
        assert_eq!(config.model(), "google/gemini-2.5-flash-preview-05-20");
        assert_eq!(config.output_path(), "project_plan.md");
        assert_eq!(config.api_key_var(), "OPENROUTER_API_KEY");
        assert!(!config.verbose);
    }

    #[test]
    fn test_goal_file_is_required() {
        assert!(CliConfig::try_parse_from(["project-planner"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(CliConfig::try_parse_from(["project-planner", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_overrides_are_validated() {
        let config = CliConfig::try_parse_from([
            "project-planner",
            "--base-url",
            "ftp://example.com",
            "goal.txt",
        ])
        .unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::try_parse_from([
            "project-planner",
            "--base-url",
            "http://localhost:8080/v1",
            "--model",
            "openai/gpt-4o-mini",
            "--output",
            "plans/next.md",
            "goal.txt",
        ])
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_path(), "plans/next.md");
    }
}

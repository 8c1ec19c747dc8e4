use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Project goal file '{path}' not found")]
    GoalFileNotFound { path: String },

    #[error("Project goal file '{path}' is empty")]
    GoalFileEmpty { path: String },

    #[error("{var} environment variable not set")]
    MissingCredential { var: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Completion endpoint returned HTTP {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unexpected completion response: {reason}")]
    MalformedResponse { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Remote,
    Io,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::GoalFileNotFound { .. }
            | PlannerError::GoalFileEmpty { .. }
            | PlannerError::MissingCredential { .. }
            | PlannerError::InvalidConfigValue { .. } => ErrorCategory::Validation,
            PlannerError::Api(_)
            | PlannerError::ServerError { .. }
            | PlannerError::MalformedResponse { .. } => ErrorCategory::Remote,
            PlannerError::Io(_) => ErrorCategory::Io,
        }
    }

    /// Every failure path terminates the run with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::GoalFileEmpty { .. } => {
                "Error: Project goal file is empty. Please describe your project goal.".to_string()
            }
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::GoalFileNotFound { .. } => "Check the goal file path and permissions",
            PlannerError::GoalFileEmpty { .. } => "Write a short description of the app you want",
            PlannerError::MissingCredential { .. } => "Export your OpenRouter API key and retry",
            PlannerError::InvalidConfigValue { .. } => "Fix the command-line option and retry",
            PlannerError::Api(_) => "Check network connectivity to the completion endpoint",
            PlannerError::ServerError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key is valid"
            }
            PlannerError::ServerError { .. } => "The endpoint rejected the request; try again later",
            PlannerError::MalformedResponse { .. } => "Verify the base URL points at a chat-completion API",
            PlannerError::Io(_) => "Check that the output path is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_categorized() {
        let errors = [
            PlannerError::GoalFileNotFound {
                path: "goal.txt".to_string(),
            },
            PlannerError::GoalFileEmpty {
                path: "goal.txt".to_string(),
            },
            PlannerError::MissingCredential {
                var: "OPENROUTER_API_KEY".to_string(),
            },
        ];

        for error in &errors {
            assert_eq!(error.category(), ErrorCategory::Validation);
            assert_eq!(error.exit_code(), 1);
        }
    }

    #[test]
    fn test_remote_errors_exit_with_failure() {
        let error = PlannerError::ServerError {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(error.category(), ErrorCategory::Remote);
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("502"));
    }

    #[test]
    fn test_user_friendly_messages() {
        let missing = PlannerError::GoalFileNotFound {
            path: "nope.txt".to_string(),
        };
        assert_eq!(
            missing.user_friendly_message(),
            "Error: Project goal file 'nope.txt' not found"
        );

        let empty = PlannerError::GoalFileEmpty {
            path: "goal.txt".to_string(),
        };
        assert!(empty.user_friendly_message().contains("empty"));

        let credential = PlannerError::MissingCredential {
            var: "OPENROUTER_API_KEY".to_string(),
        };
        assert_eq!(
            credential.user_friendly_message(),
            "Error: OPENROUTER_API_KEY environment variable not set"
        );
    }

    #[test]
    fn test_unauthorized_gets_key_suggestion() {
        let error = PlannerError::ServerError {
            status: 401,
            body: String::new(),
        };
        assert_eq!(error.recovery_suggestion(), "Check that the API key is valid");
    }
}

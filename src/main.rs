use clap::error::ErrorKind;
use clap::Parser;
use project_planner::utils::{logger, validation::Validate};
use project_planner::{CliConfig, LocalStorage, PlanGenerator, PlannerError};

// One request at a time; no worker threads needed.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let goal_file = config.goal_file.clone();
    let generator = PlanGenerator::new(LocalStorage::default(), config);

    if let Err(e) = generator.generate(&goal_file).await {
        exit_with(e);
    }
}

fn exit_with(e: PlannerError) -> ! {
    tracing::debug!("Run failed (Category: {:?}): {:?}", e.category(), e);
    eprintln!("{}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

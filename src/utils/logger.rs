use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_FILTER: &str = "project_planner=warn";
const VERBOSE_FILTER: &str = "project_planner=debug,info";

/// `RUST_LOG` wins over `--verbose`. Output goes to stderr so stdout only
/// carries the progress lines.
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

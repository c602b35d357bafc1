pub mod cli;
pub mod commands;
pub mod core;
pub mod documents;
pub mod navigation;
pub mod provenance;
pub mod render;
pub mod sections;

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::ViewerSession;
use crate::core::config::ViewerConfig;

/// Logs go to stderr so command output stays pipeable.
fn init_tracing(config: &ViewerConfig) {
    let filter = EnvFilter::new(config.log_level.as_str().to_ascii_lowercase());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub fn run() -> ExitCode {
    let config = ViewerConfig::from_env();
    init_tracing(&config);

    let matches = cli::command().get_matches();
    let mut session = ViewerSession::new(config);
    match cli::execute(&mut session, &matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(code = err.code(), error = %err, "command failed");
            match serde_json::to_string(&err) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}

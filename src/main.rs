use clap::Parser;
use std::process::ExitCode;
use tack::commands::Cli;
use tack::libs::config::{load_env, Config};
use tack::libs::messages::{macros::is_debug_mode, Message};
use tack::msg_error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    load_env();
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    let result = Config::read().and_then(|config| {
        let config = config.apply_env().with_db_path(cli.db.clone());
        cli.menu(&config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

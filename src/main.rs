use folder_sync::commands::Cli;
use folder_sync::libs::messages::macros::is_debug_mode;
use folder_sync::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_target(false)
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}

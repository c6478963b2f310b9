//! Fetches `/api/data` once and prints the rendered view.

use data_api::{
    config::ViewerConfig,
    display::{client::DisplayClient, view::ViewState},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the view.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = ViewerConfig::from_env_and_args();
    let state = DisplayClient::new(cfg.api_url).load().await;

    if cfg.json {
        println!("{}", state.data_json());
    } else {
        print!("{}", state.render_html(&cfg.title));
    }

    match state {
        ViewState::Failed(_) => ExitCode::FAILURE,
        ViewState::Empty | ViewState::Loaded(_) => ExitCode::SUCCESS,
    }
}

mod app;
mod calendar;
mod config;
mod console;
mod db;
mod error;
mod food;
mod goals;
mod input;
mod meal_plans;
mod routes;
mod state;
mod users;

use crate::config::{AppConfig, LogConfig, LogFormat};
use crate::console::Console;
use crate::state::AppState;

fn init_tracing(log: &LogConfig) {
    // Logs go to stderr; stdout belongs to the menu.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log.filter.as_str())
        .with_writer(std::io::stderr);

    match log.format {
        LogFormat::Json => builder.with_target(false).json().init(),
        LogFormat::Plain => builder.init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.log);

    let state = AppState::init(config).await?;
    tracing::info!(database_url = %state.config.database_url, "store ready");

    let stdin = std::io::stdin();
    let mut term = Console::new(stdin.lock(), std::io::stdout());
    app::run(&state, &mut term).await?;

    Ok(())
}

use anyhow::Result;
use signal_trend::infrastructure::log_messages;
use signal_trend::Application;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    let app = Application::new()?;
    let settings = app.settings();

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if settings.json_logging() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(
        window_days = settings.trend.window_days,
        basis_shift_days = settings.trend.basis_shift_days,
        "{}",
        log_messages::configuration::CONFIG_LOADED
    );

    app.run(&mut tokio::io::stdout()).await?;

    Ok(())
}

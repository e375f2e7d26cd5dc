use crate::application::trend_service::{TrendQuery, TrendService};
use crate::config::Settings;
use crate::domain::TrendResult;
use crate::infrastructure::{load_rows, log_messages};
use crate::Result;
use std::path::Path;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, instrument};

/// Main application struct that coordinates all components
#[derive(Debug)]
pub struct Application {
    settings: Settings,
}

impl Application {
    /// Build the application from the layered `config/` settings
    pub fn new() -> Result<Self> {
        Ok(Self::with_settings(Settings::new()?))
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load rows, compute every series trend and write them as a JSON array
    #[instrument(skip(self, output))]
    pub async fn run<W>(&self, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        info!("{}", log_messages::application::STARTING);

        let rows = load_rows(self.settings.input.path.as_deref().map(Path::new)).await?;
        let results = match TrendQuery::resolve(&self.settings.trend, &rows)? {
            Some(query) => TrendService::new(query).compute(&rows),
            None => Vec::new(),
        };

        write_results(output, &results).await?;

        info!(
            series = results.len(),
            "{}",
            log_messages::application::FINISHED
        );
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

async fn write_results<W>(output: &mut W, results: &[TrendResult]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut json = serde_json::to_vec_pretty(results)?;
    json.push(b'\n');
    output.write_all(&json).await?;
    output.flush().await?;
    Ok(())
}

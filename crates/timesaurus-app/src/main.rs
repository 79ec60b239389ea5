use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use timesaurus_config::Config;
use timesaurus_core::{Decade, Language};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod command;
pub mod controller;
pub mod events;
pub mod profile;
pub mod render;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_code(s).ok_or_else(|| format!("unsupported language '{s}', expected en or fr"))
}

fn parse_decade(s: &str) -> Result<Decade, String> {
    s.parse()
        .ok()
        .and_then(Decade::from_year)
        .ok_or_else(|| format!("'{s}' is not a decade, expected 1920, 1930, ... 2010"))
}

/// Word frequency per million words across decades, in English and French
#[derive(Parser, Debug)]
#[command(name = "timesaurus", version)]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language to start in
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,

    /// Decade to start on, e.g. 1950
    #[arg(long, value_parser = parse_decade)]
    decade: Option<Decade>,

    /// Replace the embedded English dataset
    #[arg(long)]
    english_data: Option<PathBuf>,

    /// Replace the embedded French dataset
    #[arg(long)]
    french_data: Option<PathBuf>,

    /// Width in columns of the longest bar
    #[arg(long, value_parser = clap::value_parser!(u32).range(..=render::MAX_CHART_WIDTH as i64))]
    chart_width: Option<u32>,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Command line flags win over the file and the environment
    fn apply(&self, config: &mut Config) {
        if let Some(lang) = self.lang {
            config.language = lang.code().to_string();
        }
        if let Some(decade) = self.decade {
            config.decade = decade.year();
        }
        if let Some(path) = &self.english_data {
            config.dataset.english_path = Some(path.display().to_string());
        }
        if let Some(path) = &self.french_data {
            config.dataset.french_path = Some(path.display().to_string());
        }
        if let Some(width) = self.chart_width {
            config.ui.chart_width = width;
        }
    }
}

/// Logs go to stderr; stdout belongs to the dashboard
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = profile::load_config(args.config.as_deref())?;
    args.apply(&mut config);
    tracing::info!(
        "Starting in {} on the {}s",
        config.language,
        config.decade
    );

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let mut failure = None;
    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task exited"),
                Ok(Err(e)) => {
                    tracing::error!("task failed: {e:#}");
                    failure = Some(e);
                }
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("task failed: {e:#}");
                failure.get_or_insert(e);
            }
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use lexi_config::Config;
use lexi_core::DictionarySource;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Browse a word -> definition dictionary letter by letter, page by page
#[derive(Parser, Debug)]
#[command(name = "lexi", version)]
struct Args {
    /// Dictionary JSON: an http(s) URL or a file path
    #[arg(long)]
    source: Option<String>,

    /// Page threshold, pages close once they exceed it
    #[arg(long)]
    page_size: Option<usize>,

    /// JSON config profile, env defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, env = "LEXI_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::new(),
    };
    if let Some(source) = args.source {
        config.source.location = source;
    }
    if let Some(page_size) = args.page_size {
        config.view.page_size = page_size;
    }

    let source: Arc<dyn DictionarySource> = lexi_io::source_from_config(&config.source)?.into();
    let command_buffer = config.command_buffer;
    let state = Arc::new(AppState::new(config, source));

    let controller = AppController::new(state, command_buffer);
    let mut tasks = controller.spawn_tasks();

    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // Wait for every task so the renderer can flush its last frames
    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
                break;
            }
            result = tasks.join_next() => match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => {
                    tracing::error!("task failed: {e}");
                    controller.shutdown();
                    break;
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                    break;
                }
                None => break,
            }
        }
    }

    tasks.shutdown().await;

    Ok(())
}

/// Logs go to stderr, stdout carries the rendered pages
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

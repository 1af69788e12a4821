//! Sheetkeep Player - composition root binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sheetkeep_player::infrastructure::terminal::StdinLines;
use sheetkeep_player::infrastructure::{FileDocumentStore, TerminalConfirm, TerminalRenderer};
use sheetkeep_player::{ui, CharacterSheetService, PlayerConfig};

#[derive(Parser)]
#[command(name = "sheetkeep-player")]
#[command(about = "Fill in, save, and reload a character sheet", long_about = None)]
struct Cli {
    /// Directory sheets are saved into (overrides SHEETKEEP_SAVE_DIR)
    #[arg(short, long)]
    save_dir: Option<PathBuf>,

    /// Sheet file name (overrides SHEETKEEP_FILE_NAME)
    #[arg(short, long)]
    file: Option<String>,

    /// Load the saved sheet on startup
    #[arg(short, long)]
    open: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = PlayerConfig::from_env(&std::env::current_dir()?)
        .with_overrides(cli.save_dir, cli.file);

    // Logs go to stderr so they never interleave with the sheet on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| sheetkeep_player::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        save_dir = %config.save_dir.display(),
        file = %config.file_name,
        "Starting Sheetkeep Player"
    );

    let mut service = CharacterSheetService::new(
        Arc::new(TerminalConfirm::stdio()),
        Arc::new(FileDocumentStore::new(config.save_dir.clone())),
        Arc::new(TerminalRenderer::stdout()),
        config.file_name.clone(),
    );

    // A successful load already fills empty sections and draws the sheet.
    let opened = cli.open
        && match service.load().await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Could not open saved sheet, starting blank");
                false
            }
        };
    if !opened {
        service.on_form_activated();
    }

    let mut stdout = std::io::stdout();
    ui::run(&mut service, &mut StdinLines, &mut stdout).await?;

    tracing::info!("Sheetkeep Player stopped");
    Ok(())
}

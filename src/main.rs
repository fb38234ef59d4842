//! notepress CLI
//!
//! Republishes a remote note collection as a static HTML site,
//! regenerating output only when the collection actually changed.

use clap::{Parser, Subcommand};
use notepress::{
    config::Config,
    error::Result,
    pipeline,
    services::{self, HttpNoteSource, NoteSource},
    storage::LocalStorage,
    utils::http,
};

/// notepress - Incremental note-to-blog publisher
#[derive(Parser, Debug)]
#[command(name = "notepress", version, about = "Publishes a note collection as a static blog")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a full publish: compare, transform, and write artifacts
    Publish,

    /// Only report whether the collection changed since last publish
    Check,

    /// Validate the environment configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Publish => {
            let config = Config::from_env()?;
            let client = http::create_client()?;
            let source = HttpNoteSource::new(client.clone(), &config);

            log::info!("Checking published manifest at {}", config.manifest_url());
            let remote = services::fetch_remote_manifest(&client, &config.manifest_url()).await;

            let summary =
                pipeline::run_publish(&config, &source, &LocalStorage, &remote).await?;

            if summary.dirty {
                log::info!(
                    "Publish complete: {} published, {} skipped of {} notes",
                    summary.published,
                    summary.skipped,
                    summary.total
                );
            }
        }

        Command::Check => {
            let config = Config::from_env()?;
            let client = http::create_client()?;
            let source = HttpNoteSource::new(client.clone(), &config);

            let posts = source.list_note_metadata().await?;
            let current = posts
                .iter()
                .map(|p| (p.id.clone(), p.clone()))
                .collect();

            let remote = services::fetch_remote_manifest(&client, &config.manifest_url()).await;
            if pipeline::is_dirty(&current, &remote) {
                log::info!("Collection changed: {} notes would be published", posts.len());
            } else {
                log::info!("Collection unchanged, nothing to publish");
            }
        }

        Command::Validate => {
            let config = Config::from_env()?;
            log::info!("Configuration OK");
            log::info!("  collection: {}", config.collection_id);
            log::info!("  output dir: {}", config.output_dir.display());
            log::info!("  manifest:   {}", config.manifest_url());
        }
    }

    Ok(())
}

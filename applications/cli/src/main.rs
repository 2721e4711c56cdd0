/// Slotlist - time-of-day scheduled playlists
use clap::{Parser, Subcommand};
use slotlist_cli::{commands::App, config::SlotlistConfig};
use slotlist_core::PlaylistId;
use slotlist_schedule::PlaylistEdit;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "slotlist")]
#[command(about = "Split playlists into time-of-day slots and keep playback in the current one", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./slotlist.toml)
    #[arg(short, long, global = true, env = "SLOTLIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a playlist's slots and tracks
    Show {
        /// Playlist ID
        playlist: String,
    },
    /// Add the default schedule to an owned playlist
    Init {
        /// Playlist ID
        playlist: String,
    },
    /// Split a slot into two halves
    Split {
        playlist: String,
        slot: usize,
    },
    /// Move a slot's end to a time of day (H:MM)
    Resize {
        playlist: String,
        slot: usize,
        end: String,
    },
    /// Merge a slot into the following one
    RemoveSlot {
        playlist: String,
        slot: usize,
    },
    /// Remove a track from a slot
    RemoveTrack {
        playlist: String,
        slot: usize,
        index: usize,
    },
    /// Move a track to another position, possibly in another slot
    MoveTrack {
        playlist: String,
        from_slot: usize,
        from_index: usize,
        to_slot: usize,
        to_index: usize,
    },
    /// Keep playback inside the active slot until interrupted
    Sync {
        /// Playlist ID
        playlist: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slotlist=info,slotlist_cli=info,slotlist_sync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = SlotlistConfig::load(cli.config.as_deref())?;
    let app = App::new(config)?;

    match cli.command {
        Commands::Show { playlist } => app.show(&PlaylistId::new(playlist)).await?,
        Commands::Init { playlist } => app.init(&PlaylistId::new(playlist)).await?,
        Commands::Split { playlist, slot } => {
            app.edit(&PlaylistId::new(playlist), PlaylistEdit::SplitSlot { slot })
                .await?;
        }
        Commands::Resize {
            playlist,
            slot,
            end,
        } => app.resize_to(&PlaylistId::new(playlist), slot, &end).await?,
        Commands::RemoveSlot { playlist, slot } => {
            app.edit(&PlaylistId::new(playlist), PlaylistEdit::RemoveSlot { slot })
                .await?;
        }
        Commands::RemoveTrack {
            playlist,
            slot,
            index,
        } => {
            app.edit(
                &PlaylistId::new(playlist),
                PlaylistEdit::RemoveTrack { slot, index },
            )
            .await?;
        }
        Commands::MoveTrack {
            playlist,
            from_slot,
            from_index,
            to_slot,
            to_index,
        } => {
            app.edit(
                &PlaylistId::new(playlist),
                PlaylistEdit::MoveTrack {
                    from_slot,
                    from_index,
                    to_slot,
                    to_index,
                },
            )
            .await?;
        }
        Commands::Sync { playlist } => app.sync(&PlaylistId::new(playlist)).await?,
    }

    Ok(())
}

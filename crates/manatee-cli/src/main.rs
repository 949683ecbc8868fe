//! Manatee - command-line access to Trello boards, cards and stickers.
//!
//! Credentials come from the environment (`TRELLO_APP_KEY`,
//! `TRELLO_USER_TOKEN`, optionally through a `.env` file), the config file and
//! the OS keychain, in that order.

mod commands;
mod utils;

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use manatee_core::SearchModelType;

#[derive(Parser, Debug)]
#[command(name = "manatee")]
#[command(about = "Command-line access to Trello boards, cards and stickers")]
#[command(version)]
struct Args {
    /// Path to config file (default: $XDG_CONFIG_HOME/manatee/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store a user token in the OS keychain
    Login {
        /// Application key to save in the config file
        #[arg(long)]
        app_key: Option<String>,
    },
    /// Forget the stored user token
    Logout,
    /// Show the member owning the user token
    Me,
    /// List a member's boards
    Boards {
        /// Member id or username (default: the token owner)
        member: Option<String>,
    },
    /// Show one board and its preferences
    Board { id: String },
    /// Rename a board
    RenameBoard { id: String, name: String },
    /// List the open lists of a board
    Lists { board_id: String },
    /// List the cards of a list
    Cards { list_id: String },
    /// Add a card at the bottom of a list
    AddCard {
        list_id: String,
        name: String,
        #[arg(long)]
        desc: Option<String>,
    },
    /// Show one card
    Card { id: String },
    /// List the stickers on a card
    Stickers { card_id: String },
    /// Put a sticker on a card
    AddSticker {
        card_id: String,
        /// Sticker name, e.g. taco-cool
        name: String,
        #[arg(long, default_value_t = 0.0)]
        left: f64,
        #[arg(long, default_value_t = 0.0)]
        top: f64,
        #[arg(long, default_value_t = 0)]
        z_index: i32,
        /// Degrees clockwise, 0 to 359
        #[arg(long, default_value_t = 0)]
        rotation: i32,
    },
    /// Take a sticker off a card
    RemoveSticker { card_id: String, sticker_id: String },
    /// Upload an image to your custom sticker set
    UploadSticker { file: PathBuf },
    /// Search boards, cards, members, organizations and actions
    Search {
        query: String,
        /// Restrict results to these kinds (default: all)
        #[arg(long = "type", value_enum)]
        types: Vec<ModelKind>,
        /// Only search within these boards
        #[arg(long = "board")]
        boards: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModelKind {
    Actions,
    Boards,
    Cards,
    Members,
    Organizations,
}

impl From<ModelKind> for SearchModelType {
    fn from(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Actions => SearchModelType::ACTIONS,
            ModelKind::Boards => SearchModelType::BOARDS,
            ModelKind::Cards => SearchModelType::CARDS,
            ModelKind::Members => SearchModelType::MEMBERS,
            ModelKind::Organizations => SearchModelType::ORGANIZATIONS,
        }
    }
}

/// Initialize the tracing subscriber for logging.
///
/// The returned guard flushes the log file and must live until exit.
fn init_tracing(log_file: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=manatee_core=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().unwrap_or_else(|| OsStr::new("manatee.log"));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let _log_guard = init_tracing(args.log_file.as_deref());
    info!(command = ?args.command, "manatee starting");

    commands::run(args.command, args.config.as_deref()).await
}

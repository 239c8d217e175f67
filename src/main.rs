//! Kickplayer - host-side kick and player list commands for multiplayer sessions.
//!
//! The session host can disconnect a player or list the connected players,
//! either from the chat box (`_kick`, `_list`) or from the console
//! (`kick_player`, `list_players`).
//!
//! # Overview
//!
//! The mod hooks into the game's console pipeline. Every chat line goes through
//! the console as `say <message>`; once the game has sent it, the mod looks for
//! a leading `_`, runs the matching command for the sender and broadcasts the
//! response back to the chat.
//!
//! # Features
//!
//! - **Kick by name or index**: `_kick 2`, `_kick bigbob`, `_kick Big Bob`
//! - **Player list**: `_list` prints `Player {index}: {name}` lines
//! - **Host only**: other players get no response at all
//! - **Console commands**: same actions with regular console arguments
//!
//! # Configuration
//!
//! Create a `config.yaml` file describing the session:
//!
//! ```yaml
//! chat:
//!   prefix: "_"
//!   broadcast_delay_ms: 100
//!   argument_join: collapse
//!
//! session:
//!   players:
//!     - name: "Host"
//!       identity: "76561198000000001"
//!       host: true
//!     - name: "Big Bob"
//!       identity: "76561198000000002"
//! ```
//!
//! Any value can be overridden with `KICKPLAYER_` environment variables, e.g.
//! `KICKPLAYER_CHAT__ARGUMENT_JOIN=space`.
//!
//! # Usage
//!
//! ```bash
//! kickplayer --config config.yaml
//! ```
//!
//! Console lines are then read from stdin, see [`session`].
//!
//! # Architecture
//!
//! - [`commands`] - Chat command registry, dispatcher, player resolver and handlers
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`host`] - Host game seams and the in-process session implementing them
//! - [`plugin`] - Installs the commands into a host console
//! - [`session`] - Interactive stdin console
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{
    config::Config,
    host::{Host, LocalConsole, LocalHost},
    plugin::Plugin,
};

mod commands;
mod config;
mod host;
mod plugin;
mod session;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Describes the chat command settings and the players connected to the
    /// session. See the [`config`] module for the expected format.
    #[arg(short, long)]
    config: String,
}

#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting kickplayer {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {:#}", e);
            return;
        }
    };

    let host = Arc::new(LocalHost::new(config.roster()));
    info!("session started with {} players", config.session.players.len());

    let mut console = LocalConsole::new(Arc::clone(&host));
    Plugin::new(Arc::clone(&host) as Arc<dyn Host>, config.chat.clone()).install(&mut console);

    if let Err(e) = session::run(&host, &console, config.chat.broadcast_delay()).await {
        error!("Console stopped: {:#}", e);
    }
}

//! Configuration file structures for the kickplayer mod.
//!
//! This module defines the configuration file format using YAML, merged with
//! `KICKPLAYER_` prefixed environment variables. The configuration is split in
//! two sections: chat command settings and the local session roster.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Chat command settings (every key is optional)
//! chat:
//!   # Character starting a chat command
//!   prefix: "_"
//!   # Delay before a command response is broadcast, in milliseconds
//!   broadcast_delay_ms: 100
//!   # How words following the command name are joined: collapse or space
//!   argument_join: collapse
//!
//! # Players connected to the local session, in roster order
//! session:
//!   players:
//!     - name: "Host"
//!       identity: "76561198000000001"
//!       host: true
//!     - name: "Big Bob"
//!       identity: "76561198000000002"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export KICKPLAYER_CHAT__PREFIX="!"
//! export KICKPLAYER_CHAT__ARGUMENT_JOIN="space"
//! ```

use std::time::Duration;

use anyhow::{Context, bail};
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::host::Player;

/// Root configuration structure.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Chat command settings
    #[serde(default)]
    pub chat: Chat,
    /// Local session settings
    pub session: Session,
}

/// How the words following a chat command name become its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentJoin {
    /// Words are concatenated without separator: `_kick Big Bob` gives `BigBob`.
    ///
    /// Player names are matched ignoring spaces, so this still designates
    /// `Big Bob`.
    #[default]
    Collapse,
    /// Words are joined with a single space: `_kick Big Bob` gives `Big Bob`.
    Space,
}

/// Chat command settings.
///
/// # YAML Section
///
/// ```yaml
/// chat:
///   prefix: "_"
///   broadcast_delay_ms: 100
///   argument_join: collapse
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Chat {
    /// Character a chat line must start with to be treated as a command
    pub prefix: char,
    /// Milliseconds to wait before broadcasting a command response.
    ///
    /// Gives the game time to deliver the triggering chat line first.
    pub broadcast_delay_ms: u64,
    /// Joining rule for the command argument
    pub argument_join: ArgumentJoin,
}

impl Default for Chat {
    fn default() -> Self {
        Chat {
            prefix: '_',
            broadcast_delay_ms: 100,
            argument_join: ArgumentJoin::Collapse,
        }
    }
}

impl Chat {
    /// Broadcast delay as a [`Duration`].
    pub fn broadcast_delay(&self) -> Duration {
        Duration::from_millis(self.broadcast_delay_ms)
    }
}

/// Local session settings.
#[derive(Debug, Deserialize)]
pub struct Session {
    /// Connected players, in roster order
    pub players: Vec<PlayerEntry>,
}

/// A player of the local session.
#[derive(Debug, Deserialize)]
pub struct PlayerEntry {
    /// Display name
    pub name: String,
    /// Platform account identifier
    pub identity: String,
    /// Whether this player hosts the session
    #[serde(default)]
    pub host: bool,
}

impl Config {
    /// Loads the configuration from a YAML file, then applies environment
    /// variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// session does not have exactly one host.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let config: Config = Figment::new()
            .merge(Yaml::file_exact(path))
            .merge(Env::prefixed("KICKPLAYER_").split("__"))
            .extract()
            .with_context(|| format!("invalid configuration in {}", path))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.session.players.is_empty() {
            bail!("the session must have at least one player");
        }

        let hosts = self.session.players.iter().filter(|p| p.host).count();
        if hosts != 1 {
            bail!("the session must have exactly one host, found {}", hosts);
        }

        Ok(())
    }

    /// Builds the session roster described by the configuration.
    pub fn roster(&self) -> Vec<Player> {
        self.session
            .players
            .iter()
            .map(|entry| match entry.host {
                true => Player::host(&entry.name, &entry.identity),
                false => Player::new(&entry.name, &entry.identity),
            })
            .collect()
    }
}

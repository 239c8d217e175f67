//! In-memory game session.
//!
//! [`LocalHost`] stands in for the game's own player registry and chat
//! transport when the mod runs outside the game, e.g. from the `kickplayer`
//! binary. The roster is shared behind a lock so that kicks performed from a
//! command are visible to the next roster query.

use std::sync::{
    PoisonError, RwLock,
    atomic::{AtomicBool, Ordering},
};

use anyhow::bail;
use log::{debug, info};

use crate::host::{Host, Player};

/// A single hosted session living in this process.
pub struct LocalHost {
    /// Connected players in join order
    roster: RwLock<Vec<Player>>,
    /// Whether the session is running with this process as server
    active: AtomicBool,
}

impl LocalHost {
    /// Creates an active session with the given roster.
    ///
    /// # Arguments
    ///
    /// * `players` - Connected players, in roster order
    pub fn new(players: Vec<Player>) -> Self {
        LocalHost {
            roster: RwLock::new(players),
            active: AtomicBool::new(true),
        }
    }

    /// Starts or stops serving the session.
    pub fn set_session_active(&self, active: bool) {
        info!(
            "session {}",
            if active { "started" } else { "stopped" }
        );
        self.active.store(active, Ordering::SeqCst);
    }

    /// Returns the first player holding host authority, if any.
    pub fn session_host(&self) -> Option<Player> {
        self.roster().into_iter().find(|p| p.has_authority)
    }
}

impl Host for LocalHost {
    fn roster(&self) -> Vec<Player> {
        self.roster
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_session_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Removes the player owning `identity` from the roster.
    ///
    /// Only the session host may kick, mirroring the server-side check of the
    /// game's own kick command.
    fn kick(&self, caller: &Player, identity: &str) -> anyhow::Result<()> {
        if !caller.has_authority {
            bail!("{} is not allowed to kick players", caller.name);
        }

        let mut roster = self.roster.write().unwrap_or_else(PoisonError::into_inner);
        let position = match roster.iter().position(|p| p.identity == identity) {
            Some(position) => position,
            None => bail!("no connected player with identity {}", identity),
        };

        let kicked = roster.remove(position);
        info!("{} kicked {} ({})", caller.name, kicked.name, kicked.identity);

        Ok(())
    }

    fn broadcast_chat(&self, message: &str) {
        debug!("broadcasting chat message: {}", message);
        for line in message.lines() {
            println!("[chat] {}", line);
        }
    }
}

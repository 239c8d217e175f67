//! Data structures describing the hosting game session.
//!
//! These are snapshots of host-owned state. The mod never creates or mutates
//! them: each command re-reads the live roster through [`Host::roster`](crate::host::Host::roster).

use std::fmt;

/// A participant connected to the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player's display name
    ///
    /// Not guaranteed to be unique within a roster.
    pub name: String,
    /// Platform account identifier
    ///
    /// Stable across sessions; this is what the kick primitive targets.
    pub identity: String,
    /// Whether this player is the session host (authoritative caller)
    pub has_authority: bool,
}

impl Player {
    /// Creates a regular (non-host) player.
    pub fn new(name: &str, identity: &str) -> Self {
        Player {
            name: name.to_string(),
            identity: identity.to_string(),
            has_authority: false,
        }
    }

    /// Creates the player acting as the session host.
    pub fn host(name: &str, identity: &str) -> Self {
        Player {
            has_authority: true,
            ..Player::new(name, identity)
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name={}, identity={}, authority={}",
            self.name, self.identity, self.has_authority
        )
    }
}

/// Execution flags attached to a console command registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleFlags {
    /// The command runs wherever it is typed
    None,
    /// The command is forwarded to and executed by the server only
    ExecuteOnServer,
}

//! Host game integration.
//!
//! The mod rides on a host runtime it does not own: the player roster, the
//! network authority model, the console command pipeline and the chat
//! transport all belong to the game. This module describes the narrow surface
//! the mod relies on, plus an in-process implementation used by the binary.
//!
//! # Modules
//!
//! - `structs` - Player snapshots and console flags
//! - `local` - [`LocalHost`], an in-memory session implementing [`Host`]
//! - `console` - [`LocalConsole`], a console pipeline implementing [`Console`]
//!
//! # Seams
//!
//! - [`Host`] - roster query, session state, kick and chat broadcast primitives
//! - [`Console`] - command registration and post-execution hook subscription
//! - [`CommandHook`] - observer notified after every console command

use std::sync::Arc;

use mockall::automock;

mod console;
mod local;
mod structs;

pub use crate::host::console::{LocalConsole, split_command_line};
pub use crate::host::local::LocalHost;
pub use crate::host::structs::{ConsoleFlags, Player};

/// Primitives provided by the hosting game session.
///
/// Every method reads or acts on live host state; nothing is cached by the
/// caller between invocations.
#[automock]
pub trait Host: Send + Sync {
    /// Returns the connected players in roster order.
    fn roster(&self) -> Vec<Player>;
    /// Whether a session is running and this process acts as its server.
    fn is_session_active(&self) -> bool;
    /// Asks the server, through `caller`'s connection, to disconnect the
    /// player owning `identity`.
    fn kick(&self, caller: &Player, identity: &str) -> anyhow::Result<()>;
    /// Sends a plain-text chat message to every connected player.
    fn broadcast_chat(&self, message: &str);
}

/// Observer notified after a console command has been executed.
pub trait CommandHook: Send + Sync {
    /// Called with the invoking player, the command name and its raw arguments.
    fn on_command(&self, sender: &Player, command_name: &str, args: &[String]);
}

/// Callback run when a registered console command is executed.
pub type ConsoleCallback = Box<dyn Fn(&Player, &[String]) + Send + Sync>;

/// A named console command contributed to the host console.
pub struct ConsoleCommand {
    /// Name typed in the console, e.g. `kick_player`
    pub name: String,
    /// Help text shown by the console `help` command
    pub help_text: String,
    /// Where the command is allowed to run
    pub flags: ConsoleFlags,
    /// Handler receiving the sender and the tokenized arguments
    pub callback: ConsoleCallback,
}

/// Extension points of the host console pipeline.
pub trait Console {
    /// Registers a console command. A command with the same name is replaced.
    fn register_command(&mut self, command: ConsoleCommand);
    /// Subscribes a hook run after every command execution.
    fn subscribe(&mut self, hook: Arc<dyn CommandHook>);
}

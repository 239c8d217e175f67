//! Chat and console command processing.
//!
//! This module provides the whole command pipeline of the mod, letting the
//! session host kick players and list the roster from the chat box or from the
//! console.
//!
//! # Overview
//!
//! 1. **Interception** - [`ChatDispatcher`] observes every console command and
//!    keeps `say` lines sent while this process serves the session
//! 2. **Parsing** - a line starting with the prefix (`_` by default) is split
//!    into a command name and its argument
//! 3. **Lookup** - the name is resolved in the [`CommandRegistry`]
//! 4. **Execution** - the handler validates the caller and arguments, then acts
//! 5. **Response** - a non-blank result is broadcast back to the chat after a
//!    short delay
//!
//! # Architecture
//!
//! ```text
//! console "say _kick Big Bob"
//!      │
//!      ▼
//! ┌────────────────┐
//! │ ChatDispatcher │  ← CommandHook: filter + parse
//! └────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │ CommandRegistry │ ───► │ Action Handlers  │
//! └─────────────────┘      │  - handle_kick   │
//!                          │  - handle_list   │
//!                          └──────────────────┘
//!                                   │
//!                                   ▼
//!                           delayed chat broadcast
//! ```
//!
//! # Available Commands
//!
//! | Chat | Console | Arguments | Description |
//! |------|---------|-----------|-------------|
//! | `_kick` | `kick_player` | `<name_or_index>` | Disconnect a player |
//! | `_list` | `list_players` | None | List players with their index |
//!
//! Only the session host can run them. Other players get no answer at all, so
//! they cannot tell whether the commands exist.
//!
//! # Module Organization
//!
//! - [`registry`] - Command descriptors indexed by name
//! - [`dispatcher`] - Chat interception and delayed rebroadcast
//! - [`resolver`] - Player lookup by index or name
//! - [`actions`] - Individual command handlers
//! - [`responses`] - Response strings

use crate::host::{Host, Player};

mod actions;
mod dispatcher;
mod registry;
mod resolver;
mod responses;

pub use crate::commands::actions::{handle_kick, handle_list};
pub use crate::commands::dispatcher::ChatDispatcher;
pub use crate::commands::registry::CommandRegistry;
pub use crate::commands::responses::{KICK_CONSOLE_HELP_TEXT, LIST_CONSOLE_HELP_TEXT};

/// Signature shared by every command handler.
///
/// Arguments are the host session, the calling player and the argument tokens.
/// The returned text is shown to the caller; an empty string suppresses any
/// response.
pub type CommandHandler = fn(&dyn Host, &Player, &[String]) -> String;

/// A registered chat command.
#[derive(Clone)]
pub struct ChatCommand {
    /// Uppercase command name
    pub name: String,
    /// Usage description
    pub help_text: &'static str,
    /// Function run on invocation
    pub handler: CommandHandler,
}

/// Builds the registry of chat commands offered by the mod.
///
/// # Examples
///
/// ```
/// let registry = chat_commands();
/// assert!(registry.lookup("kick").is_some());
/// assert!(registry.lookup("list").is_some());
/// ```
pub fn chat_commands() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register("KICK", responses::KICK_HELP_TEXT, handle_kick);
    registry.register("LIST", responses::LIST_HELP_TEXT, handle_list);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_commands() {
        let registry = chat_commands();

        let names: Vec<&str> = registry.commands().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["KICK", "LIST"]);
        assert!(registry.lookup("kick").unwrap().help_text.contains("_kick"));
        assert!(registry.lookup("list").unwrap().help_text.contains("_list"));
    }
}

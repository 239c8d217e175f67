//! Command action handlers.
//!
//! Each handler is a plain [`CommandHandler`](crate::commands::CommandHandler):
//! it receives the host, the calling player and the argument tokens, and
//! returns the text to show. An empty string means "say nothing".
//!
//! # Available Handlers
//!
//! - [`handle_kick`] - Disconnect a player by index or name
//! - [`handle_list`] - List connected players with their index

mod kick;
mod list;

pub use crate::commands::actions::{kick::handle_kick, list::handle_list};

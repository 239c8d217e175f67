//! Chat command interception.
//!
//! The game has no notion of chat commands: a chat line is sent through the
//! console as `say <message>`. [`ChatDispatcher`] subscribes to the console
//! pipeline and, once the `say` has run normally, recognizes prefixed lines
//! and runs the matching command for their sender.
//!
//! # Flow
//!
//! ```text
//! say "_kick Big Bob" → filter → parse_chat_command() → handler → delayed broadcast
//! ```
//!
//! A line is only considered when all of these hold:
//! - the session is active and served by this process
//! - the console command is `say` (any case)
//! - the message is not blank and starts with the prefix
//!
//! Anything else is left alone: the chat line was already delivered as plain
//! chat and the dispatcher adds nothing.

use std::{sync::Arc, time::Duration};

use log::{debug, error};
use tokio::{runtime::Handle, task::JoinHandle, time};

use crate::{
    commands::{ChatCommand, CommandRegistry},
    config::{ArgumentJoin, Chat},
    host::{CommandHook, Host, Player},
};

/// Console hook turning prefixed chat lines into commands.
pub struct ChatDispatcher {
    /// Session the commands act on
    host: Arc<dyn Host>,
    /// Commands reachable from the chat
    registry: Arc<CommandRegistry>,
    /// Character starting a chat command
    prefix: char,
    /// Joining rule for the words following the command name
    argument_join: ArgumentJoin,
    /// Delay before a response is broadcast
    broadcast_delay: Duration,
}

impl ChatDispatcher {
    /// Creates a dispatcher for `registry` with the given chat settings.
    pub fn new(host: Arc<dyn Host>, registry: Arc<CommandRegistry>, settings: &Chat) -> Self {
        ChatDispatcher {
            host,
            registry,
            prefix: settings.prefix,
            argument_join: settings.argument_join,
            broadcast_delay: settings.broadcast_delay(),
        }
    }

    /// Splits a chat message into a registered command and its arguments.
    ///
    /// The message is split on single spaces. The first word, without the
    /// prefix, names the command. The remaining words are joined into a single
    /// argument according to the [`ArgumentJoin`] rule; if nothing remains, the
    /// argument list is empty.
    ///
    /// # Returns
    ///
    /// * `Some((command, args))` - The message names a registered command
    /// * `None` - No prefix, or the command is unknown
    ///
    /// # Examples
    ///
    /// ```
    /// let (command, args) = dispatcher.parse_chat_command("_kick Big Bob").unwrap();
    /// assert_eq!(command.name, "KICK");
    /// assert_eq!(args, vec!["BigBob"]);
    /// ```
    pub fn parse_chat_command(&self, message: &str) -> Option<(&ChatCommand, Vec<String>)> {
        let mut words = message.split(' ');
        let name = words.next()?.strip_prefix(self.prefix)?;

        let command = match self.registry.lookup(name) {
            Some(command) => command,
            None => {
                debug!("unknown chat command {}", name);
                return None;
            }
        };

        let argument = match self.argument_join {
            ArgumentJoin::Collapse => words.collect::<String>(),
            ArgumentJoin::Space => words
                .filter(|word| !word.is_empty())
                .collect::<Vec<&str>>()
                .join(" "),
        };

        let args = if argument.is_empty() {
            vec![]
        } else {
            vec![argument]
        };

        Some((command, args))
    }

    /// Runs the chat command carried by a console command, if any.
    ///
    /// # Arguments
    ///
    /// * `sender` - Player who ran the console command
    /// * `command_name` - Console command name
    /// * `args` - Raw console arguments; for `say`, the first one is the message
    ///
    /// # Returns
    ///
    /// The non-blank command response, or `None` when the console command is
    /// not a chat command or the handler had nothing to say.
    pub fn dispatch(&self, sender: &Player, command_name: &str, args: &[String]) -> Option<String> {
        if !self.host.is_session_active() {
            return None;
        }

        if !command_name.eq_ignore_ascii_case("say") {
            return None;
        }

        let message = args.first()?;
        if message.trim().is_empty() || !message.starts_with(self.prefix) {
            return None;
        }

        let (command, command_args) = self.parse_chat_command(message)?;
        debug!(
            "{} runs chat command {} {:?}",
            sender.name, command.name, command_args
        );

        let response = (command.handler)(self.host.as_ref(), sender, &command_args);
        if response.trim().is_empty() {
            return None;
        }

        Some(response)
    }

    /// Dispatches a console command and schedules the broadcast of its
    /// response.
    ///
    /// # Returns
    ///
    /// The handle of the scheduled broadcast, if one was scheduled.
    pub fn handle_console_command(
        &self,
        sender: &Player,
        command_name: &str,
        args: &[String],
    ) -> Option<JoinHandle<()>> {
        let response = self.dispatch(sender, command_name, args)?;
        self.schedule_broadcast(response)
    }

    /// Broadcasts `message` to the chat once the broadcast delay has elapsed.
    ///
    /// The game is still sending the chat line that triggered the command;
    /// sending right away could deliver the response before it.
    fn schedule_broadcast(&self, message: String) -> Option<JoinHandle<()>> {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                error!("unable to schedule chat broadcast: {}", e);
                return None;
            }
        };

        let host = Arc::clone(&self.host);
        let delay = self.broadcast_delay;

        Some(handle.spawn(async move {
            time::sleep(delay).await;
            host.broadcast_chat(&message);
        }))
    }
}

impl CommandHook for ChatDispatcher {
    fn on_command(&self, sender: &Player, command_name: &str, args: &[String]) {
        self.handle_console_command(sender, command_name, args);
    }
}

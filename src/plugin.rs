//! Plugin entry point wiring the commands into the host.
//!
//! [`Plugin`] owns the chat command registry and installs the mod into a host
//! console:
//!
//! 1. **Console commands**: `kick_player` and `list_players`, restricted to the
//!    server. Their response is logged instead of being sent to the chat.
//! 2. **Chat interception**: a [`ChatDispatcher`] subscribed as a command hook,
//!    running `_kick` and `_list` typed by the session host.
//!
//! Nothing is global: the registry and the host are passed down explicitly.

use std::sync::Arc;

use log::{debug, info};

use crate::{
    commands::{
        ChatDispatcher, CommandHandler, CommandRegistry, KICK_CONSOLE_HELP_TEXT,
        LIST_CONSOLE_HELP_TEXT, chat_commands, handle_kick, handle_list,
    },
    config::Chat,
    host::{Console, ConsoleCommand, ConsoleFlags, Host, Player},
};

/// Human readable plugin name
pub const PLUGIN_NAME: &str = "Kick Player";
/// Unique plugin identifier
pub const PLUGIN_GUID: &str = "lustner.KickPlayer";

/// The kick player mod.
pub struct Plugin {
    /// Session the commands act on
    host: Arc<dyn Host>,
    /// Chat commands
    registry: Arc<CommandRegistry>,
    /// Chat settings handed to the dispatcher
    chat: Chat,
}

impl Plugin {
    /// Creates the plugin for a host session.
    pub fn new(host: Arc<dyn Host>, chat: Chat) -> Self {
        Plugin {
            host,
            registry: Arc::new(chat_commands()),
            chat,
        }
    }

    /// Registers the console commands and subscribes the chat dispatcher.
    pub fn install(&self, console: &mut dyn Console) {
        info!(
            "loading {} ({}) {}",
            PLUGIN_NAME,
            PLUGIN_GUID,
            env!("CARGO_PKG_VERSION")
        );

        console.register_command(self.console_command(
            "kick_player",
            KICK_CONSOLE_HELP_TEXT,
            handle_kick,
        ));
        console.register_command(self.console_command(
            "list_players",
            LIST_CONSOLE_HELP_TEXT,
            handle_list,
        ));

        console.subscribe(Arc::new(ChatDispatcher::new(
            Arc::clone(&self.host),
            Arc::clone(&self.registry),
            &self.chat,
        )));

        for command in self.registry.commands() {
            debug!(
                "chat command {}{}: {}",
                self.chat.prefix,
                command.name.to_lowercase(),
                command.help_text
            );
        }
    }

    /// Wraps a handler into a server-restricted console command.
    ///
    /// Console arguments are passed through unchanged: a multi-word name must
    /// be quoted to stay a single argument.
    fn console_command(
        &self,
        name: &str,
        help_text: &str,
        handler: CommandHandler,
    ) -> ConsoleCommand {
        let host = Arc::clone(&self.host);

        ConsoleCommand {
            name: name.to_string(),
            help_text: help_text.to_string(),
            flags: ConsoleFlags::ExecuteOnServer,
            callback: Box::new(move |sender: &Player, args: &[String]| {
                if let Some(response) = console_response(host.as_ref(), handler, sender, args) {
                    info!("{}", response);
                }
            }),
        }
    }
}

/// Runs `handler` for a console command.
///
/// # Returns
///
/// The handler response, or `None` when it is empty.
fn console_response(
    host: &dyn Host,
    handler: CommandHandler,
    sender: &Player,
    args: &[String],
) -> Option<String> {
    let response = handler(host, sender, args);
    if response.is_empty() {
        return None;
    }

    Some(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::host::{CommandHook, MockHost};

    /// Console recording what the plugin installs
    #[derive(Default)]
    struct RecordingConsole {
        commands: Vec<ConsoleCommand>,
        hooks: Vec<Arc<dyn CommandHook>>,
    }

    impl Console for RecordingConsole {
        fn register_command(&mut self, command: ConsoleCommand) {
            self.commands.push(command);
        }

        fn subscribe(&mut self, hook: Arc<dyn CommandHook>) {
            self.hooks.push(hook);
        }
    }

    fn create_test_roster() -> Vec<Player> {
        vec![Player::host("Host", "1"), Player::new("Big Bob", "2")]
    }

    #[test]
    fn test_install_registers_console_commands_and_hook() {
        let plugin = Plugin::new(Arc::new(MockHost::new()), Chat::default());
        let mut console = RecordingConsole::default();

        plugin.install(&mut console);

        let names: Vec<&str> = console.commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["kick_player", "list_players"]);
        assert!(
            console
                .commands
                .iter()
                .all(|c| c.flags == ConsoleFlags::ExecuteOnServer)
        );
        assert_eq!(console.hooks.len(), 1);
    }

    #[test]
    fn test_console_kick_passes_arguments_unchanged() {
        let kicked = Arc::new(Mutex::new(Vec::new()));
        let kicked_clone = Arc::clone(&kicked);

        let mut host = MockHost::new();
        host.expect_roster().returning(create_test_roster);
        host.expect_kick().times(1).returning(move |_, identity| {
            kicked_clone.lock().unwrap().push(identity.to_string());
            Ok(())
        });

        let plugin = Plugin::new(Arc::new(host), Chat::default());
        let mut console = RecordingConsole::default();
        plugin.install(&mut console);

        let kick_player = &console.commands[0];
        let caller = Player::host("Host", "1");

        // Two tokens is a usage error on the console path
        (kick_player.callback)(&caller, &["Big".to_string(), "Bob".to_string()]);
        (kick_player.callback)(&caller, &["Big Bob".to_string()]);

        assert_eq!(*kicked.lock().unwrap(), vec!["2".to_string()]);
    }

    #[test]
    fn test_console_list_requires_no_argument() {
        let mut host = MockHost::new();
        host.expect_roster().times(1).returning(create_test_roster);
        let caller = Player::host("Host", "1");
        let usage = chat_commands().lookup("list").unwrap().help_text;

        let rejected = console_response(&host, handle_list, &caller, &["extra".to_string()]);
        assert_eq!(rejected.as_deref(), Some(usage));

        let listed = console_response(&host, handle_list, &caller, &[]);
        assert_eq!(listed.as_deref(), Some("Player 0: Host\nPlayer 1: Big Bob"));
    }

    #[test]
    fn test_console_response_skips_empty_result() {
        let host = MockHost::new();

        let response = console_response(&host, handle_list, &Player::new("Big Bob", "2"), &[]);
        assert!(response.is_none());
    }
}

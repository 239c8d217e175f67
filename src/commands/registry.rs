//! Chat command registry.
//!
//! The registry maps command names to [`ChatCommand`] descriptors. Names are
//! stored uppercase and looked up case-insensitively, so `_kick`, `_KICK` and
//! `_Kick` reach the same handler.

use std::collections::BTreeMap;

use log::debug;

use crate::commands::{ChatCommand, CommandHandler};

/// Immutable-after-startup set of chat commands.
#[derive(Default)]
pub struct CommandRegistry {
    /// Descriptors indexed by uppercase name
    commands: BTreeMap<String, ChatCommand>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        CommandRegistry::default()
    }

    /// Registers a command.
    ///
    /// Registering a name twice replaces the first descriptor.
    ///
    /// # Arguments
    ///
    /// * `name` - Command name, any case
    /// * `help_text` - Usage shown on wrong invocation
    /// * `handler` - Function run when the command is invoked
    pub fn register(&mut self, name: &str, help_text: &'static str, handler: CommandHandler) {
        let name = name.to_uppercase();
        debug!("registering chat command {}", name);

        self.commands.insert(
            name.clone(),
            ChatCommand {
                name,
                help_text,
                handler,
            },
        );
    }

    /// Looks up a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&ChatCommand> {
        self.commands.get(&name.to_uppercase())
    }

    /// Iterates over the registered commands in name order.
    pub fn commands(&self) -> impl Iterator<Item = &ChatCommand> {
        self.commands.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Host, Player};

    fn first(_host: &dyn Host, _caller: &Player, _args: &[String]) -> String {
        "first".to_string()
    }

    fn second(_host: &dyn Host, _caller: &Player, _args: &[String]) -> String {
        "second".to_string()
    }

    #[test]
    fn test_register_normalizes_name() {
        let mut registry = CommandRegistry::new();
        registry.register("kick", "help", first);

        let command = registry.lookup("kick").unwrap();
        assert_eq!(command.name, "KICK");
        assert_eq!(command.help_text, "help");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register("Kick", "help", first);

        assert!(registry.lookup("KICK").is_some());
        assert!(registry.lookup("kick").is_some());
        assert!(registry.lookup("kIcK").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        let mut registry = CommandRegistry::new();
        registry.register("kick", "help", first);

        assert!(registry.lookup("foo").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = CommandRegistry::new();
        registry.register("kick", "first help", first);
        registry.register("KICK", "second help", second);

        let command = registry.lookup("kick").unwrap();
        assert_eq!(command.help_text, "second help");
        assert_eq!(registry.commands().count(), 1);

        let host = crate::host::MockHost::new();
        let caller = Player::host("Host", "1");
        assert_eq!((command.handler)(&host, &caller, &[]), "second");
    }

    #[test]
    fn test_commands_are_sorted() {
        let mut registry = CommandRegistry::new();
        registry.register("list", "help", first);
        registry.register("kick", "help", first);

        let names: Vec<&str> = registry.commands().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["KICK", "LIST"]);
    }
}

//! In-process console pipeline.
//!
//! [`LocalConsole`] executes console lines the way a game console does: the
//! built-in `say` and `help` commands, then any command registered through
//! [`Console::register_command`]. After every execution, subscribed
//! [`CommandHook`]s are notified with the raw command, whether it was known or
//! not.

use std::{collections::BTreeMap, sync::Arc};

use log::{debug, info};

use crate::host::{
    CommandHook, Console, ConsoleCommand, ConsoleFlags, Host, LocalHost, Player,
};

/// Console command pipeline bound to a [`LocalHost`].
pub struct LocalConsole {
    /// Session the commands run against
    host: Arc<LocalHost>,
    /// Registered commands indexed by lowercase name
    commands: BTreeMap<String, ConsoleCommand>,
    /// Hooks run after each command
    hooks: Vec<Arc<dyn CommandHook>>,
}

impl LocalConsole {
    /// Creates a console whose only registered command is `session`.
    pub fn new(host: Arc<LocalHost>) -> Self {
        let mut console = LocalConsole {
            host: Arc::clone(&host),
            commands: BTreeMap::new(),
            hooks: Vec::new(),
        };
        console.register_command(session_command(host));
        console
    }

    /// Sends a chat line as `sender`, exactly like the in-game chat box does.
    ///
    /// The whole message travels as the single argument of `say`.
    pub fn submit_chat(&self, sender: &Player, message: &str) {
        self.run_cmd(sender, "say", &[message.to_string()]);
    }

    /// Executes a console command, then notifies every subscribed hook.
    ///
    /// # Arguments
    ///
    /// * `sender` - Player the command is executed for
    /// * `command_name` - Command name, matched case-insensitively
    /// * `args` - Tokenized arguments
    pub fn run_cmd(&self, sender: &Player, command_name: &str, args: &[String]) {
        debug!("{} runs {} {:?}", sender.name, command_name, args);

        match command_name.to_lowercase().as_str() {
            "say" => self.say(sender, args),
            "help" => self.help(),
            name => match self.commands.get(name) {
                Some(command) => {
                    if command.flags == ConsoleFlags::ExecuteOnServer
                        && !self.host.is_session_active()
                    {
                        info!("{} can only be executed on an active server", command.name);
                    } else {
                        (command.callback)(sender, args);
                    }
                }
                None => info!("unknown command: {}", command_name),
            },
        }

        for hook in &self.hooks {
            hook.on_command(sender, command_name, args);
        }
    }

    fn say(&self, sender: &Player, args: &[String]) {
        let message = args.join(" ");
        if message.trim().is_empty() {
            return;
        }
        self.host
            .broadcast_chat(&format!("{}: {}", sender.name, message));
    }

    fn help(&self) {
        for command in self.commands.values() {
            println!("{}\n{}\n", command.name, command.help_text);
        }
    }

    /// Names of the registered commands, sorted.
    pub fn command_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}

impl Console for LocalConsole {
    fn register_command(&mut self, command: ConsoleCommand) {
        debug!("registering console command {}", command.name);
        self.commands.insert(command.name.to_lowercase(), command);
    }

    fn subscribe(&mut self, hook: Arc<dyn CommandHook>) {
        self.hooks.push(hook);
    }
}

/// Builds the `session start|stop` command toggling whether the session is
/// served. It stays available while the session is stopped.
fn session_command(host: Arc<LocalHost>) -> ConsoleCommand {
    ConsoleCommand {
        name: "session".to_string(),
        help_text: "Usage: session start|stop\nDescription: Start or stop serving the session"
            .to_string(),
        flags: ConsoleFlags::None,
        callback: Box::new(move |_: &Player, args: &[String]| {
            match args.first().map(|arg| arg.to_lowercase()).as_deref() {
                Some("start") if args.len() == 1 => host.set_session_active(true),
                Some("stop") if args.len() == 1 => host.set_session_active(false),
                _ => info!("Usage: session start|stop"),
            }
        }),
    }
}

/// Splits a console line into tokens.
///
/// Tokens are separated by whitespace; double quotes group words into a single
/// token and are removed. An unterminated quote extends to the end of the line.
///
/// # Examples
///
/// ```
/// let tokens = split_command_line(r#"kick_player "Big Bob""#);
/// assert_eq!(tokens, vec!["kick_player", "Big Bob"]);
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }

    tokens
}

//! Interactive console for the local session.
//!
//! Reads console lines from stdin and runs them through the [`LocalConsole`],
//! so the mod can be driven from a terminal:
//!
//! ```text
//! say _list                 chat line from the session host
//! @2 say _kick Host         chat line from the player at index 2
//! kick_player "Big Bob"     console command
//! session stop              stop serving the session
//! help                      list console commands
//! quit
//! ```

use std::time::Duration;

use anyhow::{Context, anyhow};
use log::{error, info};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    time,
};

use crate::host::{Host, LocalConsole, LocalHost, Player, split_command_line};

/// Runs console lines read from stdin until `quit` or end of input.
///
/// # Arguments
///
/// * `host` - Session the lines run against
/// * `console` - Console with the plugin installed
/// * `broadcast_delay` - Delay of chat responses, waited before returning so
///   pending responses are delivered
pub async fn run(
    host: &LocalHost,
    console: &LocalConsole,
    broadcast_delay: Duration,
) -> anyhow::Result<()> {
    info!(
        "console ready with commands: {}",
        console.command_names().join(", ")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read console input")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let (sender, line) = match select_sender(host, line) {
            Ok(selection) => selection,
            Err(e) => {
                error!("{}", e);
                continue;
            }
        };

        run_line(console, &sender, line);
    }

    time::sleep(broadcast_delay).await;
    info!("console closed");

    Ok(())
}

/// Runs a single console line as `sender`.
///
/// `say` keeps the rest of the line verbatim as the chat message, as the
/// in-game chat box does; other commands are tokenized.
fn run_line(console: &LocalConsole, sender: &Player, line: &str) {
    let (first, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    if first.eq_ignore_ascii_case("say") {
        console.submit_chat(sender, rest.trim_start());
        return;
    }

    let tokens = split_command_line(line);
    if let Some((command_name, args)) = tokens.split_first() {
        console.run_cmd(sender, command_name, args);
    }
}

/// Picks the player a line runs as.
///
/// A line starting with `@<index>` runs as the roster player at that index;
/// any other line runs as the session host.
///
/// # Returns
///
/// The sender and the line without the `@<index>` selector.
fn select_sender<'a>(host: &LocalHost, line: &'a str) -> anyhow::Result<(Player, &'a str)> {
    let Some(selector) = line.strip_prefix('@') else {
        let sender = host
            .session_host()
            .ok_or_else(|| anyhow!("the session has no host"))?;
        return Ok((sender, line));
    };

    let (index, rest) = selector
        .split_once(char::is_whitespace)
        .unwrap_or((selector, ""));
    let index: usize = index
        .parse()
        .with_context(|| format!("invalid player index {}", index))?;
    let sender = host
        .roster()
        .get(index)
        .cloned()
        .ok_or_else(|| anyhow!("no player at index {}", index))?;

    Ok((sender, rest.trim_start()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::Chat, plugin::Plugin};

    fn create_test_host() -> Arc<LocalHost> {
        Arc::new(LocalHost::new(vec![
            Player::host("Host", "1"),
            Player::new("Alice", "2"),
            Player::new("Big Bob", "3"),
        ]))
    }

    fn create_test_console(host: &Arc<LocalHost>) -> LocalConsole {
        let mut console = LocalConsole::new(Arc::clone(host));
        let chat = Chat {
            broadcast_delay_ms: 0,
            ..Chat::default()
        };
        Plugin::new(Arc::clone(host) as Arc<dyn Host>, chat).install(&mut console);
        console
    }

    fn roster_names(host: &LocalHost) -> Vec<String> {
        host.roster().into_iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_select_sender_defaults_to_host() {
        let host = create_test_host();

        let (sender, line) = select_sender(&host, "say hello").unwrap();
        assert_eq!(sender.name, "Host");
        assert_eq!(line, "say hello");
    }

    #[test]
    fn test_select_sender_by_index() {
        let host = create_test_host();

        let (sender, line) = select_sender(&host, "@2   say _kick Host").unwrap();
        assert_eq!(sender.name, "Big Bob");
        assert_eq!(line, "say _kick Host");
    }

    #[test]
    fn test_select_sender_invalid_index() {
        let host = create_test_host();

        assert!(select_sender(&host, "@9 say hi").is_err());
        assert!(select_sender(&host, "@bob say hi").is_err());
    }

    #[tokio::test]
    async fn test_chat_kick_from_host() {
        let host = create_test_host();
        let console = create_test_console(&host);

        run_line(&console, &Player::host("Host", "1"), "say _kick Big Bob");

        assert_eq!(roster_names(&host), vec!["Host", "Alice"]);
    }

    #[tokio::test]
    async fn test_chat_kick_from_other_player_is_ignored() {
        let host = create_test_host();
        let console = create_test_console(&host);

        run_line(&console, &Player::new("Alice", "2"), "say _kick 2");

        assert_eq!(roster_names(&host).len(), 3);
    }

    #[tokio::test]
    async fn test_console_kick_with_quoted_name() {
        let host = create_test_host();
        let console = create_test_console(&host);

        run_line(&console, &Player::host("Host", "1"), r#"kick_player "big bob""#);

        assert_eq!(roster_names(&host), vec!["Host", "Alice"]);
    }

    #[tokio::test]
    async fn test_console_kick_refused_without_session() {
        let host = create_test_host();
        let console = create_test_console(&host);
        let caller = Player::host("Host", "1");

        run_line(&console, &caller, "session stop");
        assert!(!host.is_session_active());

        run_line(&console, &caller, "kick_player 1");
        run_line(&console, &caller, "say _kick 1");
        assert_eq!(roster_names(&host).len(), 3);

        run_line(&console, &caller, "session start");
        run_line(&console, &caller, "kick_player 1");
        assert_eq!(roster_names(&host), vec!["Host", "Big Bob"]);
    }
}

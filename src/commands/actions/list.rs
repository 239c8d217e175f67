//! List command handler.
//!
//! Reports every connected player with the index accepted by the kick command.
//! This is a read-only command.

use log::{debug, info};

use crate::{
    commands::responses::{LIST_HELP_TEXT, format_player_line},
    host::{Host, Player},
};

/// Lists the roster as `Player {index}: {name}` lines.
///
/// Non-host callers get an empty response. Any argument yields the usage text.
/// An empty roster gives an empty response, which is never broadcast.
pub fn handle_list(host: &dyn Host, caller: &Player, args: &[String]) -> String {
    if !caller.has_authority {
        return String::new();
    }

    if !args.is_empty() {
        debug!("list called with {} arguments", args.len());
        return LIST_HELP_TEXT.to_owned();
    }

    host.roster()
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let line = format_player_line(index, &player.name);
            info!("{}", line);
            line
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;

    #[test]
    fn test_list_players_in_roster_order() {
        let mut host = MockHost::new();
        host.expect_roster().times(1).returning(|| {
            vec![
                Player::host("Host", "1"),
                Player::new("Alice", "2"),
                Player::new("Big Bob", "3"),
            ]
        });

        let result = handle_list(&host, &Player::host("Host", "1"), &[]);

        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(
            lines,
            vec!["Player 0: Host", "Player 1: Alice", "Player 2: Big Bob"]
        );
    }

    #[test]
    fn test_list_empty_roster_gives_no_lines() {
        let mut host = MockHost::new();
        host.expect_roster().returning(Vec::new);

        let result = handle_list(&host, &Player::host("Host", "1"), &[]);
        assert_eq!(result, "");
        assert_eq!(result.lines().count(), 0);
    }

    #[test]
    fn test_list_with_arguments_is_rejected() {
        let mut host = MockHost::new();
        host.expect_roster().never();

        let result = handle_list(&host, &Player::host("Host", "1"), &["0".to_string()]);
        assert_eq!(result, LIST_HELP_TEXT);
        assert!(!result.contains("Player 0"));
    }

    #[test]
    fn test_list_unauthorized_is_silent() {
        let host = MockHost::new();

        assert_eq!(handle_list(&host, &Player::new("Alice", "2"), &[]), "");
    }
}

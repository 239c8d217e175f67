//! Player lookup from a user-supplied token.
//!
//! A token designates a player either by its index in the current roster or by
//! its display name. Name matching ignores case and space characters, so
//! `bigbob`, `Big Bob` and `BIG   BOB` all designate a player named `Big Bob`.

use log::debug;

use crate::host::Player;

/// Finds the roster player designated by `token`.
///
/// 1. A blank token matches nobody.
/// 2. A token parsing as an integer is a 0-based roster index; out of range
///    indices (including negative ones) match nobody.
/// 3. Any other token is compared against display names with spaces removed,
///    case-insensitively; the first match in roster order wins.
///
/// # Examples
///
/// ```
/// let roster = vec![Player::host("Host", "1"), Player::new("Big Bob", "2")];
/// assert_eq!(resolve_player("1", &roster).unwrap().name, "Big Bob");
/// assert_eq!(resolve_player("bigbob", &roster).unwrap().name, "Big Bob");
/// assert!(resolve_player("", &roster).is_none());
/// ```
pub fn resolve_player(token: &str, roster: &[Player]) -> Option<Player> {
    if token.trim().is_empty() {
        return None;
    }

    if let Ok(index) = token.trim().parse::<i64>() {
        debug!("resolving player by index {}", index);
        return usize::try_from(index)
            .ok()
            .and_then(|index| roster.get(index))
            .cloned();
    }

    let wanted = normalize_name(token);
    debug!("resolving player by name {}", wanted);

    roster
        .iter()
        .find(|player| normalize_name(&player.name) == wanted)
        .cloned()
}

/// Removes space characters and lowercases a player name.
fn normalize_name(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_roster() -> Vec<Player> {
        vec![
            Player::host("Host", "1"),
            Player::new("Alice", "2"),
            Player::new("Big Bob", "3"),
            Player::new("bigbob", "4"),
        ]
    }

    #[test]
    fn test_resolve_every_valid_index() {
        let roster = create_test_roster();
        for (index, player) in roster.iter().enumerate() {
            assert_eq!(resolve_player(&index.to_string(), &roster).as_ref(), Some(player));
        }
    }

    #[test]
    fn test_resolve_out_of_range_index() {
        let roster = create_test_roster();
        assert!(resolve_player("4", &roster).is_none());
        assert!(resolve_player("-1", &roster).is_none());
    }

    #[test]
    fn test_resolve_index_surrounded_by_whitespace() {
        let roster = create_test_roster();
        assert_eq!(resolve_player(" 2", &roster).unwrap().name, "Big Bob");
        assert_eq!(resolve_player("1 ", &roster).unwrap().name, "Alice");
    }

    #[test]
    fn test_resolve_numeric_token_does_not_match_names() {
        let roster = vec![Player::host("Host", "1"), Player::new("1337", "2")];
        assert!(resolve_player("1337", &roster).is_none());
    }

    #[test]
    fn test_resolve_by_name_ignores_case_and_spaces() {
        let roster = create_test_roster();
        assert_eq!(resolve_player("ALICE", &roster).unwrap().identity, "2");
        assert_eq!(resolve_player("a lice", &roster).unwrap().identity, "2");
        assert_eq!(resolve_player("Big Bob", &roster).unwrap().identity, "3");
    }

    #[test]
    fn test_resolve_first_match_in_roster_order() {
        let roster = create_test_roster();
        // "Big Bob" and "bigbob" normalize to the same name
        assert_eq!(resolve_player("BIGBOB", &roster).unwrap().identity, "3");
    }

    #[test]
    fn test_resolve_blank_token() {
        let roster = create_test_roster();
        assert!(resolve_player("", &roster).is_none());
        assert!(resolve_player("   ", &roster).is_none());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let roster = create_test_roster();
        assert!(resolve_player("Charlie", &roster).is_none());
    }

    #[test]
    fn test_resolve_empty_roster() {
        assert!(resolve_player("0", &[]).is_none());
        assert!(resolve_player("Alice", &[]).is_none());
    }
}

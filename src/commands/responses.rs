//! User-facing response strings.
//!
//! Every message the commands can send back to a player or to the console is
//! built here, so wording stays consistent between the chat and console paths.

/// Help text of the kick command, also returned on wrong usage.
pub const KICK_HELP_TEXT: &str =
    "Usage: _kick {player_name}\nDescription: Kick player according to given name";

/// Help text of the list command, also returned on wrong usage.
pub const LIST_HELP_TEXT: &str =
    "Usage: _list\nDescription: List connected players with their index";

/// Help text of the `kick_player` console command.
pub const KICK_CONSOLE_HELP_TEXT: &str =
    "Usage: kick_player {player_name_or_index}\nDescription: Kick player according to given name or index";

/// Help text of the `list_players` console command.
pub const LIST_CONSOLE_HELP_TEXT: &str =
    "Usage: list_players\nDescription: List connected players with their index";

/// Formats the response when no connected player matches the given token.
///
/// # Examples
///
/// ```
/// let msg = format_player_not_found();
/// assert!(msg.contains("Unable to find player"));
/// ```
pub fn format_player_not_found() -> String {
    "Unable to find player with given name".to_owned()
}

/// Formats the rejection sent when the caller targets themselves.
pub fn format_self_kick() -> String {
    "You cannot kick yourself".to_owned()
}

/// Formats the confirmation of a successful kick.
///
/// # Arguments
///
/// * `player_name` - Display name of the kicked player
pub fn format_player_kicked(player_name: &str) -> String {
    format!("Player {} kicked", player_name)
}

/// Formats the generic failure shown when the host refused the kick.
///
/// Failure details are only logged, never sent to chat.
pub fn format_kick_failed() -> String {
    "Unable to kick player".to_owned()
}

/// Formats one roster line of the player list.
///
/// # Examples
///
/// ```
/// assert_eq!(format_player_line(2, "Alice"), "Player 2: Alice");
/// ```
pub fn format_player_line(index: usize, player_name: &str) -> String {
    format!("Player {}: {}", index, player_name)
}

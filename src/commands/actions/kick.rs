//! Kick command handler.
//!
//! Disconnects a player designated by roster index or display name.
//!
//! # Validation
//!
//! Checks run in this order and stop at the first failure:
//! - **Authority**: non-host callers get an empty response, nothing is done
//! - **Arguments**: exactly one token, otherwise the usage text
//! - **Target**: the token must resolve to a connected player
//! - **Self**: the caller cannot kick a player with their own display name
//!
//! # Errors
//!
//! A failure reported by the host kick primitive is logged with its full
//! detail and answered with a generic message.

use log::{debug, error, info};

use crate::{
    commands::{
        resolver::resolve_player,
        responses::{
            KICK_HELP_TEXT, format_kick_failed, format_player_kicked, format_player_not_found,
            format_self_kick,
        },
    },
    host::{Host, Player},
};

/// Kicks the player designated by the single argument.
///
/// # Returns
///
/// - empty string: the caller is not the session host
/// - usage text: argument count is not 1
/// - error message: unknown target, self-kick, or host failure
/// - confirmation naming the kicked player otherwise
pub fn handle_kick(host: &dyn Host, caller: &Player, args: &[String]) -> String {
    if !caller.has_authority {
        return String::new();
    }

    if args.len() != 1 {
        debug!("kick called with {} arguments", args.len());
        return KICK_HELP_TEXT.to_owned();
    }

    let target = match resolve_player(&args[0], &host.roster()) {
        Some(player) => player,
        None => {
            debug!("no player matches {}", args[0]);
            return format_player_not_found();
        }
    };

    if target.name == caller.name {
        debug!("{} tried to kick themselves", caller.name);
        return format_self_kick();
    }

    info!(
        "Trying to kick player with username {} and identity {}",
        target.name, target.identity
    );

    match host.kick(caller, &target.identity) {
        Ok(()) => format_player_kicked(&target.name),
        Err(e) => {
            error!("failed to kick {}: {:?}", target.name, e);
            format_kick_failed()
        }
    }
}

//! Command and key routing decisions
//!
//! These functions only decide where something goes. The panel carries the
//! decision out against its host and base handler, which keeps the rules
//! testable without either.

use crate::input::ButtonCode;

/// Prefix marking an engine console command
pub const COMMAND_PREFIX: &str = "cmd ";

/// Console command that closes the pause menu
pub const RESUME_COMMAND: &str = "gamemenucommand resumegame";

/// Where a button command goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRoute<'a> {
    /// Run this text on the engine console
    Client(&'a str),
    /// A `cmd ` prefix with nothing after it
    Nothing,
    /// Not ours; hand the full text to the base handler
    Fallback(&'a str),
}

/// Splits a command into its route
///
/// The prefix is case-sensitive and the remainder is passed on untouched.
pub fn route_command(command: &str) -> CommandRoute<'_> {
    match command.strip_prefix(COMMAND_PREFIX) {
        Some("") => CommandRoute::Nothing,
        Some(console) => CommandRoute::Client(console),
        None => CommandRoute::Fallback(command),
    }
}

/// What a key release does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    /// Leave the pause menu and go back to the level
    ResumeGame,
    Fallback,
}

/// Decides a key release given the base button code
///
/// The cancel buttons only resume while a level is loaded. On the front-end
/// menu there is nothing to resume, so they go to the base handler.
pub fn route_key_release(button: ButtonCode, in_level: bool) -> KeyRoute {
    match button {
        ButtonCode::XButtonB | ButtonCode::SteamControllerB if in_level => KeyRoute::ResumeGame,
        _ => KeyRoute::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_prefix_forwards_remainder() {
        assert_eq!(route_command("cmd foo bar"), CommandRoute::Client("foo bar"));
        assert_eq!(
            route_command("cmd gamemenucommand openoptionsdialog"),
            CommandRoute::Client("gamemenucommand openoptionsdialog")
        );
    }

    #[test]
    fn test_remainder_is_verbatim() {
        assert_eq!(route_command("cmd  spaced "), CommandRoute::Client(" spaced "));
    }

    #[test]
    fn test_empty_remainder_does_nothing() {
        assert_eq!(route_command("cmd "), CommandRoute::Nothing);
    }

    #[test]
    fn test_other_commands_fall_back() {
        assert_eq!(route_command("somethingelse"), CommandRoute::Fallback("somethingelse"));
        // Prefix is case-sensitive and needs its space
        assert_eq!(route_command("CMD quit"), CommandRoute::Fallback("CMD quit"));
        assert_eq!(route_command("cmd"), CommandRoute::Fallback("cmd"));
        assert_eq!(route_command(""), CommandRoute::Fallback(""));
    }

    #[test]
    fn test_cancel_resumes_only_in_level() {
        assert_eq!(route_key_release(ButtonCode::XButtonB, true), KeyRoute::ResumeGame);
        assert_eq!(
            route_key_release(ButtonCode::SteamControllerB, true),
            KeyRoute::ResumeGame
        );
        assert_eq!(route_key_release(ButtonCode::XButtonB, false), KeyRoute::Fallback);
        assert_eq!(route_key_release(ButtonCode::XButtonA, true), KeyRoute::Fallback);
        assert_eq!(route_key_release(ButtonCode::KeyEscape, true), KeyRoute::Fallback);
    }
}

//! Host engine collaborators
//!
//! The menu never reaches for global engine state. Everything it needs from
//! the engine is behind [`EngineHost`], handed to the panel at construction,
//! and everything it declines to handle goes to a [`BaseHandler`] supplied by
//! the caller of each callback. Tests plug in fakes for both.

use crate::input::KeyCode;

/// Launch parameter that shows the legacy console button
pub const CONSOLE_PARM: &str = "-console";

/// Services the menu needs from the running engine
pub trait EngineHost {
    /// Current engine time in seconds; drives gradient animation
    fn time(&self) -> f32;

    /// Whether a level is loaded; selects the in-game menu
    fn is_in_level(&self) -> bool;

    /// Executes a console command with no restrictions
    fn client_cmd_unrestricted(&mut self, command: &str);

    /// The process command line
    fn command_line(&self) -> &CommandLine;
}

/// Whatever sits behind the menu in the panel tree
///
/// Receives the commands and keys the menu does not consume.
pub trait BaseHandler {
    fn on_command(&mut self, command: &str);

    fn on_key_code_pressed(&mut self, _code: KeyCode) {}

    fn on_key_code_released(&mut self, _code: KeyCode) {}
}

/// Handler that drops everything
impl BaseHandler for () {
    fn on_command(&mut self, _command: &str) {}
}

/// Launch arguments with Source-style `-parm` lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandLine {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Captures the current process arguments (minus the program name)
    pub fn from_env() -> Self {
        CommandLine::new(std::env::args().skip(1))
    }

    /// Returns true if `parm` appears anywhere (case-insensitive)
    pub fn find_parm(&self, parm: &str) -> bool {
        self.args.iter().any(|arg| arg.eq_ignore_ascii_case(parm))
    }

    /// Value following `parm`, if any
    pub fn parm_value(&self, parm: &str) -> Option<&str> {
        let index = self.args.iter().position(|arg| arg.eq_ignore_ascii_case(parm))?;
        self.args
            .get(index + 1)
            .map(String::as_str)
            .filter(|value| !value.starts_with(['-', '+']))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_parm_is_case_insensitive() {
        let command_line = CommandLine::new(["-game", "hl2", "-CONSOLE"]);
        assert!(command_line.find_parm(CONSOLE_PARM));
        assert!(command_line.find_parm("-game"));
        assert!(!command_line.find_parm("-novid"));
    }

    #[test]
    fn test_parm_value() {
        let command_line = CommandLine::new(["-game", "hl2", "-console", "+map", "x"]);
        assert_eq!(command_line.parm_value("-game"), Some("hl2"));
        assert_eq!(command_line.parm_value("-console"), None);
        assert_eq!(command_line.parm_value("-missing"), None);
    }

    #[test]
    fn test_unit_handler_accepts_everything() {
        let mut base = ();
        base.on_command("anything");
        base.on_key_code_released(KeyCode::new(crate::input::ButtonCode::XButtonB));
    }
}

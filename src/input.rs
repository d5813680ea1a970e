//! Menu input codes and their meaning
//!
//! The host reports raw key codes; controller buttons carry the index of the
//! pad they came from. The menu only cares about the base button (which
//! button, not which pad), then turns it into a [`MenuAction`].
//!
//! # Architecture
//!
//! 1. Host delivers a [`KeyCode`] (button + controller slot)
//! 2. [`KeyCode::base_button_code`] strips the controller slot
//! 3. [`menu_action`] maps the base button to a menu action, if any
//! 4. The panel executes the action or hands the key to its base handler

/// Buttons and keys the menu distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonCode {
    // === Controller face buttons ===
    XButtonA,
    XButtonB,
    XButtonX,
    XButtonY,
    XButtonStart,
    XButtonBack,

    // === Controller directions ===
    XButtonUp,
    XButtonDown,
    XButtonLeft,
    XButtonRight,
    XStickUp,
    XStickDown,

    // === Steam Controller ===
    SteamControllerA,
    SteamControllerB,

    // === Keyboard ===
    KeyUp,
    KeyDown,
    KeyEnter,
    KeyEscape,

    /// Anything else, by host-specific number
    Other(u32),
}

/// A key event as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode {
    pub button: ButtonCode,
    /// Controller slot (0 for keyboard and the first pad)
    pub controller: u8,
}

impl KeyCode {
    /// Key from the keyboard or the first controller
    pub fn new(button: ButtonCode) -> Self {
        KeyCode {
            button,
            controller: 0,
        }
    }

    pub fn from_controller(button: ButtonCode, controller: u8) -> Self {
        KeyCode { button, controller }
    }

    /// The button regardless of which controller pressed it
    pub fn base_button_code(self) -> ButtonCode {
        self.button
    }
}

impl From<ButtonCode> for KeyCode {
    fn from(button: ButtonCode) -> Self {
        KeyCode::new(button)
    }
}

/// What a key means to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NavigateUp,
    NavigateDown,
    Activate,
    Cancel,
}

/// Maps a base button to a menu action
pub fn menu_action(button: ButtonCode) -> Option<MenuAction> {
    match button {
        ButtonCode::XButtonUp | ButtonCode::XStickUp | ButtonCode::KeyUp => {
            Some(MenuAction::NavigateUp)
        }
        ButtonCode::XButtonDown | ButtonCode::XStickDown | ButtonCode::KeyDown => {
            Some(MenuAction::NavigateDown)
        }
        ButtonCode::XButtonA | ButtonCode::SteamControllerA | ButtonCode::KeyEnter => {
            Some(MenuAction::Activate)
        }
        ButtonCode::XButtonB | ButtonCode::SteamControllerB => Some(MenuAction::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_button_ignores_controller_slot() {
        let second_pad = KeyCode::from_controller(ButtonCode::XButtonB, 1);
        let first_pad = KeyCode::new(ButtonCode::XButtonB);
        assert_ne!(second_pad, first_pad);
        assert_eq!(second_pad.base_button_code(), first_pad.base_button_code());
    }

    #[test]
    fn test_directions_map_to_navigation() {
        assert_eq!(menu_action(ButtonCode::XButtonUp), Some(MenuAction::NavigateUp));
        assert_eq!(menu_action(ButtonCode::KeyUp), Some(MenuAction::NavigateUp));
        assert_eq!(menu_action(ButtonCode::XStickDown), Some(MenuAction::NavigateDown));
        assert_eq!(menu_action(ButtonCode::KeyEnter), Some(MenuAction::Activate));
    }

    #[test]
    fn test_cancel_buttons() {
        assert_eq!(menu_action(ButtonCode::XButtonB), Some(MenuAction::Cancel));
        assert_eq!(menu_action(ButtonCode::SteamControllerB), Some(MenuAction::Cancel));
        // Escape belongs to the host's own menu toggle, not the cancel shortcut
        assert_eq!(menu_action(ButtonCode::KeyEscape), None);
        assert_eq!(menu_action(ButtonCode::Other(42)), None);
    }
}

//! Which of the two menus is showing

/// The menu context, derived from whether the player is in a level
///
/// Never stored: the panel asks the host every time it needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuContext {
    /// Front-end menu, no level loaded
    MainMenu,
    /// Pause menu over a running level
    InGame,
}

impl MenuContext {
    pub const ALL: [MenuContext; 2] = [MenuContext::MainMenu, MenuContext::InGame];

    pub fn from_in_level(in_level: bool) -> Self {
        if in_level {
            MenuContext::InGame
        } else {
            MenuContext::MainMenu
        }
    }

    /// Index into per-context arrays
    pub fn index(self) -> usize {
        match self {
            MenuContext::MainMenu => 0,
            MenuContext::InGame => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_level_state() {
        assert_eq!(MenuContext::from_in_level(false), MenuContext::MainMenu);
        assert_eq!(MenuContext::from_in_level(true), MenuContext::InGame);
    }

    #[test]
    fn test_indices_are_distinct() {
        assert_eq!(MenuContext::MainMenu.index(), 0);
        assert_eq!(MenuContext::InGame.index(), 1);
        assert_eq!(MenuContext::ALL.len(), 2);
    }
}

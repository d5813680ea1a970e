//! Directional navigation chain
//!
//! The active list (highest priority first) is linked into a chain:
//! `nav_up` points at the next higher-priority button, `nav_down` at the next
//! lower one. The highest-priority button sits on top of the menu, so the
//! links agree with what the player sees. The chain is open at both ends.

use super::button::ButtonId;
use super::registry::ButtonRegistry;
use crate::context::MenuContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}

/// Clears every link, then chains the buttons of `context`
///
/// Returns the button that should receive initial focus (the highest
/// priority one), or `None` for an empty list.
pub fn link_chain(registry: &mut ButtonRegistry, context: MenuContext) -> Option<ButtonId> {
    for widget in registry.iter_mut() {
        widget.clear_navigation();
    }

    let ids = registry.ids(context).to_vec();
    for pair in ids.windows(2) {
        let (higher, lower) = (pair[0], pair[1]);
        if let Some(widget) = registry.get_mut(lower) {
            widget.set_nav_up(Some(higher));
        }
        if let Some(widget) = registry.get_mut(higher) {
            widget.set_nav_down(Some(lower));
        }
    }

    ids.first().copied()
}

/// Follows one link from `from`; `None` at the end of the chain
pub fn step(registry: &ButtonRegistry, from: ButtonId, direction: NavDirection) -> Option<ButtonId> {
    let widget = registry.get(from)?;
    let next = match direction {
        NavDirection::Up => widget.nav_up(),
        NavDirection::Down => widget.nav_down(),
    }?;
    // Only land on live, visible buttons
    registry
        .get(next)
        .filter(|target| target.is_visible())
        .map(|_| next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ButtonDescriptor, Family, Localization};
    use crate::gui::button::ButtonStyle;
    use std::collections::HashSet;

    fn registry_with(priorities: &[(&str, i32, Family)]) -> ButtonRegistry {
        let descriptors: Vec<ButtonDescriptor> = priorities
            .iter()
            .enumerate()
            .map(|(sequence, (name, priority, family))| ButtonDescriptor {
                name: name.to_string(),
                command: String::new(),
                text: name.to_string(),
                description: String::new(),
                priority: *priority,
                family: *family,
                sequence,
            })
            .collect();
        let mut registry = ButtonRegistry::new();
        registry.rebuild(&descriptors, &ButtonStyle::default(), &Localization::new());
        for widget in registry.iter_mut() {
            widget.set_visible(true);
        }
        registry
    }

    #[test]
    fn test_up_walk_from_lowest_reaches_highest_once() {
        let mut registry = registry_with(&[
            ("b", 5, Family::All),
            ("d", 1, Family::All),
            ("a", 9, Family::All),
            ("c", 3, Family::All),
        ]);
        let focus = link_chain(&mut registry, MenuContext::MainMenu);
        assert_eq!(focus, registry.find("a"));

        let ids = registry.ids(MenuContext::MainMenu).to_vec();
        let lowest = *ids.last().unwrap();
        let mut visited = HashSet::from([lowest]);
        let mut current = lowest;
        for _ in 0..ids.len() - 1 {
            current = step(&registry, current, NavDirection::Up).expect("chain continues");
            assert!(visited.insert(current), "cycle in navigation chain");
        }

        assert_eq!(Some(current), registry.find("a"));
        assert_eq!(visited.len(), ids.len());
        assert_eq!(step(&registry, current, NavDirection::Up), None);
        assert_eq!(step(&registry, lowest, NavDirection::Down), None);
    }

    #[test]
    fn test_down_links_mirror_up_links() {
        let mut registry = registry_with(&[("x", 2, Family::All), ("y", 1, Family::All)]);
        link_chain(&mut registry, MenuContext::InGame);
        let x = registry.find("x").unwrap();
        let y = registry.find("y").unwrap();

        assert_eq!(registry.get(x).unwrap().nav_down(), Some(y));
        assert_eq!(registry.get(y).unwrap().nav_up(), Some(x));
        assert_eq!(registry.get(x).unwrap().nav_up(), None);
        assert_eq!(registry.get(y).unwrap().nav_down(), None);
    }

    #[test]
    fn test_relinking_drops_links_from_other_context() {
        let mut registry = registry_with(&[
            ("menu_top", 5, Family::MainMenu),
            ("shared", 3, Family::All),
            ("game_low", 1, Family::InGame),
        ]);
        link_chain(&mut registry, MenuContext::MainMenu);
        link_chain(&mut registry, MenuContext::InGame);

        let menu_top = registry.find("menu_top").unwrap();
        let shared = registry.find("shared").unwrap();
        assert_eq!(registry.get(menu_top).unwrap().nav_down(), None);
        assert_eq!(registry.get(shared).unwrap().nav_up(), None);
        assert_eq!(
            registry.get(shared).unwrap().nav_down(),
            registry.find("game_low")
        );
    }

    #[test]
    fn test_single_and_empty_lists() {
        let mut registry = registry_with(&[("only", 1, Family::MainMenu)]);
        let only = link_chain(&mut registry, MenuContext::MainMenu).unwrap();
        assert_eq!(step(&registry, only, NavDirection::Up), None);
        assert_eq!(step(&registry, only, NavDirection::Down), None);
        assert_eq!(link_chain(&mut registry, MenuContext::InGame), None);
    }

    #[test]
    fn test_step_skips_hidden_targets() {
        let mut registry = registry_with(&[("top", 2, Family::All), ("low", 1, Family::All)]);
        link_chain(&mut registry, MenuContext::MainMenu);
        let top = registry.find("top").unwrap();
        let low = registry.find("low").unwrap();
        registry.get_mut(top).unwrap().set_visible(false);

        assert_eq!(step(&registry, low, NavDirection::Up), None);
    }
}

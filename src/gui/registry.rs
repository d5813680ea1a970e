//! Button registry
//!
//! Owns every menu button exactly once and keeps one ordered list of
//! [`ButtonId`]s per [`MenuContext`]. A button of family `all` lives in one
//! arena slot and is referenced from both lists, so removing or rebuilding it
//! drops the widget once no matter how many lists point at it.
//!
//! Lists are kept sorted by descending priority. Equal priorities keep script
//! order, which makes (priority desc, sequence asc) a total order.

use super::button::{ButtonId, ButtonStyle, ButtonWidget};
use crate::config::{ButtonDescriptor, Localization};
use crate::context::MenuContext;
use std::cmp::Reverse;

#[derive(Debug, Default)]
pub struct ButtonRegistry {
    slots: Vec<Option<ButtonWidget>>,
    lists: [Vec<ButtonId>; 2],
    legacy_button: Option<ButtonWidget>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        ButtonRegistry::default()
    }

    /// Drops every menu button. The legacy button is kept.
    pub fn clear(&mut self) {
        for list in &mut self.lists {
            list.clear();
        }
        self.slots.clear();
    }

    /// Replaces all menu buttons with widgets built from `descriptors`
    pub fn rebuild(
        &mut self,
        descriptors: &[ButtonDescriptor],
        style: &ButtonStyle,
        localization: &Localization,
    ) {
        self.clear();

        for descriptor in descriptors {
            let id = ButtonId(self.slots.len());
            self.slots.push(Some(ButtonWidget::from_descriptor(
                descriptor,
                style.clone(),
                localization,
            )));

            for context in MenuContext::ALL {
                if descriptor.family.includes(context) {
                    self.lists[context.index()].push(id);
                }
            }
        }

        for context in MenuContext::ALL {
            self.sort(context);
        }

        log::debug!(
            "rebuilt {} menu buttons ({} main menu, {} in game)",
            self.physical_len(),
            self.ids(MenuContext::MainMenu).len(),
            self.ids(MenuContext::InGame).len()
        );
    }

    /// Sorts a context list by descending priority, then script order
    pub fn sort(&mut self, context: MenuContext) {
        let slots = &self.slots;
        self.lists[context.index()].sort_by_key(|id| {
            let widget = slots[id.0].as_ref();
            (
                Reverse(widget.map(ButtonWidget::priority).unwrap_or(i32::MIN)),
                widget.map(ButtonWidget::sequence).unwrap_or(usize::MAX),
            )
        });
    }

    /// Ids of the buttons listed in `context`, highest priority first
    pub fn ids(&self, context: MenuContext) -> &[ButtonId] {
        &self.lists[context.index()]
    }

    /// Buttons listed in `context`, highest priority first
    pub fn buttons(&self, context: MenuContext) -> impl Iterator<Item = &ButtonWidget> + '_ {
        self.lists[context.index()].iter().filter_map(|id| self.get(*id))
    }

    pub fn get(&self, id: ButtonId) -> Option<&ButtonWidget> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ButtonId) -> Option<&mut ButtonWidget> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Every physical button once, in script order
    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, &ButtonWidget)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|widget| (ButtonId(index), widget)))
    }

    /// Every physical button once, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ButtonWidget> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    pub fn find(&self, name: &str) -> Option<ButtonId> {
        self.iter()
            .find(|(_, widget)| widget.name() == name)
            .map(|(id, _)| id)
    }

    /// Number of live widgets (a button listed twice counts once)
    pub fn physical_len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Destroys one button, unlisting it from every context
    ///
    /// Links from other buttons to it are cleared so nothing dangles.
    pub fn remove(&mut self, id: ButtonId) -> Option<ButtonWidget> {
        let widget = self.slots.get_mut(id.0)?.take()?;

        for list in &mut self.lists {
            list.retain(|listed| *listed != id);
        }
        for other in self.iter_mut() {
            if other.nav_up() == Some(id) {
                other.set_nav_up(None);
            }
            if other.nav_down() == Some(id) {
                other.set_nav_down(None);
            }
        }

        Some(widget)
    }

    /// Applies a new style to every menu button
    pub fn restyle(&mut self, style: &ButtonStyle) {
        for widget in self.iter_mut() {
            widget.set_style(style.clone());
        }
    }

    /// Creates the legacy button on first use, then sets its visibility
    pub fn ensure_legacy_button(
        &mut self,
        create: impl FnOnce() -> ButtonWidget,
        visible: bool,
    ) -> &mut ButtonWidget {
        let button = self.legacy_button.get_or_insert_with(|| {
            log::debug!("creating legacy UI button");
            create()
        });
        button.set_visible(visible);
        button
    }

    pub fn legacy_button(&self) -> Option<&ButtonWidget> {
        self.legacy_button.as_ref()
    }

    pub fn legacy_button_mut(&mut self) -> Option<&mut ButtonWidget> {
        self.legacy_button.as_mut()
    }
}

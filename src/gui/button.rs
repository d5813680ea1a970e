//! Menu button widget
//!
//! A button is a labelled rectangle with an optional description line. It
//! knows its own style, position and interaction state, plus the up/down
//! neighbours the navigation chain links it to. Buttons never own each other:
//! neighbours are [`ButtonId`]s into the registry that owns every widget.

use crate::config::{ButtonDescriptor, Family, Localization, ProportionalScale, Scheme};
use crate::paint::{Painter, Rect, Rgba};
use crate::text::BitmapFont;

/// Handle to a widget slot inside a [`super::ButtonRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub(crate) usize);

impl ButtonId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Interaction state; selects colors and whether the description shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Out,
    /// Has navigation focus
    Over,
    /// Being activated
    Pressed,
}

/// Colors for each interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub background_out: Rgba,
    pub background_over: Rgba,
    pub background_pressed: Rgba,
    pub text_out: Rgba,
    pub text_over: Rgba,
    pub text_pressed: Rgba,
    pub description: Rgba,
}

impl Default for ButtonColors {
    fn default() -> Self {
        ButtonColors {
            background_out: Rgba::TRANSPARENT,
            background_over: Rgba::rgb(255, 255, 255),
            background_pressed: Rgba::rgb(200, 200, 200),
            text_out: Rgba::rgb(255, 255, 255),
            text_over: Rgba::rgb(0, 0, 0),
            text_pressed: Rgba::rgb(0, 0, 0),
            description: Rgba::rgba(0, 0, 0, 180),
        }
    }
}

/// Size, text placement, fonts and colors of a button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub width: i32,
    pub height: i32,
    pub text_offset_x: i32,
    pub text_offset_y: i32,
    pub description_offset_x: i32,
    pub description_offset_y: i32,
    pub text_font: BitmapFont,
    pub description_font: BitmapFont,
    pub colors: ButtonColors,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle::from_scheme(&Scheme::default(), ProportionalScale::identity())
    }
}

impl ButtonStyle {
    /// Reads `Button.*` entries from a scheme
    pub fn from_scheme(scheme: &Scheme, scale: ProportionalScale) -> Self {
        let px = |name: &str, default: f32| scheme.scaled_property(name, default, scale);
        let defaults = ButtonColors::default();

        ButtonStyle {
            width: px("Button.Width", 160.0),
            height: px("Button.Height", 20.0),
            text_offset_x: px("Button.Text.OffsetX", 8.0),
            text_offset_y: px("Button.Text.OffsetY", 6.0),
            description_offset_x: px("Button.Description.OffsetX", 8.0),
            description_offset_y: px("Button.Description.OffsetY", 16.0),
            text_font: scheme.font("Button.Text.Font", 7, scale),
            description_font: scheme.font("Button.Description.Font", 7, scale),
            colors: ButtonColors {
                background_out: scheme.color("Button.Background.Out", defaults.background_out),
                background_over: scheme.color("Button.Background.Over", defaults.background_over),
                background_pressed: scheme
                    .color("Button.Background.Pressed", defaults.background_pressed),
                text_out: scheme.color("Button.Text.Out", defaults.text_out),
                text_over: scheme.color("Button.Text.Over", defaults.text_over),
                text_pressed: scheme.color("Button.Text.Pressed", defaults.text_pressed),
                description: scheme.color("Button.Description", defaults.description),
            },
        }
    }
}

/// A live menu button
#[derive(Debug, Clone)]
pub struct ButtonWidget {
    name: String,
    command: String,
    text: String,
    description: String,
    priority: i32,
    family: Family,
    sequence: usize,
    style: ButtonStyle,
    x: i32,
    y: i32,
    visible: bool,
    state: ButtonState,
    nav_up: Option<ButtonId>,
    nav_down: Option<ButtonId>,
}

impl ButtonWidget {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        text: impl Into<String>,
        description: impl Into<String>,
        style: ButtonStyle,
    ) -> Self {
        ButtonWidget {
            name: name.into(),
            command: command.into(),
            text: text.into(),
            description: description.into(),
            priority: crate::config::menu_script::DEFAULT_PRIORITY,
            family: Family::All,
            sequence: 0,
            style,
            x: 0,
            y: 0,
            visible: false,
            state: ButtonState::Out,
            nav_up: None,
            nav_down: None,
        }
    }

    /// Builds a widget from a script entry, localizing its labels
    pub fn from_descriptor(
        descriptor: &ButtonDescriptor,
        style: ButtonStyle,
        localization: &Localization,
    ) -> Self {
        let mut widget = ButtonWidget::new(
            descriptor.name.clone(),
            descriptor.command.clone(),
            localization.localize(&descriptor.text),
            localization.localize(&descriptor.description),
            style,
        );
        widget.priority = descriptor.priority;
        widget.family = descriptor.family;
        widget.sequence = descriptor.sequence;
        widget
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
    }

    pub fn tall(&self) -> i32 {
        self.style.height
    }

    pub fn wide(&self) -> i32 {
        self.style.width
    }

    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.style.width, self.style.height)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn has_focus(&self) -> bool {
        self.state != ButtonState::Out
    }

    /// Takes navigation focus
    pub fn navigate_to(&mut self) {
        self.state = ButtonState::Over;
    }

    /// Gives up navigation focus
    pub fn navigate_from(&mut self) {
        self.state = ButtonState::Out;
    }

    /// Marks the button as activated
    pub fn press(&mut self) {
        self.state = ButtonState::Pressed;
    }

    pub fn nav_up(&self) -> Option<ButtonId> {
        self.nav_up
    }

    pub fn nav_down(&self) -> Option<ButtonId> {
        self.nav_down
    }

    pub fn set_nav_up(&mut self, target: Option<ButtonId>) {
        self.nav_up = target;
    }

    pub fn set_nav_down(&mut self, target: Option<ButtonId>) {
        self.nav_down = target;
    }

    pub fn clear_navigation(&mut self) {
        self.nav_up = None;
        self.nav_down = None;
    }

    /// Draws the button if visible
    pub fn paint(&self, painter: &mut dyn Painter) {
        if !self.visible {
            return;
        }

        let colors = &self.style.colors;
        let (background, text_color) = match self.state {
            ButtonState::Out => (colors.background_out, colors.text_out),
            ButtonState::Over => (colors.background_over, colors.text_over),
            ButtonState::Pressed => (colors.background_pressed, colors.text_pressed),
        };

        if background.a > 0 {
            painter.fill_rect(self.bounds(), background);
        }

        painter.draw_text(
            &self.text,
            self.x + self.style.text_offset_x,
            self.y + self.style.text_offset_y,
            self.style.text_font,
            text_color,
        );

        // Descriptions only show on the focused button
        if self.has_focus() && !self.description.is_empty() {
            painter.draw_text(
                &self.description,
                self.x + self.style.description_offset_x,
                self.y + self.style.description_offset_y,
                self.style.description_font,
                colors.description,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DrawCommand, DrawList};

    fn descriptor() -> ButtonDescriptor {
        ButtonDescriptor {
            name: "Options".to_string(),
            command: "cmd gamemenucommand openoptionsdialog".to_string(),
            text: "#GameUI_Options".to_string(),
            description: "Change settings".to_string(),
            priority: 4,
            family: Family::MainMenu,
            sequence: 2,
        }
    }

    #[test]
    fn test_from_descriptor_localizes_labels() {
        let mut localization = Localization::new();
        localization.insert("GameUI_Options", "Options");

        let widget = ButtonWidget::from_descriptor(&descriptor(), ButtonStyle::default(), &localization);
        assert_eq!(widget.name(), "Options");
        assert_eq!(widget.text(), "Options");
        assert_eq!(widget.description(), "Change settings");
        assert_eq!(widget.priority(), 4);
        assert_eq!(widget.family(), Family::MainMenu);
        assert_eq!(widget.sequence(), 2);
        assert!(!widget.is_visible());
    }

    #[test]
    fn test_style_from_scheme_scales() {
        let scheme = Scheme::parse(
            r#"{ "properties": { "Button.Width": 100, "Button.Height": 24 },
                 "colors": { "Button.Text.Out": "1 2 3" } }"#,
            "scheme.json",
        )
        .unwrap();
        let style = ButtonStyle::from_scheme(&scheme, ProportionalScale::for_screen_tall(960));
        assert_eq!(style.width, 200);
        assert_eq!(style.height, 48);
        assert_eq!(style.colors.text_out, Rgba::rgb(1, 2, 3));
        assert_eq!(style.colors.background_over, ButtonColors::default().background_over);
    }

    #[test]
    fn test_focus_states() {
        let mut widget = ButtonWidget::new("a", "", "A", "", ButtonStyle::default());
        assert!(!widget.has_focus());
        widget.navigate_to();
        assert_eq!(widget.state(), ButtonState::Over);
        widget.press();
        assert!(widget.has_focus());
        widget.navigate_from();
        assert_eq!(widget.state(), ButtonState::Out);
    }

    #[test]
    fn test_hidden_button_paints_nothing() {
        let widget = ButtonWidget::new("a", "", "A", "", ButtonStyle::default());
        let mut list = DrawList::new();
        widget.paint(&mut list);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_description_only_when_focused() {
        let mut widget = ButtonWidget::new("a", "", "Play", "Start a game", ButtonStyle::default());
        widget.set_visible(true);
        widget.set_pos(10, 20);

        let mut list = DrawList::new();
        widget.paint(&mut list);
        // Out state: transparent background is skipped, label only
        assert_eq!(list.texts(), vec!["Play"]);

        widget.navigate_to();
        list.clear();
        widget.paint(&mut list);
        assert_eq!(list.texts(), vec!["Play", "Start a game"]);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::Rect { rect, .. } if rect == Rect::new(10, 20, 160, 20)
        ));
    }
}

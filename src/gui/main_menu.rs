//! The gamepad main menu panel
//!
//! Ties the config, registry, layout, navigation and routing modules together
//! behind the callbacks a host panel tree delivers: scheme apply, think,
//! paint, focus, menu-state change, key press/release and command.
//!
//! # Example
//!
//! ```ignore
//! let fs = SearchPathFileSystem::new(["assets"]);
//! let mut panel = MainMenuPanel::new(host, Box::new(fs), MenuPaths::default());
//! panel.apply_scheme_settings(1280, 720);
//! panel.on_set_focus();
//!
//! // Every frame
//! panel.on_think();
//! panel.paint(&mut painter);
//!
//! // On input
//! panel.on_key_code_pressed(KeyCode::new(ButtonCode::XButtonDown), &mut base);
//! ```

use super::button::{ButtonId, ButtonStyle, ButtonWidget};
use super::gradient::{Gradient, GradientHelper, GradientSide};
use super::layout::{ButtonStack, LogoBlock, LogoPlacement, place_legacy_button};
use super::navigation::{self, NavDirection};
use super::registry::ButtonRegistry;
use super::router::{self, CommandRoute, KeyRoute};
use crate::config::{
    FileSystem, Localization, MenuPaths, MenuScript, ModTitles, ProportionalScale, Scheme,
};
use crate::context::MenuContext;
use crate::host::{BaseHandler, CONSOLE_PARM, EngineHost};
use crate::input::{KeyCode, MenuAction, menu_action};
use crate::paint::{Painter, Rgba};
use crate::text::BitmapFont;

/// Panel size used until the host reports its parent
pub const DEFAULT_PANEL_SIZE: (i32, i32) = (640, 480);

/// Internal name of the legacy UI button
pub const LEGACY_BUTTON_NAME: &str = "SwitchToOldUI";
pub const LEGACY_BUTTON_COMMAND: &str = "cmd gamemenucommand openconsole";
pub const LEGACY_BUTTON_TEXT: &str = "#GameUI_Console";

/// Left gradient while the menu is up
const MENU_GRADIENT: Gradient = Gradient::new(1.0, 0.666);

/// Scheme layout numbers, already scaled to pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelMetrics {
    buttons_offset_x: i32,
    /// Indexed by [`MenuContext::index`]
    buttons_offset_y: [i32; 2],
    buttons_space: i32,
    logo_offset_x: i32,
    logo_offset_y: [i32; 2],
}

impl PanelMetrics {
    fn from_scheme(scheme: &Scheme, scale: ProportionalScale) -> Self {
        let px = |name: &str, default: f32| scheme.scaled_property(name, default, scale);

        PanelMetrics {
            buttons_offset_x: px("Buttons.OffsetX", 52.0),
            buttons_offset_y: [
                px("Buttons.OffsetY.Menu", 124.0),
                px("Buttons.OffsetY.InGame", 124.0),
            ],
            buttons_space: px("Buttons.Space", 0.0),
            logo_offset_x: px("Logo.OffsetX", 52.0),
            logo_offset_y: [
                px("Logo.OffsetY.Menu", 260.0),
                px("Logo.OffsetY.InGame", 260.0),
            ],
        }
    }
}

#[derive(Debug, Clone)]
struct LogoState {
    titles: ModTitles,
    /// Image resource; replaces the titles when set
    image: Option<String>,
    font: BitmapFont,
    color: Rgba,
}

impl LogoState {
    fn apply_scheme(&mut self, scheme: &Scheme, scale: ProportionalScale) {
        let image = scheme.resource_string("Logo.Image");
        self.image = (!image.is_empty()).then(|| image.to_string());
        self.font = scheme.font("Logo.Font", 42, scale);
        self.color = scheme.color("Logo", Rgba::WHITE);
    }
}

/// The main menu overlay
pub struct MainMenuPanel<H: EngineHost> {
    host: H,
    fs: Box<dyn FileSystem>,
    paths: MenuPaths,
    scheme: Scheme,
    legacy_scheme: Scheme,
    localization: Localization,
    registry: ButtonRegistry,
    logo: LogoState,
    logo_placement: LogoPlacement,
    gradients: GradientHelper,
    scale: ProportionalScale,
    metrics: PanelMetrics,
    wide: i32,
    tall: i32,
    focus: Option<ButtonId>,
}

impl<H: EngineHost> MainMenuPanel<H> {
    /// Loads every menu resource and builds the buttons
    ///
    /// Missing or broken resources fall back to defaults; construction
    /// cannot fail.
    pub fn new(host: H, fs: Box<dyn FileSystem>, paths: MenuPaths) -> Self {
        let scheme = Scheme::load_or_default(fs.as_ref(), &paths.scheme);
        let legacy_scheme = Scheme::load_or_default(fs.as_ref(), &paths.legacy_button_scheme);
        let localization = Localization::load_or_default(fs.as_ref(), &paths.localization);
        let titles = ModTitles::load_or_default(fs.as_ref(), &paths.mod_info);
        let scale = ProportionalScale::identity();

        let mut logo = LogoState {
            titles,
            image: None,
            font: BitmapFont::default(),
            color: Rgba::WHITE,
        };
        logo.apply_scheme(&scheme, scale);

        let (wide, tall) = DEFAULT_PANEL_SIZE;
        let mut panel = MainMenuPanel {
            host,
            fs,
            paths,
            metrics: PanelMetrics::from_scheme(&scheme, scale),
            scheme,
            legacy_scheme,
            localization,
            registry: ButtonRegistry::new(),
            logo,
            logo_placement: LogoPlacement::Text {
                title: (0, 0),
                subtitle: (0, 0),
            },
            gradients: GradientHelper::new(),
            scale,
            wide,
            tall,
            focus: None,
        };

        panel.reload_buttons();
        panel.layout();
        panel
    }

    /// Throws away every menu button and rebuilds them from the script
    pub fn reload_buttons(&mut self) {
        let script = MenuScript::load_or_default(self.fs.as_ref(), &self.paths.menu_script);
        let style = ButtonStyle::from_scheme(&self.scheme, self.scale);

        self.focus = None;
        self.registry.rebuild(&script.buttons, &style, &self.localization);
        self.ensure_legacy_button();
        self.resync();
    }

    fn ensure_legacy_button(&mut self) {
        let visible = self.host.command_line().find_parm(CONSOLE_PARM);
        let text = self.localization.localize(LEGACY_BUTTON_TEXT);
        let style = ButtonStyle::from_scheme(&self.legacy_scheme, self.scale);

        self.registry.ensure_legacy_button(
            move || {
                let mut button =
                    ButtonWidget::new(LEGACY_BUTTON_NAME, LEGACY_BUTTON_COMMAND, text, "", style);
                button.set_priority(0);
                button
            },
            visible,
        );
    }

    /// Resizes the panel to its parent and re-reads every scheme value
    pub fn apply_scheme_settings(&mut self, parent_wide: i32, parent_tall: i32) {
        self.wide = parent_wide;
        self.tall = parent_tall;
        self.scale = ProportionalScale::for_screen_tall(parent_tall);

        self.registry
            .restyle(&ButtonStyle::from_scheme(&self.scheme, self.scale));
        let legacy_style = ButtonStyle::from_scheme(&self.legacy_scheme, self.scale);
        if let Some(legacy) = self.registry.legacy_button_mut() {
            legacy.set_style(legacy_style);
        }

        self.logo.apply_scheme(&self.scheme, self.scale);
        self.metrics = PanelMetrics::from_scheme(&self.scheme, self.scale);

        log::debug!(
            "main menu scheme applied at {}x{} (scale {:.3})",
            parent_wide,
            parent_tall,
            self.scale.factor()
        );
    }

    /// Per-frame update; lays everything out again
    pub fn on_think(&mut self) {
        self.layout();
    }

    /// Positions the active buttons, the logo and the legacy button
    pub fn layout(&mut self) {
        let context = self.current_context();
        let metrics = self.metrics;

        let column: Vec<(ButtonId, i32)> = self
            .registry
            .ids(context)
            .iter()
            .filter_map(|id| self.registry.get(*id).map(|widget| (*id, widget.tall())))
            .collect();
        let heights: Vec<i32> = column.iter().map(|(_, tall)| *tall).collect();

        let stack = ButtonStack {
            x: metrics.buttons_offset_x,
            base_offset: metrics.buttons_offset_y[context.index()],
            spacing: metrics.buttons_space,
            panel_tall: self.tall,
        };
        for ((id, _), (x, y)) in column.iter().zip(stack.place(&heights)) {
            if let Some(widget) = self.registry.get_mut(*id) {
                widget.set_pos(x, y);
            }
        }

        let logo = LogoBlock {
            x: metrics.logo_offset_x,
            offset_y: metrics.logo_offset_y[context.index()],
            panel_tall: self.tall,
            font: self.logo.font,
        };
        self.logo_placement = logo.place(self.logo.titles.lines(), self.logo.image.is_some());

        let parent_tall = self.tall;
        if let Some(legacy) = self.registry.legacy_button_mut() {
            let (x, y) = place_legacy_button(parent_tall, legacy.tall());
            legacy.set_pos(x, y);
        }
    }

    /// Draws gradients, buttons and the logo
    pub fn paint(&self, painter: &mut dyn Painter) {
        self.gradients.paint(painter, self.wide, self.tall, self.host.time());

        for (_, widget) in self.registry.iter() {
            widget.paint(painter);
        }
        if let Some(legacy) = self.registry.legacy_button() {
            legacy.paint(painter);
        }

        self.paint_logo(painter);
    }

    fn paint_logo(&self, painter: &mut dyn Painter) {
        match (self.logo_placement, &self.logo.image) {
            (LogoPlacement::Image(rect), Some(image)) => {
                painter.draw_image(image, rect, Rgba::WHITE);
            }
            (LogoPlacement::Text { title, subtitle }, _) => {
                let [first, second] = self.logo.titles.lines();
                for (text, (x, y)) in [(first, title), (second, subtitle)] {
                    if !text.is_empty() {
                        painter.draw_text(text, x, y, self.logo.font, self.logo.color);
                    }
                }
            }
            // Image removed since the last layout
            (LogoPlacement::Image(_), None) => {}
        }
    }

    /// The panel gained focus
    pub fn on_set_focus(&mut self) {
        self.update_gradients();
        self.resync();
    }

    /// The host switched between the front-end and the pause menu
    pub fn on_menu_state_changed(&mut self) {
        self.update_gradients();
        self.resync();
    }

    /// Fades every side out, then brings the left gradient in
    pub fn update_gradients(&mut self) {
        let time = self.host.time();
        self.gradients.reset_targets(time);
        self.gradients
            .set_target_gradient(GradientSide::Left, MENU_GRADIENT, time);
    }

    /// Hides everything, relinks the active list and focuses its top button
    pub fn resync(&mut self) {
        for widget in self.registry.iter_mut() {
            widget.navigate_from();
            widget.set_visible(false);
        }

        let context = self.current_context();
        self.registry.sort(context);
        self.focus = navigation::link_chain(&mut self.registry, context);

        let ids = self.registry.ids(context).to_vec();
        for id in ids {
            if let Some(widget) = self.registry.get_mut(id) {
                widget.set_visible(true);
            }
        }

        if let Some(widget) = self.focus.and_then(|id| self.registry.get_mut(id)) {
            widget.navigate_to();
        }

        log::trace!(
            "menu resynced for {:?}: {} buttons",
            context,
            self.registry.ids(context).len()
        );
    }

    /// Routes a button command to the engine or the base handler
    pub fn on_command(&mut self, command: &str, base: &mut dyn BaseHandler) {
        match router::route_command(command) {
            CommandRoute::Client(console) => {
                log::debug!("menu command: {}", console);
                self.host.client_cmd_unrestricted(console);
            }
            CommandRoute::Nothing => {}
            CommandRoute::Fallback(other) => base.on_command(other),
        }
    }

    /// Moves focus or activates the focused button
    pub fn on_key_code_pressed(&mut self, code: KeyCode, base: &mut dyn BaseHandler) {
        match menu_action(code.base_button_code()) {
            Some(MenuAction::NavigateUp) => self.navigate(NavDirection::Up),
            Some(MenuAction::NavigateDown) => self.navigate(NavDirection::Down),
            Some(MenuAction::Activate) => {
                if let Some(id) = self.focus {
                    self.activate(id, base);
                }
            }
            Some(MenuAction::Cancel) | None => base.on_key_code_pressed(code),
        }
    }

    /// Handles the cancel shortcut back into the level
    pub fn on_key_code_released(&mut self, code: KeyCode, base: &mut dyn BaseHandler) {
        match router::route_key_release(code.base_button_code(), self.host.is_in_level()) {
            KeyRoute::ResumeGame => self.host.client_cmd_unrestricted(router::RESUME_COMMAND),
            KeyRoute::Fallback => base.on_key_code_released(code),
        }
    }

    /// Focuses the active button under the cursor, if any
    pub fn on_cursor_moved(&mut self, x: i32, y: i32) {
        if let Some(id) = self.button_at(x, y) {
            self.move_focus(id);
        }
    }

    /// Activates whatever button is under the cursor
    ///
    /// Returns false when the click hit nothing.
    pub fn on_mouse_released(&mut self, x: i32, y: i32, base: &mut dyn BaseHandler) -> bool {
        if let Some(id) = self.button_at(x, y) {
            self.move_focus(id);
            self.activate(id, base);
            return true;
        }

        let legacy_command = self
            .registry
            .legacy_button_mut()
            .filter(|legacy| legacy.is_visible() && legacy.bounds().contains(x, y))
            .map(|legacy| {
                legacy.press();
                legacy.command().to_string()
            });
        match legacy_command {
            Some(command) => {
                self.on_command(&command, base);
                true
            }
            None => false,
        }
    }

    /// Visible button of the active list containing `(x, y)`
    pub fn button_at(&self, x: i32, y: i32) -> Option<ButtonId> {
        self.registry
            .ids(self.current_context())
            .iter()
            .copied()
            .find(|id| {
                self.registry
                    .get(*id)
                    .is_some_and(|widget| widget.is_visible() && widget.bounds().contains(x, y))
            })
    }

    fn navigate(&mut self, direction: NavDirection) {
        let Some(from) = self.focus else {
            return;
        };
        if let Some(next) = navigation::step(&self.registry, from, direction) {
            self.move_focus(next);
        }
    }

    fn move_focus(&mut self, to: ButtonId) {
        if self.focus == Some(to) {
            return;
        }
        if let Some(widget) = self.focus.and_then(|id| self.registry.get_mut(id)) {
            widget.navigate_from();
        }
        if let Some(widget) = self.registry.get_mut(to) {
            widget.navigate_to();
        }
        self.focus = Some(to);
    }

    fn activate(&mut self, id: ButtonId, base: &mut dyn BaseHandler) {
        let Some(widget) = self.registry.get_mut(id) else {
            return;
        };
        widget.press();
        let command = widget.command().to_string();
        self.on_command(&command, base);
    }

    /// The context selected by the host's level state
    pub fn current_context(&self) -> MenuContext {
        MenuContext::from_in_level(self.host.is_in_level())
    }

    /// Buttons of the active context, highest priority first
    pub fn current_buttons(&self) -> impl Iterator<Item = &ButtonWidget> + '_ {
        self.registry.buttons(self.current_context())
    }

    pub fn focused(&self) -> Option<ButtonId> {
        self.focus
    }

    pub fn registry(&self) -> &ButtonRegistry {
        &self.registry
    }

    pub fn gradients(&self) -> &GradientHelper {
        &self.gradients
    }

    pub fn logo_placement(&self) -> LogoPlacement {
        self.logo_placement
    }

    pub fn size(&self) -> (i32, i32) {
        (self.wide, self.tall)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

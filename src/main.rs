//! Main menu demo
//!
//! Runs the gamepad main menu in an SDL2 window against a tiny stand-in
//! engine. Console commands the menu issues are logged; a few of them
//! (`map`, `disconnect`, `gamemenucommand quit`) change the demo's state.
//!
//! Controls: arrows / W S / d-pad to move, Enter / Space / A to activate,
//! Backspace / B to resume while "in a level", Tab to toggle the level, Escape
//! to quit. Launch with `-console` to show the legacy console button and
//! `-game <dir>` to layer a mod directory over `assets/`.

use gamepad_menu::config::{MenuPaths, SearchPathFileSystem};
use gamepad_menu::host::{BaseHandler, CommandLine, EngineHost};
use gamepad_menu::input::{ButtonCode, KeyCode};
use gamepad_menu::sdl_painter::{ImageCache, SdlPainter};
use gamepad_menu::MainMenuPanel;
use sdl2::controller::{Button, GameController};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;
const ASSET_ROOT: &str = "assets";
const APP_NAME: &str = "gamepad_menu";

/// Stand-in engine: a clock, a level flag and a console log
struct DemoHost {
    started: Instant,
    in_level: bool,
    state_changed: bool,
    quit_requested: bool,
    command_line: CommandLine,
}

impl DemoHost {
    fn new(command_line: CommandLine) -> Self {
        DemoHost {
            started: Instant::now(),
            in_level: false,
            state_changed: false,
            quit_requested: false,
            command_line,
        }
    }

    fn set_in_level(&mut self, in_level: bool) {
        if self.in_level != in_level {
            log::info!("{}", if in_level { "level loaded" } else { "level unloaded" });
            self.in_level = in_level;
            self.state_changed = true;
        }
    }

    /// True once after every level change
    fn take_state_change(&mut self) -> bool {
        std::mem::take(&mut self.state_changed)
    }
}

impl EngineHost for DemoHost {
    fn time(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    fn is_in_level(&self) -> bool {
        self.in_level
    }

    fn client_cmd_unrestricted(&mut self, command: &str) {
        log::info!("] {}", command);

        let mut words = command.split_whitespace();
        match (words.next(), words.next()) {
            (Some("gamemenucommand"), Some("quit" | "quitnoconfirm")) => self.quit_requested = true,
            (Some("gamemenucommand"), Some("opennewgamedialog")) | (Some("map"), Some(_)) => {
                self.set_in_level(true)
            }
            (Some("disconnect"), _) => self.set_in_level(false),
            _ => {}
        }
    }

    fn command_line(&self) -> &CommandLine {
        &self.command_line
    }
}

/// Receives whatever the menu passes on
#[derive(Default)]
struct DemoBase {
    quit: bool,
}

impl BaseHandler for DemoBase {
    fn on_command(&mut self, command: &str) {
        log::info!("unhandled menu command: {}", command);
    }

    fn on_key_code_pressed(&mut self, code: KeyCode) {
        if code.base_button_code() == ButtonCode::KeyEscape {
            self.quit = true;
        }
    }

    fn on_key_code_released(&mut self, code: KeyCode) {
        log::trace!("unhandled key release {:?}", code);
    }
}

fn keyboard_button(keycode: Keycode) -> Option<ButtonCode> {
    match keycode {
        Keycode::Up | Keycode::W => Some(ButtonCode::KeyUp),
        Keycode::Down | Keycode::S => Some(ButtonCode::KeyDown),
        Keycode::Return | Keycode::Space => Some(ButtonCode::KeyEnter),
        Keycode::Escape => Some(ButtonCode::KeyEscape),
        Keycode::Backspace => Some(ButtonCode::XButtonB),
        _ => None,
    }
}

fn controller_button(button: Button) -> Option<ButtonCode> {
    match button {
        Button::A => Some(ButtonCode::XButtonA),
        Button::B => Some(ButtonCode::XButtonB),
        Button::X => Some(ButtonCode::XButtonX),
        Button::Y => Some(ButtonCode::XButtonY),
        Button::Start => Some(ButtonCode::XButtonStart),
        Button::Back => Some(ButtonCode::XButtonBack),
        Button::DPadUp => Some(ButtonCode::XButtonUp),
        Button::DPadDown => Some(ButtonCode::XButtonDown),
        Button::DPadLeft => Some(ButtonCode::XButtonLeft),
        Button::DPadRight => Some(ButtonCode::XButtonRight),
        _ => None,
    }
}

fn controller_key(which: u32, button: Button) -> Option<KeyCode> {
    let controller = u8::try_from(which).unwrap_or(u8::MAX);
    controller_button(button).map(|code| KeyCode::from_controller(code, controller))
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command_line = CommandLine::from_env();
    let mut roots = Vec::new();
    if let Some(game) = command_line.parm_value("-game") {
        roots.push(PathBuf::from(game));
    }
    roots.push(PathBuf::from(ASSET_ROOT));
    let search_paths = SearchPathFileSystem::new(roots).with_user_overrides(APP_NAME);
    log::info!("resource search paths: {:?}", search_paths.roots());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let controller_subsystem = sdl_context.game_controller()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Gamepad Main Menu", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut images = ImageCache::new(&texture_creator, search_paths.clone());
    let mut event_pump = sdl_context.event_pump()?;

    // Opened controllers stop reporting events once dropped
    let mut controllers: Vec<GameController> = Vec::new();

    let mut panel = MainMenuPanel::new(
        DemoHost::new(command_line),
        Box::new(search_paths),
        MenuPaths::default(),
    );
    panel.apply_scheme_settings(WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32);
    panel.on_set_focus();

    let mut base = DemoBase::default();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => panel.apply_scheme_settings(width, height),
                Event::KeyDown {
                    keycode: Some(Keycode::Tab),
                    repeat: false,
                    ..
                } => {
                    let in_level = panel.host().is_in_level();
                    panel.host_mut().set_in_level(!in_level);
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(button) = keyboard_button(keycode) {
                        panel.on_key_code_pressed(KeyCode::new(button), &mut base);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(button) = keyboard_button(keycode) {
                        panel.on_key_code_released(KeyCode::new(button), &mut base);
                    }
                }
                Event::ControllerDeviceAdded { which, .. } => match controller_subsystem.open(which) {
                    Ok(controller) => {
                        log::info!("controller connected: {}", controller.name());
                        controllers.push(controller);
                    }
                    Err(e) => log::warn!("could not open controller {}: {}", which, e),
                },
                Event::ControllerButtonDown { which, button, .. } => {
                    if let Some(code) = controller_key(which, button) {
                        panel.on_key_code_pressed(code, &mut base);
                    }
                }
                Event::ControllerButtonUp { which, button, .. } => {
                    if let Some(code) = controller_key(which, button) {
                        panel.on_key_code_released(code, &mut base);
                    }
                }
                Event::MouseMotion { x, y, .. } => panel.on_cursor_moved(x, y),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    panel.on_mouse_released(x, y, &mut base);
                }
                _ => {}
            }
        }

        if panel.host_mut().take_state_change() {
            panel.on_menu_state_changed();
        }
        if base.quit || panel.host().quit_requested {
            break 'running;
        }

        panel.on_think();

        let background = if panel.host().is_in_level() {
            Color::RGB(62, 74, 56)
        } else {
            Color::RGB(24, 26, 32)
        };
        canvas.set_draw_color(background);
        canvas.clear();

        let mut painter = SdlPainter::new(&mut canvas, &mut images);
        panel.paint(&mut painter);
        painter.finish()?;

        canvas.present();

        // ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    log::info!("shutting down");
    Ok(())
}

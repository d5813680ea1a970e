//! Gamepad-navigable main menu overlay
//!
//! A data-driven menu for a game client: buttons come from a JSON script,
//! layout numbers and colors from a scheme, and every engine interaction goes
//! through the [`host::EngineHost`] trait. The crate has no renderer of its
//! own; drawing goes through [`paint::Painter`], with an SDL2 implementation
//! in `sdl_painter` behind the `sdl` feature.

pub mod config;
pub mod context;
pub mod gui;
pub mod host;
pub mod input;
pub mod paint;
#[cfg(feature = "sdl")]
pub mod sdl_painter;
pub mod text;

pub use context::MenuContext;
pub use gui::MainMenuPanel;
pub use host::{BaseHandler, CommandLine, EngineHost};

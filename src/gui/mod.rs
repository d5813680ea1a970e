//! Gamepad main menu GUI
//!
//! Screen-space widgets for the main menu overlay. Everything here draws
//! through [`crate::paint::Painter`] and reaches the engine only through
//! [`crate::host::EngineHost`].
//!
//! # Architecture
//!
//! - [`ButtonRegistry`] owns every [`ButtonWidget`] once and lists them per
//!   menu context
//! - [`layout`] computes positions; it never mutates anything itself
//! - [`navigation`] links the active list into an up/down chain
//! - [`router`] decides where commands and key releases go
//! - [`GradientHelper`] animates the screen-edge gradients
//! - [`MainMenuPanel`] drives all of the above from host callbacks

pub mod button;
pub mod gradient;
pub mod layout;
pub mod main_menu;
pub mod navigation;
pub mod registry;
pub mod router;

pub use button::{ButtonColors, ButtonId, ButtonState, ButtonStyle, ButtonWidget};
pub use gradient::{Gradient, GradientHelper, GradientSide};
pub use layout::LogoPlacement;
pub use main_menu::MainMenuPanel;
pub use navigation::NavDirection;
pub use registry::ButtonRegistry;

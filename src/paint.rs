//! Immediate-mode drawing surface
//!
//! The menu never talks to a renderer directly. Everything it draws goes
//! through the [`Painter`] trait, so the same paint pass can target SDL2
//! (see `sdl_painter`, behind the `sdl` feature) or a [`DrawList`] that simply
//! records commands for tests and headless hosts.

use crate::text::BitmapFont;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgba(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba { a, ..self }
    }

    /// Parses scheme color text: `"r g b"` or `"r g b a"`.
    ///
    /// Returns `None` for anything else, including out-of-range components.
    pub fn parse(text: &str) -> Option<Self> {
        let parts = text
            .split_whitespace()
            .map(|part| part.parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;

        match parts.as_slice() {
            [r, g, b] => Some(Rgba::rgb(*r, *g, *b)),
            [r, g, b, a] => Some(Rgba::rgba(*r, *g, *b, *a)),
            _ => None,
        }
    }
}

/// Axis-aligned rectangle in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Point-in-rectangle test; right and bottom edges are exclusive
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Which edge of a fade rectangle carries the `from` color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

/// Drawing operations the menu needs from a renderer
pub trait Painter {
    /// Fills a solid rectangle
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fills a rectangle blending from `from` at the leading edge to `to`
    fn fill_fade(&mut self, rect: Rect, from: Rgba, to: Rgba, direction: FadeDirection);

    /// Draws a single line of text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: BitmapFont, color: Rgba);

    /// Draws a named image resource stretched over `rect`
    fn draw_image(&mut self, image: &str, rect: Rect, tint: Rgba);
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Rgba,
    },
    Fade {
        rect: Rect,
        from: Rgba,
        to: Rgba,
        direction: FadeDirection,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        font: BitmapFont,
        color: Rgba,
    },
    Image {
        image: String,
        rect: Rect,
        tint: Rgba,
    },
}

/// Painter that records commands instead of rendering them
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        DrawList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings drawn so far, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All images drawn so far with their destination rectangles
    pub fn images(&self) -> Vec<(&str, Rect)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Image { image, rect, .. } => Some((image.as_str(), *rect)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_fade(&mut self, rect: Rect, from: Rgba, to: Rgba, direction: FadeDirection) {
        self.commands.push(DrawCommand::Fade {
            rect,
            from,
            to,
            direction,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: BitmapFont, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font,
            color,
        });
    }

    fn draw_image(&mut self, image: &str, rect: Rect, tint: Rgba) {
        self.commands.push(DrawCommand::Image {
            image: image.to_string(),
            rect,
            tint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_with_and_without_alpha() {
        assert_eq!(Rgba::parse("255 128 0"), Some(Rgba::rgb(255, 128, 0)));
        assert_eq!(Rgba::parse(" 10 20 30 40 "), Some(Rgba::rgba(10, 20, 30, 40)));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert_eq!(Rgba::parse(""), None);
        assert_eq!(Rgba::parse("255 255"), None);
        assert_eq!(Rgba::parse("256 0 0"), None);
        assert_eq!(Rgba::parse("red green blue"), None);
    }

    #[test]
    fn test_rect_contains_excludes_far_edges() {
        let rect = Rect::new(10, 20, 5, 5);
        assert!(rect.contains(10, 20));
        assert!(rect.contains(14, 24));
        assert!(!rect.contains(15, 22));
        assert!(!rect.contains(12, 25));
        assert!(!Rect::new(0, 0, 0, 10).contains(0, 0));
    }

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 10, 10), Rgba::BLACK);
        list.draw_text("PLAY", 4, 8, BitmapFont::new(2), Rgba::WHITE);
        list.draw_image("logo", Rect::new(1, 2, 3, 4), Rgba::WHITE);

        assert_eq!(list.commands().len(), 3);
        assert_eq!(list.texts(), vec!["PLAY"]);
        assert_eq!(list.images(), vec![("logo", Rect::new(1, 2, 3, 4))]);

        list.clear();
        assert!(list.commands().is_empty());
    }
}

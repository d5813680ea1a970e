//! SDL2 rendering backend
//!
//! Implements [`Painter`] on top of an SDL2 canvas. Text is rasterized from
//! the bitmap glyph table one filled square per lit font pixel, fades are
//! drawn as one-pixel strips, and images are loaded lazily as PNG textures
//! through the same search paths as the menu's JSON resources.
//!
//! SDL reports failures per call while the [`Painter`] trait is infallible,
//! so the painter keeps the first error of a frame and hands it back from
//! [`SdlPainter::finish`].

use crate::config::SearchPathFileSystem;
use crate::paint::{FadeDirection, Painter, Rect, Rgba};
use crate::text::{BitmapFont, GLYPH_WIDTH, glyph_rows};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::path::Path;

fn sdl_color(color: Rgba) -> Color {
    Color::RGBA(color.r, color.g, color.b, color.a)
}

fn sdl_rect(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x, rect.y, rect.w.max(0) as u32, rect.h.max(0) as u32)
}

fn lerp_color(from: Rgba, to: Rgba, t: f32) -> Rgba {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgba::rgba(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
        channel(from.a, to.a),
    )
}

/// Lazily loaded image textures keyed by resource name
///
/// Names without an extension get `.png` appended. A name that fails to load
/// is remembered as missing so it is only reported once.
pub struct ImageCache<'t> {
    creator: &'t TextureCreator<WindowContext>,
    search_paths: SearchPathFileSystem,
    textures: HashMap<String, Option<Texture<'t>>>,
}

impl<'t> ImageCache<'t> {
    pub fn new(creator: &'t TextureCreator<WindowContext>, search_paths: SearchPathFileSystem) -> Self {
        ImageCache {
            creator,
            search_paths,
            textures: HashMap::new(),
        }
    }

    fn load(&self, name: &str) -> Option<Texture<'t>> {
        let file = if Path::new(name).extension().is_some() {
            name.to_string()
        } else {
            format!("{}.png", name)
        };

        let Some(path) = self.search_paths.resolve(&file) else {
            log::warn!("image {} not found", file);
            return None;
        };

        match self.creator.load_texture(&path) {
            Ok(texture) => {
                log::debug!("loaded image {}", path.display());
                Some(texture)
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", path.display(), e);
                None
            }
        }
    }

    /// The texture for `name`, loading it on first use
    pub fn texture(&mut self, name: &str) -> Option<&mut Texture<'t>> {
        if !self.textures.contains_key(name) {
            let loaded = self.load(name);
            self.textures.insert(name.to_string(), loaded);
        }
        self.textures.get_mut(name).and_then(Option::as_mut)
    }
}

/// One frame's worth of drawing onto an SDL canvas
pub struct SdlPainter<'a, 't> {
    canvas: &'a mut Canvas<Window>,
    images: &'a mut ImageCache<'t>,
    error: Option<String>,
}

impl<'a, 't> SdlPainter<'a, 't> {
    pub fn new(canvas: &'a mut Canvas<Window>, images: &'a mut ImageCache<'t>) -> Self {
        canvas.set_blend_mode(BlendMode::Blend);
        SdlPainter {
            canvas,
            images,
            error: None,
        }
    }

    /// Ends the frame, returning the first SDL error hit while drawing
    pub fn finish(self) -> Result<(), String> {
        self.canvas.set_blend_mode(BlendMode::None);
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn record(&mut self, result: Result<(), String>) {
        if let Err(error) = result {
            if self.error.is_none() {
                log::warn!("draw failed: {}", error);
                self.error = Some(error);
            }
        }
    }

    fn fill(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() || color.a == 0 {
            return;
        }
        self.canvas.set_draw_color(sdl_color(color));
        let result = self.canvas.fill_rect(sdl_rect(rect));
        self.record(result);
    }
}

impl Painter for SdlPainter<'_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fill(rect, color);
    }

    fn fill_fade(&mut self, rect: Rect, from: Rgba, to: Rgba, direction: FadeDirection) {
        let horizontal = matches!(
            direction,
            FadeDirection::LeftToRight | FadeDirection::RightToLeft
        );
        let length = if horizontal { rect.w } else { rect.h };

        for step in 0..length.max(0) {
            let color = lerp_color(from, to, (step as f32 + 0.5) / length as f32);
            let offset = match direction {
                FadeDirection::LeftToRight | FadeDirection::TopToBottom => step,
                FadeDirection::RightToLeft | FadeDirection::BottomToTop => length - 1 - step,
            };
            let strip = if horizontal {
                Rect::new(rect.x + offset, rect.y, 1, rect.h)
            } else {
                Rect::new(rect.x, rect.y + offset, rect.w, 1)
            };
            self.fill(strip, color);
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: BitmapFont, color: Rgba) {
        if color.a == 0 {
            return;
        }
        let pixel = font.scale() as i32;
        self.canvas.set_draw_color(sdl_color(color));

        for (index, c) in text.chars().enumerate() {
            let char_x = x + index as i32 * font.advance();

            for (row, &bits) in glyph_rows(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let result = self.canvas.fill_rect(sdl2::rect::Rect::new(
                        char_x + col as i32 * pixel,
                        y + row as i32 * pixel,
                        pixel as u32,
                        pixel as u32,
                    ));
                    self.record(result);
                }
            }
        }
    }

    fn draw_image(&mut self, image: &str, rect: Rect, tint: Rgba) {
        if rect.is_empty() {
            return;
        }
        let Some(texture) = self.images.texture(image) else {
            return;
        };
        texture.set_blend_mode(BlendMode::Blend);
        texture.set_color_mod(tint.r, tint.g, tint.b);
        texture.set_alpha_mod(tint.a);

        let result = self.canvas.copy(texture, None, sdl_rect(rect));
        self.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_endpoints() {
        let from = Rgba::rgba(0, 0, 0, 170);
        let to = Rgba::TRANSPARENT;
        assert_eq!(lerp_color(from, to, 0.0), from);
        assert_eq!(lerp_color(from, to, 1.0), to);
        assert_eq!(lerp_color(from, to, 0.5).a, 85);
    }
}

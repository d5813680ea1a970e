//! Pure layout math for the main menu
//!
//! Nothing here touches widgets or the host. The panel feeds in sizes and
//! scheme offsets and writes the results back, so running a layout twice with
//! the same inputs always gives the same coordinates.

use crate::paint::Rect;
use crate::text::BitmapFont;

/// Distance of the legacy button from the parent's bottom-left corner
pub const LEGACY_BUTTON_OFFSET_X: i32 = 20;
pub const LEGACY_BUTTON_OFFSET_Y: i32 = 20;

/// Logo images are this many times wider than they are tall
pub const LOGO_IMAGE_ASPECT: i32 = 3;

/// Inputs for stacking the button column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStack {
    /// Left edge of every button
    pub x: i32,
    /// Gap between the panel bottom and the lowest button
    pub base_offset: i32,
    /// Gap between consecutive buttons
    pub spacing: i32,
    pub panel_tall: i32,
}

impl ButtonStack {
    /// Positions for buttons given highest priority first
    ///
    /// The column grows upwards from the panel bottom starting with the last
    /// (lowest priority) button, so the first button ends up on top.
    pub fn place(&self, heights: &[i32]) -> Vec<(i32, i32)> {
        let mut positions = vec![(0, 0); heights.len()];
        let mut offset = self.base_offset;

        for (index, &height) in heights.iter().enumerate().rev() {
            offset = offset.saturating_add(height);
            positions[index] = (self.x, self.panel_tall.saturating_sub(offset));
            offset = offset.saturating_add(self.spacing);
        }

        positions
    }
}

/// Where the logo goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoPlacement {
    /// Two text lines, each at its top-left corner
    Text {
        title: (i32, i32),
        subtitle: (i32, i32),
    },
    /// A single image rectangle
    Image(Rect),
}

/// Inputs for placing the logo block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoBlock {
    pub x: i32,
    /// Gap between the panel bottom and the bottom of both title lines
    pub offset_y: i32,
    pub panel_tall: i32,
    pub font: BitmapFont,
}

impl LogoBlock {
    /// Places the logo. An image takes precedence over text.
    ///
    /// Both lines are measured first and `top` is the panel height minus the
    /// offset and their combined height. The subtitle is drawn at `top` and
    /// the title one title-height above it. An image starts at `top`, as tall
    /// as the measured title and three times as wide.
    pub fn place(&self, titles: [&str; 2], has_image: bool) -> LogoPlacement {
        let (_, title_tall) = self.font.text_size(titles[0]);
        let (_, subtitle_tall) = self.font.text_size(titles[1]);
        let total = title_tall.saturating_add(subtitle_tall);
        let top = self
            .panel_tall
            .saturating_sub(self.offset_y.saturating_add(total));

        if has_image {
            return LogoPlacement::Image(Rect::new(
                self.x,
                top,
                title_tall.saturating_mul(LOGO_IMAGE_ASPECT),
                title_tall,
            ));
        }

        LogoPlacement::Text {
            title: (self.x, top.saturating_sub(subtitle_tall)),
            subtitle: (self.x, top),
        }
    }
}

/// Legacy button position inside a parent of height `parent_tall`
pub fn place_legacy_button(parent_tall: i32, button_tall: i32) -> (i32, i32) {
    (
        LEGACY_BUTTON_OFFSET_X,
        parent_tall
            .saturating_sub(button_tall)
            .saturating_sub(LEGACY_BUTTON_OFFSET_Y),
    )
}

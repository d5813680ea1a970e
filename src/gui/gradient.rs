//! Animated screen-edge gradients
//!
//! Each screen side has a dark gradient described by how far it reaches
//! (`extent`, fraction of the screen) and how dark it is at the edge
//! (`alpha`). Retargeting a side starts a linear transition from wherever the
//! side currently is, so state changes mid-transition never pop.

use crate::paint::{FadeDirection, Painter, Rect, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientSide {
    Left,
    Right,
    Up,
    Down,
}

impl GradientSide {
    pub const ALL: [GradientSide; 4] = [
        GradientSide::Left,
        GradientSide::Right,
        GradientSide::Up,
        GradientSide::Down,
    ];

    fn index(self) -> usize {
        match self {
            GradientSide::Left => 0,
            GradientSide::Right => 1,
            GradientSide::Up => 2,
            GradientSide::Down => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gradient {
    /// Fraction of the screen covered, 0.0 - 1.0
    pub extent: f32,
    /// Opacity at the screen edge, 0.0 - 1.0
    pub alpha: f32,
}

impl Gradient {
    pub const NONE: Gradient = Gradient {
        extent: 0.0,
        alpha: 0.0,
    };

    pub const fn new(extent: f32, alpha: f32) -> Self {
        Gradient { extent, alpha }
    }

    fn lerp(self, other: Gradient, t: f32) -> Gradient {
        Gradient {
            extent: self.extent + (other.extent - self.extent) * t,
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }

    fn is_visible(&self) -> bool {
        self.extent > 0.0 && self.alpha > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: Gradient,
    to: Gradient,
    start_time: f32,
}

impl Default for Transition {
    fn default() -> Self {
        Transition {
            from: Gradient::NONE,
            to: Gradient::NONE,
            start_time: 0.0,
        }
    }
}

/// Drives the four side gradients over time
#[derive(Debug, Clone)]
pub struct GradientHelper {
    transitions: [Transition; 4],
    transition_time: f32,
}

impl GradientHelper {
    /// Seconds a retarget takes to settle
    pub const DEFAULT_TRANSITION_TIME: f32 = 0.2;

    pub fn new() -> Self {
        GradientHelper::with_transition_time(Self::DEFAULT_TRANSITION_TIME)
    }

    pub fn with_transition_time(transition_time: f32) -> Self {
        GradientHelper {
            transitions: [Transition::default(); 4],
            transition_time: transition_time.max(0.0),
        }
    }

    /// Fades every side out, starting at `time`
    pub fn reset_targets(&mut self, time: f32) {
        for side in GradientSide::ALL {
            self.set_target_gradient(side, Gradient::NONE, time);
        }
    }

    /// Starts a transition of `side` towards `target`
    pub fn set_target_gradient(&mut self, side: GradientSide, target: Gradient, time: f32) {
        let current = self.gradient(side, time);
        self.transitions[side.index()] = Transition {
            from: current,
            to: target,
            start_time: time,
        };
    }

    /// Where `side` is heading
    pub fn target(&self, side: GradientSide) -> Gradient {
        self.transitions[side.index()].to
    }

    /// The value of `side` at `time`
    pub fn gradient(&self, side: GradientSide, time: f32) -> Gradient {
        let transition = &self.transitions[side.index()];
        let t = if self.transition_time <= 0.0 {
            1.0
        } else {
            ((time - transition.start_time) / self.transition_time).clamp(0.0, 1.0)
        };
        transition.from.lerp(transition.to, t)
    }

    /// Paints every visible side over a `width` x `height` panel
    pub fn paint(&self, painter: &mut dyn Painter, width: i32, height: i32, time: f32) {
        for side in GradientSide::ALL {
            let gradient = self.gradient(side, time);
            if !gradient.is_visible() {
                continue;
            }

            let edge = Rgba::BLACK.with_alpha((gradient.alpha.clamp(0.0, 1.0) * 255.0).round() as u8);
            let reach_x = (width as f32 * gradient.extent).round() as i32;
            let reach_y = (height as f32 * gradient.extent).round() as i32;

            let (rect, direction) = match side {
                GradientSide::Left => (Rect::new(0, 0, reach_x, height), FadeDirection::LeftToRight),
                GradientSide::Right => (
                    Rect::new(width - reach_x, 0, reach_x, height),
                    FadeDirection::RightToLeft,
                ),
                GradientSide::Up => (Rect::new(0, 0, width, reach_y), FadeDirection::TopToBottom),
                GradientSide::Down => (
                    Rect::new(0, height - reach_y, width, reach_y),
                    FadeDirection::BottomToTop,
                ),
            };

            if !rect.is_empty() {
                painter.fill_fade(rect, edge, Rgba::TRANSPARENT, direction);
            }
        }
    }
}

impl Default for GradientHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DrawCommand, DrawList};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_transition_is_linear_and_settles() {
        let mut helper = GradientHelper::with_transition_time(1.0);
        helper.set_target_gradient(GradientSide::Left, Gradient::new(1.0, 0.5), 10.0);

        assert_eq!(helper.gradient(GradientSide::Left, 10.0), Gradient::NONE);
        let half = helper.gradient(GradientSide::Left, 10.5);
        assert!(approx(half.extent, 0.5));
        assert!(approx(half.alpha, 0.25));
        assert_eq!(helper.gradient(GradientSide::Left, 30.0), Gradient::new(1.0, 0.5));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut helper = GradientHelper::with_transition_time(1.0);
        helper.set_target_gradient(GradientSide::Up, Gradient::new(1.0, 1.0), 0.0);
        helper.reset_targets(0.5);

        // Still at the halfway value when the fade-out begins
        let start = helper.gradient(GradientSide::Up, 0.5);
        assert!(approx(start.extent, 0.5));
        assert_eq!(helper.target(GradientSide::Up), Gradient::NONE);
        assert_eq!(helper.gradient(GradientSide::Up, 2.0), Gradient::NONE);
    }

    #[test]
    fn test_zero_transition_time_jumps() {
        let mut helper = GradientHelper::with_transition_time(0.0);
        helper.set_target_gradient(GradientSide::Right, Gradient::new(0.5, 1.0), 3.0);
        assert_eq!(helper.gradient(GradientSide::Right, 3.0), Gradient::new(0.5, 1.0));
    }

    #[test]
    fn test_paint_only_visible_sides() {
        let mut helper = GradientHelper::with_transition_time(0.0);
        helper.set_target_gradient(GradientSide::Left, Gradient::new(0.5, 1.0), 0.0);

        let mut list = DrawList::new();
        helper.paint(&mut list, 200, 100, 1.0);

        assert_eq!(
            list.commands(),
            &[DrawCommand::Fade {
                rect: Rect::new(0, 0, 100, 100),
                from: Rgba::BLACK,
                to: Rgba::TRANSPARENT,
                direction: FadeDirection::LeftToRight,
            }]
        );
    }
}

//! Core types shared across the techweeb crates.

use ratatui::style::Color;
use serde::Deserialize;

/// Site palette, lifted from the web version of the portfolio.
pub mod palette {
    use ratatui::style::Color;

    /// Page background (#060e13).
    pub const BASE: Color = Color::Rgb(6, 14, 19);
    /// Primary text (#fefbfb).
    pub const TEXT: Color = Color::Rgb(254, 251, 251);
    /// Muted steel text and borders (#9da9b4).
    pub const MUTED: Color = Color::Rgb(157, 169, 180);
    /// Faint background grid dots.
    pub const GRID: Color = Color::Rgb(24, 34, 42);
    /// Glitch slice tints.
    pub const GLITCH_CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GLITCH_MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GLITCH_PINK: Color = Color::Rgb(255, 0, 153);

    /// Base color triplets used for interpolated effects.
    pub const BASE_RGB: (u8, u8, u8) = (6, 14, 19);
    pub const TEXT_RGB: (u8, u8, u8) = (254, 251, 251);
    pub const MUTED_RGB: (u8, u8, u8) = (157, 169, 180);
}

/// Simulation viewport in virtual pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Most recently observed pointer position, in the same pixel space as
/// particle positions. Starts at the origin until the first mouse event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// Create a pointer at the given position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One greeting of the intro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    /// Display text.
    pub text: &'static str,
    /// BCP-47 style language tag.
    pub lang: &'static str,
}

/// The four pages of the portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    About,
    Work,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Work, Page::Contact];

    /// Display title for the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Work => "Work",
            Page::Contact => "Contact",
        }
    }

    /// Position within [`Page::ALL`].
    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::About => 1,
            Page::Work => 2,
            Page::Contact => 3,
        }
    }

    /// Cycle to the next page.
    pub fn next(self) -> Self {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    /// Cycle to the previous page.
    pub fn prev(self) -> Self {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Global animation speed setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to ambient particle drift.
    pub fn drift_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Full sweep period of the accent lines.
    pub fn accent_sweep_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 20_000,
            AnimationSpeed::Medium => 10_000,
            AnimationSpeed::Fast => 5_000,
        }
    }

    /// Length of one glitch cycle (burst plus quiet time).
    pub fn glitch_cycle_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 4_800,
            AnimationSpeed::Medium => 2_400,
            AnimationSpeed::Fast => 1_200,
        }
    }

    /// Per-word stagger of the blur-in reveal.
    pub fn blur_stagger_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 100,
            AnimationSpeed::Medium => 50,
            AnimationSpeed::Fast => 25,
        }
    }
}

/// Blend two colors; `t` is clamped to `0.0..=1.0`.
pub fn mix(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color::Rgb(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Home.next(), Page::About);
        assert_eq!(Page::Contact.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Contact);
        for page in Page::ALL {
            assert_eq!(Page::ALL[page.index()], page);
        }
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix((0, 0, 0), (255, 255, 255), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(
            mix((0, 0, 0), (255, 255, 255), 1.0),
            Color::Rgb(255, 255, 255)
        );
        // Out-of-range t clamps instead of overshooting.
        assert_eq!(
            mix((10, 10, 10), (20, 20, 20), 7.0),
            Color::Rgb(20, 20, 20)
        );
    }

    #[test]
    fn test_animation_speed_scales() {
        assert!(AnimationSpeed::Slow.drift_scale() < AnimationSpeed::Fast.drift_scale());
        assert_eq!(AnimationSpeed::Medium.accent_sweep_period_ms(), 10_000);
    }
}

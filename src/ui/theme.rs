//! Color themes.
//!
//! A [`Theme`] is passed into each component when it is built; components
//! never look one up on their own.

use gpui::Hsla;
use serde::{Deserialize, Serialize};

/// Brand blue, `hsl(222, 99%, 69%)`. Also the focused input underline.
pub const BORDER_COLOR: Hsla = Hsla {
    h: 222.0 / 360.0,
    s: 0.99,
    l: 0.69,
    a: 1.0,
};

/// 50% grey at half opacity. Placeholders and unfocused underlines.
pub const HALF_COLOR: Hsla = Hsla {
    h: 0.0,
    s: 0.0,
    l: 0.5,
    a: 0.5,
};

/// Height of the lightbox header bar.
pub const NAVBAR_SIZE: f32 = 58.0;

/// Height of the lightbox footer bar.
pub const FOOTER_SIZE: f32 = 44.0;

const fn grey(l: f32) -> Hsla {
    Hsla {
        h: 0.0,
        s: 0.0,
        l,
        a: 1.0,
    }
}

/// Light or dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Resolved palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub border: Hsla,
    pub accent: Hsla,
    /// Lightbox chrome backdrop.
    pub overlay: Hsla,
    /// Dimming behind modal sheets.
    pub scrim: Hsla,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            background: grey(0.13),
            surface: grey(0.17),
            surface_elevated: grey(0.22),
            text_primary: grey(1.0),
            text_secondary: grey(0.8),
            text_muted: grey(0.6),
            border: BORDER_COLOR,
            accent: BORDER_COLOR,
            overlay: Hsla { a: 0.8, ..grey(0.0) },
            scrim: Hsla { a: 0.5, ..grey(0.0) },
        }
    }

    pub fn light() -> Self {
        Self {
            background: grey(1.0),
            surface: grey(0.98),
            surface_elevated: grey(0.94),
            text_primary: grey(0.2),
            text_secondary: grey(0.35),
            text_muted: grey(0.5),
            border: BORDER_COLOR,
            accent: BORDER_COLOR,
            overlay: Hsla { a: 0.8, ..grey(0.0) },
            scrim: Hsla { a: 0.5, ..grey(0.0) },
        }
    }
}

/// Theme handed to components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ThemeColors::light(),
            ThemeMode::Dark => ThemeColors::dark(),
        };
        Self { mode, colors }
    }

    pub fn dark() -> Self {
        Self::new(ThemeMode::Dark)
    }

    pub fn light() -> Self {
        Self::new(ThemeMode::Light)
    }

    /// Text color for content on the current background.
    pub fn color(&self) -> Hsla {
        self.colors.text_primary
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_pick_palettes() {
        assert_eq!(Theme::new(ThemeMode::Light).colors, ThemeColors::light());
        assert_eq!(Theme::new(ThemeMode::Dark).colors, ThemeColors::dark());
        assert_ne!(Theme::light().color(), Theme::dark().color());
    }

    #[test]
    fn chrome_overlay_is_translucent_black() {
        let overlay = Theme::dark().colors.overlay;
        assert_eq!(overlay.l, 0.0);
        assert_eq!(overlay.a, 0.8);
    }

    #[test]
    fn scrim_is_lighter_than_chrome_overlay() {
        for colors in [ThemeColors::dark(), ThemeColors::light()] {
            assert_eq!(colors.scrim.l, 0.0);
            assert!(colors.scrim.a < colors.overlay.a);
        }
    }
}

//! Style fragments and their ordered merge.
//!
//! A fragment sets some properties and leaves the rest `None`.
//! [`StyleFragment::merge`] folds fragments left to right, so a later
//! fragment's `Some` value wins over anything before it.

use gpui::{prelude::FluentBuilder, px, Hsla, Styled};

use crate::ui::theme::BORDER_COLOR;

/// Platform family, for styles that only apply on some of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS and iOS.
    Apple,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }
}

/// A partial style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleFragment {
    pub text_color: Option<Hsla>,
    pub border_color: Option<Hsla>,
    pub bordered: Option<bool>,
    pub border_radius: Option<f32>,
    pub padding: Option<f32>,
}

impl StyleFragment {
    pub fn text_color(mut self, color: Hsla) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Hsla) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = Some(bordered);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Overlay `other` on top of `self`.
    pub fn refine(self, other: &StyleFragment) -> Self {
        Self {
            text_color: other.text_color.or(self.text_color),
            border_color: other.border_color.or(self.border_color),
            bordered: other.bordered.or(self.bordered),
            border_radius: other.border_radius.or(self.border_radius),
            padding: other.padding.or(self.padding),
        }
    }

    /// Merge fragments in order, lowest precedence first.
    pub fn merge(fragments: &[StyleFragment]) -> Self {
        fragments
            .iter()
            .fold(StyleFragment::default(), |acc, fragment| acc.refine(fragment))
    }

    /// Apply the set properties to a gpui element.
    pub fn apply<E: Styled + FluentBuilder>(&self, element: E) -> E {
        element
            .when_some(self.text_color, |this, color| this.text_color(color))
            .when(self.bordered == Some(true), |this| this.border_1())
            .when_some(self.border_color, |this, color| this.border_color(color))
            .when_some(self.border_radius, |this, radius| this.rounded(px(radius)))
            .when_some(self.padding, |this, padding| this.p(px(padding)))
    }
}

/// Base style for text inputs. Bordered on Apple platforms only.
pub fn input_base_style(platform: Platform) -> StyleFragment {
    match platform {
        Platform::Apple => StyleFragment::default()
            .bordered(true)
            .border_color(BORDER_COLOR)
            .border_radius(2.0)
            .padding(8.0),
        Platform::Other => StyleFragment::default(),
    }
}

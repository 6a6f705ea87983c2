//! Vertical slide animation between a hidden and a visible offset.

use std::time::Duration;

use gpui::{px, Animation, AnimationExt, ElementId, IntoElement, Styled};

use crate::ui::easing::{CubicBezier, LIGHTBOX_DURATION, LIGHTBOX_EASING};

/// Whether chrome is on screen (`In`) or off screen (`Out`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Movement {
    In,
    #[default]
    Out,
}

impl Movement {
    /// The other state.
    pub fn toggle(self) -> Self {
        match self {
            Movement::In => Movement::Out,
            Movement::Out => Movement::In,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::In => "in",
            Movement::Out => "out",
        }
    }
}

/// Parameters for one slide transition along the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    /// Hidden offset.
    pub from: f32,
    /// Visible offset.
    pub to: f32,
    pub movement: Movement,
    pub easing: CubicBezier,
    pub duration: Duration,
    /// Fraction of the path already covered when the transition starts.
    pub start: f32,
}

impl SlideAnimation {
    /// A slide using the lightbox curve and duration.
    pub fn new(from: f32, to: f32, movement: Movement) -> Self {
        Self {
            from,
            to,
            movement,
            easing: LIGHTBOX_EASING,
            duration: LIGHTBOX_DURATION,
            start: 0.0,
        }
    }

    /// Start part of the way toward the target, clamped to [0, 1].
    ///
    /// A slide reversed mid-flight resumes from where the bar was.
    pub fn with_start(mut self, start: f32) -> Self {
        self.start = start.clamp(0.0, 1.0);
        self
    }

    /// Offset the element settles at for the current movement.
    pub fn target(&self) -> f32 {
        match self.movement {
            Movement::In => self.to,
            Movement::Out => self.from,
        }
    }

    /// Offset the transition starts from: the opposite endpoint, moved
    /// forward by `start`.
    pub fn origin(&self) -> f32 {
        let opposite = match self.movement {
            Movement::In => self.from,
            Movement::Out => self.to,
        };
        opposite + (self.target() - opposite) * self.start
    }

    /// Offset at linear progress `t` in [0, 1].
    pub fn offset_at(&self, t: f32) -> f32 {
        self.offset_for_eased(self.easing.solve(t))
    }

    /// Offset for progress that has already been through the curve.
    ///
    /// gpui applies the easing before calling the animator, so the animator
    /// interpolates linearly.
    pub fn offset_for_eased(&self, eased: f32) -> f32 {
        self.origin() + (self.target() - self.origin()) * eased
    }

    /// Position `element` at this slide's offset.
    ///
    /// `generation` must change whenever a new transition should play; with
    /// `None` the element is pinned at its target without animating.
    pub fn render<E>(
        self,
        id: &str,
        generation: Option<usize>,
        element: E,
    ) -> gpui::AnyElement
    where
        E: Styled + IntoElement + 'static,
    {
        match generation {
            None => element.top(px(self.target())).into_any_element(),
            Some(generation) => {
                let animation_id = ElementId::Name(
                    format!("{}-{}-{}", id, self.movement.as_str(), generation).into(),
                );
                let easing = self.easing;
                element
                    .with_animation(
                        animation_id,
                        Animation::new(self.duration).with_easing(move |t| easing.solve(t)),
                        move |this, eased| this.top(px(self.offset_for_eased(eased))),
                    )
                    .into_any_element()
            }
        }
    }
}

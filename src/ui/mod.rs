//! UI components and views
//!
//! The gpui-based interface is organized into:
//! - `theme`: color schemes and shared sizes
//! - `style`: style fragments and their merge order
//! - `easing`: cubic-bezier curves for transitions
//! - `components`: reusable UI primitives
//! - `views`: full-screen views

pub mod components;
pub mod easing;
pub mod style;
pub mod theme;
pub mod views;

pub use style::{Platform, StyleFragment};
pub use theme::{Theme, ThemeColors, ThemeMode};
pub use views::LightboxView;

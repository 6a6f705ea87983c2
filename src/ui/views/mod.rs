//! Application views.
//!
//! Views own their state and handle user interaction; components they render
//! live in `ui::components`.

pub mod lightbox;
mod lightbox_chrome;

pub use lightbox::{
    caption, caption_text, handle_options_press, image_format, LightboxServices, LightboxState,
    LightboxView, OverlayGeometry,
};
pub use lightbox_chrome::{ChromeHandler, LightboxFooter, LightboxHeader};

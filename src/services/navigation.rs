//! Back navigation.

use gpui::{App, Window};

/// Receives "go back" commands from screens.
pub trait Navigator {
    fn navigate_back(&self, window: &mut Window, cx: &mut App);
}

/// Closes the hosting window. Used when the lightbox is the only screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseWindow;

impl Navigator for CloseWindow {
    fn navigate_back(&self, window: &mut Window, _cx: &mut App) {
        tracing::debug!("Navigating back, closing window");
        window.remove_window();
    }
}

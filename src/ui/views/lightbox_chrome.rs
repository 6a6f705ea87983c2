//! Lightbox header and footer bars.

use gpui::{
    div, img, prelude::FluentBuilder, px, App, ClickEvent, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};
use url::Url;

use crate::ui::theme::{ThemeColors, FOOTER_SIZE, NAVBAR_SIZE};

/// Click handler for chrome controls.
pub type ChromeHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App)>;

const AVATAR_SIZE: f32 = 32.0;

/// Back control, sender avatar and name, and the message time.
#[derive(IntoElement)]
pub struct LightboxHeader {
    timestamp: SharedString,
    sender_name: SharedString,
    avatar_url: Option<Url>,
    colors: ThemeColors,
    on_back: ChromeHandler,
}

impl LightboxHeader {
    pub fn new(
        timestamp: impl Into<SharedString>,
        sender_name: impl Into<SharedString>,
        colors: ThemeColors,
        on_back: ChromeHandler,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender_name: sender_name.into(),
            avatar_url: None,
            colors,
            on_back,
        }
    }

    pub fn avatar_url(mut self, avatar_url: Option<Url>) -> Self {
        self.avatar_url = avatar_url;
        self
    }
}

impl RenderOnce for LightboxHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let on_back = self.on_back;

        div()
            .h(px(NAVBAR_SIZE))
            .w_full()
            .px(px(12.0))
            .flex()
            .items_center()
            .gap(px(12.0))
            .child(
                div()
                    .id("lightbox-back")
                    .px(px(8.0))
                    .py(px(4.0))
                    .rounded(px(4.0))
                    .cursor_pointer()
                    .text_color(colors.text_primary)
                    .hover(move |style| style.bg(colors.surface_elevated))
                    .on_click(move |event, window, cx| {
                        cx.stop_propagation();
                        on_back(event, window, cx);
                    })
                    .child(SharedString::from("←")),
            )
            .when_some(self.avatar_url, |this, url| {
                this.child(
                    img(url.to_string())
                        .w(px(AVATAR_SIZE))
                        .h(px(AVATAR_SIZE))
                        .rounded(px(AVATAR_SIZE / 2.0)),
                )
            })
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(colors.text_primary)
                            .truncate()
                            .child(self.sender_name),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(colors.text_secondary)
                            .child(self.timestamp),
                    ),
            )
    }
}

/// Caption and the options trigger.
#[derive(IntoElement)]
pub struct LightboxFooter {
    caption: SharedString,
    colors: ThemeColors,
    on_options: ChromeHandler,
}

impl LightboxFooter {
    pub fn new(caption: impl Into<SharedString>, colors: ThemeColors, on_options: ChromeHandler) -> Self {
        Self {
            caption: caption.into(),
            colors,
            on_options,
        }
    }
}

impl RenderOnce for LightboxFooter {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let on_options = self.on_options;

        div()
            .h(px(FOOTER_SIZE))
            .w_full()
            .px(px(16.0))
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .text_color(colors.text_primary)
                    .truncate()
                    .child(self.caption),
            )
            .child(
                div()
                    .id("lightbox-options")
                    .px(px(8.0))
                    .py(px(4.0))
                    .rounded(px(4.0))
                    .cursor_pointer()
                    .text_color(colors.text_primary)
                    .hover(move |style| style.bg(colors.surface_elevated))
                    .on_click(move |event, window, cx| {
                        cx.stop_propagation();
                        on_options(event, window, cx);
                    })
                    .child(SharedString::from("⋯")),
            )
    }
}

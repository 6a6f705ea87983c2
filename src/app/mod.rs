//! Application bootstrap.
//!
//! Opens a window showing one image in the lightbox, wires the default
//! collaborators, and registers key bindings.

use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use gpui::{
    actions, px, size, AppContext, Application, Bounds, KeyBinding, WindowBounds, WindowOptions,
};
use serde::Deserialize;

use crate::config::Config;
use crate::domain::{Auth, Message};
use crate::i18n::{Catalog, Translate};
use crate::services::{ClipboardQueue, CloseWindow, ImageActions, ImageFetcher};
use crate::ui::theme::Theme;
use crate::ui::views::{LightboxServices, LightboxView};

actions!(courier, [Quit, GoBack, ToggleChrome]);

/// An image to open: its source, the message it was shared in, and the
/// session to fetch it with.
#[derive(Debug, Clone, Deserialize)]
pub struct LightboxFixture {
    pub src: String,
    pub message: Message,
    pub auth: Auth,
}

impl LightboxFixture {
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Main application entry point
pub struct App;

impl App {
    /// Run the application until its window closes.
    pub fn run(config: Config, fixture: LightboxFixture, runtime: tokio::runtime::Handle) -> Result<()> {
        let theme = Theme::new(config.theme);
        let download_dir = config.resolved_download_dir();
        tracing::info!(
            locale = %config.locale,
            download_dir = %download_dir.display(),
            "Starting courier"
        );
        let catalog =
            Catalog::load_or_identity(config.resolved_locales_dir().as_deref(), &config.locale);

        Application::new().run(move |cx: &mut gpui::App| {
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx| cx.quit());
            cx.on_window_closed(|cx| cx.quit()).detach();

            let bounds = Bounds::centered(
                None,
                size(px(config.window_width), px(config.window_height)),
                cx,
            );
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            };

            let translate: Rc<dyn Translate> = Rc::new(catalog.clone());
            let opened = cx.open_window(options, |window, cx| {
                let clipboard = ClipboardQueue::new();
                let services = LightboxServices {
                    executor: Rc::new(ImageActions::new(
                        runtime.clone(),
                        download_dir.clone(),
                        clipboard.clone(),
                    )),
                    navigator: Rc::new(CloseWindow),
                    translate: translate.clone(),
                    fetcher: ImageFetcher::new(runtime.clone()),
                    clipboard: Some(clipboard),
                };
                cx.new(|cx| {
                    LightboxView::new(
                        fixture.src.clone(),
                        fixture.message.clone(),
                        fixture.auth.clone(),
                        theme,
                        services,
                        window,
                        cx,
                    )
                })
            });

            if let Err(e) = opened {
                tracing::error!("Failed to open window: {}", e);
                cx.quit();
                return;
            }
            cx.activate(true);
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        let lightbox_ctx = Some("Lightbox");

        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("escape", GoBack, lightbox_ctx),
            KeyBinding::new("space", ToggleChrome, lightbox_ctx),
        ]);
    }
}

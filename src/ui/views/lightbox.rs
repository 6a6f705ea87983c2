//! Full-screen image viewer with sliding chrome.
//!
//! Tapping the image flips [`Movement`] between `Out` (chrome hidden) and `In`
//! (chrome shown). Both bars slide between offsets derived from the window
//! height; see [`OverlayGeometry`].

use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use gpui::{
    div, img, prelude::FluentBuilder, px, AnyElement, App, ClickEvent, ClipboardItem, Context,
    FocusHandle, Focusable, Image, ImageFormat, InteractiveElement, IntoElement, ObjectFit,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, StyledImage, Window,
};
use url::Url;

use crate::app::{GoBack, ToggleChrome};
use crate::domain::{Auth, Message};
use crate::i18n::{interpolate, LocalizableText, Translate};
use crate::services::action_sheet::{
    construct_action_sheet_buttons, ActionExecutor, ActionSheetHost, ActionSheetRequest,
};
use crate::services::fetch::{FetchedImage, ImageFetcher};
use crate::services::format::format_timestamp;
use crate::services::image_actions::ClipboardQueue;
use crate::services::navigation::Navigator;
use crate::services::resource::{avatar_url, get_resource, ImageResource};
use crate::ui::components::action_sheet::{ActionSheetOverlay, ActionSheetSlot, OnPick};
use crate::ui::components::slide::{Movement, SlideAnimation};
use crate::ui::easing::{LIGHTBOX_DURATION, LIGHTBOX_EASING};
use crate::ui::theme::{Theme, FOOTER_SIZE, NAVBAR_SIZE};
use crate::ui::views::lightbox_chrome::{LightboxFooter, LightboxHeader};

/// Reveal state of the chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightboxState {
    movement: Movement,
    toggles: usize,
    started: Option<Instant>,
    resume_from: f32,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Number of transitions so far.
    pub fn toggles(&self) -> usize {
        self.toggles
    }

    /// Fraction of the current slide already covered when it started.
    pub fn resume_from(&self) -> f32 {
        self.resume_from
    }

    /// A tap on the image flips the chrome.
    pub fn on_image_press(&mut self) -> Movement {
        self.on_image_press_at(Instant::now())
    }

    /// Flip the chrome at `now`. A flip during a running transition resumes
    /// from the position that transition had reached.
    pub fn on_image_press_at(&mut self, now: Instant) -> Movement {
        let reached = match self.started {
            Some(started) => {
                let linear = now.saturating_duration_since(started).as_secs_f32()
                    / LIGHTBOX_DURATION.as_secs_f32();
                self.resume_from + (1.0 - self.resume_from) * LIGHTBOX_EASING.solve(linear)
            }
            None => 1.0,
        };

        self.movement = self.movement.toggle();
        self.toggles += 1;
        self.started = Some(now);
        self.resume_from = (1.0 - reached).clamp(0.0, 1.0);
        self.movement
    }
}

/// Hidden and visible offsets of the chrome bars for a window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    pub width: f32,
    pub header_hidden: f32,
    pub header_visible: f32,
    pub footer_hidden: f32,
    pub footer_visible: f32,
}

impl OverlayGeometry {
    pub fn for_window(width: f32, height: f32) -> Self {
        Self {
            width,
            header_hidden: -NAVBAR_SIZE,
            header_visible: 0.0,
            footer_hidden: height,
            footer_visible: height - FOOTER_SIZE,
        }
    }

    pub fn header_slide(&self, movement: Movement) -> SlideAnimation {
        SlideAnimation::new(self.header_hidden, self.header_visible, movement)
    }

    pub fn footer_slide(&self, movement: Movement) -> SlideAnimation {
        SlideAnimation::new(self.footer_hidden, self.footer_visible, movement)
    }
}

/// Footer caption for a message, before translation.
pub fn caption_text(message: &Message) -> LocalizableText {
    if message.is_stream() {
        let stream = message.display_recipient.stream_name().unwrap_or_else(|| {
            tracing::warn!(message_id = message.id, "Stream message without a stream name");
            ""
        });
        LocalizableText::Structured {
            text: "Shared in #{stream}".to_string(),
            values: BTreeMap::from([("stream".to_string(), stream.to_string())]),
        }
    } else {
        LocalizableText::from("Shared with you")
    }
}

/// Footer caption for a message, untranslated.
pub fn caption(message: &Message) -> String {
    match caption_text(message) {
        LocalizableText::Plain(text) => text,
        LocalizableText::Structured { text, values } => interpolate(&text, &values),
    }
}

/// gpui image format for a fetched payload, from its content type or the
/// URL's extension. Defaults to PNG.
pub fn image_format(content_type: Option<&str>, uri: &Url) -> ImageFormat {
    let mime = content_type
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase());
    let from_mime = match mime.as_deref() {
        Some("image/png") => Some(ImageFormat::Png),
        Some("image/jpeg") | Some("image/jpg") => Some(ImageFormat::Jpeg),
        Some("image/gif") => Some(ImageFormat::Gif),
        Some("image/webp") => Some(ImageFormat::Webp),
        Some("image/svg+xml") => Some(ImageFormat::Svg),
        Some("image/bmp") => Some(ImageFormat::Bmp),
        Some("image/tiff") => Some(ImageFormat::Tiff),
        _ => None,
    };
    if let Some(format) = from_mime {
        return format;
    }

    let extension = uri
        .path()
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
        Some("gif") => ImageFormat::Gif,
        Some("webp") => ImageFormat::Webp,
        Some("svg") => ImageFormat::Svg,
        Some("bmp") => ImageFormat::Bmp,
        Some("tif") | Some("tiff") => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    }
}

/// Present the image actions and run the chosen one.
///
/// The last option is cancel and runs nothing.
pub fn handle_options_press(
    host: &dyn ActionSheetHost,
    executor: Rc<dyn ActionExecutor>,
    src: &str,
    auth: &Auth,
) {
    let Some(request) = ActionSheetRequest::new(construct_action_sheet_buttons()) else {
        return;
    };

    let options = request.clone();
    let src = src.to_string();
    let auth = auth.clone();
    host.show(
        request,
        Box::new(move |index| {
            if options.is_cancel(index) {
                return;
            }
            match options.title(index) {
                Some(title) => executor.execute(title, &src, &auth),
                None => tracing::warn!(index, "Action sheet index out of range"),
            }
        }),
    );
}

/// Collaborators the lightbox delegates to.
pub struct LightboxServices {
    pub executor: Rc<dyn ActionExecutor>,
    pub navigator: Rc<dyn Navigator>,
    pub translate: Rc<dyn Translate>,
    /// Fetches the image with its credentials.
    pub fetcher: ImageFetcher,
    /// Links the executor wants on the system clipboard.
    pub clipboard: Option<ClipboardQueue>,
}

/// Progress of the image fetch.
enum ImageLoad {
    Loading,
    Ready(Arc<Image>),
    Failed,
}

/// The lightbox view.
pub struct LightboxView {
    src: String,
    message: Message,
    auth: Auth,
    theme: Theme,
    state: LightboxState,
    image: ImageLoad,
    sheet: ActionSheetSlot,
    services: LightboxServices,
    focus_handle: FocusHandle,
}

impl LightboxView {
    pub fn new(
        src: impl Into<String>,
        message: Message,
        auth: Auth,
        theme: Theme,
        services: LightboxServices,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let src = src.into();
        let resource = match get_resource(&src, &auth) {
            Ok(resource) => Some(resource),
            Err(e) => {
                tracing::error!(src = %src, "Cannot resolve lightbox image: {}", e);
                None
            }
        };

        let image = match resource {
            Some(resource) => {
                Self::load_image(&services.fetcher, resource, cx);
                ImageLoad::Loading
            }
            None => ImageLoad::Failed,
        };

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            src,
            message,
            auth,
            theme,
            state: LightboxState::new(),
            image,
            sheet: ActionSheetSlot::new(),
            services,
            focus_handle,
        }
    }

    fn load_image(fetcher: &ImageFetcher, resource: ImageResource, cx: &mut Context<Self>) {
        let uri = resource.uri.clone();
        let fetch = fetcher.spawn(resource);
        cx.spawn(async move |this, cx| {
            let result = match fetch.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(url = %uri, "Image fetch task failed: {}", e);
                    let _ = this.update(cx, |view, cx| view.set_image(ImageLoad::Failed, cx));
                    return;
                }
            };
            let load = match result {
                Ok(fetched) => ImageLoad::Ready(Self::to_image(fetched, &uri)),
                Err(e) => {
                    tracing::error!(url = %uri, "Cannot fetch lightbox image: {}", e);
                    ImageLoad::Failed
                }
            };
            let _ = this.update(cx, |view, cx| view.set_image(load, cx));
        })
        .detach();
    }

    fn to_image(fetched: FetchedImage, uri: &Url) -> Arc<Image> {
        let format = image_format(fetched.content_type.as_deref(), uri);
        Arc::new(Image::from_bytes(format, fetched.bytes.to_vec()))
    }

    fn set_image(&mut self, image: ImageLoad, cx: &mut Context<Self>) {
        self.image = image;
        cx.notify();
    }

    fn tr(&self, text: &str) -> String {
        self.services.translate.translate(text, None)
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn set_theme(&mut self, theme: Theme, cx: &mut Context<Self>) {
        self.theme = theme;
        cx.notify();
    }

    fn handle_image_press(&mut self, cx: &mut Context<Self>) {
        let movement = self.state.on_image_press();
        tracing::debug!(movement = movement.as_str(), "Lightbox chrome toggled");
        cx.notify();
    }

    fn handle_options_press(&mut self, cx: &mut Context<Self>) {
        handle_options_press(
            &self.sheet,
            self.services.executor.clone(),
            &self.src,
            &self.auth,
        );
        cx.notify();
    }

    fn handle_press_back(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.sheet.is_open() {
            self.sheet.cancel();
            cx.notify();
            return;
        }
        self.services.navigator.navigate_back(window, cx);
    }

    fn flush_clipboard(&self, cx: &mut Context<Self>) {
        let Some(queue) = &self.services.clipboard else {
            return;
        };
        for text in queue.drain() {
            cx.write_to_clipboard(ClipboardItem::new_string(text));
        }
    }

    fn render_image(&self, width: f32, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = self.theme.colors.text_muted;

        div()
            .id("lightbox-image")
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                this.handle_image_press(cx);
            }))
            .map(|this| match &self.image {
                ImageLoad::Ready(image) => this.child(
                    img(image.clone())
                        .w(px(width))
                        .h_full()
                        .object_fit(ObjectFit::Contain),
                ),
                ImageLoad::Loading => this.child(
                    div()
                        .text_color(muted)
                        .child(SharedString::from(self.tr("Loading…"))),
                ),
                ImageLoad::Failed => this.child(
                    div()
                        .text_color(muted)
                        .child(SharedString::from(self.tr("Image unavailable"))),
                ),
            })
    }

    fn render_header(&self, geometry: &OverlayGeometry, cx: &mut Context<Self>) -> AnyElement {
        let timestamp = format_timestamp(self.message.timestamp, &Local::now());
        let avatar = avatar_url(&self.message, &self.auth.realm)
            .map_err(|e| tracing::warn!("Cannot resolve avatar: {}", e))
            .ok();

        let panel = div()
            .absolute()
            .left_0()
            .w(px(geometry.width))
            .bg(self.theme.colors.overlay)
            .child(
                LightboxHeader::new(
                    timestamp,
                    self.message.sender_full_name.clone(),
                    self.theme.colors,
                    Box::new(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.handle_press_back(window, cx);
                    })),
                )
                .avatar_url(avatar),
            );

        geometry
            .header_slide(self.state.movement())
            .with_start(self.state.resume_from())
            .render("lightbox-header", self.animation_generation(), panel)
    }

    fn render_footer(&self, geometry: &OverlayGeometry, cx: &mut Context<Self>) -> AnyElement {
        let panel = div()
            .absolute()
            .left_0()
            .w(px(geometry.width))
            .bg(self.theme.colors.overlay)
            .child(LightboxFooter::new(
                caption_text(&self.message).resolve(self.services.translate.as_ref()),
                self.theme.colors,
                Box::new(cx.listener(|this, _: &ClickEvent, _, cx| {
                    this.handle_options_press(cx);
                })),
            ));

        geometry
            .footer_slide(self.state.movement())
            .with_start(self.state.resume_from())
            .render("lightbox-footer", self.animation_generation(), panel)
    }

    /// Chrome is pinned until the first toggle, then every toggle animates.
    fn animation_generation(&self) -> Option<usize> {
        match self.state.toggles() {
            0 => None,
            n => Some(n),
        }
    }
}

impl Focusable for LightboxView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for LightboxView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let viewport = window.viewport_size();
        let geometry =
            OverlayGeometry::for_window(f32::from(viewport.width), f32::from(viewport.height));
        let sheet = self.sheet.request();

        div()
            .id("lightbox")
            .key_context("Lightbox")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(gpui::black())
            .on_action(cx.listener(|this, _: &GoBack, window, cx| {
                this.handle_press_back(window, cx);
            }))
            .on_action(cx.listener(|this, _: &ToggleChrome, _, cx| {
                this.handle_image_press(cx);
            }))
            .child(self.render_image(geometry.width, cx))
            .child(self.render_header(&geometry, cx))
            .child(self.render_footer(&geometry, cx))
            .when_some(sheet, |this, request| {
                let pick = cx.listener(|this, index: &usize, _, cx| {
                    this.sheet.select(*index);
                    this.flush_clipboard(cx);
                    cx.notify();
                });
                let on_pick: OnPick = Rc::new(move |index, window, cx| pick(&index, window, cx));
                let labels = ActionSheetRequest {
                    options: request.options.iter().map(|title| self.tr(title)).collect(),
                    cancel_button_index: request.cancel_button_index,
                };
                this.child(ActionSheetOverlay::new(labels, self.theme.colors, on_pick))
            })
    }
}

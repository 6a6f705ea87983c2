//! Themed, translated text input.
//!
//! [`InputState`] holds everything that does not need a window: focus, text,
//! placeholder resolution and style precedence. [`ThemedInput`] is the gpui
//! view around it.

use std::cell::RefCell;
use std::rc::Rc;

use gpui::{
    div, prelude::FluentBuilder, px, App, ClickEvent, Context, FocusHandle, Focusable, Hsla,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Window,
};

use crate::i18n::{LocalizableText, Translate};
use crate::ui::style::{input_base_style, Platform, StyleFragment};
use crate::ui::theme::{Theme, HALF_COLOR};

/// Called with the full text after every edit.
pub type TextCallback = Box<dyn Fn(&str)>;

/// Called on focus or blur.
pub type EventCallback = Box<dyn Fn()>;

const SECURE_MASK: char = '•';

/// Options forwarded to the underlying text entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassThrough {
    pub default_value: String,
    pub editable: bool,
    pub max_length: Option<usize>,
    pub secure_text_entry: bool,
    pub auto_focus: bool,
}

impl Default for PassThrough {
    fn default() -> Self {
        Self {
            default_value: String::new(),
            editable: true,
            max_length: None,
            secure_text_entry: false,
            auto_focus: false,
        }
    }
}

/// Slot that receives the input's focus handle once it is built.
#[derive(Clone, Default)]
pub struct InputRef(Rc<RefCell<Option<FocusHandle>>>);

impl InputRef {
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&self, handle: FocusHandle) {
        *self.0.borrow_mut() = Some(handle);
    }

    /// Whether an input has filled this slot.
    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Focus the attached input. Returns false if nothing is attached.
    pub fn focus(&self, window: &mut Window, cx: &mut App) -> bool {
        match self.0.borrow().as_ref() {
            Some(handle) => {
                handle.focus(window);
                true
            }
            None => false,
        }
    }
}

/// Configuration for a themed input.
#[derive(Default)]
pub struct InputProps {
    /// Caller style, applied last.
    pub style: Option<StyleFragment>,
    pub placeholder: LocalizableText,
    pub on_change_text: Option<TextCallback>,
    pub on_focus: Option<EventCallback>,
    pub on_blur: Option<EventCallback>,
    pub input_ref: Option<InputRef>,
    pub pass_through: PassThrough,
}

impl InputProps {
    pub fn new(placeholder: impl Into<LocalizableText>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: StyleFragment) -> Self {
        self.style = Some(style);
        self
    }

    pub fn on_change_text(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_change_text = Some(Box::new(callback));
        self
    }

    pub fn on_focus(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    pub fn on_blur(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn input_ref(mut self, input_ref: InputRef) -> Self {
        self.input_ref = Some(input_ref);
        self
    }

    pub fn pass_through(mut self, pass_through: PassThrough) -> Self {
        self.pass_through = pass_through;
        self
    }
}

/// Window-independent input state.
pub struct InputState {
    props: InputProps,
    is_focused: bool,
    text: String,
}

impl InputState {
    pub fn new(props: InputProps) -> Self {
        let text = props.pass_through.default_value.clone();
        Self {
            props,
            is_focused: false,
            text,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    /// Caller's handler runs first, then the input marks itself focused.
    pub fn handle_focus(&mut self) {
        if let Some(on_focus) = &self.props.on_focus {
            on_focus();
        }
        self.is_focused = true;
    }

    /// Caller's handler runs first, then the input marks itself blurred.
    pub fn handle_blur(&mut self) {
        if let Some(on_blur) = &self.props.on_blur {
            on_blur();
        }
        self.is_focused = false;
    }

    /// Underline color: theme border when focused, half grey otherwise.
    pub fn underline_color(&self, theme: &Theme) -> Hsla {
        if self.is_focused {
            theme.colors.border
        } else {
            HALF_COLOR
        }
    }

    /// Localized placeholder.
    pub fn placeholder(&self, translate: &dyn Translate) -> String {
        self.props.placeholder.resolve(translate)
    }

    /// Platform base, then theme text color, then the caller's style.
    pub fn style(&self, theme: &Theme, platform: Platform) -> StyleFragment {
        StyleFragment::merge(&[
            input_base_style(platform),
            StyleFragment::default().text_color(theme.color()),
            self.props.style.unwrap_or_default(),
        ])
    }

    /// Text as it should be drawn.
    pub fn display_text(&self) -> String {
        if self.props.pass_through.secure_text_entry {
            std::iter::repeat(SECURE_MASK)
                .take(self.text.chars().count())
                .collect()
        } else {
            self.text.clone()
        }
    }

    /// Insert at the end, truncated to `max_length`. Returns whether the
    /// text changed.
    pub fn insert_str(&mut self, s: &str) -> bool {
        if !self.props.pass_through.editable || s.is_empty() {
            return false;
        }

        let room = match self.props.pass_through.max_length {
            Some(max) => max.saturating_sub(self.text.chars().count()),
            None => usize::MAX,
        };
        let before = self.text.len();
        self.text.extend(s.chars().take(room));
        if self.text.len() == before {
            return false;
        }

        self.notify_change();
        true
    }

    /// Remove the last character.
    pub fn backspace(&mut self) -> bool {
        if !self.props.pass_through.editable || self.text.pop().is_none() {
            return false;
        }
        self.notify_change();
        true
    }

    /// Remove the last word and any whitespace after it.
    pub fn delete_word_backward(&mut self) -> bool {
        if !self.props.pass_through.editable || self.text.is_empty() {
            return false;
        }
        let trimmed = self.text.trim_end_matches(char::is_whitespace);
        let cut = trimmed
            .rfind(char::is_whitespace)
            .map(|i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        self.text.truncate(cut);
        self.notify_change();
        true
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.notify_change();
    }

    pub fn clear(&mut self) {
        if !self.text.is_empty() {
            self.set_text(String::new());
        }
    }

    /// Apply a key press. Returns whether the text changed.
    pub fn process_key(&mut self, key: &str, key_char: Option<&str>, ctrl_or_cmd: bool) -> bool {
        match key {
            "backspace" if ctrl_or_cmd => self.delete_word_backward(),
            "backspace" => self.backspace(),
            "enter" | "escape" | "tab" | "left" | "right" | "up" | "down" => false,
            _ if ctrl_or_cmd => false,
            "space" => self.insert_str(" "),
            _ => match key_char {
                Some(chars) => self.insert_str(chars),
                None => false,
            },
        }
    }

    fn notify_change(&self) {
        if let Some(on_change_text) = &self.props.on_change_text {
            on_change_text(&self.text);
        }
    }
}

/// A text input styled from a theme, with a translated placeholder.
pub struct ThemedInput {
    state: InputState,
    theme: Theme,
    platform: Platform,
    translate: Rc<dyn Translate>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl ThemedInput {
    pub fn new(
        props: InputProps,
        theme: Theme,
        translate: Rc<dyn Translate>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        if let Some(input_ref) = &props.input_ref {
            input_ref.attach(focus_handle.clone());
        }

        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this, _window, cx| {
                this.state.handle_focus();
                cx.notify();
            }),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
                this.state.handle_blur();
                cx.notify();
            }),
        ];

        if props.pass_through.auto_focus {
            focus_handle.focus(window);
        }

        Self {
            state: InputState::new(props),
            theme,
            platform: Platform::current(),
            translate,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn set_theme(&mut self, theme: Theme, cx: &mut Context<Self>) {
        self.theme = theme;
        cx.notify();
    }

    pub fn set_text(&mut self, text: impl Into<String>, cx: &mut Context<Self>) {
        self.state.set_text(text);
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let modifiers = &event.keystroke.modifiers;
        let changed = self.state.process_key(
            &event.keystroke.key,
            event.keystroke.key_char.as_deref(),
            modifiers.control || modifiers.platform,
        );
        if changed {
            cx.notify();
        }
    }
}

impl Focusable for ThemedInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ThemedInput {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let style = self.state.style(&self.theme, self.platform);
        let is_empty = self.state.text().is_empty();
        let (content, content_color) = if is_empty {
            (self.state.placeholder(self.translate.as_ref()), HALF_COLOR)
        } else {
            (
                self.state.display_text(),
                style.text_color.unwrap_or(self.theme.color()),
            )
        };
        let underline = self.state.underline_color(&self.theme);
        let show_underline = self.platform == Platform::Other;

        style.apply(
            div()
                .id("themed-input")
                .track_focus(&self.focus_handle)
                .w_full()
                .flex()
                .flex_col()
                .cursor_text()
                .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                    this.focus_handle.focus(window);
                }))
                .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                    this.handle_key(event, cx);
                }))
                .child(
                    div()
                        .py(px(6.0))
                        .text_color(content_color)
                        .child(SharedString::from(content)),
                )
                .when(show_underline, |this| {
                    this.child(div().h(px(1.0)).w_full().bg(underline))
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Values};
    use crate::ui::theme::BORDER_COLOR;
    use gpui::black;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn state(props: InputProps) -> InputState {
        InputState::new(props)
    }

    #[test]
    fn starts_blurred_with_half_color_underline() {
        let input = state(InputProps::new("Search"));
        assert!(!input.is_focused());
        assert_eq!(input.underline_color(&Theme::dark()), HALF_COLOR);
    }

    #[test]
    fn focus_then_blur_switches_underline() {
        let theme = Theme::dark();
        let mut input = state(InputProps::new("Search"));

        input.handle_focus();
        assert_eq!(input.underline_color(&theme), theme.colors.border);

        input.handle_blur();
        assert_eq!(input.underline_color(&theme), HALF_COLOR);
    }

    #[test]
    fn repeated_focus_is_idempotent() {
        let mut input = state(InputProps::new("Search"));
        input.handle_focus();
        input.handle_focus();
        assert!(input.is_focused());

        input.handle_blur();
        input.handle_blur();
        assert!(!input.is_focused());
    }

    #[test]
    fn caller_handlers_are_chained_before_state_change() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let focus_log = log.clone();
        let blur_log = log.clone();
        let mut input = state(
            InputProps::new("Search")
                .on_focus(move || focus_log.borrow_mut().push("focus"))
                .on_blur(move || blur_log.borrow_mut().push("blur")),
        );

        input.handle_focus();
        input.handle_blur();

        assert_eq!(*log.borrow(), vec!["focus", "blur"]);
        assert!(!input.is_focused());
    }

    #[test]
    fn placeholder_is_translated() {
        let mut messages = HashMap::new();
        messages.insert("Search".to_string(), "Suchen".to_string());
        messages.insert("Message {to}".to_string(), "Nachricht an {to}".to_string());
        let catalog = Catalog::from_messages("de", messages);

        assert_eq!(state(InputProps::new("Search")).placeholder(&catalog), "Suchen");

        let mut values = Values::new();
        values.insert("to".into(), "#design".into());
        let structured = LocalizableText::Structured {
            text: "Message {to}".into(),
            values,
        };
        assert_eq!(
            state(InputProps::new(structured)).placeholder(&catalog),
            "Nachricht an #design"
        );
    }

    #[test]
    fn style_precedence_is_base_theme_caller() {
        let theme = Theme::dark();

        let plain = state(InputProps::new("x")).style(&theme, Platform::Apple);
        assert_eq!(plain.text_color, Some(theme.color()));
        assert_eq!(plain.border_color, Some(BORDER_COLOR));
        assert_eq!(plain.padding, Some(8.0));

        let overridden = state(
            InputProps::new("x").style(StyleFragment::default().text_color(black()).padding(2.0)),
        )
        .style(&theme, Platform::Apple);
        assert_eq!(overridden.text_color, Some(black()));
        assert_eq!(overridden.padding, Some(2.0));
        assert_eq!(overridden.border_radius, Some(2.0));

        let other = state(InputProps::new("x")).style(&theme, Platform::Other);
        assert_eq!(other.bordered, None);
        assert_eq!(other.text_color, Some(theme.color()));
    }

    #[test]
    fn edits_report_full_text() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut input = state(
            InputProps::new("x").on_change_text(move |text| sink.borrow_mut().push(text.to_string())),
        );

        assert!(input.process_key("h", Some("h"), false));
        assert!(input.process_key("i", Some("i"), false));
        assert!(input.process_key("space", Some(" "), false));
        assert!(input.process_key("backspace", None, false));
        assert!(!input.process_key("enter", None, false));
        assert!(!input.process_key("a", Some("a"), true));

        assert_eq!(input.text(), "hi");
        assert_eq!(*seen.borrow(), vec!["h", "hi", "hi ", "hi"]);
    }

    #[test]
    fn max_length_truncates_input() {
        let mut input = state(InputProps::new("x").pass_through(PassThrough {
            max_length: Some(3),
            ..PassThrough::default()
        }));

        assert!(input.insert_str("hello"));
        assert_eq!(input.text(), "hel");
        assert!(!input.insert_str("!"));
    }

    #[test]
    fn read_only_input_ignores_edits() {
        let mut input = state(InputProps::new("x").pass_through(PassThrough {
            default_value: "fixed".into(),
            editable: false,
            ..PassThrough::default()
        }));

        assert!(!input.insert_str("more"));
        assert!(!input.backspace());
        assert_eq!(input.text(), "fixed");
    }

    #[test]
    fn secure_entry_is_masked() {
        let mut input = state(InputProps::new("Password").pass_through(PassThrough {
            secure_text_entry: true,
            ..PassThrough::default()
        }));
        input.insert_str("pässword");
        assert_eq!(input.display_text(), "••••••••");
        assert_eq!(input.text(), "pässword");
    }

    #[test]
    fn delete_word_backward_removes_last_word() {
        let mut input = state(InputProps::new("x"));
        input.set_text("hello big world  ");
        assert!(input.process_key("backspace", None, true));
        assert_eq!(input.text(), "hello big ");
        input.delete_word_backward();
        input.delete_word_backward();
        assert_eq!(input.text(), "");
        assert!(!input.delete_word_backward());
    }

    #[test]
    fn input_ref_starts_detached() {
        assert!(!InputRef::new().is_attached());
    }
}

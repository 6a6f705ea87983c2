//! In-window action sheet.
//!
//! [`ActionSheetSlot`] is an [`ActionSheetHost`] that parks the request until
//! the owning view renders it with [`ActionSheetOverlay`] and the user picks
//! an entry.

use std::cell::RefCell;
use std::rc::Rc;

use gpui::{
    div, prelude::FluentBuilder, px, App, ClickEvent, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::services::action_sheet::{ActionSheetHost, ActionSheetRequest, OnSelect};
use crate::ui::theme::ThemeColors;

struct PendingSheet {
    request: ActionSheetRequest,
    on_select: OnSelect,
}

/// Holds at most one pending action sheet.
#[derive(Clone, Default)]
pub struct ActionSheetSlot(Rc<RefCell<Option<PendingSheet>>>);

impl ActionSheetSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// The request currently shown, if any.
    pub fn request(&self) -> Option<ActionSheetRequest> {
        self.0.borrow().as_ref().map(|pending| pending.request.clone())
    }

    /// Close the sheet and report `index`. No-op when nothing is pending.
    pub fn select(&self, index: usize) {
        // Release the borrow before the callback, which may reopen the slot.
        let pending = self.0.borrow_mut().take();
        if let Some(pending) = pending {
            tracing::debug!(index, "Action sheet selection");
            (pending.on_select)(index);
        }
    }

    /// Close the sheet as if cancel was picked.
    pub fn cancel(&self) {
        let index = self
            .0
            .borrow()
            .as_ref()
            .map(|pending| pending.request.cancel_button_index);
        if let Some(index) = index {
            self.select(index);
        }
    }
}

impl ActionSheetHost for ActionSheetSlot {
    fn show(&self, request: ActionSheetRequest, on_select: OnSelect) {
        let replaced = self
            .0
            .borrow_mut()
            .replace(PendingSheet { request, on_select });
        if replaced.is_some() {
            tracing::warn!("Replacing an action sheet that was still open");
        }
    }
}

/// Picker invoked with the chosen index.
pub type OnPick = Rc<dyn Fn(usize, &mut Window, &mut App)>;

/// Bottom-anchored list of actions with a separated cancel entry.
#[derive(IntoElement)]
pub struct ActionSheetOverlay {
    request: ActionSheetRequest,
    colors: ThemeColors,
    on_pick: OnPick,
}

impl ActionSheetOverlay {
    pub fn new(request: ActionSheetRequest, colors: ThemeColors, on_pick: OnPick) -> Self {
        Self {
            request,
            colors,
            on_pick,
        }
    }
}

impl RenderOnce for ActionSheetOverlay {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let cancel_index = self.request.cancel_button_index;

        let backdrop_pick = self.on_pick.clone();
        let entries = self
            .request
            .options
            .into_iter()
            .enumerate()
            .map(move |(index, title)| {
                let on_pick = self.on_pick.clone();
                let is_cancel = index == cancel_index;
                div()
                    .id(SharedString::from(format!("action-sheet-{}", index)))
                    .w_full()
                    .px(px(16.0))
                    .py(px(12.0))
                    .flex()
                    .justify_center()
                    .bg(colors.surface_elevated)
                    .text_color(colors.accent)
                    .cursor_pointer()
                    .hover(move |style| style.bg(colors.surface))
                    .when(is_cancel, |this| {
                        this.mt(px(8.0)).rounded(px(8.0)).font_weight(FontWeight::SEMIBOLD)
                    })
                    .on_click(move |_: &ClickEvent, window, cx| {
                        cx.stop_propagation();
                        on_pick(index, window, cx);
                    })
                    .child(SharedString::from(title))
            });

        div()
            .id("action-sheet-backdrop")
            .absolute()
            .inset_0()
            .bg(colors.scrim)
            .flex()
            .flex_col()
            .justify_end()
            .p(px(8.0))
            .on_click(move |_: &ClickEvent, window, cx| backdrop_pick(cancel_index, window, cx))
            .child(div().w_full().flex().flex_col().children(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn request() -> ActionSheetRequest {
        ActionSheetRequest::new(vec!["Download image".into(), "Cancel".into()]).unwrap()
    }

    #[test]
    fn show_parks_request_until_selection() {
        let slot = ActionSheetSlot::new();
        let picked = Rc::new(Cell::new(None));
        let sink = picked.clone();

        slot.show(request(), Box::new(move |index| sink.set(Some(index))));
        assert!(slot.is_open());
        assert_eq!(slot.request(), Some(request()));

        slot.select(0);
        assert!(!slot.is_open());
        assert_eq!(picked.get(), Some(0));
    }

    #[test]
    fn cancel_reports_cancel_index() {
        let slot = ActionSheetSlot::new();
        let picked = Rc::new(Cell::new(None));
        let sink = picked.clone();

        slot.show(request(), Box::new(move |index| sink.set(Some(index))));
        slot.cancel();
        assert_eq!(picked.get(), Some(1));
    }

    #[test]
    fn select_without_sheet_is_noop() {
        let slot = ActionSheetSlot::new();
        slot.select(3);
        slot.cancel();
        assert!(!slot.is_open());
    }

    #[test]
    fn callback_may_reopen_slot() {
        let slot = ActionSheetSlot::new();
        let inner = slot.clone();
        slot.show(
            request(),
            Box::new(move |_| inner.show(request(), Box::new(|_| {}))),
        );

        slot.select(0);
        assert!(slot.is_open());
    }
}

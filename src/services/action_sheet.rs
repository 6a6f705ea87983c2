//! Action sheet contracts.
//!
//! A host presents a list of labels and later reports the chosen index. The
//! last entry is always the cancel button.

use crate::domain::Auth;

/// Label of the cancel entry.
pub const CANCEL: &str = "Cancel";

/// Actions offered on a lightbox image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAction {
    Download,
    CopyLink,
}

impl ImageAction {
    /// All actions, in menu order.
    pub const ALL: [ImageAction; 2] = [ImageAction::Download, ImageAction::CopyLink];

    /// Menu label.
    pub fn title(&self) -> &'static str {
        match self {
            ImageAction::Download => "Download image",
            ImageAction::CopyLink => "Copy link to image",
        }
    }

    /// Look up an action by its menu label.
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.title() == title)
    }
}

/// Build the lightbox menu: every image action followed by cancel.
pub fn construct_action_sheet_buttons() -> Vec<String> {
    ImageAction::ALL
        .iter()
        .map(|action| action.title().to_string())
        .chain(std::iter::once(CANCEL.to_string()))
        .collect()
}

/// What a host is asked to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSheetRequest {
    pub options: Vec<String>,
    pub cancel_button_index: usize,
}

impl ActionSheetRequest {
    /// Request with the last option as cancel. `None` for an empty list.
    pub fn new(options: Vec<String>) -> Option<Self> {
        let cancel_button_index = options.len().checked_sub(1)?;
        Some(Self {
            options,
            cancel_button_index,
        })
    }

    /// Whether `index` is the cancel entry.
    pub fn is_cancel(&self, index: usize) -> bool {
        index == self.cancel_button_index
    }

    /// Label at `index`.
    pub fn title(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

/// Selection callback handed to a host.
pub type OnSelect = Box<dyn FnOnce(usize)>;

/// Presents action sheets.
#[cfg_attr(test, mockall::automock)]
pub trait ActionSheetHost {
    /// Show `request`; call `on_select` with the chosen index once the user
    /// picks an entry.
    fn show(&self, request: ActionSheetRequest, on_select: OnSelect);
}

/// Runs a selected action.
#[cfg_attr(test, mockall::automock)]
pub trait ActionExecutor {
    fn execute(&self, title: &str, src: &str, auth: &Auth);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buttons_end_with_cancel() {
        let buttons = construct_action_sheet_buttons();
        assert_eq!(
            buttons,
            vec!["Download image", "Copy link to image", "Cancel"]
        );
    }

    #[test]
    fn cancel_index_is_last_index() {
        for len in 1..6 {
            let options: Vec<String> = (0..len).map(|i| format!("option {}", i)).collect();
            let request = ActionSheetRequest::new(options).unwrap();
            assert_eq!(request.cancel_button_index, len - 1);
            assert!(request.is_cancel(len - 1));
        }
    }

    #[test]
    fn empty_options_have_no_request() {
        assert_eq!(ActionSheetRequest::new(Vec::new()), None);
    }

    #[test]
    fn titles_round_trip_to_actions() {
        for action in ImageAction::ALL {
            assert_eq!(ImageAction::from_title(action.title()), Some(action));
        }
        assert_eq!(ImageAction::from_title(CANCEL), None);
    }
}

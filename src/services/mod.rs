//! Services the UI components delegate to.
//!
//! - `resource`: authenticated image and avatar URLs
//! - `action_sheet`: action sheet request/host/executor contracts
//! - `fetch`: authenticated image fetching
//! - `image_actions`: default executor (download, copy link)
//! - `navigation`: back navigation
//! - `format`: timestamp formatting

pub mod action_sheet;
pub mod fetch;
pub mod format;
pub mod image_actions;
pub mod navigation;
pub mod resource;

pub use action_sheet::{
    construct_action_sheet_buttons, ActionExecutor, ActionSheetHost, ActionSheetRequest,
    ImageAction, OnSelect,
};
pub use fetch::{fetch_image, request_for, FetchedImage, ImageFetcher};
pub use format::format_timestamp;
pub use image_actions::{download_image, ClipboardQueue, ImageActions};
pub use navigation::{CloseWindow, Navigator};
pub use resource::{auth_header, avatar_url, get_resource, ImageResource};

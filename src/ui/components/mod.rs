//! Reusable UI components.
//!
//! Components take their theme and collaborators at construction and keep
//! any window-independent logic in plain structs so it can be tested alone.

pub mod action_sheet;
pub mod slide;
pub mod themed_input;

pub use action_sheet::{ActionSheetOverlay, ActionSheetSlot, OnPick};
pub use slide::{Movement, SlideAnimation};
pub use themed_input::{
    EventCallback, InputProps, InputRef, InputState, PassThrough, TextCallback, ThemedInput,
};

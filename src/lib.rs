//! Courier: chat client UI pieces built on gpui.
//!
//! - `domain`: message and session records received from the server
//! - `i18n`: localizable text and translation catalogs
//! - `services`: resource resolution, action sheet plumbing, downloads
//! - `ui`: theme, styling, and the input and lightbox components
//! - `app`: window bootstrap and key bindings

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod services;
pub mod ui;

pub use error::{Error, Result};

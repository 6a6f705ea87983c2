//! Crate error type.

use std::path::PathBuf;

/// Errors surfaced by courier services.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("no translation catalog for locale {locale} in {}", .dir.display())]
    Catalog { locale: String, dir: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

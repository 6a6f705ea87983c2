use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use courier::app::{App, LightboxFixture};
use courier::config::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("courier=info")),
        )
        .init();

    let fixture_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: courier <lightbox.json>")?;

    let config = Config::load().context("loading config")?;
    let fixture = LightboxFixture::load(&fixture_path)
        .with_context(|| format!("loading {}", fixture_path.display()))?;

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    App::run(config, fixture, runtime.handle().clone())
}

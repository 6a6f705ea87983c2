//! Default executor for lightbox image actions.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tokio::runtime::Handle;

use crate::domain::Auth;
use crate::error::Result;
use crate::services::action_sheet::{ActionExecutor, ImageAction};
use crate::services::fetch::fetch_image;
use crate::services::resource::{get_resource, ImageResource};

/// Links waiting to be written to the system clipboard.
///
/// The executor has no window context, so the view that owns the action sheet
/// drains this after each selection.
#[derive(Clone, Default)]
pub struct ClipboardQueue(Rc<RefCell<Vec<String>>>);

impl ClipboardQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, text: String) {
        self.0.borrow_mut().push(text);
    }

    /// Take everything queued, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Downloads images to disk and copies links to the clipboard.
pub struct ImageActions {
    runtime: Handle,
    client: reqwest::Client,
    download_dir: PathBuf,
    clipboard: ClipboardQueue,
}

impl ImageActions {
    pub fn new(runtime: Handle, download_dir: PathBuf, clipboard: ClipboardQueue) -> Self {
        Self {
            runtime,
            client: reqwest::Client::new(),
            download_dir,
            clipboard,
        }
    }

    fn download(&self, resource: ImageResource) {
        let client = self.client.clone();
        let dir = self.download_dir.clone();
        self.runtime.spawn(async move {
            match download_image(&client, &resource, &dir).await {
                Ok(path) => tracing::info!(path = %path.display(), "Image downloaded"),
                Err(e) => tracing::error!(url = %resource.uri, "Image download failed: {}", e),
            }
        });
    }
}

impl ActionExecutor for ImageActions {
    fn execute(&self, title: &str, src: &str, auth: &Auth) {
        let Some(action) = ImageAction::from_title(title) else {
            tracing::warn!(title, "Unknown lightbox action");
            return;
        };

        let resource = match get_resource(src, auth) {
            Ok(resource) => resource,
            Err(e) => {
                tracing::error!(src, "Cannot resolve image source: {}", e);
                return;
            }
        };

        tracing::info!(action = action.title(), url = %resource.uri, "Executing lightbox action");
        match action {
            ImageAction::Download => self.download(resource),
            ImageAction::CopyLink => self.clipboard.push(resource.uri.to_string()),
        }
    }
}

/// Fetch `resource` and write it into `dir` under a name that does not
/// clobber existing files.
pub async fn download_image(
    client: &reqwest::Client,
    resource: &ImageResource,
    dir: &Path,
) -> Result<PathBuf> {
    let image = fetch_image(client, resource).await?;

    tokio::fs::create_dir_all(dir).await?;
    let path = unique_path(dir, &file_name_for(resource)).await?;
    tokio::fs::write(&path, &image.bytes).await?;
    Ok(path)
}

/// Last path segment of the resource, or `image` when there is none.
fn file_name_for(resource: &ImageResource) -> String {
    resource
        .uri
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(String::from)
        .unwrap_or_else(|| "image".to_string())
}

/// `dir/name`, or `dir/stem (n).ext` for the first free `n`.
async fn unique_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let candidate = dir.join(name);
    if !tokio::fs::try_exists(&candidate).await? {
        return Ok(candidate);
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    let mut n = 1;
    loop {
        let file = match ext {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        let candidate = dir.join(file);
        if !tokio::fs::try_exists(&candidate).await? {
            return Ok(candidate);
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn resource(url: &str) -> ImageResource {
        ImageResource {
            uri: Url::parse(url).unwrap(),
            headers: Vec::new(),
        }
    }

    fn auth() -> Auth {
        Auth {
            realm: Url::parse("https://chat.example.com").unwrap(),
            email: "me@example.com".into(),
            api_key: "key".into(),
        }
    }

    #[test]
    fn file_name_from_last_segment() {
        assert_eq!(
            file_name_for(&resource("https://chat.example.com/user_uploads/2/cat.png")),
            "cat.png"
        );
        assert_eq!(file_name_for(&resource("https://chat.example.com/")), "image");
    }

    #[test]
    fn unique_path_skips_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cat.png"), b"x").unwrap();
        std::fs::write(dir.path().join("cat (1).png"), b"x").unwrap();

        let path = tokio_test::block_on(unique_path(dir.path(), "cat.png")).unwrap();
        assert_eq!(path, dir.path().join("cat (2).png"));

        let fresh = tokio_test::block_on(unique_path(dir.path(), "dog")).unwrap();
        assert_eq!(fresh, dir.path().join("dog"));
    }

    #[test]
    fn copy_link_sends_resolved_url_to_clipboard() {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let clipboard = ClipboardQueue::new();
        let actions = ImageActions::new(
            runtime.handle().clone(),
            PathBuf::from("."),
            clipboard.clone(),
        );

        actions.execute(
            ImageAction::CopyLink.title(),
            "/user_uploads/cat.png",
            &auth(),
        );
        actions.execute("Cancel", "/user_uploads/cat.png", &auth());

        assert_eq!(
            clipboard.drain(),
            vec!["https://chat.example.com/user_uploads/cat.png".to_string()]
        );
        assert!(clipboard.drain().is_empty());
    }
}

//! Authenticated image fetching.
//!
//! gpui's own image loader issues bare GETs, so realm images are fetched here
//! with their headers and handed to the view as bytes.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::services::resource::ImageResource;

/// Image payload and the content type the server reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// GET request for `resource` carrying its headers.
pub fn request_for(client: &reqwest::Client, resource: &ImageResource) -> reqwest::RequestBuilder {
    resource
        .headers
        .iter()
        .fold(client.get(resource.uri.clone()), |request, (name, value)| {
            request.header(name.as_str(), value.as_str())
        })
}

/// Fetch `resource` into memory.
pub async fn fetch_image(client: &reqwest::Client, resource: &ImageResource) -> Result<FetchedImage> {
    let response = request_for(client, resource)
        .send()
        .await?
        .error_for_status()?;
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    let bytes = response.bytes().await?;

    tracing::debug!(url = %resource.uri, len = bytes.len(), "Fetched image");
    Ok(FetchedImage {
        bytes,
        content_type,
    })
}

/// Runs image fetches on the tokio runtime.
#[derive(Clone)]
pub struct ImageFetcher {
    runtime: Handle,
    client: reqwest::Client,
}

impl ImageFetcher {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            client: reqwest::Client::new(),
        }
    }

    /// Start fetching `resource`; await the handle for the result.
    pub fn spawn(&self, resource: ImageResource) -> JoinHandle<Result<FetchedImage>> {
        let client = self.client.clone();
        self.runtime
            .spawn(async move { fetch_image(&client, &resource).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Auth;
    use crate::services::resource::get_resource;
    use pretty_assertions::assert_eq;
    use reqwest::header::AUTHORIZATION;
    use url::Url;

    fn auth() -> Auth {
        Auth {
            realm: Url::parse("https://chat.example.com").unwrap(),
            email: "me@example.com".into(),
            api_key: "key".into(),
        }
    }

    #[test]
    fn realm_request_carries_authorization() {
        let resource = get_resource("/user_uploads/2/ab/cat.png", &auth()).unwrap();
        let request = request_for(&reqwest::Client::new(), &resource)
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://chat.example.com/user_uploads/2/ab/cat.png"
        );
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Basic bWVAZXhhbXBsZS5jb206a2V5"
        );
    }

    #[test]
    fn foreign_request_has_no_authorization() {
        let resource = get_resource("https://images.example.org/cat.png", &auth()).unwrap();
        let request = request_for(&reqwest::Client::new(), &resource)
            .build()
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}

//! Image uploads.
//!
//! Images go to a separate host ([`ReadmeConfig::image_api_url`]) rather than
//! the API base URL. Only PNG, JPEG and GIF content is accepted, and the
//! check runs before anything is sent.
//!
//! [`ReadmeConfig::image_api_url`]: crate::ReadmeConfig::image_api_url

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiRequest, HttpClient, HttpMethod, ReadmeResponse};
use crate::resources::{MultipartForm, ResourceError};

/// Path of the upload endpoint on the image host.
pub const IMAGE_UPLOAD_PATH: &str = "/image-upload";

const DEFAULT_FILENAME: &str = "image";

/// An uploaded image.
///
/// The API answers with a positional array
/// `[url, filename, width, height, color]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, i64, i64, String)")]
pub struct Image {
    /// Public URL of the uploaded image.
    pub url: String,
    /// Stored file name.
    pub filename: String,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Dominant color as a hex string.
    pub color: String,
}

impl From<(String, String, i64, i64, String)> for Image {
    fn from((url, filename, width, height, color): (String, String, i64, i64, String)) -> Self {
        Self {
            url,
            filename,
            width,
            height,
            color,
        }
    }
}

/// Returns the MIME type of PNG, JPEG or GIF content.
#[must_use]
pub fn detect_image_type(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if data.starts_with(b"\xff\xd8\xff") {
        Some("image/jpeg")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else {
        None
    }
}

fn describe_content(data: &[u8]) -> &'static str {
    if std::str::from_utf8(data).is_ok() {
        "text/plain; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

/// Operations on images.
#[allow(async_fn_in_trait)]
pub trait ImageService {
    /// Uploads an image. `filename` defaults to `image`; directories are
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidImage`] if the content is not PNG,
    /// JPEG or GIF.
    async fn upload(
        &self,
        source: &[u8],
        filename: Option<&str>,
    ) -> Result<ReadmeResponse<Image>, ResourceError>;
}

/// Client for image uploads.
#[derive(Clone, Copy, Debug)]
pub struct ImageClient<'a> {
    client: &'a HttpClient,
}

impl<'a> ImageClient<'a> {
    /// Creates an image client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

// Verify ImageClient implements ImageService at compile time
const _: fn() = || {
    fn assert_service<T: ImageService>() {}
    assert_service::<ImageClient<'static>>();
};

impl ImageService for ImageClient<'_> {
    async fn upload(
        &self,
        source: &[u8],
        filename: Option<&str>,
    ) -> Result<ReadmeResponse<Image>, ResourceError> {
        let Some(content_type) = detect_image_type(source) else {
            return Err(ResourceError::InvalidImage {
                detected: describe_content(source).to_string(),
            });
        };

        let filename = filename
            .and_then(|f| Path::new(f).file_name())
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_FILENAME);

        let (payload, form_type) = MultipartForm::new()
            .text("name", "image")
            .text("filename", filename)
            .file("data", filename, content_type, source)
            .finish();

        let url = format!("{}{IMAGE_UPLOAD_PATH}", self.client.image_api_url());
        let request = ApiRequest::builder_for_url(HttpMethod::Post, url)
            .header("Content-Type", form_type)
            .payload(payload)
            .build()?;
        Ok(self.client.request_json(&request).await?)
    }
}

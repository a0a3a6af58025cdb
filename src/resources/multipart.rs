//! `multipart/form-data` body construction for upload endpoints.
//!
//! The request engine treats an upload as an opaque byte payload with a
//! `Content-Type` header; this module produces both.
//!
//! # Example
//!
//! ```rust
//! use readme_api::resources::MultipartForm;
//!
//! let (body, content_type) = MultipartForm::with_boundary("XYZ")
//!     .text("name", "image")
//!     .file("data", "logo.png", "image/png", b"\x89PNG")
//!     .finish();
//!
//! assert_eq!(content_type, "multipart/form-data; boundary=XYZ");
//! assert!(body.starts_with(b"--XYZ\r\n"));
//! assert!(body.ends_with(b"--XYZ--\r\n"));
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;

const BOUNDARY_LENGTH: usize = 30;

/// A `multipart/form-data` body under construction.
#[derive(Clone, Debug)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    /// Creates an empty form with a random boundary.
    #[must_use]
    pub fn new() -> Self {
        let boundary: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(BOUNDARY_LENGTH)
            .map(char::from)
            .collect();
        Self::with_boundary(boundary)
    }

    /// Creates an empty form with a fixed boundary.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    /// Returns the boundary.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.open_part();
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", escape(name))
                .as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Appends a file part.
    #[must_use]
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.open_part();
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {content_type}\r\n\r\n",
                escape(name),
                escape(filename),
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Closes the form and returns the body and its `Content-Type` value.
    #[must_use]
    pub fn finish(mut self) -> (Vec<u8>, String) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        let content_type = format!("multipart/form-data; boundary={}", self.boundary);
        (self.body, content_type)
    }

    fn open_part(&mut self) {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_boundary() {
        let a = MultipartForm::new();
        let b = MultipartForm::new();

        assert_eq!(a.boundary().len(), BOUNDARY_LENGTH);
        assert!(a.boundary().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a.boundary(), b.boundary());
    }

    #[test]
    fn test_body_layout() {
        let (body, content_type) = MultipartForm::with_boundary("b0undary")
            .text("name", "image")
            .file("spec", "spec.json", "application/json", br#"{"openapi":"3.0.0"}"#)
            .finish();

        let expected = concat!(
            "--b0undary\r\n",
            "Content-Disposition: form-data; name=\"name\"\r\n\r\n",
            "image\r\n",
            "--b0undary\r\n",
            "Content-Disposition: form-data; name=\"spec\"; filename=\"spec.json\"\r\n",
            "Content-Type: application/json\r\n\r\n",
            "{\"openapi\":\"3.0.0\"}\r\n",
            "--b0undary--\r\n",
        );
        assert_eq!(String::from_utf8(body).unwrap(), expected);
        assert_eq!(content_type, "multipart/form-data; boundary=b0undary");
    }

    #[test]
    fn test_quotes_in_filenames_are_escaped() {
        let (body, _) = MultipartForm::with_boundary("b")
            .file("data", "my \"logo\".png", "image/png", b"x")
            .finish();

        let text = String::from_utf8(body).unwrap();
        assert!(text.contains(r#"filename="my \"logo\".png""#));
    }
}

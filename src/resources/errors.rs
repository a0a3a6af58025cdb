//! Resource-level error types.
//!
//! This module contains the error type returned by resource operations. It
//! extends [`HttpError`] with local pre-flight validation failures and ID
//! lookups that found no match.
//!
//! # Example
//!
//! ```rust,ignore
//! use readme_api::ResourceError;
//!
//! match client.doc().get("id:63a77777f52b9f006b6bf212", None).await {
//!     Ok(doc) => println!("Found: {}", doc.title),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("no {resource} matching {id}");
//!     }
//!     Err(ResourceError::Validation { message, .. }) => println!("{message}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{ApiErrorResponse, HttpError, InvalidHttpRequestError, PaginationError};

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A local pre-flight check failed. No request was sent.
    #[error("{message}")]
    Validation {
        /// The resource being validated.
        resource: &'static str,
        /// What was wrong with the input.
        message: String,
    },

    /// An ID lookup found no matching resource.
    #[error("no {resource} found matching id {id}")]
    NotFound {
        /// The resource type.
        resource: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// Uploaded image content is not PNG, JPEG or GIF.
    #[error("invalid image type: {detected}")]
    InvalidImage {
        /// The detected content type.
        detected: String,
    },

    /// The request payload could not be encoded.
    #[error("unable to encode request payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Listing a resource aborted part way.
    #[error("unable to retrieve {resource}: {source}")]
    Retrieve {
        /// The resource being listed.
        resource: &'static str,
        /// The error that aborted the walk.
        source: HttpError,
    },

    /// An HTTP-level error.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    pub(crate) fn validation(resource: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            resource,
            message: message.into(),
        }
    }

    /// Returns the API error payload, if the API reported an error.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiErrorResponse> {
        match self {
            Self::Http(e) | Self::Retrieve { source: e, .. } => e.api_error(),
            _ => None,
        }
    }
}

impl From<InvalidHttpRequestError> for ResourceError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl<T> From<PaginationError<T>> for ResourceError {
    fn from(error: PaginationError<T>) -> Self {
        Self::Retrieve {
            resource: error.resource,
            source: error.source,
        }
    }
}

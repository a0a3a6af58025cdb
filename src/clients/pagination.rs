//! Page-based pagination over ReadMe list endpoints.
//!
//! List endpoints take `perPage` and `page` query parameters and report
//! continuation through two response headers:
//!
//! - `link`: comma-separated `<url>; rel="name"` segments. A `next` segment
//!   whose URL is the `<>` placeholder means there are no further results.
//! - `x-total-count`: the total number of results across all pages.
//!
//! [`HttpClient::paginate`] walks pages one at a time, in order, and
//! concatenates each page's array into one collection. When the link header
//! claims a next page, the total count is authoritative: the walk stops once
//! `page >= total / per_page`.
//!
//! # Example
//!
//! ```rust
//! use readme_api::has_next_page;
//!
//! let link = r#"</categories?page=2>; rel="next", <>; rel="prev", <>; rel="last""#;
//! assert!(has_next_page(link).unwrap());
//!
//! let last = r#"<>; rel="next", </categories?page=1>; rel="prev", <>; rel="last""#;
//! assert!(!has_next_page(last).unwrap());
//!
//! assert!(has_next_page("garbage").is_err());
//! ```

use std::fmt;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{ApiRequest, RequestTarget};
use crate::clients::http_response::{ApiResponse, ReadmeResponse};

/// Page size used when none is requested. This is also the API's maximum.
pub const DEFAULT_PER_PAGE: u32 = 100;

const NEXT_REL: &str = r#"rel="next""#;
const EMPTY_LINK: &str = "<>";

/// Reports whether a `link` header advertises a next page.
///
/// # Errors
///
/// Returns [`HttpError::InvalidLinkHeader`] if the header has fewer than
/// three segments or a segment does not split into exactly two parts on `;`.
pub fn has_next_page(links: &str) -> Result<bool, HttpError> {
    let invalid = || HttpError::InvalidLinkHeader {
        header: links.to_string(),
    };

    let segments: Vec<&str> = links.split(',').collect();
    if segments.len() < 3 {
        return Err(invalid());
    }

    for segment in segments {
        let parts: Vec<&str> = segment.split(';').collect();
        let [url, rel] = parts.as_slice() else {
            return Err(invalid());
        };

        let url = url.trim();
        if rel.trim() == NEXT_REL && !url.is_empty() && url != EMPTY_LINK {
            return Ok(true);
        }
    }

    Ok(false)
}

/// One fetched page of a list endpoint.
#[derive(Clone, Debug)]
pub struct Page<T> {
    /// The results on this page, in received order.
    pub items: Vec<T>,
    /// The envelope of the page request.
    pub response: ApiResponse,
    /// Whether the walk should continue past this page.
    pub has_next_page: bool,
}

/// Error returned when a paginated walk aborts.
///
/// The results gathered before the failing page are kept in
/// [`items`](Self::items) so callers can decide whether to use them.
pub struct PaginationError<T> {
    /// The resource being listed (e.g. `"categories"`).
    pub resource: &'static str,
    /// The error that aborted the walk.
    pub source: HttpError,
    /// Results gathered from the pages fetched before the failure.
    pub items: Vec<T>,
    /// The envelope of the last successful page, if any.
    pub response: Option<ApiResponse>,
}

impl<T> PaginationError<T> {
    /// Creates an error for a walk that failed before its first page.
    pub(crate) const fn aborted(resource: &'static str, source: HttpError) -> Self {
        Self {
            resource,
            source,
            items: Vec::new(),
            response: None,
        }
    }

    /// Consumes the error and returns the partial results.
    #[must_use]
    pub fn into_partial(self) -> Vec<T> {
        self.items
    }
}

impl<T> fmt::Debug for PaginationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationError")
            .field("resource", &self.resource)
            .field("source", &self.source)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PaginationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to retrieve {}: {}", self.resource, self.source)
    }
}

impl<T> std::error::Error for PaginationError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl HttpClient {
    /// Fetches one page of a list endpoint and decides whether to continue.
    ///
    /// The endpoint is rewritten with `perPage` and `page` query parameters;
    /// the original request is left untouched.
    ///
    /// # Errors
    ///
    /// Returns any error from [`execute`](Self::execute) or the body decode,
    /// [`HttpError::InvalidLinkHeader`] if the `link` header is malformed or
    /// missing, and [`HttpError::InvalidTotalCount`] if a next page is
    /// advertised but `x-total-count` is not an integer.
    pub async fn paginated_request<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        page: u32,
    ) -> Result<Page<T>, HttpError> {
        let per_page = self
            .effective_options(&request.options)
            .per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PER_PAGE);

        let page_request = match &request.target {
            RequestTarget::Endpoint(endpoint) => {
                let separator = if endpoint.contains('?') { '&' } else { '?' };
                request.with_endpoint(format!(
                    "{endpoint}{separator}perPage={per_page}&page={page}"
                ))
            }
            RequestTarget::Url(_) => request.clone(),
        };

        tracing::debug!(page, per_page, "Fetching page");

        let response = self.execute(&page_request).await?;
        let items: Vec<T> = response.json()?;

        if !has_next_page(response.link().unwrap_or_default())? {
            return Ok(Page {
                items,
                response,
                has_next_page: false,
            });
        }

        let raw_total = response.total_count().unwrap_or_default();
        let total: u64 = raw_total
            .trim()
            .parse()
            .map_err(|source| HttpError::InvalidTotalCount {
                value: raw_total.to_string(),
                source,
            })?;

        // The count header wins over the link header's claim.
        let has_next_page = u64::from(page) < total / u64::from(per_page);
        if !has_next_page {
            tracing::debug!(
                page,
                per_page,
                total,
                "Link header advertises a next page beyond the total count; stopping"
            );
        }

        Ok(Page {
            items,
            response,
            has_next_page,
        })
    }

    /// Walks every page of a list endpoint and concatenates the results.
    ///
    /// The walk starts at `options.page` (default 1) and fetches pages
    /// sequentially. `resource` names the listed resource in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] wrapping the first error encountered,
    /// together with the results gathered so far.
    pub async fn paginate<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        resource: &'static str,
    ) -> Result<ReadmeResponse<Vec<T>>, PaginationError<T>> {
        let mut page = self
            .effective_options(&request.options)
            .page
            .filter(|p| *p > 0)
            .unwrap_or(1);
        let mut items: Vec<T> = Vec::new();
        let mut last_response: Option<ApiResponse> = None;

        loop {
            let current = match self.paginated_request::<T>(request, page).await {
                Ok(current) => current,
                Err(source) => {
                    return Err(PaginationError {
                        resource,
                        source,
                        items,
                        response: last_response,
                    })
                }
            };

            items.extend(current.items);
            if !current.has_next_page {
                tracing::debug!(resource, pages = page, count = items.len(), "Pagination complete");
                return Ok(ReadmeResponse::new(items, current.response));
            }

            last_response = Some(current.response);
            page += 1;
        }
    }
}

//! Identifier parsing for slugs, object IDs and registry UUIDs.
//!
//! Operations that fetch a single resource accept either a human slug (or a
//! semantic version, or an inline definition) or a prefixed platform
//! identifier:
//!
//! - `id:<token>`: an object ID, 20 to 24 alphanumeric characters
//! - `uuid:<token>`: an API registry UUID, 10 to 24 alphanumeric characters
//!
//! Anything that does not match one of those shapes exactly is treated as a
//! plain value. Parsing never fails; it only classifies.
//!
//! # Example
//!
//! ```rust
//! use readme_api::identifiers::{parse_id, Identifier};
//!
//! assert_eq!(parse_id("id:63a77777f52b9f006b6bf21"), Some("63a77777f52b9f006b6bf21"));
//! assert_eq!(parse_id("notanid"), None);
//!
//! assert_eq!(Identifier::parse("getting-started"), Identifier::Plain("getting-started"));
//! assert_eq!(Identifier::parse("uuid:abc123def45"), Identifier::Uuid("abc123def45"));
//! ```

/// Prefix of object ID references.
pub const ID_PREFIX: &str = "id";

/// Prefix of API registry UUID references.
pub const UUID_PREFIX: &str = "uuid";

/// Accepted token lengths for object IDs.
pub const ID_LENGTH: (usize, usize) = (20, 24);

// The UUID length is undocumented and varies between registry entries.
/// Accepted token lengths for API registry UUIDs.
pub const UUID_LENGTH: (usize, usize) = (10, 24);

/// A caller-supplied identifier, classified by shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// A slug, semantic version or raw definition, used as-is.
    Plain(&'a str),
    /// An object ID reference (`id:<token>`), holding the token.
    Id(&'a str),
    /// An API registry UUID reference (`uuid:<token>`), holding the token.
    Uuid(&'a str),
}

impl<'a> Identifier<'a> {
    /// Classifies `value` as an object ID, a registry UUID or a plain value.
    #[must_use]
    pub fn parse(value: &'a str) -> Self {
        if let Some(token) = parse_id(value) {
            return Self::Id(token);
        }
        if let Some(token) = parse_uuid(value) {
            return Self::Uuid(token);
        }
        Self::Plain(value)
    }

    /// Returns the plain value or extracted token.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Plain(value) | Self::Id(value) | Self::Uuid(value) => value,
        }
    }
}

/// Checks whether `value` is `<prefix>:<token>` with an alphanumeric token
/// whose length falls within `min_len..=max_len`.
///
/// Returns the token on a match and `None` otherwise.
///
/// # Example
///
/// ```rust
/// use readme_api::identifiers::validate_id;
///
/// assert_eq!(validate_id("id:abcdefghij0123456789", "id", 20, 24), Some("abcdefghij0123456789"));
/// assert_eq!(validate_id("id:short", "id", 20, 24), None);
/// assert_eq!(validate_id("uuid:abcdefghij", "id", 20, 24), None);
/// ```
#[must_use]
pub fn validate_id<'a>(
    value: &'a str,
    prefix: &str,
    min_len: usize,
    max_len: usize,
) -> Option<&'a str> {
    let token = value.strip_prefix(prefix)?.strip_prefix(':')?;

    if token.len() < min_len || token.len() > max_len {
        return None;
    }

    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric())
        .then_some(token)
}

/// Parses an object ID reference (`id:<token>`).
#[must_use]
pub fn parse_id(value: &str) -> Option<&str> {
    validate_id(value, ID_PREFIX, ID_LENGTH.0, ID_LENGTH.1)
}

/// Parses an API registry UUID reference (`uuid:<token>`).
#[must_use]
pub fn parse_uuid(value: &str) -> Option<&str> {
    validate_id(value, UUID_PREFIX, UUID_LENGTH.0, UUID_LENGTH.1)
}

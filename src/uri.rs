use crate::{
    build::{state::UriStart, Builder},
    error::{ParseError, ParseErrorKind},
    grammar::{self, full},
};
use alloc::{borrow::ToOwned, string::String};
use core::{borrow::Borrow, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A [URI reference] defined in RFC 3986, i.e., either a URI or a relative reference.
///
/// A `Uri` is an owned string that is known to match the `URI-reference`
/// rule. It is obtained by [parsing] or [building] and is not decomposed
/// into its components.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
/// [parsing]: Self::parse
/// [building]: Self::builder
///
/// # Examples
///
/// ```
/// use uri_grammar::{ParseErrorKind, Uri};
///
/// let uri = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose")?;
/// assert_eq!(uri, "foo://user@example.com:8042/over/there?name=ferret#nose");
///
/// let uri: Uri = "../a/b?c".parse()?;
/// assert_eq!(uri.as_str(), "../a/b?c");
///
/// let err = Uri::parse("http://[::1/").unwrap_err();
/// assert_eq!(err.index(), 7);
/// assert_eq!(err.kind(), ParseErrorKind::InvalidIpLiteral);
/// # Ok::<_, uri_grammar::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uri {
    val: String,
}

impl Uri {
    /// Parses a URI reference from a string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string does not match the `URI-reference` rule.
    /// The error index points to the first byte the grammar could not consume.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        validate(s.as_bytes())?;
        Ok(Self { val: s.to_owned() })
    }

    /// Creates a new builder for URI reference.
    #[inline]
    pub fn builder() -> Builder<UriStart> {
        Builder::new()
    }

    pub(crate) fn from_built(val: String) -> Self {
        debug_assert!(validate(val.as_bytes()).is_ok(), "built an invalid URI reference: {val}");
        Self { val }
    }

    /// Returns the URI reference as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.val
    }

    /// Consumes the `Uri` and yields the underlying [`String`].
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.val
    }

    /// Checks whether the URI reference has a scheme, i.e., is a URI
    /// rather than a relative reference.
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        full(grammar::uri, self.val.as_bytes())
    }
}

fn validate(bytes: &[u8]) -> Result<(), ParseError> {
    if full(grammar::uri, bytes) || full(grammar::relative_ref, bytes) {
        return Ok(());
    }

    let consumed = |m: grammar::Match| m.consumed().unwrap_or(0);
    let index = consumed(grammar::uri(bytes)).max(consumed(grammar::relative_ref(bytes)));

    let kind = match bytes.get(index) {
        Some(b'%') => ParseErrorKind::InvalidOctet,
        Some(b'[') => ParseErrorKind::InvalidIpLiteral,
        _ => ParseErrorKind::UnexpectedChar,
    };
    tracing::trace!(index, ?kind, "input is not a URI reference");
    Err(ParseError { index, kind })
}

impl AsRef<str> for Uri {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Uri {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Uri {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Uri {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Uri> for str {
    #[inline]
    fn eq(&self, other: &Uri) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Uri> for &str {
    #[inline]
    fn eq(&self, other: &Uri) -> bool {
        *self == other.as_str()
    }
}

impl From<Uri> for String {
    /// Equivalent to [`into_string`](Uri::into_string).
    #[inline]
    fn from(value: Uri) -> String {
        value.val
    }
}

impl TryFrom<String> for Uri {
    type Error = ParseError;

    /// Equivalent to [`parse`](Uri::parse), but reuses the allocation.
    fn try_from(val: String) -> Result<Self, Self::Error> {
        validate(val.as_bytes())?;
        Ok(Self { val })
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    /// Equivalent to [`parse`](Uri::parse).
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uri").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::try_from(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        let err = Uri::parse("a%zz").unwrap_err();
        assert_eq!((err.index(), err.kind()), (1, ParseErrorKind::InvalidOctet));

        let err = Uri::parse("http://a b").unwrap_err();
        assert_eq!((err.index(), err.kind()), (8, ParseErrorKind::UnexpectedChar));

        let err = Uri::parse("//[v1]").unwrap_err();
        assert_eq!((err.index(), err.kind()), (2, ParseErrorKind::InvalidIpLiteral));

        let err = Uri::parse("#\u{fc}").unwrap_err();
        assert_eq!((err.index(), err.kind()), (1, ParseErrorKind::UnexpectedChar));
    }

    #[test]
    fn scheme_presence() {
        assert!(Uri::parse("urn:isbn:0451450523").unwrap().has_scheme());
        assert!(!Uri::parse("//example.com").unwrap().has_scheme());
        assert!(!Uri::parse("").unwrap().has_scheme());
    }

    #[test]
    fn try_from_string() {
        let uri = Uri::try_from(String::from("mailto:a@b")).unwrap();
        assert_eq!(String::from(uri), "mailto:a@b");
        assert!(Uri::try_from(String::from("a b")).is_err());
    }
}

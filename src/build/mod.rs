//! Module for URI reference building.

#![allow(missing_debug_implementations)]

mod imp;
pub(crate) mod state;

use imp::*;
use state::*;

use crate::{
    error::BuildError,
    pct_enc::encoder::{Fragment, Path, Query, Userinfo},
    Uri,
};
use core::marker::PhantomData;

/// A builder for URI reference.
///
/// This struct is created by [`Uri::builder`].
///
/// Components are given either as raw text, which is percent-encoded with
/// the matching [encoder], or as an [`EStr`] slice, which is copied as is.
/// Raw text may be a string slice or a slice of UTF-8, UTF-16 or UTF-32 code
/// units; see [`IntoCodePoints`]. A host given as raw text goes through
/// [`encode_host`].
///
/// [encoder]: crate::pct_enc::encoder
/// [`EStr`]: crate::pct_enc::EStr
/// [`IntoCodePoints`]: crate::utf8::IntoCodePoints
/// [`encode_host`]: crate::encode_host
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use uri_grammar::{pct_enc::{encoder::Path, EStr}, Uri};
///
/// let uri = Uri::builder()
///     .scheme("foo")
///     .authority_with(|b| b.userinfo("user").host("example.com").port(8042))
///     .path(EStr::<Path>::new_or_panic("/over/there"))
///     .query("name=ferret")
///     .fragment("nose")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     uri.as_str(),
///     "foo://user@example.com:8042/over/there?name=ferret#nose"
/// );
/// ```
///
/// Raw text is encoded:
///
/// ```
/// use uri_grammar::Uri;
///
/// let uri = Uri::builder()
///     .scheme("http")
///     .authority_with(|b| b.host("www.żółć.pl"))
///     .path("/a b")
///     .query("q=[x]")
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.as_str(), "http://www.%c5%bc%c3%b3%c5%82%c4%87.pl/a%20b?q=%5bx%5d");
/// ```
///
/// # Constraints
///
/// Typestates are used to avoid misconfigurations,
/// which puts the following constraints:
///
/// - Components must be set from left to right, no repetition allowed.
/// - Setting [`path`] is mandatory before calling [`build`].
/// - Methods [`userinfo`], [`host`], and [`port`] are only available
///   within a call to [`authority_with`].
/// - Setting [`host`] is mandatory within a call to [`authority_with`].
///
/// You may otherwise skip setting optional components
/// ([`scheme`], [`authority_with`], [`userinfo`], [`port`], [`query`], and [`fragment`])
/// with [`advance`] or set them optionally with [`optional`].
///
/// Errors are not reported until [`build`] is called, which returns the first one.
///
/// [`advance`]: Self::advance
/// [`optional`]: Self::optional
/// [`scheme`]: Self::scheme
/// [`authority_with`]: Self::authority_with
/// [`userinfo`]: Self::userinfo
/// [`host`]: Self::host
/// [`port`]: Self::port
/// [`path`]: Self::path
/// [`query`]: Self::query
/// [`fragment`]: Self::fragment
/// [`build`]: Self::build
#[must_use]
pub struct Builder<S> {
    inner: BuilderInner,
    _marker: PhantomData<S>,
}

impl Builder<UriStart> {
    pub(crate) fn new() -> Self {
        Self {
            inner: BuilderInner::new(),
            _marker: PhantomData,
        }
    }
}

impl<S> Builder<S> {
    fn cast<T>(self) -> Builder<T>
    where
        S: To<T>,
    {
        Builder {
            inner: self.inner,
            _marker: PhantomData,
        }
    }

    /// Advances the builder state, skipping optional components in between.
    ///
    /// Variable rebinding may be necessary as this changes the type of the builder.
    ///
    /// ```
    /// use uri_grammar::Uri;
    ///
    /// fn build(relative: bool) -> Uri {
    ///     let b = Uri::builder();
    ///     let b = if relative {
    ///         b.advance()
    ///     } else {
    ///         b.scheme("http").authority_with(|b| b.host("example.com"))
    ///     };
    ///     b.path("/foo").build().unwrap()
    /// }
    ///
    /// assert_eq!(build(false).as_str(), "http://example.com/foo");
    /// assert_eq!(build(true).as_str(), "/foo");
    /// ```
    pub fn advance<T>(self) -> Builder<T>
    where
        S: AdvanceTo<T>,
    {
        self.cast()
    }

    /// Optionally calls a builder method with a value.
    ///
    /// ```
    /// use uri_grammar::{build::Builder, Uri};
    ///
    /// let uri = Uri::builder()
    ///     .path("foo")
    ///     .optional(Builder::query, Some("bar"))
    ///     .optional(Builder::fragment, None::<&str>)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(uri.as_str(), "foo?bar");
    /// ```
    pub fn optional<F, V, T>(self, f: F, opt: Option<V>) -> Builder<T>
    where
        F: FnOnce(Self, V) -> Builder<T>,
        S: AdvanceTo<T>,
    {
        match opt {
            Some(value) => f(self, value),
            None => self.advance(),
        }
    }
}

impl<S: To<SchemeEnd>> Builder<S> {
    /// Sets the [scheme] component.
    ///
    /// The scheme is not encoded. If it does not match the `scheme` rule,
    /// [`build`](Self::build) fails with [`BuildError::InvalidScheme`].
    ///
    /// Note that the scheme component is *case-insensitive* and its canonical form is
    /// *lowercase*. For consistency, you should only produce lowercase scheme names.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    pub fn scheme(mut self, scheme: &str) -> Builder<SchemeEnd> {
        self.inner.push_scheme(scheme);
        self.cast()
    }
}

impl<S: To<AuthorityStart>> Builder<S> {
    /// Builds the [authority] component with the given function.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
    pub fn authority_with<F, T>(mut self, f: F) -> Builder<AuthorityEnd>
    where
        F: FnOnce(Builder<AuthorityStart>) -> Builder<T>,
        T: To<AuthorityEnd>,
    {
        self.inner.start_authority();
        f(self.cast()).cast()
    }
}

impl<S: To<UserinfoEnd>> Builder<S> {
    /// Sets the [userinfo][userinfo-spec] subcomponent of authority.
    ///
    /// This method takes raw text or an <code>&amp;[EStr]&lt;[Userinfo]&gt;</code>.
    ///
    /// [userinfo-spec]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    /// [EStr]: crate::pct_enc::EStr
    pub fn userinfo(mut self, userinfo: impl AsComponent<Userinfo>) -> Builder<UserinfoEnd> {
        self.inner.push_userinfo(userinfo);
        self.cast()
    }
}

impl<S: To<HostEnd>> Builder<S> {
    /// Sets the [host] subcomponent of authority.
    ///
    /// This method takes raw text, an <code>&amp;[EStr]&lt;[RegName]&gt;</code>,
    /// or, with crate feature `net`, an [`Ipv4Addr`], [`Ipv6Addr`] or [`IpAddr`].
    ///
    /// Raw text that reads as an IPv4 address or an IP literal in square
    /// brackets is copied as is. Any other raw text is encoded as a registered
    /// name, see [`encode_host`].
    ///
    /// Note that ASCII characters within a host are *case-insensitive*.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    /// [EStr]: crate::pct_enc::EStr
    /// [RegName]: crate::pct_enc::encoder::RegName
    /// [`encode_host`]: crate::encode_host
    /// [`Ipv4Addr`]: std::net::Ipv4Addr
    /// [`Ipv6Addr`]: std::net::Ipv6Addr
    /// [`IpAddr`]: std::net::IpAddr
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_grammar::Uri;
    ///
    /// let uri = Uri::builder()
    ///     .authority_with(|b| b.host("[::1]").port(80))
    ///     .path("")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(uri.as_str(), "//[::1]:80");
    /// ```
    pub fn host(mut self, host: impl AsHost) -> Builder<HostEnd> {
        host.push_to(&mut self.inner);
        self.cast()
    }
}

impl<S: To<PortEnd>> Builder<S> {
    /// Sets the [port][port-spec] subcomponent of authority.
    ///
    /// This method takes either a `u16` or <code>&amp;[EStr]&lt;[Port]&gt;</code> as argument.
    ///
    /// [port-spec]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    /// [EStr]: crate::pct_enc::EStr
    /// [Port]: crate::pct_enc::encoder::Port
    pub fn port(mut self, port: impl AsPort) -> Builder<PortEnd> {
        port.push_to(&mut self.inner.buf);
        self.cast()
    }
}

impl<S: To<PathEnd>> Builder<S> {
    /// Sets the [path][path-spec] component.
    ///
    /// This method takes raw text or an <code>&amp;[EStr]&lt;[Path]&gt;</code>.
    /// Raw text is encoded with `'/'` kept as the segment delimiter.
    ///
    /// [path-spec]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    /// [EStr]: crate::pct_enc::EStr
    pub fn path(mut self, path: impl AsComponent<Path>) -> Builder<PathEnd> {
        self.inner.push_path(path);
        self.cast()
    }
}

impl<S: To<QueryEnd>> Builder<S> {
    /// Sets the [query][query-spec] component.
    ///
    /// This method takes raw text or an <code>&amp;[EStr]&lt;[Query]&gt;</code>.
    ///
    /// [query-spec]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    /// [EStr]: crate::pct_enc::EStr
    pub fn query(mut self, query: impl AsComponent<Query>) -> Builder<QueryEnd> {
        self.inner.push_query(query);
        self.cast()
    }
}

impl<S: To<FragmentEnd>> Builder<S> {
    /// Sets the [fragment][fragment-spec] component.
    ///
    /// This method takes raw text or an <code>&amp;[EStr]&lt;[Fragment]&gt;</code>.
    ///
    /// [fragment-spec]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    /// [EStr]: crate::pct_enc::EStr
    pub fn fragment(mut self, fragment: impl AsComponent<Fragment>) -> Builder<FragmentEnd> {
        self.inner.push_fragment(fragment);
        self.cast()
    }
}

impl<S: To<End>> Builder<S> {
    /// Builds the URI reference.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of the following conditions is not met.
    ///
    /// - The scheme matches the `scheme` rule.
    /// - All raw text given is well-formed in its encoding form.
    /// - When authority is present, the path must either be empty or start with `'/'`.
    /// - When authority is not present, the path cannot start with `"//"`.
    /// - When neither scheme nor authority is present, the first path segment cannot contain `':'`.
    ///
    /// The first error encountered while building is returned.
    pub fn build(self) -> Result<Uri, BuildError> {
        self.inner.validate()?;
        Ok(Uri::from_built(self.inner.buf))
    }
}

use crate::{
    error::{BuildError, Component, EncodeError},
    grammar::{self, full},
    host::encode_host,
    pct_enc::{
        encoder::{Fragment, Path, Port, Query, RegName, Userinfo},
        pct_encode, EStr, Encoder,
    },
    utf8::IntoCodePoints,
};
use alloc::string::{String, ToString};

#[cfg(feature = "net")]
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub struct BuilderInner {
    pub buf: String,
    pub path_bounds: (usize, usize),
    pub has_scheme: bool,
    pub has_authority: bool,
    pub err: Option<BuildError>,
}

impl BuilderInner {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            path_bounds: (0, 0),
            has_scheme: false,
            has_authority: false,
            err: None,
        }
    }

    /// Records the first error; later ones are dropped.
    pub fn fail(&mut self, err: BuildError) {
        if self.err.is_none() {
            tracing::debug!(%err, "URI reference builder failed");
            self.err = Some(err);
        }
    }

    pub fn push_encoded<C, E>(&mut self, component: Component, v: C)
    where
        C: AsComponent<E>,
        E: Encoder,
    {
        if let Err(cause) = v.push_to(&mut self.buf) {
            self.fail(BuildError::MalformedInput { component, cause });
        }
    }

    pub fn push_scheme(&mut self, v: &str) {
        if !full(grammar::scheme, v.as_bytes()) {
            self.fail(BuildError::InvalidScheme);
        }
        self.buf.push_str(v);
        self.has_scheme = true;
        self.buf.push(':');
    }

    pub fn start_authority(&mut self) {
        self.buf.push_str("//");
        self.has_authority = true;
    }

    pub fn push_userinfo<C: AsComponent<Userinfo>>(&mut self, v: C) {
        self.push_encoded(Component::Userinfo, v);
        self.buf.push('@');
    }

    pub fn push_path<C: AsComponent<Path>>(&mut self, v: C) {
        self.path_bounds.0 = self.buf.len();
        self.push_encoded(Component::Path, v);
        self.path_bounds.1 = self.buf.len();
    }

    pub fn push_query<C: AsComponent<Query>>(&mut self, v: C) {
        self.buf.push('?');
        self.push_encoded(Component::Query, v);
    }

    pub fn push_fragment<C: AsComponent<Fragment>>(&mut self, v: C) {
        self.buf.push('#');
        self.push_encoded(Component::Fragment, v);
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        fn first_segment_contains_colon(path: &str) -> bool {
            path.split_once('/').map_or(path, |x| x.0).contains(':')
        }

        if let Some(err) = self.err {
            return Err(err);
        }

        let (start, end) = self.path_bounds;
        let path = &self.buf[start..end];

        if self.has_authority {
            if !path.is_empty() && !path.starts_with('/') {
                return Err(BuildError::NonemptyRootlessPath);
            }
        } else {
            if path.starts_with("//") {
                return Err(BuildError::PathStartsWithDoubleSlash);
            }
            if !self.has_scheme && first_segment_contains_colon(path) {
                return Err(BuildError::FirstPathSegmentContainsColon);
            }
        }
        Ok(())
    }
}

/// A value that can be written as a URI component encoded with `E`.
pub trait AsComponent<E: Encoder> {
    fn push_to(self, buf: &mut String) -> Result<(), EncodeError>;
}

impl<E: Encoder> AsComponent<E> for &EStr<E> {
    #[inline]
    fn push_to(self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str(self.as_str());
        Ok(())
    }
}

impl<E: Encoder, I: IntoCodePoints> AsComponent<E> for I {
    #[inline]
    fn push_to(self, buf: &mut String) -> Result<(), EncodeError> {
        pct_encode(self, E::TABLE, buf)
    }
}

pub trait AsHost {
    fn push_to(self, b: &mut BuilderInner);
}

#[cfg(feature = "net")]
impl AsHost for Ipv4Addr {
    fn push_to(self, b: &mut BuilderInner) {
        b.buf.push_str(&self.to_string());
    }
}

#[cfg(feature = "net")]
impl AsHost for Ipv6Addr {
    fn push_to(self, b: &mut BuilderInner) {
        b.buf.push('[');
        b.buf.push_str(&self.to_string());
        b.buf.push(']');
    }
}

#[cfg(feature = "net")]
impl AsHost for IpAddr {
    fn push_to(self, b: &mut BuilderInner) {
        match self {
            Self::V4(addr) => addr.push_to(b),
            Self::V6(addr) => addr.push_to(b),
        }
    }
}

impl AsHost for &EStr<RegName> {
    #[inline]
    fn push_to(self, b: &mut BuilderInner) {
        b.buf.push_str(self.as_str());
    }
}

impl<I: IntoCodePoints> AsHost for I {
    fn push_to(self, b: &mut BuilderInner) {
        if let Err(cause) = encode_host(self, &mut b.buf) {
            b.fail(BuildError::MalformedInput {
                component: Component::Host,
                cause,
            });
        }
    }
}

pub trait AsPort {
    fn push_to(self, buf: &mut String);
}

impl AsPort for u16 {
    fn push_to(self, buf: &mut String) {
        buf.push(':');
        buf.push_str(&self.to_string());
    }
}

impl AsPort for &EStr<Port> {
    fn push_to(self, buf: &mut String) {
        buf.push(':');
        buf.push_str(self.as_str());
    }
}

#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Grammar recognizers, percent-encoding and URI building per IETF [RFC 3986].
//!
//! **Recognizers.** The [`grammar`] module holds one rule per ABNF production
//! of RFC 3986, from `sub-delims` up to `URI-reference`, together with the
//! combinators they are made of.
//!
//! **Percent-encoding.** The [`pct_enc`] module encodes text given as
//! UTF-8, UTF-16 or UTF-32 code units (see [`utf8`]) against a set of
//! characters left as is, and decodes it back. Malformed input stops the
//! encoder with an [`EncodeError`] instead of being skipped silently.
//!
//! **Building.** [`encode_host`] writes a host, copying IP addresses
//! verbatim and encoding anything else as a registered name, and
//! [`Uri::builder`] assembles a whole URI reference from raw components.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986
//!
//! # Examples
//!
//! ```
//! use uri_grammar::{grammar, Uri};
//!
//! assert!(grammar::full(grammar::ipv6_address, b"3ffe:1900:4545:3:200:f8ff:fe21:67cf"));
//!
//! let uri = Uri::builder()
//!     .scheme("http")
//!     .authority_with(|b| b.host("127.0.0.1").port(8080))
//!     .path("/hello world")
//!     .build()
//!     .unwrap();
//! assert_eq!(uri.as_str(), "http://127.0.0.1:8080/hello%20world");
//! ```
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables `std` support. This includes [`Error`] implementations.
//!
//! - `impl-error`: Enables [`Error`] implementations on error types
//!   without `std`. Implied by `std`.
//!
//! - `net`: Enables conversion of host addresses into `std::net` types
//!   and building hosts from them. Implies `std`.
//!
//! - `serde`: Enables [`serde`] support for [`Uri`].
//!
//! # Logging
//!
//! Diagnostics are emitted as [`tracing`] events at `debug` and `trace`
//! levels. No subscriber is installed by this crate.
//!
//! [`Error`]: core::error::Error
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

extern crate alloc;

pub mod build;
pub mod grammar;
pub mod pct_enc;
pub mod utf8;

mod error;
mod host;
mod uri;

pub use build::Builder;
pub use error::{
    BuildError, Component, DecodeError, EncodeError, EncodeErrorKind, ParseError, ParseErrorKind,
};
pub use host::{classify_host, encode_host, HostKind};
pub use pct_enc::pct_encode;
pub use uri::Uri;

#[cfg(feature = "impl-error")]
use core::error::Error;

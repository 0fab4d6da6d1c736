//! Productions of RFC 3986, Appendix A.
//!
//! Ordered choice commits to the first alternative that matches, so the
//! alternatives below are ordered to keep a shorter one from shadowing
//! a longer one where both could start at the same position.

use super::{alt, class, empty, ip, lit, many0, many1, opt, seq, Match, Rule};
use crate::pct_enc::table::{self, Table};

macro_rules! class_rule {
    ($(#[$attr:meta])* $name:ident = $table:expr) => {
        $(#[$attr])*
        #[inline]
        pub fn $name(input: &[u8]) -> Match {
            class($table).apply(input)
        }
    };
}

class_rule! {
    /// `ALPHA = %x41-5A / %x61-7A`
    alpha = table::ALPHA
}

class_rule! {
    /// `DIGIT = %x30-39`
    digit = table::DIGIT
}

class_rule! {
    /// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`, case-insensitive.
    hexdig = table::HEXDIG
}

class_rule! {
    /// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
    sub_delims = table::SUB_DELIMS
}

class_rule! {
    /// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
    gen_delims = table::GEN_DELIMS
}

class_rule! {
    /// `reserved = gen-delims / sub-delims`
    reserved = table::RESERVED
}

class_rule! {
    /// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
    unreserved = table::UNRESERVED
}

/// `pct-encoded = "%" HEXDIG HEXDIG`
pub fn pct_encoded(input: &[u8]) -> Match {
    seq!(lit(b"%"), hexdig, hexdig).apply(input)
}

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub fn pchar(input: &[u8]) -> Match {
    alt!(unreserved, pct_encoded, sub_delims, class(Table::new(b":@"))).apply(input)
}

/// `query = *( pchar / "/" / "?" )`
pub fn query(input: &[u8]) -> Match {
    many0(alt(pchar, class(Table::new(b"/?")))).apply(input)
}

/// `fragment = *( pchar / "/" / "?" )`
pub fn fragment(input: &[u8]) -> Match {
    query(input)
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn scheme(input: &[u8]) -> Match {
    seq(alpha, many0(class(table::SCHEME))).apply(input)
}

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub fn userinfo(input: &[u8]) -> Match {
    many0(alt!(unreserved, pct_encoded, sub_delims, lit(b":"))).apply(input)
}

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
///
/// The leading `"v"` is case-insensitive.
pub fn ipv_future(input: &[u8]) -> Match {
    seq!(
        class(Table::new(b"vV")),
        many1(hexdig),
        lit(b"."),
        many1(class(table::IPV_FUTURE)),
    )
    .apply(input)
}

/// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
pub fn ip_literal(input: &[u8]) -> Match {
    seq!(lit(b"["), alt(ip::ipv6_address, ipv_future), lit(b"]")).apply(input)
}

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub fn reg_name(input: &[u8]) -> Match {
    many0(alt!(unreserved, pct_encoded, sub_delims)).apply(input)
}

/// `host = IP-literal / IPv4address / reg-name`
///
/// Every IPv4 address is also a registered name, so the
/// `IPv4address` alternative is left to `reg-name`.
pub fn host(input: &[u8]) -> Match {
    alt(ip_literal, reg_name).apply(input)
}

/// `port = *DIGIT`
pub fn port(input: &[u8]) -> Match {
    many0(digit).apply(input)
}

/// `authority = [ userinfo "@" ] host [ ":" port ]`
pub fn authority(input: &[u8]) -> Match {
    seq!(
        opt(seq(userinfo, lit(b"@"))),
        host,
        opt(seq(lit(b":"), port)),
    )
    .apply(input)
}

/// `segment = *pchar`
pub fn segment(input: &[u8]) -> Match {
    many0(pchar).apply(input)
}

/// `segment-nz = 1*pchar`
pub fn segment_nz(input: &[u8]) -> Match {
    many1(pchar).apply(input)
}

/// `segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )`
pub fn segment_nz_nc(input: &[u8]) -> Match {
    many1(alt!(unreserved, pct_encoded, sub_delims, lit(b"@"))).apply(input)
}

/// `path-abempty = *( "/" segment )`
pub fn path_abempty(input: &[u8]) -> Match {
    many0(seq(lit(b"/"), segment)).apply(input)
}

/// `path-absolute = "/" [ segment-nz *( "/" segment ) ]`
pub fn path_absolute(input: &[u8]) -> Match {
    seq(lit(b"/"), opt(seq(segment_nz, path_abempty))).apply(input)
}

/// `path-noscheme = segment-nz-nc *( "/" segment )`
pub fn path_noscheme(input: &[u8]) -> Match {
    seq(segment_nz_nc, path_abempty).apply(input)
}

/// `path-rootless = segment-nz *( "/" segment )`
pub fn path_rootless(input: &[u8]) -> Match {
    seq(segment_nz, path_abempty).apply(input)
}

/// `hier-part = "//" authority path-abempty / path-absolute / path-rootless / path-empty`
pub fn hier_part(input: &[u8]) -> Match {
    alt!(
        seq!(lit(b"//"), authority, path_abempty),
        path_absolute,
        path_rootless,
        empty,
    )
    .apply(input)
}

/// `relative-part = "//" authority path-abempty / path-absolute / path-noscheme / path-empty`
pub fn relative_part(input: &[u8]) -> Match {
    alt!(
        seq!(lit(b"//"), authority, path_abempty),
        path_absolute,
        path_noscheme,
        empty,
    )
    .apply(input)
}

/// `URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
pub fn uri(input: &[u8]) -> Match {
    seq!(
        scheme,
        lit(b":"),
        hier_part,
        opt(seq(lit(b"?"), query)),
        opt(seq(lit(b"#"), fragment)),
    )
    .apply(input)
}

/// `relative-ref = relative-part [ "?" query ] [ "#" fragment ]`
pub fn relative_ref(input: &[u8]) -> Match {
    seq!(
        relative_part,
        opt(seq(lit(b"?"), query)),
        opt(seq(lit(b"#"), fragment)),
    )
    .apply(input)
}

/// `absolute-URI = scheme ":" hier-part [ "?" query ]`
pub fn absolute_uri(input: &[u8]) -> Match {
    seq!(scheme, lit(b":"), hier_part, opt(seq(lit(b"?"), query))).apply(input)
}

/// `URI-reference = URI / relative-ref`
pub fn uri_reference(input: &[u8]) -> Match {
    alt(uri, relative_ref).apply(input)
}

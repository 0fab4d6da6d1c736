use crate::{
    error::EncodeError,
    grammar::{self, full, read_ipv4, read_ipv6},
    pct_enc::{self, table},
    utf8::{CodePoint, IntoCodePoints},
};
use alloc::{string::String, vec::Vec};

#[cfg(feature = "net")]
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The kind of a [host], as told apart by [`classify_host`].
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// An IPv4 address, in network byte order.
    Ipv4([u8; 4]),
    /// An IPv6 address enclosed in square brackets, as eight 16-bit groups.
    Ipv6([u16; 8]),
    /// An IP address of future versions enclosed in square brackets.
    IpvFuture,
    /// A registered name.
    RegName,
}

impl HostKind {
    /// Converts the address variants into an [`IpAddr`].
    ///
    /// Returns `None` for [`IpvFuture`](Self::IpvFuture) and [`RegName`](Self::RegName).
    #[cfg(feature = "net")]
    #[must_use]
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match *self {
            Self::Ipv4(octets) => Some(IpAddr::V4(Ipv4Addr::from(octets))),
            Self::Ipv6(segs) => Some(IpAddr::V6(Ipv6Addr::from(segs))),
            Self::IpvFuture | Self::RegName => None,
        }
    }
}

/// Tells the kind of a host, or returns `None` if it does not match
/// the `host` rule.
///
/// An input that is both an IPv4 address and a registered name
/// is classified as an IPv4 address.
///
/// # Examples
///
/// ```
/// use uri_grammar::{classify_host, HostKind};
///
/// assert_eq!(classify_host("127.0.0.1"), Some(HostKind::Ipv4([127, 0, 0, 1])));
/// assert_eq!(classify_host("[::1]"), Some(HostKind::Ipv6([0, 0, 0, 0, 0, 0, 0, 1])));
/// assert_eq!(classify_host("[v1.x]"), Some(HostKind::IpvFuture));
/// assert_eq!(classify_host("127.0.0.01"), Some(HostKind::RegName));
/// assert_eq!(classify_host("[127.0.0.1]"), None);
/// ```
#[must_use]
pub fn classify_host(host: &str) -> Option<HostKind> {
    let bytes = host.as_bytes();
    if let [b'[', inner @ .., b']'] = bytes {
        if let Some(segs) = read_ipv6(inner) {
            Some(HostKind::Ipv6(segs))
        } else if full(grammar::ipv_future, inner) {
            Some(HostKind::IpvFuture)
        } else {
            None
        }
    } else if let Some(octets) = read_ipv4(bytes) {
        Some(HostKind::Ipv4(octets))
    } else if full(grammar::reg_name, bytes) {
        Some(HostKind::RegName)
    } else {
        None
    }
}

/// Checks whether the host is an IPv4 address or an IP literal.
fn is_ip_host(bytes: &[u8]) -> bool {
    full(grammar::ipv4_address, bytes) || full(grammar::ip_literal, bytes)
}

/// Collects the host as ASCII bytes if it may be an IP address or literal.
fn ascii_ip_candidate<I>(mut iter: I) -> Option<Vec<u8>>
where
    I: Iterator<Item = CodePoint>,
{
    let first = iter.next()?.as_char()?;
    if first != '[' && !first.is_ascii_digit() {
        return None;
    }
    let mut bytes = Vec::new();
    bytes.push(first as u8);
    for cp in iter {
        match cp.as_char() {
            Some(ch) if ch.is_ascii() => bytes.push(ch as u8),
            _ => return None,
        }
    }
    Some(bytes)
}

/// Writes a host into `buf`, percent-encoding it as a registered name
/// unless it is an IP address.
///
/// If the host, read as ASCII, fully matches `IPv4address` or
/// `IP-literal`, it is copied verbatim. Otherwise every character that is
/// neither unreserved nor a sub-delimiter is percent-encoded, except that
/// valid percent-encoded octets already in the host are kept as is.
///
/// # Errors
///
/// Returns `Err` if the host contains an illegal or incomplete code point.
/// The output produced so far is kept in `buf`.
///
/// # Examples
///
/// ```
/// use uri_grammar::encode_host;
///
/// let mut buf = String::new();
/// encode_host("www.żółć.pl", &mut buf).unwrap();
/// assert_eq!(buf, "www.%c5%bc%c3%b3%c5%82%c4%87.pl");
///
/// let mut buf = String::new();
/// encode_host("[::]", &mut buf).unwrap();
/// assert_eq!(buf, "[::]");
/// ```
pub fn encode_host<I: IntoCodePoints>(host: I, buf: &mut String) -> Result<(), EncodeError> {
    let iter = host.into_code_points();

    if let Some(bytes) = ascii_ip_candidate(iter.clone()) {
        if is_ip_host(&bytes) {
            tracing::trace!(len = bytes.len(), "host is an IP address, copied verbatim");
            buf.extend(bytes.iter().map(|&x| x as char));
            return Ok(());
        }
    }

    pct_enc::encode_code_points(iter, table::REG_NAME, buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeErrorKind;

    fn encode(host: &str) -> String {
        let mut buf = String::new();
        encode_host(host, &mut buf).unwrap();
        buf
    }

    #[test]
    fn literal_addresses_are_verbatim() {
        assert_eq!(encode("127.0.0.1"), "127.0.0.1");
        assert_eq!(encode("[::]"), "[::]");
        assert_eq!(encode("[v1.fe80::a+en1]"), "[v1.fe80::a+en1]");
        assert_eq!(encode("[3ffe:1900:4545:3:200:f8ff:fe21:67cf]"), "[3ffe:1900:4545:3:200:f8ff:fe21:67cf]");
    }

    #[test]
    fn near_addresses_are_encoded() {
        assert_eq!(encode("[::1"), "%5b%3a%3a1");
        assert_eq!(encode("1.2.3.4:80"), "1.2.3.4%3a80");
        assert_eq!(encode("[1.2.3.4]"), "%5b1.2.3.4%5d");
    }

    #[test]
    fn reg_name() {
        assert_eq!(encode("%20%13%24!$'()*+,;="), "%20%13%24!$'()*+,;=");
        assert_eq!(encode("hello world!\n"), "hello%20world!%0a");
        assert_eq!(encode("100%"), "100%25");
        assert_eq!(
            encode("\"#/<>?@[\\]^`{|}"),
            "%22%23%2f%3c%3e%3f%40%5b%5c%5d%5e%60%7b%7c%7d"
        );
    }

    #[test]
    fn utf16_host() {
        let host: Vec<u16> = "b\u{fc}cher.de".encode_utf16().collect();
        let mut buf = String::new();
        encode_host(&host[..], &mut buf).unwrap();
        assert_eq!(buf, "b%c3%bccher.de");

        let mut buf = String::new();
        let err = encode_host(&[0x31u16, 0xD800], &mut buf).unwrap_err();
        assert_eq!(buf, "1");
        assert_eq!(err.kind(), EncodeErrorKind::Incomplete);
    }

    #[test]
    fn classify() {
        assert_eq!(classify_host(""), Some(HostKind::RegName));
        assert_eq!(classify_host("example.com"), Some(HostKind::RegName));
        assert_eq!(classify_host("256.0.0.1"), Some(HostKind::RegName));
        assert_eq!(
            classify_host("[::ffff:1.2.3.4]"),
            Some(HostKind::Ipv6([0, 0, 0, 0, 0, 0xffff, 0x0102, 0x0304]))
        );
        assert_eq!(classify_host("a b"), None);
        assert_eq!(classify_host("[]"), None);
    }
}

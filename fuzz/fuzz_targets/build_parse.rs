#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use std::net::IpAddr;
use uri_grammar::{build::Builder, grammar, BuildError, Uri};

#[derive(Arbitrary, Debug)]
enum Host<'a> {
    Ip(IpAddr),
    Raw(&'a [u8]),
    Utf16(Vec<u16>),
}

#[derive(Arbitrary, Debug)]
struct Authority<'a> {
    userinfo: Option<&'a str>,
    host: Host<'a>,
    port: Option<u16>,
}

#[derive(Arbitrary, Debug)]
struct UriComponents<'a> {
    scheme: Option<&'a str>,
    authority: Option<Authority<'a>>,
    path: &'a str,
    query: Option<&'a [u8]>,
    fragment: Option<Vec<u32>>,
}

fn first_segment_contains_colon(path: &str) -> bool {
    path.split_once('/').map_or(path, |x| x.0).contains(':')
}

fuzz_target!(|c: UriComponents<'_>| {
    let b = Uri::builder();
    let b = match c.scheme {
        Some(scheme) => b.scheme(scheme),
        None => b.advance(),
    };
    let b = match &c.authority {
        Some(a) => b.authority_with(|b| {
            let b = b.optional(Builder::userinfo, a.userinfo);
            let b = match &a.host {
                Host::Ip(addr) => b.host(*addr),
                Host::Raw(bytes) => b.host(*bytes),
                Host::Utf16(units) => b.host(&units[..]),
            };
            b.optional(Builder::port, a.port)
        }),
        None => b.advance(),
    };
    let result = b
        .path(c.path)
        .optional(Builder::query, c.query)
        .optional(Builder::fragment, c.fragment.as_deref())
        .build();

    let uri = match result {
        Ok(uri) => uri,
        Err(BuildError::InvalidScheme) => {
            let scheme = c.scheme.unwrap();
            assert!(!grammar::full(grammar::scheme, scheme.as_bytes()));
            return;
        }
        Err(BuildError::MalformedInput { .. }) => return,
        Err(BuildError::NonemptyRootlessPath) => {
            assert!(c.authority.is_some());
            return;
        }
        Err(BuildError::PathStartsWithDoubleSlash) => {
            assert!(c.authority.is_none());
            return;
        }
        Err(BuildError::FirstPathSegmentContainsColon) => {
            assert!(c.scheme.is_none() && c.authority.is_none());
            assert!(first_segment_contains_colon(c.path));
            return;
        }
    };

    assert_eq!(uri.has_scheme(), c.scheme.is_some());
    assert_eq!(Uri::parse(uri.as_str()).unwrap(), uri);
});

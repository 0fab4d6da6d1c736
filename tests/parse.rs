use uri_grammar::{classify_host, HostKind, ParseErrorKind::*, Uri};

#[test]
fn parse_absolute() {
    for s in [
        "file:///etc/hosts",
        "ftp://ftp.is.co.za/rfc/rfc1808.txt",
        "http://www.ietf.org/rfc/rfc2396.txt",
        "ldap://[2001:db8::7]/c=GB?objectClass?one",
        "mailto:John.Doe@example.com",
        "news:comp.infosystems.www.servers.unix",
        "tel:+1-816-555-1212",
        "telnet://192.0.2.16:80/",
        "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
        "foo://user@example.com:8042/over/there?name=ferret#nose",
        "http://[vFe.foo.bar]",
        "http://example.com:80808",
    ] {
        let u = Uri::parse(s).unwrap();
        assert_eq!(u.as_str(), s);
        assert!(u.has_scheme(), "{s}");
    }
}

#[test]
fn parse_relative() {
    for s in [
        "",
        "foo.txt",
        ".",
        "./this:that",
        "//example.com",
        "?query",
        "#fragment",
        "../../a/b;p?q#f",
    ] {
        let u = Uri::parse(s).unwrap();
        assert_eq!(u.as_str(), s);
        assert!(!u.has_scheme(), "{s}");
    }
}

#[test]
fn parse_error() {
    // Empty scheme
    let e = Uri::parse(":hello").unwrap_err();
    assert_eq!(e.index(), 0);
    assert_eq!(e.kind(), UnexpectedChar);

    // Scheme starts with non-letter, read as a relative reference
    // with a colon in the first path segment.
    let e = Uri::parse("3ttp://a.com").unwrap_err();
    assert_eq!(e.index(), 4);
    assert_eq!(e.kind(), UnexpectedChar);

    // Unexpected char in scheme
    let e = Uri::parse("exam=ple:foo").unwrap_err();
    assert_eq!(e.index(), 8);
    assert_eq!(e.kind(), UnexpectedChar);

    let e = Uri::parse("(:").unwrap_err();
    assert_eq!(e.index(), 1);
    assert_eq!(e.kind(), UnexpectedChar);

    // Percent-encoded scheme
    let e = Uri::parse("a%20:foo").unwrap_err();
    assert_eq!(e.index(), 4);
    assert_eq!(e.kind(), UnexpectedChar);

    // Unexpected char in path
    let e = Uri::parse("foo\\bar").unwrap_err();
    assert_eq!(e.index(), 3);
    assert_eq!(e.kind(), UnexpectedChar);

    // Non-hexadecimal percent-encoded octet
    let e = Uri::parse("foo%xxd").unwrap_err();
    assert_eq!(e.index(), 3);
    assert_eq!(e.kind(), InvalidOctet);

    // Incomplete percent-encoded octet
    let e = Uri::parse("text%a").unwrap_err();
    assert_eq!(e.index(), 4);
    assert_eq!(e.kind(), InvalidOctet);

    // A single percent
    let e = Uri::parse("%").unwrap_err();
    assert_eq!(e.index(), 0);
    assert_eq!(e.kind(), InvalidOctet);

    // Non-decimal port
    let e = Uri::parse("http://example.com:80ab").unwrap_err();
    assert_eq!(e.index(), 21);
    assert_eq!(e.kind(), UnexpectedChar);

    let e = Uri::parse("http://user@example.com:80ab").unwrap_err();
    assert_eq!(e.index(), 26);
    assert_eq!(e.kind(), UnexpectedChar);

    // Multiple colons in authority
    let e = Uri::parse("http://user:pass:example.com/").unwrap_err();
    assert_eq!(e.index(), 12);
    assert_eq!(e.kind(), UnexpectedChar);

    // Unclosed bracket
    let e = Uri::parse("https://[::1/").unwrap_err();
    assert_eq!(e.index(), 8);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Not port after IP literal
    let e = Uri::parse("https://[::1]wrong").unwrap_err();
    assert_eq!(e.index(), 13);
    assert_eq!(e.kind(), UnexpectedChar);

    // IP literal too short
    let e = Uri::parse("http://[:]").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), InvalidIpLiteral);
    let e = Uri::parse("http://[]").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Non-hexadecimal version in IPvFuture
    let e = Uri::parse("http://[vG.addr]").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Empty version in IPvFuture
    let e = Uri::parse("http://[v.addr]").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Empty address in IPvFuture
    let e = Uri::parse("ftp://[vF.]").unwrap_err();
    assert_eq!(e.index(), 6);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Percent-encoded address in IPvFuture
    let e = Uri::parse("ftp://[vF.%20]").unwrap_err();
    assert_eq!(e.index(), 6);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Zone ID
    let e = Uri::parse("ftp://[::1%25eth0]").unwrap_err();
    assert_eq!(e.index(), 6);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Invalid IPv6 address
    let e = Uri::parse("example://[44:55::66::77]").unwrap_err();
    assert_eq!(e.index(), 10);
    assert_eq!(e.kind(), InvalidIpLiteral);

    // Non-ASCII
    let e = Uri::parse("http://example.com/\u{e9}").unwrap_err();
    assert_eq!(e.index(), 19);
    assert_eq!(e.kind(), UnexpectedChar);
}

#[test]
fn strict_ip_addr() {
    for host in ["127.0.0.001", "127.1", "127.00.00.1"] {
        assert!(Uri::parse(&format!("//{host}")).is_ok());
        assert_eq!(classify_host(host), Some(HostKind::RegName));
    }

    assert!(Uri::parse("//[::1.1.1.1]").is_ok());
    assert!(Uri::parse("//[::ffff:1.1.1.1]").is_ok());
    assert!(Uri::parse("//[0000:0000:0000:0000:0000:0000:255.255.255.255]").is_ok());

    assert_eq!(
        Uri::parse("//[::01.1.1.1]").unwrap_err().kind(),
        InvalidIpLiteral
    );
    assert_eq!(
        Uri::parse("//[::00.1.1.1]").unwrap_err().kind(),
        InvalidIpLiteral
    );
}

#[test]
fn conversions() {
    let u: Uri = "http://example.com/".parse().unwrap();
    assert_eq!(u, "http://example.com/");
    assert_eq!(u.to_string(), "http://example.com/");
    assert_eq!(format!("{u:?}"), "Uri(\"http://example.com/\")");

    let u = Uri::try_from(String::from("a:b")).unwrap();
    assert_eq!(u.into_string(), "a:b");

    let e = "http://a b".parse::<Uri>().unwrap_err();
    assert_eq!(e.to_string(), "unexpected character at index 8");
}

#[cfg(feature = "serde")]
#[test]
fn serde() {
    let u = Uri::parse("http://example.com/?q#f").unwrap();
    let json = serde_json::to_string(&u).unwrap();
    assert_eq!(json, "\"http://example.com/?q#f\"");
    assert_eq!(serde_json::from_str::<Uri>(&json).unwrap(), u);

    let err = serde_json::from_str::<Uri>("\"http://a b\"").unwrap_err();
    assert!(err.to_string().contains("unexpected character at index 8"));
}

use uri_grammar::{classify_host, encode_host, EncodeErrorKind, HostKind};

fn encode_utf32(host: &str) -> String {
    let units: Vec<u32> = host.chars().map(u32::from).collect();
    let mut buf = String::new();
    encode_host(&units[..], &mut buf).unwrap();

    // Every encoding form gives the same output.
    let mut utf8 = String::new();
    encode_host(host, &mut utf8).unwrap();
    assert_eq!(utf8, buf);

    let utf16: Vec<u16> = host.encode_utf16().collect();
    let mut from_utf16 = String::new();
    encode_host(&utf16[..], &mut from_utf16).unwrap();
    assert_eq!(from_utf16, buf);

    buf
}

#[test]
fn keeps_pct_encoded_and_sub_delims() {
    assert_eq!(encode_utf32("%20%13%24!$'()*+,;="), "%20%13%24!$'()*+,;=");
}

#[test]
fn encodes_whitespace() {
    assert_eq!(encode_utf32("hello world!\n"), "hello%20world!%0a");
    assert_eq!(encode_utf32("\t\r"), "%09%0d");
}

#[test]
fn encodes_polish_hostname() {
    assert_eq!(
        encode_utf32("www.\u{17C}\u{F3}\u{142}\u{107}.pl"),
        "www.%c5%bc%c3%b3%c5%82%c4%87.pl"
    );
}

#[test]
fn keeps_ipv4_address() {
    assert_eq!(encode_utf32("127.0.0.1"), "127.0.0.1");
    assert_eq!(encode_utf32("255.255.255.255"), "255.255.255.255");
}

#[test]
fn keeps_ip_literal() {
    assert_eq!(encode_utf32("[::]"), "[::]");
    assert_eq!(encode_utf32("[::ffff:192.0.2.33]"), "[::ffff:192.0.2.33]");
    assert_eq!(encode_utf32("[vF.addr:1]"), "[vF.addr:1]");
}

#[test]
fn encodes_ascii_delimiters() {
    assert_eq!(
        encode_utf32("\"#/<>?@[\\]^`{|}"),
        "%22%23%2f%3c%3e%3f%40%5b%5c%5d%5e%60%7b%7c%7d"
    );
}

#[test]
fn invalid_addresses_are_reg_names() {
    assert_eq!(encode_utf32("127.0.0.01"), "127.0.0.01");
    assert_eq!(encode_utf32("[::1%eth0]"), "%5b%3a%3a1%25eth0%5d");
    assert_eq!(encode_utf32("[fe80::\u{e9}]"), "%5bfe80%3a%3a%c3%a9%5d");
}

#[test]
fn appends_to_buffer() {
    let mut buf = String::from("http://");
    encode_host("example.com", &mut buf).unwrap();
    encode_host("[::1]", &mut buf).unwrap();
    assert_eq!(buf, "http://example.com[::1]");
}

#[test]
fn stops_at_malformed_input() {
    let mut buf = String::new();
    let err = encode_host(&[0x61u32, 0x20, 0xDFFF, 0x62], &mut buf).unwrap_err();
    assert_eq!(buf, "a%20");
    assert_eq!(err.index(), 2);
    assert_eq!(err.kind(), EncodeErrorKind::Illegal);

    // A malformed unit after a digit rules out the address fast path.
    let mut buf = String::new();
    let err = encode_host(&b"1.2.3.4\xff"[..], &mut buf).unwrap_err();
    assert_eq!(buf, "1.2.3.4");
    assert_eq!(err.index(), 7);
}

#[test]
fn classify() {
    assert_eq!(classify_host("192.0.2.16"), Some(HostKind::Ipv4([192, 0, 2, 16])));
    assert_eq!(
        classify_host("[2001:db8::7]"),
        Some(HostKind::Ipv6([0x2001, 0xdb8, 0, 0, 0, 0, 0, 7]))
    );
    assert_eq!(classify_host("[vFe.foo.bar]"), Some(HostKind::IpvFuture));
    assert_eq!(classify_host("www.example.com"), Some(HostKind::RegName));
    assert_eq!(classify_host("%c5%bc"), Some(HostKind::RegName));
    assert_eq!(classify_host("1.2.3"), Some(HostKind::RegName));

    assert_eq!(classify_host("[::1"), None);
    assert_eq!(classify_host("exa mple"), None);
    assert_eq!(classify_host("a:b"), None);
    assert_eq!(classify_host("%zz"), None);
}

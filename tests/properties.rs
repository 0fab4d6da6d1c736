//! Property tests over the recognizers, the codec and the builder.

use proptest::prelude::*;
use std::net::{Ipv4Addr, Ipv6Addr};
use uri_grammar::{
    classify_host, encode_host,
    grammar::{self, full, Match},
    pct_enc::{decode, pct_encode, table, Printable},
    HostKind, Uri,
};

fn encode<S: uri_grammar::pct_enc::SafeSet>(s: &str, safe: S) -> String {
    let mut buf = String::new();
    pct_encode(s, safe, &mut buf).unwrap();
    buf
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn sub_delims_are_exactly_the_set(x in 0u8..128) {
        let expected = b"!$&'()*+,;=".contains(&x);
        prop_assert_eq!(full(grammar::sub_delims, &[x]), expected);
    }

    #[test]
    fn dec_octet_accepts_canonical_decimals(n in 0u16..=255) {
        prop_assert!(full(grammar::dec_octet, n.to_string().as_bytes()));
        let padded = format!("0{}", n);
        prop_assert!(!full(grammar::dec_octet, padded.as_bytes()));
    }

    #[test]
    fn dec_octet_rejects_large_values(n in 256u32..100_000) {
        prop_assert!(!full(grammar::dec_octet, n.to_string().as_bytes()));
    }

    #[test]
    fn ipv4_agrees_with_std(octets in any::<[u8; 4]>()) {
        let s = Ipv4Addr::from(octets).to_string();
        prop_assert!(full(grammar::ipv4_address, s.as_bytes()));
        prop_assert_eq!(classify_host(&s), Some(HostKind::Ipv4(octets)));
    }

    #[test]
    fn ipv6_agrees_with_std(segs in any::<[u16; 8]>()) {
        let s = Ipv6Addr::from(segs).to_string();
        prop_assert!(full(grammar::ipv6_address, s.as_bytes()));
        let literal = format!("[{}]", s);
        prop_assert_eq!(classify_host(&literal), Some(HostKind::Ipv6(segs)));
    }

    #[test]
    fn ipv6_matches_address_before_trailing_colon(segs in any::<[u16; 8]>()) {
        let s = Ipv6Addr::from(segs).to_string();
        let input = format!("{}:x", s);
        prop_assert_eq!(
            grammar::ipv6_address(input.as_bytes()),
            Match::Matched { consumed: s.len() }
        );
    }

    #[test]
    fn printable_output_is_printable(s in any::<String>()) {
        let out = encode(&s, Printable);
        prop_assert!(out.chars().all(|ch| matches!(ch, '!'..='z')));
    }

    #[test]
    fn encoding_decodes_to_input(s in any::<String>()) {
        let out = encode(&s, table::UNRESERVED);
        prop_assert!(table::UNRESERVED.or_pct_encoded().validate(out.as_bytes()));
        prop_assert_eq!(decode(&out).unwrap(), s.as_bytes());
    }

    #[test]
    fn encoding_forms_agree(s in any::<String>()) {
        let utf16: Vec<u16> = s.encode_utf16().collect();
        let utf32: Vec<u32> = s.chars().map(u32::from).collect();

        let mut from_utf16 = String::new();
        pct_encode(&utf16[..], table::QUERY, &mut from_utf16).unwrap();
        let mut from_utf32 = String::new();
        pct_encode(&utf32[..], table::QUERY, &mut from_utf32).unwrap();

        let expected = encode(&s, table::QUERY);
        prop_assert_eq!(&from_utf16, &expected);
        prop_assert_eq!(&from_utf32, &expected);
    }

    #[test]
    fn encoded_host_is_a_host(s in any::<String>()) {
        let mut buf = String::new();
        encode_host(s.as_str(), &mut buf).unwrap();
        prop_assert!(full(grammar::host, buf.as_bytes()));
    }

    #[test]
    fn built_uris_parse(
        userinfo in any::<String>(),
        host in any::<String>(),
        path in any::<String>(),
        query in any::<String>(),
        fragment in any::<String>(),
    ) {
        let path = format!("/{path}");
        let uri = Uri::builder()
            .scheme("s")
            .authority_with(|b| b.userinfo(userinfo.as_str()).host(host.as_str()))
            .path(&path)
            .query(query.as_str())
            .fragment(fragment.as_str())
            .build()
            .unwrap();
        prop_assert!(uri.has_scheme());
        prop_assert_eq!(Uri::parse(uri.as_str()).unwrap(), uri);
    }

    #[test]
    fn parse_accepts_grammar_matches(s in "[a-z0-9:/?#@!$&'()*+,;=.~_%-]{0,24}") {
        let matched = full(grammar::uri_reference, s.as_bytes());
        prop_assert_eq!(Uri::parse(&s).is_ok(), matched);
    }
}

use uri_grammar::grammar::{self, full, Cursor, Match, Rule};

fn matches_fully<R: Rule + Copy>(rule: R, inputs: &[&str]) -> bool {
    inputs.iter().all(|s| full(rule, s.as_bytes()))
}

fn none_matches_fully<R: Rule + Copy>(rule: R, inputs: &[&str]) -> bool {
    inputs.iter().all(|s| !full(rule, s.as_bytes()))
}

const SUB_DELIMS: [&str; 11] = ["!", "$", "&", "'", "(", ")", "*", "+", ",", ";", "="];
const GEN_DELIMS: [&str; 7] = [":", "/", "?", "#", "[", "]", "@"];

#[test]
fn sub_delims() {
    assert!(matches_fully(grammar::sub_delims, &SUB_DELIMS));
    assert_eq!(grammar::sub_delims(b"rawr"), Match::NotMatched);
}

#[test]
fn gen_delims() {
    assert!(matches_fully(grammar::gen_delims, &GEN_DELIMS));
    assert_eq!(grammar::gen_delims(b"rawr"), Match::NotMatched);
}

#[test]
fn reserved() {
    assert!(matches_fully(grammar::reserved, &SUB_DELIMS));
    assert!(matches_fully(grammar::reserved, &GEN_DELIMS));
    assert_eq!(grammar::reserved(b"rawr"), Match::NotMatched);
}

#[test]
fn unreserved() {
    let unreserved_run = grammar::many1(grammar::unreserved);
    assert!(full(unreserved_run, b"~~~~Leonine.King1199__---"));
    assert_eq!(grammar::unreserved(b"%41"), Match::NotMatched);
}

#[test]
fn pct_encoded() {
    assert!(full(grammar::pct_encoded, b"%5B"));
    assert!(full(grammar::pct_encoded, b"%5b"));
}

#[test]
fn pchar() {
    let pchars = grammar::many1(grammar::pchar);
    assert!(full(pchars, b"~~:~~Le@on@ine.King1199__--:-"));
    assert!(full(pchars, b"%5B"));
    assert!(matches_fully(grammar::pchar, &SUB_DELIMS));
    assert!(none_matches_fully(grammar::pchar, &["/", "?", "#", "[", "]"]));
}

#[test]
fn query_and_fragment() {
    assert!(full(grammar::query, b"/lol?asdfasdfasdf"));
    assert!(full(grammar::fragment, b"/lol?asdfasdfasdf"));
    assert_eq!(grammar::query(b"a#b"), Match::Matched { consumed: 1 });
}

#[test]
fn dec_octet() {
    assert!(matches_fully(
        grammar::dec_octet,
        &["0", "1", "9", "10", "99", "100", "199", "200", "249", "250", "255"],
    ));
    assert!(none_matches_fully(
        grammar::dec_octet,
        &["lolol", "-1", "256", "010", "01", "267", "1337", "00"],
    ));
}

#[test]
fn ipv4_address() {
    assert!(matches_fully(
        grammar::ipv4_address,
        &["127.0.0.1", "255.255.255.255", "0.0.0.0", "192.68.0.27"],
    ));
    assert!(none_matches_fully(
        grammar::ipv4_address,
        &[
            "127.0.0.01",
            "255.255.255.255.255",
            "a.b.c.d",
            "192.68.334340.2227",
            "127.0.1",
        ],
    ));
}

#[test]
fn ipv6_address() {
    assert!(matches_fully(
        grammar::ipv6_address,
        &[
            "3ffe:1900:4545:3:200:f8ff:fe21:67cf",
            "::",
            "::1",
            "1::",
            "fe80::1:2",
            "::ffff:192.0.2.33",
            "1:2:3:4:5:6:1.2.3.4",
        ],
    ));
    assert!(none_matches_fully(
        grammar::ipv6_address,
        &["", ":", ":::", "1:2:3:4:5:6:7", "1::2::3", "12345::", "::1.2.3"],
    ));

    // A leading address is matched even when the rest is not one.
    assert_eq!(grammar::ipv6_address(b"1::2:x"), Match::Matched { consumed: 4 });
    assert_eq!(grammar::ipv6_address(b"fe80::1%25eth0"), Match::Matched { consumed: 7 });
    assert_eq!(grammar::ipv6_address(b"::1.2.3"), Match::Matched { consumed: 3 });
    assert_eq!(grammar::ipv6_address(b"12345::"), Match::NotMatched);
}

#[test]
fn h16_and_ls32() {
    assert!(full(grammar::h16, b"fe21"));
    assert_eq!(grammar::h16(b"fe210"), Match::Matched { consumed: 4 });
    assert_eq!(grammar::h16(b"g"), Match::NotMatched);
    assert!(full(grammar::ls32, b"fe21:67cf"));
    assert!(full(grammar::ls32, b"192.0.2.33"));
}

#[test]
fn cursor_walks_components() {
    let input = b"http://user@[::1]:8080/a/b?q";
    let mut cursor = Cursor::new(input);

    assert!(cursor.eat(grammar::scheme));
    assert!(cursor.eat(grammar::lit(b"://")));
    let authority_start = cursor.pos();
    assert!(cursor.eat(grammar::authority));
    assert_eq!(&input[authority_start..cursor.pos()], b"user@[::1]:8080");

    // A failed rule leaves the cursor where it was.
    assert!(!cursor.eat(grammar::lit(b"?")));
    assert!(cursor.eat(grammar::path_abempty));
    assert!(cursor.eat(grammar::seq(grammar::lit(b"?"), grammar::query)));
    assert!(cursor.is_at_end());
}

#[test]
fn uri_reference() {
    assert!(full(grammar::uri_reference, b"http://a/b/c/d;p?q"));
    assert!(full(grammar::uri_reference, b"g;x?y#s"));
    assert!(full(grammar::uri_reference, b"//g"));
    assert!(!full(grammar::uri_reference, b"g:h:i j"));
    assert!(!full(grammar::absolute_uri, b"//g"));
}

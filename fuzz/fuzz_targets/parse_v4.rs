#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use uri_grammar::{classify_host, grammar};

fuzz_target!(|data: &str| {
    let expected = Ipv4Addr::from_str(data).ok();
    assert_eq!(parse_v4(data), expected);
    assert_eq!(
        grammar::full(grammar::ipv4_address, data.as_bytes()),
        expected.is_some()
    );
});

fn parse_v4(s: &str) -> Option<Ipv4Addr> {
    match classify_host(s)?.ip_addr()? {
        IpAddr::V4(addr) => Some(addr),
        IpAddr::V6(_) => None,
    }
}

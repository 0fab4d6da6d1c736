#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;
use uri_grammar::{classify_host, grammar};

fuzz_target!(|data: &str| {
    let expected = Ipv6Addr::from_str(data).ok();
    assert_eq!(parse_v6(data), expected);
    assert_eq!(
        grammar::full(grammar::ipv6_address, data.as_bytes()),
        expected.is_some()
    );
});

fn parse_v6(s: &str) -> Option<Ipv6Addr> {
    match classify_host(&format!("[{s}]"))?.ip_addr()? {
        IpAddr::V6(addr) => Some(addr),
        IpAddr::V4(_) => None,
    }
}

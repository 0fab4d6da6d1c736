use super::{byte_range, digit, hexdig, lit, repeat, Match, Rule};
use crate::pct_enc::hexdig_value;

/// `dec-octet = DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35`
///
/// The alternatives are tried longest first, so that `"255"` is not cut
/// short at `"2"`. Leading zeros are never consumed as part of a longer
/// octet: `"01"` matches only its first byte.
pub fn dec_octet(input: &[u8]) -> Match {
    alt!(
        seq!(lit(b"25"), byte_range(b'0', b'5')),
        seq!(lit(b"2"), byte_range(b'0', b'4'), digit),
        seq!(lit(b"1"), repeat(digit, 2, 2)),
        seq!(byte_range(b'1', b'9'), digit),
        digit,
    )
    .apply(input)
}

/// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`
pub fn ipv4_address(input: &[u8]) -> Match {
    seq!(
        dec_octet,
        lit(b"."),
        dec_octet,
        lit(b"."),
        dec_octet,
        lit(b"."),
        dec_octet,
    )
    .apply(input)
}

/// `h16 = 1*4HEXDIG`
pub fn h16(input: &[u8]) -> Match {
    repeat(hexdig, 1, 4).apply(input)
}

/// `ls32 = ( h16 ":" h16 ) / IPv4address`
pub fn ls32(input: &[u8]) -> Match {
    alt!(seq!(h16, lit(b":"), h16), ipv4_address).apply(input)
}

/// `IPv6address`, as defined in [Section 3.2.2 of RFC 3986][ip]:
///
/// ```text
/// IPv6address =                            6( h16 ":" ) ls32
///             /                       "::" 5( h16 ":" ) ls32
///             / [               h16 ] "::" 4( h16 ":" ) ls32
///             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
///             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
///             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
///             / [ *4( h16 ":" ) h16 ] "::"              ls32
///             / [ *5( h16 ":" ) h16 ] "::"              h16
///             / [ *6( h16 ":" ) h16 ] "::"
/// ```
///
/// In other words: eight 16-bit groups, or fewer with exactly one `"::"`
/// standing for at least one zero group, where the last two groups may be
/// written as an IPv4 address.
///
/// The bounded repetitions before `"::"` cannot be matched greedily
/// one alternative at a time, so the address is read group by group instead.
/// The match is the longest prefix of `input` that is an address.
///
/// [ip]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
pub fn ipv6_address(input: &[u8]) -> Match {
    let mut reader = Reader::new(input);
    Match::from_len(reader.read_v6().map(|_| reader.pos))
}

/// Reads an IPv4 address matching the whole input.
pub(crate) fn read_ipv4(input: &[u8]) -> Option<[u8; 4]> {
    let mut reader = Reader::new(input);
    let addr = reader.read_v4()?;
    (!reader.has_remaining()).then(|| addr.to_be_bytes())
}

/// Reads an IPv6 address matching the whole input.
pub(crate) fn read_ipv6(input: &[u8]) -> Option<[u16; 8]> {
    let mut reader = Reader::new(input);
    let segs = reader.read_v6()?;
    (!reader.has_remaining()).then_some(segs)
}

/// Checks that `i` groups, with an ellipsis at `ellipsis_i` (8 if none),
/// form a whole address, and returns its groups.
fn whole_v6(mut segs: [u16; 8], i: usize, ellipsis_i: usize) -> Option<[u16; 8]> {
    if ellipsis_i == 8 {
        // Without an ellipsis all eight groups are needed.
        return (i == 8).then_some(segs);
    }
    if i == 8 {
        // Eliding nothing.
        return None;
    }
    // Shift the segments after the ellipsis to the right.
    for j in (ellipsis_i..i).rev() {
        segs[8 - (i - j)] = segs[j];
        segs[j] = 0;
    }
    Some(segs)
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

enum Seg {
    // *1":" 1*4HEXDIG
    Normal(u16, bool),
    // "::"
    Ellipsis,
    // *1":" 1*4HEXDIG "."
    MaybeV4(bool),
    // ":"
    SingleColon,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.bytes.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.bytes.len());
    }

    fn read_byte(&mut self, x: u8) -> bool {
        if self.peek(0) == Some(x) {
            self.skip(1);
            true
        } else {
            false
        }
    }

    fn peek_digit(&self, i: usize) -> Option<u32> {
        self.peek(i).and_then(|x| (x as char).to_digit(10))
    }

    fn peek_hexdig(&self, i: usize) -> Option<u16> {
        self.peek(i).and_then(hexdig_value).map(u16::from)
    }

    /// Reads the longest prefix that is a whole address.
    fn read_v6(&mut self) -> Option<[u16; 8]> {
        let mut segs = [0; 8];
        let mut ellipsis_i = 8;
        let mut longest = None;

        let mut i = 0;
        while i < 8 {
            match self.read_v6_segment() {
                Some(Seg::Normal(seg, colon)) => {
                    if colon == (i == 0 || i == ellipsis_i) {
                        // Leading colon, triple colons, or no colon.
                        break;
                    }
                    segs[i] = seg;
                    i += 1;
                }
                Some(Seg::Ellipsis) => {
                    if ellipsis_i != 8 {
                        // Multiple ellipses.
                        break;
                    }
                    ellipsis_i = i;
                }
                Some(Seg::MaybeV4(colon)) => {
                    if colon == (i == 0 || i == ellipsis_i) {
                        // Triple colons, or no colon.
                        break;
                    }
                    let digits = self.pos;
                    let tail = if i <= 6 { self.read_v4() } else { None };
                    let v4 = tail.and_then(|addr| {
                        let [a, b, c, d] = addr.to_be_bytes();
                        let mut segs = segs;
                        segs[i] = u16::from_be_bytes([a, b]);
                        segs[i + 1] = u16::from_be_bytes([c, d]);
                        whole_v6(segs, i + 2, ellipsis_i)
                    });
                    if let Some(addr) = v4 {
                        longest = Some((self.pos, addr));
                    } else {
                        // The digits before "." are then the last group.
                        // INVARIANT: `digits` was reached before.
                        self.pos = digits;
                        segs[i] = self.read_hex_group();
                        if let Some(addr) = whole_v6(segs, i + 1, ellipsis_i) {
                            longest = Some((self.pos, addr));
                        }
                    }
                    break;
                }
                Some(Seg::SingleColon) | None => break,
            }
            if let Some(addr) = whole_v6(segs, i, ellipsis_i) {
                longest = Some((self.pos, addr));
            }
        }

        let (pos, addr) = longest?;
        // INVARIANT: `pos` ends a prefix already read.
        self.pos = pos;
        Some(addr)
    }

    fn read_hex_group(&mut self) -> u16 {
        let mut x = 0;
        while let Some(v) = self.peek_hexdig(0) {
            x = (x << 4) | v;
            // INVARIANT: Skipping a hexadecimal digit is fine.
            self.skip(1);
        }
        x
    }

    fn read_v6_segment(&mut self) -> Option<Seg> {
        let colon = self.read_byte(b':');
        let Some(first) = self.peek(0) else {
            return colon.then_some(Seg::SingleColon);
        };

        let Some(mut x) = self.peek_hexdig(0) else {
            return colon.then(|| {
                if first == b':' {
                    // INVARIANT: Skipping ":" is fine.
                    self.skip(1);
                    Seg::Ellipsis
                } else {
                    Seg::SingleColon
                }
            });
        };
        let mut i = 1;

        while i < 4 {
            let Some(b) = self.peek(i) else {
                // INVARIANT: Skipping `i` hexadecimal digits is fine.
                self.skip(i);
                return Some(Seg::Normal(x, colon));
            };
            match self.peek_hexdig(i) {
                Some(v) => {
                    x = (x << 4) | v;
                    i += 1;
                    continue;
                }
                None if b == b'.' => return Some(Seg::MaybeV4(colon)),
                None => break,
            }
        }
        // INVARIANT: Skipping `i` hexadecimal digits is fine.
        self.skip(i);
        Some(Seg::Normal(x, colon))
    }

    fn read_v4(&mut self) -> Option<u32> {
        let mut addr = self.read_v4_octet()? << 24;
        for i in (0..3).rev() {
            if !self.read_byte(b'.') {
                return None;
            }
            addr |= self.read_v4_octet()? << (i * 8);
        }
        Some(addr)
    }

    fn read_v4_octet(&mut self) -> Option<u32> {
        let mut res = self.peek_digit(0)?;
        if res == 0 {
            // INVARIANT: Skipping "0" is fine.
            self.skip(1);
            return Some(0);
        }

        for i in 1..3 {
            let Some(x) = self.peek_digit(i) else {
                // INVARIANT: Skipping `i` digits is fine.
                self.skip(i);
                return Some(res);
            };
            res = res * 10 + x;
        }
        // INVARIANT: Skipping 3 digits is fine.
        self.skip(3);

        u8::try_from(res).is_ok().then_some(res)
    }
}

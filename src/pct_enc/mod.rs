//! Percent-encoding utilities.
//!
//! The codec walks the code points of its input and, for each of them,
//! either copies it through or writes `%` followed by two lowercase
//! hexadecimal digits for every byte of its UTF-8 encoding.
//!
//! # Truncation
//!
//! Encoding stops at the first illegal or incomplete code point in the
//! input. Everything encoded up to that point stays in the output buffer
//! and an [`EncodeError`] pointing at the offending code unit is returned.

pub mod encoder;
mod estr;
pub mod table;

pub use encoder::Encoder;
pub use estr::EStr;
pub use table::Table;

use crate::{
    error::{DecodeError, EncodeError, EncodeErrorKind},
    utf8::{encode_utf8, CodePoint, CodePointIter, IntoCodePoints},
};
use alloc::{string::String, vec::Vec};

const fn gen_hex_table() -> [u8; 512] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut i = 0;
    let mut out = [0; 512];
    while i < 256 {
        out[i * 2] = HEX_DIGITS[i >> 4];
        out[i * 2 + 1] = HEX_DIGITS[i & 0b1111];
        i += 1;
    }
    out
}

static HEX_TABLE: &[u8; 512] = &gen_hex_table();

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Checks whether both bytes are hexadecimal digits.
pub(crate) const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    OCTET_TABLE_LO[hi as usize] | OCTET_TABLE_LO[lo as usize] < 128
}

/// Decodes a percent-encoded octet, given two hexadecimal digits.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// Returns the value of a hexadecimal digit.
pub(crate) const fn hexdig_value(x: u8) -> Option<u8> {
    match OCTET_TABLE_LO[x as usize] {
        v if v < 16 => Some(v),
        _ => None,
    }
}

/// Appends the percent-encoded triplet of a byte.
#[inline]
pub(crate) fn push_encoded_byte(x: u8, buf: &mut String) {
    buf.push('%');
    buf.push(HEX_TABLE[x as usize * 2] as char);
    buf.push(HEX_TABLE[x as usize * 2 + 1] as char);
}

/// A set of characters left unencoded by [`pct_encode`].
///
/// This is implemented for [`Table`], for [`Printable`], and for
/// closures of type `Fn(char) -> bool`.
pub trait SafeSet {
    /// Checks whether the character may be copied through unencoded.
    fn allows(&self, ch: char) -> bool;

    /// Checks whether percent-encoded octets already in the input
    /// may be copied through unchanged.
    ///
    /// When this returns `false`, a `'%'` is always encoded unless
    /// [`allows`](Self::allows) accepts it.
    fn allows_pct_encoded(&self) -> bool {
        false
    }
}

impl SafeSet for Table {
    #[inline]
    fn allows(&self, ch: char) -> bool {
        Table::allows(*self, ch)
    }

    #[inline]
    fn allows_pct_encoded(&self) -> bool {
        Table::allows_pct_encoded(*self)
    }
}

impl<F: Fn(char) -> bool> SafeSet for F {
    #[inline]
    fn allows(&self, ch: char) -> bool {
        self(ch)
    }
}

/// The default safe set: printable ASCII from `'!'` (33) to `'z'` (122).
///
/// Note that this set is broader than any URI component allows:
/// it leaves delimiters such as `'/'`, `'?'` and `'%'` untouched.
/// Use a [`Table`] for exact RFC 3986 safety.
#[derive(Clone, Copy, Debug, Default)]
pub struct Printable;

impl SafeSet for Printable {
    #[inline]
    fn allows(&self, ch: char) -> bool {
        matches!(ch, '\u{21}'..='\u{7a}')
    }
}

/// Returns the two hexadecimal digits following a `'%'`, if any.
fn hexdig_pair(mut ahead: impl Iterator<Item = CodePoint>) -> Option<(char, char)> {
    let hi = ahead.next()?.as_char()?;
    let lo = ahead.next()?.as_char()?;
    (hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()).then_some((hi, lo))
}

/// Percent-encodes the code points of `input` into `buf`.
///
/// For each code point in order:
///
/// - An illegal or incomplete code point stops encoding. The output
///   produced so far is kept in `buf` and an error is returned.
/// - A character that `safe` allows is copied through.
/// - If `safe` allows percent-encoded octets, a `'%'` followed by two
///   hexadecimal digits is copied through as a whole.
/// - Any other character is UTF-8 encoded and each byte is written as
///   `%` followed by two lowercase hexadecimal digits.
///
/// # Errors
///
/// Returns `Err` if the input contains an illegal or incomplete code
/// point. The error index is counted in code units of the input.
///
/// # Examples
///
/// ```
/// use uri_grammar::pct_enc::{pct_encode, table::UNRESERVED, Printable};
///
/// let mut buf = String::new();
/// pct_encode("żółw 1", UNRESERVED, &mut buf).unwrap();
/// assert_eq!(buf, "%c5%bc%c3%b3%c5%82w%201");
///
/// // Truncation keeps what was already written.
/// let mut buf = String::new();
/// let err = pct_encode(&b"a b\xffc"[..], Printable, &mut buf).unwrap_err();
/// assert_eq!(buf, "a%20b");
/// assert_eq!(err.index(), 3);
/// ```
pub fn pct_encode<I, S>(input: I, safe: S, buf: &mut String) -> Result<(), EncodeError>
where
    I: IntoCodePoints,
    S: SafeSet,
{
    encode_code_points(input.into_code_points(), safe, buf)
}

pub(crate) fn encode_code_points<C, S>(mut iter: C, safe: S, buf: &mut String) -> Result<(), EncodeError>
where
    C: CodePointIter,
    S: SafeSet,
{
    buf.reserve(iter.size_hint().0);

    loop {
        let index = iter.offset();
        let Some(cp) = iter.next() else {
            return Ok(());
        };

        let ch = match cp {
            CodePoint::Valid(ch) => ch,
            CodePoint::Illegal => return Err(truncate(index, EncodeErrorKind::Illegal)),
            CodePoint::Incomplete => return Err(truncate(index, EncodeErrorKind::Incomplete)),
        };

        if safe.allows(ch) {
            buf.push(ch);
        } else if ch == '%' && safe.allows_pct_encoded() {
            if let Some((hi, lo)) = hexdig_pair(iter.clone()) {
                buf.push('%');
                buf.push(hi);
                buf.push(lo);
                iter.nth(1);
            } else {
                push_encoded_byte(b'%', buf);
            }
        } else {
            for &x in encode_utf8(ch).iter() {
                push_encoded_byte(x, buf);
            }
        }
    }
}

#[cold]
fn truncate(index: usize, kind: EncodeErrorKind) -> EncodeError {
    tracing::debug!(index, ?kind, "percent-encoding stopped at malformed code point");
    EncodeError { index, kind }
}

/// Percent-encodes the code points of `input` into `buf`
/// with the default [`Printable`] safe set.
///
/// # Errors
///
/// Returns `Err` if the input contains an illegal or incomplete code point.
/// See [`pct_encode`] for details.
///
/// # Examples
///
/// ```
/// use uri_grammar::pct_enc::pct_encode_default;
///
/// let mut buf = String::new();
/// pct_encode_default("{hello world}", &mut buf).unwrap();
/// assert_eq!(buf, "%7bhello%20world%7d");
/// ```
pub fn pct_encode_default<I: IntoCodePoints>(input: I, buf: &mut String) -> Result<(), EncodeError> {
    pct_encode(input, Printable, buf)
}

/// Percent-encodes a string slice with the table of an [`Encoder`].
///
/// # Examples
///
/// ```
/// use uri_grammar::pct_enc::{encode_str, encoder::Query};
///
/// assert_eq!(encode_str::<Query>("q=rust lang#1"), "q=rust%20lang%231");
/// ```
#[must_use]
pub fn encode_str<E: Encoder>(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if E::TABLE.allows(ch) {
            buf.push(ch);
        } else if ch == '%' && E::TABLE.allows_pct_encoded() {
            match hexdig_pair(chars.clone().map(CodePoint::Valid)) {
                Some((hi, lo)) => {
                    buf.push('%');
                    buf.push(hi);
                    buf.push(lo);
                    chars.nth(1);
                }
                None => push_encoded_byte(b'%', &mut buf),
            }
        } else {
            for &x in encode_utf8(ch).iter() {
                push_encoded_byte(x, &mut buf);
            }
        }
    }
    buf
}

/// Decodes a percent-encoded string into bytes.
///
/// # Errors
///
/// Returns `Err` if a `'%'` is not followed by two hexadecimal digits.
/// The error index points to the `'%'`.
///
/// # Examples
///
/// ```
/// use uri_grammar::pct_enc::decode;
///
/// assert_eq!(decode("www.%c5%bc%C3%B3.pl")?, "www.żó.pl".as_bytes());
/// assert_eq!(decode("%2d%").unwrap_err().index(), 3);
/// # Ok::<_, uri_grammar::DecodeError>(())
/// ```
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(&[hi, lo]) if is_hexdig_pair(hi, lo) => i += 3,
                _ => return Err(DecodeError { index: i }),
            }
        } else {
            i += 1;
        }
    }
    Ok(decode_validated(bytes))
}

/// Decodes bytes in which every `'%'` starts a valid percent-encoded octet.
///
/// A `'%'` not followed by two hexadecimal digits is copied as is.
pub(crate) fn decode_validated(s: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i..] {
            [b'%', hi, lo, ..] if is_hexdig_pair(hi, lo) => {
                buf.push(decode_octet(hi, lo));
                i += 3;
            }
            [x, ..] => {
                buf.push(x);
                i += 1;
            }
            [] => break,
        }
    }
    buf
}

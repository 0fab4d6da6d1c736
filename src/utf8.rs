//! Code-point iteration over UTF-8, UTF-16 and UTF-32 code units,
//! and UTF-8 encoding of a single character.
//!
//! Decoding never panics. Malformed input is reported in-band as
//! [`CodePoint::Illegal`] and input truncated in the middle of a
//! sequence as [`CodePoint::Incomplete`].

use core::{fmt, iter::FusedIterator, ops::Deref};

/// A decoded code point, or a sentinel for malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodePoint {
    /// A Unicode scalar value.
    Valid(char),
    /// Malformed input at this position.
    Illegal,
    /// Input ended in the middle of a multi-unit sequence.
    Incomplete,
}

impl CodePoint {
    /// Returns the character if the code point is valid.
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Valid(ch) => Some(ch),
            _ => None,
        }
    }

    /// Checks whether the code point is valid.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(ch: char) -> Self {
        Self::Valid(ch)
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A code unit of a Unicode encoding form: `u8` for UTF-8,
/// `u16` for UTF-16, or `u32` for UTF-32.
///
/// This trait is sealed.
pub trait CodeUnit: Copy + fmt::Debug + private::Sealed {
    /// Decodes the code point at the start of `units`.
    ///
    /// Returns the code point and the number of units it spans,
    /// which is at least one when `units` is not empty.
    fn decode(units: &[Self]) -> (CodePoint, usize);
}

#[inline]
const fn utf8_first_byte(byte: u8, width: usize) -> u32 {
    (byte & (0x7F >> width)) as u32
}

#[inline]
const fn utf8_acc_cont_byte(ch: u32, byte: u8) -> u32 {
    (ch << 6) | (byte & CONT_MASK) as u32
}

const CONT_MASK: u8 = 0b0011_1111;
const TAG_CONT: u8 = 0b1000_0000;

const UTF8_CHAR_WIDTH: &[u8; 256] = &[
    // 1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 1
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 2
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 3
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 4
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 5
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 6
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 7
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 8
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // 9
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // A
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // B
    0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // C
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // D
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // E
    4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // F
];

#[inline]
const fn utf8_char_width(b: u8) -> usize {
    UTF8_CHAR_WIDTH[b as usize] as usize
}

impl CodeUnit for u8 {
    fn decode(units: &[u8]) -> (CodePoint, usize) {
        let Some(&x) = units.first() else {
            return (CodePoint::Incomplete, 0);
        };

        let width = utf8_char_width(x);
        match width {
            0 => return (CodePoint::Illegal, 1),
            1 => return (CodePoint::Valid(x as char), 1),
            _ => {}
        }

        // The second byte is further restricted to rule out
        // overlong forms, surrogates and values above U+10FFFF.
        let second = match x {
            0xE0 => 0xA0..=0xBF,
            0xED => 0x80..=0x9F,
            0xF0 => 0x90..=0xBF,
            0xF4 => 0x80..=0x8F,
            _ => 0x80..=0xBF,
        };

        let mut ch = utf8_first_byte(x, width);
        for i in 1..width {
            let Some(&y) = units.get(i) else {
                return (CodePoint::Incomplete, i);
            };
            let ok = if i == 1 {
                second.contains(&y)
            } else {
                y & !CONT_MASK == TAG_CONT
            };
            if !ok {
                return (CodePoint::Illegal, i);
            }
            ch = utf8_acc_cont_byte(ch, y);
        }

        match char::from_u32(ch) {
            Some(ch) => (CodePoint::Valid(ch), width),
            None => (CodePoint::Illegal, width),
        }
    }
}

impl CodeUnit for u16 {
    fn decode(units: &[u16]) -> (CodePoint, usize) {
        let Some(&x) = units.first() else {
            return (CodePoint::Incomplete, 0);
        };

        match x {
            0xD800..=0xDBFF => match units.get(1) {
                None => (CodePoint::Incomplete, 1),
                Some(&y @ 0xDC00..=0xDFFF) => {
                    let ch = 0x10000 + (((x as u32) - 0xD800) << 10) + ((y as u32) - 0xDC00);
                    match char::from_u32(ch) {
                        Some(ch) => (CodePoint::Valid(ch), 2),
                        None => (CodePoint::Illegal, 2),
                    }
                }
                Some(_) => (CodePoint::Illegal, 1),
            },
            // Unpaired trailing surrogate.
            0xDC00..=0xDFFF => (CodePoint::Illegal, 1),
            _ => match char::from_u32(x as u32) {
                Some(ch) => (CodePoint::Valid(ch), 1),
                None => (CodePoint::Illegal, 1),
            },
        }
    }
}

impl CodeUnit for u32 {
    fn decode(units: &[u32]) -> (CodePoint, usize) {
        match units.first() {
            None => (CodePoint::Incomplete, 0),
            Some(&x) => match char::from_u32(x) {
                Some(ch) => (CodePoint::Valid(ch), 1),
                None => (CodePoint::Illegal, 1),
            },
        }
    }
}

/// A lazy iterator over the code points of a code unit slice.
///
/// The iterator never stops early on malformed input: a sentinel is
/// yielded and decoding resumes right after the offending units.
#[derive(Clone, Debug)]
pub struct CodePoints<'a, U: CodeUnit> {
    units: &'a [U],
    pos: usize,
}

impl<'a, U: CodeUnit> CodePoints<'a, U> {
    /// Creates a new iterator over the given code units.
    #[inline]
    #[must_use]
    pub fn new(units: &'a [U]) -> Self {
        Self { units, pos: 0 }
    }

    /// Returns the remaining code units.
    #[inline]
    #[must_use]
    pub fn as_units(&self) -> &'a [U] {
        &self.units[self.pos..]
    }
}

impl<U: CodeUnit> Iterator for CodePoints<'_, U> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        let rem = self.as_units();
        if rem.is_empty() {
            return None;
        }
        let (cp, len) = U::decode(rem);
        // INVARIANT: `pos` is non-decreasing and never exceeds the length.
        self.pos += len.clamp(1, rem.len());
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.units.len() - self.pos;
        ((len + 3) / 4, Some(len))
    }
}

impl<U: CodeUnit> FusedIterator for CodePoints<'_, U> {}

/// An iterator over code points that knows its position in the input.
pub trait CodePointIter: Iterator<Item = CodePoint> + Clone {
    /// Returns the index, in code units, of the next code point.
    fn offset(&self) -> usize;
}

impl<U: CodeUnit> CodePointIter for CodePoints<'_, U> {
    #[inline]
    fn offset(&self) -> usize {
        self.pos
    }
}

/// Conversion into a [`CodePointIter`].
///
/// This is implemented for string slices and for slices of UTF-8,
/// UTF-16 and UTF-32 code units.
pub trait IntoCodePoints {
    /// The resulting iterator.
    type IntoIter: CodePointIter;

    /// Creates a code-point iterator from a value.
    fn into_code_points(self) -> Self::IntoIter;
}

impl<'a, U: CodeUnit> IntoCodePoints for CodePoints<'a, U> {
    type IntoIter = Self;

    #[inline]
    fn into_code_points(self) -> Self {
        self
    }
}

impl<'a> IntoCodePoints for &'a str {
    type IntoIter = CodePoints<'a, u8>;

    #[inline]
    fn into_code_points(self) -> Self::IntoIter {
        CodePoints::new(self.as_bytes())
    }
}

impl<'a> IntoCodePoints for &'a alloc::string::String {
    type IntoIter = CodePoints<'a, u8>;

    #[inline]
    fn into_code_points(self) -> Self::IntoIter {
        CodePoints::new(self.as_bytes())
    }
}

impl<'a, U: CodeUnit> IntoCodePoints for &'a [U] {
    type IntoIter = CodePoints<'a, U>;

    #[inline]
    fn into_code_points(self) -> Self::IntoIter {
        CodePoints::new(self)
    }
}

impl<'a, U: CodeUnit, const N: usize> IntoCodePoints for &'a [U; N] {
    type IntoIter = CodePoints<'a, U>;

    #[inline]
    fn into_code_points(self) -> Self::IntoIter {
        CodePoints::new(self)
    }
}

/// The UTF-8 encoding of a single character, 1 to 4 bytes long.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Utf8Bytes {
    buf: [u8; 4],
    len: u8,
}

impl Deref for Utf8Bytes {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl fmt::Debug for Utf8Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

/// Encodes a character into UTF-8.
///
/// The bits of the character are written to the following templates:
///
/// ```text
///  7 bits: U+0000  ..= U+007F   => 0xxxxxxx
/// 11 bits: U+0080  ..= U+07FF   => 110xxxxx 10xxxxxx
/// 16 bits: U+0800  ..= U+FFFF   => 1110xxxx 10xxxxxx 10xxxxxx
/// 21 bits: U+10000 ..= U+10FFFF => 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
/// ```
///
/// Surrogates and values above U+10FFFF are not representable as `char`,
/// so every input has a well-defined encoding.
///
/// # Examples
///
/// ```
/// use uri_grammar::utf8::encode_utf8;
///
/// assert_eq!(&*encode_utf8('A'), b"A");
/// assert_eq!(&*encode_utf8('ż'), b"\xc5\xbc");
/// assert_eq!(&*encode_utf8('😃'), b"\xf0\x9f\x98\x83");
/// ```
#[must_use]
pub const fn encode_utf8(ch: char) -> Utf8Bytes {
    let x = ch as u32;
    let mut buf = [0; 4];
    let len = if x < 0x80 {
        buf[0] = x as u8;
        1
    } else if x < 0x800 {
        buf[0] = 0b1100_0000 | (x >> 6) as u8;
        buf[1] = TAG_CONT | (x as u8 & CONT_MASK);
        2
    } else if x < 0x10000 {
        buf[0] = 0b1110_0000 | (x >> 12) as u8;
        buf[1] = TAG_CONT | ((x >> 6) as u8 & CONT_MASK);
        buf[2] = TAG_CONT | (x as u8 & CONT_MASK);
        3
    } else {
        buf[0] = 0b1111_0000 | (x >> 18) as u8;
        buf[1] = TAG_CONT | ((x >> 12) as u8 & CONT_MASK);
        buf[2] = TAG_CONT | ((x >> 6) as u8 & CONT_MASK);
        buf[3] = TAG_CONT | (x as u8 & CONT_MASK);
        4
    };
    Utf8Bytes { buf, len }
}

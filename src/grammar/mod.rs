//! Recognizers for the generic URI syntax of [RFC 3986].
//!
//! Every grammar production is a [`Rule`]: a pure function from an input
//! byte slice to a [`Match`]. A rule matches a *prefix* of its input and
//! reports how many bytes it consumed; whether the whole input must match
//! is up to the caller, see [`full`].
//!
//! Rules are combined with [`alt`], [`seq`], [`opt`], [`many0`], [`many1`]
//! and [`repeat`]. Since rules work on slices and never on shared state, a
//! failed alternative leaves nothing behind and the next one starts from
//! the same position. [`Cursor`] offers the same guarantee to callers who
//! walk an input rule by rule.
//!
//! # Examples
//!
//! ```
//! use uri_grammar::grammar::{self, full, Cursor, Match};
//!
//! assert!(full(grammar::ipv4_address, b"192.68.0.27"));
//! assert!(!full(grammar::ipv4_address, b"127.0.0.01"));
//!
//! // A prefix match is still a match.
//! assert_eq!(grammar::dec_octet(b"2567"), Match::Matched { consumed: 2 });
//!
//! let mut cursor = Cursor::new(b"user@example.com");
//! assert!(cursor.eat(grammar::userinfo));
//! assert!(cursor.eat(grammar::lit(b"@")));
//! assert!(!cursor.eat(grammar::lit(b":")));
//! assert!(cursor.eat(grammar::host));
//! assert!(cursor.is_at_end());
//! ```
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986

/// Chains rules into a sequence, `seq!(a, b, c)` meaning `a b c`.
macro_rules! seq {
    ($a:expr $(,)?) => { $a };
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::grammar::seq($a, seq!($($rest),+))
    };
}

/// Chains rules into an ordered choice, `alt!(a, b, c)` meaning `a / b / c`.
macro_rules! alt {
    ($a:expr $(,)?) => { $a };
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::grammar::alt($a, alt!($($rest),+))
    };
}

mod ip;
mod rules;

pub(crate) use ip::{read_ipv4, read_ipv6};
pub use ip::{dec_octet, h16, ipv4_address, ipv6_address, ls32};
pub use rules::*;

use crate::pct_enc::Table;

/// The result of applying a [`Rule`] to an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Match {
    /// The rule matched the first `consumed` bytes of the input.
    Matched {
        /// The length of the matched prefix.
        consumed: usize,
    },
    /// The rule did not match.
    NotMatched,
}

impl Match {
    /// Checks whether the rule matched.
    #[inline]
    #[must_use]
    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Returns the length of the matched prefix, if any.
    #[inline]
    #[must_use]
    pub const fn consumed(self) -> Option<usize> {
        match self {
            Self::Matched { consumed } => Some(consumed),
            Self::NotMatched => None,
        }
    }

    #[inline]
    pub(crate) const fn from_len(len: Option<usize>) -> Self {
        match len {
            Some(consumed) => Self::Matched { consumed },
            None => Self::NotMatched,
        }
    }
}

/// A grammar production.
///
/// Implemented for all functions of type `fn(&[u8]) -> Match`
/// and for the combinators in this module.
pub trait Rule {
    /// Applies the rule to the start of `input`.
    fn apply(&self, input: &[u8]) -> Match;
}

impl<F: Fn(&[u8]) -> Match> Rule for F {
    #[inline]
    fn apply(&self, input: &[u8]) -> Match {
        self(input)
    }
}

/// Checks whether `rule` matches the whole of `input`.
#[inline]
#[must_use]
pub fn full<R: Rule>(rule: R, input: &[u8]) -> bool {
    rule.apply(input) == Match::Matched {
        consumed: input.len(),
    }
}

/// A position in an input, advanced rule by rule.
///
/// The cursor only moves when a rule matches. After a failed
/// [`eat`](Self::eat), the cursor is exactly where it was.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[inline]
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Returns the current position.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the input after the current position.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Checks whether the whole input has been consumed.
    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Applies `rule` at the current position and moves past the match.
    ///
    /// Returns `false`, leaving the cursor unmoved, if the rule does not match.
    pub fn eat<R: Rule>(&mut self, rule: R) -> bool {
        match rule.apply(self.remaining()) {
            Match::Matched { consumed } => {
                // INVARIANT: A rule never consumes more than its input.
                self.pos += consumed;
                debug_assert!(self.pos <= self.input.len());
                true
            }
            Match::NotMatched => false,
        }
    }

    /// Moves the cursor back to a position previously returned by [`pos`](Self::pos).
    ///
    /// Returns `false`, leaving the cursor unmoved, if `pos` is past the
    /// current position.
    pub fn reset(&mut self, pos: usize) -> bool {
        if pos > self.pos {
            return false;
        }
        self.pos = pos;
        true
    }
}

/// Matches one of two rules, trying `a` first.
#[derive(Clone, Copy, Debug)]
pub struct Alt<A, B>(A, B);

impl<A: Rule, B: Rule> Rule for Alt<A, B> {
    #[inline]
    fn apply(&self, input: &[u8]) -> Match {
        match self.0.apply(input) {
            Match::NotMatched => self.1.apply(input),
            m => m,
        }
    }
}

/// Matches `a` followed by `b`.
#[derive(Clone, Copy, Debug)]
pub struct Seq<A, B>(A, B);

impl<A: Rule, B: Rule> Rule for Seq<A, B> {
    #[inline]
    fn apply(&self, input: &[u8]) -> Match {
        let Some(a) = self.0.apply(input).consumed() else {
            return Match::NotMatched;
        };
        match self.1.apply(&input[a..]) {
            Match::Matched { consumed } => Match::Matched {
                consumed: a + consumed,
            },
            Match::NotMatched => Match::NotMatched,
        }
    }
}

/// Matches a rule repeatedly, as many times as possible within bounds.
#[derive(Clone, Copy, Debug)]
pub struct Repeat<R> {
    rule: R,
    min: usize,
    max: usize,
}

impl<R: Rule> Rule for Repeat<R> {
    fn apply(&self, input: &[u8]) -> Match {
        let mut pos = 0;
        let mut n = 0;
        while n < self.max {
            match self.rule.apply(&input[pos..]) {
                Match::Matched { consumed: 0 } => {
                    // Every further repetition matches empty as well.
                    n = self.max;
                    break;
                }
                Match::Matched { consumed } => pos += consumed,
                Match::NotMatched => break,
            }
            n += 1;
        }
        if n >= self.min {
            Match::Matched { consumed: pos }
        } else {
            Match::NotMatched
        }
    }
}

/// Matches a literal byte string.
#[derive(Clone, Copy, Debug)]
pub struct Lit(&'static [u8]);

impl Rule for Lit {
    #[inline]
    fn apply(&self, input: &[u8]) -> Match {
        if input.starts_with(self.0) {
            Match::Matched {
                consumed: self.0.len(),
            }
        } else {
            Match::NotMatched
        }
    }
}

/// Matches a single byte allowed by a [`Table`].
#[derive(Clone, Copy, Debug)]
pub struct Class(Table);

impl Rule for Class {
    #[inline]
    fn apply(&self, input: &[u8]) -> Match {
        match input.first() {
            Some(&x) if self.0.allows_ascii(x) => Match::Matched { consumed: 1 },
            _ => Match::NotMatched,
        }
    }
}

/// Matches a single byte within an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct ByteRange(u8, u8);

impl Rule for ByteRange {
    #[inline]
    fn apply(&self, input: &[u8]) -> Match {
        match input.first() {
            Some(&x) if self.0 <= x && x <= self.1 => Match::Matched { consumed: 1 },
            _ => Match::NotMatched,
        }
    }
}

/// Matches `a`, or `b` if `a` does not match.
pub const fn alt<A: Rule, B: Rule>(a: A, b: B) -> Alt<A, B> {
    Alt(a, b)
}

/// Matches `a` then `b`.
pub const fn seq<A: Rule, B: Rule>(a: A, b: B) -> Seq<A, B> {
    Seq(a, b)
}

/// Matches `rule` between `min` and `max` times, inclusive.
pub const fn repeat<R: Rule>(rule: R, min: usize, max: usize) -> Repeat<R> {
    Repeat { rule, min, max }
}

/// Matches `rule` zero or one time.
pub const fn opt<R: Rule>(rule: R) -> Repeat<R> {
    repeat(rule, 0, 1)
}

/// Matches `rule` any number of times.
pub const fn many0<R: Rule>(rule: R) -> Repeat<R> {
    repeat(rule, 0, usize::MAX)
}

/// Matches `rule` at least once.
pub const fn many1<R: Rule>(rule: R) -> Repeat<R> {
    repeat(rule, 1, usize::MAX)
}

/// Matches the given bytes literally.
pub const fn lit(s: &'static [u8]) -> Lit {
    Lit(s)
}

/// Matches one byte allowed by `table`.
///
/// Percent-encoded octets are not matched even if the table allows them;
/// combine with [`pct_encoded`] for that.
pub const fn class(table: Table) -> Class {
    Class(table)
}

/// Matches one byte in `lo..=hi`.
pub const fn byte_range(lo: u8, hi: u8) -> ByteRange {
    ByteRange(lo, hi)
}

/// Matches the empty string.
#[inline]
pub fn empty(_input: &[u8]) -> Match {
    Match::Matched { consumed: 0 }
}

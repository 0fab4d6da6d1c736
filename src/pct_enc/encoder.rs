//! Percent-encoders for URI components.

use super::table::{self, Table};

/// A trait used by [`EStr`] and the builder to specify the table used for encoding.
///
/// [`EStr`]: super::EStr
pub trait Encoder: 'static {
    /// The table used for encoding.
    const TABLE: Table;
}

/// An encoder for data contained in a URI component.
///
/// Only unreserved characters are left as is, so the output never
/// contains delimiters.
#[derive(Clone, Copy, Debug)]
pub struct Data(());

/// An encoder for userinfo.
#[derive(Clone, Copy, Debug)]
pub struct Userinfo(());

/// An encoder for registered names.
#[derive(Clone, Copy, Debug)]
pub struct RegName(());

/// An encoder for port.
#[derive(Clone, Copy, Debug)]
pub struct Port(());

/// An encoder for path.
#[derive(Clone, Copy, Debug)]
pub struct Path(());

/// An encoder for query.
#[derive(Clone, Copy, Debug)]
pub struct Query(());

/// An encoder for fragment.
#[derive(Clone, Copy, Debug)]
pub struct Fragment(());

impl Encoder for Data {
    const TABLE: Table = table::UNRESERVED.or_pct_encoded();
}

impl Encoder for Userinfo {
    const TABLE: Table = table::USERINFO;
}

impl Encoder for RegName {
    const TABLE: Table = table::REG_NAME;
}

impl Encoder for Port {
    const TABLE: Table = table::PORT;
}

impl Encoder for Path {
    const TABLE: Table = table::PATH;
}

impl Encoder for Query {
    const TABLE: Table = table::QUERY;
}

impl Encoder for Fragment {
    const TABLE: Table = table::FRAGMENT;
}

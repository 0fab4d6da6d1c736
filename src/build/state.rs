//! Builder typestates.
//!
//! A state names the component last written. The transitions below
//! follow the order of components in `URI-reference`.

macro_rules! states {
    ($($(#[$attr:meta])* $name:ident;)*) => {
        $(
            $(#[$attr])*
            pub struct $name(());
        )*
    };
}

states! {
    /// Nothing written yet.
    UriStart;
    /// `scheme ":"` written.
    SchemeEnd;
    /// `"//"` written, within `authority_with`.
    AuthorityStart;
    /// `userinfo "@"` written.
    UserinfoEnd;
    /// `host` written.
    HostEnd;
    /// `":" port` written.
    PortEnd;
    /// Authority closed.
    AuthorityEnd;
    /// Path written.
    PathEnd;
    /// `"?" query` written.
    QueryEnd;
    /// `"#" fragment` written.
    FragmentEnd;
    /// Ready to build.
    End;
}

/// `S: To<T>` means a builder in state `S` may move on to state `T`.
pub trait To<T> {}

macro_rules! transitions {
    ($($from:ty => [$($to:ty),+];)*) => {
        $($(
            impl To<$to> for $from {}
        )+)*
    };
}

transitions! {
    UriStart => [SchemeEnd, AuthorityStart, AuthorityEnd, PathEnd];
    SchemeEnd => [AuthorityStart, AuthorityEnd, PathEnd];
    AuthorityStart => [UserinfoEnd, HostEnd];
    UserinfoEnd => [HostEnd];
    HostEnd => [PortEnd, AuthorityEnd];
    PortEnd => [AuthorityEnd];
    AuthorityEnd => [PathEnd];
    PathEnd => [QueryEnd, FragmentEnd, End];
    QueryEnd => [FragmentEnd, End];
    FragmentEnd => [End];
}

/// A state reached by leaving out an optional component.
pub trait AdvanceDst {}

impl AdvanceDst for SchemeEnd {}
impl AdvanceDst for UserinfoEnd {}
impl AdvanceDst for PortEnd {}
impl AdvanceDst for AuthorityEnd {}
impl AdvanceDst for QueryEnd {}
impl AdvanceDst for FragmentEnd {}

/// `S: AdvanceTo<T>` means `advance` may take a builder from `S` to `T`.
pub trait AdvanceTo<T>: To<T> {}

impl<S: To<T>, T: AdvanceDst> AdvanceTo<T> for S {}

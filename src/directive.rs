//! The fixed directive table shared by the serializer and the parser.
//!
//! Every recognised `Cache-Control` directive is a [`Directive`] variant with
//! a wire token and a [`DirectiveKind`]. [`Directive::ALL`] lists them in
//! emission order:
//!
//! ```text
//! max-age, s-maxage, max-stale, min-fresh, must-revalidate, no-cache,
//! no-store, no-transform, only-if-cached, public, private,
//! proxy-revalidate, stale-while-revalidate, stale-if-error
//! ```
//!
//! The order is neither alphabetical nor grouped by kind. Existing consumers
//! compare header text byte for byte, so it must not change.
//!
//! # Example
//!
//! ```
//! use ctrlcache::directive::{Directive, DirectiveKind};
//!
//! let directive: Directive = "s-maxage".parse().unwrap();
//! assert_eq!(directive, Directive::SMaxAge);
//! assert_eq!(directive.kind(), DirectiveKind::Seconds);
//! assert_eq!(directive.field_name(), "sMaxAge");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Value shape carried by a directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `token=number`, a count of seconds.
    Seconds,
    /// Bare `token`; present means set.
    Flag,
}

/// One of the fourteen recognised `Cache-Control` directives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directive {
    /// `max-age`
    MaxAge,
    /// `s-maxage`
    SMaxAge,
    /// `max-stale`
    MaxStale,
    /// `min-fresh`
    MinFresh,
    /// `must-revalidate`
    MustRevalidate,
    /// `no-cache`
    NoCache,
    /// `no-store`
    NoStore,
    /// `no-transform`
    NoTransform,
    /// `only-if-cached`
    OnlyIfCached,
    /// `public`
    Public,
    /// `private`
    Private,
    /// `proxy-revalidate`
    ProxyRevalidate,
    /// `stale-while-revalidate`
    StaleWhileRevalidate,
    /// `stale-if-error`
    StaleIfError,
}

impl Directive {
    /// All directives in wire emission order.
    pub const ALL: [Directive; 14] = [
        Directive::MaxAge,
        Directive::SMaxAge,
        Directive::MaxStale,
        Directive::MinFresh,
        Directive::MustRevalidate,
        Directive::NoCache,
        Directive::NoStore,
        Directive::NoTransform,
        Directive::OnlyIfCached,
        Directive::Public,
        Directive::Private,
        Directive::ProxyRevalidate,
        Directive::StaleWhileRevalidate,
        Directive::StaleIfError,
    ];

    /// Wire token, e.g. `s-maxage`.
    pub const fn token(self) -> &'static str {
        match self {
            Directive::MaxAge => "max-age",
            Directive::SMaxAge => "s-maxage",
            Directive::MaxStale => "max-stale",
            Directive::MinFresh => "min-fresh",
            Directive::MustRevalidate => "must-revalidate",
            Directive::NoCache => "no-cache",
            Directive::NoStore => "no-store",
            Directive::NoTransform => "no-transform",
            Directive::OnlyIfCached => "only-if-cached",
            Directive::Public => "public",
            Directive::Private => "private",
            Directive::ProxyRevalidate => "proxy-revalidate",
            Directive::StaleWhileRevalidate => "stale-while-revalidate",
            Directive::StaleIfError => "stale-if-error",
        }
    }

    /// Semantic setting name, as used in the serde representation of
    /// [`CacheControlSettings`](crate::CacheControlSettings).
    pub const fn field_name(self) -> &'static str {
        match self {
            Directive::MaxAge => "maxAge",
            Directive::SMaxAge => "sMaxAge",
            Directive::MaxStale => "maxStale",
            Directive::MinFresh => "minFresh",
            Directive::MustRevalidate => "mustRevalidate",
            Directive::NoCache => "noCache",
            Directive::NoStore => "noStore",
            Directive::NoTransform => "noTransform",
            Directive::OnlyIfCached => "onlyIfCached",
            Directive::Public => "public",
            Directive::Private => "private",
            Directive::ProxyRevalidate => "proxyRevalidate",
            Directive::StaleWhileRevalidate => "staleWhileRevalidate",
            Directive::StaleIfError => "staleIfError",
        }
    }

    pub const fn kind(self) -> DirectiveKind {
        match self {
            Directive::MaxAge
            | Directive::SMaxAge
            | Directive::MaxStale
            | Directive::MinFresh
            | Directive::StaleWhileRevalidate
            | Directive::StaleIfError => DirectiveKind::Seconds,
            Directive::MustRevalidate
            | Directive::NoCache
            | Directive::NoStore
            | Directive::NoTransform
            | Directive::OnlyIfCached
            | Directive::Public
            | Directive::Private
            | Directive::ProxyRevalidate => DirectiveKind::Flag,
        }
    }

    /// Look up a directive by its exact wire token.
    pub fn from_token(token: &str) -> Option<Directive> {
        Directive::ALL.into_iter().find(|d| d.token() == token)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

impl FromStr for Directive {
    type Err = Error;

    /// Surrounding whitespace is ignored; the token itself is case-sensitive.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        Directive::from_token(token).ok_or_else(|| Error::UnknownDirective(token.to_string()))
    }
}

//! The [`CacheControl`] header type.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::parse::parse_cache_control;
use crate::serialize::serialize_cache_control;
use crate::settings::CacheControlSettings;

/// A `Cache-Control` header value backed by [`CacheControlSettings`].
///
/// # Example
///
/// ```
/// use ctrlcache::{CacheControl, CacheControlSettings};
///
/// let cache_short = CacheControl::new(
///     CacheControlSettings::new()
///         .with_max_age(60.0)
///         .with_stale_while_revalidate(60.0),
/// );
/// assert_eq!(cache_short.serialize(), "max-age=60, stale-while-revalidate=60");
///
/// let parsed = CacheControl::parse("Cache-Control: max-age=60, stale-while-revalidate=60");
/// assert_eq!(parsed, cache_short);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CacheControl {
    settings: CacheControlSettings,
}

impl CacheControl {
    /// HTTP header name.
    pub const HEADER_NAME: &'static str = "Cache-Control";

    /// Wrap `settings`. The value is owned, so later changes to a caller's
    /// clone never reach this header.
    pub fn new(settings: CacheControlSettings) -> Self {
        CacheControl { settings }
    }

    /// Header value text for the held settings.
    pub fn serialize(&self) -> String {
        serialize_cache_control(&self.settings)
    }

    /// Header value text for `settings`, without building a `CacheControl`.
    pub fn serialize_settings(settings: &CacheControlSettings) -> String {
        serialize_cache_control(settings)
    }

    /// Parse header text, with or without the `Cache-Control:` label.
    /// Never fails; see [`parse_cache_control`].
    pub fn parse(header: &str) -> Self {
        CacheControl::new(parse_cache_control(header))
    }

    pub fn settings(&self) -> &CacheControlSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut CacheControlSettings {
        &mut self.settings
    }

    pub fn into_settings(self) -> CacheControlSettings {
        self.settings
    }
}

impl From<CacheControlSettings> for CacheControl {
    fn from(settings: CacheControlSettings) -> Self {
        CacheControl::new(settings)
    }
}

impl From<CacheControl> for CacheControlSettings {
    fn from(cache_control: CacheControl) -> Self {
        cache_control.settings
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for CacheControl {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CacheControl::parse(s))
    }
}

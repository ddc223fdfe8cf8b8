//! Conversions between [`CacheControl`] and the `http` crate's header types.
//!
//! Enabled with the `http` feature.
//!
//! ```
//! use ctrlcache::{CacheControl, CacheControlSettings};
//! use http::header::{HeaderMap, CACHE_CONTROL};
//!
//! # fn main() -> ctrlcache::Result<()> {
//! let mut headers = HeaderMap::new();
//! CacheControl::new(CacheControlSettings::new().with_public().with_max_age(300.0))
//!     .insert_into(&mut headers)?;
//! assert_eq!(headers[CACHE_CONTROL], "max-age=300, public");
//!
//! let cache_control = CacheControl::from_headers(&headers)?.unwrap();
//! assert!(cache_control.settings().public);
//! # Ok(())
//! # }
//! ```

use http::header::{HeaderMap, HeaderValue, CACHE_CONTROL};

use crate::cache_control::CacheControl;
use crate::error::{Error, Result};

impl CacheControl {
    /// Serialize into a validated [`HeaderValue`].
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.serialize()).map_err(|e| {
            log::error!("Cache-Control serialization produced an invalid header: {}", e);
            Error::InvalidHeaderValue(e.to_string())
        })
    }

    /// Parse a received header value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHeaderValue` if the value holds bytes other than
    /// visible ASCII. Malformed directives inside valid text are dropped, not
    /// reported.
    pub fn from_header_value(value: &HeaderValue) -> Result<Self> {
        let text = value.to_str().map_err(|e| {
            log::warn!("Cache-Control header is not visible ASCII: {}", e);
            Error::InvalidHeaderValue(e.to_string())
        })?;
        Ok(CacheControl::parse(text))
    }

    /// Parse the first `cache-control` header in `headers`, if any.
    ///
    /// Additional instances of the header are not merged.
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>> {
        headers
            .get(CACHE_CONTROL)
            .map(CacheControl::from_header_value)
            .transpose()
    }

    /// Set the `cache-control` header in `headers`, replacing existing values.
    pub fn insert_into(&self, headers: &mut HeaderMap) -> Result<()> {
        let value = self.to_header_value()?;
        headers.insert(CACHE_CONTROL, value);
        Ok(())
    }
}

impl TryFrom<&CacheControl> for HeaderValue {
    type Error = Error;

    fn try_from(cache_control: &CacheControl) -> Result<Self> {
        cache_control.to_header_value()
    }
}

impl TryFrom<CacheControl> for HeaderValue {
    type Error = Error;

    fn try_from(cache_control: CacheControl) -> Result<Self> {
        cache_control.to_header_value()
    }
}

impl TryFrom<&HeaderValue> for CacheControl {
    type Error = Error;

    fn try_from(value: &HeaderValue) -> Result<Self> {
        CacheControl::from_header_value(value)
    }
}

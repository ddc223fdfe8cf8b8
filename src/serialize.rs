//! Rendering settings into `Cache-Control` header text.
//!
//! Directives are emitted in [`Directive::ALL`](crate::Directive::ALL) order,
//! whatever order the fields were set in, and joined with `", "`:
//!
//! ```
//! use ctrlcache::{serialize_cache_control, CacheControlSettings};
//!
//! let settings = CacheControlSettings::new()
//!     .with_stale_while_revalidate(120.0)
//!     .with_no_cache()
//!     .with_max_age(60.0);
//!
//! assert_eq!(
//!     serialize_cache_control(&settings),
//!     "max-age=60, no-cache, stale-while-revalidate=120"
//! );
//! ```

use crate::settings::{CacheControlSettings, DirectiveValue};

/// Separator placed between emitted directives.
pub const DIRECTIVE_SEPARATOR: &str = ", ";

/// Serialize settings into a header value (without the `Cache-Control:` label).
///
/// Numeric directives render as `token=value`, set flags as the bare token.
/// Absent numerics and `false` flags produce nothing, so empty settings
/// produce the empty string.
pub fn serialize_cache_control(settings: &CacheControlSettings) -> String {
    let mut header = String::new();

    for (directive, value) in settings.iter() {
        if !header.is_empty() {
            header.push_str(DIRECTIVE_SEPARATOR);
        }
        header.push_str(directive.token());
        if let DirectiveValue::Seconds(seconds) = value {
            header.push('=');
            header.push_str(&format_seconds(seconds));
        }
    }

    header
}

/// Render a seconds value as plain decimal text.
///
/// Integral values carry no decimal point (`60`, not `60.0`), fractional
/// values use the shortest text that parses back to the same number, and the
/// sign is kept. Negative zero renders as `0`; infinities render as
/// `Infinity` / `-Infinity`, which [`parse_seconds`](crate::parse::parse_seconds)
/// reads back.
pub fn format_seconds(seconds: f64) -> String {
    if seconds.is_nan() {
        "NaN".to_string()
    } else if seconds.is_infinite() {
        if seconds > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if seconds == 0.0 {
        "0".to_string()
    } else {
        seconds.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_single() {
        let settings = CacheControlSettings::new().with_max_age(60.0);
        assert_eq!(serialize_cache_control(&settings), "max-age=60");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize_cache_control(&CacheControlSettings::default()), "");
    }

    #[test]
    fn test_serialize_skips_false_flags() {
        let settings = CacheControlSettings {
            must_revalidate: true,
            no_cache: false,
            no_store: false,
            no_transform: true,
            ..Default::default()
        };
        assert_eq!(
            serialize_cache_control(&settings),
            "must-revalidate, no-transform"
        );
    }

    #[test]
    fn test_serialize_skips_absent_numerics() {
        let settings = CacheControlSettings {
            max_age: Some(60.0),
            s_max_age: None,
            no_cache: true,
            stale_while_revalidate: None,
            stale_if_error: Some(360.0),
            ..Default::default()
        };
        assert_eq!(
            serialize_cache_control(&settings),
            "max-age=60, no-cache, stale-if-error=360"
        );
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(60.0), "60");
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(-0.0), "0");
        assert_eq!(format_seconds(-5.0), "-5");
        assert_eq!(format_seconds(1.5), "1.5");
        assert_eq!(format_seconds(0.1), "0.1");
        assert_eq!(format_seconds(f64::INFINITY), "Infinity");
        assert_eq!(format_seconds(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_seconds(f64::NAN), "NaN");
    }

    #[test]
    fn test_serialize_negative_and_fractional() {
        let settings = CacheControlSettings::new()
            .with_max_age(-1.0)
            .with_min_fresh(2.25);
        assert_eq!(
            serialize_cache_control(&settings),
            "max-age=-1, min-fresh=2.25"
        );
    }
}

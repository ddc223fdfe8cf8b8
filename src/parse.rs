//! Tolerant parsing of `Cache-Control` header text.
//!
//! [`parse_cache_control`] never fails. The header is split on `,` and each
//! segment is handed to [`parse_directive`]; segments that do not parse are
//! logged and dropped while the rest of the header is still honoured:
//!
//! ```
//! use ctrlcache::{parse_cache_control, CacheControlSettings};
//!
//! let settings = parse_cache_control(
//!     "Cache-Control: max-age=invalid, no-cache, s-maxage=12, immutable",
//! );
//!
//! assert_eq!(settings, CacheControlSettings::new().with_no_cache().with_s_max_age(12.0));
//! ```
//!
//! # Tolerance rules
//!
//! | Input | Outcome |
//! |-------|---------|
//! | Leading `Cache-Control:` label | Stripped (case-sensitive) |
//! | Whitespace around `,` and `=` | Ignored |
//! | Empty segment (`a,,b`, trailing `,`) | Skipped |
//! | Unknown or differently-cased token | Skipped |
//! | Numeric directive with bad/missing value | Skipped |
//! | Flag directive with `=anything` | Flag set, value ignored |
//! | Repeated directive | Last occurrence wins |

use crate::directive::{Directive, DirectiveKind};
use crate::error::{Error, Result};
use crate::settings::{CacheControlSettings, DirectiveValue};

/// Optional label in front of the directive list.
pub const HEADER_LABEL: &str = "Cache-Control:";

/// Parse header text into settings, dropping anything unrecognised.
///
/// The text may start with the `Cache-Control:` label; leading whitespace
/// before it is allowed. The label match is case-sensitive, so
/// `cache-control: max-age=1` yields no directives.
pub fn parse_cache_control(header: &str) -> CacheControlSettings {
    strip_label(header)
        .split(',')
        .filter_map(|segment| match parse_directive(segment) {
            Ok(entry) => Some(entry),
            Err(Error::EmptyDirective) => {
                trace!("Skipping empty Cache-Control segment");
                None
            }
            Err(Error::UnknownDirective(token)) => {
                trace!("Ignoring unknown Cache-Control directive: {}", token);
                None
            }
            Err(e) => {
                debug!("Dropping Cache-Control directive: {}", e);
                None
            }
        })
        .collect()
}

fn strip_label(header: &str) -> &str {
    header
        .trim_start()
        .strip_prefix(HEADER_LABEL)
        .unwrap_or(header)
}

/// Parse a single comma-free segment such as `max-age=60` or ` no-cache `.
///
/// The key is the text before the first `=`, the value the text up to the
/// next `=` if any (so `max-age=1=2` reads as `1`).
///
/// # Errors
///
/// - `Error::EmptyDirective`: the segment is blank
/// - `Error::UnknownDirective`: the key is not a recognised token
/// - `Error::InvalidValue`: a numeric directive without a parseable number
pub fn parse_directive(segment: &str) -> Result<(Directive, DirectiveValue)> {
    if segment.trim().is_empty() {
        return Err(Error::EmptyDirective);
    }

    let mut parts = segment.split('=');
    let key = parts.next().unwrap_or_default();
    let value = parts.next();

    let directive: Directive = key.parse()?;

    match directive.kind() {
        DirectiveKind::Seconds => {
            let raw = value.unwrap_or_default();
            parse_seconds(raw)
                .map(|seconds| (directive, DirectiveValue::Seconds(seconds)))
                .ok_or_else(|| Error::InvalidValue {
                    directive,
                    value: raw.to_string(),
                })
        }
        DirectiveKind::Flag => {
            if let Some(value) = value {
                debug!("Ignoring value {:?} on flag directive {}", value, directive);
            }
            Ok((directive, DirectiveValue::Flag))
        }
    }
}

/// Leniently parse a seconds value.
///
/// Surrounding whitespace is ignored. Accepts signed decimal and exponent
/// notation (`60`, `-1`, `2.5`, `.5`, `1e3`), `Infinity` with an optional
/// sign, and unsigned `0x` / `0o` / `0b` integer literals. Returns `None`
/// for empty text, anything else, and NaN.
pub fn parse_seconds(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(text) {
        return Some(value);
    }

    // `f64::from_str` also takes `inf` / `nan` spellings; only exponents may be alphabetic here.
    if text
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return None;
    }

    text.parse::<f64>().ok().filter(|value| !value.is_nan())
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

//! # ctrlcache
//!
//! Typed construction, serialization and tolerant parsing of HTTP
//! `Cache-Control` headers.
//!
//! ## Features
//!
//! - **Typed settings:** [`CacheControlSettings`] has one field per recognised
//!   directive, no stringly-typed maps
//! - **Stable output:** directives are always emitted in the same fixed order
//!   and joined with `", "`, so equal settings give byte-identical headers
//! - **Tolerant input:** unknown directives, bad numbers and irregular spacing
//!   are dropped silently instead of failing the whole header
//! - **`http` integration:** optional conversions to and from `http::HeaderValue`
//!
//! ## Quick Start
//!
//! ```
//! use ctrlcache::{CacheControl, CacheControlSettings};
//!
//! // Producer: build a policy and render it
//! let cache_short = CacheControl::new(
//!     CacheControlSettings::new()
//!         .with_max_age(60.0)
//!         .with_no_cache()
//!         .with_stale_while_revalidate(120.0),
//! );
//! assert_eq!(
//!     cache_short.serialize(),
//!     "max-age=60, no-cache, stale-while-revalidate=120"
//! );
//!
//! // Consumer: recover the settings from header text
//! let parsed = CacheControl::parse("Cache-Control: max-age=60, no-cache, stale-while-revalidate=120");
//! assert_eq!(parsed.settings(), cache_short.settings());
//! ```
//!
//! The free functions [`serialize_cache_control`] and [`parse_cache_control`]
//! do the same work without the wrapper type.
//!
//! ## Logging
//!
//! Dropped directives are reported through the `log` facade (`trace` for
//! unknown or empty segments, `debug` for rejected values). Install any
//! `log` backend to see them.

#[macro_use]
extern crate log;

pub mod cache_control;
pub mod directive;
pub mod error;
#[cfg(feature = "http")]
pub mod header;
pub mod parse;
pub mod serialize;
pub mod settings;

// Re-exports for convenience
pub use cache_control::CacheControl;
pub use directive::{Directive, DirectiveKind};
pub use error::{Error, Result};
pub use parse::parse_cache_control;
pub use serialize::serialize_cache_control;
pub use settings::{CacheControlSettings, DirectiveValue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

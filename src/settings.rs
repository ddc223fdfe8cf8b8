//! Structured form of a `Cache-Control` header.
//!
//! [`CacheControlSettings`] holds exactly one field per [`Directive`]:
//! numeric directives are `Option<f64>` seconds (absent is not zero), flag
//! directives are plain `bool` (absent and `false` mean the same thing).
//!
//! Fields can be set directly, with the fluent `with_*` builders, or through
//! the table-driven [`get`](CacheControlSettings::get) /
//! [`insert`](CacheControlSettings::insert) API keyed by [`Directive`].
//!
//! ```
//! use ctrlcache::{CacheControlSettings, Directive, DirectiveValue};
//!
//! let settings = CacheControlSettings::new()
//!     .with_max_age(60.0)
//!     .with_no_cache();
//!
//! assert_eq!(settings.get(Directive::MaxAge), Some(DirectiveValue::Seconds(60.0)));
//! assert_eq!(settings.get(Directive::NoStore), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::directive::{Directive, DirectiveKind};

/// Value of a directive that is present in a settings value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DirectiveValue {
    /// Seconds for a numeric directive. Stored as parsed: no clamping, may be
    /// negative or fractional.
    Seconds(f64),
    /// A flag directive that is set.
    Flag,
}

/// Caching policy settings, one optional field per recognised directive.
///
/// The serde representation uses the camelCase setting names (`maxAge`,
/// `sMaxAge`, `noCache`, ...), omits unset fields and treats every field as
/// optional on input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheControlSettings {
    /// Seconds a response stays fresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<f64>,

    /// Seconds a response stays fresh in shared caches (CDNs, proxies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_max_age: Option<f64>,

    /// Seconds past expiry the client still accepts a stale response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stale: Option<f64>,

    /// Seconds the response must remain fresh for the client to accept it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_fresh: Option<f64>,

    /// Stale responses must be revalidated with the origin before reuse.
    #[serde(skip_serializing_if = "is_false")]
    pub must_revalidate: bool,

    /// Responses may be stored but must be revalidated before every reuse.
    #[serde(skip_serializing_if = "is_false")]
    pub no_cache: bool,

    /// Responses must not be stored by any cache.
    #[serde(skip_serializing_if = "is_false")]
    pub no_store: bool,

    /// Intermediaries must not transform the payload.
    #[serde(skip_serializing_if = "is_false")]
    pub no_transform: bool,

    /// The client only wants a cached response.
    #[serde(skip_serializing_if = "is_false")]
    pub only_if_cached: bool,

    /// Any cache, shared or private, may store the response.
    #[serde(skip_serializing_if = "is_false")]
    pub public: bool,

    /// Only a private, single-user cache may store the response.
    #[serde(skip_serializing_if = "is_false")]
    pub private: bool,

    /// Like `must_revalidate`, for shared caches only.
    #[serde(skip_serializing_if = "is_false")]
    pub proxy_revalidate: bool,

    /// Seconds a stale response may be served while revalidating in the background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<f64>,

    /// Seconds a stale response may be served when the origin errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_if_error: Option<f64>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CacheControlSettings {
    /// Empty settings: no directive present.
    pub fn new() -> Self {
        Self::default()
    }

    fn seconds_slot(&self, directive: Directive) -> Option<&Option<f64>> {
        match directive {
            Directive::MaxAge => Some(&self.max_age),
            Directive::SMaxAge => Some(&self.s_max_age),
            Directive::MaxStale => Some(&self.max_stale),
            Directive::MinFresh => Some(&self.min_fresh),
            Directive::StaleWhileRevalidate => Some(&self.stale_while_revalidate),
            Directive::StaleIfError => Some(&self.stale_if_error),
            _ => None,
        }
    }

    fn seconds_slot_mut(&mut self, directive: Directive) -> Option<&mut Option<f64>> {
        match directive {
            Directive::MaxAge => Some(&mut self.max_age),
            Directive::SMaxAge => Some(&mut self.s_max_age),
            Directive::MaxStale => Some(&mut self.max_stale),
            Directive::MinFresh => Some(&mut self.min_fresh),
            Directive::StaleWhileRevalidate => Some(&mut self.stale_while_revalidate),
            Directive::StaleIfError => Some(&mut self.stale_if_error),
            _ => None,
        }
    }

    fn flag_slot(&self, directive: Directive) -> Option<&bool> {
        match directive {
            Directive::MustRevalidate => Some(&self.must_revalidate),
            Directive::NoCache => Some(&self.no_cache),
            Directive::NoStore => Some(&self.no_store),
            Directive::NoTransform => Some(&self.no_transform),
            Directive::OnlyIfCached => Some(&self.only_if_cached),
            Directive::Public => Some(&self.public),
            Directive::Private => Some(&self.private),
            Directive::ProxyRevalidate => Some(&self.proxy_revalidate),
            _ => None,
        }
    }

    fn flag_slot_mut(&mut self, directive: Directive) -> Option<&mut bool> {
        match directive {
            Directive::MustRevalidate => Some(&mut self.must_revalidate),
            Directive::NoCache => Some(&mut self.no_cache),
            Directive::NoStore => Some(&mut self.no_store),
            Directive::NoTransform => Some(&mut self.no_transform),
            Directive::OnlyIfCached => Some(&mut self.only_if_cached),
            Directive::Public => Some(&mut self.public),
            Directive::Private => Some(&mut self.private),
            Directive::ProxyRevalidate => Some(&mut self.proxy_revalidate),
            _ => None,
        }
    }

    /// Value of `directive`, or `None` if it would not be emitted.
    ///
    /// A flag set to `false` reads as `None`.
    pub fn get(&self, directive: Directive) -> Option<DirectiveValue> {
        match directive.kind() {
            DirectiveKind::Seconds => self
                .seconds_slot(directive)
                .copied()
                .flatten()
                .map(DirectiveValue::Seconds),
            DirectiveKind::Flag => match self.flag_slot(directive) {
                Some(true) => Some(DirectiveValue::Flag),
                _ => None,
            },
        }
    }

    /// Whether `directive` is present.
    pub fn contains(&self, directive: Directive) -> bool {
        self.get(directive).is_some()
    }

    /// Set `directive` to `value`, replacing any previous value.
    ///
    /// A [`DirectiveValue::Seconds`] given to a flag directive sets the flag,
    /// the same way the parser treats `no-store=12`. A
    /// [`DirectiveValue::Flag`] given to a numeric directive has no number to
    /// store and leaves the field unchanged.
    pub fn insert(&mut self, directive: Directive, value: DirectiveValue) {
        match (directive.kind(), value) {
            (DirectiveKind::Seconds, DirectiveValue::Seconds(seconds)) => {
                if let Some(slot) = self.seconds_slot_mut(directive) {
                    *slot = Some(seconds);
                }
            }
            (DirectiveKind::Seconds, DirectiveValue::Flag) => {
                debug!("{} needs a value in seconds, ignoring bare flag", directive);
            }
            (DirectiveKind::Flag, _) => {
                if let Some(slot) = self.flag_slot_mut(directive) {
                    *slot = true;
                }
            }
        }
    }

    /// Remove `directive`.
    pub fn remove(&mut self, directive: Directive) {
        if let Some(slot) = self.seconds_slot_mut(directive) {
            *slot = None;
        } else if let Some(slot) = self.flag_slot_mut(directive) {
            *slot = false;
        }
    }

    /// Present directives, in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (Directive, DirectiveValue)> + '_ {
        Directive::ALL
            .into_iter()
            .filter_map(move |directive| self.get(directive).map(|value| (directive, value)))
    }

    /// True if no directive would be emitted.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Set `directive` to `value` (builder style).
    pub fn with(mut self, directive: Directive, value: DirectiveValue) -> Self {
        self.insert(directive, value);
        self
    }

    pub fn with_max_age(mut self, seconds: f64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn with_s_max_age(mut self, seconds: f64) -> Self {
        self.s_max_age = Some(seconds);
        self
    }

    pub fn with_max_stale(mut self, seconds: f64) -> Self {
        self.max_stale = Some(seconds);
        self
    }

    pub fn with_min_fresh(mut self, seconds: f64) -> Self {
        self.min_fresh = Some(seconds);
        self
    }

    pub fn with_stale_while_revalidate(mut self, seconds: f64) -> Self {
        self.stale_while_revalidate = Some(seconds);
        self
    }

    pub fn with_stale_if_error(mut self, seconds: f64) -> Self {
        self.stale_if_error = Some(seconds);
        self
    }

    pub fn with_must_revalidate(mut self) -> Self {
        self.must_revalidate = true;
        self
    }

    pub fn with_no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    pub fn with_no_store(mut self) -> Self {
        self.no_store = true;
        self
    }

    pub fn with_no_transform(mut self) -> Self {
        self.no_transform = true;
        self
    }

    pub fn with_only_if_cached(mut self) -> Self {
        self.only_if_cached = true;
        self
    }

    pub fn with_public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn with_private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn with_proxy_revalidate(mut self) -> Self {
        self.proxy_revalidate = true;
        self
    }
}

impl Extend<(Directive, DirectiveValue)> for CacheControlSettings {
    fn extend<I: IntoIterator<Item = (Directive, DirectiveValue)>>(&mut self, iter: I) {
        for (directive, value) in iter {
            self.insert(directive, value);
        }
    }
}

impl FromIterator<(Directive, DirectiveValue)> for CacheControlSettings {
    /// Later entries for the same directive replace earlier ones.
    fn from_iter<I: IntoIterator<Item = (Directive, DirectiveValue)>>(iter: I) -> Self {
        let mut settings = CacheControlSettings::new();
        settings.extend(iter);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let settings = CacheControlSettings::default();
        assert!(settings.is_empty());
        assert_eq!(settings.iter().count(), 0);
    }

    #[test]
    fn test_false_flag_reads_as_absent() {
        let settings = CacheControlSettings {
            no_cache: false,
            ..Default::default()
        };
        assert!(settings.is_empty());
        assert_eq!(settings.get(Directive::NoCache), None);
    }

    #[test]
    fn test_zero_seconds_is_present() {
        let settings = CacheControlSettings::new().with_max_age(0.0);
        assert!(!settings.is_empty());
        assert_eq!(settings.get(Directive::MaxAge), Some(DirectiveValue::Seconds(0.0)));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut settings = CacheControlSettings::new();
        settings.insert(Directive::StaleIfError, DirectiveValue::Seconds(360.0));
        settings.insert(Directive::Private, DirectiveValue::Flag);
        assert_eq!(settings.stale_if_error, Some(360.0));
        assert!(settings.private);

        settings.remove(Directive::StaleIfError);
        settings.remove(Directive::Private);
        assert!(settings.is_empty());
    }

    #[test]
    fn test_insert_seconds_into_flag_sets_flag() {
        let mut settings = CacheControlSettings::new();
        settings.insert(Directive::NoTransform, DirectiveValue::Seconds(12.0));
        assert!(settings.no_transform);
    }

    #[test]
    fn test_insert_flag_into_seconds_is_ignored() {
        let mut settings = CacheControlSettings::new().with_max_age(60.0);
        settings.insert(Directive::MaxAge, DirectiveValue::Flag);
        assert_eq!(settings.max_age, Some(60.0));
    }

    #[test]
    fn test_iter_follows_wire_order() {
        let settings = CacheControlSettings::new()
            .with_stale_if_error(1.0)
            .with_public()
            .with_max_age(2.0);

        let directives: Vec<Directive> = settings.iter().map(|(d, _)| d).collect();
        assert_eq!(
            directives,
            vec![Directive::MaxAge, Directive::Public, Directive::StaleIfError]
        );
    }

    #[test]
    fn test_from_iter_last_wins() {
        let settings: CacheControlSettings = vec![
            (Directive::MaxAge, DirectiveValue::Seconds(10.0)),
            (Directive::NoCache, DirectiveValue::Flag),
            (Directive::MaxAge, DirectiveValue::Seconds(20.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(settings.max_age, Some(20.0));
        assert!(settings.no_cache);
    }

    #[test]
    fn test_builders_cover_every_directive() {
        let settings = CacheControlSettings::new()
            .with_max_age(1.0)
            .with_s_max_age(2.0)
            .with_max_stale(3.0)
            .with_min_fresh(4.0)
            .with_must_revalidate()
            .with_no_cache()
            .with_no_store()
            .with_no_transform()
            .with_only_if_cached()
            .with_public()
            .with_private()
            .with_proxy_revalidate()
            .with_stale_while_revalidate(5.0)
            .with_stale_if_error(6.0);

        for directive in Directive::ALL {
            assert!(settings.contains(directive), "{} missing", directive);
        }
    }

    #[test]
    fn test_serde_uses_setting_names() {
        let settings = CacheControlSettings::new()
            .with_s_max_age(120.0)
            .with_no_cache();

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json, serde_json::json!({ "sMaxAge": 120.0, "noCache": true }));
    }

    #[test]
    fn test_serde_accepts_partial_input() {
        let settings: CacheControlSettings =
            serde_json::from_str(r#"{ "maxAge": 60, "noStore": false, "public": true }"#).unwrap();

        assert_eq!(settings, CacheControlSettings::new().with_max_age(60.0).with_public());
    }
}

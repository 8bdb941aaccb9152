// crates/clipstrip-core/src/thumbnail.rs
//
// Time bucket → image URL. The resolver is deterministic per floored second;
// callers may call it as often as they like without caching.
//
// Placeholder URLs use a private `placeholder://thumb/<sec>` scheme that the
// shell hands to the media crate's local generator instead of a loader.

use std::fmt;

pub const PLACEHOLDER_PREFIX: &str = "placeholder://thumb/";

/// Floor a time to its whole-second bucket. Negative and non-finite → 0.
///
/// ```
/// use clipstrip_core::thumbnail::time_bucket;
/// assert_eq!(time_bucket(37.9), 37);
/// assert_eq!(time_bucket(-2.0), 0);
/// assert_eq!(time_bucket(f64::NAN), 0);
/// ```
pub fn time_bucket(t: f64) -> u64 {
    if t.is_finite() && t > 0.0 { t.floor() as u64 } else { 0 }
}

pub fn placeholder_url(sec: u64) -> String {
    format!("{PLACEHOLDER_PREFIX}{sec}")
}

/// Inverse of `placeholder_url`.
pub fn placeholder_second(url: &str) -> Option<u64> {
    url.strip_prefix(PLACEHOLDER_PREFIX)?.parse().ok()
}

/// Hue of the synthesized placeholder frame for a bucket.
pub fn placeholder_hue(sec: u64) -> u16 {
    ((sec.wrapping_mul(23)) % 360) as u16
}

pub enum ThumbnailResolver {
    /// Local generated frames.
    Placeholder,
    /// URL with a `{sec}` token, e.g. `http://host/thumbs/{sec}.jpg`.
    Template(String),
    Custom(Box<dyn Fn(u64) -> String + Send + Sync>),
}

impl Default for ThumbnailResolver {
    fn default() -> Self {
        Self::Placeholder
    }
}

impl fmt::Debug for ThumbnailResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => f.write_str("Placeholder"),
            Self::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Self::Custom(_)   => f.write_str("Custom(..)"),
        }
    }
}

impl ThumbnailResolver {
    pub fn custom(f: impl Fn(u64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(f))
    }

    /// URL for the bucket containing `t`. An empty result counts as
    /// unresolved.
    ///
    /// ```
    /// use clipstrip_core::thumbnail::ThumbnailResolver;
    /// let r = ThumbnailResolver::Template("http://cdn/t/{sec}.jpg".into());
    /// assert_eq!(r.resolve(12.7).as_deref(), Some("http://cdn/t/12.jpg"));
    /// assert_eq!(ThumbnailResolver::Placeholder.resolve(3.0).as_deref(),
    ///            Some("placeholder://thumb/3"));
    /// ```
    pub fn resolve(&self, t: f64) -> Option<String> {
        let sec = time_bucket(t);
        let url = match self {
            Self::Placeholder   => placeholder_url(sec),
            Self::Template(tpl) => tpl.replace("{sec}", &sec.to_string()),
            Self::Custom(f)     => f(sec),
        };
        (!url.is_empty()).then_some(url)
    }
}

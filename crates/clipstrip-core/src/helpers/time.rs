// crates/clipstrip-core/src/helpers/time.rs
//
// Shared time utilities: clamping onto the media axis and human-readable
// timestamps. Used by every core component and by the UI labels.
//
// Every write to transport time goes through `clamp_to_media` so the playhead
// never lands exactly on end-of-media (some transports treat that as "ended").

/// Distance kept between the furthest seekable instant and the media end.
pub const END_EPSILON: f64 = 0.001;

/// Clamp `n` into `[min, max]`. `max` wins when the bounds are inverted.
///
/// ```
/// use clipstrip_core::helpers::time::clamp;
/// assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(4.5,  0.0, 10.0), 4.5);
/// assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
/// ```
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    min.max(n).min(max)
}

/// Read a transport-reported number, treating NaN/inf as 0.
#[inline]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Furthest instant a seek may target for the given duration.
///
/// ```
/// use clipstrip_core::helpers::time::max_seekable;
/// assert_eq!(max_seekable(0.0), 0.0);
/// assert!((max_seekable(120.0) - 119.999).abs() < 1e-9);
/// ```
#[inline]
pub fn max_seekable(duration: f64) -> f64 {
    (finite_or_zero(duration) - END_EPSILON).max(0.0)
}

/// Clamp `t` onto `[0, duration − ε]`. Non-finite input lands on 0.
pub fn clamp_to_media(t: f64, duration: f64) -> f64 {
    clamp(finite_or_zero(t), 0.0, max_seekable(duration))
}

/// Format seconds as `H:MM:SS` from one hour up, `M:SS` below.
/// Fractions are floored, negatives and non-finite input render as `0:00`.
///
/// ```
/// use clipstrip_core::helpers::time::format_time;
/// assert_eq!(format_time(0.0),     "0:00");
/// assert_eq!(format_time(37.9),    "0:37");
/// assert_eq!(format_time(187.0),   "3:07");
/// assert_eq!(format_time(3875.0),  "1:04:35");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub fn format_time(sec: f64) -> String {
    if !sec.is_finite() {
        return "0:00".into();
    }
    let s = sec.max(0.0).floor() as u64;
    let (h, m, r) = (s / 3600, (s % 3600) / 60, s % 60);
    if h > 0 {
        format!("{h}:{m:02}:{r:02}")
    } else {
        format!("{m}:{r:02}")
    }
}

/// `start ~ end` label for a clip range, as shown in the step panel.
pub fn format_range(start: f64, end: f64) -> String {
    format!("{} ~ {}", format_time(start), format_time(end))
}

// crates/clipstrip-media/src/placeholder.rs
//
// Local thumbnail generator: a flat, per-second-tinted frame used when no
// server thumbnails are configured. Text (timestamp, caption) is painted by
// the UI on top; this only produces the RGBA background.

use anyhow::{bail, Result};

use clipstrip_core::media_types::ThumbnailFrame;
use clipstrip_core::thumbnail::{placeholder_hue, placeholder_url};

pub const THUMB_W: u32 = 160;
pub const THUMB_H: u32 = 90;
/// Height of the dark caption band along the bottom edge.
pub const CAPTION_H: u32 = 22;

const SATURATION: f32 = 0.60;
const LIGHTNESS:  f32 = 0.34;
const VEIL:       f32 = 0.22;
const RULE_ALPHA: f32 = 0.16;
const RULES:      u32 = 6;
const BAND_ALPHA: f32 = 0.60;

/// HSL (h in degrees, s/l in 0..=1) → 8-bit RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let c  = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x  = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to8 = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    [to8(r1), to8(g1), to8(b1)]
}

#[inline]
fn blend(base: [f32; 3], over: [f32; 3], alpha: f32) -> [f32; 3] {
    [
        base[0] + (over[0] - base[0]) * alpha,
        base[1] + (over[1] - base[1]) * alpha,
        base[2] + (over[2] - base[2]) * alpha,
    ]
}

/// Render the placeholder frame for bucket `sec` at `width × height`.
pub fn render_placeholder(sec: u64, width: u32, height: u32) -> Result<ThumbnailFrame> {
    if width == 0 || height == 0 {
        bail!("placeholder size must be non-zero, got {width}x{height}");
    }

    let rgb  = hsl_to_rgb(placeholder_hue(sec) as f32, SATURATION, LIGHTNESS);
    let fill = blend([rgb[0] as f32, rgb[1] as f32, rgb[2] as f32], [0.0; 3], VEIL);
    let rule = blend(fill, [255.0; 3], RULE_ALPHA);
    let band_top = height.saturating_sub(CAPTION_H);

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let is_rule = (0..RULES).any(|i| y == i * height / RULES);
        let row = if y >= band_top {
            blend(if is_rule { rule } else { fill }, [0.0; 3], BAND_ALPHA)
        } else if is_rule {
            rule
        } else {
            fill
        };
        let px = [row[0].round() as u8, row[1].round() as u8, row[2].round() as u8, 255];
        for _ in 0..width {
            data.extend_from_slice(&px);
        }
    }

    Ok(ThumbnailFrame { url: placeholder_url(sec), sec, width, height, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(f: &ThumbnailFrame, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * f.width + x) * 4) as usize;
        [f.data[i], f.data[i + 1], f.data[i + 2], f.data[i + 3]]
    }

    fn brightness(p: [u8; 4]) -> u32 {
        p[0] as u32 + p[1] as u32 + p[2] as u32
    }

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), [255, 255, 255]);
    }

    #[test]
    fn frame_has_expected_size_and_url() {
        let f = render_placeholder(37, THUMB_W, THUMB_H).unwrap();
        assert_eq!(f.data.len(), (THUMB_W * THUMB_H * 4) as usize);
        assert_eq!(f.url, "placeholder://thumb/37");
        assert_eq!(pixel(&f, 0, 1)[3], 255);
    }

    #[test]
    fn rules_are_lighter_and_band_is_darker() {
        let f = render_placeholder(3, 120, 90).unwrap();
        let body = pixel(&f, 10, 7);
        let rule = pixel(&f, 10, 15);
        let band = pixel(&f, 10, 85);
        assert!(brightness(rule) > brightness(body));
        assert!(brightness(band) > 0);
        assert!(brightness(band) < brightness(body));
    }

    #[test]
    fn neighbouring_seconds_differ_in_tint() {
        let a = render_placeholder(1, 8, 8).unwrap();
        let b = render_placeholder(2, 8, 8).unwrap();
        assert_ne!(pixel(&a, 4, 4), pixel(&b, 4, 4));
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(render_placeholder(0, 0, 10).is_err());
    }
}

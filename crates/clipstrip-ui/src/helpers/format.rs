// crates/clipstrip-ui/src/helpers/format.rs
//
// UI-layer string utilities that don't belong in clipstrip-core.
//
// Time formatting lives in clipstrip_core::helpers::time; this module only
// shapes strings for a pixel budget or a card caption.

use clipstrip_core::helpers::time::{format_range, format_time};
use clipstrip_core::CommittedItem;

/// Truncates `text` to fit within `max_px` using a per-character width
/// heuristic (11px proportional ≈ 6.5 px/char average). Appends "…" when
/// truncated. Avoids egui font measurement, which requires `&mut Fonts`.
pub fn fit_label(text: &str, max_px: f32) -> String {
    const AVG_CHAR_PX: f32 = 6.5;
    const ELLIPSIS: &str = "…";
    let max_chars = (max_px / AVG_CHAR_PX).max(0.0) as usize;
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    // Reserve one slot for the ellipsis character itself.
    let keep = max_chars.saturating_sub(1);
    text.chars().take(keep).collect::<String>() + ELLIPSIS
}

/// Two-line caption for a list card: the range, then the thumbnail time.
pub fn item_caption(item: &CommittedItem) -> (String, String) {
    (
        format_range(item.start, item.end),
        format!("thumb @ {}", format_time(item.thumbnail_time)),
    )
}

/// "0:42 / 2:00" for the transport bar.
pub fn position_label(current: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current), format_time(duration))
}

/// Speed menu entry: `1x`, `1.25x`, `0.5x`.
pub fn rate_label(rate: f64) -> String {
    let s = format!("{rate:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}x")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_labels_drop_trailing_zeros() {
        assert_eq!(rate_label(1.0), "1x");
        assert_eq!(rate_label(0.5), "0.5x");
        assert_eq!(rate_label(1.25), "1.25x");
        assert_eq!(rate_label(4.0), "4x");
    }

    #[test]
    fn caption_shows_range_and_thumb_time() {
        let item = CommittedItem {
            id:             "1-abcdef".into(),
            thumbnail_url:  "placeholder://thumb/37".into(),
            thumbnail_time: 37.0,
            start:          30.0,
            end:            45.0,
        };
        let (range, thumb) = item_caption(&item);
        assert_eq!(range, "0:30 ~ 0:45");
        assert_eq!(thumb, "thumb @ 0:37");
    }

    #[test]
    fn position_label_formats_both_sides() {
        assert_eq!(position_label(42.0, 120.0), "0:42 / 2:00");
    }
}

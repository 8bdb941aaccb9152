use clipstrip_core::helpers::time::max_seekable;
use clipstrip_core::state::RangeHandle;
use clipstrip_core::{ClipPlayer, PlayerConfig, ScriptedTransport};
use proptest::prelude::*;

fn loaded_player(duration: f64) -> ClipPlayer<ScriptedTransport> {
    let mut p = ClipPlayer::new(PlayerConfig::default());
    p.attach_transport(ScriptedTransport::new());
    p.transport_mut().expect("attached").load(duration);
    p.pump();
    p
}

fn handle_drag() -> impl Strategy<Value = (bool, f64)> {
    (any::<bool>(), -500.0f64..500.0)
}

proptest! {
    #[test]
    fn seek_always_lands_inside_media(duration in 0.5f64..10_000.0, t in -1.0e6f64..1.0e6) {
        let mut p = loaded_player(duration);
        p.seek(t);
        p.pump();
        prop_assert!(p.current() >= 0.0);
        prop_assert!(p.current() <= max_seekable(duration));
    }

    #[test]
    fn range_stays_ordered_after_every_drag(
        duration in 1.0f64..600.0,
        drags in prop::collection::vec(handle_drag(), 1..40),
    ) {
        let mut p = loaded_player(duration);
        p.begin_range_edit();
        for (is_start, t) in drags {
            let handle = if is_start { RangeHandle::Start } else { RangeHandle::End };
            p.drag_range_handle(handle, t);
            let r = p.range().candidate();
            prop_assert!(r.start <= r.end);
            prop_assert!(r.start >= 0.0 && r.end <= duration);
        }
    }

    #[test]
    fn bar_scrub_respects_restricted_range(
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
        t in -50.0f64..200.0,
    ) {
        prop_assume!((a - b).abs() > 0.01);
        let mut p = loaded_player(120.0);
        p.begin_range_edit();
        p.drag_range_end(a.max(b));
        p.drag_range_start(a.min(b));
        prop_assume!(p.commit_range());
        p.enter_restricted_playback();
        p.bar_pointer_down(t);
        p.pump();
        let r = p.range().committed().expect("committed");
        prop_assert!(p.current() >= r.start && p.current() <= r.end);
    }

    #[test]
    fn filmstrip_preview_never_leaves_media(
        moves in prop::collection::vec(-400.0f32..400.0, 1..30),
        start in 0.0f64..120.0,
    ) {
        let mut p = loaded_player(120.0);
        p.open_filmstrip(Some(start));
        let mut x = 1_000.0f32;
        p.filmstrip_pointer_down(x, None);
        for dx in moves {
            x += dx;
            p.filmstrip_pointer_move(x);
            prop_assert!(p.preview_time() >= 0.0);
            prop_assert!(p.preview_time() <= max_seekable(120.0));
            prop_assert!(p.filmstrip().accumulated_px().abs() < p.config().slot_pixel_width());
        }
        p.filmstrip_pointer_up();
        prop_assert_eq!(p.selection().selected, None);
        prop_assert!(!p.filmstrip().is_dragging());
    }
}

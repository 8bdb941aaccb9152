// crates/clipstrip-core/src/commands.rs
//
// Every user action in ClipStrip is expressed as a ClipCommand.
// Modules emit these; app.rs processes them after the UI pass.
// Player variants go to `ClipPlayer::process`, list variants to
// `ItemList::process`. Adding a feature = a variant here + one match arm.

use crate::state::RangeHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum ClipCommand {
    // ── Transport ────────────────────────────────────────────────────────────
    Seek(f64),
    PlayPause,
    /// The primary button: restart when the end is reached, else play/pause.
    PressPlayButton,
    SetPlaybackRate(f64),

    // ── Seek bar ─────────────────────────────────────────────────────────────
    /// `time` is already mapped from the pointer x by the bar widget.
    BarClick(f64),
    BarPointerDown(f64),
    BarPointerMove(f64),
    BarPointerUp,

    // ── Range ────────────────────────────────────────────────────────────────
    BeginRangeEdit,
    DragRangeHandle { handle: RangeHandle, time: f64 },
    CommitRange,
    CancelRangeEdit,
    EnterRestrictedPlayback,
    ExitRestrictedPlayback,

    // ── Filmstrip ────────────────────────────────────────────────────────────
    ToggleFilmstrip,
    OpenFilmstrip(Option<f64>),
    CloseFilmstrip,
    /// `slot_time` is the time of the slot under the pointer, if any.
    FilmstripPointerDown { x: f32, slot_time: Option<f64> },
    FilmstripPointerMove(f32),
    FilmstripPointerUp,
    FilmstripPointerCancel,
    SelectPreviewAsThumbnail,

    // ── Draft ────────────────────────────────────────────────────────────────
    /// Emit the current draft as a list item if it can be committed.
    CommitDraft,

    // ── List ─────────────────────────────────────────────────────────────────
    SelectItem(String),
    RemoveItem(String),
    ReorderItem { from: String, to: String },
    TogglePin(String),
    ClearSelection,
}

impl ClipCommand {
    /// Commands handled by the item list rather than the player.
    pub fn is_list_command(&self) -> bool {
        matches!(
            self,
            Self::SelectItem(_)
                | Self::RemoveItem(_)
                | Self::ReorderItem { .. }
                | Self::TogglePin(_)
                | Self::ClearSelection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_commands_are_routed_apart() {
        assert!(ClipCommand::TogglePin("a".into()).is_list_command());
        assert!(ClipCommand::ClearSelection.is_list_command());
        assert!(!ClipCommand::CommitDraft.is_list_command());
        assert!(!ClipCommand::BarPointerUp.is_list_command());
    }
}

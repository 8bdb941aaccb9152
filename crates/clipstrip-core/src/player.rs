// crates/clipstrip-core/src/player.rs
//
// ClipPlayer: the timeline interaction state machine.
//
// Owns the clock adapter, range selector, filmstrip scrubber, seek-bar
// gesture, thumbnail selection and draft coordinator, and moves between the
// four interaction modes. Every write to transport time goes through
// `TimelineClock::seek`, except the clock's own restricted-playback clamp.
//
// Frame loop (driven by the shell):
//   1. `on_frame` applies the coalesced filmstrip offset before painting.
//   2. UI modules push ClipCommands.
//   3. app.rs calls `process` for each, then `load_for_editing` /
//      `reset_draft` with the list's current selection and token.
//   4. `pump` handles the transport notifications queued so far.
//   5. `drain_events` hands DraftChanged / ItemCommitted to the list.

use tracing::{debug, warn};

use crate::clock::TimelineClock;
use crate::commands::ClipCommand;
use crate::config::PlayerConfig;
use crate::draft::{CommittedItem, Draft, DraftCoordinator, LoadDecision};
use crate::filmstrip::{Filmstrip, FilmstripLayout, GestureEnd};
use crate::helpers::time::{clamp_to_media, format_range, END_EPSILON};
use crate::range::RangeSelector;
use crate::seek_bar::{BarGesture, SeekBarView};
use crate::state::{InteractionMode, RangeHandle, ThumbnailSelection, TimeRange};
use crate::thumbnail::ThumbnailResolver;
use crate::transport::{MediaTransport, TransportEvent};

/// Notifications for the list collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerEvent {
    DraftChanged(Draft),
    ItemCommitted(CommittedItem),
}

/// One filmstrip frame as the shell paints it.
#[derive(Clone, Debug, PartialEq)]
pub struct FilmstripSlot {
    pub time:      f64,
    pub url:       Option<String>,
    pub is_center: bool,
}

pub struct ClipPlayer<T: MediaTransport> {
    config:      PlayerConfig,
    clock:       TimelineClock<T>,
    range:       RangeSelector,
    filmstrip:   Filmstrip,
    bar:         BarGesture,
    selection:   ThumbnailSelection,
    mode:        InteractionMode,
    coordinator: DraftCoordinator,
    resolver:    ThumbnailResolver,
    events:      Vec<PlayerEvent>,
}

impl<T: MediaTransport> ClipPlayer<T> {
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_resolver(config, ThumbnailResolver::Placeholder)
    }

    pub fn with_resolver(config: PlayerConfig, resolver: ThumbnailResolver) -> Self {
        let filmstrip = Filmstrip::new(&config);
        Self {
            config,
            clock:       TimelineClock::new(),
            range:       RangeSelector::new(),
            filmstrip,
            bar:         BarGesture::Idle,
            selection:   ThumbnailSelection::default(),
            mode:        InteractionMode::Idle,
            coordinator: DraftCoordinator::new(),
            resolver,
            events:      Vec::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &PlayerConfig { &self.config }
    pub fn clock(&self) -> &TimelineClock<T> { &self.clock }
    pub fn range(&self) -> &RangeSelector { &self.range }
    pub fn filmstrip(&self) -> &Filmstrip { &self.filmstrip }
    pub fn selection(&self) -> ThumbnailSelection { self.selection }
    pub fn mode(&self) -> InteractionMode { self.mode }
    pub fn bar_gesture(&self) -> BarGesture { self.bar }
    pub fn resolver(&self) -> &ThumbnailResolver { &self.resolver }
    pub fn layout(&self) -> FilmstripLayout { FilmstripLayout::from_config(&self.config) }

    pub fn duration(&self) -> f64 { self.clock.duration() }
    pub fn current(&self) -> f64 { self.clock.current() }
    pub fn is_playing(&self) -> bool { self.clock.is_playing() }
    pub fn preview_time(&self) -> f64 { self.filmstrip.preview_time() }
    pub fn playback_rate(&self) -> f64 { self.clock.state().playback_rate }
    pub fn playback_rates(&self) -> &[f64] { &self.config.playback_rates }

    pub fn set_resolver(&mut self, resolver: ThumbnailResolver) {
        self.resolver = resolver;
        self.refresh_draft();
    }

    pub fn transport(&self) -> Option<&T> {
        self.clock.transport()
    }

    pub fn transport_mut(&mut self) -> Option<&mut T> {
        self.clock.transport_mut()
    }

    fn has_duration(&self) -> bool {
        self.clock.state().has_duration()
    }

    /// Committed range, but only while restricted playback is on.
    fn active_range(&self) -> Option<TimeRange> {
        if self.mode.is_restricted() { self.range.committed() } else { None }
    }

    fn clamp_to_active_range(&self, t: f64) -> f64 {
        self.active_range().map(|r| r.clamp(t)).unwrap_or(t)
    }

    fn set_mode(&mut self, next: InteractionMode) {
        if self.mode != next {
            debug!(from = self.mode.label(), to = next.label(), "mode");
            self.mode = next;
        }
    }

    /// Leave edit / restricted playback without touching an open filmstrip.
    fn leave_range_modes(&mut self) {
        if self.mode.is_editing() || self.mode.is_restricted() {
            self.set_mode(InteractionMode::Idle);
        }
    }

    // ── Transport ────────────────────────────────────────────────────────────

    pub fn attach_transport(&mut self, transport: T) {
        self.clock.attach(transport);
        if self.clock.transport().map(|t| t.duration() > 0.0).unwrap_or(false) {
            self.handle_loaded_metadata();
        }
        self.refresh_draft();
    }

    /// Handle the transport notifications queued so far, in arrival order.
    /// Notifications raised while handling them wait for the next pump.
    pub fn pump(&mut self) {
        for ev in self.clock.drain_events() {
            match ev {
                TransportEvent::LoadedMetadata => self.handle_loaded_metadata(),
                TransportEvent::TimeUpdate     => self.handle_time_update(),
                TransportEvent::Play           => self.clock.on_play(),
                TransportEvent::Pause          => self.clock.on_pause(),
            }
        }
        self.refresh_draft();
    }

    fn handle_loaded_metadata(&mut self) {
        let duration = self.clock.on_loaded_metadata();
        if self.range.seed_default(duration, self.config.default_clip_seconds) {
            debug!(duration, range = ?self.range.candidate(), "seeded default range");
        }
        if !self.filmstrip.is_open() {
            self.filmstrip.set_preview_time(self.clock.current());
        }
        if duration > 0.0 {
            if let Some(item) = self.coordinator.take_pending() {
                debug!(id = %item.id, "applying deferred item");
                self.apply_item(item);
            }
        }
    }

    fn handle_time_update(&mut self) {
        let restrict = self.active_range();
        if let Some(t) = self.clock.on_time_update(restrict) {
            if !self.filmstrip.is_open() {
                self.filmstrip.set_preview_time(t);
            }
        }
    }

    pub fn seek(&mut self, t: f64) {
        self.clock.seek(t);
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        if !self.config.is_allowed_rate(rate) {
            warn!(rate, "playback rate not offered, ignored");
            return;
        }
        self.clock.set_playback_rate(rate);
    }

    /// Close an open filmstrip and play; otherwise toggle.
    pub fn play_pause(&mut self) {
        if self.filmstrip.is_open() {
            self.close_filmstrip();
            self.clock.play();
        } else if self.clock.transport_paused() {
            self.clock.play();
        } else {
            self.clock.pause();
        }
    }

    /// End reached: playback has run into the range end (restricted) or the
    /// media end. The play button turns into a restart button.
    pub fn should_show_reset(&self) -> bool {
        let current = self.clock.current();
        match self.active_range() {
            Some(r) => current >= r.end - END_EPSILON,
            None    => self.has_duration() && current >= self.duration() - END_EPSILON,
        }
    }

    pub fn press_play_button(&mut self) {
        if self.should_show_reset() {
            let restart = self.active_range().map(|r| r.start).unwrap_or(0.0);
            self.clock.pause();
            self.clock.seek(restart);
        } else {
            self.play_pause();
        }
    }

    // ── Filmstrip ────────────────────────────────────────────────────────────

    /// Open the picker at `at` (or the live transport time). Cancels a range
    /// edit and leaves restricted playback first; pauses the transport.
    pub fn open_filmstrip(&mut self, at: Option<f64>) {
        match self.mode {
            InteractionMode::EditingRange { baseline } => {
                self.range.restore(baseline);
                debug!("range edit cancelled by filmstrip");
            }
            InteractionMode::PickingThumbnail => return,
            _ => {}
        }
        self.clock.pause();
        let t = clamp_to_media(at.unwrap_or_else(|| self.clock.transport_time()), self.duration());
        self.filmstrip.open(t);
        self.set_mode(InteractionMode::PickingThumbnail);
        self.refresh_draft();
    }

    pub fn close_filmstrip(&mut self) {
        if self.hide_filmstrip() {
            self.set_mode(InteractionMode::Idle);
        }
    }

    /// Close the strip and put the preview back on the playhead. The caller
    /// picks the next mode. Returns false if it was already closed.
    fn hide_filmstrip(&mut self) -> bool {
        if !self.filmstrip.is_open() {
            return false;
        }
        self.filmstrip.close();
        self.filmstrip.set_preview_time(self.clock.transport_time());
        true
    }

    pub fn toggle_filmstrip(&mut self) {
        if self.filmstrip.is_open() {
            self.close_filmstrip();
        } else {
            self.open_filmstrip(None);
        }
    }

    pub fn filmstrip_pointer_down(&mut self, x: f32, slot_time: Option<f64>) {
        if !self.filmstrip.is_open() || !self.has_duration() {
            return;
        }
        self.clock.pause();
        self.filmstrip.pointer_down(x, slot_time);
    }

    /// Each full-slot step re-seeks so the frozen frame follows the strip.
    pub fn filmstrip_pointer_move(&mut self, x: f32) {
        let duration = self.duration();
        for t in self.filmstrip.pointer_move(x, duration) {
            self.clock.seek(t);
        }
    }

    pub fn filmstrip_pointer_up(&mut self) {
        if let Some(GestureEnd::Tap(t)) = self.filmstrip.pointer_up() {
            let t = clamp_to_media(t, self.duration());
            debug!(time = t, "thumbnail tapped");
            self.selection.selected = Some(t);
            self.clock.seek(t);
            self.refresh_draft();
        }
    }

    pub fn filmstrip_pointer_cancel(&mut self) {
        self.filmstrip.pointer_cancel();
    }

    /// Explicit "use this frame" affordance.
    pub fn select_preview_as_thumbnail(&mut self) {
        if !self.filmstrip.is_open() {
            return;
        }
        self.selection.selected = Some(self.filmstrip.preview_time());
        self.refresh_draft();
    }

    /// The pending strip offset for this display frame, if it changed.
    pub fn on_frame(&mut self) -> Option<f32> {
        self.filmstrip.take_frame_offset()
    }

    pub fn filmstrip_slots(&self) -> Vec<FilmstripSlot> {
        let center = self.filmstrip.center_index();
        self.filmstrip
            .slot_times(self.duration())
            .into_iter()
            .enumerate()
            .map(|(i, time)| FilmstripSlot {
                time,
                url: self.resolver.resolve(time),
                is_center: i == center,
            })
            .collect()
    }

    // ── Range ────────────────────────────────────────────────────────────────

    pub fn begin_range_edit(&mut self) {
        if self.mode.is_editing() {
            return;
        }
        self.hide_filmstrip();
        let baseline = self.range.candidate();
        self.set_mode(InteractionMode::EditingRange { baseline });
    }

    pub fn drag_range_start(&mut self, t: f64) {
        self.drag_range_handle(RangeHandle::Start, t);
    }

    pub fn drag_range_end(&mut self, t: f64) {
        self.drag_range_handle(RangeHandle::End, t);
    }

    pub fn drag_range_handle(&mut self, handle: RangeHandle, t: f64) {
        if !self.mode.is_editing() || !self.has_duration() {
            return;
        }
        self.range.set_handle(handle, t, self.duration());
        self.refresh_draft();
    }

    /// Nearest handle to `t`, only meaningful while editing.
    pub fn pick_handle(&self, t: f64) -> Option<RangeHandle> {
        self.mode.is_editing().then(|| self.range.pick_handle(t))
    }

    pub fn is_range_dirty(&self) -> bool {
        self.mode
            .baseline()
            .map(|b| self.range.is_dirty_against(b))
            .unwrap_or(false)
    }

    /// Save the edited range. Returns false (and changes nothing) when not
    /// editing or nothing moved.
    pub fn commit_range(&mut self) -> bool {
        if !self.is_range_dirty() {
            return false;
        }
        let r = self.range.commit();
        debug!(start = r.start, end = r.end, "range committed");
        self.bar = BarGesture::Idle;
        self.set_mode(InteractionMode::Idle);
        self.refresh_draft();
        true
    }

    pub fn cancel_range_edit(&mut self) {
        let Some(baseline) = self.mode.baseline() else { return };
        self.range.restore(baseline);
        self.bar = BarGesture::Idle;
        self.set_mode(InteractionMode::Idle);
        self.refresh_draft();
    }

    pub fn enter_restricted_playback(&mut self) {
        let Some(r) = self.range.committed() else { return };
        self.hide_filmstrip();
        self.bar = BarGesture::Idle;
        self.set_mode(InteractionMode::RestrictedPlayback);
        self.clock.seek(r.start);
        self.clock.play();
    }

    /// Stop clamping; the transport is left where it is.
    pub fn exit_restricted_playback(&mut self) {
        if self.mode.is_restricted() {
            self.set_mode(InteractionMode::Idle);
        }
    }

    /// `M:SS ~ M:SS` for the range a draft would use, once it has length.
    pub fn range_summary(&self) -> Option<String> {
        let r = self.range.draft_range();
        (r.end > r.start).then(|| format_range(r.start, r.end))
    }

    // ── Seek bar ─────────────────────────────────────────────────────────────

    pub fn bar_click(&mut self, t: f64) {
        if !self.has_duration() || self.mode.is_editing() {
            return;
        }
        let t = self.clamp_to_active_range(t);
        self.clock.seek(t);
    }

    pub fn bar_pointer_down(&mut self, t: f64) {
        if !self.has_duration() {
            return;
        }
        if self.mode.is_editing() {
            let handle = self.range.pick_handle(t);
            self.bar = BarGesture::Handle(handle);
            self.range.set_handle(handle, t, self.duration());
            self.refresh_draft();
            return;
        }
        self.bar = BarGesture::Scrubbing;
        self.scrub_to(t);
    }

    pub fn bar_pointer_move(&mut self, t: f64) {
        match (self.bar, self.mode.is_editing()) {
            (BarGesture::Handle(h), true) => {
                self.range.set_handle(h, t, self.duration());
                self.refresh_draft();
            }
            (BarGesture::Scrubbing, false) => self.scrub_to(t),
            _ => {}
        }
    }

    pub fn bar_pointer_up(&mut self) {
        self.bar = BarGesture::Idle;
    }

    fn scrub_to(&mut self, t: f64) {
        let t = clamp_to_media(self.clamp_to_active_range(t), self.duration());
        self.filmstrip.set_preview_time(t);
        self.clock.seek(t);
    }

    pub fn seek_bar_view(&self) -> SeekBarView {
        SeekBarView::build(self.current(), self.duration(), self.range.candidate(), self.mode.is_editing())
    }

    // ── Draft / commit ───────────────────────────────────────────────────────

    pub fn draft(&self) -> Draft {
        let r = self.range.draft_range();
        let thumbnail_time = self.selection.selected;
        Draft {
            start: r.start,
            end: r.end,
            thumbnail_time,
            thumbnail_url: thumbnail_time.and_then(|t| self.resolver.resolve(t)),
        }
    }

    pub fn can_commit(&self) -> bool {
        self.draft().can_commit()
    }

    /// Emit the draft as a new item. Local selection is left as is.
    pub fn commit_draft(&mut self) -> Option<CommittedItem> {
        let item = CommittedItem::from_draft(&self.draft())?;
        debug!(id = %item.id, start = item.start, end = item.end, thumb = item.thumbnail_time, "draft committed");
        self.events.push(PlayerEvent::ItemCommitted(item.clone()));
        Some(item)
    }

    /// Apply the list's selected item, once per id. Before the duration is
    /// known the item is held and applied by the metadata handler.
    pub fn load_for_editing(&mut self, item: Option<&CommittedItem>) {
        match self.coordinator.request_load(item, self.has_duration()) {
            LoadDecision::Apply(item) => self.apply_item(item),
            LoadDecision::Deferred    => {}
            LoadDecision::Skip        => {}
        }
    }

    fn apply_item(&mut self, item: CommittedItem) {
        let d = self.duration();
        let start = clamp_to_media(item.start.min(item.end), d);
        let end   = clamp_to_media(item.start.max(item.end), d);
        let thumb = clamp_to_media(item.thumbnail_time, d);
        debug!(id = %item.id, start, end, thumb, "item loaded for editing");

        self.range.apply(TimeRange::new(start, end), true);
        self.bar = BarGesture::Idle;
        self.leave_range_modes();
        self.selection.selected = Some(thumb);
        self.filmstrip.set_preview_time(thumb);
        self.clock.seek(thumb);
        self.coordinator.mark_applied(&item.id);
        self.refresh_draft();
    }

    /// Start a fresh draft when `token` changes.
    pub fn reset_draft(&mut self, token: u64) {
        if !self.coordinator.consume_reset(token) {
            return;
        }
        debug!(token, "draft reset");
        self.selection = ThumbnailSelection::default();
        self.range.reset(self.duration(), self.config.default_clip_seconds);
        self.bar = BarGesture::Idle;
        self.leave_range_modes();
        self.coordinator.clear_applied();
        self.refresh_draft();
    }

    fn refresh_draft(&mut self) {
        let draft = self.draft();
        if self.coordinator.observe(&draft) {
            self.events.push(PlayerEvent::DraftChanged(draft));
        }
    }

    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Dispatch one player command. List commands are ignored here.
    pub fn process(&mut self, cmd: &ClipCommand) {
        match cmd {
            ClipCommand::Seek(t)                  => self.seek(*t),
            ClipCommand::PlayPause                => self.play_pause(),
            ClipCommand::PressPlayButton          => self.press_play_button(),
            ClipCommand::SetPlaybackRate(r)       => self.set_playback_rate(*r),

            ClipCommand::BarClick(t)              => self.bar_click(*t),
            ClipCommand::BarPointerDown(t)        => self.bar_pointer_down(*t),
            ClipCommand::BarPointerMove(t)        => self.bar_pointer_move(*t),
            ClipCommand::BarPointerUp             => self.bar_pointer_up(),

            ClipCommand::BeginRangeEdit           => self.begin_range_edit(),
            ClipCommand::DragRangeHandle { handle, time } => self.drag_range_handle(*handle, *time),
            ClipCommand::CommitRange              => { self.commit_range(); }
            ClipCommand::CancelRangeEdit          => self.cancel_range_edit(),
            ClipCommand::EnterRestrictedPlayback  => self.enter_restricted_playback(),
            ClipCommand::ExitRestrictedPlayback   => self.exit_restricted_playback(),

            ClipCommand::ToggleFilmstrip          => self.toggle_filmstrip(),
            ClipCommand::OpenFilmstrip(at)        => self.open_filmstrip(*at),
            ClipCommand::CloseFilmstrip           => self.close_filmstrip(),
            ClipCommand::FilmstripPointerDown { x, slot_time } => self.filmstrip_pointer_down(*x, *slot_time),
            ClipCommand::FilmstripPointerMove(x)  => self.filmstrip_pointer_move(*x),
            ClipCommand::FilmstripPointerUp       => self.filmstrip_pointer_up(),
            ClipCommand::FilmstripPointerCancel   => self.filmstrip_pointer_cancel(),
            ClipCommand::SelectPreviewAsThumbnail => self.select_preview_as_thumbnail(),

            ClipCommand::CommitDraft              => { self.commit_draft(); }

            ClipCommand::SelectItem(_)
            | ClipCommand::RemoveItem(_)
            | ClipCommand::ReorderItem { .. }
            | ClipCommand::TogglePin(_)
            | ClipCommand::ClearSelection         => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::time::max_seekable;
    use crate::transport::ScriptedTransport;

    fn player(duration: f64) -> ClipPlayer<ScriptedTransport> {
        let mut p = ClipPlayer::new(PlayerConfig::default());
        p.attach_transport(ScriptedTransport::new());
        p.transport_mut().unwrap().load(duration);
        p.pump();
        p
    }

    fn committed(p: &mut ClipPlayer<ScriptedTransport>, start: f64, end: f64) {
        p.begin_range_edit();
        p.drag_range_end(end);
        p.drag_range_start(start);
        assert!(p.commit_range());
    }

    fn item(id: &str, start: f64, end: f64, thumb: f64) -> CommittedItem {
        CommittedItem {
            id:             id.into(),
            thumbnail_url:  format!("placeholder://thumb/{}", thumb as u64),
            thumbnail_time: thumb,
            start,
            end,
        }
    }

    #[test]
    fn metadata_seeds_default_range() {
        let p = player(120.0);
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 5.0));
        let p = player(3.0);
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 3.0));
    }

    #[test]
    fn commit_without_drag_is_rejected() {
        let mut p = player(120.0);
        p.begin_range_edit();
        assert!(!p.commit_range());
        assert!(p.mode().is_editing());
        assert_eq!(p.range().committed(), None);
    }

    #[test]
    fn cancel_restores_baseline() {
        let mut p = player(120.0);
        p.begin_range_edit();
        p.drag_range_end(40.0);
        assert!(p.is_range_dirty());
        p.cancel_range_edit();
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 5.0));
        assert_eq!(p.mode(), InteractionMode::Idle);
        assert!(!p.is_range_dirty());
    }

    #[test]
    fn drags_ignored_outside_edit_mode() {
        let mut p = player(120.0);
        p.drag_range_end(40.0);
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 5.0));
    }

    #[test]
    fn restricted_playback_needs_a_committed_range() {
        let mut p = player(120.0);
        p.enter_restricted_playback();
        assert_eq!(p.mode(), InteractionMode::Idle);
        committed(&mut p, 10.0, 20.0);
        p.enter_restricted_playback();
        assert!(p.mode().is_restricted());
        assert_eq!(p.transport().unwrap().current_time(), 10.0);
        assert!(!p.transport().unwrap().is_paused());
    }

    #[test]
    fn begin_edit_leaves_restricted_playback() {
        let mut p = player(120.0);
        committed(&mut p, 10.0, 20.0);
        p.enter_restricted_playback();
        p.begin_range_edit();
        assert!(p.mode().is_editing());
        assert!(!p.mode().is_restricted());
    }

    #[test]
    fn exit_restricted_leaves_transport_alone() {
        let mut p = player(120.0);
        committed(&mut p, 10.0, 20.0);
        p.enter_restricted_playback();
        p.exit_restricted_playback();
        assert_eq!(p.mode(), InteractionMode::Idle);
        assert!(!p.transport().unwrap().is_paused());
        assert_eq!(p.transport().unwrap().current_time(), 10.0);
    }

    #[test]
    fn open_filmstrip_pauses_and_cancels_edit() {
        let mut p = player(120.0);
        p.play_pause();
        p.pump();
        assert!(p.is_playing());
        p.begin_range_edit();
        p.drag_range_end(50.0);
        p.open_filmstrip(Some(37.0));
        p.pump();
        assert!(p.mode().is_picking());
        assert!(!p.is_playing());
        assert_eq!(p.preview_time(), 37.0);
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 5.0));
    }

    #[test]
    fn leaving_the_picker_for_a_range_mode_resyncs_preview() {
        let mut p = player(120.0);
        p.seek(10.0);
        p.pump();
        p.open_filmstrip(Some(37.0));
        p.begin_range_edit();
        assert!(!p.filmstrip().is_open());
        assert_eq!(p.preview_time(), p.current());
        assert_eq!(p.preview_time(), 10.0);

        let mut p = player(120.0);
        committed(&mut p, 20.0, 30.0);
        p.seek(10.0);
        p.pump();
        p.open_filmstrip(Some(37.0));
        p.enter_restricted_playback();
        assert!(!p.filmstrip().is_open());
        assert_eq!(p.preview_time(), 10.0);
        assert!(p.mode().is_restricted());
    }

    #[test]
    fn open_filmstrip_clamps_target() {
        let mut p = player(120.0);
        p.open_filmstrip(Some(500.0));
        assert!((p.preview_time() - 119.999).abs() < 1e-9);
    }

    #[test]
    fn play_pause_closes_filmstrip_and_plays() {
        let mut p = player(120.0);
        p.open_filmstrip(Some(10.0));
        p.play_pause();
        p.pump();
        assert_eq!(p.mode(), InteractionMode::Idle);
        assert!(!p.filmstrip().is_open());
        assert!(p.is_playing());
    }

    #[test]
    fn preview_follows_playhead_only_while_closed() {
        let mut p = player(120.0);
        p.seek(12.0);
        p.pump();
        assert_eq!(p.preview_time(), 12.0);
        p.open_filmstrip(Some(40.0));
        p.transport_mut().unwrap().set_current_time(50.0);
        p.pump();
        assert_eq!(p.current(), 50.0);
        assert_eq!(p.preview_time(), 40.0);
    }

    #[test]
    fn filmstrip_drag_seeks_each_step_without_selecting() {
        let mut p = player(120.0);
        p.open_filmstrip(Some(37.0));
        p.filmstrip_pointer_down(500.0, Some(37.0));
        p.filmstrip_pointer_move(240.0);
        assert_eq!(p.transport().unwrap().current_time(), 39.0);
        p.filmstrip_pointer_up();
        assert_eq!(p.selection().selected, None);
        assert_eq!(p.preview_time(), 39.0);
    }

    #[test]
    fn filmstrip_tap_selects_and_seeks() {
        let mut p = player(120.0);
        p.open_filmstrip(Some(37.0));
        p.filmstrip_pointer_down(300.0, Some(35.0));
        p.filmstrip_pointer_move(302.0);
        p.filmstrip_pointer_up();
        assert_eq!(p.selection().selected, Some(35.0));
        assert_eq!(p.transport().unwrap().current_time(), 35.0);
    }

    #[test]
    fn pointer_cancel_never_selects() {
        let mut p = player(120.0);
        p.open_filmstrip(Some(37.0));
        p.filmstrip_pointer_down(300.0, Some(35.0));
        p.filmstrip_pointer_cancel();
        p.filmstrip_pointer_up();
        assert_eq!(p.selection().selected, None);
    }

    #[test]
    fn explicit_select_uses_preview() {
        let mut p = player(120.0);
        p.select_preview_as_thumbnail();
        assert_eq!(p.selection().selected, None);
        p.open_filmstrip(Some(22.0));
        p.select_preview_as_thumbnail();
        assert_eq!(p.selection().selected, Some(22.0));
    }

    #[test]
    fn bar_click_is_range_clamped_when_restricted() {
        let mut p = player(120.0);
        p.bar_click(60.0);
        assert_eq!(p.transport().unwrap().current_time(), 60.0);
        committed(&mut p, 10.0, 20.0);
        p.enter_restricted_playback();
        p.bar_click(60.0);
        assert_eq!(p.transport().unwrap().current_time(), 20.0);
    }

    #[test]
    fn bar_click_ignored_while_editing() {
        let mut p = player(120.0);
        p.begin_range_edit();
        p.bar_click(60.0);
        assert_eq!(p.transport().unwrap().current_time(), 0.0);
    }

    #[test]
    fn bar_press_in_edit_mode_drags_nearest_handle() {
        let mut p = player(120.0);
        p.begin_range_edit();
        p.drag_range_end(40.0);
        p.bar_pointer_down(30.0);
        assert_eq!(p.bar_gesture(), BarGesture::Handle(RangeHandle::End));
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 30.0));
        p.bar_pointer_move(50.0);
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 50.0));
        p.bar_pointer_up();
        p.bar_pointer_move(70.0);
        assert_eq!(p.range().candidate().end, 50.0);
        assert_eq!(p.range().committed(), None);
    }

    #[test]
    fn bar_scrub_updates_preview_and_seeks() {
        let mut p = player(120.0);
        p.bar_pointer_down(10.0);
        p.bar_pointer_move(12.5);
        assert_eq!(p.preview_time(), 12.5);
        assert_eq!(p.transport().unwrap().current_time(), 12.5);
        p.bar_pointer_up();
        p.bar_pointer_move(80.0);
        assert_eq!(p.transport().unwrap().current_time(), 12.5);
    }

    #[test]
    fn play_button_restarts_at_range_start() {
        let mut p = player(120.0);
        committed(&mut p, 10.0, 20.0);
        p.enter_restricted_playback();
        p.pump();
        p.transport_mut().unwrap().set_current_time(25.0);
        p.pump();
        assert!(p.should_show_reset());
        p.press_play_button();
        p.pump();
        assert_eq!(p.current(), 10.0);
        assert!(!p.is_playing());
    }

    #[test]
    fn play_button_restarts_at_zero_at_media_end() {
        let mut p = player(2.0);
        p.press_play_button();
        p.transport_mut().unwrap().advance(5.0);
        p.pump();
        assert!(p.should_show_reset());
        p.press_play_button();
        p.pump();
        assert_eq!(p.current(), 0.0);
        assert!(!p.should_show_reset());
    }

    #[test]
    fn no_reset_affordance_before_metadata() {
        let mut p: ClipPlayer<ScriptedTransport> = ClipPlayer::new(PlayerConfig::default());
        p.attach_transport(ScriptedTransport::new());
        assert!(!p.should_show_reset());
    }

    #[test]
    fn unknown_rates_are_rejected() {
        let mut p = player(120.0);
        p.set_playback_rate(1.5);
        assert_eq!(p.playback_rate(), 1.5);
        p.set_playback_rate(1.3);
        assert_eq!(p.playback_rate(), 1.5);
        assert_eq!(p.transport().unwrap().playback_rate(), 1.5);
    }

    #[test]
    fn load_for_editing_applies_once_and_clamps() {
        let mut p = player(120.0);
        p.begin_range_edit();
        let it = item("a", 100.0, 300.0, 150.0);
        p.load_for_editing(Some(&it));
        assert_eq!(p.mode(), InteractionMode::Idle);
        let last = max_seekable(120.0);
        assert_eq!(p.range().committed(), Some(TimeRange::new(100.0, last)));
        assert_eq!(p.selection().selected, Some(last));
        p.drag_range_end(110.0);
        p.load_for_editing(Some(&it));
        assert_eq!(p.selection().selected, Some(last));
    }

    #[test]
    fn load_for_editing_keeps_filmstrip_open() {
        let mut p = player(120.0);
        p.open_filmstrip(Some(5.0));
        p.load_for_editing(Some(&item("a", 10.0, 20.0, 12.0)));
        assert!(p.mode().is_picking());
        assert_eq!(p.preview_time(), 12.0);
    }

    #[test]
    fn reset_draft_clears_selection_and_commit() {
        let mut p = player(120.0);
        p.reset_draft(0);
        p.load_for_editing(Some(&item("a", 10.0, 20.0, 12.0)));
        p.reset_draft(0);
        assert_eq!(p.selection().selected, Some(12.0));
        p.reset_draft(1);
        assert_eq!(p.selection().selected, None);
        assert_eq!(p.range().committed(), None);
        assert_eq!(p.range().candidate(), TimeRange::new(0.0, 5.0));
    }

    #[test]
    fn draft_events_fire_on_change_only() {
        let mut p = player(120.0);
        p.drain_events();
        p.pump();
        assert!(p.drain_events().is_empty());
        p.open_filmstrip(Some(8.0));
        p.select_preview_as_thumbnail();
        let events = p.drain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            PlayerEvent::DraftChanged(d) => {
                assert_eq!(d.thumbnail_time, Some(8.0));
                assert_eq!(d.thumbnail_url.as_deref(), Some("placeholder://thumb/8"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn commit_draft_emits_item_and_keeps_selection() {
        let mut p = player(120.0);
        assert!(p.commit_draft().is_none());
        p.open_filmstrip(Some(3.0));
        p.select_preview_as_thumbnail();
        p.drain_events();
        let it = p.commit_draft().expect("committable");
        assert_eq!((it.start, it.end, it.thumbnail_time), (0.0, 5.0, 3.0));
        assert_eq!(p.drain_events(), vec![PlayerEvent::ItemCommitted(it)]);
        assert_eq!(p.selection().selected, Some(3.0));
    }

    #[test]
    fn filmstrip_slots_mark_center() {
        let mut p = player(120.0);
        p.open_filmstrip(Some(10.0));
        let slots = p.filmstrip_slots();
        assert_eq!(slots.len(), 9);
        assert!(slots[4].is_center);
        assert_eq!(slots[4].time, 10.0);
        assert_eq!(slots[0].time, 6.0);
        assert_eq!(slots[8].url.as_deref(), Some("placeholder://thumb/14"));
    }

    #[test]
    fn process_dispatches_player_commands() {
        let mut p = player(120.0);
        p.process(&ClipCommand::BeginRangeEdit);
        p.process(&ClipCommand::DragRangeHandle { handle: RangeHandle::End, time: 30.0 });
        p.process(&ClipCommand::CommitRange);
        assert_eq!(p.range().committed(), Some(TimeRange::new(0.0, 30.0)));
        p.process(&ClipCommand::ClearSelection);
        assert_eq!(p.mode(), InteractionMode::Idle);
    }

    #[test]
    fn range_summary_needs_length() {
        let mut p: ClipPlayer<ScriptedTransport> = ClipPlayer::new(PlayerConfig::default());
        assert_eq!(p.range_summary(), None);
        p.attach_transport(ScriptedTransport::new());
        p.transport_mut().unwrap().load(120.0);
        p.pump();
        assert_eq!(p.range_summary().as_deref(), Some("0:00 ~ 0:05"));
    }
}

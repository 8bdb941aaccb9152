// crates/clipstrip-core/src/draft.rs
//
// Draft/commit plumbing between the player and the list collaborator.
//
// `Draft` is derived on demand from the range and thumbnail selection; the
// coordinator remembers the last one it announced (so observers hear about
// each change once), which external item was last applied (identity by id),
// the item waiting for a duration, and the last reset token consumed.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Live, uncommitted (range, thumbnail) pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub start:          f64,
    pub end:            f64,
    pub thumbnail_time: Option<f64>,
    pub thumbnail_url:  Option<String>,
}

impl Draft {
    pub fn can_commit(&self) -> bool {
        self.thumbnail_time.is_some() && self.end > self.start && self.thumbnail_url.is_some()
    }
}

/// A draft that was added to the list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommittedItem {
    pub id:             String,
    pub thumbnail_url:  String,
    pub thumbnail_time: f64,
    pub start:          f64,
    pub end:            f64,
}

impl CommittedItem {
    /// `None` unless the draft can be committed.
    pub fn from_draft(draft: &Draft) -> Option<Self> {
        if !draft.can_commit() {
            return None;
        }
        Some(Self {
            id:             new_item_id(),
            thumbnail_url:  draft.thumbnail_url.clone()?,
            thumbnail_time: draft.thumbnail_time?,
            start:          draft.start,
            end:            draft.end,
        })
    }
}

/// `<unix millis>-<6 hex chars>`: unique enough for one session.
pub fn new_item_id() -> String {
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{ms}-{}", &suffix[..6])
}

/// What to do with the item the list currently has selected.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadDecision {
    /// Already applied, or nothing selected.
    Skip,
    /// Duration unknown; held until it is.
    Deferred,
    Apply(CommittedItem),
}

#[derive(Clone, Debug, Default)]
pub struct DraftCoordinator {
    pending:     Option<CommittedItem>,
    applied_id:  Option<String>,
    last_draft:  Option<Draft>,
    reset_token: Option<u64>,
}

impl DraftCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `draft` as current. True when it differs from the last one.
    pub fn observe(&mut self, draft: &Draft) -> bool {
        if self.last_draft.as_ref() == Some(draft) {
            return false;
        }
        self.last_draft = Some(draft.clone());
        true
    }

    pub fn pending(&self) -> Option<&CommittedItem> {
        self.pending.as_ref()
    }

    /// Decide how to handle the collaborator's current selection.
    /// Clearing the selection forgets both the pending item and the last
    /// applied id, so selecting the same item again re-applies it.
    pub fn request_load(&mut self, item: Option<&CommittedItem>, duration_known: bool) -> LoadDecision {
        let Some(item) = item else {
            self.pending    = None;
            self.applied_id = None;
            return LoadDecision::Skip;
        };
        if self.applied_id.as_deref() == Some(item.id.as_str()) {
            return LoadDecision::Skip;
        }
        if !duration_known {
            if self.pending.as_ref().map(|p| p.id.as_str()) != Some(item.id.as_str()) {
                self.pending = Some(item.clone());
            }
            return LoadDecision::Deferred;
        }
        self.pending = None;
        LoadDecision::Apply(item.clone())
    }

    /// Hand back the deferred item once a positive duration is available.
    pub fn take_pending(&mut self) -> Option<CommittedItem> {
        self.pending.take()
    }

    pub fn mark_applied(&mut self, id: &str) {
        self.applied_id = Some(id.to_owned());
    }

    /// True when `token` differs from the last one seen. The first token
    /// only establishes the baseline.
    pub fn consume_reset(&mut self, token: u64) -> bool {
        match self.reset_token.replace(token) {
            None       => false,
            Some(prev) => prev != token,
        }
    }

    /// Forget which item was applied; pending selection is dropped.
    pub fn clear_applied(&mut self) {
        self.applied_id = None;
        self.pending    = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> CommittedItem {
        CommittedItem {
            id:             id.into(),
            thumbnail_url:  "placeholder://thumb/37".into(),
            thumbnail_time: 37.0,
            start:          30.0,
            end:            45.0,
        }
    }

    #[test]
    fn commit_needs_all_three_conditions() {
        let mut d = Draft { start: 30.0, end: 45.0, thumbnail_time: None, thumbnail_url: None };
        assert!(!d.can_commit());
        d.thumbnail_time = Some(37.0);
        assert!(!d.can_commit());
        d.thumbnail_url = Some("u".into());
        assert!(d.can_commit());
        d.end = 30.0;
        assert!(!d.can_commit());
        assert!(CommittedItem::from_draft(&d).is_none());
    }

    #[test]
    fn ids_look_right_and_differ() {
        let a = new_item_id();
        let b = new_item_id();
        assert_ne!(a, b);
        let (ms, suffix) = a.split_once('-').unwrap();
        assert!(ms.parse::<u128>().is_ok());
        assert_eq!(suffix.len(), 6);
    }

    #[test]
    fn identical_draft_is_announced_once() {
        let mut c = DraftCoordinator::new();
        let d = Draft::default();
        assert!(c.observe(&d));
        assert!(!c.observe(&d));
        assert!(c.observe(&Draft { end: 5.0, ..d }));
    }

    #[test]
    fn same_id_is_not_reapplied() {
        let mut c = DraftCoordinator::new();
        let it = item("a");
        assert_eq!(c.request_load(Some(&it), true), LoadDecision::Apply(it.clone()));
        c.mark_applied("a");
        assert_eq!(c.request_load(Some(&it), true), LoadDecision::Skip);
        c.request_load(None, true);
        assert_eq!(c.request_load(Some(&it), true), LoadDecision::Apply(it));
    }

    #[test]
    fn unknown_duration_defers() {
        let mut c = DraftCoordinator::new();
        let it = item("a");
        assert_eq!(c.request_load(Some(&it), false), LoadDecision::Deferred);
        assert_eq!(c.pending(), Some(&it));
        assert_eq!(c.take_pending(), Some(it));
        assert_eq!(c.take_pending(), None);
    }

    #[test]
    fn reset_token_fires_once_per_value() {
        let mut c = DraftCoordinator::new();
        assert!(!c.consume_reset(0));
        assert!(!c.consume_reset(0));
        assert!(c.consume_reset(1));
        assert!(!c.consume_reset(1));
    }
}

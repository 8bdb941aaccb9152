// crates/clipstrip-core/src/list.rs
//
// In-memory list of committed items for the session. Pure CRUD; the player
// only reads `selected_item()` and `reset_token()` from it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::ClipCommand;
use crate::draft::CommittedItem;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub item:   CommittedItem,
    pub pinned: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemList {
    entries:     Vec<ListEntry>,
    selected:    Option<String>,
    reset_token: u64,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.item.id == id)
    }

    /// Append an unpinned item.
    pub fn push(&mut self, item: CommittedItem) {
        debug!(id = %item.id, start = item.start, end = item.end, "item added");
        self.entries.push(ListEntry { item, pinned: false });
    }

    pub fn remove(&mut self, id: &str) -> Option<CommittedItem> {
        let idx = self.index_of(id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(self.entries.remove(idx).item)
    }

    /// Move `from` to the slot `to` currently occupies (drop-onto semantics).
    /// Unknown ids and `from == to` leave the list alone. Pinned items stay
    /// ahead of unpinned ones afterwards.
    pub fn reorder(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        let (Some(fi), Some(ti)) = (self.index_of(from), self.index_of(to)) else { return };
        let moving = self.entries.remove(fi);
        self.entries.insert(ti, moving);
        self.settle_pins();
    }

    pub fn toggle_pin(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else { return };
        self.entries[idx].pinned = !self.entries[idx].pinned;
        self.settle_pins();
    }

    // Stable sort keeps relative order inside each group.
    fn settle_pins(&mut self) {
        self.entries.sort_by_key(|e| !e.pinned);
    }

    /// Select an existing item; unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if self.index_of(id).is_some() {
            self.selected = Some(id.to_owned());
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_item(&self) -> Option<&CommittedItem> {
        let id = self.selected.as_deref()?;
        self.entries.iter().find(|e| e.item.id == id).map(|e| &e.item)
    }

    /// Drop the selection and tell the player to start a fresh draft.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.reset_token += 1;
    }

    pub fn reset_token(&self) -> u64 {
        self.reset_token
    }

    /// Apply a list command. Player commands are ignored.
    pub fn process(&mut self, cmd: &ClipCommand) {
        match cmd {
            ClipCommand::SelectItem(id)          => self.select(id),
            ClipCommand::RemoveItem(id)          => { self.remove(id); }
            ClipCommand::ReorderItem { from, to } => self.reorder(from, to),
            ClipCommand::TogglePin(id)           => self.toggle_pin(id),
            ClipCommand::ClearSelection          => self.clear_selection(),
            _ => {}
        }
    }
}

//! Placement state for the drag-and-drop task kinds.
//!
//! Pointer drops and keyboard activation both funnel into the same `place`/
//! `move_before` operations on these boards, so evaluation and persistence
//! never depend on which input modality produced a move. Invalid targets
//! and unknown items are no-ops.

use std::collections::{BTreeMap, BTreeSet};

use crate::eval::TaskAnswer;

//
// ─── Match Board ───────────────────────────────────────────────────────────────
//

/// Term-to-explanation assignment state for a match task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchBoard {
    terms: Vec<String>,
    placements: BTreeMap<String, String>,
}

impl MatchBoard {
    #[must_use]
    pub fn new(term_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            terms: term_ids.into_iter().collect(),
            placements: BTreeMap::new(),
        }
    }

    /// Moves a term into a slot, displacing any earlier assignment of that
    /// term. Returns false (and changes nothing) for unknown terms.
    pub fn place(&mut self, term_id: &str, slot_id: &str) -> bool {
        if !self.terms.iter().any(|known| known == term_id) {
            return false;
        }
        self.placements
            .insert(term_id.to_string(), slot_id.to_string());
        true
    }

    #[must_use]
    pub fn location_of(&self, term_id: &str) -> Option<&str> {
        self.placements.get(term_id).map(String::as_str)
    }

    /// Terms currently sitting in the given slot, in term order.
    #[must_use]
    pub fn slot_contents(&self, slot_id: &str) -> Vec<&str> {
        self.terms
            .iter()
            .filter(|term| self.location_of(term) == Some(slot_id))
            .map(String::as_str)
            .collect()
    }

    /// Terms not yet dropped anywhere, in term order.
    #[must_use]
    pub fn unplaced(&self) -> Vec<&str> {
        self.terms
            .iter()
            .filter(|term| !self.placements.contains_key(*term))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn answer(&self) -> TaskAnswer {
        TaskAnswer::Match {
            placements: self.placements.clone(),
        }
    }
}

//
// ─── Order Board ───────────────────────────────────────────────────────────────
//

/// One reorderable item. The handle stays stable across moves so drag state
/// survives duplicate labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderEntry {
    pub handle: usize,
    pub label: String,
}

/// Current display sequence for an order task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderBoard {
    entries: Vec<OrderEntry>,
}

impl OrderBoard {
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: labels
                .into_iter()
                .enumerate()
                .map(|(handle, label)| OrderEntry { handle, label })
                .collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    /// Reinserts `item` before `before`, or at the end when `before` is
    /// `None`. Unknown handles (or item == before) change nothing.
    pub fn move_before(&mut self, item: usize, before: Option<usize>) {
        if Some(item) == before {
            return;
        }
        let Some(from) = self.entries.iter().position(|entry| entry.handle == item) else {
            return;
        };
        if let Some(target) = before {
            if !self.entries.iter().any(|entry| entry.handle == target) {
                return;
            }
        }
        let moved = self.entries.remove(from);
        let at = before
            .and_then(|target| self.entries.iter().position(|entry| entry.handle == target))
            .unwrap_or(self.entries.len());
        self.entries.insert(at, moved);
    }

    #[must_use]
    pub fn answer(&self) -> TaskAnswer {
        TaskAnswer::Order {
            sequence: self.entries.iter().map(|entry| entry.label.clone()).collect(),
        }
    }
}

/// Nearest-below insertion rule for continuous reorder dragging.
///
/// `midpoints` are the vertical midpoints of the candidate siblings in
/// display order (the dragged item excluded). Returns the index of the
/// candidate whose midpoint lies below the pointer with the smallest
/// offset, or `None` when no candidate qualifies (append at the end).
#[must_use]
pub fn insertion_index(pointer_y: f64, midpoints: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, midpoint) in midpoints.iter().enumerate() {
        let offset = midpoint - pointer_y;
        if offset >= 0.0 && best.is_none_or(|(_, best_offset)| offset < best_offset) {
            best = Some((index, offset));
        }
    }
    best.map(|(index, _)| index)
}

//
// ─── Classify Board ────────────────────────────────────────────────────────────
//

/// Where a classify item currently sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Zone {
    #[default]
    Unplaced,
    Correct,
    Incorrect,
}

/// Zone assignment state for a classify-drag task, indexed by item position
/// in the task definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifyBoard {
    zones: Vec<Zone>,
}

impl ClassifyBoard {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            zones: vec![Zone::Unplaced; item_count],
        }
    }

    /// Moves an item into a zone. Out-of-range indices are no-ops.
    pub fn place(&mut self, index: usize, zone: Zone) -> bool {
        match self.zones.get_mut(index) {
            Some(slot) => {
                *slot = zone;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn zone_of(&self, index: usize) -> Zone {
        self.zones.get(index).copied().unwrap_or_default()
    }

    /// Item indices currently in `zone`, in definition order.
    #[must_use]
    pub fn items_in(&self, zone: Zone) -> Vec<usize> {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, at)| **at == zone)
            .map(|(index, _)| index)
            .collect()
    }

    #[must_use]
    pub fn answer(&self) -> TaskAnswer {
        TaskAnswer::Classify {
            correct_zone: self
                .items_in(Zone::Correct)
                .into_iter()
                .collect::<BTreeSet<_>>(),
        }
    }
}

//
// ─── Keyboard Grab ─────────────────────────────────────────────────────────────
//

/// Keyboard-equivalent selection: Space toggles an item's grabbed flag,
/// Enter on a target takes the grabbed item and places it there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrabState<K> {
    grabbed: Option<K>,
}

impl<K: PartialEq + Copy> GrabState<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { grabbed: None }
    }

    /// Toggles the grabbed flag for `item`; grabbing a new item releases
    /// the previous one. Returns whether the item is grabbed afterwards.
    pub fn toggle(&mut self, item: K) -> bool {
        if self.grabbed == Some(item) {
            self.grabbed = None;
            false
        } else {
            self.grabbed = Some(item);
            true
        }
    }

    /// Takes the grabbed item for placement, clearing the flag.
    pub fn take(&mut self) -> Option<K> {
        self.grabbed.take()
    }

    #[must_use]
    pub fn is_grabbed(&self, item: K) -> bool {
        self.grabbed == Some(item)
    }

    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.grabbed
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

//! Answer checking for the five task kinds.
//!
//! `evaluate` is a pure function of the task definition and the UI-captured
//! answer state: no side effects, and an empty or mismatched answer is
//! simply incorrect, never a panic.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::Task;

/// The UI-captured answer state for one task, mirroring the task kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskAnswer {
    /// Selected option value, if any option is selected.
    Choice { selected: Option<String> },
    /// Term id -> id of the explanation slot the term currently sits in.
    Match { placements: BTreeMap<String, String> },
    /// Item labels in current display order.
    Order { sequence: Vec<String> },
    /// One entry per blank, in sentence order.
    Cloze { entries: Vec<String> },
    /// Indices of items currently placed in the correct zone.
    Classify { correct_zone: BTreeSet<usize> },
}

impl TaskAnswer {
    /// The "nothing captured yet" answer for a task, used on first render
    /// and after a retry redraw.
    #[must_use]
    pub fn empty_for(task: &Task) -> Self {
        match task {
            Task::Comprehension { .. } => TaskAnswer::Choice { selected: None },
            Task::Match { .. } => TaskAnswer::Match {
                placements: BTreeMap::new(),
            },
            Task::Order { items, .. } => TaskAnswer::Order {
                sequence: items.iter().map(|item| item.text.clone()).collect(),
            },
            Task::Cloze {
                correct_answers, ..
            } => TaskAnswer::Cloze {
                entries: vec![String::new(); correct_answers.len()],
            },
            Task::ClassifyDrag { .. } => TaskAnswer::Classify {
                correct_zone: BTreeSet::new(),
            },
        }
    }
}

impl Task {
    /// Decides whether the captured answer solves this task.
    #[must_use]
    pub fn evaluate(&self, answer: &TaskAnswer) -> bool {
        match (self, answer) {
            (Task::Comprehension { options, .. }, TaskAnswer::Choice { selected }) => {
                let Some(selected) = selected else {
                    return false;
                };
                options
                    .iter()
                    .find(|option| option.is_correct)
                    .is_some_and(|correct| correct.value == *selected)
            }

            (Task::Match { terms, .. }, TaskAnswer::Match { placements }) => {
                // Full match required: every term in the slot carrying its
                // own id. Partial assignments are incorrect.
                !terms.is_empty()
                    && terms
                        .iter()
                        .all(|term| placements.get(&term.id) == Some(&term.id))
            }

            (Task::Order { correct_order, .. }, TaskAnswer::Order { sequence }) => {
                sequence.len() == correct_order.len()
                    && sequence
                        .iter()
                        .zip(correct_order)
                        .all(|(got, want)| *got == want.text)
            }

            (
                Task::Cloze {
                    correct_answers, ..
                },
                TaskAnswer::Cloze { entries },
            ) => correct_answers.iter().enumerate().all(|(index, want)| {
                entries
                    .get(index)
                    .is_some_and(|got| got.trim().to_lowercase() == want.to_lowercase())
            }),

            (Task::ClassifyDrag { items, .. }, TaskAnswer::Classify { correct_zone }) => {
                // Exactly the correct set in the correct zone; the other
                // zone's contents are deliberately not inspected.
                let expected = items.iter().filter(|item| item.is_correct).count();
                correct_zone.len() == expected
                    && correct_zone
                        .iter()
                        .all(|&index| items.get(index).is_some_and(|item| item.is_correct))
            }

            // An answer captured for a different task kind can never be right.
            _ => false,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

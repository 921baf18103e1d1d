use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::TopicId;

/// Per-topic score/attempt state.
///
/// `scores` and `attempts` are indexed by task position and always have the
/// same length as the topic's quiz. `completed` is monotonic: once a topic
/// has been fully solved the flag stays set, even if stored scores are later
/// edited downward by hand.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub scores: Vec<u32>,
    pub attempts: Vec<u32>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl AttemptRecord {
    /// A zeroed record sized for a quiz with `task_count` tasks.
    #[must_use]
    pub fn for_task_count(task_count: usize) -> Self {
        Self {
            scores: vec![0; task_count],
            attempts: vec![0; task_count],
            completed: false,
            completed_at: None,
        }
    }

    /// Resizes both sequences to `task_count`, preserving the prefix.
    ///
    /// Content can gain or lose tasks between sessions; stored records are
    /// brought back in line with the invariant on load.
    pub fn resize_for(&mut self, task_count: usize) {
        self.scores.resize(task_count, 0);
        self.attempts.resize(task_count, 0);
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn score(&self, index: usize) -> u32 {
        self.scores.get(index).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn attempts(&self, index: usize) -> u32 {
        self.attempts.get(index).copied().unwrap_or(0)
    }

    /// Marks the task solved: score 1, attempt counter back to zero.
    pub fn record_success(&mut self, index: usize) {
        if let Some(score) = self.scores.get_mut(index) {
            *score = 1;
        }
        if let Some(attempts) = self.attempts.get_mut(index) {
            *attempts = 0;
        }
    }

    /// Counts a failed check against the task.
    pub fn record_failure(&mut self, index: usize) {
        if let Some(attempts) = self.attempts.get_mut(index) {
            *attempts += 1;
        }
    }

    /// User-invoked retry: clears only this task's failure counter.
    pub fn reset_attempts(&mut self, index: usize) {
        if let Some(attempts) = self.attempts.get_mut(index) {
            *attempts = 0;
        }
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// True iff every task has been answered correctly at least once.
    #[must_use]
    pub fn all_solved(&self) -> bool {
        !self.scores.is_empty() && self.total_score() as usize == self.scores.len()
    }

    /// Re-derives the completion flag after a check.
    ///
    /// Sets `completed` (and stamps `completed_at`) the instant every score
    /// is in; never clears either field.
    pub fn refresh_completion(&mut self, now: DateTime<Utc>) {
        if !self.completed && self.all_solved() {
            self.completed = true;
            self.completed_at = Some(now);
        }
    }
}

/// All persisted progress, keyed by topic id.
///
/// Serialized as a single JSON object under the `userProgress` key; each
/// save replaces the whole blob.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProgress {
    topics: BTreeMap<String, AttemptRecord>,
}

impl UserProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, topic_id: &TopicId) -> Option<&AttemptRecord> {
        self.topics.get(topic_id.as_str())
    }

    /// Replaces the record for one topic, leaving the rest untouched.
    pub fn insert(&mut self, topic_id: &TopicId, record: AttemptRecord) {
        self.topics.insert(topic_id.as_str().to_string(), record);
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.topics.values().filter(|record| record.completed).count()
    }

    #[must_use]
    pub fn is_completed(&self, topic_id: &TopicId) -> bool {
        self.get(topic_id).is_some_and(|record| record.completed)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn success_sets_score_and_clears_attempts() {
        let mut record = AttemptRecord::for_task_count(2);
        record.record_failure(0);
        record.record_failure(0);
        assert_eq!(record.attempts(0), 2);

        record.record_success(0);
        assert_eq!(record.score(0), 1);
        assert_eq!(record.attempts(0), 0);
    }

    #[test]
    fn out_of_range_indexes_are_ignored() {
        let mut record = AttemptRecord::for_task_count(1);
        record.record_success(5);
        record.record_failure(5);
        assert_eq!(record.total_score(), 0);
    }

    #[test]
    fn completion_flips_exactly_when_all_scores_in() {
        let mut record = AttemptRecord::for_task_count(2);
        record.record_success(0);
        record.refresh_completion(fixed_now());
        assert!(!record.completed);

        record.record_success(1);
        record.refresh_completion(fixed_now());
        assert!(record.completed);
        assert_eq!(record.completed_at, Some(fixed_now()));
    }

    #[test]
    fn completion_is_monotonic() {
        let mut record = AttemptRecord::for_task_count(1);
        record.record_success(0);
        record.refresh_completion(fixed_now());
        assert!(record.completed);

        // Hand-edited storage can lower a score; the flag must not revert.
        record.scores[0] = 0;
        record.refresh_completion(fixed_now());
        assert!(record.completed);
    }

    #[test]
    fn empty_record_is_not_complete() {
        let record = AttemptRecord::for_task_count(0);
        assert!(!record.all_solved());
    }

    #[test]
    fn resize_preserves_prefix() {
        let mut record = AttemptRecord::for_task_count(1);
        record.record_success(0);
        record.resize_for(3);
        assert_eq!(record.scores, vec![1, 0, 0]);
        record.resize_for(1);
        assert_eq!(record.scores, vec![1]);
    }

    #[test]
    fn serialization_round_trip() {
        let mut record = AttemptRecord::for_task_count(3);
        record.record_success(0);
        record.record_failure(1);
        record.record_failure(1);

        let mut progress = UserProgress::new();
        progress.insert(&TopicId::new("2"), record.clone());

        let encoded = serde_json::to_string(&progress).unwrap();
        let decoded: UserProgress = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.get(&TopicId::new("2")), Some(&record));
    }

    #[test]
    fn legacy_blob_without_completed_fields_parses() {
        let decoded: UserProgress =
            serde_json::from_str(r#"{"1": {"scores": [1], "attempts": [0]}}"#).unwrap();
        let record = decoded.get(&TopicId::new("1")).unwrap();
        assert!(!record.completed);
        assert_eq!(record.completed_at, None);
    }

    #[test]
    fn completed_count_only_counts_flagged_topics() {
        let mut progress = UserProgress::new();
        let mut done = AttemptRecord::for_task_count(1);
        done.record_success(0);
        done.refresh_completion(fixed_now());
        progress.insert(&TopicId::new("1"), done);
        progress.insert(&TopicId::new("2"), AttemptRecord::for_task_count(1));
        assert_eq!(progress.completed_count(), 1);
    }
}

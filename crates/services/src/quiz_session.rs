//! The working copy of one topic's quiz state.
//!
//! A session is created when a topic view opens, seeded from the stored
//! attempt record, and mutated on every check/retry. The caller persists
//! the record back through `ProgressService` after each mutation.

use tema_core::model::{AttemptRecord, Task, TopicId};
use tema_core::{Clock, CheckOutcome, TaskAnswer, TaskControls, TaskFlow};

/// What one check produced, for the UI to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub correct: bool,
    pub controls: TaskControls,
    /// Whether the topic is (now or already) complete.
    pub topic_completed: bool,
}

/// Attempt state for every task of one topic's quiz.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    topic_id: TopicId,
    clock: Clock,
    record: AttemptRecord,
    flows: Vec<TaskFlow>,
}

impl QuizSession {
    /// Builds a session over `task_count` tasks, resuming from a stored
    /// record when one exists.
    #[must_use]
    pub fn new(
        topic_id: TopicId,
        task_count: usize,
        existing: Option<AttemptRecord>,
        clock: Clock,
    ) -> Self {
        let mut record = existing.unwrap_or_else(|| AttemptRecord::for_task_count(task_count));
        record.resize_for(task_count);
        let flows = (0..task_count)
            .map(|index| TaskFlow::from_parts(record.score(index), record.attempts(index)))
            .collect();
        Self {
            topic_id,
            clock,
            record,
            flows,
        }
    }

    #[must_use]
    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.flows.len()
    }

    #[must_use]
    pub fn record(&self) -> &AttemptRecord {
        &self.record
    }

    #[must_use]
    pub fn controls(&self, index: usize) -> TaskControls {
        self.flows
            .get(index)
            .map(TaskFlow::controls)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_solved(&self, index: usize) -> bool {
        self.flows.get(index).is_some_and(TaskFlow::is_solved)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.record.completed
    }

    /// Quiz progress as a 0–100 percentage for the topic progress bar.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let count = self.task_count();
        if count == 0 {
            return 0.0;
        }
        f64::from(self.record.total_score()) / count as f64 * 100.0
    }

    /// Evaluates the captured answer and advances this task's flow state.
    ///
    /// On success the task's score is set and its attempt counter cleared;
    /// on failure the counter increments. Topic completion is re-derived
    /// after every check and stays set once reached.
    pub fn check(&mut self, index: usize, task: &Task, answer: &TaskAnswer) -> CheckReport {
        let correct = task.evaluate(answer);
        let Some(flow) = self.flows.get(index).copied() else {
            return CheckReport {
                correct: false,
                controls: TaskControls::default(),
                topic_completed: self.record.completed,
            };
        };

        let mut flow = flow;
        match flow.check(correct) {
            CheckOutcome::Correct => self.record.record_success(index),
            CheckOutcome::Incorrect { .. } => self.record.record_failure(index),
        }
        self.flows[index] = flow;
        self.record.refresh_completion(self.clock.now());

        CheckReport {
            correct,
            controls: flow.controls(),
            topic_completed: self.record.completed,
        }
    }

    /// User-invoked retry: clears only this task's failure counter. The UI
    /// redraws the task's interactive surface alongside.
    pub fn retry(&mut self, index: usize) {
        if let Some(flow) = self.flows.get_mut(index) {
            flow.retry();
        }
        self.record.reset_attempts(index);
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

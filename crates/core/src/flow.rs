//! Per-task attempt/retry/reveal progression.
//!
//! A task moves from unanswered through failed checks toward either a solve
//! or a retry offer. Retry and solution reveal unlock together after the
//! second consecutive failed attempt, and all controls disappear for good
//! once the task is solved.

/// Failed attempts required before retry/solution controls appear.
pub const RETRY_THRESHOLD: u32 = 2;

/// Which of the three task buttons are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskControls {
    pub check: bool,
    pub retry: bool,
    pub solution: bool,
}

/// Result of a single check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct,
    Incorrect { attempts: u32 },
}

/// Attempt-tracking state for one task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskFlow {
    attempts: u32,
    solved: bool,
}

impl TaskFlow {
    /// Rebuilds flow state from a stored (score, attempts) pair.
    #[must_use]
    pub fn from_parts(score: u32, attempts: u32) -> Self {
        Self {
            attempts,
            solved: score > 0,
        }
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        u32::from(self.solved)
    }

    /// Applies one check result.
    ///
    /// Success solves the task and resets the failure counter; failure
    /// increments it. Checks after a solve are ignored (the UI hides the
    /// button, but stored state must not regress either way).
    pub fn check(&mut self, correct: bool) -> CheckOutcome {
        if self.solved {
            return CheckOutcome::Correct;
        }
        if correct {
            self.solved = true;
            self.attempts = 0;
            CheckOutcome::Correct
        } else {
            self.attempts += 1;
            CheckOutcome::Incorrect {
                attempts: self.attempts,
            }
        }
    }

    /// User-invoked retry: clears only the failure counter.
    pub fn retry(&mut self) {
        self.attempts = 0;
    }

    #[must_use]
    pub fn controls(&self) -> TaskControls {
        if self.solved {
            return TaskControls::default();
        }
        let offered = self.attempts >= RETRY_THRESHOLD;
        TaskControls {
            check: true,
            retry: offered,
            solution: offered,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_task_shows_only_check() {
        let flow = TaskFlow::default();
        assert_eq!(
            flow.controls(),
            TaskControls {
                check: true,
                retry: false,
                solution: false,
            }
        );
    }

    #[test]
    fn retry_unlocks_after_second_failure() {
        let mut flow = TaskFlow::default();
        flow.check(false);
        assert!(!flow.controls().retry);

        let outcome = flow.check(false);
        assert_eq!(outcome, CheckOutcome::Incorrect { attempts: 2 });
        let controls = flow.controls();
        assert!(controls.retry);
        assert!(controls.solution);
        assert!(controls.check);
    }

    #[test]
    fn solve_hides_all_controls_permanently() {
        let mut flow = TaskFlow::default();
        flow.check(false);
        flow.check(false);
        assert!(flow.controls().retry);

        assert_eq!(flow.check(true), CheckOutcome::Correct);
        assert!(flow.is_solved());
        assert_eq!(flow.attempts(), 0);
        assert_eq!(flow.controls(), TaskControls::default());

        // Even a stray later check cannot regress a solved task.
        assert_eq!(flow.check(false), CheckOutcome::Correct);
        assert!(flow.is_solved());
    }

    #[test]
    fn retry_resets_only_the_counter() {
        let mut flow = TaskFlow::default();
        flow.check(false);
        flow.check(false);
        flow.retry();
        assert_eq!(flow.attempts(), 0);
        assert!(!flow.is_solved());
        assert!(!flow.controls().retry);
    }

    #[test]
    fn rebuild_from_stored_parts() {
        let solved = TaskFlow::from_parts(1, 0);
        assert!(solved.is_solved());
        assert_eq!(solved.controls(), TaskControls::default());

        let offered = TaskFlow::from_parts(0, 3);
        assert!(offered.controls().retry);
    }
}

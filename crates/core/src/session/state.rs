use chrono::{DateTime, Utc};

use crate::model::QuestionRecord;

/// Coarse lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Complete,
}

/// Sub-state of `InProgress`, derived from the answer lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPhase {
    Pending,
    Revealed,
}

/// Mutable state of one quiz attempt.
///
/// Owned exclusively by `SessionController`; a fresh value is built on every start
/// and dropped on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    question_order: Vec<QuestionRecord>,
    current_index: usize,
    score: usize,
    selected_answer: Option<String>,
    locked: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionState {
    pub(crate) fn new(question_order: Vec<QuestionRecord>, started_at: DateTime<Utc>) -> Self {
        let state = Self {
            question_order,
            current_index: 0,
            score: 0,
            selected_answer: None,
            locked: false,
            started_at,
            completed_at: None,
        };
        state.check_invariants();
        state
    }

    #[must_use]
    pub fn question_order(&self) -> &[QuestionRecord] {
        &self.question_order
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.question_order.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_index == self.question_order.len()
    }

    #[must_use]
    pub fn answer_phase(&self) -> AnswerPhase {
        if self.locked {
            AnswerPhase::Revealed
        } else {
            AnswerPhase::Pending
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.question_order.get(self.current_index)
    }

    /// Records the answer for the current question and returns whether it was correct.
    pub(crate) fn record_answer(&mut self, option: &str) -> bool {
        let correct = self
            .current_question()
            .is_some_and(|question| question.is_correct(option));
        self.selected_answer = Some(option.to_owned());
        self.locked = true;
        if correct {
            self.score += 1;
        }
        self.check_invariants();
        correct
    }

    /// Reveals the current question without a selection; nothing is scored.
    pub(crate) fn record_pass(&mut self) {
        self.selected_answer = None;
        self.locked = true;
        self.check_invariants();
    }

    /// Moves past the current (answered) question.
    pub(crate) fn step(&mut self, now: DateTime<Utc>) {
        self.current_index += 1;
        self.selected_answer = None;
        self.locked = false;
        if self.is_complete() {
            self.completed_at = Some(now);
        }
        self.check_invariants();
    }

    /// Number of questions answered so far, counting a locked current question.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.current_index + usize::from(self.locked)
    }

    /// `score <= answered` and `current_index <= len`. While the lock is released,
    /// `answered == current_index`.
    ///
    /// # Panics
    ///
    /// Panics when the state has been corrupted; that is always a controller bug.
    fn check_invariants(&self) {
        let answered = self.answered();
        assert!(
            self.current_index <= self.question_order.len(),
            "current_index {} exceeds question count {}",
            self.current_index,
            self.question_order.len()
        );
        assert!(
            self.score <= answered,
            "score {} exceeds answered count {answered}",
            self.score
        );
        assert!(
            self.locked || self.selected_answer.is_none(),
            "selection recorded without a lock"
        );
        assert!(
            !(self.locked && self.is_complete()),
            "locked after the last question"
        );
    }
}

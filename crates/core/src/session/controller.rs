use std::fmt;

use chrono::TimeDelta;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{SessionError, Transition};
use crate::model::QuestionRecord;
use crate::shuffle::shuffle_in_place;
use crate::time::Clock;

use super::progress::SessionProgress;
use super::render::RenderInstruction;
use super::state::{SessionPhase, SessionState};
use super::summary::ScoreSummary;

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Quiz session state machine.
///
/// Holds at most one `SessionState`. Transitions never perform I/O; each one that
/// changes what the user sees returns a `RenderInstruction`.
///
/// Ignored transitions (selecting twice, advancing before answering, anything after
/// completion) return `Ok(None)` and leave the state untouched. Transitions that only
/// make sense inside a session fail with `SessionError::InvalidTransition` when no
/// session has been started.
pub struct SessionController {
    clock: Clock,
    rng: StdRng,
    state: Option<SessionState>,
}

impl SessionController {
    /// Create a controller whose shuffles are seeded from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a controller with a reproducible shuffle sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            clock: Clock::system(),
            rng,
            state: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            None => SessionPhase::NotStarted,
            Some(state) if state.is_complete() => SessionPhase::Complete,
            Some(_) => SessionPhase::InProgress,
        }
    }

    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Start a fresh session over a shuffled copy of `questions`.
    ///
    /// Any existing session is discarded first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuestionSet` if `questions` is empty; the
    /// controller is left as it was.
    pub fn start(&mut self, questions: &[QuestionRecord]) -> Result<RenderInstruction, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }

        let mut order = questions.to_vec();
        shuffle_in_place(&mut order, &mut self.rng);

        let state = self.state.insert(SessionState::new(order, self.clock.now()));
        Ok(Self::question_instruction(state))
    }

    /// Record `option` as the answer to the current question.
    ///
    /// At most one answer is scored per question: once locked, further selections
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` if no session has been started.
    pub fn select_option(&mut self, option: &str) -> Result<Option<RenderInstruction>, SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::InvalidTransition {
            transition: Transition::SelectOption,
        })?;
        if state.is_locked() || state.is_complete() {
            return Ok(None);
        }

        state.record_answer(option);
        let instruction = state
            .current_question()
            .map(|question| RenderInstruction::answer_feedback(question, option));
        Ok(instruction)
    }

    /// Reveal the current answer without selecting anything; the question scores
    /// nothing. This is how a question without options is moved past.
    ///
    /// Ignored, like `select_option`, once the question is locked or the session is
    /// complete.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` if no session has been started.
    pub fn pass(&mut self) -> Result<Option<RenderInstruction>, SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::InvalidTransition {
            transition: Transition::Pass,
        })?;
        if state.is_locked() || state.is_complete() {
            return Ok(None);
        }

        state.record_pass();
        Ok(state.current_question().map(RenderInstruction::passed))
    }

    /// Move to the next question, or to the results once the last one is answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` if no session has been started.
    pub fn advance(&mut self) -> Result<Option<RenderInstruction>, SessionError> {
        let now = self.clock.now();
        let state = self.state.as_mut().ok_or(SessionError::InvalidTransition {
            transition: Transition::Advance,
        })?;
        if !state.is_locked() {
            return Ok(None);
        }

        state.step(now);
        if state.is_complete() {
            let summary = ScoreSummary::new(state.score(), state.total());
            return Ok(Some(RenderInstruction::results(&summary)));
        }
        Ok(Some(Self::question_instruction(state)))
    }

    /// Discard the session, returning to `NotStarted`.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// The question awaiting (or showing) an answer; `None` unless in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.state.as_ref().and_then(SessionState::current_question)
    }

    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.state.as_ref().map(Self::progress_of)
    }

    /// `"Question {position} / {total}"`; `None` before a session starts.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        self.progress().map(|progress| progress.label())
    }

    /// Score so far; complete once the phase is `Complete`.
    #[must_use]
    pub fn final_score_summary(&self) -> Option<ScoreSummary> {
        self.state
            .as_ref()
            .map(|state| ScoreSummary::new(state.score(), state.total()))
    }

    /// Time spent in the session: frozen at completion, running otherwise.
    #[must_use]
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.state.as_ref().map(|state| match state.completed_at() {
            Some(done) => done - state.started_at(),
            None => self.clock.elapsed_since(state.started_at()),
        })
    }

    fn progress_of(state: &SessionState) -> SessionProgress {
        let total = state.total();
        let position = (state.current_index() + 1).min(total);
        SessionProgress {
            position,
            total,
            answered: state.answered(),
            remaining: total - state.current_index(),
            is_complete: state.is_complete(),
        }
    }

    fn question_instruction(state: &SessionState) -> RenderInstruction {
        let label = Self::progress_of(state).label();
        match state.current_question() {
            Some(question) => RenderInstruction::question(question, label),
            None => {
                RenderInstruction::results(&ScoreSummary::new(state.score(), state.total()))
            }
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("clock", &self.clock)
            .field("phase", &self.phase())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

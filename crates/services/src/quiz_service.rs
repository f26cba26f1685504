use std::fmt;

use loader::{LoadError, QuestionLoader};
use quiz_core::model::QuestionRecord;
use quiz_core::session::{
    RenderInstruction, ScoreSummary, SessionController, SessionPhase, SessionProgress,
};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::status::{LoadStatus, StatusMessage, load_failure_message};

/// Orchestrates loading and the quiz session for one user.
///
/// The loaded question set is cached: later starts reuse it and reshuffle, and only
/// an empty cache (first start, or every attempt so far failed) triggers a load.
pub struct QuizService {
    loader: QuestionLoader,
    controller: SessionController,
    questions: Vec<QuestionRecord>,
    status: LoadStatus,
}

impl QuizService {
    #[must_use]
    pub fn new(loader: QuestionLoader, controller: SessionController) -> Self {
        Self {
            loader,
            controller,
            questions: Vec::new(),
            status: LoadStatus::Idle,
        }
    }

    /// Build the service from configuration.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` if the configured source location is invalid.
    pub fn from_config(config: &QuizConfig) -> Result<Self, QuizError> {
        let loader = QuestionLoader::from_location(&config.source)?;
        let controller = match config.seed {
            Some(seed) => SessionController::with_seed(seed),
            None => SessionController::new(),
        };
        Ok(Self::new(loader, controller))
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn status_message(&self) -> Option<StatusMessage> {
        self.status.message()
    }

    /// Cached question set in source order.
    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.controller.current_question()
    }

    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.controller.progress()
    }

    #[must_use]
    pub fn final_score_summary(&self) -> Option<ScoreSummary> {
        self.controller.final_score_summary()
    }

    /// Load the question set ahead of the first start.
    ///
    /// On failure the status carries the message and any previously cached set is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns the `LoadError` of this attempt.
    pub async fn preload(&mut self) -> Result<usize, LoadError> {
        self.status = LoadStatus::Loading;
        match self.loader.load().await {
            Ok(questions) => {
                let count = questions.len();
                self.questions = questions;
                self.status = LoadStatus::Ready { count };
                Ok(count)
            }
            Err(err) => {
                self.status = LoadStatus::Failed {
                    message: load_failure_message(&err),
                };
                Err(err)
            }
        }
    }

    /// Start a new session, loading first if nothing is cached.
    ///
    /// A load failure comes back as `ShowError` and the session stays `NotStarted`;
    /// calling `start` again retries the load.
    pub async fn start(&mut self) -> RenderInstruction {
        match self.try_start().await {
            Ok(instruction) => instruction,
            Err(QuizError::Load(err)) => RenderInstruction::error(load_failure_message(&err)),
            Err(err) => {
                tracing::error!(error = %err, "could not start quiz session");
                RenderInstruction::error(err.to_string())
            }
        }
    }

    /// Fallible form of [`QuizService::start`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` when loading fails and `QuizError::Session` if the
    /// controller refuses to start.
    pub async fn try_start(&mut self) -> Result<RenderInstruction, QuizError> {
        if self.questions.is_empty() {
            self.preload().await?;
        }

        let instruction = self.controller.start(&self.questions)?;
        tracing::info!(
            questions = self.questions.len(),
            source = %self.loader.describe(),
            "quiz session started"
        );
        Ok(instruction)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` if no session has been started.
    pub fn select_option(&mut self, option: &str) -> Result<Option<RenderInstruction>, QuizError> {
        let instruction = self.controller.select_option(option)?;
        if instruction.is_none() {
            tracing::debug!(option, "selection ignored");
        }
        Ok(instruction)
    }

    /// Reveal the current answer without scoring it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if no session has been started.
    pub fn pass(&mut self) -> Result<Option<RenderInstruction>, QuizError> {
        let instruction = self.controller.pass()?;
        if instruction.is_some() {
            tracing::debug!("question passed without an answer");
        }
        Ok(instruction)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` if no session has been started.
    pub fn advance(&mut self) -> Result<Option<RenderInstruction>, QuizError> {
        let instruction = self.controller.advance()?;
        if matches!(instruction, Some(RenderInstruction::ShowResults { .. })) {
            self.log_completion();
        }
        Ok(instruction)
    }

    /// Drop the session and clear any status line; the cached questions stay.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.status = if self.questions.is_empty() {
            LoadStatus::Idle
        } else {
            LoadStatus::Ready {
                count: self.questions.len(),
            }
        };
    }

    fn log_completion(&self) {
        let Some(state) = self.controller.state() else {
            return;
        };
        let summary = ScoreSummary::new(state.score(), state.total());
        let elapsed_secs = self.controller.elapsed().map(|spent| spent.num_seconds());
        tracing::info!(
            score = summary.score,
            total = summary.total,
            percentage = summary.percentage,
            tier = summary.tier.as_str(),
            elapsed_secs,
            "quiz session complete"
        );
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("loader", &self.loader)
            .field("questions_len", &self.questions.len())
            .field("status", &self.status)
            .field("phase", &self.controller.phase())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

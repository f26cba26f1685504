mod controller;
mod progress;
mod render;
mod state;
mod summary;

// Public API of the session subsystem.
pub use crate::error::{SessionError, Transition};
pub use controller::SessionController;
pub use progress::SessionProgress;
pub use render::{
    CORRECT_FEEDBACK, OptionFeedback, OptionState, RenderInstruction, incorrect_feedback,
};
pub use state::{AnswerPhase, SessionPhase, SessionState};
pub use summary::{ScoreSummary, Tier};

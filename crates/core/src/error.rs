use std::fmt;

use thiserror::Error;

/// Transition names used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start,
    SelectOption,
    Pass,
    Advance,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::Start => "start",
            Transition::SelectOption => "select_option",
            Transition::Pass => "pass",
            Transition::Advance => "advance",
        };
        f.write_str(name)
    }
}

/// Errors emitted by the session controller.
///
/// Both variants are caller faults; neither is meant for the end user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot start a session without questions")]
    EmptyQuestionSet,

    #[error("`{transition}` is not valid before a session has started")]
    InvalidTransition { transition: Transition },
}

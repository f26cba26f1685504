use quiz_core::session::SessionPhase;

/// Which screen the terminal is showing. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Quiz,
    Results,
}

impl From<SessionPhase> for Screen {
    fn from(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::NotStarted => Screen::Start,
            SessionPhase::InProgress => Screen::Quiz,
            SessionPhase::Complete => Screen::Results,
        }
    }
}

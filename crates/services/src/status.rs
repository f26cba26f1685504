/// Outcome of the most recent load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready {
        count: usize,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Status line shown on the start screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl LoadStatus {
    /// The line to show for this status, if any. Idle and ready show nothing.
    #[must_use]
    pub fn message(&self) -> Option<StatusMessage> {
        match self {
            LoadStatus::Idle | LoadStatus::Ready { .. } => None,
            LoadStatus::Loading => Some(StatusMessage {
                text: "Loading quiz data...".to_string(),
                kind: StatusKind::Info,
            }),
            LoadStatus::Failed { message } => Some(StatusMessage {
                text: message.clone(),
                kind: StatusKind::Error,
            }),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// User-facing text for a failed load.
#[must_use]
pub fn load_failure_message(cause: &impl std::fmt::Display) -> String {
    format!("Error loading quiz data: {cause}. Please try again.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_and_failure_show_a_line() {
        assert!(LoadStatus::Idle.message().is_none());
        assert!(LoadStatus::Ready { count: 3 }.message().is_none());

        let loading = LoadStatus::Loading.message().unwrap();
        assert_eq!(loading.kind, StatusKind::Info);
        assert_eq!(loading.text, "Loading quiz data...");

        let failed = LoadStatus::Failed {
            message: "boom".into(),
        }
        .message()
        .unwrap();
        assert_eq!(failed.kind, StatusKind::Error);
        assert_eq!(failed.text, "boom");
    }

    #[test]
    fn failure_message_wraps_cause() {
        assert_eq!(
            load_failure_message(&"no route"),
            "Error loading quiz data: no route. Please try again."
        );
    }
}

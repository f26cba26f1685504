use quiz_core::session::{OptionState, RenderInstruction};

/// Marker drawn in front of an option once the answer is revealed.
#[must_use]
pub fn option_marker(state: OptionState) -> &'static str {
    match state {
        OptionState::CorrectAnswer => "✔",
        OptionState::UserSelection => "✘",
        OptionState::Dimmed => "·",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackOptionVm {
    pub number: usize,
    pub marker: &'static str,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub message: String,
    pub options: Vec<FeedbackOptionVm>,
}

impl FeedbackVm {
    #[must_use]
    pub fn from_instruction(instruction: &RenderInstruction) -> Option<Self> {
        let RenderInstruction::ShowAnswerFeedback {
            is_correct,
            per_option_state,
            ..
        } = instruction
        else {
            return None;
        };

        let options = per_option_state
            .iter()
            .enumerate()
            .map(|(idx, option)| FeedbackOptionVm {
                number: idx + 1,
                marker: option_marker(option.state),
                text: option.text.clone(),
                state: option.state,
            })
            .collect();

        Some(Self {
            is_correct: *is_correct,
            message: instruction.feedback_message().unwrap_or_default(),
            options,
        })
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![String::new()];
        lines.extend(
            self.options
                .iter()
                .map(|option| format!("  {} {}) {}", option.marker, option.number, option.text)),
        );
        lines.push(String::new());
        lines.push(self.message.clone());
        lines.push("Type n for the next question.".to_string());
        lines
    }
}

use crate::model::QuestionRecord;

use super::summary::{ScoreSummary, Tier};

/// Feedback line shown after a correct selection.
pub const CORRECT_FEEDBACK: &str = "Correct!";

/// Feedback line shown after an incorrect selection.
#[must_use]
pub fn incorrect_feedback(correct_answer: &str) -> String {
    format!("Incorrect. The correct answer was: {correct_answer}")
}

/// How a single option button should look once an answer has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// The option is the correct answer (whether or not it was chosen).
    CorrectAnswer,
    /// The option was chosen and is wrong.
    UserSelection,
    /// Neither correct nor chosen; shown dimmed.
    Dimmed,
}

impl OptionState {
    /// Classifies an option by text. The correct-answer check wins over the selection check.
    #[must_use]
    pub fn classify(option: &str, correct_answer: &str, selected: &str) -> Self {
        if option == correct_answer {
            OptionState::CorrectAnswer
        } else if option == selected {
            OptionState::UserSelection
        } else {
            OptionState::Dimmed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionFeedback {
    pub text: String,
    pub state: OptionState,
}

/// Presentation-agnostic instruction emitted by session transitions.
///
/// This is the whole surface a presentation layer renders against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    ShowQuestion {
        prompt_text: String,
        hint_text: String,
        options: Vec<String>,
        progress_label: String,
    },
    ShowAnswerFeedback {
        is_correct: bool,
        correct_answer_text: String,
        per_option_state: Vec<OptionFeedback>,
    },
    ShowResults {
        score_text: String,
        percentage_text: String,
        tier_message: String,
        tier: Tier,
    },
    ShowError {
        message: String,
    },
}

impl RenderInstruction {
    pub(crate) fn question(question: &QuestionRecord, progress_label: String) -> Self {
        RenderInstruction::ShowQuestion {
            prompt_text: question.prompt().to_owned(),
            hint_text: question.hint().to_owned(),
            options: question.options().to_vec(),
            progress_label,
        }
    }

    pub(crate) fn answer_feedback(question: &QuestionRecord, selected: &str) -> Self {
        let correct = question.correct_option();
        let per_option_state = question
            .options()
            .iter()
            .map(|option| OptionFeedback {
                text: option.clone(),
                state: OptionState::classify(option, correct, selected),
            })
            .collect();

        RenderInstruction::ShowAnswerFeedback {
            is_correct: question.is_correct(selected),
            correct_answer_text: correct.to_owned(),
            per_option_state,
        }
    }

    /// Feedback for a question passed without a selection: only the correct answer is
    /// highlighted.
    pub(crate) fn passed(question: &QuestionRecord) -> Self {
        let correct = question.correct_option();
        let per_option_state = question
            .options()
            .iter()
            .map(|option| OptionFeedback {
                text: option.clone(),
                state: if option == correct {
                    OptionState::CorrectAnswer
                } else {
                    OptionState::Dimmed
                },
            })
            .collect();

        RenderInstruction::ShowAnswerFeedback {
            is_correct: false,
            correct_answer_text: correct.to_owned(),
            per_option_state,
        }
    }

    #[must_use]
    pub fn results(summary: &ScoreSummary) -> Self {
        RenderInstruction::ShowResults {
            score_text: summary.score_text(),
            percentage_text: summary.percentage_text(),
            tier_message: summary.tier.message().to_owned(),
            tier: summary.tier,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        RenderInstruction::ShowError {
            message: message.into(),
        }
    }

    /// Feedback line for `ShowAnswerFeedback`; `None` for other variants.
    #[must_use]
    pub fn feedback_message(&self) -> Option<String> {
        match self {
            RenderInstruction::ShowAnswerFeedback {
                is_correct: true, ..
            } => Some(CORRECT_FEEDBACK.to_owned()),
            RenderInstruction::ShowAnswerFeedback {
                is_correct: false,
                correct_answer_text,
                ..
            } => Some(incorrect_feedback(correct_answer_text)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> QuestionRecord {
        QuestionRecord::new(
            "1",
            "好",
            "hǎo",
            vec!["good".into(), "bad".into(), "big".into()],
            "good",
        )
    }

    #[test]
    fn wrong_selection_classifies_every_option() {
        let instruction = RenderInstruction::answer_feedback(&question(), "bad");
        let RenderInstruction::ShowAnswerFeedback {
            is_correct,
            correct_answer_text,
            per_option_state,
        } = &instruction
        else {
            panic!("expected feedback");
        };

        assert!(!is_correct);
        assert_eq!(correct_answer_text, "good");
        let states: Vec<_> = per_option_state.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![
                OptionState::CorrectAnswer,
                OptionState::UserSelection,
                OptionState::Dimmed
            ]
        );
        assert_eq!(
            instruction.feedback_message().as_deref(),
            Some("Incorrect. The correct answer was: good")
        );
    }

    #[test]
    fn right_selection_has_no_user_selection_state() {
        let instruction = RenderInstruction::answer_feedback(&question(), "good");
        let RenderInstruction::ShowAnswerFeedback {
            per_option_state, ..
        } = &instruction
        else {
            panic!("expected feedback");
        };

        assert!(
            per_option_state
                .iter()
                .all(|o| o.state != OptionState::UserSelection)
        );
        assert_eq!(instruction.feedback_message().as_deref(), Some("Correct!"));
    }

    #[test]
    fn duplicate_option_texts_share_a_state() {
        let question = QuestionRecord::new(
            "2",
            "大",
            "dà",
            vec!["big".into(), "small".into(), "small".into()],
            "big",
        );
        let RenderInstruction::ShowAnswerFeedback {
            per_option_state, ..
        } = RenderInstruction::answer_feedback(&question, "small")
        else {
            panic!("expected feedback");
        };

        assert_eq!(per_option_state[1].state, OptionState::UserSelection);
        assert_eq!(per_option_state[2].state, OptionState::UserSelection);
    }

    #[test]
    fn non_feedback_variants_have_no_message() {
        assert!(RenderInstruction::error("boom").feedback_message().is_none());
    }
}

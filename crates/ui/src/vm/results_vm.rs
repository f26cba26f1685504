use quiz_core::session::{RenderInstruction, Tier};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percentage_label: String,
    pub message: String,
    pub tier: Tier,
}

impl ResultsVm {
    #[must_use]
    pub fn from_instruction(instruction: &RenderInstruction) -> Option<Self> {
        match instruction {
            RenderInstruction::ShowResults {
                score_text,
                percentage_text,
                tier_message,
                tier,
            } => Some(Self {
                score_label: format!("Your score: {score_text}"),
                percentage_label: percentage_text.clone(),
                message: tier_message.clone(),
                tier: *tier,
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            String::new(),
            "Quiz complete!".to_string(),
            self.score_label.clone(),
            self.percentage_label.clone(),
            self.message.clone(),
            String::new(),
            "Type r to play again or q to quit.".to_string(),
        ]
    }
}

use quiz_core::session::RenderInstruction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOptionVm {
    pub number: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub prompt: String,
    pub hint: Option<String>,
    pub options: Vec<QuestionOptionVm>,
}

impl QuestionVm {
    #[must_use]
    pub fn from_instruction(instruction: &RenderInstruction) -> Option<Self> {
        let RenderInstruction::ShowQuestion {
            prompt_text,
            hint_text,
            options,
            progress_label,
        } = instruction
        else {
            return None;
        };

        let hint = if hint_text.is_empty() {
            None
        } else {
            Some(hint_text.clone())
        };
        let options = options
            .iter()
            .enumerate()
            .map(|(idx, text)| QuestionOptionVm {
                number: idx + 1,
                text: text.clone(),
            })
            .collect();

        Some(Self {
            progress_label: progress_label.clone(),
            prompt: prompt_text.clone(),
            hint,
            options,
        })
    }

    /// Option texts in display order, indexable by `number - 1`.
    #[must_use]
    pub fn option_texts(&self) -> Vec<String> {
        self.options.iter().map(|o| o.text.clone()).collect()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![String::new(), self.progress_label.clone(), String::new()];
        lines.push(format!("    {}", self.prompt));
        if let Some(hint) = &self.hint {
            lines.push(format!("    ({hint})"));
        }
        lines.push(String::new());
        if self.options.is_empty() {
            lines.push("  (this question has no options)".to_string());
        }
        lines.extend(
            self.options
                .iter()
                .map(|option| format!("  {}) {}", option.number, option.text)),
        );
        lines
    }
}

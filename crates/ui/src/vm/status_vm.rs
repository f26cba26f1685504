use quiz_core::session::RenderInstruction;
use services::{StatusKind, StatusMessage};

/// A one-line status such as the loading notice or a load failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusVm {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusVm {
    #[must_use]
    pub fn from_status(message: &StatusMessage) -> Self {
        Self {
            text: message.text.clone(),
            kind: message.kind,
        }
    }

    #[must_use]
    pub fn from_instruction(instruction: &RenderInstruction) -> Option<Self> {
        match instruction {
            RenderInstruction::ShowError { message } => Some(Self {
                text: message.clone(),
                kind: StatusKind::Error,
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let tag = match self.kind {
            StatusKind::Info => "info",
            StatusKind::Error => "error",
        };
        vec![format!("[{tag}] {}", self.text)]
    }
}

mod feedback_vm;
mod question_vm;
mod results_vm;
mod status_vm;

pub use feedback_vm::{FeedbackOptionVm, FeedbackVm, option_marker};
pub use question_vm::{QuestionOptionVm, QuestionVm};
pub use results_vm::ResultsVm;
pub use status_vm::StatusVm;

use quiz_core::session::RenderInstruction;

/// Display lines for any render instruction.
#[must_use]
pub fn render_lines(instruction: &RenderInstruction) -> Vec<String> {
    QuestionVm::from_instruction(instruction)
        .map(|vm| vm.lines())
        .or_else(|| FeedbackVm::from_instruction(instruction).map(|vm| vm.lines()))
        .or_else(|| ResultsVm::from_instruction(instruction).map(|vm| vm.lines()))
        .or_else(|| StatusVm::from_instruction(instruction).map(|vm| vm.lines()))
        .unwrap_or_default()
}

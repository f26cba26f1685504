use crate::model::QuestionId;

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// A single multiple-choice question as loaded from the source document.
///
/// Records are immutable once built. Nothing ties `correct_option` to `options`:
/// a record whose correct answer is missing from its own options is accepted and
/// simply scores every selection as incorrect. A record without options can never
/// be answered correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    id: QuestionId,
    prompt: String,
    hint: String,
    options: Vec<String>,
    correct_option: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        hint: impl Into<String>,
        options: Vec<String>,
        correct_option: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            hint: hint.into(),
            options,
            correct_option: correct_option.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Primary display text, e.g. a glyph.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Secondary display text, e.g. a pronunciation aid. May be empty.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    /// Exact, case-sensitive comparison against the correct answer. Always false
    /// when the record has no options.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        !self.options.is_empty() && option == self.correct_option
    }

    /// Returns true if at least one option can be scored as correct.
    #[must_use]
    pub fn has_answerable_option(&self) -> bool {
        self.options.iter().any(|option| self.is_correct(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(correct: &str) -> QuestionRecord {
        QuestionRecord::new(
            "1",
            "你",
            "nǐ",
            vec!["you".to_string(), "me".to_string()],
            correct,
        )
    }

    #[test]
    fn correctness_is_exact_and_case_sensitive() {
        let question = record("you");
        assert!(question.is_correct("you"));
        assert!(!question.is_correct("You"));
        assert!(!question.is_correct(" you"));
    }

    #[test]
    fn mismatched_correct_option_is_representable() {
        let question = record("them");
        assert!(!question.has_answerable_option());
        assert!(question.options().iter().all(|o| !question.is_correct(o)));
    }

    #[test]
    fn zero_options_is_a_degenerate_record() {
        let question = QuestionRecord::new("", "", "", Vec::new(), "");
        assert!(question.options().is_empty());
        assert!(!question.has_answerable_option());
        // An empty selection must not match an empty correct answer.
        assert!(!question.is_correct(""));
        assert!(question.id().is_empty());
    }
}

use std::fmt;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the current question; equals `total` once complete.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SessionProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {} / {}", self.position, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based() {
        let progress = SessionProgress {
            position: 1,
            total: 10,
            answered: 0,
            remaining: 10,
            is_complete: false,
        };
        assert_eq!(progress.label(), "Question 1 / 10");
    }
}

use std::env;

/// Default location of the question document, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "quiz.xml";

pub const SOURCE_ENV: &str = "QUIZ_SOURCE";
pub const SEED_ENV: &str = "QUIZ_SEED";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    /// URL or path of the question document.
    pub source: String,
    /// Fixed shuffle seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Read `QUIZ_SOURCE` and `QUIZ_SEED`, falling back to defaults.
    ///
    /// An unparsable seed is ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let source = lookup(SOURCE_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE.into());
        let seed = lookup(SEED_ENV).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(value = %raw, "ignoring invalid {SEED_ENV}");
                None
            }
        });
        Self { source, seed }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = QuizConfig::from_lookup(lookup(&[]));
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.source, "quiz.xml");
    }

    #[test]
    fn reads_source_and_seed() {
        let config = QuizConfig::from_lookup(lookup(&[
            (SOURCE_ENV, "https://example.com/quiz.xml"),
            (SEED_ENV, " 42 "),
        ]));
        assert_eq!(config.source, "https://example.com/quiz.xml");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn blank_source_and_bad_seed_fall_back() {
        let config = QuizConfig::from_lookup(lookup(&[(SOURCE_ENV, "  "), (SEED_ENV, "nope")]));
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builders_override() {
        let config = QuizConfig::default()
            .with_source("other.xml")
            .with_seed(Some(3));
        assert_eq!(config.source, "other.xml");
        assert_eq!(config.seed, Some(3));
    }
}

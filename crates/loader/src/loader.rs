use std::fmt;
use std::sync::Arc;

use quiz_core::model::QuestionRecord;

use crate::error::LoadError;
use crate::source::{QuestionSource, SourceLocation};
use crate::xml::parse_questions;

/// Fetches a question document and turns it into records.
///
/// Stateless: every `load` re-fetches and re-parses, so retrying after a failure
/// never sees leftovers from the previous attempt.
#[derive(Clone)]
pub struct QuestionLoader {
    source: Arc<dyn QuestionSource>,
}

impl QuestionLoader {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Build a loader for a location string (URL or path).
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidLocation` if `raw` cannot be parsed.
    pub fn from_location(raw: &str) -> Result<Self, LoadError> {
        Ok(Self::new(SourceLocation::parse(raw)?.into_source()))
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Load every question in source order.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` on any transport or parse failure; no partial result is
    /// ever returned.
    pub async fn load(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        let location = self.source.describe();
        tracing::debug!(%location, "fetching question document");

        let document = self.source.fetch().await.inspect_err(|err| {
            tracing::warn!(%location, error = %err, "question source unavailable");
        })?;

        let questions = parse_questions(&document).inspect_err(|err| {
            tracing::warn!(%location, error = %err, "question document rejected");
        })?;

        let unanswerable = questions
            .iter()
            .filter(|question| !question.has_answerable_option())
            .count();
        if unanswerable > 0 {
            tracing::warn!(
                %location,
                unanswerable,
                "some questions have no option matching their correct answer"
            );
        }

        tracing::info!(%location, count = questions.len(), "loaded questions");
        Ok(questions)
    }
}

impl fmt::Debug for QuestionLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionLoader")
            .field("source", &self.source.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    fn loader(document: &str) -> QuestionLoader {
        QuestionLoader::new(Arc::new(StaticSource::new(document)))
    }

    #[tokio::test]
    async fn loads_in_source_order() {
        let xml = r#"<quiz>
            <question id="b"><prompt>B</prompt><correct>1</correct><options><option>1</option></options></question>
            <question id="a"><prompt>A</prompt><correct>2</correct><options><option>2</option></options></question>
        </quiz>"#;
        let questions = loader(xml).load().await.unwrap();
        let ids: Vec<_> = questions.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn parse_failure_returns_no_records() {
        let err = loader("<quiz><question>").load().await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn empty_document_is_an_error() {
        let err = loader("<quiz></quiz>").load().await.unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions));
    }

    #[test]
    fn from_location_rejects_bad_scheme() {
        let err = QuestionLoader::from_location("gopher://example.com/q").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }
}

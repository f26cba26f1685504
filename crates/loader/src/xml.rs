//! Question document format.
//!
//! ```xml
//! <quiz>
//!   <question id="1">
//!     <prompt>你</prompt>
//!     <hint>nǐ</hint>
//!     <correct>you</correct>
//!     <options>
//!       <option>you</option>
//!       <option>me</option>
//!     </options>
//!   </question>
//! </quiz>
//! ```
//!
//! `hanzi` and `pinyin` are accepted as aliases of `prompt` and `hint`.

use quiz_core::model::QuestionRecord;
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::LoadError;

const QUESTION: &str = "question";
const PROMPT: &[&str] = &["prompt", "hanzi"];
const HINT: &[&str] = &["hint", "pinyin"];
const CORRECT: &[&str] = &["correct"];
const OPTIONS: &str = "options";
const OPTION: &str = "option";

/// Parse every `question` element of `xml` into records, in document order.
///
/// Missing scalar fields become empty strings and a missing `options` list becomes
/// an empty option set. Text is taken verbatim (no trimming).
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the document is not well-formed XML and
/// `LoadError::NoQuestions` if it holds no `question` elements.
pub fn parse_questions(xml: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let doc = Document::parse_with_options(xml, parsing_options())?;

    let questions: Vec<_> = doc
        .descendants()
        .filter(|node| node.has_tag_name(QUESTION))
        .map(parse_question)
        .collect();

    if questions.is_empty() {
        return Err(LoadError::NoQuestions);
    }
    Ok(questions)
}

/// A `<!DOCTYPE>` declaration is accepted; entities it declares are expanded.
fn parsing_options() -> ParsingOptions {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    options
}

fn parse_question(node: Node<'_, '_>) -> QuestionRecord {
    let id = node.attribute("id").unwrap_or_default();
    let prompt = first_text(node, PROMPT);
    let hint = first_text(node, HINT);
    let correct = first_text(node, CORRECT);
    let options = node
        .descendants()
        .filter(|candidate| candidate.has_tag_name(OPTION) && is_listed_option(node, *candidate))
        .map(text_content)
        .collect();

    QuestionRecord::new(id, prompt, hint, options, correct)
}

/// Text of the first descendant element (document order) carrying any of `names`.
fn first_text(node: Node<'_, '_>, names: &[&str]) -> String {
    node.descendants()
        .skip(1)
        .find(|candidate| names.iter().any(|name| candidate.has_tag_name(*name)))
        .map(text_content)
        .unwrap_or_default()
}

/// An `option` counts only when it sits inside an `options` element of this question.
fn is_listed_option(question: Node<'_, '_>, option: Node<'_, '_>) -> bool {
    option
        .ancestors()
        .skip(1)
        .take_while(|ancestor| *ancestor != question)
        .any(|ancestor| ancestor.has_tag_name(OPTIONS))
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<quiz>
  <question id="1">
    <hanzi>你</hanzi>
    <pinyin>nǐ</pinyin>
    <correct>you</correct>
    <options>
      <option>you</option>
      <option>me</option>
      <option>he</option>
    </options>
  </question>
  <question id="2">
    <prompt>好</prompt>
    <hint>hǎo</hint>
    <correct>good</correct>
    <options><option>bad</option><option>good</option></options>
  </question>
</quiz>"#;

    #[test]
    fn parses_records_in_source_order() {
        let questions = parse_questions(SAMPLE).unwrap();
        assert_eq!(questions.len(), 2);

        let first = &questions[0];
        assert_eq!(first.id().as_str(), "1");
        assert_eq!(first.prompt(), "你");
        assert_eq!(first.hint(), "nǐ");
        assert_eq!(first.correct_option(), "you");
        assert_eq!(first.options(), ["you", "me", "he"]);

        let second = &questions[1];
        assert_eq!(second.prompt(), "好");
        assert_eq!(second.hint(), "hǎo");
        assert_eq!(second.options(), ["bad", "good"]);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let xml = "<quiz><question><correct>x</correct></question></quiz>";
        let questions = parse_questions(xml).unwrap();
        let q = &questions[0];
        assert!(q.id().is_empty());
        assert_eq!(q.prompt(), "");
        assert_eq!(q.hint(), "");
        assert!(q.options().is_empty());
        assert_eq!(q.correct_option(), "x");
    }

    #[test]
    fn options_outside_an_options_list_are_ignored() {
        let xml = r#"<quiz><question id="a">
            <option>stray</option>
            <options><option>kept</option></options>
        </question></quiz>"#;
        let questions = parse_questions(xml).unwrap();
        assert_eq!(questions[0].options(), ["kept"]);
    }

    #[test]
    fn text_is_not_trimmed_and_entities_are_decoded() {
        let xml = "<quiz><question id=\"t\"><prompt> A &amp; B </prompt>\
                   <options><option><![CDATA[<x>]]></option></options></question></quiz>";
        let questions = parse_questions(xml).unwrap();
        assert_eq!(questions[0].prompt(), " A & B ");
        assert_eq!(questions[0].options(), ["<x>"]);
    }

    #[test]
    fn malformed_document_fails_the_batch() {
        let xml = "<quiz><question id=\"1\"><prompt>x</prompt></quiz>";
        let err = parse_questions(xml).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn doctype_declaration_is_accepted() {
        let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE quiz>\n\
                   <quiz><question id=\"d\"><prompt>D</prompt><correct>x</correct>\
                   <options><option>x</option></options></question></quiz>";
        let questions = parse_questions(xml).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options(), ["x"]);
    }

    #[test]
    fn empty_document_is_not_success() {
        let err = parse_questions("<quiz/>").unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions));
    }
}

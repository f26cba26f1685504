#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod source;
pub mod xml;

pub use error::LoadError;
pub use loader::QuestionLoader;
pub use source::{FileSource, HttpSource, QuestionSource, SourceLocation, StaticSource};
pub use xml::parse_questions;

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod quiz_service;
pub mod status;

pub use quiz_core::Clock;

pub use config::QuizConfig;
pub use error::QuizError;
pub use quiz_service::QuizService;
pub use status::{LoadStatus, StatusKind, StatusMessage};

//! quizrun-core — Question model, answer evaluation, and scoring.
//!
//! This crate defines the data model, the answer evaluator, score reporting,
//! and the question-file and configuration loaders that the runner and CLI
//! build on.

pub mod config;
pub mod error;
pub mod evaluate;
pub mod model;
pub mod parser;
pub mod report;

pub use error::QuizError;
pub use evaluate::evaluate;
pub use report::report;

//! Multiple-choice question extraction from rendered markup.
//!
//! Downstream consumer of the extraction output: the markup string is sent
//! to a hosted language model with a fixed instruction prompt and a strict
//! JSON schema, and the structured response is parsed into [`Question`]
//! records. The markup core knows nothing about this module; its only
//! contract is "produces a string".

mod client;

pub use client::QuizClient;

use serde::{Deserialize, Serialize};

/// One extracted multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The full question text, original wording preserved.
    pub question: String,

    /// Answer choices in presentation order.
    pub answers: Vec<String>,

    /// Index into `answers` of the correct choice.
    pub correct_answer_index: u32,
}

impl Question {
    /// The correct answer text, if the index is in range.
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers
            .get(self.correct_answer_index as usize)
            .map(String::as_str)
    }
}

/// The structured payload returned by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Extracted questions in document order.
    pub questions: Vec<Question>,
}

//! Chat-completions client for question extraction.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::error::{Error, Result};

use super::{Question, QuestionSet};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const INSTRUCTIONS: &str = "You are an exam analysis assistant. Extract every \
multiple-choice question from the provided text, preserving the full original \
wording, punctuation, and special characters. For each question, list all \
answer choices in their original order and set `correct_answer_index` to the \
index of the correct choice; when the correct answer is not stated explicitly, \
infer the most probable one. Return only JSON matching the requested schema, \
with no extra commentary.";

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Endpoint, model, and credentials are explicit per-client state; there is
/// no process-wide client.
pub struct QuizClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl QuizClient {
    /// Create a client with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to construct HTTP client"),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Extract multiple-choice questions from markup or plain text.
    ///
    /// One request, no retries: transport failures, non-success statuses,
    /// and schema-violating payloads all surface as [`Error::Llm`].
    pub async fn extract_questions(&self, text: &str) -> Result<Vec<Question>> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": INSTRUCTIONS},
                {"role": "user", "content": text},
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "question_set",
                    "strict": true,
                    "schema": question_set_schema(),
                },
            },
        });

        log::debug!("requesting question extraction from {}", self.base_url);
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Llm(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!(
                "chat endpoint returned {}: {}",
                status, detail
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("malformed completion: {}", e)))?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Llm("completion contained no choices".to_string()))?;

        let set: QuestionSet = serde_json::from_str(&content)
            .map_err(|e| Error::Llm(format!("response violated question schema: {}", e)))?;
        Ok(set.questions)
    }
}

/// JSON schema the model is constrained to.
fn question_set_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "questions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "question": {"type": "string"},
                        "answers": {"type": "array", "items": {"type": "string"}},
                        "correct_answer_index": {"type": "integer"},
                    },
                    "required": ["question", "answers", "correct_answer_index"],
                    "additionalProperties": false,
                },
            },
        },
        "required": ["questions"],
        "additionalProperties": false,
    })
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let client = QuizClient::new("key")
            .with_base_url("http://localhost:8080/v1")
            .with_model("test-model");
        assert_eq!(client.base_url, "http://localhost:8080/v1");
        assert_eq!(client.model, "test-model");
    }

    #[test]
    fn test_chat_response_parsing() {
        let payload = r#"{
            "choices": [
                {"message": {"role": "assistant",
                             "content": "{\"questions\": []}"}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(payload).unwrap();
        let set: QuestionSet =
            serde_json::from_str(&response.choices[0].message.content).unwrap();
        assert!(set.questions.is_empty());
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = question_set_schema();
        assert_eq!(schema["required"][0], "questions");
        let item = &schema["properties"]["questions"]["items"];
        assert_eq!(item["required"].as_array().unwrap().len(), 3);
    }
}

use serde::{Deserialize, Serialize};

use super::InferError;

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

#[derive(Debug, Serialize)]
pub struct OpenAIRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [OpenAIMessage<'a>],
}

#[derive(Debug, Serialize)]
pub struct OpenAIMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIResponseMessage {
    pub content: Box<str>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

pub async fn openai_request(
    client: &reqwest::Client,
    messages: &[OpenAIMessage<'_>],
    model: &str,
    infer_url: &str,
    api_key: &str,
) -> Result<Box<str>, InferError> {
    let openai_request = OpenAIRequest { model, messages };

    let response = client
        .post(format!("{}/v1/chat/completions", infer_url.trim_end_matches('/')))
        .bearer_auth(api_key)
        .json(&openai_request)
        .send()
        .await?;

    let status = response.status();
    let response_text = response.text().await?;

    if !status.is_success() {
        tracing::error!("AI gateway error: {} {}", status.as_u16(), response_text);
        return Err(InferError::ErrorStatus {
            status,
            body: response_text.into(),
        });
    }

    parse_completion(&response_text)
}

/// Content of the first choice, untouched.
fn parse_completion(response_text: &str) -> Result<Box<str>, InferError> {
    let response: OpenAIResponse = serde_json::from_str(response_text)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(InferError::NoChoices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_choice_verbatim() {
        let body = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "SELECT c.*\n  FROM customers c;\n" } },
                { "message": { "role": "assistant", "content": "SELECT 1;" } }
            ]
        }"#;

        assert_eq!(
            parse_completion(body).unwrap().as_ref(),
            "SELECT c.*\n  FROM customers c;\n"
        );
    }

    #[test]
    fn empty_choices_is_an_error() {
        assert!(matches!(
            parse_completion(r#"{ "choices": [] }"#),
            Err(InferError::NoChoices)
        ));
    }

    #[test]
    fn unexpected_body_is_a_parse_error() {
        assert!(matches!(
            parse_completion("<html>bad gateway</html>"),
            Err(InferError::ParseFailed(_))
        ));
    }

    #[test]
    fn request_serializes_to_chat_completion_shape() {
        let messages = [
            OpenAIMessage { role: ROLE_SYSTEM, content: "schema" },
            OpenAIMessage { role: ROLE_USER, content: "question" },
        ];
        let request = OpenAIRequest {
            model: "some/model",
            messages: &messages,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "some/model",
                "messages": [
                    { "role": "system", "content": "schema" },
                    { "role": "user", "content": "question" },
                ],
            })
        );
    }
}

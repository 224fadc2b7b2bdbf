pub mod config;
mod error;
mod openai;

pub use error::InferError;
use openai::OpenAIMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn into_role_str(self) -> &'static str {
        match self {
            Self::System => openai::ROLE_SYSTEM,
            Self::User => openai::ROLE_USER,
            Self::Assistant => openai::ROLE_ASSISTANT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub role: MessageRole,
    pub content: Box<str>,
}

impl Message {
    pub fn new_text_system(content: impl Into<Box<str>>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn new_text_user(content: impl Into<Box<str>>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

impl<'a> From<&'a Message> for OpenAIMessage<'a> {
    fn from(message: &'a Message) -> Self {
        OpenAIMessage {
            role: message.role.into_role_str(),
            content: &message.content,
        }
    }
}

/// Chat-completion client for the upstream AI gateway.
///
/// Holds no credential: the key is passed per call so that it can be read
/// from the environment at request time.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    infer_url: Box<str>,
    model: Box<str>,
}

impl Client {
    pub fn new(infer_url: impl Into<Box<str>>, model: impl Into<Box<str>>) -> Self {
        Self {
            http: reqwest::Client::new(),
            infer_url: infer_url.into(),
            model: model.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::INFER_URL.clone(), config::DEFAULT_MODEL.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn infer_url(&self) -> &str {
        &self.infer_url
    }

    /// Sends one completion request and returns the first choice's text.
    pub async fn complete(&self, api_key: &str, messages: &[Message]) -> Result<Box<str>, InferError> {
        let messages: Vec<OpenAIMessage> = messages.iter().map(OpenAIMessage::from).collect();
        openai::openai_request(&self.http, &messages, &self.model, &self.infer_url, api_key).await
    }
}

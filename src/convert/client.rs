use super::dto::ConvertRequest;

/// Failure categories the user gets to see.
///
/// Classified from the relay's HTTP status, never from its error text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("rate limited: {0}")]
    RateLimited(Box<str>),
    #[error("quota exhausted: {0}")]
    QuotaExhausted(Box<str>),
    #[error("{0}")]
    Failed(Box<str>),
}

impl ConvertError {
    pub fn from_status(status: u16, message: impl Into<Box<str>>) -> Self {
        match status {
            429 => Self::RateLimited(message.into()),
            402 => Self::QuotaExhausted(message.into()),
            _ => Self::Failed(message.into()),
        }
    }
}

pub trait ConvertClientTrait {
    async fn convert(&self, request: &ConvertRequest) -> Result<String, ConvertError>;
}

#[cfg(feature = "convert-out")]
pub use http2::HttpConvertClient;

#[cfg(feature = "convert-out")]
mod http2 {
    use super::{ConvertClientTrait, ConvertError, ConvertRequest};
    use crate::convert::dto::ConvertResponse;
    use crate::service::HttpErrorBody;

    impl From<reqwest::Error> for ConvertError {
        fn from(error: reqwest::Error) -> Self {
            match error.status() {
                Some(status) => ConvertError::from_status(status.as_u16(), error.to_string()),
                None => ConvertError::Failed(error.to_string().into()),
            }
        }
    }

    /// Calls the relay over HTTP.
    #[derive(Debug, Clone)]
    pub struct HttpConvertClient {
        http: reqwest::Client,
        base_url: Box<str>,
    }

    impl HttpConvertClient {
        pub fn new(base_url: impl Into<Box<str>>) -> Self {
            Self {
                http: reqwest::Client::new(),
                base_url: base_url.into(),
            }
        }
    }

    impl ConvertClientTrait for HttpConvertClient {
        async fn convert(&self, request: &ConvertRequest) -> Result<String, ConvertError> {
            let url = format!(
                "{}{}",
                self.base_url.trim_end_matches('/'),
                crate::convert::CONVERT_PATH
            );
            let response = self.http.post(url).json(request).send().await?;

            let status = response.status();
            if status.is_success() {
                return Ok(response.json::<ConvertResponse>().await?.sql);
            }

            let message = match response.json::<HttpErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string().into(),
            };
            Err(ConvertError::from_status(status.as_u16(), message))
        }
    }
}

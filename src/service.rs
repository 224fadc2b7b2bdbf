#[cfg(feature = "infer")]
use crate::infer::InferError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,
    #[error("AI credits depleted. Please add credits to continue.")]
    QuotaExhausted,
    #[error("{0} is not configured")]
    MissingCredential(Box<str>),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait CoercibleResult<T> {
    fn into_service_result(self) -> Result<T>;
}

impl<T, E> CoercibleResult<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_service_result(self) -> Result<T> {
        self.map_err(|e| anyhow::Error::from(e).into())
    }
}

#[cfg(feature = "infer")]
impl From<InferError> for Error {
    fn from(error: InferError) -> Self {
        match error.status().map(|status| status.as_u16()) {
            Some(429) => Error::RateLimited,
            Some(402) => Error::QuotaExhausted,
            _ => Error::Internal(error.into()),
        }
    }
}

#[cfg(any(feature = "server-http2", feature = "client-http2"))]
#[cfg_attr(feature = "server-http2", derive(serde::Serialize))]
#[cfg_attr(feature = "client-http2", derive(serde::Deserialize))]
#[derive(Debug)]
pub struct HttpErrorBody {
    pub error: Box<str>,
}

#[cfg(feature = "server-http2")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = match self {
            Error::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Error::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            Error::MissingCredential(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Service error: {:?}", self);
        } else {
            tracing::warn!("Upstream refused the request: {}", self);
        }

        let body = HttpErrorBody {
            error: self.to_string().into(),
        };
        (status, axum::Json(body)).into_response()
    }
}

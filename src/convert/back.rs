use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::back_shared::API_KEY_VAR;
use crate::infer::Client;
use crate::service;

mod handlers;

pub use handlers::build_router;

/// Where the upstream bearer credential comes from.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    /// Looked up in the process environment on every request.
    Env(Box<str>),
    Fixed(Box<str>),
}

impl ApiKeySource {
    pub fn resolve(&self) -> service::Result<Box<str>> {
        match self {
            Self::Env(var) => match std::env::var(var.as_ref()) {
                Ok(key) if !key.trim().is_empty() => Ok(key.into()),
                _ => Err(service::Error::MissingCredential(var.clone())),
            },
            Self::Fixed(key) => Ok(key.clone()),
        }
    }
}

pub struct AppState {
    pub client: Client,
    pub api_key: ApiKeySource,
}

impl AppState {
    pub fn new(client: Client, api_key: ApiKeySource) -> Self {
        Self { client, api_key }
    }

    pub fn from_env() -> Self {
        Self::new(Client::from_env(), ApiKeySource::Env(API_KEY_VAR.into()))
    }
}

pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    tracing::info!(
        "Relaying to {} with model {}",
        state.client.infer_url(),
        state.client.model()
    );
    let router = build_router(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

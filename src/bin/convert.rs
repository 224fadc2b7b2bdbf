use text2sql::config::{self, back_shared::PORT};
use text2sql::convert::back::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();
    config::validate();

    back::serve(AppState::from_env(), *PORT).await
}

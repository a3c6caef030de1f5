use std::sync::Arc;

use agora_server::{AgoraServer, AppState, Identity, ServerConfig, TokenRegistry};
use agora_types::UserId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::var("AGORA_CONFIG") {
        Ok(path) => ServerConfig::from_toml_file(path)?,
        Err(_) => ServerConfig::default(),
    };

    let registry = TokenRegistry::new();
    for entry in &config.tokens {
        registry.register(entry.token.clone(), Identity::new(UserId::new(), entry.name.clone()));
    }
    tracing::info!(tokens = config.tokens.len(), "registered static tokens");

    let state = AppState::in_memory(Arc::new(registry), config.allow_anonymous_read);
    AgoraServer::new(config, state).serve().await?;
    Ok(())
}

//! Serenity backend server.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use serenity_backend::adapters::ai::{
    ChatCompletionsConfig, ChatCompletionsProvider, FallbackDispatcher,
};
use serenity_backend::adapters::http::{app_router, WellnessHandlers};
use serenity_backend::adapters::storage::InMemorySessionStore;
use serenity_backend::application::WellnessAgent;
use serenity_backend::config::{AiConfig, AiProvider, AppConfig, ConfigError, ServerConfig};
use serenity_backend::ports::{AIProvider, SessionStore, TextGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config.server);

    let providers = build_providers(&config.ai);
    let dispatcher = FallbackDispatcher::new(providers).with_timeout(config.ai.timeout());
    if dispatcher.has_provider() {
        tracing::info!(providers = ?dispatcher.available_providers(), "AI fallback order");
    } else {
        tracing::warn!("no AI provider configured, serving fallback responses only");
    }

    let mut agent = WellnessAgent::new(Arc::new(dispatcher))
        .with_limits(config.inference.limits())
        .with_extractor(config.inference.extractor());
    if let Some(seed) = config.inference.rng_seed {
        agent = agent.with_seed(seed);
    }

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let handlers = WellnessHandlers::from_parts(Arc::new(agent), store);
    let app = app_router(handlers, &config.server);

    let addr = config.server.bind_addr().map_err(ConfigError::from)?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        environment = ?config.server.environment,
        "serenity backend listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

/// `RUST_LOG` overrides `server.log_level`. Production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

/// Providers in fallback order, primary first.
fn build_providers(ai: &AiConfig) -> Vec<Arc<dyn AIProvider>> {
    ai.provider_order()
        .into_iter()
        .map(|kind| {
            let config = match kind {
                AiProvider::Groq => ChatCompletionsConfig::groq(ai.groq_api_key.clone())
                    .with_model(&ai.groq_model)
                    .with_base_url(&ai.groq_base_url),
                AiProvider::Qwen => ChatCompletionsConfig::qwen(ai.qwen_api_key.clone())
                    .with_model(&ai.qwen_model)
                    .with_base_url(&ai.qwen_base_url),
            }
            .with_timeout(ai.timeout());

            let provider = ChatCompletionsProvider::new(config);
            let info = provider.provider_info();
            tracing::info!(
                provider = %info.name,
                model = %info.model,
                available = provider.is_available(),
                "AI provider registered"
            );
            Arc::new(provider) as Arc<dyn AIProvider>
        })
        .collect()
}

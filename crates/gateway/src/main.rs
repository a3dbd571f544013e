use std::sync::Arc;

use tracing::info;

use gateway::{router, AppState, GatewayConfig};
use mock_provider::{AllowListSecurity, EchoProvider, InMemoryStore};
use orchestrator::Orchestrator;
use provider_core::Security;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = GatewayConfig::from_env();

    let orchestrator = Arc::new(Orchestrator::new());
    orchestrator
        .register_provider("openai", Arc::new(EchoProvider::named("openai")))
        .await;
    orchestrator
        .register_provider("claude", Arc::new(EchoProvider::named("claude")))
        .await;
    orchestrator.set_memory(Arc::new(InMemoryStore::new())).await;

    let security: Option<Arc<dyn Security>> = config.api_token.as_ref().map(|token| {
        let security =
            AllowListSecurity::default().with_token(token.clone(), config.api_user.clone());
        Arc::new(security) as Arc<dyn Security>
    });
    if let Some(security) = &security {
        orchestrator.set_security(security.clone()).await;
    }

    let app = router(AppState::new(orchestrator, security));

    let addr: std::net::SocketAddr = config.addr.parse().expect("Invalid GATEWAY_ADDR");
    info!(%addr, "Gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Static host for the stunting web front end
///
/// Serves the compiled single-page app with history fallback, the asset
/// directory under `/static`, and the browser's runtime configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use stunting_common::config::{ClientConfig, ServerConfig};
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const CONFIG_ROUTE: &str = "/config.json";
pub const STATIC_ROUTE: &str = "/static";

async fn client_config(State(config): State<Arc<ClientConfig>>) -> Json<ClientConfig> {
    Json(config.as_ref().clone())
}

/// Build the application router
pub fn build_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(CONFIG_ROUTE, get(client_config))
        .with_state(Arc::new(config.client.clone()))
        .nest_service(STATIC_ROUTE, ServeDir::new(&config.site.static_dir));

    // Client-side routes have no file behind them
    let site = ServeDir::new(&config.site.root);
    let router = if config.site.spa_fallback {
        let index = ServeFile::new(config.site.root.join("index.html"));
        router.fallback_service(site.fallback(index))
    } else {
        router.fallback_service(site)
    };

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.server.request_timeout)),
    )
}

/// Bind and serve until `shutdown` resolves
pub async fn serve<F>(config: &ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving {} on http://{}", config.site.root.display(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

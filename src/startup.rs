use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::ImageProvider;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

// axum's default 2MB body cap sits below the upload limit enforced in the
// edit handler.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub provider: Arc<dyn ImageProvider>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(
        config: ServiceConfig,
        provider: Arc<dyn ImageProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            provider,
        };

        let app = Router::new()
            .route("/api/health", get(handlers::health_check))
            .route("/api/create-image", post(handlers::create_image))
            .route("/api/edit-image", post(handlers::edit_image))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http())
            // The API is open to any origin with credentials. tower-http
            // rejects wildcard origins combined with credentials, so mirror
            // the request instead.
            .layer(
                CorsLayer::new()
                    .allow_origin(AllowOrigin::mirror_request())
                    .allow_methods(AllowMethods::mirror_request())
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true),
            )
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

use axum::routing::{get, post};
use axum::{middleware, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::config::Config;
use crate::handlers::{validate_chirp, AppState};
use crate::health::healthz;
use crate::middleware::{count_hits, logging_middleware};

/// Builds the application router.
///
/// Only the `/app` file server sits behind the hit counter; API and admin
/// routes are never counted.
pub fn create_app(config: &Config, state: AppState) -> Router {
    let file_server = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(state.clone(), count_hits))
        .service(ServeDir::new(&config.file_root));

    Router::new()
        .nest_service("/app", file_server)
        .route("/api/healthz", get(healthz))
        .route("/api/validate_chirp", post(validate_chirp))
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(logging_middleware)),
        )
}

pub struct Server {
    app: Router,
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let app = create_app(&config, AppState::new());
        Self { app, config }
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        tracing::info!(
            address = %listener.local_addr()?,
            file_root = %self.config.file_root.display(),
            "Chirpy server starting"
        );

        axum::serve(
            listener,
            self.app
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        tracing::info!("Chirpy server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}

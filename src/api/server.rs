use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::users;
use crate::config::Config;
use crate::store::repo::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves until Ctrl-C.
///
/// A bind failure is returned to the caller rather than retried.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        users: UserStore::new(config.id_strategy),
    });
    let app = router(state);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind))?;

    info!(addr = %listener.local_addr()?, "server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server just runs until killed.
        warn!(error = %err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use std::net::SocketAddr;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState {
            users: UserStore::default(),
        }))
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let request = Request::builder().uri("/accounts").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/users/1")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_bind_conflict_is_an_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = taken.local_addr().unwrap();
        let config = Config {
            bind: addr,
            id_strategy: Default::default(),
        };

        let err = start_server(&config).await.unwrap_err();
        assert!(err.to_string().contains("failed to bind"));
    }
}

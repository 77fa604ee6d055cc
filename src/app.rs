use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{Request, Response};
use axum::Router;
use tracing::Span;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::config::AppConfig;
use crate::state::AppState;
use crate::{foods, suggestions};

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(foods::router())
        .merge(suggestions::router())
}

pub fn build_app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<_>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                path = %req.uri().path(),
                status = tracing::field::Empty,
            )
        })
        .on_response(|res: &Response<_>, latency: Duration, span: &Span| {
            let status = res.status();
            span.record("status", status.as_u16());
            let latency_ms = latency.as_millis() as u64;
            if status.is_server_error() {
                tracing::error!(latency_ms, "request failed");
            } else {
                tracing::info!(latency_ms, "request served");
            }
        });

    Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(trace)
}

pub async fn serve(config: &AppConfig, app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

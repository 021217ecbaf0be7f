//! HTTP routes.
//!
//! ```text
//! GET  /graphql       - GraphiQL playground
//! POST /graphql       - GraphQL endpoint
//! GET  /health        - Liveness
//! GET  /health/ready  - Readiness (store reachable)
//! ```

use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::graphql::{ApiSchema, RequestContext, build_schema};
use crate::middleware::{ClientIp, OptionalUser, request_id_middleware};
use crate::state::AppState;

const GRAPHQL_PATH: &str = "/graphql";

/// Build the application router with tracing and request IDs.
///
/// Sentry layers are added by the binary so tests can run without a client.
pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .layer(Extension(schema))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .with_state(state)
}

async fn graphql(
    Extension(schema): Extension<ApiSchema>,
    OptionalUser(caller): OptionalUser,
    ClientIp(client_ip): ClientIp,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let context = RequestContext { caller, client_ip };
    schema.execute(request.into_inner().data(context)).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the account store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use chrono::Utc;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use shopkeep_core::Email;

    use super::*;
    use crate::db::MemoryAccountStore;
    use crate::graphql::test_support::test_config;
    use crate::middleware::REQUEST_ID_HEADER;
    use crate::models::NewUser;
    use crate::services::email::LogMailer;
    use crate::services::geo::DisabledLocator;

    fn state() -> AppState {
        AppState::new(
            test_config(false),
            MemoryAccountStore::new_shared(),
            Arc::new(LogMailer),
            Arc::new(DisabledLocator),
        )
    }

    fn graphql_request(query: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::post(GRAPHQL_PATH).header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("JWT {token}"));
        }
        builder
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = router(state());

        let response = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_or_generated() {
        let app = router(state());

        let response = app
            .clone()
            .oneshot(
                Request::get("/health")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_graphiql_page() {
        let response = router(state())
            .oneshot(Request::get(GRAPHQL_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_token_header_authenticates_request() {
        let state = state();
        let user = state
            .store()
            .create_user(NewUser::customer(Email::parse("customer@example.com").unwrap()))
            .await
            .unwrap();
        let token = state.tokens().issue(&user.email, Utc::now()).unwrap();
        let app = router(state);

        let response = app
            .clone()
            .oneshot(graphql_request("{ me { email } }", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["data"]["me"],
            json!({ "email": "customer@example.com" })
        );

        let response = app
            .oneshot(graphql_request("{ me { email } }", Some("not-a-token")))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["data"]["me"], json!(null));
    }
}

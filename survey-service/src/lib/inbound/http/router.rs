use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_survey::add_survey;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::middleware::log_server_errors;
use super::middleware::require_access;
use super::middleware::AccessGuard;
use crate::account::models::Role;
use crate::account::ports::AccountServicePort;
use crate::account::ports::AuthenticationPort;
use crate::error_log::ErrorLogRepository;
use crate::survey::ports::SurveyServicePort;

/// Prefix every API route is mounted under.
pub const API_PREFIX: &str = "/api";

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub authenticator: Arc<dyn AuthenticationPort>,
    pub survey_service: Arc<dyn SurveyServicePort>,
    pub error_log: Arc<dyn ErrorLogRepository>,
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let admin_guard = AccessGuard::new(Arc::clone(&state.account_service), Some(Role::admin()));

    let public_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login));

    let admin_routes = Router::new()
        .route("/surveys", post(add_survey))
        .route_layer(middleware::from_fn_with_state(admin_guard, require_access));

    let api_routes = Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.error_log),
            log_server_errors,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, api_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

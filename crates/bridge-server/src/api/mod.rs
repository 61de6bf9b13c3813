//! HTTP API for the bridge server.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::delivery::{EmailDelivery, SmsDelivery};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use bridge_core::MessageRouter;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Everything here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Message resolution engine
    pub router: Arc<MessageRouter>,
    /// Outbound email delivery
    pub email: Arc<dyn EmailDelivery>,
    /// Outbound SMS delivery
    pub sms: Arc<dyn SmsDelivery>,
    /// Required settings still unset, reported by the status route
    pub missing_settings: Arc<Vec<&'static str>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        router: MessageRouter,
        email: Arc<dyn EmailDelivery>,
        sms: Arc<dyn SmsDelivery>,
        missing_settings: Vec<&'static str>,
    ) -> Self {
        Self {
            router: Arc::new(router),
            email,
            sms,
            missing_settings: Arc::new(missing_settings),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/handle-sms", post(handlers::handle_sms))
        .route("/handle-email", post(handlers::handle_email))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::actions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Single action-dispatch endpoint; the action name in the body
        // selects the use-case.
        .route("/api/v1/assist", post(actions::handle_assist))
        .with_state(state)
}

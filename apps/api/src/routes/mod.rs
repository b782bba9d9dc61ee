pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::submission::handlers;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/coding-questions", get(handlers::handle_list_questions))
        .route(
            "/coding-questions/:id/submit",
            post(handlers::handle_submit),
        );

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api", api)
        .with_state(state)
}

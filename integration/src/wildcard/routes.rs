use axum::{
    routing::{get, post},
    Router,
};

use super::handler::{generate, get_source, get_state, reload, save_source, SharedState};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/wildcard/generate", get(generate))
        .route("/api/wildcard/state",    get(get_state))
        .route("/api/wildcard/source",   get(get_source).post(save_source))
        .route("/api/wildcard/reload",   post(reload))
        .with_state(state)
}

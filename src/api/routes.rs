use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::exercises::exercises_routes;
use super::health::health_check;
use super::state::AppState;
use super::users::{create_user, list_users, users_routes};
use crate::config::StaticConfig;
use crate::store::Store;

pub fn create_routes(store: Arc<dyn Store>, static_files: &StaticConfig) -> Router {
    let state = AppState::new(store);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/users", users_routes(state.clone()))
        // Nested routes only match `/api/users`; accept the trailing slash too
        .route(
            "/api/users/",
            get(list_users).post(create_user).with_state(state.clone()),
        )
        .nest("/api/exercises", exercises_routes(state))
        // Landing page and public assets
        .route_service("/", ServeFile::new(&static_files.index_file))
        .fallback_service(ServeDir::new(&static_files.public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::{handlers as contact, CONTACT_PATH};
use crate::gallery::handlers as gallery;
use crate::site::handlers as site;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(site::handle_index))
        .route("/health", get(health::health_handler))
        // Gallery API
        .route("/api/projects", get(gallery::handle_list_projects))
        .route("/api/projects/:id", get(gallery::handle_get_project))
        .route("/api/categories", get(gallery::handle_list_categories))
        // Contact API
        .route(CONTACT_PATH, post(contact::handle_contact))
        // Profile photo, project logos and the downloadable CV
        .nest_service("/static", assets)
        .with_state(state)
}

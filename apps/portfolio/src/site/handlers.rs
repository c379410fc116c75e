use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::errors::AppError;
use crate::gallery::handlers::CategoryQuery;
use crate::site::profile::PROFILE;
use crate::site::render::render_page;
use crate::state::AppState;

/// GET /?category=<label>
pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Html<String>, AppError> {
    let category = query.resolve()?;
    Ok(Html(render_page(&PROFILE, &state.catalog, category)))
}

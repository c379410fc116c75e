//! Axum route handlers for the project gallery API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::gallery::{Category, Project};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    /// Missing or empty `category` means "All".
    pub fn resolve(&self) -> Result<Category, AppError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(Category::All),
            Some(raw) => Category::parse(raw).map_err(|e| AppError::Validation(e.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub category: Category,
    pub total: usize,
    pub projects: Vec<&'static Project>,
}

/// GET /api/projects?category=<label>
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let category = query.resolve()?;
    let projects = state.catalog.visible(category);
    Ok(Json(ProjectListResponse {
        category,
        total: projects.len(),
        projects,
    }))
}

/// GET /api/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static Project>, AppError> {
    state
        .catalog
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project '{id}' not found")))
}

/// GET /api/categories
pub async fn handle_list_categories() -> Json<Vec<&'static str>> {
    Json(Category::ALL_VARIANTS.iter().map(|c| c.label()).collect())
}

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::params::{parse_limit, path_id, ListQuery};
use crate::api::state::AppState;
use crate::domain::category::{Category, CategoryFields};

/// Request body for creating or replacing a category
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryRequest {
    fn into_fields(self) -> Result<CategoryFields, ApiError> {
        CategoryFields::new(self.title, self.description, self.image)
            .map_err(ApiError::invalid_request)
    }
}

/// List categories
///
/// GET /categories?limit=
pub async fn list_categories(
    JwtAuth(_user): JwtAuth,
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let limit = parse_limit(query.limit.as_deref())?;

    let categories = state.categories.find_all(limit).await?;

    Ok(Json(categories))
}

/// Get a category by ID
///
/// GET /categories/:id
pub async fn get_category(
    JwtAuth(_user): JwtAuth,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Category>, ApiError> {
    let id = path_id(path)?.ok_or(ApiError::NotFound)?;

    let category = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(category))
}

/// Delete a category
///
/// DELETE /categories/:id
///
/// Answers 204 whether or not the category existed.
pub async fn delete_category(
    JwtAuth(_user): JwtAuth,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Some(id) = path_id(path)? else {
        return Ok(StatusCode::NO_CONTENT);
    };

    state.categories.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a new category
///
/// POST /categories
pub async fn create_category(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let fields = req.into_fields()?;

    let category = state.categories.create(&fields).await?;
    tracing::info!(id = category.id, user_id = user.id, "category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// Replace a category's fields
///
/// PUT /categories/:id
///
/// Fields missing from the body are cleared. A failed save is reported as
/// 500, a duplicate title included.
pub async fn update_category(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let id = path_id(path)?;
    let Json(req) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let fields = req.into_fields()?;
    let id = id.ok_or(ApiError::NotFound)?;

    state
        .categories
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let category = state
        .categories
        .update(id, &fields)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id, user_id = user.id, "category updated");

    Ok(Json(category))
}

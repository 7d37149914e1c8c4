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
use crate::api::params::{parse_category, parse_limit, path_id, ListQuery};
use crate::api::state::AppState;
use crate::domain::pickme::{CategoryFilter, Pickme, PickmeFields};

/// Request body for creating or replacing a pickme
#[derive(Debug, Deserialize)]
pub struct PickmeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

impl PickmeRequest {
    fn into_fields(self) -> Result<PickmeFields, ApiError> {
        PickmeFields::new(self.name, self.description, self.image, self.category_id)
            .map_err(ApiError::invalid_request)
    }
}

/// List pickmes, optionally restricted to one category
///
/// GET /pickmes?limit=&category=
pub async fn list_pickmes(
    JwtAuth(_user): JwtAuth,
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Pickme>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let limit = parse_limit(query.limit.as_deref())?;
    let Some(category) = parse_category(query.category.as_deref())? else {
        // No pickme can belong to a fractional category
        return Ok(Json(Vec::new()));
    };
    let filter = CategoryFilter::from_query(category, state.config.zero_category_is_id);

    let pickmes = state.pickmes.find_all(filter, limit).await?;

    Ok(Json(pickmes))
}

/// Get a pickme by ID
///
/// GET /pickmes/:id
pub async fn get_pickme(
    JwtAuth(_user): JwtAuth,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Pickme>, ApiError> {
    let id = path_id(path)?.ok_or(ApiError::NotFound)?;

    let pickme = state
        .pickmes
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(pickme))
}

/// Delete a pickme
///
/// DELETE /pickmes/:id
pub async fn delete_pickme(
    JwtAuth(_user): JwtAuth,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Some(id) = path_id(path)? else {
        return Ok(StatusCode::NO_CONTENT);
    };

    state.pickmes.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a new pickme
///
/// POST /pickmes
pub async fn create_pickme(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    payload: Result<Json<PickmeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Pickme>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let fields = req.into_fields()?;

    let pickme = state.pickmes.create(&fields).await?;
    tracing::info!(id = pickme.id, user_id = user.id, "pickme created");

    Ok((StatusCode::CREATED, Json(pickme)))
}

/// Replace a pickme's fields
///
/// PUT /pickmes/:id
pub async fn update_pickme(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<PickmeRequest>, JsonRejection>,
) -> Result<Json<Pickme>, ApiError> {
    let id = path_id(path)?;
    let Json(req) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    let fields = req.into_fields()?;
    let id = id.ok_or(ApiError::NotFound)?;

    state
        .pickmes
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let pickme = state
        .pickmes
        .update(id, &fields)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id, user_id = user.id, "pickme updated");

    Ok(Json(pickme))
}

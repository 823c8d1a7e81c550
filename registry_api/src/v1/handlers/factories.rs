use crate::state::Db;
use crate::v1::api_models::{FactoryListDto, FactoryPatch, FactoryPayload};
use crate::v1::db::queries;
use crate::v1::error::ApiError;
use crate::v1::extractors::params::FilterQuery;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use shared::registry::filter::{filter_factories, summarize};
use tracing::info;
use uuid::Uuid;

/// Returns the full list run through the filter engine: ranked factories
/// first, then unranked in creation order.
pub async fn list_factories(
    State(db): State<Db>,
    FilterQuery(criteria): FilterQuery,
) -> Result<impl IntoResponse, ApiError> {
    let factories = queries::list_factories(&db.pool).await?;
    let visible = filter_factories(&factories, &criteria);
    let summary = summarize(&visible);

    Ok(Json(FactoryListDto {
        requested_at: Utc::now(),
        count: summary.count,
        total_capacity: summary.total_capacity,
        factories: visible.into_iter().cloned().collect(),
    }))
}

pub async fn get_factory(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let factory = queries::get_factory(&db.pool, id)
        .await?
        .ok_or(ApiError::NotFound("factory"))?;
    Ok(Json(factory))
}

pub async fn create_factory(
    State(db): State<Db>,
    Json(payload): Json<FactoryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation("factory", errors));
    }

    let factory = payload.into_factory(Uuid::now_v7());
    queries::insert_factory(&db.pool, &factory).await?;
    info!(factory_id = %factory.id, "factory created");

    Ok((StatusCode::CREATED, Json(factory)))
}

pub async fn update_factory(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FactoryPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = patch.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation("factory", errors));
    }

    let existing = queries::get_factory(&db.pool, id)
        .await?
        .ok_or(ApiError::NotFound("factory"))?;
    let updated = patch.apply(existing);
    queries::update_factory(&db.pool, &updated).await?;

    Ok(Json(updated))
}

pub async fn delete_factory(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !queries::delete_factory(&db.pool, id).await? {
        return Err(ApiError::NotFound("factory"));
    }
    info!(factory_id = %id, "factory deleted");
    Ok(StatusCode::NO_CONTENT)
}

use crate::state::Db;
use crate::v1::api_models::{NetworkPatch, NetworkPayload};
use crate::v1::db::queries;
use crate::v1::error::ApiError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::info;
use uuid::Uuid;

pub async fn list_networks(State(db): State<Db>) -> Result<impl IntoResponse, ApiError> {
    let networks = queries::list_networks(&db.pool).await?;
    Ok(Json(networks))
}

pub async fn get_network(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let network = queries::get_network(&db.pool, id)
        .await?
        .ok_or(ApiError::NotFound("network"))?;
    Ok(Json(network))
}

pub async fn create_network(
    State(db): State<Db>,
    Json(payload): Json<NetworkPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation("network", errors));
    }

    let network = payload.into_network(Uuid::now_v7());
    queries::insert_network(&db.pool, &network).await?;
    info!(network_id = %network.id, "network created");

    Ok((StatusCode::CREATED, Json(network)))
}

pub async fn update_network(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(patch): Json<NetworkPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = patch.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation("network", errors));
    }

    let existing = queries::get_network(&db.pool, id)
        .await?
        .ok_or(ApiError::NotFound("network"))?;
    let updated = patch.apply(existing);
    queries::update_network(&db.pool, &updated).await?;

    Ok(Json(updated))
}

/// Deletion does not touch factories that still point at this network.
pub async fn delete_network(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !queries::delete_network(&db.pool, id).await? {
        return Err(ApiError::NotFound("network"));
    }
    info!(network_id = %id, "network deleted");
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::error::{AppError, Result};
use crate::models::{NewWiFiNetwork, WiFiNetwork};
use crate::services::NetworkService;

/// GET /api/networks
pub async fn list(State(service): State<NetworkService>) -> Result<Json<Vec<WiFiNetwork>>> {
    let networks = service.get_all().await?;
    Ok(Json(networks))
}

/// GET /api/networks/{id}
pub async fn get_by_id(
    State(service): State<NetworkService>,
    Path(id): Path<String>,
) -> Result<Json<WiFiNetwork>> {
    let network = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Network {} not found", id)))?;

    Ok(Json(network))
}

/// POST /api/networks
///
/// Body rejections are reported as validation errors so every client error
/// carries the same `{"error": ...}` body.
pub async fn create(
    State(service): State<NetworkService>,
    payload: std::result::Result<Json<NewWiFiNetwork>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(network) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let created = service.add(network).await?;
    let location = format!("/api/networks/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// DELETE /api/networks/{id}
pub async fn delete(
    State(service): State<NetworkService>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !service.delete(&id).await? {
        return Err(AppError::NotFound(format!("Network {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

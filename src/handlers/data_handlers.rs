//! `GET /api/data` — database time plus MinIO buckets in one envelope.

use crate::{errors::AppError, models::envelope::DataEnvelope, services::data_service::DataService};
use axum::{Json, extract::State};
use tracing::error;

/// Responds `200` with the envelope, or `500 {"error": ...}` when the
/// database query fails. Storage failures never reach this level.
pub async fn get_data(
    State(service): State<DataService>,
) -> Result<Json<DataEnvelope>, AppError> {
    let envelope = service.fetch_envelope().await.map_err(|err| {
        error!("GET /api/data failed: {:?}", err);
        AppError::from(err)
    })?;

    Ok(Json(envelope))
}

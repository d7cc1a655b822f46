//! POST /predict

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::service::Verdict;
use crate::AppState;

/// Request body; an absent or null `text` is classified as empty text
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl PredictRequest {
    /// Accept only JSON objects; unknown keys are ignored
    pub fn from_body(body: Value) -> ApiResult<Self> {
        if !body.is_object() {
            return Err(ApiError::BadRequest(
                "request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Verdict,
}

/// POST /predict
///
/// Classifies `text` as "Genuine" or "Fake".
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<PredictResponse>> {
    let Json(body) = payload?;
    let text = PredictRequest::from_body(body)?.text.unwrap_or_default();

    // Panics inside the artifacts surface as a join error, not a dead worker
    let service = state.service.clone();
    let verdict = tokio::task::spawn_blocking(move || service.classify(&text))
        .await
        .map_err(|e| {
            error!("Inference task failed: {}", e);
            ApiError::Internal(format!("inference task failed: {}", e))
        })?
        .map_err(|e| {
            error!("Classification failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(PredictResponse {
        prediction: verdict,
    }))
}

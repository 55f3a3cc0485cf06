use axum::{
    body::Bytes,
    extract::State,
    routing::any,
    Json, Router,
};
use serde_json::Value;
use tracing::{error, info, instrument};

use super::dto::RequestPayload;
use super::services::generate_recommendation;
use crate::{error::RecommendationError, state::AppState};

pub fn recommendation_routes() -> Router<AppState> {
    // OPTIONS never gets here: the CORS layer answers pre-flight requests.
    Router::new().route("/meal-recommendations", any(recommend))
}

/// Body is read raw so a malformed payload surfaces as the 500 error envelope.
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RecommendationError> {
    let result = match serde_json::from_slice::<RequestPayload>(&body) {
        Ok(payload) => generate_recommendation(state.generator.as_ref(), &payload).await,
        Err(e) => Err(RecommendationError::InvalidPayload(e)),
    };

    match result {
        Ok(value) => {
            info!("recommendation generated");
            Ok(Json(value))
        }
        Err(e) => {
            error!(error = %e, "meal recommendation failed");
            Err(e)
        }
    }
}

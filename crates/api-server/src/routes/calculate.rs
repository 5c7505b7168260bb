use actix_web::web::{self, Json};
use packwise_types::{CalculatePacksRequest, CalculatePacksResponse};
use tracing::debug;

use crate::{error::ApiError, ApiState};

/// `POST /v1/calculate` — compute the optimal pack plan for the requested
/// item count against the current pack size configuration.
pub async fn calculate_packs(
    state: web::Data<ApiState>,
    body: Json<CalculatePacksRequest>,
) -> Result<Json<CalculatePacksResponse>, ApiError> {
    let packs = state.packs.calculate(body.items_count)?;
    debug!(
        items_count = body.items_count,
        entries = packs.len(),
        "calculated pack plan"
    );
    Ok(Json(CalculatePacksResponse { packs }))
}

use actix_web::{web, HttpResponse};
use packwise_types::SetPackSizesRequest;
use tracing::info;

use crate::{error::ApiError, ApiState};

/// `POST /v1/pack-sizes` — replace the configured pack sizes. The update is
/// atomic: in-flight calculations keep the snapshot they started with.
pub async fn set_pack_sizes(
    state: web::Data<ApiState>,
    body: web::Json<SetPackSizesRequest>,
) -> Result<HttpResponse, ApiError> {
    state.packs.set_sizes(&body.sizes)?;
    info!(count = body.sizes.len(), "pack sizes replaced");
    Ok(HttpResponse::Ok().finish())
}

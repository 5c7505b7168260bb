use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use serde::Serialize;

use crate::ApiState;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub version: String,
    pub pack_sizes: Vec<u64>,
}

pub async fn info_route(state: web::Data<ApiState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        version: env!("CARGO_PKG_VERSION").to_owned(),
        pack_sizes: state.packs.snapshot().as_ref().clone(),
    })
}

pub async fn health_route() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({}))
}

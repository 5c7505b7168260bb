use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use packwise_api_server::{routes, ApiState};
use packwise_packs::PackStore;
use packwise_types::{CalculatePacksRequest, CalculatePacksResponse, Pack, SetPackSizesRequest};
use pretty_assertions::assert_eq;

fn state() -> web::Data<ApiState> {
    web::Data::new(ApiState::new(Arc::new(PackStore::new())))
}

#[actix_web::test]
async fn calculate_returns_plan_sorted_by_size() {
    let app = test::init_service(App::new().app_data(state()).service(routes())).await;

    let req = test::TestRequest::post()
        .uri("/v1/calculate")
        .set_json(CalculatePacksRequest { items_count: 12001 })
        .to_request();
    let resp: CalculatePacksResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        resp.packs,
        vec![
            Pack { size: 250, count: 1 },
            Pack {
                size: 2000,
                count: 1
            },
            Pack {
                size: 5000,
                count: 2
            },
        ]
    );
}

#[actix_web::test]
async fn calculate_zero_items_returns_empty_plan() {
    let app = test::init_service(App::new().app_data(state()).service(routes())).await;

    let req = test::TestRequest::post()
        .uri("/v1/calculate")
        .set_json(CalculatePacksRequest { items_count: 0 })
        .to_request();
    let resp: CalculatePacksResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.packs.is_empty());
}

#[actix_web::test]
async fn calculate_negative_items_is_bad_request() {
    let app = test::init_service(App::new().app_data(state()).service(routes())).await;

    let req = test::TestRequest::post()
        .uri("/v1/calculate")
        .set_json(CalculatePacksRequest { items_count: -1 })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("invalid quantity"));
}

#[actix_web::test]
async fn calculate_rejects_malformed_json() {
    let app = test::init_service(App::new().app_data(state()).service(routes())).await;

    let req = test::TestRequest::post()
        .uri("/v1/calculate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn set_pack_sizes_then_calculate_uses_new_sizes() {
    let app = test::init_service(App::new().app_data(state()).service(routes())).await;

    let req = test::TestRequest::post()
        .uri("/v1/pack-sizes")
        .set_json(SetPackSizesRequest {
            sizes: vec![12, 45, 100, 234, 654],
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/v1/calculate")
        .set_json(CalculatePacksRequest { items_count: 5002 })
        .to_request();
    let resp: CalculatePacksResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        resp.packs,
        vec![
            Pack { size: 45, count: 2 },
            Pack {
                size: 100,
                count: 1
            },
            Pack {
                size: 234,
                count: 1
            },
            Pack {
                size: 654,
                count: 7
            },
        ]
    );
}

#[actix_web::test]
async fn empty_pack_sizes_rejected_and_configuration_kept() {
    let app = test::init_service(App::new().app_data(state()).service(routes())).await;

    let req = test::TestRequest::post()
        .uri("/v1/pack-sizes")
        .set_json(SetPackSizesRequest { sizes: vec![] })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // defaults still in effect
    let req = test::TestRequest::post()
        .uri("/v1/calculate")
        .set_json(CalculatePacksRequest { items_count: 1 })
        .to_request();
    let resp: CalculatePacksResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.packs, vec![Pack { size: 250, count: 1 }]);
}

#[actix_web::test]
async fn info_reports_version_and_configured_sizes() {
    let app = test::init_service(App::new().app_data(state()).service(routes())).await;

    let req = test::TestRequest::get().uri("/v1/info").to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        resp["pack_sizes"],
        serde_json::json!([250, 500, 1000, 2000, 5000])
    );
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(
        App::new().route("/health", web::get().to(routes::index::health_route)),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

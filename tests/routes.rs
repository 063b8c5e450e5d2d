use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use memstore::models::config::ServerConfig;
use memstore::payments::{CheckoutRequest, CheckoutSession, PaymentError, PaymentGateway};
use memstore::repository::{DieselRepository, ProductWriter};
use memstore::routes::json_config;

mod common;

const TOKEN: &str = "s3cret";

/// Echoes the session parameters back in the redirect URL.
struct EchoGateway;

impl PaymentGateway for EchoGateway {
    fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        Ok(CheckoutSession {
            url: format!(
                "https://pay.test/{}?qty={}&amount={}",
                request.product_slug, request.quantity, request.unit_amount_jpy
            ),
        })
    }
}

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        site_url: "http://shop.test".to_string(),
        admin_token: Some(TOKEN.to_string()),
        payment_api_key: None,
    }
}

/// Mounts the API with the same `web::Data` the server provides.
fn api(repo: DieselRepository) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let gateway: Arc<dyn PaymentGateway> = Arc::new(EchoGateway);
        cfg.app_data(json_config())
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(gateway))
            .app_data(web::Data::new(server_config()))
            .service(memstore::api_scope(Some(TOKEN.to_string())));
    }
}

async fn json_body<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}

#[actix_web::test]
async fn test_catalog_search_and_product_page() {
    let test_db = common::TestDb::new("test_catalog_search_and_product_page.db");
    let repo = test_db.repo();
    for (slug, stock) in [("a", 0), ("b", 4), ("c", 9)] {
        let mut product = common::new_product(slug);
        product.stock_qty = stock;
        repo.create_product(&product).unwrap();
    }
    let app = test::init_service(App::new().configure(api(test_db.repo()))).await;

    let req = test::TestRequest::get()
        .uri("/api/products?inStock=true&sort=stock-desc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = json_body(resp).await;
    assert_eq!(page["total"], 2);
    assert_eq!(page["items"][0]["slug"], "c");
    assert_eq!(page["sort"], "stock-desc");

    let req = test::TestRequest::get().uri("/api/products/b").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["stockQty"], 4);

    let req = test::TestRequest::get().uri("/api/products/zzz").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_catalog_parameters_are_bad_request() {
    let test_db = common::TestDb::new("test_invalid_catalog_parameters.db");
    let app = test::init_service(App::new().configure(api(test_db.repo()))).await;

    let req = test::TestRequest::get()
        .uri("/api/products?capMin=big")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["details"]["fields"], json!(["capMin"]));
}

#[actix_web::test]
async fn test_sort_options_are_listed() {
    let test_db = common::TestDb::new("test_sort_options_are_listed.db");
    let app = test::init_service(App::new().configure(api(test_db.repo()))).await;

    let req = test::TestRequest::get().uri("/api/sort-options").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().map(Vec::len), Some(5));
}

#[actix_web::test]
async fn test_lead_submission() {
    let test_db = common::TestDb::new("test_lead_submission.db");
    let app = test::init_service(App::new().configure(api(test_db.repo()))).await;

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({
            "type": "Consultation",
            "company": "Acme KK",
            "name": "Taro",
            "email": "taro@example.com",
            "message": "Which module fits our board?"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["id"].as_i64().is_some());

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({ "type": "Quote", "company": "Acme KK" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["details"].is_string());
}

#[actix_web::test]
async fn test_checkout_enforces_moq_and_builds_session() {
    let test_db = common::TestDb::new("test_checkout.db");
    let mut product = common::new_product("ddr5-32");
    product.moq = memstore::domain::types::OrderQuantity::new(5).unwrap();
    product.reference_price_jpy = Some(25000);
    test_db.repo().create_product(&product).unwrap();
    let app = test::init_service(App::new().configure(api(test_db.repo()))).await;

    let req = test::TestRequest::post()
        .uri("/api/checkout")
        .set_json(json!({ "slug": "ddr5-32", "qty": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/checkout")
        .set_json(json!({ "slug": "ddr5-32", "qty": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await["url"],
        "https://pay.test/ddr5-32?qty=5&amount=25000"
    );

    let req = test::TestRequest::post()
        .uri("/api/checkout")
        .set_json(json!({ "slug": "missing", "qty": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_admin_routes_require_token() {
    let test_db = common::TestDb::new("test_admin_routes_require_token.db");
    let app = test::init_service(App::new().configure(api(test_db.repo()))).await;

    let req = test::TestRequest::get().uri("/api/admin/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await, json!({ "error": "Unauthorized" }));

    let req = test::TestRequest::get()
        .uri("/api/admin/stats?token=s3cret")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["totalProducts"], 0);
}

#[actix_web::test]
async fn test_admin_product_lifecycle() {
    let test_db = common::TestDb::new("test_admin_product_lifecycle.db");
    let app = test::init_service(App::new().configure(api(test_db.repo()))).await;
    let payload = json!({
        "name": "DDR4 8GB UDIMM",
        "manufacturer": "Samsung",
        "memoryType": "DDR4",
        "formFactor": "UDIMM",
        "capacityGb": 8,
        "speedMt": 2666,
        "stockQty": 7
    });

    let req = test::TestRequest::post()
        .uri("/api/admin/products?token=s3cret")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    assert_eq!(created["slug"], "ddr4-8gb-udimm");
    let id = created["id"].as_i64().unwrap();

    let mut changed = payload.clone();
    changed["stockQty"] = json!(0);
    changed["slug"] = json!("ddr4-8gb-udimm");
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/products/{id}?token=s3cret"))
        .set_json(&changed)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["stockQty"], 0);

    let req = test::TestRequest::get()
        .uri("/api/admin/products?token=s3cret")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(json_body(resp).await.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/products/{id}?token=s3cret"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/admin/products/{id}?token=s3cret"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

//! Admin API. Mounted under a scope guarded by
//! [`crate::middleware::RequireAdminToken`].

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::product::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::{
    admin as admin_service, leads as leads_service, products as products_service,
};

#[get("/stats")]
pub async fn dashboard(repo: web::Data<DieselRepository>) -> impl Responder {
    match admin_service::dashboard_stats(repo.get_ref()) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => service_error_response(err, "load dashboard stats"),
    }
}

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match products_service::list_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => service_error_response(err, "list products"),
    }
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match products_service::create_product(repo.get_ref(), form) {
        Ok(product) => {
            log::info!("Created product {}", product.slug);
            HttpResponse::Created().json(product)
        }
        Err(err) => service_error_response(err, "create product"),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::get_product(repo.get_ref(), product_id.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(err, "load product"),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match products_service::update_product(repo.get_ref(), product_id.into_inner(), form) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(err, "update product"),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    match products_service::delete_product(repo.get_ref(), product_id) {
        Ok(()) => {
            log::info!("Deleted product #{product_id}");
            HttpResponse::NoContent().finish()
        }
        Err(err) => service_error_response(err, "delete product"),
    }
}

#[get("/leads")]
pub async fn list_leads(repo: web::Data<DieselRepository>) -> impl Responder {
    match leads_service::list_leads(repo.get_ref()) {
        Ok(leads) => HttpResponse::Ok().json(leads),
        Err(err) => service_error_response(err, "list leads"),
    }
}

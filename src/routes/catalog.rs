use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::catalog as catalog_service;

/// Filtered, sorted and paginated product listing driven by the URL query.
#[get("/products")]
pub async fn search_products(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::search_catalog(repo.get_ref(), req.query_string()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "search products"),
    }
}

#[get("/products/{slug}")]
pub async fn show_product(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog_service::get_product_by_slug(repo.get_ref(), &slug) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(err, "load product"),
    }
}

#[get("/sort-options")]
pub async fn sort_options() -> impl Responder {
    HttpResponse::Ok().json(catalog_service::list_sort_options())
}

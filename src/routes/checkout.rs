use std::sync::Arc;

use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::checkout::CheckoutForm;
use crate::models::config::ServerConfig;
use crate::payments::PaymentGateway;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::checkout as checkout_service;

#[post("/checkout")]
pub async fn start_checkout(
    repo: web::Data<DieselRepository>,
    gateway: web::Data<Arc<dyn PaymentGateway>>,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<CheckoutForm>,
) -> impl Responder {
    match checkout_service::start_checkout(
        repo.get_ref(),
        gateway.get_ref().as_ref(),
        &server_config.site_url,
        form,
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(err, "start checkout"),
    }
}

use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::lead::LeadForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::leads as leads_service;

#[post("/leads")]
pub async fn submit_lead(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LeadForm>,
) -> impl Responder {
    match leads_service::submit_lead(repo.get_ref(), form) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error_response(err, "submit lead"),
    }
}

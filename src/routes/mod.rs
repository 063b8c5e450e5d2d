//! JSON handlers for the public storefront API and the admin API.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod leads;

/// Maps a failed service call to its HTTP response.
///
/// `context` names the operation in the log line written for server errors.
pub fn service_error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(err) => HttpResponse::BadRequest().json(
            ErrorResponse::new("Invalid parameters").with_details(json!({ "fields": err.fields })),
        ),
        ServiceError::Form(message) => HttpResponse::BadRequest()
            .json(ErrorResponse::new("Invalid request").with_details(json!(message))),
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new("Not found")),
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"))
        }
        err => {
            log::error!("Failed to {context}: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

/// JSON extractor settings: malformed bodies get the same error shape as
/// form validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new("Invalid request").with_details(json!(err.to_string())));
        InternalError::from_response(err, response).into()
    })
}

//! Small-quantity checkout through the configured payment gateway.

use crate::dto::api::CheckoutResponse;
use crate::forms::checkout::{CheckoutForm, CheckoutPayload};
use crate::payments::{CheckoutRequest, PaymentGateway};
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Unit price charged for products without a reference price.
pub const DEFAULT_UNIT_PRICE_JPY: i32 = 1000;

/// Opens a hosted checkout session for `qty` units of one product.
pub fn start_checkout<R, G>(
    repo: &R,
    gateway: &G,
    site_url: &str,
    form: CheckoutForm,
) -> ServiceResult<CheckoutResponse>
where
    R: ProductReader + ?Sized,
    G: PaymentGateway + ?Sized,
{
    let payload = CheckoutPayload::try_from(form)?;

    let product = repo
        .get_product_by_slug(&payload.slug)?
        .ok_or(ServiceError::NotFound)?;

    if payload.qty < product.moq {
        return Err(ServiceError::Form(format!(
            "minimum order quantity is {}",
            product.moq
        )));
    }

    let site_url = site_url.trim_end_matches('/');
    let request = CheckoutRequest {
        product_name: product.name.to_string(),
        product_slug: product.slug.to_string(),
        unit_amount_jpy: product.reference_price_jpy.unwrap_or(DEFAULT_UNIT_PRICE_JPY),
        quantity: payload.qty.get(),
        success_url: format!("{site_url}/products/{}?paid=1", product.slug),
        cancel_url: format!("{site_url}/products/{}", product.slug),
    };

    let session = gateway.create_checkout_session(&request).map_err(|err| {
        log::error!("Failed to create checkout session for {}: {err}", product.slug);
        err
    })?;

    Ok(CheckoutResponse { url: session.url })
}

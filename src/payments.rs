//! Payment provider seam used by checkout.
//!
//! Only the contract lives here; a provider integration implements
//! [`PaymentGateway`] and is injected into the server at startup.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment provider is not configured")]
    NotConfigured,

    #[error("payment provider rejected the request: {0}")]
    Provider(String),
}

/// One-line-item hosted checkout session request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    pub product_name: String,
    pub product_slug: String,
    /// Unit price in yen (JPY has no minor unit).
    pub unit_amount_jpy: i32,
    pub quantity: i32,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Page the buyer is redirected to in order to pay.
    pub url: String,
}

pub trait PaymentGateway: Send + Sync {
    fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError>;
}

/// Gateway used when no provider key is configured; every checkout fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredGateway;

impl PaymentGateway for UnconfiguredGateway {
    fn create_checkout_session(
        &self,
        _request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        Err(PaymentError::NotConfigured)
    }
}

#[cfg(any(test, feature = "test-mocks"))]
mockall::mock! {
    pub Gateway {}

    impl PaymentGateway for Gateway {
        fn create_checkout_session(
            &self,
            request: &CheckoutRequest,
        ) -> Result<CheckoutSession, PaymentError>;
    }
}

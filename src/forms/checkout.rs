use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{OrderQuantity, ProductSlug};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Small-quantity purchase request for one product.
pub struct CheckoutForm {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(range(min = 1))]
    pub qty: i32,
}

/// Validated [`CheckoutForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPayload {
    pub slug: ProductSlug,
    pub qty: OrderQuantity,
}

impl TryFrom<CheckoutForm> for CheckoutPayload {
    type Error = FormError;

    fn try_from(form: CheckoutForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            slug: ProductSlug::new(form.slug).map_err(|_| FormError::InvalidSlug)?,
            qty: OrderQuantity::new(form.qty).map_err(|_| FormError::InvalidQuantity)?,
        })
    }
}

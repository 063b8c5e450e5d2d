use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{LeadType, NewLead};
use crate::domain::types::{
    CompanyName, ContactName, LeadEmail, LeadMessage, OrderQuantity, ProductSlug,
};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Quote or consultation request submitted from the storefront.
pub struct LeadForm {
    #[serde(rename = "type")]
    pub lead_type: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(default)]
    pub product_slug: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub qty: Option<i32>,
}

impl TryFrom<LeadForm> for NewLead {
    type Error = FormError;

    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let lead_type: LeadType = form.lead_type.parse().map_err(|_| FormError::InvalidValue {
            field: "type",
            value: form.lead_type.clone(),
        })?;

        let product_slug = form
            .product_slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(|slug| ProductSlug::new(slug).map_err(|_| FormError::InvalidSlug))
            .transpose()?;

        Ok(NewLead::new(
            lead_type,
            CompanyName::new(form.company).map_err(|_| FormError::InvalidName)?,
            ContactName::new(form.name).map_err(|_| FormError::InvalidName)?,
            LeadEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?,
            form.phone,
            LeadMessage::new(form.message).map_err(|_| FormError::InvalidValue {
                field: "message",
                value: String::new(),
            })?,
            product_slug,
            form.qty
                .map(OrderQuantity::new)
                .transpose()
                .map_err(|_| FormError::InvalidQuantity)?,
        ))
    }
}

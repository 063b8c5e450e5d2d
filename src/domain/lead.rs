use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CompanyName, ContactName, LeadEmail, LeadId, LeadMessage, OrderQuantity, ProductSlug,
    TypeConstraintError,
};

/// Kind of inquiry a visitor submitted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadType {
    /// Request for a price quote.
    Quote,
    /// General technical or sourcing consultation.
    Consultation,
}

impl LeadType {
    pub const fn as_str(self) -> &'static str {
        match self {
            LeadType::Quote => "Quote",
            LeadType::Consultation => "Consultation",
        }
    }
}

impl Display for LeadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Quote" => Ok(LeadType::Quote),
            "Consultation" => Ok(LeadType::Consultation),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub company: CompanyName,
    pub name: ContactName,
    pub email: LeadEmail,
    pub phone: Option<String>,
    pub message: LeadMessage,
    /// Product the inquiry refers to, when submitted from a product page.
    pub product_slug: Option<ProductSlug>,
    pub qty: Option<OrderQuantity>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewLead {
    pub lead_type: LeadType,
    pub company: CompanyName,
    pub name: ContactName,
    pub email: LeadEmail,
    pub phone: Option<String>,
    pub message: LeadMessage,
    pub product_slug: Option<ProductSlug>,
    pub qty: Option<OrderQuantity>,
}

impl NewLead {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lead_type: LeadType,
        company: CompanyName,
        name: ContactName,
        email: LeadEmail,
        phone: Option<String>,
        message: LeadMessage,
        product_slug: Option<ProductSlug>,
        qty: Option<OrderQuantity>,
    ) -> Self {
        Self {
            lead_type,
            company,
            name,
            email,
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message,
            product_slug,
            qty,
        }
    }
}

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{Lead as DomainLead, NewLead as DomainNewLead};
use crate::domain::types::{
    CompanyName, ContactName, LeadEmail, LeadId, LeadMessage, OrderQuantity, ProductSlug,
    TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::leads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub lead_type: String,
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub product_slug: Option<String>,
    pub qty: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub lead_type: &'static str,
    pub company: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub message: &'a str,
    pub product_slug: Option<&'a str>,
    pub qty: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl<'a> NewLead<'a> {
    pub fn new(lead: &'a DomainNewLead, created_at: NaiveDateTime) -> Self {
        Self {
            lead_type: lead.lead_type.as_str(),
            company: lead.company.as_str(),
            name: lead.name.as_str(),
            email: lead.email.as_str(),
            phone: lead.phone.as_deref(),
            message: lead.message.as_str(),
            product_slug: lead.product_slug.as_ref().map(ProductSlug::as_str),
            qty: lead.qty.map(OrderQuantity::get),
            created_at,
        }
    }
}

impl TryFrom<Lead> for DomainLead {
    type Error = TypeConstraintError;

    fn try_from(lead: Lead) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadId::new(lead.id)?,
            lead_type: lead.lead_type.parse()?,
            company: CompanyName::new(lead.company)?,
            name: ContactName::new(lead.name)?,
            email: LeadEmail::new(lead.email)?,
            phone: lead.phone,
            message: LeadMessage::new(lead.message)?,
            product_slug: lead.product_slug.map(ProductSlug::new).transpose()?,
            qty: lead.qty.map(OrderQuantity::new).transpose()?,
            created_at: lead.created_at,
        })
    }
}

//! Lead capture and listing.

use crate::domain::lead::{Lead, NewLead};
use crate::dto::api::LeadCreated;
use crate::forms::lead::LeadForm;
use crate::repository::{LeadReader, LeadWriter};
use crate::services::ServiceResult;

/// Validates and stores a quote or consultation request.
pub fn submit_lead<R>(repo: &R, form: LeadForm) -> ServiceResult<LeadCreated>
where
    R: LeadWriter + ?Sized,
{
    let new_lead = NewLead::try_from(form)?;

    let lead = repo.create_lead(&new_lead).map_err(|err| {
        log::error!("Failed to store lead: {err}");
        err
    })?;

    log::info!("New {} lead #{} from {}", lead.lead_type, lead.id, lead.company);

    Ok(LeadCreated {
        success: true,
        id: lead.id,
    })
}

/// Every captured lead, newest first.
pub fn list_leads<R>(repo: &R) -> ServiceResult<Vec<Lead>>
where
    R: LeadReader + ?Sized,
{
    Ok(repo.list_leads()?)
}

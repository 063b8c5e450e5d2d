//! Admin access check and dashboard.

use chrono::{Duration, Utc};

use crate::catalog::{Constraint, ProductPredicate};
use crate::domain::product::ProductStatus;
use crate::dto::admin::DashboardStats;
use crate::repository::{LeadReader, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Highest stock level still reported as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;
/// Window of the "recent leads" counter.
pub const RECENT_LEADS_DAYS: i64 = 7;

/// Compares the supplied `token` query value with the configured admin token.
///
/// Plain string equality; an unset or empty configured token rejects everyone.
pub fn authorize_admin(configured: Option<&str>, supplied: Option<&str>) -> ServiceResult<()> {
    match (configured, supplied) {
        (Some(expected), Some(given)) if !expected.is_empty() && expected == given => Ok(()),
        _ => Err(ServiceError::Unauthorized),
    }
}

/// Counts shown on the admin dashboard.
pub fn dashboard_stats<R>(repo: &R) -> ServiceResult<DashboardStats>
where
    R: ProductReader + LeadReader + ?Sized,
{
    let active = ProductPredicate::all().and(Constraint::StatusIn(vec![ProductStatus::Active]));
    let low_stock = ProductPredicate::all()
        .and(Constraint::InStock)
        .and(Constraint::StockAtMost(LOW_STOCK_THRESHOLD));
    let since = Utc::now().naive_utc() - Duration::days(RECENT_LEADS_DAYS);

    Ok(DashboardStats {
        total_products: repo.count_products(&ProductPredicate::all())?,
        active_products: repo.count_products(&active)?,
        low_stock_products: repo.count_products(&low_stock)?,
        total_leads: repo.count_leads(None)?,
        recent_leads: repo.count_leads(Some(since))?,
    })
}

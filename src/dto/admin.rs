//! DTOs used by the admin dashboard.

use serde::Serialize;

/// Headline counters of the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub active_products: usize,
    /// In stock, but with ten units or fewer.
    pub low_stock_products: usize,
    pub total_leads: usize,
    /// Leads received during the last seven days.
    pub recent_leads: usize,
}

//! Supported catalog orderings.

use std::cmp::Ordering as CmpOrdering;

use serde::Serialize;

use crate::domain::product::Product;

/// Product column a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    CreatedAt,
    StockQty,
    LeadTimeDays,
    CapacityGb,
    SpeedMt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    Desc,
}

/// Concrete ordering handed to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ordering {
    pub field: SortField,
    pub direction: Direction,
}

impl Ordering {
    pub const fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// Compares two products the way storage orders them.
    ///
    /// Missing lead times sort before present ones, as NULL does in SQLite.
    /// Ties fall back to the product id in the same direction.
    pub fn compare(&self, a: &Product, b: &Product) -> CmpOrdering {
        let primary = match self.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::StockQty => a.stock_qty.cmp(&b.stock_qty),
            SortField::LeadTimeDays => a.lead_time_days.cmp(&b.lead_time_days),
            SortField::CapacityGb => a.capacity_gb.cmp(&b.capacity_gb),
            SortField::SpeedMt => a.speed_mt.cmp(&b.speed_mt),
        };
        let ordering = primary.then_with(|| a.id.cmp(&b.id));
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Sort key accepted in the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "&'static str")]
pub enum SortKey {
    #[default]
    Recommended,
    StockDesc,
    LeadAsc,
    CapacityDesc,
    SpeedDesc,
}

impl SortKey {
    /// Every key in display order, default first.
    pub const ALL: [SortKey; 5] = [
        SortKey::Recommended,
        SortKey::StockDesc,
        SortKey::LeadAsc,
        SortKey::CapacityDesc,
        SortKey::SpeedDesc,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::StockDesc => "stock-desc",
            SortKey::LeadAsc => "lead-asc",
            SortKey::CapacityDesc => "cap-desc",
            SortKey::SpeedDesc => "speed-desc",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Recommended => "Recommended",
            SortKey::StockDesc => "Most in stock",
            SortKey::LeadAsc => "Shortest lead time",
            SortKey::CapacityDesc => "Largest capacity",
            SortKey::SpeedDesc => "Fastest",
        }
    }

    /// Resolves a raw key; unknown or missing keys fall back to the default.
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(|key| Self::ALL.into_iter().find(|option| option.as_str() == key))
            .unwrap_or_default()
    }

    pub const fn ordering(self) -> Ordering {
        match self {
            SortKey::Recommended => Ordering::new(SortField::CreatedAt, Direction::Desc),
            SortKey::StockDesc => Ordering::new(SortField::StockQty, Direction::Desc),
            SortKey::LeadAsc => Ordering::new(SortField::LeadTimeDays, Direction::Asc),
            SortKey::CapacityDesc => Ordering::new(SortField::CapacityGb, Direction::Desc),
            SortKey::SpeedDesc => Ordering::new(SortField::SpeedMt, Direction::Desc),
        }
    }
}

impl From<SortKey> for &'static str {
    fn from(key: SortKey) -> Self {
        key.as_str()
    }
}

/// Entry of the sort selector exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// All sort options in display order.
pub fn sort_options() -> Vec<SortOption> {
    SortKey::ALL
        .into_iter()
        .map(|key| SortOption {
            value: key.as_str(),
            label: key.label(),
        })
        .collect()
}

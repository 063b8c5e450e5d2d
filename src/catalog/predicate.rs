//! Storage predicate compiled from a [`ProductFilter`].

use crate::catalog::filter::{Bounds, ProductFilter};
use crate::domain::product::{FormFactor, MemoryType, Product, ProductStatus};

/// A single field constraint. Set variants never hold an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    ManufacturerIn(Vec<String>),
    StatusIn(Vec<ProductStatus>),
    MemoryTypeIn(Vec<MemoryType>),
    FormFactorIn(Vec<FormFactor>),
    CapacityIn(Vec<i32>),
    /// Inclusive; at least one bound is present.
    CapacityBetween(Bounds),
    /// Inclusive; at least one bound is present.
    SpeedBetween(Bounds),
    Ecc(bool),
    /// `stock_qty > 0`.
    InStock,
    /// `stock_qty <= n`.
    StockAtMost(i32),
}

impl Constraint {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Constraint::ManufacturerIn(values) => {
                values.iter().any(|v| v == product.manufacturer.as_str())
            }
            Constraint::StatusIn(values) => values.contains(&product.status),
            Constraint::MemoryTypeIn(values) => values.contains(&product.memory_type),
            Constraint::FormFactorIn(values) => values.contains(&product.form_factor),
            Constraint::CapacityIn(values) => values.contains(&product.capacity_gb.get()),
            Constraint::CapacityBetween(bounds) => bounds.contains(product.capacity_gb.get()),
            Constraint::SpeedBetween(bounds) => bounds.contains(product.speed_mt.get()),
            Constraint::Ecc(ecc) => product.ecc == *ecc,
            Constraint::InStock => product.stock_qty > 0,
            Constraint::StockAtMost(max) => product.stock_qty <= *max,
        }
    }
}

/// Conjunction of constraints; with no constraints it matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPredicate {
    constraints: Vec<Constraint>,
}

impl ProductPredicate {
    /// Predicate matching every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds a constraint, skipping set constraints with nothing in them and
    /// ranges without bounds.
    pub fn and(mut self, constraint: Constraint) -> Self {
        let meaningful = match &constraint {
            Constraint::ManufacturerIn(v) => !v.is_empty(),
            Constraint::StatusIn(v) => !v.is_empty(),
            Constraint::MemoryTypeIn(v) => !v.is_empty(),
            Constraint::FormFactorIn(v) => !v.is_empty(),
            Constraint::CapacityIn(v) => !v.is_empty(),
            Constraint::CapacityBetween(b) | Constraint::SpeedBetween(b) => !b.is_open(),
            Constraint::Ecc(_) | Constraint::InStock | Constraint::StockAtMost(_) => true,
        };
        if meaningful {
            self.constraints.push(constraint);
        }
        self
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Evaluates the predicate against an in-memory product.
    pub fn matches(&self, product: &Product) -> bool {
        self.constraints.iter().all(|c| c.matches(product))
    }
}

/// Compiles a validated filter into a storage predicate.
pub fn compile(filter: &ProductFilter) -> ProductPredicate {
    let mut predicate = ProductPredicate::all()
        .and(Constraint::ManufacturerIn(filter.manufacturers.clone()))
        .and(Constraint::StatusIn(filter.statuses.clone()))
        .and(Constraint::MemoryTypeIn(filter.memory_types.clone()))
        .and(Constraint::FormFactorIn(filter.form_factors.clone()));

    predicate = if filter.capacities.is_empty() {
        predicate.and(Constraint::CapacityBetween(filter.capacity))
    } else {
        predicate.and(Constraint::CapacityIn(filter.capacities.clone()))
    };

    predicate = predicate.and(Constraint::SpeedBetween(filter.speed));

    if let Some(ecc) = filter.ecc {
        predicate = predicate.and(Constraint::Ecc(ecc));
    }
    if filter.in_stock_only {
        predicate = predicate.and(Constraint::InStock);
    }

    predicate
}

//! Domain aggregates exposed by the storefront service layer.

pub mod lead;
pub mod product;
pub mod types;

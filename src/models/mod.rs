//! Diesel models for the storefront tables and the server configuration.

pub mod config;
pub mod lead;
pub mod product;

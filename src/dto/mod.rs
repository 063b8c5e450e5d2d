//! Response bodies produced by the services.

pub mod admin;
pub mod api;

//! Storefront checkout client: catalogue, API client and checkout flows.

pub mod api;
pub mod catalog;
pub mod checkout;
pub mod errors;
pub mod quote;

//! Vitrine Domain Concerns

pub mod access;
pub mod orders;
pub mod quotes;

//! Course access grants

pub mod records;
pub mod repository;

pub use repository::*;

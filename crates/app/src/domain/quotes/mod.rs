//! Quote requests

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::QuotesServiceError;
pub use repository::*;
pub use service::*;

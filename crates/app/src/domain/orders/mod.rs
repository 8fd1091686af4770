//! Orders

pub mod amount;
pub mod data;
pub mod errors;
pub mod payment;
pub mod records;
pub mod repository;
pub mod service;
pub mod settlement;

pub use errors::OrdersServiceError;
pub use repository::*;
pub use service::*;
pub use settlement::*;

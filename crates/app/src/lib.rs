//! Shared application domain and storage modules.

pub mod clock;
pub mod context;
pub mod domain;
pub mod storage;
pub mod tokens;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;

//! Quote Handlers

pub(crate) mod create;

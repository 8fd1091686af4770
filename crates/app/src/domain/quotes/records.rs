//! Quote Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Quote UUID
pub type QuoteUuid = TypedUuid<QuoteRecord>;

/// Quote Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub uuid: QuoteUuid,
    pub email: String,
    pub whatsapp: String,
    pub description: String,
    pub received_at: Timestamp,
}

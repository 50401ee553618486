mod client;
mod record;

pub use client::AirtableClient;
pub use record::{RowFields, RowPayload, RowRecord};

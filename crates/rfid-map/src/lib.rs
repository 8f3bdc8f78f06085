//! Column mapping and TAGG ID lookup for the RFID converter.

mod columns;
mod error;
mod lookup;

pub use columns::{ResolvedColumns, TagColumn, resolve_columns};
pub use error::{MappingError, Result};
pub use lookup::{KEY_CARD_NUMBER_COLUMN, LookupTable, VISIBLE_NUMBER_COLUMN};

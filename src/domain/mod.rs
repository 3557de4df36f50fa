//! Schema-agnostic domain types for database reports.

mod cell;
mod policy;
mod record;
mod summary;

pub use cell::CellValue;
pub use policy::{
    pretty_json, CellDisplay, DisplayPolicy, DEFAULT_JSON_PREVIEW_CHARS, DEFAULT_OPAQUE_COLUMNS,
    DEFAULT_TRUNCATE_AT,
};
pub use record::Record;
pub use summary::{default_entities, EntityCount, GroupColumn, GroupCount, TrackedEntity};

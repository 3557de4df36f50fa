//! Application services (use cases).
//!
//! These services drive the [`DatabaseReader`](crate::port::DatabaseReader)
//! port and render the report text.

pub mod report;

//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The reporter reads through [`DatabaseReader`] so the dump and summary
//! logic stays independent of the SQLite adapter.

pub mod outbound;

pub use outbound::catalog::DatabaseReader;

//! Classwatch Infrastructure Layer
//!
//! SQLite adapters for the application ports, plus pool and schema setup.
pub mod database;
pub mod repositories;

pub use database::{create_pool, init_schema, SchemaMode};
pub use repositories::{
    SqliteDomainBlocklistRepository, SqliteIpBlocklistRepository, SqliteRecordRepository,
};

//! Data models for Rigger

mod nosql;

pub use nosql::{NoSqlDatabase, NOSQL_ENGINE, NOSQL_PRIMARY_KEY, PROVISION_NOSQL};

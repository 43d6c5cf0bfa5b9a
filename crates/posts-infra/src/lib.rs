//! # Posts Infrastructure
//!
//! Concrete implementations of the ports defined in `posts-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL-backed post store via SeaORM
//!
//! Without `postgres` only the in-memory store is built.

pub mod database;
pub mod repository;

pub use database::DatabaseConfig;
pub use repository::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

//! # rollcall-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `rollcall-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Bootstrap the `attendance` table (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `rollcall-app` (for port traits) and `rollcall-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod attendance_repo;
mod error;
mod pool;

pub use attendance_repo::SqliteAttendanceRepository;
pub use error::StorageError;
pub use pool::{Config, Database};

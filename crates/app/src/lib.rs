//! # rollcall-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AttendanceRepository`: insert, read, overwrite, and delete attendance rows
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AttendanceService`: list, create, get, update, delete
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `rollcall-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

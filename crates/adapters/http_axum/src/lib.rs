//! # rollcall-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **attendance JSON API** (`/attendance`, `/attendance/{id}`)
//! - Answer CORS preflight requests and stamp CORS headers on every response
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `rollcall-app` (for port traits and services) and `rollcall-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

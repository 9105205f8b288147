//! # rollcall-domain
//!
//! Pure domain model for the rollcall attendance log.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Attendance records** (a name, a timestamp, a note, and a label payload)
//! - Define **Drafts** (the validated field set written on create and update)
//! - Contain all invariant enforcement and default substitution
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod attendance;

//! windhover - Mission feasibility validation core for autonomous aerial vehicles
//!
//! This crate decides whether a persisted mission can be safely executed by
//! the current vehicle in its current state, and emits a structured reason
//! whenever it cannot. It contains platform-agnostic logic only and can be
//! tested on host without any feature flags.
//!
//! # Design Principles
//!
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: External collaborators (mission storage,
//!   geofence, event sink) injected via traits
//! - **Read-only**: The checker never mutates the mission or persists state
//!   across calls
//!
//! # Modules
//!
//! - [`mission`]: Mission item types, storage access, and the feasibility checker
//! - [`navigation`]: Great-circle geometry shared by all distance checks
//! - [`geofence`]: Geofence containment interface
//! - [`events`]: Typed event records and the event sink interface
//! - [`parameters`]: Parameter store and mission-check parameter definitions
//! - [`vehicle`]: Vehicle state snapshot types

#![no_std]

#[cfg(test)]
extern crate std;

pub mod events;
pub mod geofence;
pub mod logging;
pub mod mission;
pub mod navigation;
pub mod parameters;
pub mod vehicle;

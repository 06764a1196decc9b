//! Parameter management types and utilities
//!
//! Provides the parameter store consumed by the mission checks and the
//! typed loader for mission-check parameters. Persistence and ground
//! station access are platform concerns and live outside this crate.

pub mod error;
pub mod mission;
pub mod storage;

pub use error::ParameterError;
pub use mission::MissionParams;
pub use storage::{ParamFlags, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};

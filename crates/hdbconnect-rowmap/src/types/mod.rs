//! Type definitions for setter parameters and temporal conversion.
//!
//! - [`param`] - Declared setter parameter types
//! - [`temporal`] - Calendar conversion and HANA temporal parsing

pub mod param;
pub(crate) mod temporal;

pub use param::{ParamKind, ParamType};

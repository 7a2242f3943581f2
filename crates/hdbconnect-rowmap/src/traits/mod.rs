//! Trait definitions for row mapping.
//!
//! This module contains the core trait hierarchy:
//!
//! - [`sealed`] - Sealed conversion from column values to setter parameters
//! - [`row`] - Row access abstraction supplied by the database layer
//! - [`mapping`] - Target registration and the per-row callback seam

pub mod mapping;
pub mod row;
pub mod sealed;

pub use mapping::{MapRow, Mappable};
pub use row::RowSource;
pub use sealed::FromColumn;

//! Name-convention row mapping for the hdbconnect SAP HANA driver.
//!
//! Maps each result row into a plain Rust struct by matching upper-snake-case
//! column labels (`USER_ID`) to camel-case setters (`setUserId`). Setters are
//! declared once per type; the mapper is then used as a per-row callback by
//! whatever code iterates the result set.
//!
//! # Features
//!
//! - Case-insensitive `COLUMN_NAME` -> `setColumnName` lookup
//! - Inherited setters through embedded ancestor structs, at any depth
//! - Lossless numeric widening, checked narrowing, date/datetime conversion
//! - NULL skips non-nullable setters, reaches `Option<_>` setters as `None`
//! - Per-row failures reported to an injected sink, never returned
//!
//! # Example
//!
//! ```
//! use hdbconnect_rowmap::{OwnedRow, RowMapper, mappable};
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     user_id: i64,
//!     user_name: String,
//! }
//!
//! mappable!(User {
//!     setUserId => user_id: i64,
//!     setUserName => user_name: String,
//! });
//!
//! let mapper = RowMapper::<User>::new();
//! let row = OwnedRow::new()
//!     .with("USER_ID", 42i64)
//!     .with("USER_NAME", "Alice")
//!     .with("EXTRA_COL", "ignored");
//!
//! let user = mapper.map_row(&row, 0).unwrap();
//! assert_eq!(user.user_id, 42);
//! assert_eq!(user.user_name, "Alice");
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod hana;
pub mod index;
mod macros;
pub mod mapper;
pub mod naming;
pub mod row;
pub mod traits;
pub mod types;
pub mod value;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main types for convenience
pub use error::{MapperError, Result};
pub use hana::{HanaRow, column_value_from_hana};
pub use index::{Applied, ColumnBinding, Setter, SetterIndex, SetterRegistry};
pub use mapper::{
    ColumnErrorPolicy, InstanceMapper, MapperConfig, RowErrorSink, RowFailure, RowMapper,
    RowStats, TracingSink,
};
pub use row::OwnedRow;
pub use traits::mapping::{MapRow, Mappable};
pub use traits::row::RowSource;
pub use traits::sealed::FromColumn;
pub use types::param::{ParamKind, ParamType};
pub use value::ColumnValue;

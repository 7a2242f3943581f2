//! Error hierarchy for hdbconnect-rowmap.
//!
//! Follows the "canonical error struct" pattern from Microsoft Rust Guidelines.
//! Exposes `is_xxx()` methods rather than internal `ErrorKind` for future-proofing.

use thiserror::Error;

/// Root error type for hdbconnect-rowmap crate.
///
/// Construction failures are returned to the caller that builds a mapper.
/// Every other kind is produced while mapping a single row and is handed to a
/// [`RowErrorSink`](crate::RowErrorSink) instead of being returned.
///
/// # Example
///
/// ```rust,ignore
/// use hdbconnect_rowmap::MapperError;
///
/// fn handle_error(err: &MapperError) {
///     if err.is_type_mismatch() {
///         eprintln!("column value does not fit the setter");
///     } else if err.is_instantiation() {
///         eprintln!("target could not be created");
///     }
/// }
/// ```
#[derive(Error, Debug, Clone)]
#[error("{kind}")]
pub struct MapperError {
    kind: ErrorKind,
}

/// Internal error classification.
///
/// This enum is `pub(crate)` to allow adding variants without breaking changes.
/// External code should use the `is_xxx()` predicate methods instead.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub(crate) enum ErrorKind {
    /// The target type could not be instantiated.
    #[error("failed to create instance of {type_name}: {message}")]
    Instantiation { type_name: String, message: String },

    /// Column count or label could not be read.
    #[error("column metadata unavailable at index {index}: {message}")]
    ColumnMetadata { index: usize, message: String },

    /// The raw value of a column could not be read.
    #[error("value extraction failed for column '{column}': {message}")]
    ValueExtraction { column: String, message: String },

    /// The column value cannot be passed to the setter parameter.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// The value has the right family but does not fit the parameter.
    #[error("value out of range for {target}: {value}")]
    ValueOutOfRange { target: &'static str, value: String },

    /// The setter itself rejected the value.
    #[error("setter {setter} failed: {message}")]
    SetterInvocation { setter: String, message: String },

    /// Error from hdbconnect library.
    #[error("hdbconnect error: {0}")]
    Hdbconnect(String),
}

impl MapperError {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create error for a failed target instantiation.
    #[must_use]
    pub fn instantiation(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Instantiation {
                type_name: type_name.into(),
                message: message.into(),
            },
        }
    }

    /// Create error for unreadable column metadata.
    #[must_use]
    pub fn column_metadata(index: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ColumnMetadata {
                index,
                message: message.into(),
            },
        }
    }

    /// Create error for a column value that could not be read.
    #[must_use]
    pub fn value_extraction(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ValueExtraction {
                column: column.into(),
                message: message.into(),
            },
        }
    }

    /// Create error for a value whose type does not match the setter parameter.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, actual: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch {
                expected,
                actual: actual.into(),
            },
        }
    }

    /// Create error for a value outside the parameter's range.
    #[must_use]
    pub fn value_out_of_range(target: &'static str, value: impl ToString) -> Self {
        Self {
            kind: ErrorKind::ValueOutOfRange {
                target,
                value: value.to_string(),
            },
        }
    }

    /// Create error for a setter that rejected its value.
    #[must_use]
    pub fn setter_invocation(setter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::SetterInvocation {
                setter: setter.into(),
                message: message.into(),
            },
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Predicate Methods (is_xxx)
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns true if this is an instantiation error.
    #[must_use]
    pub const fn is_instantiation(&self) -> bool {
        matches!(self.kind, ErrorKind::Instantiation { .. })
    }

    /// Returns true if this is a column metadata error.
    #[must_use]
    pub const fn is_column_metadata(&self) -> bool {
        matches!(self.kind, ErrorKind::ColumnMetadata { .. })
    }

    /// Returns true if this is a value extraction error.
    #[must_use]
    pub const fn is_value_extraction(&self) -> bool {
        matches!(self.kind, ErrorKind::ValueExtraction { .. })
    }

    /// Returns true if this is a type mismatch error.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    /// Returns true if this is a value out of range error.
    #[must_use]
    pub const fn is_value_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::ValueOutOfRange { .. })
    }

    /// Returns true if this is a setter invocation error.
    #[must_use]
    pub const fn is_setter_invocation(&self) -> bool {
        matches!(self.kind, ErrorKind::SetterInvocation { .. })
    }

    /// Returns true if this is an hdbconnect error.
    #[must_use]
    pub const fn is_hdbconnect_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Hdbconnect(_))
    }

    /// Returns true if this error belongs to a single row and is suppressed
    /// at the row boundary.
    #[must_use]
    pub const fn is_row_error(&self) -> bool {
        !self.is_instantiation()
    }
}

impl From<hdbconnect::HdbError> for MapperError {
    fn from(err: hdbconnect::HdbError) -> Self {
        Self {
            kind: ErrorKind::Hdbconnect(err.to_string()),
        }
    }
}

/// Result type alias for row mapping operations.
pub type Result<T> = std::result::Result<T, MapperError>;

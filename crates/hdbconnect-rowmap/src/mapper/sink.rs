//! Reporting of per-row failures.
//!
//! Row failures never leave `map_row`. They are handed to an injected
//! [`RowErrorSink`]; the default [`TracingSink`] turns each one into a single
//! `warn` event.

use std::fmt;

use crate::error::MapperError;

/// A failure caught while mapping one row.
#[derive(Debug, Clone)]
pub struct RowFailure {
    row_number: usize,
    column_index: Option<usize>,
    column: Option<String>,
    setter: Option<String>,
    error: MapperError,
}

impl RowFailure {
    /// Failure that concerns the row as a whole (e.g. unreadable column count).
    #[must_use]
    pub const fn row(row_number: usize, error: MapperError) -> Self {
        Self {
            row_number,
            column_index: None,
            column: None,
            setter: None,
            error,
        }
    }

    /// Failure at a specific column.
    #[must_use]
    pub const fn column(row_number: usize, column_index: usize, error: MapperError) -> Self {
        Self {
            row_number,
            column_index: Some(column_index),
            column: None,
            setter: None,
            error,
        }
    }

    #[must_use]
    pub(crate) fn with_label(mut self, label: &str) -> Self {
        self.column = Some(label.to_string());
        self
    }

    #[must_use]
    pub(crate) fn with_setter(mut self, setter: &str) -> Self {
        self.setter = Some(setter.to_string());
        self
    }

    /// 0-based number of the row within the result set.
    #[must_use]
    pub const fn row_number(&self) -> usize {
        self.row_number
    }

    /// 1-based index of the failing column, if the failure is column-scoped.
    #[must_use]
    pub const fn column_index(&self) -> Option<usize> {
        self.column_index
    }

    /// Label of the failing column, if it could be read.
    #[must_use]
    pub fn column_label(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Name of the setter involved, if one was resolved.
    #[must_use]
    pub fn setter(&self) -> Option<&str> {
        self.setter.as_deref()
    }

    /// The underlying error.
    #[must_use]
    pub const fn error(&self) -> &MapperError {
        &self.error
    }
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.row_number)?;
        if let Some(index) = self.column_index {
            write!(f, ", column {index}")?;
        }
        if let Some(label) = &self.column {
            write!(f, " ({label})")?;
        }
        if let Some(setter) = &self.setter {
            write!(f, " -> {setter}")?;
        }
        write!(f, ": {}", self.error)
    }
}

/// Receiver of per-row failures.
pub trait RowErrorSink: Send + Sync {
    /// Record one failure. Must not panic.
    fn report(&self, failure: &RowFailure);
}

/// Sink that logs every failure as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RowErrorSink for TracingSink {
    fn report(&self, failure: &RowFailure) {
        tracing::warn!("{failure}");
    }
}

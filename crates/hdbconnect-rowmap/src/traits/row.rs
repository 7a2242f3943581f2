//! Row access abstraction.
//!
//! The database layer owns result-set iteration. For each row it hands the
//! mapper something implementing [`RowSource`]; the mapper never advances a
//! cursor itself.

use std::borrow::Cow;

use crate::Result;
use crate::value::ColumnValue;

/// Read access to a single result row.
///
/// All indices are 1-based, matching SQL column numbering.
///
/// # Example
///
/// ```rust,ignore
/// impl RowSource for MyDriverRow {
///     fn column_count(&self) -> Result<usize> {
///         Ok(self.values.len())
///     }
///
///     fn column_label(&self, index: usize) -> Result<Cow<'_, str>> {
///         Ok(Cow::Borrowed(&self.names[index - 1]))
///     }
///
///     fn value(&self, index: usize) -> Result<ColumnValue> {
///         Ok(self.values[index - 1].clone())
///     }
/// }
/// ```
pub trait RowSource {
    /// Number of columns in the row.
    ///
    /// # Errors
    ///
    /// Returns a column metadata error if the count cannot be determined.
    fn column_count(&self) -> Result<usize>;

    /// Label of the column at `index`: the alias when one was given in the
    /// query, otherwise the column name.
    ///
    /// # Errors
    ///
    /// Returns a column metadata error for an unknown index.
    fn column_label(&self, index: usize) -> Result<Cow<'_, str>>;

    /// Raw value of the column at `index`.
    ///
    /// # Errors
    ///
    /// Returns a value extraction error if the value cannot be read.
    fn value(&self, index: usize) -> Result<ColumnValue>;
}

impl<R: RowSource + ?Sized> RowSource for &R {
    fn column_count(&self) -> Result<usize> {
        (**self).column_count()
    }

    fn column_label(&self, index: usize) -> Result<Cow<'_, str>> {
        (**self).column_label(index)
    }

    fn value(&self, index: usize) -> Result<ColumnValue> {
        (**self).value(index)
    }
}

/// Convert a 1-based column index to a 0-based offset, checking bounds.
pub(crate) fn offset(index: usize, len: usize) -> Result<usize> {
    match index.checked_sub(1) {
        Some(offset) if offset < len => Ok(offset),
        _ => Err(crate::MapperError::column_metadata(
            index,
            format!("index out of bounds for a row of {len} columns"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 3).unwrap(), 0);
        assert_eq!(offset(3, 3).unwrap(), 2);
        assert!(offset(0, 3).unwrap_err().is_column_metadata());
        assert!(offset(4, 3).unwrap_err().is_column_metadata());
    }

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn RowSource) {}
}

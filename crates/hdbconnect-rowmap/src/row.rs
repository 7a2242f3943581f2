//! Detached in-memory rows.

use std::borrow::Cow;

use crate::Result;
use crate::traits::row::{RowSource, offset};
use crate::value::ColumnValue;

/// A row held entirely in memory as `(label, value)` pairs.
///
/// Useful for rows that have already been copied out of a driver, and for
/// tests.
///
/// ```
/// use hdbconnect_rowmap::{ColumnValue, OwnedRow, RowSource};
///
/// let row = OwnedRow::new().with("USER_ID", 42i64).with("USER_NAME", "Alice");
/// assert_eq!(row.column_count().unwrap(), 2);
/// assert_eq!(row.value(1).unwrap(), ColumnValue::BigInt(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnedRow {
    columns: Vec<(String, ColumnValue)>,
}

impl OwnedRow {
    /// Create an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append a column, builder style.
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<ColumnValue>) -> Self {
        self.push(label, value);
        self
    }

    /// Append a column.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<ColumnValue>) {
        self.columns.push((label.into(), value.into()));
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(label, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnValue)> {
        self.columns.iter().map(|(label, value)| (label.as_str(), value))
    }
}

impl<L: Into<String>, V: Into<ColumnValue>> FromIterator<(L, V)> for OwnedRow {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        }
    }
}

impl RowSource for OwnedRow {
    fn column_count(&self) -> Result<usize> {
        Ok(self.columns.len())
    }

    fn column_label(&self, index: usize) -> Result<Cow<'_, str>> {
        let i = offset(index, self.columns.len())?;
        Ok(Cow::Borrowed(self.columns[i].0.as_str()))
    }

    fn value(&self, index: usize) -> Result<ColumnValue> {
        let i = offset(index, self.columns.len())?;
        Ok(self.columns[i].1.clone())
    }
}

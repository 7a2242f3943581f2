//! [`RowSource`] adapter for hdbconnect rows.
//!
//! A `hdbconnect::Row` does not carry column labels on its own, so
//! [`HanaRow`] pairs it with the result set's field metadata.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::Result;
use crate::error::MapperError;
use crate::traits::row::{RowSource, offset};
use crate::types::temporal;
use crate::value::ColumnValue;

/// A HANA result row together with its column metadata.
///
/// # Example
///
/// ```rust,ignore
/// use hdbconnect_rowmap::{HanaRow, RowMapper};
///
/// let result_set = connection.query("SELECT USER_ID, USER_NAME FROM USERS")?;
/// let metadata = result_set.metadata();
/// let mapper = RowMapper::<User>::new();
///
/// for (n, row) in result_set.into_rows()?.enumerate() {
///     let user = mapper.map_row(&HanaRow::new(&metadata, &row), n)?;
/// }
/// ```
#[derive(Clone, Copy)]
pub struct HanaRow<'a> {
    metadata: &'a [hdbconnect::FieldMetadata],
    row: &'a hdbconnect::Row,
}

impl fmt::Debug for HanaRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.metadata.iter().map(field_label).collect();
        f.debug_struct("HanaRow")
            .field("columns", &labels)
            .field("values", &self.row.len())
            .finish()
    }
}

impl<'a> HanaRow<'a> {
    /// Pair `row` with the field metadata of its result set.
    #[must_use]
    pub const fn new(metadata: &'a [hdbconnect::FieldMetadata], row: &'a hdbconnect::Row) -> Self {
        Self { metadata, row }
    }
}

impl RowSource for HanaRow<'_> {
    fn column_count(&self) -> Result<usize> {
        Ok(self.row.len())
    }

    fn column_label(&self, index: usize) -> Result<Cow<'_, str>> {
        let i = offset(index, self.metadata.len())?;
        Ok(Cow::Borrowed(field_label(&self.metadata[i])))
    }

    fn value(&self, index: usize) -> Result<ColumnValue> {
        let i = offset(index, self.row.len())?;
        column_value_from_hana(&self.row[i]).map_err(|e| {
            let column = self.metadata.get(i).map_or("?", field_label);
            MapperError::value_extraction(column, e.to_string())
        })
    }
}

fn field_label(field: &hdbconnect::FieldMetadata) -> &str {
    label_or_name(field.displayname(), field.columnname())
}

/// Alias when the query gave one, otherwise the column name.
fn label_or_name<'a>(display: &'a str, column: &'a str) -> &'a str {
    if display.is_empty() { column } else { display }
}

/// Convert a HANA value to a [`ColumnValue`].
///
/// # Errors
///
/// Returns a value extraction error for LOB handles, spatial values and
/// temporal values whose display form cannot be parsed.
pub fn column_value_from_hana(value: &hdbconnect::HdbValue) -> Result<ColumnValue> {
    use hdbconnect::HdbValue;

    match value {
        HdbValue::NULL => Ok(ColumnValue::Null),
        HdbValue::BOOLEAN(v) => Ok(ColumnValue::Boolean(*v)),
        HdbValue::TINYINT(v) => Ok(ColumnValue::TinyInt(*v)),
        HdbValue::SMALLINT(v) => Ok(ColumnValue::SmallInt(*v)),
        HdbValue::INT(v) => Ok(ColumnValue::Int(*v)),
        HdbValue::BIGINT(v) => Ok(ColumnValue::BigInt(*v)),
        HdbValue::REAL(v) => Ok(ColumnValue::Real(*v)),
        HdbValue::DOUBLE(v) => Ok(ColumnValue::Double(*v)),
        // hdbconnect's BigDecimal may come from a different bigdecimal release
        HdbValue::DECIMAL(d) => {
            let text = d.to_string();
            BigDecimal::from_str(&text)
                .map(ColumnValue::Decimal)
                .map_err(|e| MapperError::value_extraction("decimal", format!("{text}: {e}")))
        }
        HdbValue::STRING(s) => Ok(ColumnValue::String(s.clone())),
        HdbValue::BINARY(b) => Ok(ColumnValue::Binary(b.clone())),
        HdbValue::DAYDATE(dd) => temporal::parse_hana_date(&dd.to_string()).map(ColumnValue::Date),
        HdbValue::SECONDTIME(st) => {
            temporal::parse_hana_time(&st.to_string()).map(ColumnValue::Time)
        }
        HdbValue::SECONDDATE(sd) => {
            temporal::parse_hana_datetime(&sd.to_string()).map(ColumnValue::Timestamp)
        }
        HdbValue::LONGDATE(ld) => {
            temporal::parse_hana_datetime(&ld.to_string()).map(ColumnValue::Timestamp)
        }
        // Note: LOB handles are handled differently in hdbconnect 0.32+
        other => Err(MapperError::value_extraction(
            "value",
            format!("unsupported HANA value: {other:?}"),
        )),
    }
}

//! Natively-typed column values.
//!
//! A [`ColumnValue`] is what a [`RowSource`](crate::RowSource) hands out for a
//! single cell, before any conversion towards a setter parameter.

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// The raw value of one column in one row.
///
/// Variants follow the SQL type families of SAP HANA. `Null` is the absence
/// marker for every type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// SQL NULL.
    Null,
    /// BOOLEAN.
    Boolean(bool),
    /// TINYINT (unsigned in HANA).
    TinyInt(u8),
    /// SMALLINT.
    SmallInt(i16),
    /// INTEGER.
    Int(i32),
    /// BIGINT.
    BigInt(i64),
    /// REAL.
    Real(f32),
    /// DOUBLE.
    Double(f64),
    /// DECIMAL / SMALLDECIMAL.
    Decimal(BigDecimal),
    /// Character types (VARCHAR, NVARCHAR, SHORTTEXT, ...).
    String(String),
    /// Binary types (VARBINARY, BINARY).
    Binary(Vec<u8>),
    /// DAYDATE.
    Date(NaiveDate),
    /// SECONDTIME.
    Time(NaiveTime),
    /// LONGDATE / SECONDDATE.
    Timestamp(NaiveDateTime),
}

impl ColumnValue {
    /// Returns true for the absence marker.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for date, time and timestamp values.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date(_) | Self::Time(_) | Self::Timestamp(_))
    }

    /// SQL-flavoured name of the variant, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Boolean(_) => "BOOLEAN",
            Self::TinyInt(_) => "TINYINT",
            Self::SmallInt(_) => "SMALLINT",
            Self::Int(_) => "INTEGER",
            Self::BigInt(_) => "BIGINT",
            Self::Real(_) => "REAL",
            Self::Double(_) => "DOUBLE",
            Self::Decimal(_) => "DECIMAL",
            Self::String(_) => "VARCHAR",
            Self::Binary(_) => "VARBINARY",
            Self::Date(_) => "DATE",
            Self::Time(_) => "TIME",
            Self::Timestamp(_) => "TIMESTAMP",
        }
    }

    /// Short description for mismatch messages: the type, plus the value for
    /// scalars. Binary payloads are summarised by length.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Binary(b) => format!("VARBINARY({} bytes)", b.len()),
            Self::String(s) => format!("VARCHAR({s:?})"),
            Self::Decimal(d) => format!("DECIMAL({d})"),
            other => format!("{}({})", other.type_name(), other.scalar_text()),
        }
    }

    fn scalar_text(&self) -> String {
        match self {
            Self::Boolean(v) => v.to_string(),
            Self::TinyInt(v) => v.to_string(),
            Self::SmallInt(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::BigInt(v) => v.to_string(),
            Self::Real(v) => v.to_string(),
            Self::Double(v) => v.to_string(),
            Self::Date(v) => v.to_string(),
            Self::Time(v) => v.to_string(),
            Self::Timestamp(v) => v.to_string(),
            _ => String::new(),
        }
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ColumnValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_native! {
    bool => Boolean,
    u8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    f32 => Real,
    f64 => Double,
    BigDecimal => Decimal,
    String => String,
    Vec<u8> => Binary,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp,
}

impl From<&str> for ColumnValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for ColumnValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_from_option() {
        let v: ColumnValue = Option::<i64>::None.into();
        assert!(v.is_null());
        let v: ColumnValue = Some(7i64).into();
        assert_eq!(v, ColumnValue::BigInt(7));
    }

    #[test]
    fn test_is_temporal() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(ColumnValue::Date(date).is_temporal());
        assert!(!ColumnValue::Int(1).is_temporal());
        assert!(!ColumnValue::Null.is_temporal());
    }

    #[test]
    fn test_describe() {
        assert_eq!(ColumnValue::Int(42).describe(), "INTEGER(42)");
        assert_eq!(ColumnValue::from("abc").describe(), "VARCHAR(\"abc\")");
        assert_eq!(ColumnValue::Binary(vec![1, 2, 3]).describe(), "VARBINARY(3 bytes)");
        assert_eq!(ColumnValue::Null.describe(), "NULL");
    }
}

//! Sealed trait pattern for API evolution without breaking changes.
//!
//! External code can USE these traits but CANNOT implement them.
//! This allows adding methods to traits without breaking downstream crates.
//!
//! [`FromColumn`] decides which column values a setter parameter accepts:
//! lossless widening always succeeds, narrowing succeeds when the value fits,
//! everything else is a type mismatch.
//!
//! Floats are the one place where precision may be given up. A `DECIMAL`
//! converts to `f32`/`f64` with rounding (the column type already declares an
//! approximate target), and a `DOUBLE` converts to `f32` the same way. A
//! result that overflows to infinity is out of range. Integer columns wider
//! than the float mantissa (`BIGINT` into `f64`, `INT` into `f32`) are
//! rejected, since a silently rounded id is never what the caller meant.

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::Result;
use crate::error::MapperError;
use crate::types::param::{ParamKind, ParamType};
use crate::types::temporal;
use crate::value::ColumnValue;

/// Private module that external crates cannot access.
///
/// This module is `pub(crate)` so that implementations can be provided
/// within this crate, but external crates cannot see or implement `Sealed`.
pub(crate) mod private {
    /// Marker trait that seals the public traits.
    ///
    /// Implementations are only provided within this crate.
    /// External crates cannot implement this trait because the module is private.
    pub trait Sealed {}
}

/// Types a setter parameter can be declared as.
///
/// This trait is sealed - external implementations are not allowed.
/// Wrap a type in `Option<_>` to make the parameter nullable.
///
/// # Sealed
///
/// This trait requires implementing [`private::Sealed`], which is not
/// accessible outside this crate.
pub trait FromColumn: private::Sealed + Sized + 'static {
    /// Declared parameter type recorded in the setter index.
    fn param_type() -> ParamType;

    /// Convert a non-null column value to the parameter type.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch or out-of-range error if the value cannot be
    /// represented.
    fn from_column(value: &ColumnValue) -> Result<Self>;

    /// Value handed to the setter for a NULL column.
    ///
    /// `None` means the setter is not invoked.
    fn from_null() -> Option<Self> {
        None
    }
}

impl<T: FromColumn> private::Sealed for Option<T> {}
impl<T: FromColumn> FromColumn for Option<T> {
    fn param_type() -> ParamType {
        ParamType::nullable(T::param_type().kind())
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        T::from_column(value).map(Some)
    }

    fn from_null() -> Option<Self> {
        Some(None)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Integers
// ═══════════════════════════════════════════════════════════════════════════

/// Widen any integer-valued column to `i128`.
///
/// Decimals qualify when they carry no fractional part.
fn integer_value(target: &'static str, value: &ColumnValue) -> Result<i128> {
    match value {
        ColumnValue::TinyInt(v) => Ok(i128::from(*v)),
        ColumnValue::SmallInt(v) => Ok(i128::from(*v)),
        ColumnValue::Int(v) => Ok(i128::from(*v)),
        ColumnValue::BigInt(v) => Ok(i128::from(*v)),
        ColumnValue::Decimal(d) if d.is_integer() => d
            .to_i128()
            .ok_or_else(|| MapperError::value_out_of_range(target, d)),
        other => Err(MapperError::type_mismatch(target, other.describe())),
    }
}

macro_rules! impl_from_column_integer {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl FromColumn for $ty {
                fn param_type() -> ParamType {
                    ParamType::required(ParamKind::$kind)
                }

                fn from_column(value: &ColumnValue) -> Result<Self> {
                    let target = ParamKind::$kind.rust_name();
                    let wide = integer_value(target, value)?;
                    Self::try_from(wide).map_err(|_| MapperError::value_out_of_range(target, wide))
                }
            }
        )*
    };
}

impl_from_column_integer! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

/// Reject a float conversion that overflowed to infinity.
fn finite<F: num_traits::Float>(target: &'static str, source: impl ToString, result: F) -> Result<F> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(MapperError::value_out_of_range(target, source))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Floating point
// ═══════════════════════════════════════════════════════════════════════════

impl private::Sealed for f32 {}
impl FromColumn for f32 {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::F32)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::Real(v) => Ok(*v),
            #[allow(clippy::cast_possible_truncation)]
            ColumnValue::Double(v) => {
                let narrowed = *v as Self;
                if v.is_finite() {
                    finite("f32", v, narrowed)
                } else {
                    Ok(narrowed)
                }
            }
            ColumnValue::TinyInt(v) => Ok(Self::from(*v)),
            ColumnValue::SmallInt(v) => Ok(Self::from(*v)),
            ColumnValue::Decimal(d) => d
                .to_f32()
                .ok_or_else(|| MapperError::value_out_of_range("f32", d))
                .and_then(|f| finite("f32", d, f)),
            other => Err(MapperError::type_mismatch("f32", other.describe())),
        }
    }
}

impl private::Sealed for f64 {}
impl FromColumn for f64 {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::F64)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::Real(v) => Ok(Self::from(*v)),
            ColumnValue::Double(v) => Ok(*v),
            ColumnValue::TinyInt(v) => Ok(Self::from(*v)),
            ColumnValue::SmallInt(v) => Ok(Self::from(*v)),
            ColumnValue::Int(v) => Ok(Self::from(*v)),
            ColumnValue::Decimal(d) => d
                .to_f64()
                .ok_or_else(|| MapperError::value_out_of_range("f64", d))
                .and_then(|f| finite("f64", d, f)),
            other => Err(MapperError::type_mismatch("f64", other.describe())),
        }
    }
}

impl private::Sealed for BigDecimal {}
impl FromColumn for BigDecimal {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::Decimal)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::Decimal(d) => Ok(d.clone()),
            ColumnValue::TinyInt(v) => Ok(Self::from(*v)),
            ColumnValue::SmallInt(v) => Ok(Self::from(*v)),
            ColumnValue::Int(v) => Ok(Self::from(*v)),
            ColumnValue::BigInt(v) => Ok(Self::from(*v)),
            ColumnValue::Real(v) => {
                Self::from_f32(*v).ok_or_else(|| MapperError::value_out_of_range("BigDecimal", v))
            }
            ColumnValue::Double(v) => {
                Self::from_f64(*v).ok_or_else(|| MapperError::value_out_of_range("BigDecimal", v))
            }
            other => Err(MapperError::type_mismatch("BigDecimal", other.describe())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Boolean, character and binary
// ═══════════════════════════════════════════════════════════════════════════

impl private::Sealed for bool {}
impl FromColumn for bool {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::Bool)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::Boolean(v) => Ok(*v),
            other => Err(MapperError::type_mismatch("bool", other.describe())),
        }
    }
}

impl private::Sealed for String {}
impl FromColumn for String {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::String)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::String(s) => Ok(s.clone()),
            other => Err(MapperError::type_mismatch("String", other.describe())),
        }
    }
}

impl private::Sealed for Vec<u8> {}
impl FromColumn for Vec<u8> {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::Binary)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        match value {
            ColumnValue::Binary(b) => Ok(b.clone()),
            other => Err(MapperError::type_mismatch("Vec<u8>", other.describe())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Temporal
// ═══════════════════════════════════════════════════════════════════════════

impl private::Sealed for NaiveDate {}
impl FromColumn for NaiveDate {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::Date)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        temporal::to_date(value)
    }
}

impl private::Sealed for NaiveTime {}
impl FromColumn for NaiveTime {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::Time)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        temporal::to_time(value)
    }
}

impl private::Sealed for NaiveDateTime {}
impl FromColumn for NaiveDateTime {
    fn param_type() -> ParamType {
        ParamType::required(ParamKind::DateTime)
    }

    fn from_column(value: &ColumnValue) -> Result<Self> {
        temporal::to_datetime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_integer_widening() {
        assert_eq!(i64::from_column(&ColumnValue::TinyInt(7)).unwrap(), 7);
        assert_eq!(i64::from_column(&ColumnValue::Int(-42)).unwrap(), -42);
        assert_eq!(i32::from_column(&ColumnValue::SmallInt(300)).unwrap(), 300);
    }

    #[test]
    fn test_integer_narrowing() {
        assert_eq!(i8::from_column(&ColumnValue::BigInt(-128)).unwrap(), -128);
        let err = i8::from_column(&ColumnValue::Int(300)).unwrap_err();
        assert!(err.is_value_out_of_range());
        let err = u8::from_column(&ColumnValue::SmallInt(-1)).unwrap_err();
        assert!(err.is_value_out_of_range());
    }

    #[test]
    fn test_integer_from_decimal() {
        let whole = BigDecimal::from_str("42").unwrap();
        assert_eq!(i64::from_column(&ColumnValue::Decimal(whole)).unwrap(), 42);

        let fractional = BigDecimal::from_str("4.2").unwrap();
        let err = i64::from_column(&ColumnValue::Decimal(fractional)).unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_integer_from_string_is_mismatch() {
        let err = i64::from_column(&ColumnValue::from("not a number")).unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(err.to_string().contains("i64"));
    }

    #[test]
    fn test_float_conversion() {
        assert!((f64::from_column(&ColumnValue::Real(1.5)).unwrap() - 1.5).abs() < f64::EPSILON);
        assert!((f64::from_column(&ColumnValue::Int(3)).unwrap() - 3.0).abs() < f64::EPSILON);
        assert!(f64::from_column(&ColumnValue::BigInt(3)).is_err());
    }

    #[test]
    fn test_float_overflow_is_out_of_range() {
        let err = f32::from_column(&ColumnValue::Double(1e300)).unwrap_err();
        assert!(err.is_value_out_of_range());

        let huge = BigDecimal::from_str("1e300").unwrap();
        let err = f32::from_column(&ColumnValue::Decimal(huge)).unwrap_err();
        assert!(err.is_value_out_of_range());

        let huger = BigDecimal::from_str("1e400").unwrap();
        let err = f64::from_column(&ColumnValue::Decimal(huger)).unwrap_err();
        assert!(err.is_value_out_of_range());
    }

    #[test]
    fn test_float_narrowing_within_range() {
        let v = f32::from_column(&ColumnValue::Double(0.5)).unwrap();
        assert!((v - 0.5).abs() < f32::EPSILON);
        assert!(f32::from_column(&ColumnValue::Double(f64::INFINITY)).unwrap().is_infinite());
        assert!(f32::from_column(&ColumnValue::Double(f64::NAN)).unwrap().is_nan());

        let d = BigDecimal::from_str("1.25").unwrap();
        assert!((f32::from_column(&ColumnValue::Decimal(d.clone())).unwrap() - 1.25).abs() < f32::EPSILON);
        assert!((f64::from_column(&ColumnValue::Decimal(d)).unwrap() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unsigned_integers() {
        assert_eq!(u16::from_column(&ColumnValue::Int(65_535)).unwrap(), 65_535);
        assert!(u16::from_column(&ColumnValue::Int(65_536)).unwrap_err().is_value_out_of_range());
        assert_eq!(u32::from_column(&ColumnValue::BigInt(4_000_000_000)).unwrap(), 4_000_000_000);
        assert!(u32::from_column(&ColumnValue::SmallInt(-1)).unwrap_err().is_value_out_of_range());
        assert!(u64::from_column(&ColumnValue::BigInt(-1)).unwrap_err().is_value_out_of_range());

        let beyond_i64 = BigDecimal::from_str("18446744073709551615").unwrap();
        assert_eq!(u64::from_column(&ColumnValue::Decimal(beyond_i64)).unwrap(), u64::MAX);
        assert_eq!(u64::param_type(), ParamType::required(ParamKind::U64));
    }

    #[test]
    fn test_decimal_conversion() {
        let d = BigDecimal::from_column(&ColumnValue::BigInt(12)).unwrap();
        assert_eq!(d, BigDecimal::from(12));
        assert!(BigDecimal::from_column(&ColumnValue::from("12")).is_err());
    }

    #[test]
    fn test_string_and_binary() {
        assert_eq!(String::from_column(&ColumnValue::from("Alice")).unwrap(), "Alice");
        assert!(String::from_column(&ColumnValue::Int(1)).is_err());
        assert_eq!(
            Vec::<u8>::from_column(&ColumnValue::Binary(vec![1, 2])).unwrap(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_bool() {
        assert!(bool::from_column(&ColumnValue::Boolean(true)).unwrap());
        assert!(bool::from_column(&ColumnValue::TinyInt(1)).is_err());
    }

    #[test]
    fn test_required_null_skips() {
        assert_eq!(i64::from_null(), None);
        assert_eq!(NaiveDateTime::from_null(), None);
        assert!(!i64::param_type().is_nullable());
    }

    #[test]
    fn test_option_passes_null() {
        assert_eq!(Option::<i64>::from_null(), Some(None));
        assert_eq!(
            Option::<NaiveDateTime>::param_type(),
            ParamType::nullable(ParamKind::DateTime)
        );
        assert_eq!(
            Option::<i32>::from_column(&ColumnValue::Int(5)).unwrap(),
            Some(5)
        );
    }
}

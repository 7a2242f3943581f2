//! Declared setter parameter types.
//!
//! A [`ParamType`] is recorded for every indexed setter at registration time,
//! the way a reflective mapper would read a method's single parameter type.

use std::fmt;

/// Family of a setter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamKind {
    /// `bool`
    Bool,
    /// `i8`
    I8,
    /// `u8`
    U8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `BigDecimal`
    Decimal,
    /// `String`
    String,
    /// `Vec<u8>`
    Binary,
    /// `NaiveDate`
    Date,
    /// `NaiveTime`
    Time,
    /// `NaiveDateTime`
    DateTime,
}

impl ParamKind {
    /// Rust type name of the parameter.
    #[must_use]
    pub const fn rust_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "BigDecimal",
            Self::String => "String",
            Self::Binary => "Vec<u8>",
            Self::Date => "NaiveDate",
            Self::Time => "NaiveTime",
            Self::DateTime => "NaiveDateTime",
        }
    }
}

/// Declared type of a setter's single parameter.
///
/// `nullable == false` marks a parameter that cannot receive an absent value;
/// a NULL column bound to it skips the setter entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamType {
    kind: ParamKind,
    nullable: bool,
}

impl ParamType {
    /// Create a non-nullable parameter type.
    #[must_use]
    pub const fn required(kind: ParamKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    /// Create a nullable (`Option<_>`) parameter type.
    #[must_use]
    pub const fn nullable(kind: ParamKind) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }

    /// Returns the parameter family.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Returns true if the parameter accepts an absent value.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "Option<{}>", self.kind.rust_name())
        } else {
            f.write_str(self.kind.rust_name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ParamType::required(ParamKind::I64).to_string(), "i64");
        assert_eq!(
            ParamType::nullable(ParamKind::DateTime).to_string(),
            "Option<NaiveDateTime>"
        );
    }

    #[test]
    fn test_rust_name() {
        assert_eq!(ParamKind::U64.rust_name(), "u64");
        assert_eq!(ParamKind::Binary.rust_name(), "Vec<u8>");
        assert!(!ParamType::required(ParamKind::Bool).is_nullable());
        assert!(ParamType::nullable(ParamKind::Bool).is_nullable());
    }
}

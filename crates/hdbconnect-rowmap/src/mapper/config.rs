//! Mapper configuration.

use serde::Deserialize;

/// What to do with the rest of a row once one column fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnErrorPolicy {
    /// Report the failing column and keep applying the others.
    #[default]
    SkipColumn,
    /// Report the failing column and leave the remaining columns unapplied.
    AbortRow,
}

/// Configuration for row mapping.
///
/// Deserializable so a host application can embed it in its own config file:
///
/// ```toml
/// [rowmap]
/// on_column_error = "abort_row"
/// trace_unmatched = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Policy applied after a column failure.
    ///
    /// Default: [`ColumnErrorPolicy::SkipColumn`].
    pub on_column_error: ColumnErrorPolicy,

    /// Emit a `trace` event for every column that has no setter.
    ///
    /// Default: false.
    pub trace_unmatched: bool,
}

impl MapperConfig {
    /// Set the column error policy.
    #[must_use]
    pub const fn on_column_error(mut self, policy: ColumnErrorPolicy) -> Self {
        self.on_column_error = policy;
        self
    }

    /// Enable or disable tracing of unmatched columns.
    #[must_use]
    pub const fn trace_unmatched(mut self, enabled: bool) -> Self {
        self.trace_unmatched = enabled;
        self
    }

    /// Keep going after column failures; silent about unmatched columns.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            on_column_error: ColumnErrorPolicy::SkipColumn,
            trace_unmatched: false,
        }
    }

    /// Stop a row at its first failing column and trace unmatched columns.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            on_column_error: ColumnErrorPolicy::AbortRow,
            trace_unmatched: true,
        }
    }
}

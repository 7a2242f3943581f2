//! Name-convention row mappers.
//!
//! Two front-ends share one row loop:
//!
//! - [`RowMapper`] - bound to a type, creates a fresh instance per row
//! - [`InstanceMapper`] - bound to one pre-existing instance
//!
//! For every column the loop derives a setter key from the column label,
//! looks it up in the [`SetterIndex`], converts the value and invokes the
//! setter. Unmatched columns are skipped; failures go to the
//! [`RowErrorSink`] and never leave the row.

pub mod config;
mod instance;
mod row;
pub mod sink;


pub use config::{ColumnErrorPolicy, MapperConfig};
pub use instance::InstanceMapper;
pub use row::RowMapper;
pub use sink::{RowErrorSink, RowFailure, TracingSink};

use crate::index::{Applied, SetterIndex};
use crate::traits::row::RowSource;

/// Per-row counters, mostly useful for tests and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowStats {
    /// Columns whose setter was invoked.
    pub applied: usize,
    /// Columns skipped because a NULL met a non-nullable parameter.
    pub skipped_null: usize,
    /// Columns without a matching setter.
    pub unmatched: usize,
    /// Columns (or whole-row steps) that failed.
    pub failed: usize,
}

/// Shared state every mapper front-end carries.
struct Context<'a, T> {
    index: &'a SetterIndex<T>,
    config: &'a MapperConfig,
    sink: &'a dyn RowErrorSink,
}

enum ColumnOutcome {
    Applied(Applied),
    Unmatched,
}

impl<T> Context<'_, T> {
    /// Apply every column of `row` to `target`.
    fn populate<R: RowSource + ?Sized>(&self, target: &mut T, row: &R, row_number: usize) -> RowStats {
        let mut stats = RowStats::default();

        let count = match row.column_count() {
            Ok(count) => count,
            Err(error) => {
                self.sink.report(&RowFailure::row(row_number, error));
                stats.failed += 1;
                return stats;
            }
        };

        for index in 1..=count {
            match self.map_column(target, row, row_number, index) {
                Ok(ColumnOutcome::Applied(Applied::Invoked)) => stats.applied += 1,
                Ok(ColumnOutcome::Applied(Applied::SkippedNull)) => stats.skipped_null += 1,
                Ok(ColumnOutcome::Unmatched) => stats.unmatched += 1,
                Err(failure) => {
                    self.sink.report(&failure);
                    stats.failed += 1;
                    if self.config.on_column_error == ColumnErrorPolicy::AbortRow {
                        break;
                    }
                }
            }
        }

        stats
    }

    fn map_column<R: RowSource + ?Sized>(
        &self,
        target: &mut T,
        row: &R,
        row_number: usize,
        index: usize,
    ) -> Result<ColumnOutcome, RowFailure> {
        let label = row
            .column_label(index)
            .map_err(|e| RowFailure::column(row_number, index, e))?;

        let binding = self.index.bind(&label);
        let Some(setter) = binding.setter() else {
            if self.config.trace_unmatched {
                tracing::trace!(
                    row = row_number,
                    column = binding.column(),
                    key = binding.key(),
                    "no setter for column"
                );
            }
            return Ok(ColumnOutcome::Unmatched);
        };

        let value = row
            .value(index)
            .map_err(|e| RowFailure::column(row_number, index, e).with_label(&label))?;

        setter
            .apply(target, &value)
            .map(ColumnOutcome::Applied)
            .map_err(|e| {
                RowFailure::column(row_number, index, e)
                    .with_label(&label)
                    .with_setter(setter.name())
            })
    }
}

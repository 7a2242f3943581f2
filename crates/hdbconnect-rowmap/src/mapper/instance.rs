//! Instance-bound mapper: every row lands in the same pre-existing target.
//!
//! Intended for queries returning at most one row. Mapping more rows is not
//! detected; each call mutates the same instance again.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use super::{Context, MapperConfig, RowErrorSink, RowStats, TracingSink};
use crate::index::SetterIndex;
use crate::traits::mapping::{MapRow, Mappable};
use crate::traits::row::RowSource;

/// Maps rows into one caller-supplied instance.
///
/// The target needs no `Default` impl; it only has to be [`Mappable`].
pub struct InstanceMapper<T> {
    index: Arc<SetterIndex<T>>,
    target: T,
    config: MapperConfig,
    sink: Arc<dyn RowErrorSink>,
}

impl<T> fmt::Debug for InstanceMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceMapper")
            .field("target", &type_name::<T>())
            .field("index", &self.index)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Mappable> InstanceMapper<T> {
    /// Bind the mapper to `target`.
    #[must_use]
    pub fn new(target: T) -> Self {
        Self {
            index: SetterIndex::shared(),
            target,
            config: MapperConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the mapping configuration.
    #[must_use]
    pub fn config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the failure sink.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn RowErrorSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Reuse an index built elsewhere instead of the one built at construction.
    #[must_use]
    pub fn shared_index(mut self, index: Arc<SetterIndex<T>>) -> Self {
        self.index = index;
        self
    }

    /// Returns the setter index.
    #[must_use]
    pub const fn index(&self) -> &Arc<SetterIndex<T>> {
        &self.index
    }

    /// Returns the bound instance.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// Release the bound instance.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.target
    }

    /// Map one row into the bound instance and return it.
    pub fn map_row<R: RowSource + ?Sized>(&mut self, row: &R, row_number: usize) -> &mut T {
        self.map_row_with_stats(row, row_number).0
    }

    /// Like [`map_row`](Self::map_row), also returning per-row counters.
    pub fn map_row_with_stats<R: RowSource + ?Sized>(
        &mut self,
        row: &R,
        row_number: usize,
    ) -> (&mut T, RowStats) {
        let context = Context {
            index: &self.index,
            config: &self.config,
            sink: self.sink.as_ref(),
        };
        let stats = context.populate(&mut self.target, row, row_number);
        (&mut self.target, stats)
    }
}

impl<T: Mappable> MapRow for InstanceMapper<T> {
    type Output<'a>
        = &'a mut T
    where
        Self: 'a;

    fn map_row<R: RowSource + ?Sized>(&mut self, row: &R, row_number: usize) -> Self::Output<'_> {
        Self::map_row(self, row, row_number)
    }
}

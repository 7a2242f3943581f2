//! Type-bound mapper: a fresh target instance per row.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use super::{Context, MapperConfig, RowErrorSink, RowFailure, RowStats, TracingSink};
use crate::Result;
use crate::error::MapperError;
use crate::hana::HanaRow;
use crate::index::SetterIndex;
use crate::traits::mapping::{MapRow, Mappable};
use crate::traits::row::RowSource;

type Factory<T> = dyn Fn() -> Result<T> + Send + Sync;

/// Maps each row into a newly created `T`.
///
/// # Example
///
/// ```rust,ignore
/// let mapper = RowMapper::<User>::new();
/// let metadata = result_set.metadata();
/// for (n, row) in result_set.into_rows()?.enumerate() {
///     let user = mapper.map_row(&HanaRow::new(&metadata, &row), n)?;
/// }
/// ```
pub struct RowMapper<T> {
    index: Arc<SetterIndex<T>>,
    factory: Box<Factory<T>>,
    config: MapperConfig,
    sink: Arc<dyn RowErrorSink>,
}

impl<T> fmt::Debug for RowMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMapper")
            .field("target", &type_name::<T>())
            .field("index", &self.index)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Mappable + Default> RowMapper<T> {
    /// Create a mapper that instantiates targets with `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(SetterIndex::shared(), Box::new(|| Ok(T::default())))
    }
}

impl<T: Mappable + Default> Default for RowMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Mappable> RowMapper<T> {
    /// Create a mapper that instantiates targets with `factory`.
    ///
    /// The factory is called once here as a probe; the probe instance is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns an instantiation error if the probe call fails.
    pub fn with_factory<F, E>(factory: F) -> Result<Self>
    where
        F: Fn() -> std::result::Result<T, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        let factory = move || {
            factory().map_err(|e| MapperError::instantiation(type_name::<T>(), e.to_string()))
        };
        factory()?;
        Ok(Self::from_parts(SetterIndex::shared(), Box::new(factory)))
    }

    fn from_parts(index: Arc<SetterIndex<T>>, factory: Box<Factory<T>>) -> Self {
        Self {
            index,
            factory,
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

    /// Map one row into a new instance.
    ///
    /// Column failures are reported to the sink and leave the instance
    /// partially populated.
    ///
    /// # Errors
    ///
    /// Returns an instantiation error if the factory fails for this row.
    pub fn map_row<R: RowSource + ?Sized>(&self, row: &R, row_number: usize) -> Result<T> {
        self.map_row_with_stats(row, row_number).map(|(target, _)| target)
    }

    /// Like [`map_row`](Self::map_row), also returning per-row counters.
    ///
    /// # Errors
    ///
    /// Returns an instantiation error if the factory fails for this row.
    pub fn map_row_with_stats<R: RowSource + ?Sized>(
        &self,
        row: &R,
        row_number: usize,
    ) -> Result<(T, RowStats)> {
        let mut target = (self.factory)()?;
        let stats = self.context().populate(&mut target, row, row_number);
        Ok((target, stats))
    }

    /// Map every row a HANA result set yields.
    ///
    /// A row the driver fails to deliver is reported to the sink as a
    /// row failure and left out of the output; traversal continues.
    ///
    /// ```rust,ignore
    /// let result_set = connection.query("SELECT USER_ID, USER_NAME FROM USERS")?;
    /// let metadata = result_set.metadata();
    /// let users = RowMapper::<User>::new().map_hana_rows(&metadata, result_set)?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an instantiation error if the factory fails for a row.
    pub fn map_hana_rows<I>(&self, metadata: &[hdbconnect::FieldMetadata], rows: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = std::result::Result<hdbconnect::Row, hdbconnect::HdbError>>,
    {
        let mut mapped = Vec::new();
        for (row_number, row) in rows.into_iter().enumerate() {
            match row {
                Ok(row) => mapped.push(self.map_row(&HanaRow::new(metadata, &row), row_number)?),
                Err(error) => self
                    .sink
                    .report(&RowFailure::row(row_number, MapperError::from(error))),
            }
        }
        Ok(mapped)
    }

    fn context(&self) -> Context<'_, T> {
        Context {
            index: &self.index,
            config: &self.config,
            sink: self.sink.as_ref(),
        }
    }
}

impl<T: Mappable> MapRow for RowMapper<T> {
    type Output<'a>
        = Result<T>
    where
        Self: 'a;

    fn map_row<R: RowSource + ?Sized>(&mut self, row: &R, row_number: usize) -> Self::Output<'_> {
        Self::map_row(self, row, row_number)
    }
}

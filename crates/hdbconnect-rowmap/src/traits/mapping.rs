//! Target registration and the per-row callback seam.
//!
//! [`MapRow`] uses a Generic Associated Type for its output so that a mapper
//! bound to a pre-existing instance can hand out a borrow of that instance,
//! while a type-bound mapper hands out owned values.

use crate::index::SetterRegistry;
use crate::traits::row::RowSource;

/// A type rows can be mapped into.
///
/// Implementations declare their setters once; the mapper builds its
/// [`SetterIndex`](crate::SetterIndex) from this registration.
///
/// # Example
///
/// ```
/// use hdbconnect_rowmap::{Mappable, SetterRegistry};
///
/// #[derive(Debug, Default)]
/// struct User {
///     user_id: i64,
///     user_name: String,
/// }
///
/// impl Mappable for User {
///     fn register(setters: &mut SetterRegistry<Self>) {
///         setters
///             .setter("setUserId", |u: &mut Self, v: i64| u.user_id = v)
///             .setter("setUserName", |u: &mut Self, v: String| u.user_name = v);
///     }
/// }
/// ```
pub trait Mappable: Sized + 'static {
    /// Declare every setter of this type, including inherited ones via
    /// [`SetterRegistry::inherit`].
    fn register(setters: &mut SetterRegistry<Self>);
}

/// Per-row conversion callback driven by the database layer.
pub trait MapRow {
    /// The value produced for one row.
    ///
    /// The lifetime parameter `'a` allows the output to borrow from `self`.
    type Output<'a>
    where
        Self: 'a;

    /// Map one row. `row_number` is 0-based and used for diagnostics only.
    fn map_row<R: RowSource + ?Sized>(&mut self, row: &R, row_number: usize) -> Self::Output<'_>;
}

//! Setter registration and lookup.
//!
//! A target type lists its setters once in [`Mappable::register`]. The
//! resulting [`SetterIndex`] maps upper-cased setter names to typed setter
//! handles and never changes afterwards.

use std::any::type_name;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use crate::Result;
use crate::error::MapperError;
use crate::naming;
use crate::traits::mapping::Mappable;
use crate::traits::sealed::FromColumn;
use crate::types::param::ParamType;
use crate::value::ColumnValue;

type ApplyFn<T> = dyn Fn(&mut T, &ColumnValue) -> Result<Applied> + Send + Sync;

/// What a setter did with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The setter was called.
    Invoked,
    /// The value was NULL and the parameter is not nullable.
    SkippedNull,
}

/// A single indexed setter.
pub struct Setter<T> {
    name: String,
    param: ParamType,
    declared_by: &'static str,
    apply: Box<ApplyFn<T>>,
}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("name", &self.name)
            .field("param", &self.param)
            .field("declared_by", &self.declared_by)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Setter<T> {
    fn new<V, F, E>(name: &str, f: F) -> Self
    where
        V: FromColumn,
        F: Fn(&mut T, V) -> std::result::Result<(), E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        let setter_name = name.to_string();
        let apply = move |target: &mut T, value: &ColumnValue| -> Result<Applied> {
            let arg = if value.is_null() {
                match V::from_null() {
                    Some(arg) => arg,
                    None => return Ok(Applied::SkippedNull),
                }
            } else {
                V::from_column(value)?
            };
            f(target, arg)
                .map_err(|e| MapperError::setter_invocation(setter_name.as_str(), e.to_string()))?;
            Ok(Applied::Invoked)
        };

        Self {
            name: name.to_string(),
            param: V::param_type(),
            declared_by: type_name::<T>(),
            apply: Box::new(apply),
        }
    }

    /// Lift a setter of `P` onto `T` through a projection.
    fn project<P: 'static>(
        parent: Setter<P>,
        project: Arc<dyn Fn(&mut T) -> &mut P + Send + Sync>,
    ) -> Self {
        let Setter {
            name,
            param,
            declared_by,
            apply,
        } = parent;
        Self {
            name,
            param,
            declared_by,
            apply: Box::new(move |target: &mut T, value: &ColumnValue| apply(project(target), value)),
        }
    }
}

impl<T> Setter<T> {
    /// Declared setter name, e.g. `setUserId`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the single parameter.
    #[must_use]
    pub const fn param_type(&self) -> ParamType {
        self.param
    }

    /// Type that declared the setter (the target itself or an ancestor).
    #[must_use]
    pub const fn declared_by(&self) -> &'static str {
        self.declared_by
    }

    /// Convert `value` to the parameter type and invoke the setter.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not convert or the setter rejects it.
    pub fn apply(&self, target: &mut T, value: &ColumnValue) -> Result<Applied> {
        (self.apply)(target, value)
    }
}

/// Collects setter declarations for a target type.
///
/// Passed to [`Mappable::register`]. Names that do not follow the setter
/// convention are discarded.
pub struct SetterRegistry<T> {
    own: HashMap<String, Setter<T>>,
    inherited: HashMap<String, Setter<T>>,
}

impl<T> fmt::Debug for SetterRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetterRegistry")
            .field("own", &self.own.len())
            .field("inherited", &self.inherited.len())
            .finish()
    }
}

impl<T: 'static> SetterRegistry<T> {
    fn new() -> Self {
        Self {
            own: HashMap::new(),
            inherited: HashMap::new(),
        }
    }

    /// Declare an infallible setter.
    ///
    /// ```rust,ignore
    /// setters.setter("setUserId", |u: &mut User, v: i64| u.user_id = v);
    /// ```
    pub fn setter<V, F>(&mut self, name: &str, f: F) -> &mut Self
    where
        V: FromColumn,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.try_setter(name, move |target: &mut T, value: V| {
            f(target, value);
            Ok::<(), std::convert::Infallible>(())
        })
    }

    /// Declare a setter that may reject its value.
    ///
    /// A rejection is reported as a setter invocation failure for that column.
    pub fn try_setter<V, F, E>(&mut self, name: &str, f: F) -> &mut Self
    where
        V: FromColumn,
        F: Fn(&mut T, V) -> std::result::Result<(), E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        if !naming::is_setter_name(name) {
            tracing::debug!(
                target_type = type_name::<T>(),
                name,
                "ignoring setter that does not follow the set<Property> convention"
            );
            return self;
        }

        let key = naming::key_for_setter(name);
        if let Some(previous) = self.own.insert(key, Setter::new(name, f)) {
            tracing::debug!(
                target_type = type_name::<T>(),
                replaced = previous.name(),
                name,
                "setter redeclared, keeping the latest"
            );
        }
        self
    }

    /// Pull in every setter of an ancestor `P`, reached through `project`.
    ///
    /// `P` registers its own ancestors in turn, so any depth is covered.
    /// Setters declared directly on `T` take precedence over inherited ones.
    ///
    /// ```rust,ignore
    /// setters.inherit(|admin: &mut Admin| &mut admin.user);
    /// ```
    pub fn inherit<P, F>(&mut self, project: F) -> &mut Self
    where
        P: Mappable,
        F: Fn(&mut T) -> &mut P + Send + Sync + 'static,
    {
        let project: Arc<dyn Fn(&mut T) -> &mut P + Send + Sync> = Arc::new(project);
        for (key, setter) in SetterIndex::<P>::build().setters {
            match self.inherited.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(Setter::<T>::project(setter, Arc::clone(&project)));
                }
                Entry::Occupied(existing) => {
                    tracing::debug!(
                        target_type = type_name::<T>(),
                        name = setter.name(),
                        kept = existing.get().declared_by(),
                        "setter inherited twice, keeping the first ancestor"
                    );
                }
            }
        }
        self
    }

    fn finish(self) -> SetterIndex<T> {
        let mut setters = self.inherited;
        setters.extend(self.own);
        SetterIndex { setters }
    }
}

/// Immutable lookup table from upper-cased setter name to setter.
pub struct SetterIndex<T> {
    setters: HashMap<String, Setter<T>>,
}

impl<T> fmt::Debug for SetterIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.setters.keys().collect();
        keys.sort();
        f.debug_struct("SetterIndex").field("keys", &keys).finish()
    }
}

impl<T: Mappable> SetterIndex<T> {
    /// Build the index from `T`'s registration.
    #[must_use]
    pub fn build() -> Self {
        let mut registry = SetterRegistry::new();
        T::register(&mut registry);
        let index = registry.finish();
        tracing::debug!(
            target_type = type_name::<T>(),
            setters = index.len(),
            "setter index built"
        );
        index
    }

    /// Build the index and wrap it for sharing between mappers.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::build())
    }
}

impl<T> SetterIndex<T> {
    /// Look up a setter by key (`SETUSERID`) or by declared name
    /// (`setUserId`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Setter<T>> {
        self.setters.get(key).or_else(|| {
            if key.bytes().any(|b| b.is_ascii_lowercase()) {
                self.setters.get(&naming::key_for_setter(key))
            } else {
                None
            }
        })
    }

    /// Resolve a column label against the index.
    #[must_use]
    pub fn bind<'a>(&'a self, column: &str) -> ColumnBinding<'a, T> {
        let key = naming::setter_key(column);
        let setter = self.setters.get(&key);
        ColumnBinding {
            column: column.to_string(),
            key,
            setter,
        }
    }

    /// Returns true if a setter exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Indexed keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.setters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns the number of indexed setters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Returns true if no setter is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

/// One column of one row, resolved against a [`SetterIndex`].
pub struct ColumnBinding<'a, T> {
    column: String,
    key: String,
    setter: Option<&'a Setter<T>>,
}

impl<T> fmt::Debug for ColumnBinding<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnBinding")
            .field("column", &self.column)
            .field("key", &self.key)
            .field("setter", &self.setter.map(Setter::name))
            .finish()
    }
}

impl<'a, T> ColumnBinding<'a, T> {
    /// Column label as reported by the row.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Derived candidate key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolved setter, if any.
    #[must_use]
    pub const fn setter(&self) -> Option<&'a Setter<T>> {
        self.setter
    }

    /// Declared parameter type of the resolved setter.
    #[must_use]
    pub fn param_type(&self) -> Option<ParamType> {
        self.setter.map(Setter::param_type)
    }
}

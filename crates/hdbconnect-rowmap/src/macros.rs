//! Declarative registration for plain field assignment.

/// Implements [`Mappable`](crate::Mappable) for a struct whose setters simply
/// assign a field.
///
/// Each entry reads `setterName => field: ParamType`. An optional bracketed
/// list of fields names embedded ancestors whose setters are inherited.
///
/// ```
/// use hdbconnect_rowmap::mappable;
///
/// #[derive(Debug, Default)]
/// struct User {
///     user_id: i64,
///     user_name: String,
/// }
///
/// #[derive(Debug, Default)]
/// struct Admin {
///     user: User,
///     role: Option<String>,
/// }
///
/// mappable!(User {
///     setUserId => user_id: i64,
///     setUserName => user_name: String,
/// });
///
/// mappable!(Admin [user] {
///     setRole => role: Option<String>,
/// });
/// ```
#[macro_export]
macro_rules! mappable {
    ($ty:ty $([$($parent:ident),* $(,)?])? { $($setter:ident => $field:ident : $param:ty),* $(,)? }) => {
        impl $crate::Mappable for $ty {
            #[allow(unused_variables)]
            fn register(setters: &mut $crate::SetterRegistry<Self>) {
                $($(
                    setters.inherit(|target: &mut Self| &mut target.$parent);
                )*)?
                $(
                    setters.setter(stringify!($setter), |target: &mut Self, value: $param| {
                        target.$field = value;
                    });
                )*
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ColumnValue, Mappable, SetterIndex};

    #[derive(Debug, Default)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Debug, Default)]
    struct Labeled {
        point: Point,
        label: Option<String>,
    }

    mappable!(Point {
        setX => x: i32,
        setY => y: i32,
    });

    mappable!(Labeled [point] {
        setLabel => label: Option<String>,
    });

    #[derive(Debug, Default)]
    struct Empty;

    mappable!(Empty {});

    #[test]
    fn test_generated_setters() {
        let index = SetterIndex::<Point>::build();
        assert_eq!(index.keys(), vec!["SETX", "SETY"]);

        let mut p = Point::default();
        index.get("SETY").unwrap().apply(&mut p, &ColumnValue::Int(4)).unwrap();
        assert_eq!((p.x, p.y), (0, 4));
    }

    #[test]
    fn test_generated_inheritance() {
        let index = SetterIndex::<Labeled>::build();
        assert_eq!(index.keys(), vec!["SETLABEL", "SETX", "SETY"]);

        let mut l = Labeled::default();
        index.get("SETX").unwrap().apply(&mut l, &ColumnValue::Int(1)).unwrap();
        assert_eq!(l.point.x, 1);
    }

    #[test]
    fn test_empty_registration() {
        fn assert_mappable<T: Mappable>() {}
        assert_mappable::<Empty>();
        assert!(SetterIndex::<Empty>::build().is_empty());
    }
}

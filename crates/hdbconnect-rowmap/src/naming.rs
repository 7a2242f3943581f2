//! Column-name to setter-key transform.
//!
//! Database columns are conventionally upper-snake-case (`SOME_VARIABLE`),
//! setters camel-case (`setSomeVariable`). Both sides are folded to the same
//! upper-cased key (`SETSOMEVARIABLE`) so lookup is case-insensitive.
//!
//! All case folding is ASCII-only; other characters pass through unchanged.

/// Prefix every conventional setter name starts with.
pub const SETTER_PREFIX: &str = "set";

/// Convert an upper-snake-case column name to upper-camel-case.
///
/// Each underscore-delimited segment gets its first letter upper-cased and the
/// rest lower-cased. Empty segments contribute nothing.
///
/// ```
/// use hdbconnect_rowmap::naming::to_upper_camel;
///
/// assert_eq!(to_upper_camel("SOME_VARIABLE"), "SomeVariable");
/// assert_eq!(to_upper_camel("ID"), "Id");
/// ```
#[must_use]
pub fn to_upper_camel(column: &str) -> String {
    let mut out = String::with_capacity(column.len());
    for segment in column.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    out
}

/// Conventional setter name for a column, e.g. `USER_ID` -> `setUserId`.
#[must_use]
pub fn setter_name(column: &str) -> String {
    let mut name = String::from(SETTER_PREFIX);
    name.push_str(&to_upper_camel(column));
    name
}

/// Lookup key for a column, e.g. `USER_ID` -> `SETUSERID`.
#[must_use]
pub fn setter_key(column: &str) -> String {
    setter_name(column).to_ascii_uppercase()
}

/// Lookup key for a declared setter name, e.g. `setUserId` -> `SETUSERID`.
#[must_use]
pub fn key_for_setter(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// Returns true if `name` follows the setter convention: `set` followed by an
/// upper-case ASCII letter.
#[must_use]
pub fn is_setter_name(name: &str) -> bool {
    name.strip_prefix(SETTER_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

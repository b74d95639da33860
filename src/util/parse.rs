//! Lenient query-string parsing helpers.
//!
//! List endpoints accept loosely-typed query parameters (`page=abc`,
//! `classId=all`). Rather than rejecting the whole request, unparseable
//! values are treated as absent, matching the fall-back-to-default
//! behavior the API contract requires.

use serde::{Deserialize, Deserializer};

/// Deserializes an optional `u64` query parameter.
///
/// Absent, empty, or non-numeric values become `None` instead of a
/// deserialization error.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.parse().ok()))
}

/// Deserializes an optional `i32` query parameter.
///
/// Absent, empty, `"all"`, or otherwise non-numeric values become `None`.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.parse().ok()))
}

/// Deserializes an optional boolean query parameter.
///
/// Only the literal strings `"true"` and `"false"` produce a value;
/// anything else (including `"all"`) becomes `None`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }))
}

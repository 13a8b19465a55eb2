// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Non-finite values degrade to zero instead of poisoning downstream sums.
#[must_use]
pub fn sanitize_f64(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Numeric field that tolerates null, absent, or non-numeric wire values.
pub fn finite_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(sanitize_f64(raw.as_f64().unwrap_or(0.0)))
}

/// Map of numeric values with the same tolerance as [`finite_or_zero`].
pub fn finite_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, sanitize_f64(value.as_f64().unwrap_or(0.0))))
        .collect())
}

// SPDX-License-Identifier: Apache-2.0

use serde::de::Deserializer;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::serde_helpers::sanitize_f64;

pub const MONTHS_PER_YEAR: usize = 12;

/// One calendar year of monthly buckets, index 0 = January.
///
/// The wire format is a plain JSON array. Feeds are allowed to be sloppy:
/// a missing or non-array value decodes as twelve zeros, short arrays are
/// zero-padded, extra entries are ignored, and null or non-numeric entries
/// become zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySeries([f64; MONTHS_PER_YEAR]);

impl MonthlySeries {
    #[must_use]
    pub const fn zero() -> Self {
        Self([0.0; MONTHS_PER_YEAR])
    }

    #[must_use]
    pub fn from_months(months: [f64; MONTHS_PER_YEAR]) -> Self {
        let mut out = months;
        for slot in &mut out {
            *slot = sanitize_f64(*slot);
        }
        Self(out)
    }

    /// Decodes an arbitrary JSON value under the normalization rules above.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut out = [0.0; MONTHS_PER_YEAR];
        if let serde_json::Value::Array(items) = value {
            for (slot, item) in out.iter_mut().zip(items) {
                *slot = sanitize_f64(item.as_f64().unwrap_or(0.0));
            }
        }
        Self(out)
    }

    #[must_use]
    pub const fn months(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.0
    }

    #[must_use]
    pub fn month(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Running prefix sum; monotone when every bucket is non-negative.
    #[must_use]
    pub fn cumulative(&self) -> Self {
        let mut out = [0.0; MONTHS_PER_YEAR];
        let mut running = 0.0;
        for (slot, value) in out.iter_mut().zip(self.0.iter()) {
            running += value;
            *slot = running;
        }
        Self(out)
    }

    pub fn add_assign(&mut self, other: &Self) {
        for (slot, value) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += value;
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }
}

impl Default for MonthlySeries {
    fn default() -> Self {
        Self::zero()
    }
}

impl Serialize for MonthlySeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(MONTHS_PER_YEAR))?;
        for value in &self.0 {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for MonthlySeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::serde_helpers::finite_or_zero;

/// Additive production figures. Every field participates independently in
/// aggregation and in top-N compaction conservation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductionMetric {
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub budget: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub hours: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub days: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub units: f64,
}

impl ProductionMetric {
    pub fn add_assign(&mut self, other: &Self) {
        self.budget += other.budget;
        self.hours += other.hours;
        self.days += other.days;
        self.units += other.units;
    }

    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            budget: self.budget * factor,
            hours: self.hours * factor,
            days: self.days * factor,
            units: self.units * factor,
        }
    }
}

/// One person's production record, broken down along the four display axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPersonBreakdown {
    #[serde(default)]
    pub totals: ProductionMetric,
    #[serde(default)]
    pub by_brand: BTreeMap<String, ProductionMetric>,
    #[serde(default)]
    pub by_market: BTreeMap<String, ProductionMetric>,
    #[serde(default)]
    pub by_segment: BTreeMap<String, ProductionMetric>,
    #[serde(default)]
    pub by_scope: BTreeMap<String, ProductionMetric>,
}

/// Optional production section of the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSection {
    #[serde(default)]
    pub totals: ProductionMetric,
    /// Keyed by the owning fact's `key`.
    #[serde(default)]
    pub by_person: BTreeMap<String, ProductionPersonBreakdown>,
}

// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use burnline_model::{ProductionMetric, ProductionSection};

use crate::project::DerivedRow;

/// Key of the synthetic compaction remainder entry.
pub const OTHER_KEY: &str = "Other";

/// Metric the primary production breakdown is sorted and displayed by.
/// Hours are carried through aggregation but are not a sort choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricChoice {
    #[default]
    Budget,
    Days,
    Units,
}

impl MetricChoice {
    #[must_use]
    pub fn of(self, metric: &ProductionMetric) -> f64 {
        match self {
            Self::Budget => metric.budget,
            Self::Days => metric.days,
            Self::Units => metric.units,
        }
    }
}

/// Display compaction sizes. The primary list keeps eight entries sorted by
/// the selected metric; the donut variants keep six and are always sorted
/// by budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPolicy {
    pub primary_top_n: usize,
    pub donut_top_n: usize,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            primary_top_n: 8,
            donut_top_n: 6,
        }
    }
}

/// Role-share-weighted production rollup over the surviving rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRollup {
    pub totals: ProductionMetric,
    pub by_brand: BTreeMap<String, ProductionMetric>,
    pub by_market: BTreeMap<String, ProductionMetric>,
    pub by_segment: BTreeMap<String, ProductionMetric>,
    pub by_scope: BTreeMap<String, ProductionMetric>,
}

fn accumulate(
    target: &mut BTreeMap<String, ProductionMetric>,
    source: &BTreeMap<String, ProductionMetric>,
    share: f64,
) {
    for (key, metric) in source {
        target
            .entry(key.clone())
            .or_default()
            .add_assign(&metric.scaled(share));
    }
}

/// Accumulates `metric * role_share` per row. The entity filter has already
/// excluded rows at projection time; rows with zero role share or without a
/// matching per-person record contribute nothing.
#[must_use]
pub fn production_rollup(rows: &[DerivedRow], section: &ProductionSection) -> ProductionRollup {
    let mut out = ProductionRollup::default();
    for row in rows {
        if row.role_share <= 0.0 {
            continue;
        }
        let Some(person) = section.by_person.get(&row.key) else {
            continue;
        };
        out.totals.add_assign(&person.totals.scaled(row.role_share));
        accumulate(&mut out.by_brand, &person.by_brand, row.role_share);
        accumulate(&mut out.by_market, &person.by_market, row.role_share);
        accumulate(&mut out.by_segment, &person.by_segment, row.role_share);
        accumulate(&mut out.by_scope, &person.by_scope, row.role_share);
    }
    out
}

/// One displayed breakdown entry; `key` is an input key or [`OTHER_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub key: String,
    pub metric: ProductionMetric,
}

/// Top-N plus "Other" display compaction.
///
/// Entries are sorted by the chosen metric descending (key ascending as the
/// tiebreak), the first `n` are kept, and the remainder is folded into one
/// synthetic entry summing every metric field, so conservation holds per
/// field independently, not just for the sort metric.
#[must_use]
pub fn compact_top_n(
    breakdown: &BTreeMap<String, ProductionMetric>,
    n: usize,
    sort_metric: MetricChoice,
) -> Vec<BreakdownEntry> {
    let mut entries: Vec<BreakdownEntry> = breakdown
        .iter()
        .map(|(key, metric)| BreakdownEntry {
            key: key.clone(),
            metric: *metric,
        })
        .collect();
    entries.sort_by(|a, b| {
        sort_metric
            .of(&b.metric)
            .total_cmp(&sort_metric.of(&a.metric))
            .then_with(|| a.key.cmp(&b.key))
    });

    if entries.len() <= n {
        return entries;
    }

    let rest = entries.split_off(n);
    let mut other = ProductionMetric::default();
    for entry in &rest {
        other.add_assign(&entry.metric);
    }
    entries.push(BreakdownEntry {
        key: OTHER_KEY.to_string(),
        metric: other,
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::{compact_top_n, production_rollup, MetricChoice, OTHER_KEY};
    use crate::project::DerivedRow;
    use crate::risk::RiskTier;
    use burnline_model::{ProductionMetric, ProductionPersonBreakdown, ProductionSection};
    use std::collections::BTreeMap;

    fn metric(budget: f64, days: f64) -> ProductionMetric {
        ProductionMetric {
            budget,
            hours: days * 8.0,
            days,
            units: 1.0,
        }
    }

    fn row(key: &str, share: f64) -> DerivedRow {
        DerivedRow {
            key: key.to_string(),
            person_id: None,
            name: String::new(),
            entity: String::new(),
            is_unassigned: false,
            is_unmapped: false,
            role_share: share,
            plan: 100.0,
            actual: 50.0,
            remaining: 50.0,
            utilization: 0.5,
            delta: -50.0,
            risk: RiskTier::Ok,
        }
    }

    fn section() -> ProductionSection {
        let mut by_person = BTreeMap::new();
        by_person.insert(
            "p1".to_string(),
            ProductionPersonBreakdown {
                totals: metric(100.0, 10.0),
                by_brand: [("Acme".to_string(), metric(100.0, 10.0))].into(),
                ..Default::default()
            },
        );
        by_person.insert(
            "p2".to_string(),
            ProductionPersonBreakdown {
                totals: metric(40.0, 4.0),
                by_brand: [("Zenith".to_string(), metric(40.0, 4.0))].into(),
                ..Default::default()
            },
        );
        ProductionSection {
            totals: metric(140.0, 14.0),
            by_person,
        }
    }

    #[test]
    fn rollup_weights_by_role_share() {
        let rollup = production_rollup(&[row("p1", 0.5), row("p2", 1.0)], &section());
        assert_eq!(rollup.totals.budget, 90.0);
        assert_eq!(rollup.totals.days, 9.0);
        assert_eq!(rollup.by_brand["Acme"].budget, 50.0);
        assert_eq!(rollup.by_brand["Zenith"].budget, 40.0);
    }

    #[test]
    fn zero_share_and_unknown_rows_contribute_nothing() {
        let rollup = production_rollup(&[row("p1", 0.0), row("ghost", 1.0)], &section());
        assert_eq!(rollup.totals, ProductionMetric::default());
        assert!(rollup.by_brand.is_empty());
    }

    #[test]
    fn compaction_keeps_top_n_and_folds_the_rest() {
        let breakdown: BTreeMap<String, ProductionMetric> = (0..5)
            .map(|i| (format!("b{i}"), metric(f64::from(i) * 10.0, f64::from(i))))
            .collect();
        let compacted = compact_top_n(&breakdown, 2, MetricChoice::Budget);
        assert_eq!(compacted.len(), 3);
        assert_eq!(compacted[0].key, "b4");
        assert_eq!(compacted[1].key, "b3");
        assert_eq!(compacted[2].key, OTHER_KEY);
        assert_eq!(compacted[2].metric.budget, 30.0);
        assert_eq!(compacted[2].metric.days, 3.0);
        assert_eq!(compacted[2].metric.units, 3.0);
    }

    #[test]
    fn short_lists_are_not_compacted() {
        let breakdown: BTreeMap<String, ProductionMetric> =
            [("a".to_string(), metric(5.0, 1.0))].into();
        let compacted = compact_top_n(&breakdown, 6, MetricChoice::Days);
        assert_eq!(compacted.len(), 1);
        assert_eq!(compacted[0].key, "a");
    }

    #[test]
    fn sort_metric_changes_the_kept_entries() {
        let breakdown: BTreeMap<String, ProductionMetric> = [
            (
                "big-budget".to_string(),
                ProductionMetric {
                    budget: 100.0,
                    hours: 0.0,
                    days: 1.0,
                    units: 0.0,
                },
            ),
            (
                "big-days".to_string(),
                ProductionMetric {
                    budget: 10.0,
                    hours: 0.0,
                    days: 50.0,
                    units: 0.0,
                },
            ),
        ]
        .into();
        let by_budget = compact_top_n(&breakdown, 1, MetricChoice::Budget);
        assert_eq!(by_budget[0].key, "big-budget");
        let by_days = compact_top_n(&breakdown, 1, MetricChoice::Days);
        assert_eq!(by_days[0].key, "big-days");
    }
}

// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use burnline_model::{MonthlySeries, MONTHS_PER_YEAR};

use crate::project::DerivedRow;

/// Scalar KPI totals over the surviving rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Totals {
    pub plan: f64,
    pub actual: f64,
    pub remaining: f64,
    pub utilization: f64,
}

#[must_use]
pub fn totals(rows: &[DerivedRow]) -> Totals {
    let plan: f64 = rows.iter().map(|row| row.plan).sum();
    let actual: f64 = rows.iter().map(|row| row.actual).sum();
    Totals {
        plan,
        actual,
        remaining: plan - actual,
        utilization: if plan > 0.0 { actual / plan } else { 0.0 },
    }
}

/// Cumulative plan vs cumulative actual across the year.
///
/// The plan line is a straight twelfth-partition of the annual total; the
/// actual line is the prefix sum of the cube-selected monthly series. Both
/// are monotone as long as monthly actuals are non-negative (negative
/// corrections are not modeled).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BurnUp {
    pub plan_cumulative: MonthlySeries,
    pub actual_cumulative: MonthlySeries,
}

#[must_use]
pub fn burn_up(plan_total: f64, monthly_actual: &MonthlySeries) -> BurnUp {
    let mut plan = [0.0; MONTHS_PER_YEAR];
    for (month, slot) in plan.iter_mut().enumerate() {
        *slot = (month as f64 + 1.0) * plan_total / MONTHS_PER_YEAR as f64;
    }
    BurnUp {
        plan_cumulative: MonthlySeries::from_months(plan),
        actual_cumulative: monthly_actual.cumulative(),
    }
}

#[cfg(test)]
mod tests {
    use super::{burn_up, totals};
    use crate::project::DerivedRow;
    use crate::risk::RiskTier;
    use burnline_model::MonthlySeries;

    fn row(plan: f64, actual: f64) -> DerivedRow {
        DerivedRow {
            key: String::new(),
            person_id: None,
            name: String::new(),
            entity: String::new(),
            is_unassigned: false,
            is_unmapped: false,
            role_share: 1.0,
            plan,
            actual,
            remaining: plan - actual,
            utilization: if plan > 0.0 { actual / plan } else { 0.0 },
            delta: actual - plan,
            risk: RiskTier::Ok,
        }
    }

    #[test]
    fn totals_sum_and_derive() {
        let out = totals(&[row(1000.0, 600.0), row(500.0, 650.0)]);
        assert_eq!(out.plan, 1500.0);
        assert_eq!(out.actual, 1250.0);
        assert_eq!(out.remaining, 250.0);
        assert!((out.utilization - 1250.0 / 1500.0).abs() < 1e-12);
    }

    #[test]
    fn zero_plan_yields_zero_utilization() {
        let out = totals(&[row(0.0, 50.0)]);
        assert_eq!(out.utilization, 0.0);
    }

    #[test]
    fn plan_line_partitions_the_annual_total() {
        let out = burn_up(1200.0, &MonthlySeries::zero());
        assert_eq!(out.plan_cumulative.month(0), 100.0);
        assert_eq!(out.plan_cumulative.month(5), 600.0);
        assert_eq!(out.plan_cumulative.month(11), 1200.0);
    }

    #[test]
    fn both_lines_are_monotone() {
        let actual = MonthlySeries::from_value(&serde_json::json!([5, 0, 3, 0, 7]));
        let out = burn_up(900.0, &actual);
        for month in 1..12 {
            assert!(out.plan_cumulative.month(month) >= out.plan_cumulative.month(month - 1));
            assert!(out.actual_cumulative.month(month) >= out.actual_cumulative.month(month - 1));
        }
        assert_eq!(out.actual_cumulative.month(11), 15.0);
    }
}

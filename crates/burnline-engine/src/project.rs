// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use burnline_model::{BudgetFact, FilterSelection, UNASSIGNED_ROLE};

use crate::risk::{classify_risk, RiskTier};

/// One fact projected under an active filter selection.
///
/// Owned snapshot; the source fact is never mutated. `role_share` is the
/// fraction of the row attributed to the active role filter (1.0 when no
/// role filter is set) and is reused by the production rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedRow {
    pub key: String,
    pub person_id: Option<String>,
    pub name: String,
    pub entity: String,
    pub is_unassigned: bool,
    pub is_unmapped: bool,
    pub role_share: f64,
    pub plan: f64,
    pub actual: f64,
    pub remaining: f64,
    pub utilization: f64,
    pub delta: f64,
    pub risk: RiskTier,
}

/// Fraction of the fact attributed to the active role filter.
#[must_use]
pub fn role_share(fact: &BudgetFact, role_filter: &BTreeSet<String>) -> f64 {
    if role_filter.is_empty() {
        return 1.0;
    }
    if fact.is_unassigned {
        return if role_filter.contains(UNASSIGNED_ROLE) {
            1.0
        } else {
            0.0
        };
    }
    fact.role_shares
        .iter()
        .filter(|rs| role_filter.contains(&rs.role_id))
        .map(|rs| rs.share)
        .sum()
}

/// Actual spend restricted to the active workstream filter. With no
/// workstream filter every scope participates, the production scope
/// included; its separate display track is carved out at cube-selection
/// level, not here.
#[must_use]
pub fn scope_actual(fact: &BudgetFact, workstream_filter: &BTreeSet<String>) -> f64 {
    fact.scope_spend
        .iter()
        .filter(|(scope, _)| workstream_filter.is_empty() || workstream_filter.contains(*scope))
        .map(|(_, amount)| amount)
        .sum()
}

/// Projects one fact under the selection.
///
/// Returns `None` when the entity filter excludes the row, or when the
/// filtered row has neither plan nor actual to report. Deterministic and
/// referentially transparent; cross-filter counting calls this many times
/// per recomputation pass.
#[must_use]
pub fn project(fact: &BudgetFact, selection: &FilterSelection) -> Option<DerivedRow> {
    if !selection.matches_entity(&fact.entity) {
        return None;
    }

    let share = role_share(fact, &selection.role_ids);
    let actual = scope_actual(fact, &selection.workstreams) * share;
    let plan = if selection.role_ids.is_empty() {
        fact.plan
    } else {
        fact.plan * share
    };

    if actual <= 0.0 && plan <= 0.0 {
        return None;
    }

    let utilization = if plan > 0.0 { actual / plan } else { 0.0 };
    Some(DerivedRow {
        key: fact.key.clone(),
        person_id: fact.person_id.clone(),
        name: fact.name.clone(),
        entity: fact.entity.clone(),
        is_unassigned: fact.is_unassigned,
        is_unmapped: fact.is_unmapped,
        role_share: share,
        plan,
        actual,
        remaining: plan - actual,
        utilization,
        delta: actual - plan,
        risk: classify_risk(fact.is_unmapped, plan, actual, utilization),
    })
}

/// Projects every fact, dropping excluded and empty rows.
#[must_use]
pub fn project_all(facts: &[BudgetFact], selection: &FilterSelection) -> Vec<DerivedRow> {
    facts
        .iter()
        .filter_map(|fact| project(fact, selection))
        .collect()
}

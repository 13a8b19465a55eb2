// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cube::Cube;
use crate::fact::{BudgetFact, Role};
use crate::production::ProductionSection;
use crate::serde_helpers::{finite_map, finite_or_zero};
use crate::series::MonthlySeries;

/// Flat (unfiltered) per-role summary shipped as a cross-check baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoleBreakdown {
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub role_name: String,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub plan: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub actual: f64,
}

/// Flat per-scope actual shipped as a cross-check baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScopeBreakdown {
    #[serde(default)]
    pub scope: String,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Breakdowns {
    #[serde(default)]
    pub roles: Vec<RoleBreakdown>,
    #[serde(default)]
    pub scopes: Vec<ScopeBreakdown>,
}

/// Row-level table section: facts plus the role/scope/entity vocabularies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableSection {
    #[serde(default)]
    pub rows: Vec<BudgetFact>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
}

/// One (client, year) input document from the fact & cube store.
///
/// Loaded once per selection change and treated as immutable; every
/// malformed numeric field degrades to zero rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDocument {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub currency: String,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub plan_total: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub actual_total: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub remaining: f64,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub utilization: f64,
    #[serde(default)]
    pub as_of_date: String,
    #[serde(default, deserialize_with = "finite_map")]
    pub entity_plan: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "finite_map")]
    pub entity_actual: BTreeMap<String, f64>,
    /// The eight pre-aggregated monthly layers (`monthlyActual`,
    /// `monthlyEntity`, ... `monthlyEntityRoleScope`).
    #[serde(flatten)]
    pub cube: Cube,
    #[serde(default)]
    pub breakdowns: Breakdowns,
    /// Flat plan split per (role, scope), display baseline only.
    #[serde(default)]
    pub role_scopes: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub production: Option<ProductionSection>,
    #[serde(default)]
    pub table: TableSection,
}

impl BudgetDocument {
    #[must_use]
    pub fn facts(&self) -> &[BudgetFact] {
        &self.table.rows
    }

    #[must_use]
    pub fn monthly_actual(&self) -> &MonthlySeries {
        &self.cube.total
    }

    /// Workstream vocabulary: the table scopes minus the reserved
    /// production scope.
    #[must_use]
    pub fn workstream_scopes(&self) -> Vec<String> {
        self.table
            .scopes
            .iter()
            .filter(|scope| !crate::fact::is_production_scope(scope))
            .cloned()
            .collect()
    }
}

// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::serde_helpers::{finite_map, finite_or_zero};

/// Synthetic role id carried by rows that have no role mapping.
pub const UNASSIGNED_ROLE: &str = "unassigned";

/// Reserved scope with its own display track; never enumerated as a
/// workstream filter option.
pub const PRODUCTION_SCOPE: &str = "Production";

pub const ROLE_SHARE_TOLERANCE: f64 = 1e-6;

#[must_use]
pub fn is_production_scope(scope: &str) -> bool {
    scope == PRODUCTION_SCOPE
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Fractional allocation of one resource to one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleShare {
    pub role_id: String,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub share: f64,
}

/// One resource-level budget record within a (client, year) document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetFact {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub role_ids: Vec<String>,
    #[serde(default)]
    pub role_shares: Vec<RoleShare>,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub plan: f64,
    /// Actual spend per workstream scope; may include [`PRODUCTION_SCOPE`].
    #[serde(default, deserialize_with = "finite_map")]
    pub scope_spend: BTreeMap<String, f64>,
    #[serde(default)]
    pub is_unassigned: bool,
    /// Data-quality flag; wins over every other risk signal.
    #[serde(default)]
    pub is_unmapped: bool,
}

impl BudgetFact {
    /// Total actual spend across every scope, the flat (unfiltered) figure.
    #[must_use]
    pub fn total_spend(&self) -> f64 {
        self.scope_spend.values().sum()
    }
}

/// Role-assigned rows must have shares summing to 1.0 within tolerance.
pub fn validate_role_shares(fact: &BudgetFact) -> Result<(), ValidationError> {
    if fact.is_unassigned {
        return Ok(());
    }
    let sum: f64 = fact.role_shares.iter().map(|rs| rs.share).sum();
    if (sum - 1.0).abs() > ROLE_SHARE_TOLERANCE {
        return Err(ValidationError(format!(
            "role shares for '{}' sum to {sum}, expected 1.0",
            fact.key
        )));
    }
    Ok(())
}

/// Role reference as published in the document's `table.roles` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Role {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "finite_or_zero")]
    pub plan: f64,
}

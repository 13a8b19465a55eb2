// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::series::MonthlySeries;

type SeriesMap = BTreeMap<String, MonthlySeries>;
type SeriesMap2 = BTreeMap<String, SeriesMap>;
type SeriesMap3 = BTreeMap<String, SeriesMap2>;

/// Sparse pre-aggregated monthly cube.
///
/// Only (entity, role, scope) combinations that occur in the underlying
/// facts are materialized upstream; every absent key reads as an all-zero
/// series. The engine selects and sums slices of this cube instead of ever
/// re-aggregating monthly figures from flat fact rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cube {
    #[serde(default, rename = "monthlyActual")]
    pub total: MonthlySeries,
    #[serde(default, rename = "monthlyEntity")]
    pub by_entity: SeriesMap,
    #[serde(default, rename = "monthlyRole")]
    pub by_role: SeriesMap,
    #[serde(default, rename = "monthlyScope")]
    pub by_scope: SeriesMap,
    #[serde(default, rename = "monthlyEntityRole")]
    pub by_entity_role: SeriesMap2,
    #[serde(default, rename = "monthlyEntityScope")]
    pub by_entity_scope: SeriesMap2,
    #[serde(default, rename = "monthlyRoleScope")]
    pub by_role_scope: SeriesMap2,
    #[serde(default, rename = "monthlyEntityRoleScope")]
    pub by_entity_role_scope: SeriesMap3,
}

impl Cube {
    #[must_use]
    pub fn entity(&self, entity: &str) -> Option<&MonthlySeries> {
        self.by_entity.get(entity)
    }

    #[must_use]
    pub fn role(&self, role_id: &str) -> Option<&MonthlySeries> {
        self.by_role.get(role_id)
    }

    #[must_use]
    pub fn scope(&self, scope: &str) -> Option<&MonthlySeries> {
        self.by_scope.get(scope)
    }

    #[must_use]
    pub fn entity_role(&self, entity: &str, role_id: &str) -> Option<&MonthlySeries> {
        self.by_entity_role.get(entity).and_then(|m| m.get(role_id))
    }

    #[must_use]
    pub fn entity_scope(&self, entity: &str, scope: &str) -> Option<&MonthlySeries> {
        self.by_entity_scope.get(entity).and_then(|m| m.get(scope))
    }

    #[must_use]
    pub fn role_scope(&self, role_id: &str, scope: &str) -> Option<&MonthlySeries> {
        self.by_role_scope.get(role_id).and_then(|m| m.get(scope))
    }

    #[must_use]
    pub fn entity_role_scope(
        &self,
        entity: &str,
        role_id: &str,
        scope: &str,
    ) -> Option<&MonthlySeries> {
        self.by_entity_role_scope
            .get(entity)
            .and_then(|m| m.get(role_id))
            .and_then(|m| m.get(scope))
    }
}

// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use burnline_model::{is_production_scope, BudgetFact, Dimension, FilterSelection, UNASSIGNED_ROLE};

use crate::project::project;

/// One selectable filter option with its cross-filter row count: how many
/// rows would match if this option alone were toggled for its dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOption {
    pub key: String,
    pub count: usize,
}

/// Option list for one dimension, counted with that dimension's own filter
/// cleared and the other two dimensions' selections kept. The self-exclusion
/// keeps a dimension's option list from collapsing to its own current
/// choice. Zero-tally options are pruned; order is deterministic (key
/// order).
#[must_use]
pub fn dimension_options(
    facts: &[BudgetFact],
    selection: &FilterSelection,
    dimension: Dimension,
) -> Vec<DimensionOption> {
    let subset = selection.without(dimension);
    let mut tally: BTreeMap<String, usize> = BTreeMap::new();

    for fact in facts {
        let Some(row) = project(fact, &subset) else {
            continue;
        };
        match dimension {
            Dimension::Role => {
                if fact.is_unassigned {
                    *tally.entry(UNASSIGNED_ROLE.to_string()).or_default() += 1;
                } else {
                    for role_id in &fact.role_ids {
                        *tally.entry(role_id.clone()).or_default() += 1;
                    }
                }
            }
            Dimension::Entity => {
                *tally.entry(fact.entity.clone()).or_default() += 1;
            }
            Dimension::Workstream => {
                for (scope, amount) in &fact.scope_spend {
                    if is_production_scope(scope) {
                        continue;
                    }
                    if amount * row.role_share > 0.0 {
                        *tally.entry(scope.clone()).or_default() += 1;
                    }
                }
            }
        }
    }

    tally
        .into_iter()
        .map(|(key, count)| DimensionOption { key, count })
        .collect()
}

/// All three option lists for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub roles: Vec<DimensionOption>,
    pub entities: Vec<DimensionOption>,
    pub workstreams: Vec<DimensionOption>,
}

#[must_use]
pub fn filter_options(facts: &[BudgetFact], selection: &FilterSelection) -> FilterOptions {
    FilterOptions {
        roles: dimension_options(facts, selection, Dimension::Role),
        entities: dimension_options(facts, selection, Dimension::Entity),
        workstreams: dimension_options(facts, selection, Dimension::Workstream),
    }
}

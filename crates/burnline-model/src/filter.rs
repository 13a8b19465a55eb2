// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The three filterable dimensions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Role,
    Entity,
    Workstream,
}

impl Dimension {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Entity => "entity",
            Self::Workstream => "workstream",
        }
    }
}

/// Immutable multi-dimensional filter selection.
///
/// An empty set means "no filter" for that dimension: every row passes.
/// Selections are value objects; narrowing or clearing a dimension always
/// produces a new selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    #[serde(default)]
    pub role_ids: BTreeSet<String>,
    #[serde(default)]
    pub entities: BTreeSet<String>,
    #[serde(default)]
    pub workstreams: BTreeSet<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.role_ids.is_empty() && self.entities.is_empty() && self.workstreams.is_empty()
    }

    /// Copy of this selection with one dimension's filter cleared.
    ///
    /// Used by cross-filter counting so that a dimension's own active
    /// filter never narrows its own option list.
    #[must_use]
    pub fn without(&self, dimension: Dimension) -> Self {
        let mut cleared = self.clone();
        match dimension {
            Dimension::Role => cleared.role_ids.clear(),
            Dimension::Entity => cleared.entities.clear(),
            Dimension::Workstream => cleared.workstreams.clear(),
        }
        cleared
    }

    /// Entity dimension passes when no entity filter is active or the
    /// entity is selected.
    #[must_use]
    pub fn matches_entity(&self, entity: &str) -> bool {
        self.entities.is_empty() || self.entities.contains(entity)
    }
}

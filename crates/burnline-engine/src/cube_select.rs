// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use burnline_model::{is_production_scope, Cube, FilterSelection, MonthlySeries, PRODUCTION_SCOPE};

fn sum_series<'a, I>(series: I) -> MonthlySeries
where
    I: Iterator<Item = Option<&'a MonthlySeries>>,
{
    let mut out = MonthlySeries::zero();
    for item in series.flatten() {
        out.add_assign(item);
    }
    out
}

/// Monthly actual series for the current selection, summed from the
/// smallest pre-aggregated slice that covers it. Never recomputed from
/// flat fact rows. Missing cube keys contribute zero series.
///
/// Only the role and entity filters participate here; the workstream
/// filter deliberately does not narrow this series (it narrows only the
/// scope-restricted selections below). Whether that asymmetry is intended
/// product behavior is still open with product; do not generalize it away.
#[must_use]
pub fn select_actual_series(cube: &Cube, selection: &FilterSelection) -> MonthlySeries {
    let entities = &selection.entities;
    let roles = &selection.role_ids;
    match (entities.is_empty(), roles.is_empty()) {
        (false, false) => sum_series(
            entities
                .iter()
                .flat_map(|e| roles.iter().map(move |r| cube.entity_role(e, r))),
        ),
        (false, true) => sum_series(entities.iter().map(|e| cube.entity(e))),
        (true, false) => sum_series(roles.iter().map(|r| cube.role(r))),
        (true, true) => cube.total.clone(),
    }
}

/// Same resolution order as [`select_actual_series`], intersected with a
/// scope restriction against the `*Scope` cube layers.
#[must_use]
pub fn select_scope_series(
    cube: &Cube,
    selection: &FilterSelection,
    scopes: &BTreeSet<String>,
) -> MonthlySeries {
    let entities = &selection.entities;
    let roles = &selection.role_ids;
    match (entities.is_empty(), roles.is_empty()) {
        (false, false) => sum_series(entities.iter().flat_map(|e| {
            roles
                .iter()
                .flat_map(move |r| scopes.iter().map(move |s| cube.entity_role_scope(e, r, s)))
        })),
        (false, true) => sum_series(
            entities
                .iter()
                .flat_map(|e| scopes.iter().map(move |s| cube.entity_scope(e, s))),
        ),
        (true, false) => sum_series(
            roles
                .iter()
                .flat_map(|r| scopes.iter().map(move |s| cube.role_scope(r, s))),
        ),
        (true, true) => sum_series(scopes.iter().map(|s| cube.scope(s))),
    }
}

/// Production display track: the reserved scope only.
#[must_use]
pub fn production_series(cube: &Cube, selection: &FilterSelection) -> MonthlySeries {
    let scopes: BTreeSet<String> = [PRODUCTION_SCOPE.to_string()].into();
    select_scope_series(cube, selection, &scopes)
}

/// Workstream display track: the selected non-production workstreams, or
/// every non-production scope when the workstream filter is empty.
#[must_use]
pub fn workstream_series(
    cube: &Cube,
    selection: &FilterSelection,
    all_scopes: &[String],
) -> MonthlySeries {
    let scopes: BTreeSet<String> = if selection.workstreams.is_empty() {
        all_scopes
            .iter()
            .filter(|scope| !is_production_scope(scope))
            .cloned()
            .collect()
    } else {
        selection
            .workstreams
            .iter()
            .filter(|scope| !is_production_scope(scope))
            .cloned()
            .collect()
    };
    select_scope_series(cube, selection, &scopes)
}

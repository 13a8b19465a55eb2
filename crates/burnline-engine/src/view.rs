// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use tracing::debug;

use burnline_model::{
    Breakdowns, BudgetDocument, FilterSelection, MonthlySeries, ProductionMetric,
};

use crate::cube_select::{production_series, select_actual_series, workstream_series};
use crate::dimensions::{filter_options, FilterOptions};
use crate::production::{
    compact_top_n, production_rollup, BreakdownEntry, DisplayPolicy, MetricChoice,
    ProductionRollup,
};
use crate::project::{project_all, DerivedRow};
use crate::rollup::{burn_up, totals, BurnUp, Totals};

/// Breakdown axis driving the primary production list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownGroup {
    #[default]
    Brand,
    Market,
    Segment,
    Scope,
}

/// Display choices accompanying a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub metric: MetricChoice,
    pub group: BreakdownGroup,
    #[serde(default)]
    pub policy: DisplayPolicy,
}

/// Compacted production view-model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionView {
    pub totals: ProductionMetric,
    /// Top-8 by the selected metric, over the selected grouping axis.
    pub primary: Vec<BreakdownEntry>,
    /// Donut variants: top-6, always sorted by budget.
    pub brand_donut: Vec<BreakdownEntry>,
    pub market_donut: Vec<BreakdownEntry>,
    pub segment_donut: Vec<BreakdownEntry>,
    pub scope_donut: Vec<BreakdownEntry>,
}

/// Everything the budget-execution dashboard renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub totals: Totals,
    /// Surviving rows, descending filtered actual, key as tiebreak.
    pub rows: Vec<DerivedRow>,
    pub filters: FilterOptions,
    pub burn_up: BurnUp,
    pub monthly_actual: MonthlySeries,
    pub workstream_monthly: MonthlySeries,
    pub production_monthly: MonthlySeries,
    pub production: Option<ProductionView>,
    /// Flat (unfiltered) role/scope baselines, passed through unchanged as
    /// the reconciliation cross-check.
    pub baseline: Breakdowns,
}

fn production_view(rollup: &ProductionRollup, options: &ViewOptions) -> ProductionView {
    let primary_source = match options.group {
        BreakdownGroup::Brand => &rollup.by_brand,
        BreakdownGroup::Market => &rollup.by_market,
        BreakdownGroup::Segment => &rollup.by_segment,
        BreakdownGroup::Scope => &rollup.by_scope,
    };
    let donut_n = options.policy.donut_top_n;
    ProductionView {
        totals: rollup.totals,
        primary: compact_top_n(primary_source, options.policy.primary_top_n, options.metric),
        brand_donut: compact_top_n(&rollup.by_brand, donut_n, MetricChoice::Budget),
        market_donut: compact_top_n(&rollup.by_market, donut_n, MetricChoice::Budget),
        segment_donut: compact_top_n(&rollup.by_segment, donut_n, MetricChoice::Budget),
        scope_donut: compact_top_n(&rollup.by_scope, donut_n, MetricChoice::Budget),
    }
}

/// Recomputes the full view-model for one (document, selection) pair.
///
/// Pure: identical inputs yield deep-equal outputs, so callers may memoize
/// on [`view_cache_key`] and recompute in any order.
#[must_use]
pub fn build_view(
    document: &BudgetDocument,
    selection: &FilterSelection,
    options: &ViewOptions,
) -> DashboardView {
    let mut rows = project_all(document.facts(), selection);
    rows.sort_by(|a, b| b.actual.total_cmp(&a.actual).then_with(|| a.key.cmp(&b.key)));
    let totals = totals(&rows);
    debug!(
        rows = rows.len(),
        plan = totals.plan,
        actual = totals.actual,
        "projected rows for selection"
    );

    let monthly_actual = select_actual_series(&document.cube, selection);
    let workstream_scopes = document.workstream_scopes();
    let production = document.production.as_ref().map(|section| {
        let rollup = production_rollup(&rows, section);
        production_view(&rollup, options)
    });

    DashboardView {
        burn_up: burn_up(totals.plan, &monthly_actual),
        workstream_monthly: workstream_series(&document.cube, selection, &workstream_scopes),
        production_monthly: production_series(&document.cube, selection),
        filters: filter_options(document.facts(), selection),
        baseline: document.breakdowns.clone(),
        monthly_actual,
        totals,
        rows,
        production,
    }
}

/// Canonical content hash of a loaded document, computed once per load.
pub fn document_hash(document: &BudgetDocument) -> Result<String, serde_json::Error> {
    burnline_core::canonical::stable_json_hash_hex(document)
}

/// Memoization key for one recomputation pass.
pub fn view_cache_key(
    document_hash: &str,
    selection: &FilterSelection,
    options: &ViewOptions,
) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct KeyParts<'a> {
        document: &'a str,
        selection: &'a FilterSelection,
        options: &'a ViewOptions,
    }
    burnline_core::canonical::stable_json_hash_hex(&KeyParts {
        document: document_hash,
        selection,
        options,
    })
}

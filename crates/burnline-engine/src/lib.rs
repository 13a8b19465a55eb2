#![forbid(unsafe_code)]
//! Burnline aggregation engine.
//!
//! Pure, synchronous pipeline from one loaded budget document and an
//! immutable filter selection to the dashboard view-model: per-row KPI
//! projection with risk tiers, self-excluding cross-filter counts,
//! pre-aggregated cube slice selection, burn-up series, and role-share-
//! weighted production breakdowns with top-N compaction. No I/O, no
//! internal state; determinism is part of the contract.

mod cube_select;
mod dimensions;
mod production;
mod project;
mod risk;
mod rollup;
mod view;

pub use cube_select::{
    production_series, select_actual_series, select_scope_series, workstream_series,
};
pub use dimensions::{dimension_options, filter_options, DimensionOption, FilterOptions};
pub use production::{
    compact_top_n, production_rollup, BreakdownEntry, DisplayPolicy, MetricChoice,
    ProductionRollup, OTHER_KEY,
};
pub use project::{project, project_all, role_share, scope_actual, DerivedRow};
pub use risk::{classify_risk, RiskTier};
pub use rollup::{burn_up, totals, BurnUp, Totals};
pub use view::{
    build_view, document_hash, view_cache_key, BreakdownGroup, DashboardView, ProductionView,
    ViewOptions,
};

pub const CRATE_NAME: &str = "burnline-engine";

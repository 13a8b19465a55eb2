#![forbid(unsafe_code)]
//! Burnline model SSOT.
//!
//! Wire-compatible types for the budget-execution input document: flat
//! resource facts, the sparse pre-aggregated monthly cube, production
//! metrics, and the immutable filter selection threaded through the engine.

mod cube;
mod document;
mod fact;
mod filter;
mod production;
pub mod serde_helpers;
mod series;

pub use cube::Cube;
pub use document::{
    Breakdowns, BudgetDocument, RoleBreakdown, ScopeBreakdown, TableSection,
};
pub use fact::{
    is_production_scope, validate_role_shares, BudgetFact, Role, RoleShare, ValidationError,
    PRODUCTION_SCOPE, ROLE_SHARE_TOLERANCE, UNASSIGNED_ROLE,
};
pub use filter::{Dimension, FilterSelection};
pub use production::{ProductionMetric, ProductionPersonBreakdown, ProductionSection};
pub use series::{MonthlySeries, MONTHS_PER_YEAR};

pub const CRATE_NAME: &str = "burnline-model";

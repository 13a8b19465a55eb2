// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Risk tier of one derived row, assigned by strict priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Unmapped,
    Unplanned,
    #[serde(rename = ">100%")]
    Over100,
    #[serde(rename = "90-99%")]
    Near100,
    #[serde(rename = "OK")]
    Ok,
}

impl RiskTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unmapped => "Unmapped",
            Self::Unplanned => "Unplanned",
            Self::Over100 => ">100%",
            Self::Near100 => "90-99%",
            Self::Ok => "OK",
        }
    }
}

/// Ordered priority list, first match wins. Pure and total; `utilization`
/// is the caller's `actual / plan` with zero-plan guarded to 0.
#[must_use]
pub fn classify_risk(is_unmapped: bool, plan: f64, actual: f64, utilization: f64) -> RiskTier {
    if is_unmapped {
        return RiskTier::Unmapped;
    }
    if plan <= 0.0 && actual > 0.0 {
        return RiskTier::Unplanned;
    }
    if utilization >= 1.0 {
        return RiskTier::Over100;
    }
    if utilization >= 0.9 {
        return RiskTier::Near100;
    }
    RiskTier::Ok
}

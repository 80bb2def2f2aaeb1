//! Royalty split structures shared with the dashboard.

use serde::{Deserialize, Serialize};

use crate::{AllocationId, ReleaseId};

/// One payee's share of a release's royalties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct Allocation {
    /// Stable within the owning set, never reused.
    #[ts(type = "number")]
    pub id: AllocationId,
    /// May be empty while the row is being edited.
    pub payee_name: String,
    /// May be empty while the row is being edited.
    pub payee_email: String,
    /// Display/grouping only; never affects computation.
    pub role: PayeeRole,
    /// Share in percent, within [0, 100]. Decimals allowed.
    pub percentage: f64,
}

/// Payee role as offered by the dashboard's role picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PayeeRole {
    Artist,
    Producer,
    Songwriter,
    Collaborator,
    Label,
}

impl Default for PayeeRole {
    fn default() -> Self {
        PayeeRole::Collaborator
    }
}

/// Input for appending a payee row to a split.
#[derive(Clone, Debug, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct NewAllocation {
    pub payee_name: String,
    pub payee_email: String,
    pub role: PayeeRole,
    pub percentage: f64,
}

impl Default for NewAllocation {
    fn default() -> Self {
        Self {
            payee_name: String::new(),
            payee_email: String::new(),
            role: PayeeRole::default(),
            percentage: 0.0,
        }
    }
}

/// Partial update for one allocation; only supplied fields change.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct AllocationPatch {
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub payee_email: Option<String>,
    #[serde(default)]
    pub role: Option<PayeeRole>,
    #[serde(default)]
    pub percentage: Option<f64>,
}

/// Submittability of a release's split set.
///
/// `Empty` is transient: drafts are seeded with one allocation on
/// creation, so the dashboard only ever renders the other two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SplitState {
    Empty,
    Incomplete,
    Complete,
}

/// Royalty statement for one release and reporting period.
#[derive(Clone, Debug, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct RoyaltyStatement {
    #[ts(type = "number")]
    pub release_id: ReleaseId,
    /// Reporting period label, e.g. "2026-07".
    pub period: String,
    /// Distributed amount in micro-units.
    #[ts(type = "number")]
    pub total_amount: u64,
    pub lines: Vec<StatementLine>,
}

/// One payee row of a royalty statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct StatementLine {
    #[ts(type = "number")]
    pub allocation_id: AllocationId,
    pub payee_name: String,
    pub role: PayeeRole,
    pub percentage: f64,
    /// Share in micro-units.
    #[ts(type = "number")]
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_wire_shape() {
        let allocation = Allocation {
            id: 1,
            payee_name: "Ada Lane".to_string(),
            payee_email: "ada@example.com".to_string(),
            role: PayeeRole::Artist,
            percentage: 62.5,
        };
        let json = serde_json::to_value(&allocation).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "payee_name": "Ada Lane",
                "payee_email": "ada@example.com",
                "role": "artist",
                "percentage": 62.5,
            })
        );
    }

    #[test]
    fn test_patch_defaults_to_no_changes() {
        let patch: AllocationPatch = serde_json::from_str("{}").expect("parse");
        assert!(patch.payee_name.is_none());
        assert!(patch.payee_email.is_none());
        assert!(patch.role.is_none());
        assert!(patch.percentage.is_none());
    }

    #[test]
    fn test_new_allocation_default() {
        let new = NewAllocation::default();
        assert_eq!(new.role, PayeeRole::Collaborator);
        assert_eq!(new.percentage, 0.0);
        assert!(new.payee_name.is_empty());
    }
}

//! Release structures shared with the dashboard.

use serde::{Deserialize, Serialize};

use crate::royalty::SplitState;
use crate::ReleaseId;

/// Where a release sits in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    Draft,
    Submitted,
}

/// Summary of a release for the catalog listing view.
#[derive(Clone, Debug, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct ReleaseSummary {
    #[ts(type = "number")]
    pub id: ReleaseId,
    pub title: String,
    pub primary_artist: String,
    /// ISO-8601 date as entered in the form, if set.
    pub release_date: Option<String>,
    pub status: ReleaseStatus,
    pub split_state: SplitState,
}

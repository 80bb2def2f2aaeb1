//! Release drafts and the submission gate.
//!
//! A draft opens with the primary artist holding the full split, gets
//! edited field by field from the release form, and can only move to
//! Submitted while its splits are in the Complete state. After a
//! successful submit the draft freezes and every edit is rejected.

use chorus_royalty::allocations::AllocationSet;
use chorus_types::release::{ReleaseStatus, ReleaseSummary};
use chorus_types::royalty::{AllocationPatch, NewAllocation, PayeeRole, SplitState};
use chorus_types::{AllocationId, ReleaseId};
use serde::{Deserialize, Serialize};

use crate::{ReleaseError, Result};

/// A release being prepared in the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReleaseDraft {
    id: ReleaseId,
    title: String,
    primary_artist: String,
    release_date: Option<String>,
    splits: AllocationSet,
    status: ReleaseStatus,
}

impl ReleaseDraft {
    /// Open a new draft, seeding the split with the primary artist at
    /// 100% so the set is never empty.
    pub fn new(id: ReleaseId, title: &str, primary_artist: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            primary_artist: primary_artist.to_string(),
            release_date: None,
            splits: AllocationSet::seeded(primary_artist, "", PayeeRole::Artist),
            status: ReleaseStatus::Draft,
        }
    }

    pub fn id(&self) -> ReleaseId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn primary_artist(&self) -> &str {
        &self.primary_artist
    }

    pub fn release_date(&self) -> Option<&str> {
        self.release_date.as_deref()
    }

    pub fn status(&self) -> ReleaseStatus {
        self.status
    }

    /// The draft's split set, for rendering the allocation rows.
    pub fn splits(&self) -> &AllocationSet {
        &self.splits
    }

    /// Submittability of the current splits.
    pub fn split_state(&self) -> SplitState {
        self.splits.state()
    }

    /// Rename the release.
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::AlreadySubmitted`] once the draft is frozen
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.ensure_editable()?;
        self.title = title.to_string();
        Ok(())
    }

    /// Set or clear the planned release date (ISO-8601 date string).
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::AlreadySubmitted`] once the draft is frozen
    pub fn set_release_date(&mut self, release_date: Option<&str>) -> Result<()> {
        self.ensure_editable()?;
        self.release_date = release_date.map(str::to_string);
        Ok(())
    }

    /// Append a payee row to the split.
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::AlreadySubmitted`] once the draft is frozen
    /// - [`ReleaseError::Royalty`] for an out-of-range percentage
    pub fn add_split(&mut self, new: NewAllocation) -> Result<AllocationId> {
        self.ensure_editable()?;
        Ok(self.splits.add_allocation(new)?)
    }

    /// Remove a payee row from the split.
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::AlreadySubmitted`] once the draft is frozen
    /// - [`ReleaseError::Royalty`] for the last remaining row or an
    ///   unknown id
    pub fn remove_split(&mut self, id: AllocationId) -> Result<()> {
        self.ensure_editable()?;
        Ok(self.splits.remove_allocation(id)?)
    }

    /// Patch a payee row.
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::AlreadySubmitted`] once the draft is frozen
    /// - [`ReleaseError::Royalty`] for an unknown id or out-of-range
    ///   percentage
    pub fn update_split(&mut self, id: AllocationId, patch: AllocationPatch) -> Result<()> {
        self.ensure_editable()?;
        Ok(self.splits.update_allocation(id, patch)?)
    }

    /// Move the release from Draft to Submitted.
    ///
    /// The gate re-checks the live set; a submittability flag computed
    /// earlier is never trusted.
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::AlreadySubmitted`] if the draft already went out
    /// - [`ReleaseError::SplitsIncomplete`] while the splits do not
    ///   total exactly 100%
    pub fn submit(&mut self) -> Result<()> {
        self.ensure_editable()?;
        if !self.splits.is_valid() {
            return Err(ReleaseError::SplitsIncomplete {
                total: self.splits.total_percentage(),
            });
        }

        self.status = ReleaseStatus::Submitted;
        tracing::info!(release = self.id, title = %self.title, "release submitted");
        Ok(())
    }

    /// Summary row for the catalog listing view.
    pub fn summary(&self) -> ReleaseSummary {
        ReleaseSummary {
            id: self.id,
            title: self.title.clone(),
            primary_artist: self.primary_artist.clone(),
            release_date: self.release_date.clone(),
            status: self.status,
            split_state: self.splits.state(),
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.status == ReleaseStatus::Submitted {
            return Err(ReleaseError::AlreadySubmitted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_royalty::RoyaltyError;

    fn draft() -> ReleaseDraft {
        ReleaseDraft::new(7, "Night Drive", "Ada Lane")
    }

    #[test]
    fn test_new_draft_is_seeded_and_submittable() {
        let draft = draft();
        assert_eq!(draft.status(), ReleaseStatus::Draft);
        assert_eq!(draft.split_state(), SplitState::Complete);

        let owner = draft.splits().get(1).expect("seeded allocation");
        assert_eq!(owner.payee_name, "Ada Lane");
        assert_eq!(owner.percentage, 100.0);
        assert_eq!(owner.role, PayeeRole::Artist);
    }

    #[test]
    fn test_submit_blocked_while_incomplete() {
        let mut draft = draft();
        draft
            .add_split(NewAllocation {
                payee_name: "Sam Ode".to_string(),
                percentage: 10.0,
                ..NewAllocation::default()
            })
            .expect("add");
        assert_eq!(draft.split_state(), SplitState::Incomplete);

        let err = draft.submit().expect_err("gate must block");
        assert_eq!(
            err.to_string(),
            "Royalty splits must total exactly 100%. Current total: 110%"
        );
        assert_eq!(draft.status(), ReleaseStatus::Draft, "draft stays editable");
    }

    #[test]
    fn test_submit_succeeds_once_complete() {
        let mut draft = draft();
        draft
            .add_split(NewAllocation {
                payee_name: "Sam Ode".to_string(),
                role: PayeeRole::Producer,
                percentage: 30.0,
                ..NewAllocation::default()
            })
            .expect("add");
        draft
            .update_split(
                1,
                AllocationPatch {
                    percentage: Some(70.0),
                    ..AllocationPatch::default()
                },
            )
            .expect("update");

        draft.submit().expect("submit");
        assert_eq!(draft.status(), ReleaseStatus::Submitted);
    }

    #[test]
    fn test_submitted_draft_is_frozen() {
        let mut draft = draft();
        draft.submit().expect("submit");

        assert!(matches!(
            draft.set_title("New Name"),
            Err(ReleaseError::AlreadySubmitted)
        ));
        assert!(matches!(
            draft.set_release_date(Some("2026-10-02")),
            Err(ReleaseError::AlreadySubmitted)
        ));
        assert!(matches!(
            draft.add_split(NewAllocation::default()),
            Err(ReleaseError::AlreadySubmitted)
        ));
        assert!(matches!(
            draft.update_split(1, AllocationPatch::default()),
            Err(ReleaseError::AlreadySubmitted)
        ));
        assert!(matches!(
            draft.remove_split(1),
            Err(ReleaseError::AlreadySubmitted)
        ));
        assert!(matches!(
            draft.submit(),
            Err(ReleaseError::AlreadySubmitted)
        ));
    }

    #[test]
    fn test_split_errors_surface_through_the_draft() {
        let mut draft = draft();
        let err = draft.remove_split(1).expect_err("last payee");
        assert!(matches!(
            err,
            ReleaseError::Royalty(RoyaltyError::LastAllocation)
        ));

        let err = draft
            .update_split(
                1,
                AllocationPatch {
                    percentage: Some(120.0),
                    ..AllocationPatch::default()
                },
            )
            .expect_err("out of range");
        assert!(matches!(
            err,
            ReleaseError::Royalty(RoyaltyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_metadata_edits() {
        let mut draft = draft();
        draft.set_title("Night Drive (Deluxe)").expect("title");
        draft.set_release_date(Some("2026-09-18")).expect("date");
        assert_eq!(draft.title(), "Night Drive (Deluxe)");
        assert_eq!(draft.release_date(), Some("2026-09-18"));

        draft.set_release_date(None).expect("clear date");
        assert_eq!(draft.release_date(), None);
    }

    #[test]
    fn test_summary_reflects_draft_state() {
        let mut draft = draft();
        draft
            .update_split(
                1,
                AllocationPatch {
                    percentage: Some(40.0),
                    ..AllocationPatch::default()
                },
            )
            .expect("update");

        let summary = draft.summary();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.title, "Night Drive");
        assert_eq!(summary.primary_artist, "Ada Lane");
        assert_eq!(summary.status, ReleaseStatus::Draft);
        assert_eq!(summary.split_state, SplitState::Incomplete);
    }
}

//! Payee allocations and the 100% rule.
//!
//! Every release carries an ordered set of payee allocations. While
//! the release is edited the set may pass through any total, but a
//! release is only submittable while the percentages sum to exactly
//! 100 and at least one payee remains.
//!
//! Out-of-range percentages are rejected at the edit boundary, never
//! clamped, so a stored allocation is always within [0, 100].

use chorus_types::royalty::{Allocation, AllocationPatch, NewAllocation, PayeeRole, SplitState};
use chorus_types::AllocationId;
use serde::{Deserialize, Serialize};

use crate::{Result, RoyaltyError};

/// A complete split: allocations must sum to this total.
pub const FULL_SHARE_PCT: f64 = 100.0;

/// Tolerance for the 100% comparison on decimal shares.
pub const PCT_EPSILON: f64 = 1e-6;

/// The ordered payee allocations attached to one release.
///
/// Ids come from a per-set counter and are never reused, so the
/// dashboard can key its rows on them across edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationSet {
    allocations: Vec<Allocation>,
    next_id: AllocationId,
}

impl AllocationSet {
    /// An empty set. Transient: drafts seed one allocation immediately.
    pub fn new() -> Self {
        Self {
            allocations: Vec::new(),
            next_id: 1,
        }
    }

    /// A set holding a single allocation at 100%, the state every new
    /// release draft opens in.
    pub fn seeded(payee_name: &str, payee_email: &str, role: PayeeRole) -> Self {
        Self {
            allocations: vec![Allocation {
                id: 1,
                payee_name: payee_name.to_string(),
                payee_email: payee_email.to_string(),
                role,
                percentage: FULL_SHARE_PCT,
            }],
            next_id: 2,
        }
    }

    /// The allocations in insertion order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Look up one allocation by id.
    pub fn get(&self, id: AllocationId) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Sum of all percentages. Zero for an empty set; never fails.
    pub fn total_percentage(&self) -> f64 {
        self.allocations.iter().map(|a| a.percentage).sum()
    }

    /// Whether the set is submittable: non-empty and totalling 100%
    /// within [`PCT_EPSILON`].
    pub fn is_valid(&self) -> bool {
        !self.allocations.is_empty()
            && (self.total_percentage() - FULL_SHARE_PCT).abs() <= PCT_EPSILON
    }

    /// Submittability state, recomputed from the current contents.
    pub fn state(&self) -> SplitState {
        if self.allocations.is_empty() {
            SplitState::Empty
        } else if self.is_valid() {
            SplitState::Complete
        } else {
            SplitState::Incomplete
        }
    }

    /// The inline error the submission form shows while the set is not
    /// submittable. `None` once the set is valid.
    pub fn validation_message(&self) -> Option<String> {
        if self.is_valid() {
            None
        } else {
            Some(format!(
                "Royalty splits must total exactly 100%. Current total: {}%",
                fmt_pct(self.total_percentage())
            ))
        }
    }

    /// Append a payee row and return its assigned id.
    ///
    /// The set-level total is deliberately not checked here: invalid
    /// intermediate totals are a normal editing state. The supplied
    /// percentage must still be in range.
    ///
    /// # Errors
    ///
    /// - [`RoyaltyError::OutOfRange`] if the percentage is outside [0, 100]
    pub fn add_allocation(&mut self, new: NewAllocation) -> Result<AllocationId> {
        ensure_in_range(new.percentage)?;

        let id = self.next_id;
        self.next_id += 1;
        self.allocations.push(Allocation {
            id,
            payee_name: new.payee_name,
            payee_email: new.payee_email,
            role: new.role,
            percentage: new.percentage,
        });

        tracing::debug!(id, total = self.total_percentage(), "allocation added");
        Ok(id)
    }

    /// Remove the allocation with the given id.
    ///
    /// # Errors
    ///
    /// - [`RoyaltyError::LastAllocation`] if only one allocation remains;
    ///   the set must always retain at least one payee
    /// - [`RoyaltyError::NotFound`] if the id is not in the set
    pub fn remove_allocation(&mut self, id: AllocationId) -> Result<()> {
        if self.allocations.len() == 1 {
            return Err(RoyaltyError::LastAllocation);
        }

        let index = self
            .allocations
            .iter()
            .position(|a| a.id == id)
            .ok_or(RoyaltyError::NotFound { id })?;
        self.allocations.remove(index);

        tracing::debug!(id, total = self.total_percentage(), "allocation removed");
        Ok(())
    }

    /// Apply a partial update to the allocation with the given id.
    ///
    /// Only fields present in the patch change; on any error the set
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// - [`RoyaltyError::NotFound`] if the id is not in the set
    /// - [`RoyaltyError::OutOfRange`] if the patched percentage is
    ///   outside [0, 100]
    pub fn update_allocation(&mut self, id: AllocationId, patch: AllocationPatch) -> Result<()> {
        let index = self
            .allocations
            .iter()
            .position(|a| a.id == id)
            .ok_or(RoyaltyError::NotFound { id })?;
        if let Some(percentage) = patch.percentage {
            ensure_in_range(percentage)?;
        }

        let allocation = &mut self.allocations[index];
        if let Some(payee_name) = patch.payee_name {
            allocation.payee_name = payee_name;
        }
        if let Some(payee_email) = patch.payee_email {
            allocation.payee_email = payee_email;
        }
        if let Some(role) = patch.role {
            allocation.role = role;
        }
        if let Some(percentage) = patch.percentage {
            allocation.percentage = percentage;
        }

        tracing::debug!(id, total = self.total_percentage(), "allocation updated");
        Ok(())
    }
}

impl Default for AllocationSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a percentage the way the dashboard shows totals: up to four
/// decimal places, trailing zeros trimmed.
pub fn fmt_pct(pct: f64) -> String {
    let fixed = format!("{pct:.4}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

// NaN and infinities fail the contains check and are rejected like any
// other out-of-range value.
fn ensure_in_range(percentage: f64) -> Result<()> {
    if !(0.0..=FULL_SHARE_PCT).contains(&percentage) {
        return Err(RoyaltyError::OutOfRange { percentage });
    }
    Ok(())
}

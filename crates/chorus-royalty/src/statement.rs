//! Payout distribution and royalty statements.
//!
//! Turns a payout amount plus a submittable allocation set into the
//! per-payee lines the royalty-reporting view renders. Amounts are
//! integers in micro-units; percentages convert to basis points so the
//! share math stays exact.

use chorus_types::royalty::{RoyaltyStatement, StatementLine};
use chorus_types::ReleaseId;

use crate::allocations::AllocationSet;
use crate::{Result, RoyaltyError};

/// Basis points in a full share (100%).
const BPS_SCALE: u128 = 10_000;

// Shares finer than 0.01% round to the nearest basis point for payout.
fn to_bps(percentage: f64) -> u128 {
    (percentage * 100.0).round() as u128
}

/// Distribute a payout amount across a submittable allocation set.
///
/// Every line gets the floor of its basis-point share of `amount`; the
/// first allocation absorbs the rounding remainder, so the lines always
/// sum to `amount` exactly.
///
/// # Arguments
///
/// * `amount` - Payout in micro-units
/// * `set` - The release's allocations; must be in the Complete state
///
/// # Errors
///
/// - [`RoyaltyError::ZeroAmount`] if `amount` is zero
/// - [`RoyaltyError::Incomplete`] if the set does not total 100%
/// - [`RoyaltyError::Overflow`] if the share arithmetic overflows
pub fn distribute(amount: u64, set: &AllocationSet) -> Result<Vec<StatementLine>> {
    if amount == 0 {
        return Err(RoyaltyError::ZeroAmount);
    }
    if !set.is_valid() {
        return Err(RoyaltyError::Incomplete {
            total: set.total_percentage(),
        });
    }

    let mut lines = Vec::with_capacity(set.len());
    let mut tail_total: u64 = 0;
    for (index, allocation) in set.allocations().iter().enumerate() {
        let cut = u128::from(amount)
            .checked_mul(to_bps(allocation.percentage))
            .ok_or(RoyaltyError::Overflow)?
            / BPS_SCALE;
        let cut = u64::try_from(cut).map_err(|_| RoyaltyError::Overflow)?;
        if index > 0 {
            tail_total = tail_total.checked_add(cut).ok_or(RoyaltyError::Overflow)?;
        }
        lines.push(StatementLine {
            allocation_id: allocation.id,
            payee_name: allocation.payee_name.clone(),
            role: allocation.role,
            percentage: allocation.percentage,
            amount: cut,
        });
    }

    // First payee takes the remainder so rounding never loses a micro-unit.
    let first_amount = amount
        .checked_sub(tail_total)
        .ok_or(RoyaltyError::Overflow)?;
    if let Some(first) = lines.first_mut() {
        first.amount = first_amount;
    }

    Ok(lines)
}

/// Build the statement for one release and reporting period.
///
/// # Errors
///
/// Same conditions as [`distribute`].
pub fn build_statement(
    release_id: ReleaseId,
    period: &str,
    amount: u64,
    set: &AllocationSet,
) -> Result<RoyaltyStatement> {
    let lines = distribute(amount, set)?;
    Ok(RoyaltyStatement {
        release_id,
        period: period.to_string(),
        total_amount: amount,
        lines,
    })
}

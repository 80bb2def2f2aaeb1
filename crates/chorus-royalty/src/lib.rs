//! # chorus-royalty
//!
//! Royalty split rules for releases: the payee allocation set every
//! release carries, its submittability rules, and payout distribution
//! into statement lines.
//!
//! ## Modules
//!
//! - [`allocations`] — payee allocations and the 100% rule
//! - [`statement`] — payout distribution and royalty statements

pub mod allocations;
pub mod statement;

use chorus_types::AllocationId;

/// Error types for royalty operations.
#[derive(Debug, thiserror::Error)]
pub enum RoyaltyError {
    /// A set must always retain at least one payee.
    #[error("a release must keep at least one royalty payee")]
    LastAllocation,

    /// The referenced allocation is not in the set.
    #[error("no allocation with id {id}")]
    NotFound {
        /// The id the operation referenced.
        id: AllocationId,
    },

    /// Percentages live in the closed interval [0, 100].
    #[error("percentage {percentage} is outside the allowed range 0-100")]
    OutOfRange {
        /// The rejected value.
        percentage: f64,
    },

    /// Payout amount is zero.
    #[error("payout amount is zero")]
    ZeroAmount,

    /// The set does not sum to 100% and cannot be distributed.
    #[error("splits must total exactly 100%, got {total}")]
    Incomplete {
        /// The actual total.
        total: f64,
    },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in payout calculation")]
    Overflow,
}

/// Convenience result type for royalty operations.
pub type Result<T> = std::result::Result<T, RoyaltyError>;

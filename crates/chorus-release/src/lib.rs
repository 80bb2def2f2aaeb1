//! # chorus-release
//!
//! Release-draft lifecycle for the dashboard: draft creation with a
//! seeded split, edit operations, the submission gate, and store
//! delivery plans.
//!
//! ## Modules
//!
//! - [`draft`] — release drafts and the submission gate
//! - [`delivery`] — store delivery plans and the partner gate

pub mod delivery;
pub mod draft;

use chorus_royalty::RoyaltyError;
use chorus_types::delivery::Dsp;

/// Error types for release operations.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    /// The release left Draft and no longer accepts edits.
    #[error("release has already been submitted and can no longer be edited")]
    AlreadySubmitted,

    /// The split set does not total 100%; shown inline on the form.
    #[error("Royalty splits must total exactly 100%. Current total: {}%", fmt_total(.total))]
    SplitsIncomplete {
        /// The actual total.
        total: f64,
    },

    /// Partner-delivered stores need a connected partner account.
    #[error("{dsp} is delivered via the distribution partner; connect a partner account first")]
    PartnerRequired {
        /// The store that was being enabled.
        dsp: Dsp,
    },

    /// The store is not part of this delivery plan.
    #[error("{dsp} is not part of this delivery plan")]
    UnknownDsp {
        /// The store the operation referenced.
        dsp: Dsp,
    },

    /// A split edit failed inside the allocation set.
    #[error(transparent)]
    Royalty(#[from] RoyaltyError),
}

fn fmt_total(total: &f64) -> String {
    chorus_royalty::allocations::fmt_pct(*total)
}

/// Convenience result type for release operations.
pub type Result<T> = std::result::Result<T, ReleaseError>;

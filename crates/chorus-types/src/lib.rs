//! # chorus-types
//!
//! Shared domain types used across the Chorus workspace.
//! These structures are the contract between the Rust core and the
//! artist/label dashboard; TypeScript bindings are generated from them.

pub mod delivery;
pub mod release;
pub mod royalty;

/// Common type aliases.
pub type AllocationId = u64;
pub type ReleaseId = u64;

/// Micro-units per unit of the payout currency (1 unit = 1,000,000 micro-units).
///
/// All money amounts in statements are integers in micro-units.
pub const MICRO_UNITS_PER_UNIT: u64 = 1_000_000;

#[cfg(test)]
mod tests {
    #[test]
    fn test_ts_export() {
        // This test just verifies the TS types can be generated without panicking.
        // Run `cargo test -p chorus-types -- --ignored export_ts_bindings` to write files.
    }

    #[test]
    #[ignore] // Run manually to generate bindings
    fn export_ts_bindings() {
        use ts_rs::TS;
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../bindings");
        std::fs::create_dir_all(&dir).unwrap();
        // Export all types
        crate::royalty::Allocation::export_all_to(&dir).unwrap();
        crate::royalty::RoyaltyStatement::export_all_to(&dir).unwrap();
        crate::release::ReleaseSummary::export_all_to(&dir).unwrap();
        crate::delivery::DspProfile::export_all_to(&dir).unwrap();
    }
}

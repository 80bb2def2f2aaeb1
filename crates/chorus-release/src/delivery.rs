//! Store delivery plans and the partner gate.
//!
//! Some stores take a direct feed; others only accept releases through
//! the distribution partner. A partner-delivered store cannot be
//! enabled until a partner account is connected.

use chorus_types::delivery::{Dsp, DspProfile};
use serde::{Deserialize, Serialize};

use crate::{ReleaseError, Result};

/// The stores a release will be delivered to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeliveryPlan {
    profiles: Vec<DspProfile>,
}

impl DeliveryPlan {
    /// A plan over an explicit store lineup.
    pub fn new(profiles: Vec<DspProfile>) -> Self {
        Self { profiles }
    }

    /// The platform's standard lineup: direct feeds start enabled,
    /// partner-delivered stores start disabled.
    pub fn standard() -> Self {
        let direct = [Dsp::Spotify, Dsp::AppleMusic, Dsp::YoutubeMusic];
        let via_partner = [Dsp::AmazonMusic, Dsp::Tidal, Dsp::Deezer];

        let mut profiles = Vec::with_capacity(direct.len() + via_partner.len());
        profiles.extend(direct.map(|dsp| DspProfile {
            dsp,
            via_partner: false,
            enabled: true,
        }));
        profiles.extend(via_partner.map(|dsp| DspProfile {
            dsp,
            via_partner: true,
            enabled: false,
        }));
        Self { profiles }
    }

    pub fn profiles(&self) -> &[DspProfile] {
        &self.profiles
    }

    pub fn is_enabled(&self, dsp: Dsp) -> bool {
        self.profiles.iter().any(|p| p.dsp == dsp && p.enabled)
    }

    /// Toggle delivery to one store.
    ///
    /// Disabling always succeeds for a known store; enabling a
    /// partner-delivered store requires a connected partner account.
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::UnknownDsp`] if the store is not in the plan
    /// - [`ReleaseError::PartnerRequired`] when enabling a
    ///   partner-delivered store without a connected partner account
    pub fn set_enabled(&mut self, dsp: Dsp, enabled: bool, partner_connected: bool) -> Result<()> {
        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.dsp == dsp)
            .ok_or(ReleaseError::UnknownDsp { dsp })?;

        if enabled && profile.via_partner && !partner_connected {
            return Err(ReleaseError::PartnerRequired { dsp });
        }

        profile.enabled = enabled;
        tracing::debug!(dsp = %dsp, enabled, "store delivery toggled");
        Ok(())
    }
}

impl Default for DeliveryPlan {
    fn default() -> Self {
        Self::standard()
    }
}

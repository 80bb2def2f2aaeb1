//! Store delivery structures shared with the dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Digital service providers the platform delivers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Dsp {
    Spotify,
    AppleMusic,
    YoutubeMusic,
    AmazonMusic,
    Tidal,
    Deezer,
}

impl fmt::Display for Dsp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dsp::Spotify => "Spotify",
            Dsp::AppleMusic => "Apple Music",
            Dsp::YoutubeMusic => "YouTube Music",
            Dsp::AmazonMusic => "Amazon Music",
            Dsp::Tidal => "TIDAL",
            Dsp::Deezer => "Deezer",
        };
        f.write_str(name)
    }
}

/// One store row in the delivery section of the release form.
#[derive(Clone, Debug, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct DspProfile {
    pub dsp: Dsp,
    /// Delivery goes through the distribution partner, not a direct feed.
    pub via_partner: bool,
    pub enabled: bool,
}

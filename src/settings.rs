//! Game settings and preferences
//!
//! Chosen on the Options screen or supplied as JSON by the host page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;

/// Match duration choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchLength {
    #[default]
    Two,
    Four,
    Six,
}

impl MatchLength {
    pub const ALL: [MatchLength; 3] = [MatchLength::Two, MatchLength::Four, MatchLength::Six];

    pub fn seconds(&self) -> u32 {
        match self {
            MatchLength::Two => 120,
            MatchLength::Four => 240,
            MatchLength::Six => 360,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLength::Two => "2 minutes",
            MatchLength::Four => "4 minutes",
            MatchLength::Six => "6 minutes",
        }
    }

}

/// A match length string that names none of the choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMatchLength(pub String);

impl fmt::Display for UnknownMatchLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown match length {:?}", self.0)
    }
}

impl std::error::Error for UnknownMatchLength {}

impl FromStr for MatchLength {
    type Err = UnknownMatchLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2" | "two" | "120" => Ok(MatchLength::Two),
            "4" | "four" | "240" => Ok(MatchLength::Four),
            "6" | "six" | "360" => Ok(MatchLength::Six),
            _ => Err(UnknownMatchLength(s.to_owned())),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Length of a match
    pub match_length: MatchLength,
    /// Dust and feather effects
    pub particles: bool,
    /// Upper bound on live particles
    pub max_particles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_length: MatchLength::Two,
            particles: true,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings ({})", settings.match_length.as_str());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Read the host page's settings value: a JSON object, or just a match
    /// length such as `"4"` or `"six"`
    pub fn from_host(value: &str) -> Self {
        if value.trim_start().starts_with('{') {
            return Self::from_json_or_default(value);
        }
        match value.parse::<MatchLength>() {
            Ok(match_length) => {
                log::info!("Match length from host: {}", match_length.as_str());
                Self {
                    match_length,
                    ..Self::default()
                }
            }
            Err(e) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
        }
    }

    /// Effective particle count cap
    pub fn particle_cap(&self) -> usize {
        if self.particles { self.max_particles } else { 0 }
    }
}

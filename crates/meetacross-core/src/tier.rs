//! Convenience tiers for a participant's local meeting time.
//!
//! All bounds are in minutes since local midnight. The end of a meeting is
//! `start + duration` and is not wrapped at 1440, so a meeting that starts
//! late in the evening never fits the standard or extended tiers.

use serde::{Deserialize, Serialize};

/// 09:00
pub const STANDARD_START: u32 = 9 * 60;
/// 17:00
pub const STANDARD_END: u32 = 17 * 60;
/// 07:00
pub const EXTENDED_START: u32 = 7 * 60;
/// 20:00
pub const EXTENDED_END: u32 = 20 * 60;
/// 20:00
pub const LATE_NIGHT_START: u32 = 20 * 60;
/// 07:00
pub const LATE_NIGHT_END: u32 = 7 * 60;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Convenience tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Standard,
    Extended,
    LateNight,
}

impl Tier {
    /// Score contribution of a participant in this tier.
    pub fn weight(self) -> u32 {
        match self {
            Self::Standard => 3,
            Self::Extended => 2,
            Self::LateNight => 1,
        }
    }

    /// Short label used in rendered results.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
            Self::LateNight => "late night",
        }
    }

    /// Marker used in exported meeting details.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Standard => "✅",
            Self::Extended => "⚠️",
            Self::LateNight => "🌙",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Indicator for an outcome with no tier at all.
pub const NO_TIER_INDICATOR: &str = "🕙";

/// Which tiers a local start time satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierFlags {
    pub is_standard: bool,
    pub is_extended: bool,
    pub is_late_night: bool,
}

impl TierFlags {
    /// Classify a meeting starting `start_minutes` after local midnight.
    ///
    /// Extended only applies when `allow_extended` is set and the slot is
    /// not already standard. Late night is tested on its own time range and
    /// only counts when the participant allows it.
    pub fn classify(
        start_minutes: u32,
        duration_minutes: u32,
        allow_extended: bool,
        allow_late_night: bool,
    ) -> Self {
        let end_minutes = start_minutes.saturating_add(duration_minutes);

        let is_standard = start_minutes >= STANDARD_START && end_minutes <= STANDARD_END;
        let fits_extended = start_minutes >= EXTENDED_START && end_minutes <= EXTENDED_END;
        let is_extended = allow_extended && fits_extended && !is_standard;

        let evening = start_minutes >= LATE_NIGHT_START && start_minutes < MINUTES_PER_DAY;
        let early_morning = end_minutes <= LATE_NIGHT_END && end_minutes > 0;
        let is_late_night = allow_late_night && (evening || early_morning);

        Self {
            is_standard,
            is_extended,
            is_late_night,
        }
    }

    /// Best satisfied tier, or `None` when the participant is unavailable.
    pub fn tier(&self) -> Option<Tier> {
        if self.is_standard {
            Some(Tier::Standard)
        } else if self.is_extended {
            Some(Tier::Extended)
        } else if self.is_late_night {
            Some(Tier::LateNight)
        } else {
            None
        }
    }

    pub fn is_available(&self) -> bool {
        self.tier().is_some()
    }

    /// Score contribution; zero when unavailable.
    pub fn weight(&self) -> u32 {
        self.tier().map_or(0, Tier::weight)
    }
}

//! Slot scheduler for meetings across time zones.
//!
//! This module finds the most convenient meeting start times on one UTC day:
//! - Splits the day into 48 half-hour candidate slots
//! - Converts each slot into every participant's local wall-clock time
//! - Classifies each participant into a convenience tier
//! - Keeps only slots where every participant is available
//! - Ranks by score (highest first), earlier slot first on ties

use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog;
use crate::clock::{CivilClock, TzClock};
use crate::error::{InputError, Result};
use crate::tier::{Tier, TierFlags};

/// Width of a candidate slot (minutes)
pub const SLOT_MINUTES: i64 = 30;
/// Candidate slots per UTC day
pub const SLOTS_PER_DAY: usize = 48;
/// Upper bound on returned candidates
pub const MAX_RESULTS: usize = 5;

/// Suffix marking a participant as fine with late-night meetings.
const LATE_NIGHT_SUFFIX: &str = ":night";

/// One person taking part in the meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSpec {
    pub zone_id: String,
    pub city_name: String,
    pub allow_late_night: bool,
}

impl ParticipantSpec {
    pub fn new(
        zone_id: impl Into<String>,
        city_name: impl Into<String>,
        allow_late_night: bool,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            city_name: city_name.into(),
            allow_late_night,
        }
    }

    /// Build from a catalog zone id, taking the city name from the catalog.
    ///
    /// # Errors
    /// Returns [`InputError::UnrecognizedParticipant`] if the zone is not in
    /// the catalog.
    pub fn from_zone(
        zone_id: &str,
        allow_late_night: bool,
    ) -> std::result::Result<Self, InputError> {
        catalog::lookup(zone_id)
            .map(|tz| Self::new(tz.zone_id, tz.city_name, allow_late_night))
            .ok_or_else(|| InputError::UnrecognizedParticipant {
                text: zone_id.to_string(),
            })
    }
}

/// Parses `ZONE_OR_CITY[:night]`, e.g. `Asia/Tokyo:night` or `London`.
impl FromStr for ParticipantSpec {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, allow_late_night) = match trimmed.strip_suffix(LATE_NIGHT_SUFFIX) {
            Some(name) => (name, true),
            None => (trimmed, false),
        };

        catalog::resolve(name)
            .map(|tz| Self::new(tz.zone_id, tz.city_name, allow_late_night))
            .ok_or_else(|| InputError::UnrecognizedParticipant {
                text: s.to_string(),
            })
    }
}

/// How one participant fares in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantOutcome {
    pub city_name: String,
    pub local_time_display: String,
    pub is_standard: bool,
    pub is_extended: bool,
    pub is_late_night: bool,
}

impl ParticipantOutcome {
    fn new(city_name: &str, local_time_display: String, flags: TierFlags) -> Self {
        Self {
            city_name: city_name.to_string(),
            local_time_display,
            is_standard: flags.is_standard,
            is_extended: flags.is_extended,
            is_late_night: flags.is_late_night,
        }
    }

    pub fn flags(&self) -> TierFlags {
        TierFlags {
            is_standard: self.is_standard,
            is_extended: self.is_extended,
            is_late_night: self.is_late_night,
        }
    }

    /// Best tier this participant reached.
    pub fn tier(&self) -> Option<Tier> {
        self.flags().tier()
    }
}

/// A meeting start time every participant can attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub utc_epoch_millis: i64,
    pub score: u32,
    /// One entry per participant, in input order.
    pub participant_outcomes: Vec<ParticipantOutcome>,
}

impl CandidateSlot {
    /// Start instant, or `None` if the millis are outside chrono's range.
    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.utc_epoch_millis)
    }

    /// End instant for a meeting of `duration_minutes`, or `None` on overflow.
    pub fn end_utc(&self, duration_minutes: i64) -> Option<DateTime<Utc>> {
        self.start_utc()?
            .checked_add_signed(Duration::try_minutes(duration_minutes)?)
    }
}

/// A zone conversion that failed while evaluating a slot.
///
/// The participant was treated as unavailable for that slot only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDiagnostic {
    pub slot_utc_millis: i64,
    /// Zero-based index into the participant list.
    pub participant_index: usize,
    pub zone_id: String,
    pub message: String,
}

/// Result of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Best-first, at most [`MAX_RESULTS`] entries. Empty means no slot fits.
    pub slots: Vec<CandidateSlot>,
    pub diagnostics: Vec<ZoneDiagnostic>,
}

impl ScheduleOutcome {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Validated scheduling input.
struct Plan<'a> {
    start_of_day: DateTime<Utc>,
    duration_minutes: u32,
    participants: &'a [ParticipantSpec],
    allow_extended: bool,
}

/// Ranks meeting slots on a UTC day.
pub struct SlotScheduler<C: CivilClock = TzClock> {
    clock: C,
}

impl SlotScheduler<TzClock> {
    /// Create a scheduler using the bundled zone database
    pub fn new() -> Self {
        Self { clock: TzClock }
    }
}

impl Default for SlotScheduler<TzClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CivilClock> SlotScheduler<C> {
    /// Create with a custom civil-time source
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Find the best meeting slots on `date` (a UTC calendar day).
    ///
    /// # Arguments
    /// * `date` - `YYYY-MM-DD`
    /// * `duration_minutes` - meeting length, must be positive
    /// * `participants` - non-empty, every zone must be in the catalog
    /// * `allow_extended` - admit 07:00-20:00 local starts
    ///
    /// # Errors
    /// Returns [`InputError`] (wrapped in `CoreError`) before any slot is
    /// evaluated if the input is invalid. Finding no slot is not an error.
    pub fn schedule(
        &self,
        date: &str,
        duration_minutes: i64,
        participants: &[ParticipantSpec],
        allow_extended: bool,
    ) -> Result<ScheduleOutcome> {
        let plan = validate(date, duration_minutes, participants, allow_extended)?;

        let mut outcome = ScheduleOutcome::default();
        let mut retained = Vec::new();

        for i in 0..SLOTS_PER_DAY {
            let slot_start = plan.start_of_day + Duration::minutes(i as i64 * SLOT_MINUTES);
            if let Some(slot) = self.evaluate_slot(&plan, slot_start, &mut outcome.diagnostics) {
                retained.push(slot);
            }
        }

        let qualifying = retained.len();
        rank(&mut retained);
        retained.truncate(MAX_RESULTS);

        debug!(
            date,
            duration_minutes,
            participants = participants.len(),
            qualifying,
            returned = retained.len(),
            "scheduling finished"
        );

        outcome.slots = retained;
        Ok(outcome)
    }

    /// Evaluate every participant for one slot, stopping at the first one
    /// who cannot attend.
    fn evaluate_slot(
        &self,
        plan: &Plan<'_>,
        slot_start: DateTime<Utc>,
        diagnostics: &mut Vec<ZoneDiagnostic>,
    ) -> Option<CandidateSlot> {
        let utc_epoch_millis = slot_start.timestamp_millis();
        let mut score = 0;
        let mut participant_outcomes = Vec::with_capacity(plan.participants.len());

        for (index, participant) in plan.participants.iter().enumerate() {
            let local = match self.clock.local_time(slot_start, &participant.zone_id) {
                Ok(local) => local,
                Err(err) => {
                    warn!(
                        zone = %participant.zone_id,
                        participant = index + 1,
                        slot = %slot_start,
                        "zone conversion failed: {err}"
                    );
                    diagnostics.push(ZoneDiagnostic {
                        slot_utc_millis: utc_epoch_millis,
                        participant_index: index,
                        zone_id: participant.zone_id.clone(),
                        message: err.to_string(),
                    });
                    return None;
                }
            };

            let flags = TierFlags::classify(
                local.minutes_since_midnight,
                plan.duration_minutes,
                plan.allow_extended,
                participant.allow_late_night,
            );

            let Some(tier) = flags.tier() else {
                debug!(
                    slot = %slot_start,
                    city = %participant.city_name,
                    local = %local.display,
                    "slot rejected"
                );
                return None;
            };

            score += tier.weight();
            participant_outcomes.push(ParticipantOutcome::new(
                &participant.city_name,
                local.display,
                flags,
            ));
        }

        Some(CandidateSlot {
            utc_epoch_millis,
            score,
            participant_outcomes,
        })
    }
}

/// Find the best meeting slots with the bundled zone database.
///
/// See [`SlotScheduler::schedule`].
pub fn schedule(
    date: &str,
    duration_minutes: i64,
    participants: &[ParticipantSpec],
    allow_extended: bool,
) -> Result<ScheduleOutcome> {
    SlotScheduler::new().schedule(date, duration_minutes, participants, allow_extended)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
        value: value.to_string(),
    })
}

fn validate<'a>(
    date: &str,
    duration_minutes: i64,
    participants: &'a [ParticipantSpec],
    allow_extended: bool,
) -> std::result::Result<Plan<'a>, InputError> {
    let day = parse_date(date)?;

    if duration_minutes <= 0 {
        return Err(InputError::NonPositiveDuration {
            minutes: duration_minutes,
        });
    }

    if participants.is_empty() {
        return Err(InputError::NoParticipants);
    }

    for (index, participant) in participants.iter().enumerate() {
        if catalog::lookup(&participant.zone_id).is_none() {
            return Err(InputError::UnknownZone {
                position: index + 1,
                zone_id: participant.zone_id.clone(),
            });
        }
    }

    Ok(Plan {
        start_of_day: day.and_time(NaiveTime::MIN).and_utc(),
        // Anything longer than a day is unavailable everywhere anyway.
        duration_minutes: u32::try_from(duration_minutes).unwrap_or(u32::MAX),
        participants,
        allow_extended,
    })
}

/// Score descending, then earlier slot first.
fn rank(slots: &mut [CandidateSlot]) {
    slots.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.utc_epoch_millis.cmp(&b.utc_epoch_millis))
    });
}

//! Shareable meeting details for a chosen slot.
//!
//! Both builders are pure: writing to the clipboard or opening a browser is
//! the caller's job, and a failure there never touches the scheduling result.

use chrono::{DateTime, Utc};
use url::Url;

use crate::clock::format_utc_time;
use crate::error::{InputError, Result};
use crate::scheduler::{parse_date, CandidateSlot, ParticipantOutcome};
use crate::tier::NO_TIER_INDICATOR;

/// Web calendar "create event" endpoint.
pub const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

const RULE: &str = "========================";
const FOOTER: &str = "Scheduled with MeetAcrossTimezones";

fn check_duration(duration_minutes: i64) -> std::result::Result<(), InputError> {
    if duration_minutes <= 0 {
        return Err(InputError::NonPositiveDuration {
            minutes: duration_minutes,
        });
    }
    Ok(())
}

/// Start and end of `slot`, rejecting out-of-range instants.
fn slot_range(
    slot: &CandidateSlot,
    duration_minutes: i64,
) -> std::result::Result<(DateTime<Utc>, DateTime<Utc>), InputError> {
    check_duration(duration_minutes)?;
    slot.start_utc()
        .zip(slot.end_utc(duration_minutes))
        .ok_or(InputError::InvalidSlot {
            utc_epoch_millis: slot.utc_epoch_millis,
            duration_minutes,
        })
}

fn indicator(outcome: &ParticipantOutcome) -> &'static str {
    outcome.tier().map_or(NO_TIER_INDICATOR, |tier| tier.indicator())
}

fn participant_line(outcome: &ParticipantOutcome) -> String {
    format!(
        "{} {}: {}",
        indicator(outcome),
        outcome.city_name,
        outcome.local_time_display
    )
}

/// `Mon Jun 10 2024`
fn date_line(instant: DateTime<Utc>) -> String {
    instant.format("%a %b %d %Y").to_string()
}

/// `20240610T080000Z`
fn compact_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Plain-text meeting summary suitable for pasting into chat or email.
///
/// # Errors
/// Returns [`InputError::NonPositiveDuration`] for a non-positive duration
/// and [`InputError::InvalidSlot`] if the meeting does not fit chrono's range.
pub fn clipboard_text(slot: &CandidateSlot, duration_minutes: i64) -> Result<String> {
    let (start, end) = slot_range(slot, duration_minutes)?;

    let mut text = String::from("INTERNATIONAL MEETING DETAILS\n");
    text.push_str(RULE);
    text.push_str("\n\n");
    text.push_str(&format!("📆 Date: {}\n", date_line(start)));
    text.push_str(&format!(
        "⏰ Time: {} - {} UTC\n",
        format_utc_time(start),
        format_utc_time(end)
    ));
    text.push_str(&format!("⏱️ Duration: {duration_minutes} minutes\n\n"));
    text.push_str("LOCAL TIMES FOR PARTICIPANTS:\n");
    text.push_str(RULE);
    text.push_str("\n\n");

    for outcome in &slot.participant_outcomes {
        text.push_str(&participant_line(outcome));
        text.push('\n');
    }

    Ok(text)
}

/// Link that opens a pre-filled "new event" form in a web calendar.
///
/// `date` is the day originally scheduled, echoed into the description.
///
/// # Errors
/// Returns an input error for a non-positive duration, an invalid `date`
/// or a meeting that does not fit chrono's range.
pub fn calendar_link(slot: &CandidateSlot, date: &str, duration_minutes: i64) -> Result<Url> {
    let (start, end) = slot_range(slot, duration_minutes)?;
    let selected = parse_date(date)?;

    let title = format!(
        "International Meeting - {} at {} UTC",
        start.format("%b %-d"),
        format_utc_time(start)
    );

    let mut details = String::from("*INTERNATIONAL MEETING DETAILS*\n\n");
    details.push_str(&format!(
        "📅 Original Selected Date: {} (UTC for reference)\n",
        selected.format("%a %b %d %Y")
    ));
    details.push_str(&format!(
        "UTC Start: {}\n",
        start.format("%a, %d %b %Y %H:%M:%S GMT")
    ));
    details.push_str(&format!("⏱️ Duration: {duration_minutes} minutes\n\n"));
    details.push_str("*LOCAL TIMES FOR PARTICIPANTS:*\n\n");
    for outcome in &slot.participant_outcomes {
        details.push_str(&participant_line(outcome));
        details.push('\n');
    }
    details.push_str("\n\n------------------\n");
    details.push_str(FOOTER);

    let dates = format!("{}/{}", compact_utc(start), compact_utc(end));
    let url = Url::parse_with_params(
        CALENDAR_RENDER_URL,
        &[
            ("action", "TEMPLATE"),
            ("text", title.as_str()),
            ("dates", dates.as_str()),
            ("details", details.as_str()),
            ("ctz", "UTC"),
        ],
    )?;
    Ok(url)
}

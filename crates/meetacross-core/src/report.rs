//! Plain-text rendering of scheduling results.

use indoc::indoc;

use crate::scheduler::{ParticipantOutcome, ScheduleOutcome};

const NO_RESULTS: &str = indoc! {"
    No Ideal Times Found
    No suitable meeting times found with the current criteria. Try the following:
      - Select \"Allow extended hours\".
      - Allow \"Late night OK\" for more participants.
      - Choose a different date or a shorter meeting duration.
"};

const LEGEND: &str = indoc! {"
    Legend:
      standard    Standard hours (9 AM - 5 PM)
      extended    Extended hours (7 AM - 8 PM)
      late night  Late night hours (if allowed)
"};

/// Rendering switches.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_legend: true }
    }
}

fn outcome_line(outcome: &ParticipantOutcome) -> String {
    let label = outcome.tier().map_or("other", |tier| tier.label());
    format!(
        "  {}: {} ({label})",
        outcome.city_name, outcome.local_time_display
    )
}

/// Render ranked options, or the no-results explanation when empty.
pub fn render_text(outcome: &ScheduleOutcome, options: RenderOptions) -> String {
    let mut out = String::new();

    if outcome.is_empty() {
        out.push_str(NO_RESULTS);
    } else {
        for (index, slot) in outcome.slots.iter().enumerate() {
            let heading = slot.start_utc().map_or_else(
                || format!("{} ms", slot.utc_epoch_millis),
                |start| start.format("%a, %b %-d, %-I:%M %p").to_string(),
            );
            out.push_str(&format!("Option {} ({heading} UTC)\n", index + 1));
            for participant in &slot.participant_outcomes {
                out.push_str(&outcome_line(participant));
                out.push('\n');
            }
            out.push('\n');
        }
        if options.show_legend {
            out.push_str(LEGEND);
        }
    }

    for diagnostic in &outcome.diagnostics {
        out.push_str(&format!(
            "warning: participant {} ({}) skipped for one slot: {}\n",
            diagnostic.participant_index + 1,
            diagnostic.zone_id,
            diagnostic.message
        ));
    }

    out
}

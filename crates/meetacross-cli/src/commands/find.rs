use chrono::{Duration, Utc};
use clap::Args;
use tracing::{debug, warn};
use meetacross_core::{
    calendar_link, clipboard_text, render_text, schedule, CandidateSlot, Config, ParticipantSpec,
    RenderOptions, ScheduleOutcome,
};

#[derive(Args)]
pub struct FindArgs {
    /// Meeting date as YYYY-MM-DD (UTC day). Defaults to tomorrow
    #[arg(long)]
    date: Option<String>,
    /// Meeting length in minutes (defaults to meeting.duration_minutes)
    #[arg(long, allow_negative_numbers = true)]
    duration: Option<i64>,
    /// Participant as ZONE_OR_CITY[:night], repeat per person
    #[arg(short, long = "participant", value_name = "ZONE")]
    participants: Vec<String>,
    /// Allow extended hours (7 AM - 8 PM)
    #[arg(long)]
    extended: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
    /// Print shareable meeting details for option N
    #[arg(long, value_name = "N")]
    copy: Option<usize>,
    /// Print a calendar link for option N
    #[arg(long, value_name = "N")]
    calendar: Option<usize>,
    /// Open the calendar link in a browser
    #[arg(long, requires = "calendar")]
    open: bool,
}

fn tomorrow() -> String {
    (Utc::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn parse_participants(texts: &[String]) -> CliResult<Vec<ParticipantSpec>> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            text.parse::<ParticipantSpec>().map_err(|e| {
                Box::<dyn std::error::Error>::from(format!("participant {}: {e}", i + 1))
            })
        })
        .collect()
}

fn pick(outcome: &ScheduleOutcome, option: usize) -> CliResult<&CandidateSlot> {
    option
        .checked_sub(1)
        .and_then(|index| outcome.slots.get(index))
        .ok_or_else(|| {
            Box::<dyn std::error::Error>::from(format!(
                "option {option} does not exist ({} found)",
                outcome.slots.len()
            ))
        })
}

pub fn run(args: FindArgs) -> CliResult<()> {
    let config = Config::load_or_default();

    let date = args.date.unwrap_or_else(tomorrow);
    let duration = args.duration.unwrap_or(config.meeting.duration_minutes);
    let allow_extended = args.extended || config.meeting.allow_extended;
    let texts = if args.participants.is_empty() {
        config.meeting.participants.clone()
    } else {
        args.participants
    };
    let participants = parse_participants(&texts)?;
    debug!(
        date = %date,
        duration,
        participants = participants.len(),
        allow_extended,
        "finding meeting slots"
    );

    let outcome = schedule(&date, duration, &participants, allow_extended)?;

    if let Some(option) = args.copy {
        print!("{}", clipboard_text(pick(&outcome, option)?, duration)?);
    }

    if let Some(option) = args.calendar {
        let url = calendar_link(pick(&outcome, option)?, &date, duration)?;
        println!("{url}");
        if args.open {
            match open::that(url.as_str()) {
                Ok(()) => {
                    debug!(url = %url, "opened calendar link");
                    eprintln!("Opening calendar...");
                }
                Err(e) => {
                    warn!(error = %e, "could not open browser");
                    eprintln!("Calendar link ready, open it manually ({e})");
                }
            }
        }
    }

    if args.copy.is_some() || args.calendar.is_some() {
        return Ok(());
    }

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let options = RenderOptions {
            show_legend: config.output.show_legend,
        };
        print!("{}", render_text(&outcome, options));
    }
    Ok(())
}

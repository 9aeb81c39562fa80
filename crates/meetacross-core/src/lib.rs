//! # MeetAcross Core Library
//!
//! This library finds meeting times that are civil for everyone taking part
//! from different time zones on a single UTC calendar day. It follows a
//! CLI-first philosophy: the `meetacross` binary is a thin layer over the
//! same pure functions exposed here.
//!
//! ## Architecture
//!
//! - **Catalog**: fixed table of supported cities and their IANA zones
//! - **Clock**: zone-aware UTC to wall-clock conversion (DST aware)
//! - **Scheduler**: half-hour slot enumeration, tier classification,
//!   all-or-nothing availability, scoring and ranking
//! - **Export / Report**: clipboard text, calendar links and text rendering
//!   of a scheduling result
//!
//! ## Key Components
//!
//! - [`SlotScheduler`]: ranks candidate slots for a day
//! - [`schedule`]: one-call entry point using the bundled zone database
//! - [`CivilClock`]: trait for the civil-time conversion capability
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub mod scheduler;
pub mod tier;

pub use catalog::{TimeZoneEntry, CATALOG};
pub use clock::{CivilClock, LocalTime, TzClock};
pub use config::Config;
pub use error::{ConfigError, CoreError, InputError, ZoneConversionError};
pub use export::{calendar_link, clipboard_text};
pub use report::{render_text, RenderOptions};
pub use scheduler::{
    schedule, CandidateSlot, ParticipantOutcome, ParticipantSpec, ScheduleOutcome, SlotScheduler,
    ZoneDiagnostic, MAX_RESULTS, SLOTS_PER_DAY, SLOT_MINUTES,
};
pub use tier::{Tier, TierFlags};

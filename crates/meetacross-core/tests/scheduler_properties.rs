//! Property tests for scheduler ordering and availability invariants.

use chrono::{Duration, NaiveDate, NaiveTime};
use meetacross_core::{
    catalog, schedule, ParticipantSpec, MAX_RESULTS, SLOTS_PER_DAY, SLOT_MINUTES,
};
use proptest::prelude::*;

fn zone_ids() -> Vec<&'static str> {
    catalog::list_all().iter().map(|tz| tz.zone_id).collect()
}

fn participants() -> impl Strategy<Value = Vec<ParticipantSpec>> {
    prop::collection::vec((prop::sample::select(zone_ids()), any::<bool>()), 1..5).prop_map(
        |picks| {
            picks
                .into_iter()
                .map(|(zone, late)| ParticipantSpec::from_zone(zone, late).unwrap())
                .collect()
        },
    )
}

fn dates() -> impl Strategy<Value = String> {
    (0i64..730).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (base + Duration::days(offset)).format("%Y-%m-%d").to_string()
    })
}

fn durations() -> impl Strategy<Value = i64> {
    prop::sample::select(vec![15i64, 30, 45, 60, 90, 120, 240, 480])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn results_are_bounded_and_ranked(
        date in dates(),
        duration in durations(),
        people in participants(),
        extended in any::<bool>(),
    ) {
        let outcome = schedule(&date, duration, &people, extended).unwrap();
        prop_assert!(outcome.slots.len() <= MAX_RESULTS);
        for pair in outcome.slots.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score
                        && pair[0].utc_epoch_millis < pair[1].utc_epoch_millis)
            );
        }
    }

    #[test]
    fn every_participant_is_available_in_returned_slots(
        date in dates(),
        duration in durations(),
        people in participants(),
        extended in any::<bool>(),
    ) {
        let outcome = schedule(&date, duration, &people, extended).unwrap();
        let day_start = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis();
        let stride = SLOT_MINUTES * 60_000;

        for slot in &outcome.slots {
            prop_assert_eq!(slot.participant_outcomes.len(), people.len());

            let offset = slot.utc_epoch_millis - day_start;
            prop_assert!(offset >= 0 && offset % stride == 0);
            prop_assert!(offset / stride < SLOTS_PER_DAY as i64);

            let mut expected = 0;
            for (result, person) in slot.participant_outcomes.iter().zip(&people) {
                let tier = result.tier();
                prop_assert!(tier.is_some());
                prop_assert_eq!(&result.city_name, &person.city_name);
                if result.is_extended {
                    prop_assert!(extended);
                }
                if result.is_late_night {
                    prop_assert!(person.allow_late_night);
                }
                expected += tier.map_or(0, |t| t.weight());
            }
            prop_assert_eq!(slot.score, expected);
        }
    }

    #[test]
    fn repeated_calls_agree(
        date in dates(),
        duration in durations(),
        people in participants(),
        extended in any::<bool>(),
    ) {
        let first = schedule(&date, duration, &people, extended).unwrap();
        let second = schedule(&date, duration, &people, extended).unwrap();
        prop_assert_eq!(first, second);
    }
}

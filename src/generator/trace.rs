//! Synthetic trace generation.
//!
//! Each unit runs its own clock and history:
//! 1. Start at `start - U(0, 30)` days
//! 2. Draw an event from the vocabulary
//! 3. Sometimes replay one of the unit's past events instead
//! 4. Sometimes step the clock back a few days (rework)
//! 5. Emit, remember the event, step the clock forward 1-5 days
//!
//! All randomness comes from the caller's `Rng`, so a seeded generator
//! reproduces a run exactly.

use super::record::EventRecord;
use super::units::{per_unit, unit_count, unit_ids};
use crate::utils::config::{
    MAX_INITIAL_OFFSET_DAYS, MAX_STEP_DAYS, MIN_STEP_DAYS, REPEAT_PROBABILITY,
    REWORK_PROBABILITY,
};
use crate::utils::error::GeneratorError;
use chrono::{Duration, NaiveDateTime, Timelike};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// One generated step of a unit's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitEvent {
    pub event: String,
    pub timestamp: NaiveDateTime,
}

/// Generate the ordered history of a single unit
///
/// **Public** - pure per-unit generation, testable in isolation
///
/// # Arguments
/// * `event_types` - Vocabulary to draw from (must be non-empty)
/// * `count` - Number of events to emit
/// * `initial_clock` - Clock value of the first event (before any rework)
/// * `rng` - Random source
///
/// # Errors
/// * `GeneratorError::EmptyEventTypes` - nothing to draw from
pub fn generate_unit<S, R>(
    event_types: &[S],
    count: usize,
    initial_clock: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<UnitEvent>, GeneratorError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if event_types.is_empty() {
        return Err(GeneratorError::EmptyEventTypes);
    }

    let mut clock = initial_clock;
    let mut history: Vec<UnitEvent> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut event = event_types
            .choose(rng)
            .map(|e| e.as_ref().to_string())
            .ok_or(GeneratorError::EmptyEventTypes)?;

        // Both rules only apply once the unit has a past
        if !history.is_empty() {
            if rng.gen::<f64>() < REPEAT_PROBABILITY {
                if let Some(past) = history.choose(rng) {
                    event = past.event.clone();
                }
            }

            if rng.gen::<f64>() < REWORK_PROBABILITY {
                clock -= random_days(rng, MIN_STEP_DAYS, MAX_STEP_DAYS);
            }
        }

        history.push(UnitEvent {
            event,
            timestamp: clock,
        });

        clock += random_days(rng, MIN_STEP_DAYS, MAX_STEP_DAYS);
    }

    Ok(history)
}

/// Generate the full, sorted event log
///
/// **Public** - main entry point for generation
///
/// # Arguments
/// * `event_types` - Vocabulary of event labels (must be non-empty)
/// * `num_lines` - Target row count; see `units` for how it is split
/// * `now` - Reference "now"; every unit starts up to 30 days before it
/// * `rng` - Random source
///
/// # Returns
/// `unit_count * per_unit` records sorted by (unit, timestamp), stable
///
/// # Errors
/// * `GeneratorError::EmptyEventTypes` - checked before anything is drawn
pub fn generate_event_logs<S, R>(
    event_types: &[S],
    num_lines: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<EventRecord>, GeneratorError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if event_types.is_empty() {
        return Err(GeneratorError::EmptyEventTypes);
    }

    let units = unit_ids(unit_count(num_lines));
    let count = per_unit(num_lines);
    let now = truncate_to_seconds(now);

    info!(
        "Generating {} units x {} events ({} rows requested)",
        units.len(),
        count,
        num_lines
    );

    let mut records = Vec::with_capacity(units.len() * count);

    for unit in &units {
        let start = now - random_days(rng, 0, MAX_INITIAL_OFFSET_DAYS);
        let history = generate_unit(event_types, count, start, rng)?;

        records.extend(
            history
                .into_iter()
                .map(|step| EventRecord::new(unit.as_str(), step.event, step.timestamp)),
        );
    }

    sort_records(&mut records);

    debug!("Generated {} records", records.len());

    Ok(records)
}

/// Stable sort by (unit, timestamp); ties keep emission order
pub fn sort_records(records: &mut [EventRecord]) {
    records.sort_by(|a, b| a.log_order(b));
}

/// Uniform whole-day offset in `[min, max]`
///
/// **Private** - internal helper
fn random_days<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Duration {
    Duration::days(rng.gen_range(min..=max))
}

/// Drop sub-second precision so formatted and raw ordering agree
///
/// **Private** - internal helper
fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap()
    }

    #[test]
    fn test_generate_unit_empty_vocabulary() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<String> = Vec::new();
        let result = generate_unit(empty.as_slice(), 5, fixed_now(), &mut rng);
        assert!(matches!(result, Err(GeneratorError::EmptyEventTypes)));
    }

    #[test]
    fn test_generate_unit_first_event_at_initial_clock() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = generate_unit(&["A", "B"], 1, fixed_now(), &mut rng).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].timestamp, fixed_now());
    }

    #[test]
    fn test_generate_unit_zero_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = generate_unit(&["A"], 0, fixed_now(), &mut rng).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_generate_unit_clock_steps_in_whole_days() {
        let mut rng = StdRng::seed_from_u64(99);
        let history = generate_unit(&["A", "B", "C"], 200, fixed_now(), &mut rng).unwrap();

        for pair in history.windows(2) {
            let delta = pair[1].timestamp - pair[0].timestamp;
            assert_eq!(delta.num_seconds() % 86_400, 0);
            // forward 1..=5, optionally back 1..=5 before emitting
            assert!(delta.num_days() >= -4 && delta.num_days() <= 5);
        }
    }

    #[test]
    fn test_generate_event_logs_seeded_is_reproducible() {
        let a = generate_event_logs(&["A", "B"], 100, fixed_now(), &mut StdRng::seed_from_u64(3))
            .unwrap();
        let b = generate_event_logs(&["A", "B"], 100, fixed_now(), &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unit_start_within_offset_window() {
        let mut rng = StdRng::seed_from_u64(11);
        let records = generate_event_logs(&["A"], 9, fixed_now(), &mut rng).unwrap();
        let later_events = per_unit(9) as i64 - 1;
        assert_eq!(records.len(), 9);

        // start offset plus at most 4 days of net regression per later event
        let earliest = records.iter().map(|r| r.timestamp).min().unwrap();
        let window_start = fixed_now() - Duration::days(MAX_INITIAL_OFFSET_DAYS + 4 * later_events);
        assert!(earliest >= window_start);
    }

    #[test]
    fn test_truncate_to_seconds() {
        let ts = fixed_now().with_nanosecond(123_456_789).unwrap();
        assert_eq!(truncate_to_seconds(ts), fixed_now());
    }
}

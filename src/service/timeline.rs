use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::projectmodel::ProjectPhase;

/// Concrete schedule for one phase, plus its geometry against the project
/// span for the gantt bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseSpan {
    pub phase_id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub left_pct: f64,
    pub width_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectTimeline {
    pub project_start: NaiveDate,
    pub project_end: NaiveDate,
    pub total_days: i64,
    pub phases: Vec<PhaseSpan>,
}

/// Parse a user-entered schedule field. Blank and malformed values are
/// treated as absent so the caller falls through to its fallback branch.
pub fn parse_date_opt(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Derive a concrete schedule for one project's phases.
///
/// Phases carry user-entered schedule text that may be blank or malformed, so
/// every date here is best-effort: an explicit date wins when it parses,
/// otherwise the phase is chained after its predecessor (or anchored on
/// `today` for the first one). A broken schedule still renders as a timeline;
/// this never returns an error.
///
/// `phases` must already be ordered by `phase_order` ascending. `today` is
/// injected rather than read from the wall clock so the derivation stays
/// deterministic under test.
pub fn derive_timeline(phases: &[ProjectPhase], today: NaiveDate) -> ProjectTimeline {
    if phases.is_empty() {
        return ProjectTimeline {
            project_start: today,
            project_end: today,
            total_days: 1,
            phases: Vec::new(),
        };
    }

    let mut spans: Vec<(Uuid, NaiveDate, NaiveDate)> = Vec::with_capacity(phases.len());
    let mut project_start = today;
    let mut project_end = today;
    let mut prev_end: Option<NaiveDate> = None;

    for (index, phase) in phases.iter().enumerate() {
        let start = match parse_date_opt(phase.start_date.as_deref()) {
            Some(date) => date,
            None => match prev_end {
                Some(end) => end + Duration::days(1),
                None => today,
            },
        };

        let end = match parse_date_opt(phase.end_date.as_deref()) {
            Some(date) => date,
            None => {
                // A phase occupies at least one calendar day, so a span of
                // `n` days ends on start + n - 1.
                let duration = i64::from(phase.estimated_duration.max(1));
                start + Duration::days(duration - 1)
            }
        };

        if index == 0 {
            project_start = start;
        }
        project_end = end;
        prev_end = Some(end);

        spans.push((phase.id, start, end));
    }

    let total_days = days_between(project_start, project_end).max(0) + 1;

    let phases = spans
        .into_iter()
        .map(|(phase_id, start, end)| {
            let left_pct =
                (100.0 * days_between(project_start, start) as f64 / total_days as f64)
                    .clamp(0.0, 100.0);
            let width_pct = (100.0 * (days_between(start, end) + 1) as f64 / total_days as f64)
                .clamp(0.0, 100.0);
            PhaseSpan {
                phase_id,
                start,
                end,
                left_pct,
                width_pct,
            }
        })
        .collect();

    ProjectTimeline {
        project_start,
        project_end,
        total_days,
        phases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::projectmodel::{PhaseStatus, DEFAULT_PHASE_NAMES};

    fn phase(order: i32, duration: i32, start: Option<&str>, end: Option<&str>) -> ProjectPhase {
        ProjectPhase {
            id: Uuid::new_v4(),
            project_id: Uuid::nil(),
            phase_name: DEFAULT_PHASE_NAMES[0].to_string(),
            phase_order: order,
            status: Some(PhaseStatus::NotStarted),
            progress: Some(0),
            estimated_duration: duration,
            start_date: start.map(|s| s.to_string()),
            end_date: end.map(|s| s.to_string()),
            actual_start_date: None,
            actual_end_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_input_yields_single_day_at_today() {
        let today = date("2024-06-01");
        let timeline = derive_timeline(&[], today);

        assert_eq!(timeline.project_start, today);
        assert_eq!(timeline.project_end, today);
        assert_eq!(timeline.total_days, 1);
        assert!(timeline.phases.is_empty());
    }

    #[test]
    fn test_phases_without_dates_chain_end_to_end() {
        let today = date("2024-06-01");
        let phases = vec![phase(1, 5, None, None), phase(2, 3, None, None)];

        let timeline = derive_timeline(&phases, today);

        assert_eq!(timeline.phases[0].start, date("2024-06-01"));
        assert_eq!(timeline.phases[0].end, date("2024-06-05"));
        assert_eq!(timeline.phases[1].start, date("2024-06-06"));
        assert_eq!(timeline.phases[1].end, date("2024-06-08"));
        assert_eq!(timeline.project_start, date("2024-06-01"));
        assert_eq!(timeline.project_end, date("2024-06-08"));
        assert_eq!(timeline.total_days, 8);
    }

    #[test]
    fn test_explicit_dates_win_over_estimates() {
        let today = date("2024-06-01");
        let phases = vec![
            phase(1, 30, Some("2024-03-01"), Some("2024-03-10")),
            phase(2, 3, None, None),
        ];

        let timeline = derive_timeline(&phases, today);

        assert_eq!(timeline.phases[0].start, date("2024-03-01"));
        assert_eq!(timeline.phases[0].end, date("2024-03-10"));
        // The next phase chains from the explicit end, not the estimate.
        assert_eq!(timeline.phases[1].start, date("2024-03-11"));
    }

    #[test]
    fn test_malformed_date_is_treated_as_unset() {
        let today = date("2024-06-01");
        let with_garbage = vec![phase(1, 5, Some("not-a-date"), Some("2024/06/30"))];
        let without = vec![phase(1, 5, None, None)];

        let derived_garbage = derive_timeline(&with_garbage, today);
        let derived_unset = derive_timeline(&without, today);

        assert_eq!(derived_garbage.project_start, derived_unset.project_start);
        assert_eq!(derived_garbage.project_end, derived_unset.project_end);
        assert_eq!(derived_garbage.total_days, derived_unset.total_days);
    }

    #[test]
    fn test_blank_date_is_treated_as_unset() {
        assert_eq!(parse_date_opt(Some("")), None);
        assert_eq!(parse_date_opt(Some("   ")), None);
        assert_eq!(parse_date_opt(None), None);
        assert_eq!(parse_date_opt(Some("2024-03-01")), Some(date("2024-03-01")));
    }

    #[test]
    fn test_zero_duration_still_occupies_one_day() {
        let today = date("2024-06-01");
        let timeline = derive_timeline(&[phase(1, 0, None, None)], today);

        assert_eq!(timeline.phases[0].start, today);
        assert_eq!(timeline.phases[0].end, today);
        assert_eq!(timeline.total_days, 1);
    }

    #[test]
    fn test_geometry_covers_the_project_span() {
        let today = date("2024-06-01");
        let phases = vec![phase(1, 4, None, None), phase(2, 4, None, None)];

        let timeline = derive_timeline(&phases, today);

        assert_eq!(timeline.total_days, 8);
        assert!((timeline.phases[0].left_pct - 0.0).abs() < f64::EPSILON);
        assert!((timeline.phases[0].width_pct - 50.0).abs() < 1e-9);
        assert!((timeline.phases[1].left_pct - 50.0).abs() < 1e-9);
        assert!((timeline.phases[1].width_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_explicit_dates_degrade_without_panicking() {
        // End before start is user error; the view still renders.
        let today = date("2024-06-01");
        let phases = vec![phase(1, 5, Some("2024-06-10"), Some("2024-06-02"))];

        let timeline = derive_timeline(&phases, today);

        assert_eq!(timeline.total_days, 1);
        assert!(timeline.phases[0].left_pct >= 0.0 && timeline.phases[0].left_pct <= 100.0);
        assert!(timeline.phases[0].width_pct >= 0.0 && timeline.phases[0].width_pct <= 100.0);
    }
}

//! Plain-text weekly report

use crate::error::{Result, SluggingError};
use crate::types::{TeamRecord, WeekResult};

/// Decimal places kept for on base, slugging and OPS
pub const RATIO_PRECISION: usize = 4;

/// Render one line per team, ordered by team identifier.
///
/// Fails on the first team without derived metrics; nothing is returned in that case.
pub fn report_lines(week: &WeekResult) -> Result<Vec<String>> {
    week.teams.iter().map(|(team, record)| format_team(team, record)).collect()
}

/// The whole report, newline-terminated lines
pub fn render_report(week: &WeekResult) -> Result<String> {
    let mut out = String::new();
    for line in report_lines(week)? {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Format a single team line
pub fn format_team(team: &str, record: &TeamRecord) -> Result<String> {
    let metrics = record
        .metrics
        .ok_or_else(|| SluggingError::MissingMetric { team: team.to_string(), plays: record.plays })?;

    Ok(format!(
        "{}: {} plays, {} 1sts, {} 20-39s, {} 40+s, {} TDs, {} on base, {} slugging, {} ops",
        team,
        record.plays,
        record.first_downs,
        record.twenty_to_thirty_nine,
        record.forty_plus,
        record.touchdowns,
        format_ratio(metrics.on_base),
        format_ratio(metrics.slugging),
        format_ratio(metrics.ops),
    ))
}

/// Round to [`RATIO_PRECISION`] places and print the shortest form that
/// round-trips, always with a fractional part (`0.4`, `1.0`, `0.3333`).
pub fn format_ratio(value: f64) -> String {
    format!("{:?}", round_to(value, RATIO_PRECISION))
}

fn round_to(value: f64, places: usize) -> f64 {
    // Going through the decimal string rounds the exact binary value, not a scaled copy.
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{derive_metrics, SluggingMetrics};

    fn team(plays: u32, first_downs: u32, twenties: u32, forties: u32, tds: u32) -> TeamRecord {
        let mut record = TeamRecord {
            plays,
            first_downs,
            twenty_to_thirty_nine: twenties,
            forty_plus: forties,
            touchdowns: tds,
            metrics: None,
        };
        record.metrics = SluggingMetrics::from_record(&record);
        record
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.4), "0.4");
        assert_eq!(format_ratio(1.0), "1.0");
        assert_eq!(format_ratio(10.0 / 30.0), "0.3333");
        assert_eq!(format_ratio(20.0 / 30.0), "0.6667");
        assert_eq!(format_ratio(0.0), "0.0");
        assert_eq!(format_ratio(1.23456), "1.2346");
        assert_eq!(format_ratio(0.00004), "0.0");
    }

    #[test]
    fn test_format_team_line() {
        let line = format_team("KC", &team(10, 4, 2, 1, 1)).unwrap();
        assert_eq!(
            line,
            "KC: 10 plays, 4 1sts, 2 20-39s, 1 40+s, 1 TDs, 0.4 on base, 1.5 slugging, 1.9 ops"
        );
    }

    #[test]
    fn test_lines_sorted_by_team() {
        let mut week = WeekResult::new(1);
        week.teams.insert("NYG".to_string(), team(60, 20, 3, 1, 2));
        week.teams.insert("BUF".to_string(), team(70, 25, 4, 2, 3));

        let lines = report_lines(&week).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("BUF: "));
        assert!(lines[1].starts_with("NYG: "));
    }

    #[test]
    fn test_missing_metrics_fails_whole_report() {
        let mut week = WeekResult::new(1);
        week.teams.insert("BUF".to_string(), team(70, 25, 4, 2, 3));
        week.teams.insert("NYJ".to_string(), TeamRecord::default());
        derive_metrics(&mut week);

        match render_report(&week) {
            Err(SluggingError::MissingMetric { team, plays }) => {
                assert_eq!(team, "NYJ");
                assert_eq!(plays, 0);
            }
            other => panic!("expected MissingMetric, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_week_renders_nothing() {
        assert_eq!(render_report(&WeekResult::new(18)).unwrap(), "");
    }
}

//! Baseball-style ratios derived from play-outcome buckets

use tracing::debug;

use crate::types::{TeamRecord, WeekResult};

/// On base, slugging and OPS for one team
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SluggingMetrics {
    /// First downs per play
    pub on_base: f64,
    /// Weighted bases per play: first down 1, 20-39 yards 2, 40+ yards 3, touchdown 4
    pub slugging: f64,
    /// on_base + slugging
    pub ops: f64,
}

impl SluggingMetrics {
    /// Compute the ratios for a record, or `None` when it has no plays
    pub fn from_record(record: &TeamRecord) -> Option<Self> {
        if record.plays == 0 {
            return None;
        }

        let plays = f64::from(record.plays);
        let first_downs = f64::from(record.first_downs);
        let bases = first_downs
            + 2.0 * f64::from(record.twenty_to_thirty_nine)
            + 3.0 * f64::from(record.forty_plus)
            + 4.0 * f64::from(record.touchdowns);

        let on_base = first_downs / plays;
        let slugging = bases / plays;

        Some(Self { on_base, slugging, ops: on_base + slugging })
    }
}

/// Fill in derived metrics for every team with at least one play.
///
/// Must run after all five categories have been recorded.
pub fn derive_metrics(week: &mut WeekResult) {
    for (team, record) in week.teams.iter_mut() {
        record.metrics = SluggingMetrics::from_record(record);
        if record.metrics.is_none() {
            debug!("Team {} has no plays in week {}, leaving metrics unset", team, week.week);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(plays: u32, first_downs: u32, twenties: u32, forties: u32, tds: u32) -> TeamRecord {
        TeamRecord {
            plays,
            first_downs,
            twenty_to_thirty_nine: twenties,
            forty_plus: forties,
            touchdowns: tds,
            metrics: None,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_weighted_bases() {
        let metrics = SluggingMetrics::from_record(&record(10, 4, 2, 1, 1)).unwrap();
        assert_close(metrics.on_base, 0.4);
        assert_close(metrics.slugging, 1.5);
        assert_close(metrics.ops, 1.9);
    }

    #[test]
    fn test_zero_plays_leaves_metrics_absent() {
        assert!(SluggingMetrics::from_record(&record(0, 0, 0, 0, 0)).is_none());
    }

    #[test]
    fn test_derive_metrics_skips_teams_without_plays() {
        let mut week = WeekResult::new(5);
        week.teams.insert("BUF".to_string(), record(40, 10, 0, 0, 0));
        week.teams.insert("NYJ".to_string(), record(0, 0, 0, 0, 0));

        derive_metrics(&mut week);

        let buf = week.team("BUF").unwrap().metrics.unwrap();
        assert_close(buf.on_base, 0.25);
        assert_close(buf.slugging, 0.25);
        assert_close(buf.ops, 0.5);
        assert!(week.team("NYJ").unwrap().metrics.is_none());
    }

    #[test]
    fn test_ops_is_sum_of_components() {
        let metrics = SluggingMetrics::from_record(&record(63, 22, 4, 2, 3)).unwrap();
        assert_close(metrics.ops, metrics.on_base + metrics.slugging);
    }
}

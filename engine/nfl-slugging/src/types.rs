use std::collections::BTreeMap;
use std::fmt;

use crate::metrics::SluggingMetrics;

/// The five play-outcome buckets counted per team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricCategory {
    /// Every pass or rush play
    Plays,
    /// Plays that gained a first down
    FirstDowns,
    /// Gains of 20 to 39 yards
    TwentyToThirtyNine,
    /// Gains of 40 yards or more
    FortyPlus,
    /// Touchdowns
    Touchdowns,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 5] = [
        MetricCategory::Plays,
        MetricCategory::FirstDowns,
        MetricCategory::TwentyToThirtyNine,
        MetricCategory::FortyPlus,
        MetricCategory::Touchdowns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricCategory::Plays => "plays",
            MetricCategory::FirstDowns => "1st downs",
            MetricCategory::TwentyToThirtyNine => "20-39",
            MetricCategory::FortyPlus => "40+",
            MetricCategory::Touchdowns => "tds",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a play finder summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPlaysRow {
    /// Team abbreviation (e.g., "BUF")
    pub team: String,
    /// Value of the "Plays" column
    pub plays: u32,
}

impl TeamPlaysRow {
    pub fn new(team: impl Into<String>, plays: u32) -> Self {
        Self { team: team.into(), plays }
    }
}

/// Raw bucket counts for one team, plus the ratios derived from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRecord {
    pub plays: u32,
    pub first_downs: u32,
    pub twenty_to_thirty_nine: u32,
    pub forty_plus: u32,
    pub touchdowns: u32,
    /// Set by [`crate::metrics::derive_metrics`] once all counts are in, and only when `plays > 0`
    pub metrics: Option<SluggingMetrics>,
}

impl TeamRecord {
    pub fn count(&self, category: MetricCategory) -> u32 {
        match category {
            MetricCategory::Plays => self.plays,
            MetricCategory::FirstDowns => self.first_downs,
            MetricCategory::TwentyToThirtyNine => self.twenty_to_thirty_nine,
            MetricCategory::FortyPlus => self.forty_plus,
            MetricCategory::Touchdowns => self.touchdowns,
        }
    }

    pub fn set_count(&mut self, category: MetricCategory, value: u32) {
        let slot = match category {
            MetricCategory::Plays => &mut self.plays,
            MetricCategory::FirstDowns => &mut self.first_downs,
            MetricCategory::TwentyToThirtyNine => &mut self.twenty_to_thirty_nine,
            MetricCategory::FortyPlus => &mut self.forty_plus,
            MetricCategory::Touchdowns => &mut self.touchdowns,
        };
        *slot = value;
    }
}

/// Per-team records for a single week, ordered by team identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekResult {
    /// Week number
    pub week: u32,
    /// Team abbreviation -> record
    pub teams: BTreeMap<String, TeamRecord>,
}

impl WeekResult {
    /// Create an empty result for a week
    pub fn new(week: u32) -> Self {
        Self { week, teams: BTreeMap::new() }
    }

    /// Merge one category's table into the result.
    ///
    /// Teams seen for the first time start with every counter at zero. A repeated
    /// (team, category) pair keeps the last value.
    pub fn record(&mut self, category: MetricCategory, rows: &[TeamPlaysRow]) {
        for row in rows {
            self.teams.entry(row.team.clone()).or_default().set_count(category, row.plays);
        }
    }

    pub fn team(&self, team: &str) -> Option<&TeamRecord> {
        self.teams.get(team)
    }

    /// Team identifiers in ascending order
    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, u32)]) -> Vec<TeamPlaysRow> {
        pairs.iter().map(|(team, plays)| TeamPlaysRow::new(*team, *plays)).collect()
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<&str> = MetricCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["plays", "1st downs", "20-39", "40+", "tds"]);
        assert_eq!(MetricCategory::FortyPlus.to_string(), "40+");
    }

    #[test]
    fn test_record_defaults_missing_categories_to_zero() {
        let mut week = WeekResult::new(3);
        week.record(MetricCategory::Plays, &rows(&[("KC", 61), ("LV", 58)]));
        week.record(MetricCategory::Touchdowns, &rows(&[("KC", 4)]));

        let lv = week.team("LV").unwrap();
        assert_eq!(lv.plays, 58);
        assert_eq!(lv.first_downs, 0);
        assert_eq!(lv.touchdowns, 0);
        assert!(lv.metrics.is_none());

        let kc = week.team("KC").unwrap();
        assert_eq!(kc.count(MetricCategory::Plays), 61);
        assert_eq!(kc.count(MetricCategory::Touchdowns), 4);
    }

    #[test]
    fn test_team_keys_are_union_of_tables() {
        let mut week = WeekResult::new(1);
        week.record(MetricCategory::Plays, &rows(&[("A", 50)]));
        week.record(MetricCategory::FirstDowns, &rows(&[("B", 10)]));
        week.record(MetricCategory::FortyPlus, &rows(&[("C", 1), ("A", 2)]));

        let names: Vec<&str> = week.team_names().collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(week.len(), 3);
        assert_eq!(week.team("B").unwrap().plays, 0);
        assert_eq!(week.team("A").unwrap().forty_plus, 2);
    }

    #[test]
    fn test_repeated_pair_keeps_last_value() {
        let mut week = WeekResult::new(1);
        week.record(MetricCategory::FirstDowns, &rows(&[("DAL", 18), ("DAL", 21)]));
        assert_eq!(week.team("DAL").unwrap().first_downs, 21);
    }

    #[test]
    fn test_team_names_sorted_lexicographically() {
        let mut week = WeekResult::new(1);
        week.record(MetricCategory::Plays, &rows(&[("NYG", 60), ("BUF", 70), ("ARI", 55)]));
        let names: Vec<&str> = week.team_names().collect();
        assert_eq!(names, vec!["ARI", "BUF", "NYG"]);
    }
}

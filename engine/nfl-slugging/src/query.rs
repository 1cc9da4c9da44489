//! Play finder query construction
//!
//! Every category shares one regular-season, full-game, pass-or-rush base query
//! narrowed to a single week. `plays` uses that base as is; the other four add
//! `is_turnover=N` and then their own filter.

use std::collections::BTreeMap;

use reqwest::Url;

use crate::types::MetricCategory;

/// Default play finder endpoint
pub const DEFAULT_BASE_URL: &str = "https://stathead.com/football/play_finder.cgi";

/// Upper bound used for the open-ended 40+ yard bucket
pub const YARDS_UNBOUNDED: u32 = 200;

/// Ordered list of query parameters.
///
/// Keys may repeat (`type[]` appears once per play type), so this is a list
/// rather than a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping any earlier value with the same name
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Set a single-valued parameter, replacing an earlier value in place
    pub fn set(mut self, name: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize onto `base`, form-urlencoding names and values
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())));
        url
    }
}

/// Builds the five per-category play finder URLs for a season
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: Url,
    season: u32,
}

impl QueryBuilder {
    pub fn new(base_url: Url, season: u32) -> Self {
        Self { base_url, season }
    }

    pub fn season(&self) -> u32 {
        self.season
    }

    /// Shared filters: one season, regular season, every game, full clock, pass and rush plays
    pub fn base_params(&self) -> QueryParams {
        QueryParams::new()
            .with("request", 1)
            .with("match", "summary_all")
            .with("sb", 0)
            .with("order_by", "yards")
            .with("year_min", self.season)
            .with("year_max", self.season)
            .with("game_type", "R")
            .with("game_num_min", 0)
            .with("game_num_max", 99)
            .with("minutes_max", 15)
            .with("seconds_max", 0)
            .with("minutes_min", 0)
            .with("seconds_min", 0)
            .with("field_pos_min_field", "team")
            .with("field_pos_max_field", "team")
            .with("end_field_pos_min_field", "team")
            .with("end_field_pos_max_field", "team")
            .with("no_play", "N")
            .with("type[]", "PASS")
            .with("type[]", "RUSH")
    }

    /// Parameters for one category in one week
    pub fn category_params(&self, category: MetricCategory, week: u32) -> QueryParams {
        let week_params =
            self.base_params().with("week_num_min", week).with("week_num_max", week);

        match category {
            // Total plays deliberately keep turnovers in.
            MetricCategory::Plays => week_params,
            MetricCategory::FirstDowns => without_turnovers(week_params).with("is_first_down", "Y"),
            MetricCategory::TwentyToThirtyNine => {
                without_turnovers(week_params).with("yards_min", 20).with("yards_max", 39)
            }
            MetricCategory::FortyPlus => without_turnovers(week_params)
                .with("yards_min", 40)
                .with("yards_max", YARDS_UNBOUNDED),
            MetricCategory::Touchdowns => without_turnovers(week_params)
                .with("is_scoring", "Y")
                .with("score_type[]", "touchdown"),
        }
    }

    /// One URL per category for `week`
    pub fn week_urls(&self, week: u32) -> BTreeMap<MetricCategory, Url> {
        MetricCategory::ALL
            .iter()
            .map(|&category| (category, self.category_params(category, week).to_url(&self.base_url)))
            .collect()
    }
}

fn without_turnovers(params: QueryParams) -> QueryParams {
    params.set("is_turnover", "N")
}

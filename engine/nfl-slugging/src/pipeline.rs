//! Fetch, aggregate and derive one week

use tracing::info;

use crate::error::Result;
use crate::metrics::derive_metrics;
use crate::query::QueryBuilder;
use crate::scraper::TableSource;
use crate::types::WeekResult;

/// Run the five category queries for `week` one after another and build the result.
///
/// The first failing fetch aborts the run; no partial result is returned.
pub async fn fetch_week<S>(source: &S, queries: &QueryBuilder, week: u32) -> Result<WeekResult>
where
    S: TableSource + ?Sized,
{
    info!("Fetching week {} of the {} season", week, queries.season());

    let mut result = WeekResult::new(week);
    for (category, url) in queries.week_urls(week) {
        let rows = source.fetch_team_plays(&url).await?;
        info!("{}: {} teams", category, rows.len());
        result.record(category, &rows);
    }

    derive_metrics(&mut result);
    info!("Week {} complete with {} teams", week, result.len());
    Ok(result)
}

//! # NFL Slugging
//!
//! Weekly team "slugging" numbers built from Stathead's play finder.
//!
//! For one week the crate runs five play finder queries (all plays, first
//! downs, 20-39 yard gains, 40+ yard gains, touchdowns), reads the per-team
//! "Plays" column from each result page, and turns the counts into on base,
//! slugging and OPS analogues:
//!
//! - on base = first downs / plays
//! - slugging = (first downs + 2 × 20-39 + 3 × 40+ + 4 × TDs) / plays
//! - ops = on base + slugging

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod query;
pub mod report;
pub mod scraper;
pub mod table;
pub mod types;


pub use config::SluggingConfig;
pub use error::{FetchError, Result, SluggingError};
pub use logging::initialize_logging;
pub use metrics::{derive_metrics, SluggingMetrics};
pub use pipeline::fetch_week;
pub use query::{QueryBuilder, QueryParams};
pub use report::{render_report, report_lines};
pub use scraper::{PlayFinderScraper, TableSource};
pub use table::{extract_team_plays, StatTable};
pub use types::{MetricCategory, TeamPlaysRow, TeamRecord, WeekResult};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

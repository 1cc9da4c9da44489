//! Typed extraction of HTML tables from play finder result pages

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::{Result, SluggingError};
use crate::types::TeamPlaysRow;

/// Position of the per-team summary among the page's tables
pub const SUMMARY_TABLE_INDEX: usize = 2;

/// Column holding the team abbreviation
pub const TEAM_COLUMN: usize = 0;

/// Column holding the play count
pub const PLAYS_COLUMN: usize = 2;

/// Header row carrying the per-column labels (row 0 holds the group labels)
pub const LABEL_HEADER_ROW: usize = 1;

/// Row classes the provider uses for header rows repeated inside the body
const REPEATED_HEADER_CLASSES: [&str; 2] = ["thead", "over_header"];

/// An HTML table with colspans expanded so every row lines up by column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTable {
    /// Header rows, outermost grouping first
    pub header_rows: Vec<Vec<String>>,
    /// Body rows in document order
    pub rows: Vec<Vec<String>>,
}

impl StatTable {
    /// Header label at `level` (0 = group row) for `column`
    pub fn header_label(&self, level: usize, column: usize) -> Option<&str> {
        self.header_rows.get(level)?.get(column).map(String::as_str)
    }

    /// Fail unless the secondary header reads `Tm` at column 0 and `Plays` at column 2
    pub fn validate_team_plays_header(&self) -> Result<()> {
        for (column, expected) in [(TEAM_COLUMN, "Tm"), (PLAYS_COLUMN, "Plays")] {
            match self.header_label(LABEL_HEADER_ROW, column) {
                Some(label) if label == expected => {}
                Some(label) => {
                    return Err(SluggingError::malformed(format!(
                        "expected header '{expected}' in column {column}, found '{label}'"
                    )))
                }
                None => {
                    return Err(SluggingError::malformed(format!(
                        "table has no header label for column {column} (found {} header rows)",
                        self.header_rows.len()
                    )))
                }
            }
        }
        Ok(())
    }

    /// Read (team, plays) pairs after checking the header layout
    pub fn team_plays(&self) -> Result<Vec<TeamPlaysRow>> {
        self.validate_team_plays_header()?;

        let mut out = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            let team = row.get(TEAM_COLUMN).map(String::as_str).unwrap_or_default();
            if team.is_empty() {
                debug!("Skipping row {} with empty team cell", index);
                continue;
            }

            let plays_text = row.get(PLAYS_COLUMN).ok_or_else(|| {
                SluggingError::malformed(format!("row {index} ({team}) has no Plays cell"))
            })?;

            out.push(TeamPlaysRow { team: team.to_string(), plays: parse_count(plays_text)? });
        }

        Ok(out)
    }
}

/// Parse every `<table>` in the document, in document order
pub fn parse_tables(html: &str) -> Result<Vec<StatTable>> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table")
        .map_err(|e| SluggingError::malformed(format!("Failed to create table selector: {e}")))?;

    Ok(document.select(&table_selector).map(parse_table).collect())
}

/// Pull the team play counts out of a play finder results page
pub fn extract_team_plays(html: &str) -> Result<Vec<TeamPlaysRow>> {
    let tables = parse_tables(html)?;
    debug!("Found {} tables in response", tables.len());

    let table = tables.get(SUMMARY_TABLE_INDEX).ok_or_else(|| {
        SluggingError::malformed(format!(
            "expected at least {} tables, found {}",
            SUMMARY_TABLE_INDEX + 1,
            tables.len()
        ))
    })?;

    table.team_plays()
}

struct RawRow {
    cells: Vec<RawCell>,
    repeated_header: bool,
}

struct RawCell {
    text: String,
    colspan: usize,
    is_header: bool,
}

impl RawRow {
    fn all_header_cells(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|c| c.is_header)
    }

    fn expand(self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.cells.len());
        for cell in self.cells {
            for _ in 0..cell.colspan {
                out.push(cell.text.clone());
            }
        }
        out
    }
}

fn parse_table(table: ElementRef) -> StatTable {
    let mut head = Vec::new();
    let mut body = Vec::new();
    let mut foot = Vec::new();

    // Only direct sections: rows of nested tables belong to those tables.
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "thead" => head.extend(section_rows(child)),
            "tbody" => body.extend(section_rows(child)),
            "tfoot" => foot.extend(section_rows(child)),
            "tr" => body.push(parse_row(child)),
            _ => {}
        }
    }
    body.extend(foot);

    // Without a <thead>, leading rows made only of <th> cells are the header.
    if head.is_empty() {
        let leading = body.iter().take_while(|row| row.all_header_cells()).count();
        head = body.drain(..leading).collect();
    }

    let rows = body
        .into_iter()
        .filter(|row| {
            if row.repeated_header {
                debug!("Skipping repeated header row");
            }
            !row.repeated_header && !row.cells.is_empty()
        })
        .map(RawRow::expand)
        .collect();

    StatTable { header_rows: head.into_iter().map(RawRow::expand).collect(), rows }
}

fn section_rows(section: ElementRef) -> Vec<RawRow> {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
        .map(parse_row)
        .collect()
}

fn parse_row(row: ElementRef) -> RawRow {
    let repeated_header = row
        .value()
        .attr("class")
        .map(|classes| {
            classes.split_whitespace().any(|class| REPEATED_HEADER_CLASSES.contains(&class))
        })
        .unwrap_or(false);

    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "th" | "td"))
        .map(|cell| RawCell {
            text: normalize_text(cell),
            colspan: colspan(cell),
            is_header: cell.value().name() == "th",
        })
        .collect();

    RawRow { cells, repeated_header }
}

fn colspan(cell: ElementRef) -> usize {
    match cell.value().attr("colspan") {
        None => 1,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(span) if span > 0 => span,
            _ => {
                warn!("Ignoring invalid colspan '{}'", raw);
                1
            }
        },
    }
}

fn normalize_text(cell: ElementRef) -> String {
    let text = cell.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_count(text: &str) -> Result<u32> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    digits
        .trim()
        .parse::<u32>()
        .map_err(|e| SluggingError::malformed(format!("Failed to parse play count '{text}': {e}")))
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A results page shaped like the play finder's: two filter tables, then the summary
    pub fn results_page(rows: &[(&str, &str)]) -> String {
        let body: String = rows
            .iter()
            .map(|(team, plays)| {
                format!(
                    "<tr><th data-stat=\"team\"><a href=\"/teams/{t}/\">{team}</a></th>\
                     <td>1</td><td data-stat=\"plays\">{plays}</td><td>4.2</td></tr>",
                    t = team.to_lowercase()
                )
            })
            .collect();

        format!(
            r#"<html><body>
            <table id="filters"><tr><td>Season</td><td>2021</td></tr></table>
            <table id="criteria"><tr><td>Week</td><td>1</td></tr></table>
            <table id="results">
              <thead>
                <tr class="over_header"><th colspan="2"></th><th colspan="2">Totals</th></tr>
                <tr><th>Tm</th><th>G</th><th>Plays</th><th>Y/P</th></tr>
              </thead>
              <tbody>{body}</tbody>
            </table>
            </body></html>"#
        )
    }
}

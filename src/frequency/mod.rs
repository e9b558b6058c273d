//! Frequency aggregation module
//!
//! Turns the paginated records of several variable classes into a dense
//! year × class table of how many records carry a given value.
//!
//! # Dating records
//!
//! A record covers every year in `year_from..=year_to`. When only one
//! bound is set the record covers that single year; when neither is set
//! the record inherits the span of its embedded polity
//! (`polity.start_year..=polity.end_year`). Records that remain undated
//! are not counted.

mod table;

pub use table::FrequencyTable;

use crate::error::{Error, Result};
use crate::handler::HandlerRegistry;
use crate::naming;
use crate::pagination::{PageFetcher, Paginator, Record};
use crate::types::JsonValue;
use tracing::{debug, info};

/// Count, per year and class, the records whose value equals `value_filter`.
///
/// Classes are resolved against the built-in handler registry. The table
/// always has `years.len()` rows and `class_names.len()` columns.
pub async fn get_frequencies<F, S>(
    fetcher: &F,
    class_names: &[S],
    years: &[i64],
    value_filter: &str,
) -> Result<FrequencyTable>
where
    F: PageFetcher + ?Sized,
    S: AsRef<str>,
{
    get_frequencies_with(
        fetcher,
        &HandlerRegistry::builtin(),
        class_names,
        years,
        value_filter,
    )
    .await
}

/// [`get_frequencies`] with an explicit handler registry
pub async fn get_frequencies_with<F, S>(
    fetcher: &F,
    handlers: &HandlerRegistry,
    class_names: &[S],
    years: &[i64],
    value_filter: &str,
) -> Result<FrequencyTable>
where
    F: PageFetcher + ?Sized,
    S: AsRef<str>,
{
    let mut table = FrequencyTable::zeroed(
        years.to_vec(),
        class_names.iter().map(|c| c.as_ref().to_string()).collect(),
    );

    for (column, class_name) in class_names.iter().enumerate() {
        let class_name = class_name.as_ref();
        let handler = handlers.instantiate(class_name, &naming::variable_name(class_name))?;
        let value_field = handler
            .value_field()
            .ok_or_else(|| Error::NotAVariable {
                class_name: class_name.to_string(),
            })?
            .to_string();

        info!("Aggregating '{}' over {}", class_name, handler.endpoint());

        let mut pager = Paginator::new(fetcher, handler.endpoint());
        let mut records = 0usize;
        let mut matched = 0usize;

        while let Some(record) = pager.next_record().await? {
            records += 1;
            if !record
                .get(&value_field)
                .is_some_and(|value| value_matches(value, value_filter))
            {
                continue;
            }
            let Some((from, to)) = year_span(&record) else {
                continue;
            };
            matched += 1;

            for (row, year) in years.iter().enumerate() {
                if (from..=to).contains(year) {
                    table.increment(row, column);
                }
            }
        }

        debug!(
            "'{}': {} records over {} pages, {} matching '{}'",
            class_name,
            records,
            pager.pages_fetched(),
            matched,
            value_filter
        );
    }

    Ok(table)
}

/// Compare a record value against the filter by its textual form
fn value_matches(value: &JsonValue, filter: &str) -> bool {
    match value {
        JsonValue::String(s) => s == filter,
        JsonValue::Bool(b) => b.to_string() == filter,
        JsonValue::Number(n) => n.to_string() == filter,
        _ => false,
    }
}

/// Inclusive year span a record covers
fn year_span(record: &Record) -> Option<(i64, i64)> {
    let span = bounds(record.get_i64("year_from"), record.get_i64("year_to")).or_else(|| {
        let polity = record.get("polity")?;
        bounds(
            polity.get("start_year").and_then(JsonValue::as_i64),
            polity.get("end_year").and_then(JsonValue::as_i64),
        )
    })?;

    Some((span.0.min(span.1), span.0.max(span.1)))
}

fn bounds(from: Option<i64>, to: Option<i64>) -> Option<(i64, i64)> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from, to)),
        (Some(year), None) | (None, Some(year)) => Some((year, year)),
        (None, None) => None,
    }
}

//! `/data`: a fixed sample dataset, sorted, truncated and rendered as JSON
//! or CSV.

use serde::Serialize;
use serde_json::json;

use crate::http::{Payload, QueryParams};

pub const CSV_HEADER: &str = "id,name,value";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRecord {
    pub id: u32,
    pub name: &'static str,
    pub value: i64,
}

/// The seven demo records, freshly built on every call.
pub fn sample_records() -> Vec<SampleRecord> {
    [
        (1, "Alice", 100),
        (2, "Bob", 85),
        (3, "Charlie", 92),
        (4, "Diana", 78),
        (5, "Eve", 95),
        (6, "Frank", 88),
        (7, "Grace", 91),
    ]
    .into_iter()
    .map(|(id, name, value)| SampleRecord { id, name, value })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than "desc" sorts ascending.
    pub fn from_param(value: &str) -> Self {
        if value == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// Anything other than "csv" renders JSON.
    pub fn from_param(value: &str) -> Self {
        if value == "csv" {
            Self::Csv
        } else {
            Self::Json
        }
    }
}

/// Stable sort by value.
pub fn sort_records(records: &mut [SampleRecord], order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by_key(|r| r.value),
        SortOrder::Desc => records.sort_by_key(|r| std::cmp::Reverse(r.value)),
    }
}

/// Number of leading records kept for `limit`. A negative limit drops that
/// many records from the end.
pub fn take_count(len: usize, limit: i64) -> usize {
    if limit >= 0 {
        (limit as usize).min(len)
    } else {
        len.saturating_sub(limit.unsigned_abs() as usize)
    }
}

pub fn render_csv(records: &[SampleRecord]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(
        records
            .iter()
            .map(|r| format!("{},{},{}", r.id, r.name, r.value)),
    );
    lines.join("\n")
}

pub async fn data(params: QueryParams) -> Payload {
    let format = params.str_or("format", "json");
    let limit = params.parse_or("limit", 5_i64);
    let sort = params.str_or("sort", "asc");
    let include_metadata = params.flag("include_metadata");

    let mut records = sample_records();
    sort_records(&mut records, SortOrder::from_param(sort));
    let total = records.len();
    records.truncate(take_count(total, limit));

    tracing::debug!(format = %format, limit, sort = %sort, returned = records.len(), "Serving sample data");

    if OutputFormat::from_param(format) == OutputFormat::Csv {
        return Payload::Csv(render_csv(&records));
    }

    let mut body = json!({
        "data": records,
        "query_params": params.echo(),
    });
    if include_metadata {
        body["metadata"] = json!({
            "total_records": total,
            "returned_records": records.len(),
            "format": format,
            "sort_order": sort,
        });
    }
    Payload::Json(body)
}

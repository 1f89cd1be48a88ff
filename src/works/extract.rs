use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone};
use serde_json::Value;

use crate::normalize_doi;

fn first_summary(group: &Value) -> Result<&Value> {
    group
        .pointer("/work-summary/0")
        .context("work-group has no work-summary entries")
}

/// Scans the full external-identifier list for a DOI entry.
/// Missing or empty external-ids is treated as a work without a DOI.
pub fn doi(group: &Value) -> Option<String> {
    let ids = group.pointer("/external-ids/external-id")?.as_array()?;

    ids.iter()
        .find(|id| id.get("external-id-type").and_then(Value::as_str) == Some("doi"))
        .and_then(|id| id.get("external-id-value").and_then(Value::as_str))
        .map(normalize_doi)
}

pub fn title(group: &Value) -> Result<String> {
    first_summary(group)?
        .pointer("/title/title/value")
        .and_then(Value::as_str)
        .map(String::from)
        .context("work summary has no title")
}

/// First summary's creation timestamp, formatted as local wall-clock time.
/// The live API serves the millisecond epoch as a JSON number; older dumps
/// carry it as a string of digits, so both are accepted.
pub fn created_at(group: &Value) -> Result<String> {
    let raw = first_summary(group)?
        .pointer("/created-date/value")
        .context("work summary has no created-date")?;

    let millis = match raw {
        Value::Number(n) => n
            .as_i64()
            .context("created-date is not an integer millisecond timestamp")?,
        Value::String(s) => s
            .parse::<i64>()
            .context("created-date is not a millisecond timestamp")?,
        other => bail!("created-date has unexpected type: {}", other),
    };

    format_epoch_millis(millis, &Local)
}

/// Formats a millisecond epoch as `YYYY-MM-DD HH:MM:SS` in the given
/// timezone. Generic so tests can pin UTC instead of the host timezone.
pub fn format_epoch_millis<Tz: TimeZone>(millis: i64, tz: &Tz) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let date = tz
        .timestamp_millis_opt(millis)
        .earliest()
        .with_context(|| format!("Timestamp {} is out of range", millis))?;

    Ok(date.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Journal-title is explicitly null for works published outside journals.
pub fn journal(group: &Value) -> Option<String> {
    first_summary(group)
        .ok()?
        .pointer("/journal-title/value")
        .and_then(Value::as_str)
        .map(String::from)
}

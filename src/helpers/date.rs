// ABOUTME: Date and duration helpers - moment-style format tokens, humanized deltas
// ABOUTME: Rendering goes through chrono accessors so bad patterns cannot panic

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde_json::Value;

use super::{coerce, insert, Helper, Registry};
use crate::engine::context::Scope;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn register(registry: &mut Registry) {
    insert(registry, "date", Helper::Inline(date));
    insert(registry, "duration", Helper::Inline(duration));
}

/// `date value pattern` renders an instant with moment-style tokens
/// (`YYYY-MM-DD`, `DD-MM`, `X` for epoch seconds, ...) in UTC.
///
/// The value may be an ISO-8601 string, an epoch-milliseconds number, the
/// sentinel `"now"`, or absent - absent and `"now"` both use the clock
/// captured at the start of the enclosing `process` call.
fn date(args: &[Value], scope: &Scope<'_>) -> Value {
    let (value, pattern) = match args.len() {
        0 => return Value::Null,
        1 => (&Value::Null, coerce::render_value(&args[0])),
        _ => (&args[0], coerce::render_value(&args[1])),
    };
    let Some(instant) = parse_instant(value, scope) else {
        return Value::Null;
    };
    Value::String(render_pattern(&instant, &pattern))
}

fn parse_instant(value: &Value, scope: &Scope<'_>) -> Option<DateTime<Utc>> {
    match value {
        Value::Null => Some(scope.now()),
        Value::Number(n) => DateTime::from_timestamp_millis(n.as_f64()? as i64),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || s == "now" {
                return Some(scope.now());
            }
            if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
                return Some(parsed.with_timezone(&Utc));
            }
            if let Ok(date_only) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                let midnight = date_only.and_hms_opt(0, 0, 0)?;
                return Some(DateTime::from_naive_utc_and_offset(midnight, Utc));
            }
            if let Ok(millis) = s.parse::<i64>() {
                return DateTime::from_timestamp_millis(millis);
            }
            None
        }
        _ => None,
    }
}

/// Longest-match token substitution. Unknown characters pass through and
/// `[literal]` spans are emitted verbatim.
fn render_pattern(instant: &DateTime<Utc>, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '[' {
            let mut j = i + 1;
            while j < chars.len() && chars[j] != ']' {
                out.push(chars[j]);
                j += 1;
            }
            i = if j < chars.len() { j + 1 } else { j };
            continue;
        }
        let rest: String = chars[i..].iter().collect();
        match longest_token(&rest) {
            Some((token, rendered)) => {
                out.push_str(&render_token(instant, rendered));
                i += token;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

/// Tokens are tried longest-first so `MM` wins over `M`.
fn longest_token(rest: &str) -> Option<(usize, &'static str)> {
    for token in [
        "YYYY", "dddd", "MMMM", "SSS", "MMM", "ddd", "YY", "MM", "DD", "HH", "hh", "mm", "ss",
        "ZZ", "Z", "M", "D", "H", "h", "m", "s", "A", "a", "X", "x",
    ] {
        if rest.starts_with(token) {
            return Some((token.len(), token));
        }
    }
    None
}

fn render_token(instant: &DateTime<Utc>, token: &str) -> String {
    match token {
        "YYYY" => format!("{:04}", instant.year()),
        "YY" => format!("{:02}", instant.year().rem_euclid(100)),
        "MMMM" => MONTHS[instant.month0() as usize].to_string(),
        "MMM" => MONTHS[instant.month0() as usize][..3].to_string(),
        "MM" => format!("{:02}", instant.month()),
        "M" => instant.month().to_string(),
        "DD" => format!("{:02}", instant.day()),
        "D" => instant.day().to_string(),
        "dddd" => WEEKDAYS[instant.weekday().num_days_from_monday() as usize].to_string(),
        "ddd" => WEEKDAYS[instant.weekday().num_days_from_monday() as usize][..3].to_string(),
        "HH" => format!("{:02}", instant.hour()),
        "H" => instant.hour().to_string(),
        "hh" => format!("{:02}", instant.hour12().1),
        "h" => instant.hour12().1.to_string(),
        "mm" => format!("{:02}", instant.minute()),
        "m" => instant.minute().to_string(),
        "ss" => format!("{:02}", instant.second()),
        "s" => instant.second().to_string(),
        "SSS" => format!("{:03}", instant.timestamp_subsec_millis()),
        "A" => if instant.hour12().0 { "PM" } else { "AM" }.to_string(),
        "a" => if instant.hour12().0 { "pm" } else { "am" }.to_string(),
        "X" => instant.timestamp().to_string(),
        "x" => instant.timestamp_millis().to_string(),
        "ZZ" => "+0000".to_string(),
        "Z" => "+00:00".to_string(),
        _ => token.to_string(),
    }
}

/// `duration value unit` renders a humanized delta: 11 seconds is
/// "a few seconds", 150 seconds is "3 minutes".
fn duration(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(amount) = args.first().and_then(coerce::as_number) else {
        return Value::Null;
    };
    let unit = args
        .get(1)
        .map(coerce::render_value)
        .unwrap_or_else(|| "seconds".to_string());
    let Some(factor) = unit_seconds(&unit) else {
        return Value::Null;
    };
    Value::String(humanize(amount.abs() * factor))
}

fn unit_seconds(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "millisecond" | "milliseconds" | "ms" => Some(0.001),
        "second" | "seconds" | "s" => Some(1.0),
        "minute" | "minutes" | "m" => Some(60.0),
        "hour" | "hours" | "h" => Some(3600.0),
        "day" | "days" | "d" => Some(86_400.0),
        "week" | "weeks" | "w" => Some(604_800.0),
        "month" | "months" => Some(2_629_800.0),
        "year" | "years" | "y" => Some(31_557_600.0),
        _ => None,
    }
}

fn humanize(seconds: f64) -> String {
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if seconds < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes.round())
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours.round())
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days.round())
    } else if days < 46.0 {
        "a month".to_string()
    } else if days < 320.0 {
        format!("{} months", (days / 30.44).round())
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        format!("{} years", (days / 365.25).round())
    }
}

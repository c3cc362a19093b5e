use chrono::{DateTime, NaiveDateTime, TimeZone};

const MINUTE_MILLIS: i64 = 60 * 1000;
const HOUR_MILLIS: i64 = 60 * MINUTE_MILLIS;
const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

/// Coarse "how long ago" bucket for list display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    JustNow,
    MinutesAgo(i64),
    HoursAgo(i64),
    DaysAgo(i64),
    /// Older than a week, shown as a date in the viewer's zone
    Absolute(NaiveDateTime),
}

/// Absolute date layout for `RelativeTime::Absolute`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `MM-DD HH:mm`
    MonthDayTime,
    /// `MM-DD`
    MonthDay,
}

impl RelativeTime {
    /// Buckets `timestamp_ms` against `now`. Future timestamps count as
    /// "just now".
    pub fn between<Tz: TimeZone>(now: &DateTime<Tz>, timestamp_ms: i64) -> Self {
        let diff = now.timestamp_millis() - timestamp_ms;

        if diff < MINUTE_MILLIS {
            RelativeTime::JustNow
        } else if diff < HOUR_MILLIS {
            RelativeTime::MinutesAgo(diff / MINUTE_MILLIS)
        } else if diff < DAY_MILLIS {
            RelativeTime::HoursAgo(diff / HOUR_MILLIS)
        } else if diff < 7 * DAY_MILLIS {
            RelativeTime::DaysAgo(diff / DAY_MILLIS)
        } else {
            let local = now
                .timezone()
                .timestamp_millis_opt(timestamp_ms)
                .single()
                .map(|dt| dt.naive_local())
                .unwrap_or_default();
            RelativeTime::Absolute(local)
        }
    }

    /// English rendering
    pub fn format(&self, style: DateStyle) -> String {
        match self {
            RelativeTime::JustNow => "just now".to_string(),
            RelativeTime::MinutesAgo(n) => format!("{} minutes ago", n),
            RelativeTime::HoursAgo(n) => format!("{} hours ago", n),
            RelativeTime::DaysAgo(n) => format!("{} days ago", n),
            RelativeTime::Absolute(at) => format_date(at, style),
        }
    }

    /// Translation key plus parameters, for shells that localize
    pub fn translation(&self, style: DateStyle) -> (&'static str, Vec<(&'static str, String)>) {
        match self {
            RelativeTime::JustNow => ("time.justNow", Vec::new()),
            RelativeTime::MinutesAgo(n) => ("time.minutesAgo", vec![("count", n.to_string())]),
            RelativeTime::HoursAgo(n) => ("time.hoursAgo", vec![("count", n.to_string())]),
            RelativeTime::DaysAgo(n) => ("time.daysAgo", vec![("count", n.to_string())]),
            RelativeTime::Absolute(at) => ("time.date", vec![("date", format_date(at, style))]),
        }
    }
}

fn format_date(at: &NaiveDateTime, style: DateStyle) -> String {
    match style {
        DateStyle::MonthDayTime => at.format("%m-%d %H:%M").to_string(),
        DateStyle::MonthDay => at.format("%m-%d").to_string(),
    }
}

/// Shorthand for `RelativeTime::between(..).format(..)`
pub fn format_relative_time<Tz: TimeZone>(now: &DateTime<Tz>, timestamp_ms: i64, style: DateStyle) -> String {
    RelativeTime::between(now, timestamp_ms).format(style)
}

use std::fmt;

use time::OffsetDateTime;

pub struct FmtOption<'r, O>(pub Option<&'r O>);

impl<O> fmt::Display for FmtOption<'_, O>
where
    O: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(o) => o.fmt(f),
            None => f.write_str("-"),
        }
    }
}

pub trait AsFmtOption {
    type Fmt: fmt::Display;
    fn fmt_option(self) -> Self::Fmt;
}

impl<'e, O> AsFmtOption for &'e Option<O>
where
    O: fmt::Display,
{
    type Fmt = FmtOption<'e, O>;

    fn fmt_option(self) -> Self::Fmt {
        FmtOption(self.as_ref())
    }
}

const SECS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
/// No leap year correction.
const DAYS_PER_YEAR: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Year,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elapsed time expressed in the single largest whole unit
///
/// Displays as `"1 hour"`, `"3 days"` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub unit: TimeUnit,
    pub value: i64,
}

impl Default for RelativeTime {
    fn default() -> Self {
        Self {
            unit: TimeUnit::Minute,
            value: 1,
        }
    }
}

impl RelativeTime {
    /// Time elapsed between `target_secs` and `now_secs`
    ///
    /// Every unit is floored from the previous one, and the largest unit
    /// with a positive count is selected. Anything below one minute,
    /// including a `target_secs` in the future, is reported as `1 minute`.
    pub fn between(now_secs: f64, target_secs: f64) -> Self {
        let elapsed = now_secs - target_secs;

        // `as` saturates, and maps NaN to 0
        let minutes = (elapsed / SECS_PER_MINUTE).floor() as i64;
        let hours = minutes.div_euclid(MINUTES_PER_HOUR);
        let days = hours.div_euclid(HOURS_PER_DAY);
        let years = days.div_euclid(DAYS_PER_YEAR);

        [
            (TimeUnit::Minute, minutes),
            (TimeUnit::Hour, hours),
            (TimeUnit::Day, days),
            (TimeUnit::Year, years),
        ]
        .into_iter()
        .filter(|&(_, value)| 0 < value)
        .last()
        .map(|(unit, value)| Self { unit, value })
        .unwrap_or_default()
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 1 {
            write!(f, "{} {}", self.value, self.unit)
        } else {
            write!(f, "{} {}s", self.value, self.unit)
        }
    }
}

/// Current wall-clock time, in fractional seconds since the Unix epoch
pub fn now_secs() -> f64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 / 1_000_000_000.0
}

/// Format the time elapsed since `target_secs` (e.g. "5 minutes", "1 year").
pub fn format_seconds_since(target_secs: u64) -> String {
    format_seconds_since_at(now_secs(), target_secs)
}

/// Like [`format_seconds_since`], but against an explicit `now_secs`.
pub fn format_seconds_since_at(now_secs: f64, target_secs: u64) -> String {
    RelativeTime::between(now_secs, target_secs as f64).to_string()
}

#[cfg(test)]
mod tests;

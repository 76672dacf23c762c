//! Token Lifetime
//!
//! Duration strings such as `"7d"`, `"12h"` or `"90 minutes"`. A bare
//! integer is a number of seconds. A leading `-` yields a negative
//! lifetime, which mints already-expired tokens.

use chrono::Duration;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifetime used when nothing is configured
pub const DEFAULT_TOKEN_LIFETIME: &str = "7d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifetimeParseError {
    #[error("token lifetime is empty")]
    Empty,
    #[error("token lifetime '{0}' must start with an integer")]
    MissingAmount(String),
    #[error("unknown token lifetime unit '{0}'")]
    UnknownUnit(String),
    #[error("token lifetime '{0}' is out of range")]
    OutOfRange(String),
}

/// Parsed lifetime that keeps the label it was written with
///
/// The label is echoed to clients as `expiresIn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLifetime {
    label: String,
    duration: Duration,
}

impl TokenLifetime {
    pub fn parse(input: &str) -> Result<Self, LifetimeParseError> {
        let label = input.trim();
        if label.is_empty() {
            return Err(LifetimeParseError::Empty);
        }

        let (negative, unsigned) = match label.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, label),
        };

        let split = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let (amount, unit) = unsigned.split_at(split);
        if amount.is_empty() {
            return Err(LifetimeParseError::MissingAmount(label.to_string()));
        }

        let amount: i64 = amount
            .parse()
            .map_err(|_| LifetimeParseError::OutOfRange(label.to_string()))?;
        let amount = if negative { -amount } else { amount };

        let unit = unit.trim().to_ascii_lowercase();
        let duration = match unit.as_str() {
            "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => {
                Duration::try_milliseconds(amount)
            }
            "" | "s" | "sec" | "secs" | "second" | "seconds" => Duration::try_seconds(amount),
            "m" | "min" | "mins" | "minute" | "minutes" => Duration::try_minutes(amount),
            "h" | "hr" | "hrs" | "hour" | "hours" => Duration::try_hours(amount),
            "d" | "day" | "days" => Duration::try_days(amount),
            "w" | "week" | "weeks" => Duration::try_weeks(amount),
            "y" | "yr" | "yrs" | "year" | "years" => {
                amount.checked_mul(365).and_then(Duration::try_days)
            }
            _ => return Err(LifetimeParseError::UnknownUnit(unit)),
        }
        .ok_or_else(|| LifetimeParseError::OutOfRange(label.to_string()))?;

        Ok(Self {
            label: label.to_string(),
            duration,
        })
    }

    /// Wrap an explicit duration; the label becomes whole seconds
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            label: format!("{}s", duration.num_seconds()),
            duration,
        }
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn num_seconds(&self) -> i64 {
        self.duration.num_seconds()
    }
}

impl Default for TokenLifetime {
    fn default() -> Self {
        Self {
            label: DEFAULT_TOKEN_LIFETIME.to_string(),
            duration: Duration::days(7),
        }
    }
}

impl FromStr for TokenLifetime {
    type Err = LifetimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TokenLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

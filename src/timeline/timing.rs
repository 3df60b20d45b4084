//! Animation timing: duration, delay and easing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while interpreting a timing value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimingError {
    #[error("The provided timing value \"{value}\" is invalid.")]
    Invalid { value: String },

    #[error("Duration values below 0 are not allowed for this animation step.")]
    NegativeDuration { value: f64 },

    #[error("Delay values below 0 are not allowed for this animation step.")]
    NegativeDelay { value: f64 },
}

/// Resolved timing of one `animate` step. Times are in milliseconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: Option<String>,
}

impl Timing {
    /// Timing from a plain millisecond duration.
    pub fn from_millis(duration: f64) -> Result<Self, TimingError> {
        if !duration.is_finite() {
            return Err(TimingError::Invalid {
                value: duration.to_string(),
            });
        }
        if duration < 0.0 {
            return Err(TimingError::NegativeDuration { value: duration });
        }
        Ok(Self {
            duration,
            ..Self::default()
        })
    }
}

/// Parse `"<duration>[ <delay>][ <easing>]"`.
///
/// Durations and delays need an `ms` or `s` unit. The easing is either a
/// bare name (`ease-out`) or a function (`cubic-bezier(0.1, 0.7, 1, 0.1)`).
///
/// # Example
///
/// ```rust
/// use segue::timeline::parse_timing;
///
/// let timing = parse_timing("1s 100ms ease-out").unwrap();
/// assert_eq!(timing.duration, 1000.0);
/// assert_eq!(timing.delay, 100.0);
/// assert_eq!(timing.easing.as_deref(), Some("ease-out"));
/// ```
pub fn parse_timing(value: &str) -> Result<Timing, TimingError> {
    let invalid = || TimingError::Invalid {
        value: value.to_string(),
    };

    let (first, rest) = next_token(value);
    let duration = parse_time(first).ok_or_else(invalid)?;

    let (second, after_second) = next_token(rest);
    let (delay, rest) = match parse_time(second) {
        Some(delay) => (delay, after_second),
        None => (0.0, rest),
    };

    let easing = rest.trim();
    let easing = if easing.is_empty() {
        None
    } else if is_easing(easing) {
        Some(easing.to_string())
    } else {
        return Err(invalid());
    };

    if duration < 0.0 {
        return Err(TimingError::NegativeDuration { value: duration });
    }
    if delay < 0.0 {
        return Err(TimingError::NegativeDelay { value: delay });
    }

    Ok(Timing {
        duration,
        delay,
        easing,
    })
}

fn next_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""))
}

fn parse_time(token: &str) -> Option<f64> {
    let (number, scale) = if let Some(number) = token.strip_suffix("ms") {
        (number, 1.0)
    } else if let Some(number) = token.strip_suffix('s') {
        (number, 1000.0)
    } else {
        return None;
    };

    let digits = number.strip_prefix('-').unwrap_or(number);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    number
        .parse::<f64>()
        .ok()
        .map(|n| n * scale)
        .filter(|n| n.is_finite())
}

fn is_easing(easing: &str) -> bool {
    let (name, args) = match easing.split_once('(') {
        Some((name, args)) => (name, Some(args)),
        None => (easing, None),
    };
    let name_ok = !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '-');
    let args_ok = args.is_none_or(|a| a.len() > 1 && a.ends_with(')'));
    name_ok && args_ok
}

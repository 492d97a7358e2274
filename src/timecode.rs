/*!
 * Cue timestamp parsing and subtitle time formatting.
 *
 * Cue times arrive as decimal second strings ("2.967", "3661"). They are kept
 * as whole seconds plus the fraction digits so that neither output format
 * picks up binary floating point error:
 * - SRT: `HH:MM:SS,mmm`, where the millisecond field is the fraction digits
 *   read as an integer and left-padded, so "36.5" renders as `,005`
 * - ASS: `H:MM:SS.cc`, the decimal value truncated (never rounded) to centiseconds
 *
 * Both formats drop whole days, so times past 24 hours wrap around.
 */

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ConversionError, ConversionResult};

// @const: Decimal seconds, optional fraction, no sign or exponent
static SECONDS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)(?:\.([0-9]*))?$").unwrap()
});

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// A non-negative cue time with millisecond precision
///
/// Equality and ordering compare the time value only, not how many fraction
/// digits were written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timestamp {
    seconds: u64,
    millis: u32,
    // @field: Fraction digits kept from the source (0..=3)
    fraction_digits: u8,
}

impl Timestamp {
    /// Create a timestamp from whole seconds and milliseconds (clamped to 999)
    pub fn new(seconds: u64, millis: u32) -> Self {
        Self {
            seconds,
            millis: millis.min(999),
            fraction_digits: 3,
        }
    }

    /// Parse a decimal seconds string.
    ///
    /// At most three fraction digits are kept; the rest are dropped. A missing
    /// fraction counts as zero.
    pub fn parse(value: &str) -> ConversionResult<Self> {
        let trimmed = value.trim();
        let captures = SECONDS_REGEX
            .captures(trimmed)
            .ok_or_else(|| ConversionError::InvalidTimestamp(value.to_string()))?;

        let seconds = captures[1]
            .parse::<u64>()
            .map_err(|_| ConversionError::InvalidTimestamp(value.to_string()))?;

        let fraction = captures.get(2).map(|m| m.as_str()).unwrap_or("");
        let fraction_digits = fraction.len().min(3);
        let millis = fraction
            .chars()
            .take(3)
            .chain(std::iter::repeat('0'))
            .take(3)
            .fold(0u32, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0));

        Ok(Self {
            seconds,
            millis,
            fraction_digits: fraction_digits as u8,
        })
    }

    /// Whole seconds
    pub fn whole_seconds(&self) -> u64 {
        self.seconds
    }

    /// Millisecond part (0..=999)
    pub fn millis(&self) -> u32 {
        self.millis
    }

    /// Millisecond field for SRT: the kept fraction digits read as an integer.
    ///
    /// `"36.384"` gives 384, while `"36.5"` gives 5 and `"2.05"` gives 5.
    pub fn srt_millis(&self) -> u32 {
        self.millis / 10u32.pow(3 - u32::from(self.fraction_digits))
    }

    /// Centisecond part, truncated (0..=99)
    pub fn centis(&self) -> u32 {
        self.millis / 10
    }

    /// Time as fractional seconds, for logging
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + f64::from(self.millis) / 1000.0
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        (self.seconds, self.millis) == (other.seconds, other.millis)
    }
}

impl Eq for Timestamp {}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.seconds, self.millis).hash(state);
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.seconds, self.millis).cmp(&(other.seconds, other.millis))
    }
}

impl FromStr for Timestamp {
    type Err = ConversionError;

    fn from_str(s: &str) -> ConversionResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.seconds, self.millis)
    }
}

/// Split whole seconds into (hours, minutes, seconds), discarding days
fn clock_parts(total_seconds: u64) -> (u64, u64, u64) {
    let days = total_seconds / SECONDS_PER_DAY;
    let mut rest = total_seconds - days * SECONDS_PER_DAY;

    let hours = rest / SECONDS_PER_HOUR;
    rest -= hours * SECONDS_PER_HOUR;

    let minutes = rest / SECONDS_PER_MINUTE;
    rest -= minutes * SECONDS_PER_MINUTE;

    (hours, minutes, rest)
}

/// Format a timestamp as an SRT time (HH:MM:SS,mmm)
pub fn format_srt_time(time: Timestamp) -> String {
    let (hours, minutes, seconds) = clock_parts(time.whole_seconds());
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, time.srt_millis())
}

/// Format a timestamp as an ASS time (H:MM:SS.cc)
pub fn format_ass_time(time: Timestamp) -> String {
    let (hours, minutes, seconds) = clock_parts(time.whole_seconds());
    format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, time.centis())
}

/// Parse a decimal seconds string and format it as an SRT time
pub fn to_srt_time(seconds: &str) -> ConversionResult<String> {
    Timestamp::parse(seconds).map(format_srt_time)
}

/// Parse a decimal seconds string and format it as an ASS time
pub fn to_ass_time(seconds: &str) -> ConversionResult<String> {
    Timestamp::parse(seconds).map(format_ass_time)
}

/*!
 * Tests for cue timestamp parsing and subtitle time formatting
 */

use ttmlconv::errors::ConversionError;
use ttmlconv::timecode::{format_ass_time, format_srt_time, to_ass_time, to_srt_time, Timestamp};

/// Test SRT formatting of a fractional timestamp
#[test]
fn test_toSrtTime_withFraction_shouldUseMillis() {
    assert_eq!(to_srt_time("36.384").unwrap(), "00:00:36,384");
    assert_eq!(to_srt_time("2.967").unwrap(), "00:00:02,967");
}

/// Test SRT formatting of whole seconds
#[test]
fn test_toSrtTime_withWholeSeconds_shouldDecomposeHoursMinutes() {
    assert_eq!(to_srt_time("3661").unwrap(), "01:01:01,000");
    assert_eq!(to_srt_time("0").unwrap(), "00:00:00,000");
    assert_eq!(to_srt_time("59.999").unwrap(), "00:00:59,999");
}

/// Test SRT formatting of fractions shorter than three digits
#[test]
fn test_toSrtTime_withShortFraction_shouldLeftPadDigits() {
    assert_eq!(to_srt_time("36.5").unwrap(), "00:00:36,005");
    assert_eq!(to_srt_time("2.05").unwrap(), "00:00:02,005");
    assert_eq!(to_srt_time("2.50").unwrap(), "00:00:02,050");
}

/// Test that ASS formatting reads short fractions as decimals
#[test]
fn test_toAssTime_withShortFraction_shouldKeepDecimalValue() {
    assert_eq!(to_ass_time("36.5").unwrap(), "0:00:36.50");
    assert_eq!(to_ass_time("2.05").unwrap(), "0:00:02.05");
}

/// Test that days are dropped from SRT times
#[test]
fn test_toSrtTime_pastOneDay_shouldWrap() {
    assert_eq!(to_srt_time("86400").unwrap(), "00:00:00,000");
    assert_eq!(to_srt_time("90061.25").unwrap(), "01:01:01,025");
}

/// Test ASS formatting truncates to centiseconds
#[test]
fn test_toAssTime_withFraction_shouldTruncateNotRound() {
    assert_eq!(to_ass_time("36.384").unwrap(), "0:00:36.38");
    assert_eq!(to_ass_time("1.999").unwrap(), "0:00:01.99");
    assert_eq!(to_ass_time("0.29").unwrap(), "0:00:00.29");
}

/// Test ASS hours are not padded
#[test]
fn test_toAssTime_withHours_shouldLeaveHoursUnpadded() {
    assert_eq!(to_ass_time("3661").unwrap(), "1:01:01.00");
    assert_eq!(to_ass_time("36000").unwrap(), "10:00:00.00");
}

/// Test that both formats agree on the same timestamp
#[test]
fn test_formatters_withSameTimestamp_shouldAgreeOnClock() {
    let ts = Timestamp::new(7322, 45);
    assert_eq!(format_srt_time(ts), "02:02:02,045");
    assert_eq!(format_ass_time(ts), "2:02:02.04");
}

/// Test that invalid input is rejected
#[test]
fn test_toSrtTime_withInvalidInput_shouldFailWithInvalidTimestamp() {
    assert_eq!(
        to_srt_time("soon"),
        Err(ConversionError::InvalidTimestamp("soon".to_string()))
    );
    assert!(matches!(to_ass_time("-3"), Err(ConversionError::InvalidTimestamp(_))));
}

/// Test that equality ignores how the fraction was written
#[test]
fn test_timestamp_eq_shouldCompareTimeValueOnly() {
    assert_eq!(Timestamp::parse("3.5").unwrap(), Timestamp::parse("3.500").unwrap());
    assert_eq!(Timestamp::parse("3").unwrap(), Timestamp::new(3, 0));
}

/// Test FromStr and Display
#[test]
fn test_timestamp_fromStr_shouldRoundTripThroughDisplay() {
    let ts: Timestamp = "12.3".parse().unwrap();
    assert_eq!(ts.to_string(), "12.300");
    assert!((ts.as_secs_f64() - 12.3).abs() < 1e-9);
}

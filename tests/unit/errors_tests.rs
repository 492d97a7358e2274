/*!
 * Tests for error types
 */

use ttmlconv::errors::ConversionError;

#[test]
fn test_malformedInput_shouldDisplayCorrectly() {
    let error = ConversionError::MalformedInput("missing <cuepoints> container".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Malformed input"));
    assert!(display.contains("<cuepoints>"));
}

#[test]
fn test_unsupportedOutputFormat_shouldDisplayPath() {
    let error = ConversionError::UnsupportedOutputFormat("out.mp4".to_string());
    assert_eq!(format!("{}", error), "Unsupported output format: out.mp4");
}

#[test]
fn test_invalidTimestamp_shouldQuoteValue() {
    let error = ConversionError::InvalidTimestamp("abc".to_string());
    assert_eq!(format!("{}", error), "Invalid timestamp: \"abc\"");
}

#[test]
fn test_conversionError_intoAnyhow_shouldKeepMessage() {
    let error: anyhow::Error = ConversionError::InvalidScaling("source_width".to_string()).into();
    assert!(error.to_string().contains("Invalid scaling"));
}

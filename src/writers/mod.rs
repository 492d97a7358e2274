//! Subtitle writers for the supported output formats.
//!
//! Each writer is a pure function from caption events to the file's text.

mod ass;
mod srt;

pub use ass::{write_ass, ASS_STYLE_BOX, ASS_STYLE_DEFAULT, ASS_STYLE_RUBY};
pub use srt::write_srt;

use std::fmt;
use std::path::Path;

use crate::cue_document::CueDefaults;
use crate::errors::{ConversionError, ConversionResult};
use crate::scaling::ScalingDescriptor;
use crate::sequencer::CaptionEvent;

/// Output subtitle formats, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// SubRip: numbered, time-coded plain text
    Srt,
    /// Advanced SubStation Alpha: styled and positioned text
    Ass,
}

impl OutputFormat {
    /// Every supported format
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Ass, OutputFormat::Srt];

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Ass => "ass",
        }
    }

    /// Look up a format by extension, with or without the leading dot, ignoring case
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Pick the format for an output path from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConversionResult<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| ConversionError::UnsupportedOutputFormat(path.display().to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write caption events in the requested format.
pub fn write_content(
    events: &[CaptionEvent<'_>],
    defaults: &CueDefaults,
    format: OutputFormat,
    scaling: &ScalingDescriptor,
) -> String {
    match format {
        OutputFormat::Srt => write_srt(events),
        OutputFormat::Ass => write_ass(events, defaults, scaling),
    }
}

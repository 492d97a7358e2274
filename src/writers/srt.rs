//! SRT subtitle writer.
//!
//! One numbered block per caption event. Ruby (furigana) fragments have no
//! place in plain text and are left out; the event block is still written.

use crate::sequencer::CaptionEvent;
use crate::timecode::format_srt_time;

/// Write caption events to SRT format string.
///
/// Block numbers start at 1 and count only the events passed in.
pub fn write_srt(events: &[CaptionEvent<'_>]) -> String {
    let mut output = String::new();

    for (i, event) in events.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));

        let start = format_srt_time(event.start);
        let end = format_srt_time(event.end);
        output.push_str(&format!("{} --> {}\n", start, end));

        for fragment in event.fragments.iter().filter(|f| !f.is_ruby()) {
            output.push_str(fragment.display_text());
            output.push('\n');
        }

        output.push('\n');
    }

    output
}

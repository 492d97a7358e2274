//! ASS subtitle writer.
//!
//! Writes a fixed script header at the target resolution, three fixed style
//! presets, and one positioned `Dialogue` line per fragment. Fragment
//! positions are mapped from the source resolution with the scaling descriptor.
//!
//! # Timing Precision
//!
//! ASS uses centisecond timing (H:MM:SS.cc); cue times are truncated, not rounded.

use crate::cue_document::{CueDefaults, SubtitleFragment};
use crate::scaling::ScalingDescriptor;
use crate::sequencer::CaptionEvent;
use crate::timecode::format_ass_time;

/// Style for ordinary caption text
pub const ASS_STYLE_DEFAULT: &str = "Default";
/// Style for text drawn on an opaque box
pub const ASS_STYLE_BOX: &str = "Box";
/// Style for furigana annotations
pub const ASS_STYLE_RUBY: &str = "Ruby";

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

// Alignment 7 anchors \pos at the top-left corner, matching source coordinates
const STYLES: [&str; 3] = [
    "Style: Default,MS Gothic,16,&H00FFFFFF,&H000000FF,&H00000000,&H80000000,0,0,0,0,100,100,1,0,1,1,0,7,0,0,0,128",
    "Style: Box,MS Gothic,16,&H00FFFFFF,&H000000FF,&H80000000,&H80000000,0,0,0,0,100,100,1,0,3,1,0,7,0,0,0,128",
    "Style: Ruby,MS Gothic,8,&H00FFFFFF,&H000000FF,&H00000000,&H80000000,0,0,0,0,100,100,0,0,1,1,0,7,0,0,0,128",
];

const EVENT_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Write caption events to ASS format string.
pub fn write_ass(
    events: &[CaptionEvent<'_>],
    defaults: &CueDefaults,
    scaling: &ScalingDescriptor,
) -> String {
    let mut output = String::new();
    let (play_res_x, play_res_y) = scaling.target_resolution();

    // [Script Info]
    output.push_str("[Script Info]\n");
    output.push_str("ScriptType: v4.00+\n");
    output.push_str(&format!("PlayResX: {}\n", play_res_x));
    output.push_str(&format!("PlayResY: {}\n", play_res_y));
    output.push_str("WrapStyle: 2\n");
    output.push_str("ScaledBorderAndShadow: yes\n");
    output.push('\n');

    // [V4+ Styles]
    output.push_str("[V4+ Styles]\n");
    output.push_str(STYLE_FORMAT);
    output.push('\n');
    for style in STYLES {
        output.push_str(style);
        output.push('\n');
    }
    output.push('\n');

    // [Events]
    output.push_str("[Events]\n");
    output.push_str(EVENT_FORMAT);
    output.push('\n');

    for event in events {
        let start = format_ass_time(event.start);
        let end = format_ass_time(event.end);

        for fragment in event.fragments {
            let (x, y) = fragment.position(defaults);
            let (pos_x, pos_y) = scaling.scale(x, y);
            output.push_str(&format!(
                "Dialogue: 0,{},{},{},,0,0,0,,{{\\pos({},{})}}{}\n",
                start,
                end,
                style_for(fragment),
                pos_x,
                pos_y,
                escape_text(fragment.display_text())
            ));
        }
    }

    output
}

fn style_for(fragment: &SubtitleFragment) -> &'static str {
    if fragment.is_ruby() {
        ASS_STYLE_RUBY
    } else {
        ASS_STYLE_DEFAULT
    }
}

/// Turn embedded line breaks into ASS hard breaks so each dialogue stays on one line.
fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\\N").replace(['\n', '\r'], "\\N")
}

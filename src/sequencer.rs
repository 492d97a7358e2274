use log::{debug, warn};

use crate::cue_document::{CuePoint, SubtitleFragment};
use crate::timecode::Timestamp;

// @module: Pairs cue points into timed caption events

/// Fragments shown between one cue point and the next
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionEvent<'a> {
    // @field: Time of the cue that carries the fragments
    pub start: Timestamp,

    // @field: Time of the following cue
    pub end: Timestamp,

    // @field: Fragments of the starting cue, in document order
    pub fragments: &'a [SubtitleFragment],
}

/// Build caption events from cue points in document order.
///
/// Each cue except the last starts an event that ends at the next cue's time,
/// whether or not that next cue carries text. Cues without fragments are
/// skipped, and the last cue only ever serves as an end time.
pub fn sequence_events(cues: &[CuePoint]) -> Vec<CaptionEvent<'_>> {
    if cues.len() < 2 {
        warn!(
            "Document has {} cue point(s); at least two are needed to time a caption",
            cues.len()
        );
        return Vec::new();
    }

    let events: Vec<CaptionEvent<'_>> = cues
        .windows(2)
        .filter(|pair| !pair[0].fragments.is_empty())
        .map(|pair| CaptionEvent {
            start: pair[0].time,
            end: pair[1].time,
            fragments: &pair[0].fragments,
        })
        .collect();

    if let Some(trailing) = cues.last().filter(|cue| !cue.fragments.is_empty()) {
        warn!(
            "Last cue point {:?} has {} subtitle(s) but no end time; they are dropped",
            trailing.name,
            trailing.fragments.len()
        );
    }

    debug!(
        "Sequenced {} caption events from {} cue points",
        events.len(),
        cues.len()
    );

    events
}

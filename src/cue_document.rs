//! Cue document parsing.
//!
//! Reads the broadcaster caption XML into cue points and their subtitle fragments:
//!
//! ```xml
//! <cuepoints x="170" y="450" color="0xffffff" size="36" ruby="false">
//!   <cuepoint name="1" time="2.967"/>
//!   <cuepoint name="2" time="3">
//!     <subtitle id="201" x="210" y="450" xx="210" yy="560" background="0x000000"
//!               opacity="0.5" lang="jpn" substitution_string="♪">
//!       <![CDATA[　]]>
//!     </subtitle>
//!     <subtitle id="202" x="254" y="450" xx="254" yy="560" lang="jpn">
//!       <![CDATA[｢お]]>
//!     </subtitle>
//!   </cuepoint>
//! </cuepoints>
//! ```

use log::{debug, warn};

use crate::errors::{ConversionError, ConversionResult};
use crate::timecode::Timestamp;

const ROOT_TAG: &str = "cuepoints";
const CUE_TAG: &str = "cuepoint";
const SUBTITLE_TAG: &str = "subtitle";

/// Attribute value that marks a fragment as plain (non-ruby) text
const RUBY_FALSE: &str = "false";

/// Document-wide position defaults carried on the root container
#[derive(Debug, Clone, PartialEq)]
pub struct CueDefaults {
    pub x: f64,
    pub y: f64,
}

impl Default for CueDefaults {
    fn default() -> Self {
        Self { x: 170.0, y: 450.0 }
    }
}

/// One styled run of caption text attached to a cue point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleFragment {
    pub id: Option<String>,
    /// Text and CDATA content exactly as found, whitespace included
    pub text: String,
    /// Replacement for bitmap (gaiji) glyphs
    pub substitution: Option<String>,
    // Coordinates stay raw until positioned output needs them
    pub x: Option<String>,
    pub y: Option<String>,
    pub xx: Option<String>,
    pub yy: Option<String>,
    pub color: Option<String>,
    pub background: Option<String>,
    pub opacity: Option<String>,
    /// Raw ruby attribute; see [`SubtitleFragment::is_ruby`]
    pub ruby: Option<String>,
    pub lang: Option<String>,
}

impl SubtitleFragment {
    /// Text to show: the substitution string when present, else the trimmed raw text
    pub fn display_text(&self) -> &str {
        match &self.substitution {
            Some(substitution) => substitution,
            None => self.text.trim(),
        }
    }

    /// Whether this fragment is a furigana annotation
    pub fn is_ruby(&self) -> bool {
        self.ruby.as_deref().is_some_and(|value| value != RUBY_FALSE)
    }

    /// Source position for positioned output.
    ///
    /// Prefers the alternate `xx`/`yy` pair, then `x`/`y`, then the document
    /// defaults. Values that are not numbers are skipped with a warning.
    pub fn position(&self, defaults: &CueDefaults) -> (f64, f64) {
        (
            first_coordinate([("xx", self.xx.as_deref()), ("x", self.x.as_deref())])
                .unwrap_or(defaults.x),
            first_coordinate([("yy", self.yy.as_deref()), ("y", self.y.as_deref())])
                .unwrap_or(defaults.y),
        )
    }
}

/// First candidate attribute that holds a finite number
fn first_coordinate(candidates: [(&str, Option<&str>); 2]) -> Option<f64> {
    candidates.into_iter().find_map(|(name, raw)| {
        let raw = raw?;
        let value = parse_coordinate(raw);
        if value.is_none() {
            warn!("Ignoring non-numeric subtitle coordinate {}={:?}", name, raw);
        }
        value
    })
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A timed marker; its fragments show from this time until the next cue's
#[derive(Debug, Clone, PartialEq)]
pub struct CuePoint {
    pub name: String,
    pub time: Timestamp,
    pub fragments: Vec<SubtitleFragment>,
}

/// A parsed caption document
#[derive(Debug, Clone, PartialEq)]
pub struct CueDocument {
    pub defaults: CueDefaults,
    /// Cue points in document order
    pub cues: Vec<CuePoint>,
}

impl CueDocument {
    /// Parse caption XML into cue points.
    ///
    /// Fails with `MalformedInput` when the XML is not well formed, when there
    /// is no `<cuepoints>` container, or when a cue has no `time` attribute,
    /// and with `InvalidTimestamp` when a `time` attribute is not a decimal
    /// number of seconds.
    pub fn parse(xml: &str) -> ConversionResult<Self> {
        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = true;
        let doc = roxmltree::Document::parse_with_options(xml, options)
            .map_err(|e| ConversionError::MalformedInput(format!("XML parse error: {}", e)))?;

        let root = doc
            .descendants()
            .find(|n| n.has_tag_name(ROOT_TAG))
            .ok_or_else(|| {
                ConversionError::MalformedInput(format!("missing <{}> container", ROOT_TAG))
            })?;

        let defaults = parse_defaults(&root);

        let cues = root
            .descendants()
            .filter(|n| n.has_tag_name(CUE_TAG))
            .enumerate()
            .map(|(index, node)| parse_cue(&node, index))
            .collect::<ConversionResult<Vec<_>>>()?;

        debug!(
            "Parsed {} cue points with {} subtitle fragments",
            cues.len(),
            cues.iter().map(|c| c.fragments.len()).sum::<usize>()
        );

        Ok(Self { defaults, cues })
    }
}

/// Parse the position defaults from the root container's attributes.
fn parse_defaults(root: &roxmltree::Node) -> CueDefaults {
    let fallback = CueDefaults::default();
    let coordinate = |name: &str, fallback: f64| match root.attribute(name) {
        None => fallback,
        Some(raw) => parse_coordinate(raw).unwrap_or_else(|| {
            warn!("Ignoring non-numeric <{}> attribute {}={:?}", ROOT_TAG, name, raw);
            fallback
        }),
    };
    CueDefaults {
        x: coordinate("x", fallback.x),
        y: coordinate("y", fallback.y),
    }
}

/// Parse a single cuepoint element and its subtitles.
fn parse_cue(node: &roxmltree::Node, index: usize) -> ConversionResult<CuePoint> {
    let name = node.attribute("name").unwrap_or_default().to_string();
    let time = node.attribute("time").ok_or_else(|| {
        ConversionError::MalformedInput(format!(
            "cuepoint #{} ({:?}) has no time attribute",
            index + 1,
            name
        ))
    })?;
    let time = Timestamp::parse(time)?;

    let fragments = node
        .descendants()
        .filter(|n| n.has_tag_name(SUBTITLE_TAG))
        .map(|n| parse_fragment(&n))
        .collect();

    Ok(CuePoint {
        name,
        time,
        fragments,
    })
}

/// Parse a single subtitle element.
fn parse_fragment(node: &roxmltree::Node) -> SubtitleFragment {
    // Text and CDATA children both surface as text nodes
    let text: String = node
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    SubtitleFragment {
        id: string_attr(node, "id"),
        text,
        substitution: string_attr(node, "substitution_string"),
        x: string_attr(node, "x"),
        y: string_attr(node, "y"),
        xx: string_attr(node, "xx"),
        yy: string_attr(node, "yy"),
        color: string_attr(node, "color"),
        background: string_attr(node, "background"),
        opacity: string_attr(node, "opacity"),
        ruby: string_attr(node, "ruby"),
        lang: string_attr(node, "lang"),
    }
}

fn string_attr(node: &roxmltree::Node, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

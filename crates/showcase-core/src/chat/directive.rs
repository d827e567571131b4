//! Response directive parsing.
//!
//! Advisor replies may embed two textual conventions:
//!
//! - `[FRAME_GEN]`: everything after the first occurrence is a structured
//!   solution framework, everything before it is the conversational reply.
//! - `[案例: <id>]`: an inline reference to a case in the repository.
//!
//! The framework split runs once, when the reply arrives. Case references are
//! resolved at render time in a single left-to-right pass that yields an
//! ordered list of [`Segment`]s.

use crate::case::CaseRepository;
use serde::{Deserialize, Serialize};

/// Split token introducing the structured framework body.
pub const FRAMEWORK_MARKER: &str = "[FRAME_GEN]";

/// Opening of a case reference; the id runs up to the next `]`.
pub const CASE_MARKER_OPEN: &str = "[案例: ";

const CASE_MARKER_CLOSE: char = ']';

/// Reply shown when the advisor put nothing before `[FRAME_GEN]`.
pub const DEFAULT_FRAMEWORK_LEAD_IN: &str = "• 我已為您擬定初步技術框架：";

/// Result of splitting a raw advisor reply at the framework marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Conversational text to append to the transcript.
    pub reply: String,
    /// Framework body, present only if the marker was found. May be empty.
    pub framework: Option<String>,
}

/// Splits `raw` at the first [`FRAMEWORK_MARKER`].
///
/// Without a marker the text is returned untouched. With one, both halves are
/// trimmed and an empty reply is replaced by [`DEFAULT_FRAMEWORK_LEAD_IN`].
/// Later markers are left inside the framework body.
pub fn split_framework(raw: &str) -> ParsedResponse {
    match raw.split_once(FRAMEWORK_MARKER) {
        Some((before, after)) => {
            let reply = before.trim();
            ParsedResponse {
                reply: if reply.is_empty() {
                    DEFAULT_FRAMEWORK_LEAD_IN.to_string()
                } else {
                    reply.to_string()
                },
                framework: Some(after.trim().to_string()),
            }
        }
        None => ParsedResponse {
            reply: raw.to_string(),
            framework: None,
        },
    }
}

/// How an inline case reference is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceLabel {
    /// The id resolved to a case in the repository.
    RelatedTemplate,
    /// The id is unknown; the reference stays clickable but opens nothing.
    ViewDetails,
}

impl ReferenceLabel {
    pub fn text(&self) -> &'static str {
        match self {
            ReferenceLabel::RelatedTemplate => "相關範本",
            ReferenceLabel::ViewDetails => "查看詳情",
        }
    }
}

/// A renderable piece of message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text, kept verbatim.
    Text(String),
    /// Clickable reference; activation opens `case_id` if it exists.
    CaseReference {
        case_id: String,
        label: ReferenceLabel,
    },
}

impl Segment {
    pub fn case_id(&self) -> Option<&str> {
        match self {
            Segment::Text(_) => None,
            Segment::CaseReference { case_id, .. } => Some(case_id),
        }
    }
}

/// Scans `content` for case references and resolves them against `cases`.
///
/// Text between references is preserved exactly, including whitespace.
/// Empty text runs (e.g. between adjacent references) are not emitted.
pub fn segment_content(content: &str, cases: &dyn CaseRepository) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = content[cursor..].find(CASE_MARKER_OPEN) {
        let open = cursor + offset;
        let id_start = open + CASE_MARKER_OPEN.len();

        match content[id_start..].find(CASE_MARKER_CLOSE) {
            // no closing bracket anywhere after this point, nothing else can match
            None => break,
            // `[案例: ]` carries no id; resume one byte past the ASCII '['
            Some(0) => cursor = open + 1,
            Some(id_len) => {
                push_text(&mut segments, &content[literal_start..open]);

                let case_id = content[id_start..id_start + id_len].trim().to_string();
                let label = if cases.contains(&case_id) {
                    ReferenceLabel::RelatedTemplate
                } else {
                    ReferenceLabel::ViewDetails
                };
                segments.push(Segment::CaseReference { case_id, label });

                cursor = id_start + id_len + CASE_MARKER_CLOSE.len_utf8();
                literal_start = cursor;
            }
        }
    }

    push_text(&mut segments, &content[literal_start..]);
    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
}

/// Flattens segments back into display text, e.g. for terminals.
pub fn render_plain(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.clone(),
            Segment::CaseReference { case_id, label } => format!("[{} #{}]", label.text(), case_id),
        })
        .collect()
}

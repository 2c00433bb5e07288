//! Control events and the transport seam.
//!
//! The transport is a black box: something that delivers discrete, ordered
//! control messages and accepts a one-shot `join` handshake. Everything else
//! (reconnects, acknowledgements, framing) stays on the other side of
//! [`ControlFeed`].

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::script::Paragraph;

pub mod mock;

/// A decoded operator command.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEvent {
    /// Replace the whole script. `autoscale` requests a deferred
    /// fit-to-screen pass once layout has settled.
    Load {
        paragraphs: Vec<Paragraph>,
        autoscale: bool,
    },
    /// Set the autoscroll rate in px/sec. Anything `<= 0` stops scrolling.
    Scroll { speed: f64 },
    /// Change the font family. `None` keeps the current one.
    SetFont { font: Option<String> },
    SetUppercase { enabled: bool },
    /// Nudge the scroll position by a signed pixel delta.
    Jump { pixels: f64 },
    /// Seek to an absolute scroll position. `None` keeps the current one.
    SetPosition { pos: Option<f64> },
    /// Mirror the whole view per axis. An absolute set, not a toggle.
    Flip { x: bool, y: bool },
    /// Change the uniform font size. `None` keeps the current one.
    SetFontSize { size: Option<u32> },
    FitToScreen,
}

/// Why an inbound frame produced no event.
///
/// Both cases are recoverable by ignoring the frame; the distinction only
/// matters for logs (garbage vs. a control kind from a newer operator).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed control envelope: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unrecognized control kind `{0}`")]
    UnknownKind(String),
}

/// Wire shape shared by every control message: `{"type": ..., fields...}`.
///
/// Numeric fields are kept as raw JSON values so that lenient parsing can
/// accept numbers and numeric strings alike without failing the envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    paragraphs: Vec<Paragraph>,
    #[serde(default)]
    autoscale: bool,
    speed: Option<Value>,
    pixels: Option<Value>,
    pos: Option<Value>,
    size: Option<Value>,
    font: Option<String>,
    enabled: Option<bool>,
    x: Option<bool>,
    y: Option<bool>,
}

impl ControlEvent {
    /// Decode one raw transport frame.
    ///
    /// Malformed numeric payloads never fail the frame; they fall back to the
    /// per-field default (see the match arms). Only an unparsable envelope or
    /// an unknown `type` is reported, and callers are expected to log and
    /// drop those.
    pub fn decode(frame: &str) -> Result<Self, DecodeError> {
        let envelope: Envelope = serde_json::from_str(frame)?;
        Self::from_envelope(envelope)
    }

    fn from_envelope(envelope: Envelope) -> Result<Self, DecodeError> {
        let event = match envelope.kind.as_str() {
            "load" => Self::Load {
                paragraphs: envelope.paragraphs,
                autoscale: envelope.autoscale,
            },
            "scroll" => Self::Scroll {
                speed: lenient_f64(envelope.speed.as_ref()).unwrap_or(0.0),
            },
            "set_font" => Self::SetFont {
                font: envelope.font.filter(|family| !family.trim().is_empty()),
            },
            "set_uppercase" => Self::SetUppercase {
                enabled: envelope.enabled.unwrap_or(false),
            },
            "jump" => Self::Jump {
                pixels: lenient_f64(envelope.pixels.as_ref()).unwrap_or(0.0),
            },
            "set_position" => Self::SetPosition {
                pos: lenient_f64(envelope.pos.as_ref()),
            },
            "flip" => Self::Flip {
                x: envelope.x.unwrap_or(false),
                y: envelope.y.unwrap_or(false),
            },
            "set_font_size" => Self::SetFontSize {
                size: lenient_font_px(envelope.size.as_ref()),
            },
            "fit_to_screen" => Self::FitToScreen,
            _ => return Err(DecodeError::UnknownKind(envelope.kind)),
        };

        Ok(event)
    }
}

/// Accept a JSON number or a numeric string; reject everything else,
/// including non-finite values.
fn lenient_f64(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|number| number.is_finite())
}

/// Font sizes additionally reject zero and negative pixel counts.
fn lenient_font_px(value: Option<&Value>) -> Option<u32> {
    lenient_f64(value)
        .filter(|px| *px >= 1.0)
        .map(|px| px as u32)
}

/// Ordered, reliable delivery of control events from the operator.
pub trait ControlFeed {
    type Error;

    /// Register this client as a display endpoint. Emitted once at session
    /// start; no acknowledgement is consumed.
    fn join(&mut self) -> Result<(), Self::Error>;

    /// Return the next pending event, or `None` when the feed is drained for
    /// this tick. Events must come out in delivery order.
    fn poll_event(&mut self) -> Result<Option<ControlEvent>, Self::Error>;
}

//! Display state machine: one session, one owner, mutated only by dispatched
//! control events and the frame tick.

use log::{debug, warn};

use crate::{
    event::{ControlEvent, ControlFeed},
    render::{Flip, RenderSurface, font_stack, view_transforms},
    script::{Paragraph, Script},
};

/// Outcome of one host frame tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Session tunables. Defaults match the reference prompter deployment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrompterConfig {
    /// Initial uniform font size, px.
    pub font_size_px: u32,
    /// Floor for fit-to-screen and operator font-size commands, px.
    pub min_font_size_px: u32,
    /// Delay between a `load{autoscale}` and the deferred fit pass, giving
    /// the host a layout pass to settle real heights.
    pub autoscale_settle_ms: u64,
    /// Font family applied before any `set_font` arrives.
    pub font_family: &'static str,
}

impl Default for PrompterConfig {
    fn default() -> Self {
        Self {
            font_size_px: 48,
            min_font_size_px: 8,
            autoscale_settle_ms: 50,
            font_family: "OpenDyslexic",
        }
    }
}

/// Read-only view of the display state, for hosts and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    pub position: f64,
    pub max_scroll: f64,
    pub speed: f64,
    pub font_size_px: u32,
    pub flip: Flip,
    pub uppercase: bool,
    pub scrolling: bool,
    pub paragraph_count: usize,
}

/// The teleprompter display session.
///
/// Owns the full display state for the life of the session and is the single
/// writer to it. Control events and frame ticks are serialized by the host
/// (run-to-completion, no interleaving), so no locking is needed.
pub struct PrompterApp<S, F>
where
    S: RenderSurface,
    F: ControlFeed,
{
    surface: S,
    feed: F,
    config: PrompterConfig,
    script: Script,
    position: f64,
    speed: f64,
    font_size_px: u32,
    flip: Flip,
    uppercase: bool,
    font_family: String,
    scrolling: bool,
    last_tick_ms: Option<u64>,
    autoscale_due_ms: Option<u64>,
    pending_redraw: bool,
}

include!("session.rs");
include!("dispatch.rs");
include!("autoscroll.rs");
include!("fit.rs");

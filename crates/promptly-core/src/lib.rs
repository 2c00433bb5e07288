//! Core state machine for a remote-controlled teleprompter display.
//!
//! A [`PrompterApp`] consumes ordered control events from a transport seam
//! ([`ControlFeed`]) and reduces them into one coherent visual state: the
//! loaded script, a clamped scroll position, an autoscroll rate, font
//! size/family, and per-axis mirroring. A host drives the session by calling
//! [`PrompterApp::tick`] once per frame with a monotonic timestamp; the tick
//! drains pending events, fires the deferred fit-to-screen pass when due, and
//! advances autonomous scrolling.
//!
//! The crate is platform-agnostic: rendering goes through the
//! [`RenderSurface`] trait (blocks in a clipping viewport plus two height
//! reads), and the transport stays behind [`ControlFeed`]. Both seams ship
//! mock implementations for tests and bring-up.
//!
//! Bad input never crashes the display. Malformed numeric payloads fall back
//! to safe defaults at decode time, unknown event kinds are ignored for
//! forward compatibility, and out-of-range positions are clamped silently.

pub mod app;
pub mod event;
pub mod render;
pub mod script;

pub use app::{PrompterApp, PrompterConfig, StateSnapshot, TickResult};
pub use event::{ControlEvent, ControlFeed, DecodeError};
pub use render::{ContainerTransform, ContentTransform, Flip, RenderSurface};
pub use script::{Paragraph, Script};

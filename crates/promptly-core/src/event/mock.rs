use std::collections::VecDeque;
use std::convert::Infallible;

use super::{ControlEvent, ControlFeed};

/// No-transport feed used during bring-up.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockFeed;

impl MockFeed {
    pub const fn new() -> Self {
        Self
    }
}

impl ControlFeed for MockFeed {
    type Error = Infallible;

    fn join(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<ControlEvent>, Self::Error> {
        Ok(None)
    }
}

/// In-process feed backed by a queue. Tests and local hosts push events in;
/// the dispatcher drains them in order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFeed {
    queue: VecDeque<ControlEvent>,
    joined: bool,
}

impl ScriptedFeed {
    pub fn new(events: impl IntoIterator<Item = ControlEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
            joined: false,
        }
    }

    pub fn push(&mut self, event: ControlEvent) {
        self.queue.push_back(event);
    }

    /// Whether the session handshake has been emitted.
    pub fn joined(&self) -> bool {
        self.joined
    }
}

impl ControlFeed for ScriptedFeed {
    type Error = Infallible;

    fn join(&mut self) -> Result<(), Self::Error> {
        self.joined = true;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<ControlEvent>, Self::Error> {
        Ok(self.queue.pop_front())
    }
}

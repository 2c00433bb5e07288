impl<S, F> PrompterApp<S, F>
where
    S: RenderSurface,
    F: ControlFeed,
{
    /// Upper scroll bound, recomputed from the surface on every use. A
    /// content region shorter than the viewport floors at 0.
    fn max_scroll(&self) -> f64 {
        (self.surface.content_height() - self.surface.viewport_height()).max(0.0)
    }

    fn clamp_position(&mut self) {
        self.position = self.position.clamp(0.0, self.max_scroll());
    }

    /// Re-apply both view transforms in their fixed order.
    fn apply_position(&mut self) {
        let (container, content) = view_transforms(self.flip, self.position);
        self.surface.apply_view(container, content);
    }

    /// Re-establish the position invariant after any mutation that can move
    /// either clamp operand, then push the result to the surface.
    fn settle_position(&mut self) {
        self.clamp_position();
        self.apply_position();
        self.pending_redraw = true;
    }

    fn start_scroll(&mut self) {
        // At most one tick stream: starting while running must not stack.
        if self.scrolling {
            return;
        }
        self.scrolling = true;
        // Fresh elapsed-time baseline; a stale stamp from a previous run
        // would turn into a position jump on the first tick.
        self.last_tick_ms = None;
        debug!("scroll: running at {} px/s", self.speed);
    }

    fn stop_scroll(&mut self) {
        if !self.scrolling {
            return;
        }
        self.scrolling = false;
        self.last_tick_ms = None;
        debug!("scroll: stopped at {:.1} px", self.position);
    }

    /// One autoscroll step. The first tick of a run has no meaningful delta
    /// and advances by zero.
    fn tick_scroll(&mut self, now_ms: u64) -> TickResult {
        if !self.scrolling {
            return TickResult::NoRender;
        }

        let dt_ms = self
            .last_tick_ms
            .map_or(0, |last| now_ms.saturating_sub(last));
        self.last_tick_ms = Some(now_ms);

        self.position += self.speed * dt_ms as f64 / 1_000.0;

        let max = self.max_scroll();
        if self.position >= max {
            self.position = max;
            // End of content stops the engine rather than spinning in place.
            self.stop_scroll();
        }
        if self.position < 0.0 {
            self.position = 0.0;
        }

        self.apply_position();
        TickResult::RenderRequested
    }
}

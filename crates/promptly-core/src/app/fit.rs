impl<S, F> PrompterApp<S, F>
where
    S: RenderSurface,
    F: ControlFeed,
{
    /// Arm (or disarm) the deferred fit pass that follows a `load`.
    ///
    /// The timer is a one-shot deadline checked from `tick`. A later `load`
    /// replaces it outright, so at most one fit pass runs per settled script.
    fn schedule_autoscale(&mut self, autoscale: bool, now_ms: u64) {
        self.autoscale_due_ms = autoscale.then(|| now_ms + self.config.autoscale_settle_ms);
    }

    fn run_due_autoscale(&mut self, now_ms: u64) {
        let Some(due_ms) = self.autoscale_due_ms else {
            return;
        };
        if now_ms < due_ms {
            return;
        }
        self.autoscale_due_ms = None;
        debug!("fit: deferred autoscale firing");
        self.fit_to_screen();
    }

    /// Shrink-only convergence: step the font size down by 1 px until the
    /// content fits the viewport or the floor is reached.
    ///
    /// Terminates in at most `font_size - min_font_size` iterations. Content
    /// that still overflows at the floor is an accepted degradation, not an
    /// error. The current size is applied at least once even when the content
    /// already fits.
    fn fit_to_screen(&mut self) {
        self.surface.apply_font_size(self.font_size_px);
        while self.surface.content_height() > self.surface.viewport_height()
            && self.font_size_px > self.config.min_font_size_px
        {
            self.font_size_px -= 1;
            self.surface.apply_font_size(self.font_size_px);
        }
        debug!("fit: settled at {} px", self.font_size_px);
        // The shrink moved the scroll bound.
        self.settle_position();
    }
}

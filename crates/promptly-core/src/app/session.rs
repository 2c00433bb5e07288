impl<S, F> PrompterApp<S, F>
where
    S: RenderSurface,
    F: ControlFeed,
{
    pub fn new(mut surface: S, mut feed: F, mut config: PrompterConfig) -> Self {
        if config.min_font_size_px == 0 {
            config.min_font_size_px = 1;
        }
        config.font_size_px = config.font_size_px.max(config.min_font_size_px);

        if feed.join().is_err() {
            warn!("session: join handshake failed; continuing unregistered");
        }
        surface.set_font_stack(&font_stack(config.font_family));

        let mut app = Self {
            surface,
            feed,
            config,
            script: Script::default(),
            position: 0.0,
            speed: 0.0,
            font_size_px: config.font_size_px,
            flip: Flip::default(),
            uppercase: false,
            font_family: config.font_family.to_owned(),
            scrolling: false,
            last_tick_ms: None,
            autoscale_due_ms: None,
            pending_redraw: true,
        };
        app.apply_position();
        app
    }

    /// Advance the session by one host frame.
    ///
    /// Drains pending control events first, then fires the deferred autoscale
    /// pass if due, then advances autoscroll. Each stage runs to completion
    /// before the next, matching the single-threaded cooperative model.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_events(now_ms);
        self.run_due_autoscale(now_ms);
        let scrolled = self.tick_scroll(now_ms);

        if self.pending_redraw || scrolled == TickResult::RenderRequested {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            position: self.position,
            max_scroll: self.max_scroll(),
            speed: self.speed,
            font_size_px: self.font_size_px,
            flip: self.flip,
            uppercase: self.uppercase,
            scrolling: self.scrolling,
            paragraph_count: self.script.len(),
        }
    }

    /// Whether the autoscroll engine is running. Hosts may skip frame
    /// scheduling while this is false and nothing else is pending.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Mutable transport access, e.g. for in-process feeds that are pushed
    /// from the host side.
    pub fn feed_mut(&mut self) -> &mut F {
        &mut self.feed
    }
}

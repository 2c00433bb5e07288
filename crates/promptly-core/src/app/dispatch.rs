impl<S, F> PrompterApp<S, F>
where
    S: RenderSurface,
    F: ControlFeed,
{
    fn process_events(&mut self, now_ms: u64) {
        loop {
            match self.feed.poll_event() {
                Ok(Some(event)) => self.apply_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("control: feed poll failed; keeping last coherent state");
                    break;
                }
            }
        }
    }

    /// Apply one control event, synchronously and atomically.
    fn apply_event(&mut self, event: ControlEvent, now_ms: u64) {
        match event {
            ControlEvent::Load {
                paragraphs,
                autoscale,
            } => self.apply_load(paragraphs, autoscale, now_ms),
            ControlEvent::Scroll { speed } => self.apply_scroll(speed),
            ControlEvent::SetFont { font } => self.apply_set_font(font),
            ControlEvent::SetUppercase { enabled } => {
                debug!("control: set_uppercase enabled={enabled}");
                self.uppercase = enabled;
                self.surface.set_uppercase(enabled);
                // Rendered height may have changed with the glyphs.
                self.settle_position();
            }
            ControlEvent::Jump { pixels } => {
                debug!("control: jump pixels={pixels}");
                self.position += pixels;
                self.settle_position();
            }
            ControlEvent::SetPosition { pos } => {
                match pos {
                    Some(pos) => self.position = pos,
                    None => debug!(
                        "control: set_position without a usable value; keeping {:.1}",
                        self.position
                    ),
                }
                self.settle_position();
            }
            ControlEvent::Flip { x, y } => {
                debug!("control: flip x={x} y={y}");
                self.flip = Flip { x, y };
                self.apply_position();
                self.pending_redraw = true;
            }
            ControlEvent::SetFontSize { size } => self.apply_set_font_size(size),
            ControlEvent::FitToScreen => {
                debug!("control: fit_to_screen");
                self.fit_to_screen();
            }
        }
    }

    fn apply_load(&mut self, paragraphs: Vec<Paragraph>, autoscale: bool, now_ms: u64) {
        debug!(
            "control: load paragraphs={} autoscale={autoscale}",
            paragraphs.len()
        );
        self.script.replace(paragraphs);
        self.surface.rebuild(self.script.paragraphs(), self.font_size_px);
        self.position = 0.0;
        self.apply_position();
        self.schedule_autoscale(autoscale, now_ms);
        self.pending_redraw = true;
    }

    fn apply_scroll(&mut self, speed: f64) {
        debug!("control: scroll speed={speed}");
        self.speed = speed;
        if speed > 0.0 {
            self.start_scroll();
        } else {
            self.stop_scroll();
        }
    }

    fn apply_set_font(&mut self, font: Option<String>) {
        match font {
            Some(family) => {
                debug!("control: set_font family={family}");
                self.font_family = family;
            }
            None => debug!(
                "control: set_font without a family; keeping `{}`",
                self.font_family
            ),
        }
        self.surface.set_font_stack(&font_stack(&self.font_family));
        self.pending_redraw = true;
    }

    fn apply_set_font_size(&mut self, size: Option<u32>) {
        let size = size
            .unwrap_or(self.font_size_px)
            .max(self.config.min_font_size_px);
        debug!("control: set_font_size size={size}");
        self.font_size_px = size;
        self.surface.apply_font_size(size);
        // Content height changed, so the scroll bound did too.
        self.settle_position();
    }
}

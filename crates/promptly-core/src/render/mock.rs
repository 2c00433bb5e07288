use super::{ContainerTransform, ContentTransform, RenderSurface};
use crate::script::Paragraph;

/// Headless surface with fixed per-block metrics.
///
/// Every paragraph renders as one block of height
/// `font_size_px * line_factor`, so content height is a pure function of
/// block count and font size. Good enough for state-machine tests and
/// transportless bring-up; the recorded fields let tests observe exactly what
/// the core asked the surface to do.
#[derive(Clone, Debug)]
pub struct FixedMetricsSurface {
    viewport_height: f64,
    line_factor: f64,
    paragraph_count: usize,
    font_size_px: u32,
    pub font_stack: String,
    pub uppercase: bool,
    pub container: ContainerTransform,
    pub content: ContentTransform,
    pub rebuild_count: u32,
    pub restyle_count: u32,
}

impl FixedMetricsSurface {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            line_factor: 1.5,
            paragraph_count: 0,
            font_size_px: 0,
            font_stack: String::new(),
            uppercase: false,
            container: ContainerTransform::default(),
            content: ContentTransform::default(),
            rebuild_count: 0,
            restyle_count: 0,
        }
    }

    /// Override the block-height multiplier (defaults to 1.5 lines per
    /// paragraph).
    pub fn with_line_factor(mut self, line_factor: f64) -> Self {
        self.line_factor = line_factor;
        self
    }
}

impl RenderSurface for FixedMetricsSurface {
    fn rebuild(&mut self, paragraphs: &[Paragraph], font_size_px: u32) {
        self.paragraph_count = paragraphs.len();
        self.font_size_px = font_size_px;
        self.rebuild_count += 1;
    }

    fn apply_font_size(&mut self, font_size_px: u32) {
        self.font_size_px = font_size_px;
        self.restyle_count += 1;
    }

    fn set_font_stack(&mut self, stack: &str) {
        self.font_stack = stack.to_owned();
    }

    fn set_uppercase(&mut self, enabled: bool) {
        self.uppercase = enabled;
    }

    fn apply_view(&mut self, container: ContainerTransform, content: ContentTransform) {
        self.container = container;
        self.content = content;
    }

    fn content_height(&self) -> f64 {
        self.paragraph_count as f64 * f64::from(self.font_size_px) * self.line_factor
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

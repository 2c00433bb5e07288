//! Text model: the ordered paragraph blocks currently loaded.

use serde::Deserialize;

/// One display block. Immutable once loaded; insertion order is display order.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The script currently on screen. Purely data; replaced wholesale on `load`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Script {
    paragraphs: Vec<Paragraph>,
}

impl Script {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Swap in a freshly delivered script, dropping every prior block.
    pub fn replace(&mut self, paragraphs: Vec<Paragraph>) {
        self.paragraphs = paragraphs;
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

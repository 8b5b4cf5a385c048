//! Whole text frames: capture, apply and copy

use crate::errors::HostError;
use crate::host::{CharRange, TextContainer};

use super::range::{CharacterRangeSnapshot, ParagraphRangeSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Replace the destination text by the captured text
    pub replace_text: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        ApplyOptions { replace_text: true }
    }
}

/// Text and formatting of a text frame
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrameSnapshot {
    pub text: String,
    pub paragraphs: ParagraphRangeSnapshot,
    pub characters: CharacterRangeSnapshot,
}

impl TextFrameSnapshot {
    pub fn capture(container: &dyn TextContainer) -> Result<Self, HostError> {
        let range = container.full_range()?;
        Ok(TextFrameSnapshot {
            text: container.text()?,
            paragraphs: ParagraphRangeSnapshot::capture(container, range)?,
            characters: CharacterRangeSnapshot::capture(container, range)?,
        })
    }

    /// Re-create this snapshot on `container`.
    ///
    /// Rejected attribute writes are skipped; any other host failure aborts
    /// the apply and is returned.
    pub fn apply(&self, container: &dyn TextContainer, options: ApplyOptions) -> Result<(), HostError> {
        container.collapse_runs()?;
        if options.replace_text {
            container.set_text(&self.text)?;
        }
        let range: CharRange = container.full_range()?;
        self.paragraphs.apply(container, range)?;
        self.characters.split(container, &range)?;
        self.characters.apply(container, &range)
    }
}

/// `to` takes over text and formatting of `from`
pub fn copy(to: &dyn TextContainer, from: &dyn TextContainer) -> Result<(), HostError> {
    TextFrameSnapshot::capture(from)?.apply(to, ApplyOptions::default())
}

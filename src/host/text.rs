//! Text containers: the host side of the format snapshot model

use std::fmt;

use crate::errors::HostError;
use crate::format::{BulletAttr, FontAttr, FontSnapshot, ParagraphAttr, ParagraphFormatSnapshot, TabStop};

/// A 1-based, inclusive character range: `[start, start + length - 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub start: usize,
    pub length: usize,
}

impl CharRange {
    pub const fn new(start: usize, length: usize) -> Self {
        CharRange { start, length }
    }

    /// The whole text of a container holding `len` characters
    pub const fn whole(len: usize) -> Self {
        CharRange { start: 1, length: len }
    }

    /// One past the last character
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn contains(&self, other: &CharRange) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }

    /// Intersection with `within`, or `None` when they do not overlap
    pub fn clip(&self, within: &CharRange) -> Option<CharRange> {
        let start = self.start.max(within.start);
        let end = self.end().min(within.end());
        (end > start).then(|| CharRange::new(start, end - start))
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.length == 0 {
            write!(f, "[{}, empty]", self.start)
        } else {
            write!(f, "[{}, {}]", self.start, self.end() - 1)
        }
    }
}

/// Proofing languages offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    German,
    EnglishUs,
    EnglishUk,
}

impl LanguageId {
    pub fn from_arg(arg: &str) -> Option<LanguageId> {
        match arg {
            "de" | "de-DE" => Some(LanguageId::German),
            "en" | "en-US" => Some(LanguageId::EnglishUs),
            "en-UK" => Some(LanguageId::EnglishUk),
            _ => None,
        }
    }
}

/// Inner margins of a text frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn uniform(value: f64) -> Self {
        Margins { left: value, top: value, right: value, bottom: value }
    }
}

/// Rich text owned by a shape.
///
/// Ranges are 1-based. A run is a maximal stretch of characters sharing one
/// character format; reading the font of a range spanning several runs
/// reports `None` for every attribute the runs disagree on. Individual
/// attribute writes may fail with [`HostError::Rejected`] while the container
/// stays usable.
pub trait TextContainer {
    fn text(&self) -> Result<String, HostError>;

    /// Replace the whole text, keeping the format of the first character
    fn set_text(&self, text: &str) -> Result<(), HostError>;

    fn delete_text(&self) -> Result<(), HostError>;

    /// Append text using the format of the last character
    fn insert_after(&self, text: &str) -> Result<(), HostError>;

    /// Number of characters
    fn len(&self) -> Result<usize, HostError>;

    fn is_empty(&self) -> Result<bool, HostError> {
        Ok(self.len()? == 0)
    }

    /// Runs overlapping `range`, clipped to it, in text order
    fn runs(&self, range: CharRange) -> Result<Vec<CharRange>, HostError>;

    /// Make sure a run boundary exists right before character `offset`
    fn split_at(&self, offset: usize) -> Result<(), HostError>;

    /// Merge every run into one carrying the format of the first
    fn collapse_runs(&self) -> Result<(), HostError>;

    fn font(&self, range: CharRange) -> Result<FontSnapshot, HostError>;

    fn set_font(&self, range: CharRange, attr: &FontAttr) -> Result<(), HostError>;

    /// Ranges of the paragraphs, separators included
    fn paragraphs(&self) -> Result<Vec<CharRange>, HostError>;

    fn paragraph_format(&self, range: CharRange) -> Result<ParagraphFormatSnapshot, HostError>;

    fn set_paragraph(&self, range: CharRange, attr: &ParagraphAttr) -> Result<(), HostError>;

    fn set_bullet(&self, range: CharRange, attr: &BulletAttr) -> Result<(), HostError>;

    fn clear_tab_stops(&self, range: CharRange) -> Result<(), HostError>;

    fn add_tab_stop(&self, range: CharRange, stop: TabStop) -> Result<(), HostError>;

    fn set_language(&self, language: LanguageId) -> Result<(), HostError>;

    fn margins(&self) -> Result<Margins, HostError>;

    fn set_margins(&self, margins: Margins) -> Result<(), HostError>;

    /// Range covering the whole text
    fn full_range(&self) -> Result<CharRange, HostError> {
        Ok(CharRange::whole(self.len()?))
    }
}

//! Run trees and paragraph lists

use crate::errors::HostError;
use crate::host::{CharRange, TextContainer};

use super::font::FontSnapshot;
use super::paragraph::ParagraphFormatSnapshot;

/// Maximum nesting of captured runs
pub const MAX_RUN_DEPTH: usize = 8;

/// Character format of a range plus the runs it is made of.
///
/// The root covers the whole text and carries the attributes all runs share;
/// each child carries the full format of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRangeSnapshot {
    pub range: CharRange,
    pub font: FontSnapshot,
    pub runs: Vec<CharacterRangeSnapshot>,
}

impl CharacterRangeSnapshot {
    pub fn capture(container: &dyn TextContainer, range: CharRange) -> Result<Self, HostError> {
        Self::capture_at(container, range, 0)
    }

    fn capture_at(container: &dyn TextContainer, range: CharRange, depth: usize) -> Result<Self, HostError> {
        let font = container.font(range)?;
        let mut runs = Vec::new();
        if depth < MAX_RUN_DEPTH {
            for run in container.runs(range)? {
                // A range made of a single run reports itself
                if run != range {
                    runs.push(Self::capture_at(container, run, depth + 1)?);
                }
            }
        }
        Ok(CharacterRangeSnapshot { range, font, runs })
    }

    /// All ranges of the tree in pre-order
    pub fn ranges(&self) -> Vec<CharRange> {
        let mut out = vec![self.range];
        for run in &self.runs {
            out.extend(run.ranges());
        }
        out
    }

    /// Re-split `container` at every recorded boundary inside `within`
    pub fn split(&self, container: &dyn TextContainer, within: &CharRange) -> Result<(), HostError> {
        for range in self.ranges() {
            if let Some(clipped) = range.clip(within) {
                container.split_at(clipped.start)?;
                if clipped.end() < within.end() {
                    container.split_at(clipped.end())?;
                }
            }
        }
        Ok(())
    }

    /// Apply the root font to the whole of `within`, then each run's font
    /// to its range clipped to `within`, parents before children
    pub fn apply(&self, container: &dyn TextContainer, within: &CharRange) -> Result<(), HostError> {
        let Some(target) = self.range.clip(within).or_else(|| within.is_empty().then_some(*within)) else {
            return Ok(());
        };
        self.font.apply(container, target)?;
        for run in &self.runs {
            run.apply(container, &target)?;
        }
        Ok(())
    }
}

/// Paragraph formats of a range, one per paragraph when it has several
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphRangeSnapshot {
    pub formats: Vec<ParagraphFormatSnapshot>,
}

impl ParagraphRangeSnapshot {
    pub fn capture(container: &dyn TextContainer, range: CharRange) -> Result<Self, HostError> {
        let paragraphs = container.paragraphs()?;
        let formats = if paragraphs.len() > 1 {
            paragraphs
                .into_iter()
                .map(|p| ParagraphFormatSnapshot::capture(container, p))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            vec![ParagraphFormatSnapshot::capture(container, range)?]
        };
        Ok(ParagraphRangeSnapshot { formats })
    }

    /// With several formats, the i-th goes to the i-th paragraph (extra
    /// formats or paragraphs are left alone); a single format goes to `range`
    pub fn apply(&self, container: &dyn TextContainer, range: CharRange) -> Result<(), HostError> {
        match self.formats.as_slice() {
            [] => Ok(()),
            [only] => only.apply(container, range),
            formats => {
                for (format, paragraph) in formats.iter().zip(container.paragraphs()?) {
                    format.apply(container, paragraph)?;
                }
                Ok(())
            }
        }
    }
}

//! Format snapshots
//!
//! A snapshot is a plain value capturing part of the formatting of a text
//! container: fonts, bullets, paragraph formats, tab stops, and the run tree
//! that ties character formats to ranges. Snapshots are captured from one
//! container and applied to another (or the same) one, whatever the text
//! lengths involved.
//!
//! Applying is best effort per attribute: a write the host rejects is logged
//! and skipped, everything else is still written.

pub mod bullet;
pub mod color;
pub mod font;
pub mod frame;
pub mod paragraph;
pub mod range;

pub use bullet::{BulletAttr, BulletFlags, BulletFont, BulletSnapshot, BulletType, NumberedStyle};
pub use color::{ColorFormat, Rgb, ThemeColorIndex};
pub use font::{Caps, FontAttr, FontSnapshot, Strike, Underline};
pub use frame::{ApplyOptions, TextFrameSnapshot, copy};
pub use paragraph::{
    Alignment, BaselineAlignment, ParagraphAttr, ParagraphFormatSnapshot, TabStop, TabStopKind, TabStopsSnapshot,
};
pub use range::{CharacterRangeSnapshot, MAX_RUN_DEPTH, ParagraphRangeSnapshot};

use crate::errors::HostError;
use crate::log::debug;

/// Swallow a rejected write of `property`; other failures pass through
pub(crate) fn best_effort(property: &'static str, result: Result<(), HostError>) -> Result<(), HostError> {
    match result {
        Err(err) if err.is_recoverable() => {
            debug!("skipping {}: {}", property, err);
            Ok(())
        }
        other => other,
    }
}

//! Character formatting

use crate::errors::HostError;
use crate::host::{CharRange, TextContainer};

use super::best_effort;
use super::color::ColorFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strike {
    None,
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Underline {
    None,
    Single,
    Double,
    Heavy,
    Dotted,
    Dash,
    Wavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Caps {
    None,
    Small,
    All,
}

/// Character format of a range.
///
/// `None` means "not uniform over the range" when read, and "leave alone"
/// when applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSnapshot {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub strike: Option<Strike>,
    pub underline: Option<Underline>,
    pub caps: Option<Caps>,
    pub subscript: Option<bool>,
    pub superscript: Option<bool>,
    pub fill: Option<ColorFormat>,
    pub highlight: Option<ColorFormat>,
    pub name: Option<String>,
    pub size: Option<f64>,
    pub kerning: Option<f64>,
    pub spacing: Option<f64>,
    /// Preset WordArt effect number
    pub word_art: Option<u32>,
}

/// A single character-format write
#[derive(Debug, Clone, PartialEq)]
pub enum FontAttr {
    Bold(bool),
    Italic(bool),
    Strike(Strike),
    Underline(Underline),
    Caps(Caps),
    Subscript(bool),
    Superscript(bool),
    Fill(ColorFormat),
    Highlight(ColorFormat),
    Name(String),
    Size(f64),
    Kerning(f64),
    Spacing(f64),
    WordArt(u32),
}

impl FontAttr {
    /// Property name used in host errors and logs
    pub fn property(&self) -> &'static str {
        match self {
            FontAttr::Bold(_) => "Font.Bold",
            FontAttr::Italic(_) => "Font.Italic",
            FontAttr::Strike(_) => "Font.Strike",
            FontAttr::Underline(_) => "Font.UnderlineStyle",
            FontAttr::Caps(_) => "Font.Caps",
            FontAttr::Subscript(_) => "Font.Subscript",
            FontAttr::Superscript(_) => "Font.Superscript",
            FontAttr::Fill(_) => "Font.Fill",
            FontAttr::Highlight(_) => "Font.Highlight",
            FontAttr::Name(_) => "Font.Name",
            FontAttr::Size(_) => "Font.Size",
            FontAttr::Kerning(_) => "Font.Kerning",
            FontAttr::Spacing(_) => "Font.Spacing",
            FontAttr::WordArt(_) => "Font.WordArtFormat",
        }
    }
}

fn same<T: PartialEq + Clone>(a: &Option<T>, b: &Option<T>) -> Option<T> {
    if a == b { a.clone() } else { None }
}

impl FontSnapshot {
    pub fn capture(container: &dyn TextContainer, range: CharRange) -> Result<Self, HostError> {
        container.font(range)
    }

    /// Attributes both snapshots agree on
    pub fn merge(&self, other: &FontSnapshot) -> FontSnapshot {
        FontSnapshot {
            bold: same(&self.bold, &other.bold),
            italic: same(&self.italic, &other.italic),
            strike: same(&self.strike, &other.strike),
            underline: same(&self.underline, &other.underline),
            caps: same(&self.caps, &other.caps),
            subscript: same(&self.subscript, &other.subscript),
            superscript: same(&self.superscript, &other.superscript),
            fill: same(&self.fill, &other.fill),
            highlight: same(&self.highlight, &other.highlight),
            name: same(&self.name, &other.name),
            size: same(&self.size, &other.size),
            kerning: same(&self.kerning, &other.kerning),
            spacing: same(&self.spacing, &other.spacing),
            word_art: same(&self.word_art, &other.word_art),
        }
    }

    /// The writes that reproduce this snapshot
    pub fn attrs(&self) -> Vec<FontAttr> {
        let mut attrs = Vec::new();
        attrs.extend(self.bold.map(FontAttr::Bold));
        attrs.extend(self.italic.map(FontAttr::Italic));
        attrs.extend(self.strike.map(FontAttr::Strike));
        attrs.extend(self.underline.map(FontAttr::Underline));
        attrs.extend(self.caps.map(FontAttr::Caps));
        attrs.extend(self.subscript.map(FontAttr::Subscript));
        attrs.extend(self.superscript.map(FontAttr::Superscript));
        attrs.extend(self.fill.map(FontAttr::Fill));
        attrs.extend(self.highlight.map(FontAttr::Highlight));
        attrs.extend(self.name.clone().map(FontAttr::Name));
        attrs.extend(self.size.map(FontAttr::Size));
        attrs.extend(self.kerning.map(FontAttr::Kerning));
        attrs.extend(self.spacing.map(FontAttr::Spacing));
        attrs.extend(self.word_art.map(FontAttr::WordArt));
        attrs
    }

    /// Record a write in this snapshot
    pub fn set(&mut self, attr: &FontAttr) {
        match attr {
            FontAttr::Bold(v) => self.bold = Some(*v),
            FontAttr::Italic(v) => self.italic = Some(*v),
            FontAttr::Strike(v) => self.strike = Some(*v),
            FontAttr::Underline(v) => self.underline = Some(*v),
            FontAttr::Caps(v) => self.caps = Some(*v),
            FontAttr::Subscript(v) => self.subscript = Some(*v),
            FontAttr::Superscript(v) => self.superscript = Some(*v),
            FontAttr::Fill(v) => self.fill = Some(*v),
            FontAttr::Highlight(v) => self.highlight = Some(*v),
            FontAttr::Name(v) => self.name = Some(v.clone()),
            FontAttr::Size(v) => self.size = Some(*v),
            FontAttr::Kerning(v) => self.kerning = Some(*v),
            FontAttr::Spacing(v) => self.spacing = Some(*v),
            FontAttr::WordArt(v) => self.word_art = Some(*v),
        }
    }

    /// Write every recorded attribute to `range`, skipping rejected ones
    pub fn apply(&self, container: &dyn TextContainer, range: CharRange) -> Result<(), HostError> {
        for attr in self.attrs() {
            best_effort(attr.property(), container.set_font(range, &attr))?;
        }
        Ok(())
    }
}

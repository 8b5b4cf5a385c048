//! Paragraph formatting and tab stops

use crate::errors::HostError;
use crate::host::{CharRange, TextContainer};

use super::best_effort;
use super::bullet::BulletSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
    Distribute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineAlignment {
    Auto,
    Baseline,
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabStopKind {
    Left,
    Center,
    Right,
    Decimal,
    /// Reported for ranges whose paragraphs disagree; never written
    Mixed,
}

impl TabStopKind {
    pub fn is_valid(self) -> bool {
        !matches!(self, TabStopKind::Mixed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStop {
    pub position: f64,
    pub kind: TabStopKind,
}

impl TabStop {
    pub fn new(position: f64, kind: TabStopKind) -> Self {
        TabStop { position, kind }
    }
}

/// Ordered tab stops of a paragraph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabStopsSnapshot {
    pub stops: Vec<TabStop>,
}

impl TabStopsSnapshot {
    /// Replace the tab stops of `range`, dropping stops of an invalid kind
    pub fn apply(&self, container: &dyn TextContainer, range: CharRange) -> Result<(), HostError> {
        best_effort("TabStops.Clear", container.clear_tab_stops(range))?;
        for stop in self.stops.iter().filter(|s| s.kind.is_valid()) {
            best_effort("TabStops.Add", container.add_tab_stop(range, *stop))?;
        }
        Ok(())
    }
}

/// A single paragraph-format write; bullets and tabs have their own calls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParagraphAttr {
    Alignment(Alignment),
    BaselineAlignment(BaselineAlignment),
    FirstLineIndent(f64),
    LeftIndent(f64),
    IndentLevel(u32),
    HangingPunctuation(bool),
}

impl ParagraphAttr {
    pub fn property(&self) -> &'static str {
        match self {
            ParagraphAttr::Alignment(_) => "ParagraphFormat.Alignment",
            ParagraphAttr::BaselineAlignment(_) => "ParagraphFormat.BaselineAlignment",
            ParagraphAttr::FirstLineIndent(_) => "ParagraphFormat.FirstLineIndent",
            ParagraphAttr::LeftIndent(_) => "ParagraphFormat.LeftIndent",
            ParagraphAttr::IndentLevel(_) => "ParagraphFormat.IndentLevel",
            ParagraphAttr::HangingPunctuation(_) => "ParagraphFormat.HangingPunctuation",
        }
    }
}

/// Paragraph format of a range; `None` fields are mixed or unknown
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphFormatSnapshot {
    pub alignment: Option<Alignment>,
    pub baseline_alignment: Option<BaselineAlignment>,
    pub bullet: Option<BulletSnapshot>,
    pub first_line_indent: Option<f64>,
    pub left_indent: Option<f64>,
    pub indent_level: Option<u32>,
    pub hanging_punctuation: Option<bool>,
    pub tab_stops: Option<TabStopsSnapshot>,
}

impl ParagraphFormatSnapshot {
    pub fn capture(container: &dyn TextContainer, range: CharRange) -> Result<Self, HostError> {
        container.paragraph_format(range)
    }

    /// Fields both formats agree on
    pub fn merge(&self, other: &ParagraphFormatSnapshot) -> ParagraphFormatSnapshot {
        fn same<T: PartialEq + Clone>(a: &Option<T>, b: &Option<T>) -> Option<T> {
            if a == b { a.clone() } else { None }
        }
        ParagraphFormatSnapshot {
            alignment: same(&self.alignment, &other.alignment),
            baseline_alignment: same(&self.baseline_alignment, &other.baseline_alignment),
            bullet: same(&self.bullet, &other.bullet),
            first_line_indent: same(&self.first_line_indent, &other.first_line_indent),
            left_indent: same(&self.left_indent, &other.left_indent),
            indent_level: same(&self.indent_level, &other.indent_level),
            hanging_punctuation: same(&self.hanging_punctuation, &other.hanging_punctuation),
            tab_stops: same(&self.tab_stops, &other.tab_stops),
        }
    }

    pub fn attrs(&self) -> Vec<ParagraphAttr> {
        let mut attrs = Vec::new();
        attrs.extend(self.alignment.map(ParagraphAttr::Alignment));
        attrs.extend(self.baseline_alignment.map(ParagraphAttr::BaselineAlignment));
        attrs.extend(self.first_line_indent.map(ParagraphAttr::FirstLineIndent));
        attrs.extend(self.indent_level.map(ParagraphAttr::IndentLevel));
        attrs.extend(self.left_indent.map(ParagraphAttr::LeftIndent));
        attrs.extend(self.hanging_punctuation.map(ParagraphAttr::HangingPunctuation));
        attrs
    }

    pub fn set(&mut self, attr: &ParagraphAttr) {
        match *attr {
            ParagraphAttr::Alignment(v) => self.alignment = Some(v),
            ParagraphAttr::BaselineAlignment(v) => self.baseline_alignment = Some(v),
            ParagraphAttr::FirstLineIndent(v) => self.first_line_indent = Some(v),
            ParagraphAttr::LeftIndent(v) => self.left_indent = Some(v),
            ParagraphAttr::IndentLevel(v) => self.indent_level = Some(v),
            ParagraphAttr::HangingPunctuation(v) => self.hanging_punctuation = Some(v),
        }
    }

    pub fn apply(&self, container: &dyn TextContainer, range: CharRange) -> Result<(), HostError> {
        for attr in self.attrs() {
            best_effort(attr.property(), container.set_paragraph(range, &attr))?;
        }
        if let Some(bullet) = &self.bullet {
            bullet.apply(container, range)?;
        }
        if let Some(tabs) = &self.tab_stops {
            tabs.apply(container, range)?;
        }
        Ok(())
    }
}

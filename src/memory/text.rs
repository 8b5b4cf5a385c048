//! In-memory text frames with real run and paragraph structure

use std::cell::RefCell;

use crate::errors::HostError;
use crate::format::{
    Alignment, BaselineAlignment, BulletAttr, BulletFlags, BulletFont, BulletSnapshot, BulletType, Caps,
    ColorFormat, FontAttr, FontSnapshot, NumberedStyle, ParagraphAttr, ParagraphFormatSnapshot, Rgb, Strike,
    TabStop, TabStopsSnapshot, Underline,
};
use crate::host::{CharRange, LanguageId, Margins, TextContainer};

/// Paragraph separator
pub const PARAGRAPH_MARK: char = '\r';

/// Format of freshly created text
pub fn default_font() -> FontSnapshot {
    FontSnapshot {
        bold: Some(false),
        italic: Some(false),
        strike: Some(Strike::None),
        underline: Some(Underline::None),
        caps: Some(Caps::None),
        subscript: Some(false),
        superscript: Some(false),
        fill: Some(ColorFormat::Rgb(Rgb::BLACK)),
        highlight: None,
        name: Some("Calibri".to_string()),
        size: Some(18.0),
        kerning: Some(0.0),
        spacing: Some(0.0),
        word_art: None,
    }
}

pub fn default_paragraph() -> ParagraphFormatSnapshot {
    ParagraphFormatSnapshot {
        alignment: Some(Alignment::Left),
        baseline_alignment: Some(BaselineAlignment::Auto),
        bullet: Some(BulletSnapshot::None),
        first_line_indent: Some(0.0),
        left_indent: Some(0.0),
        indent_level: Some(1),
        hanging_punctuation: Some(false),
        tab_stops: Some(TabStopsSnapshot::default()),
    }
}

/// `base` with every attribute recorded in `top` written over it
fn overlay(base: &FontSnapshot, top: &FontSnapshot) -> FontSnapshot {
    let mut font = base.clone();
    for attr in top.attrs() {
        font.set(&attr);
    }
    font
}

#[derive(Debug, Clone)]
struct Run {
    len: usize,
    font: FontSnapshot,
}

#[derive(Debug)]
struct TextState {
    chars: Vec<char>,
    /// Never empty; lengths add up to `chars.len()`
    runs: Vec<Run>,
    /// One entry per paragraph
    paragraphs: Vec<ParagraphFormatSnapshot>,
    language: Option<LanguageId>,
    margins: Margins,
}

fn spans(lengths: impl Iterator<Item = usize>) -> Vec<CharRange> {
    let mut start = 1;
    lengths
        .map(|len| {
            let span = CharRange::new(start, len);
            start += len;
            span
        })
        .collect()
}

/// Index of the span holding character `offset`, or the last one
fn span_at(spans: &[CharRange], offset: usize) -> usize {
    spans
        .iter()
        .position(|s| s.start <= offset && offset < s.end())
        .unwrap_or(spans.len().saturating_sub(1))
}

impl TextState {
    fn new(chars: Vec<char>, runs: Vec<Run>) -> Self {
        let mut state = TextState {
            chars,
            runs,
            paragraphs: Vec::new(),
            language: None,
            margins: Margins::uniform(7.2),
        };
        state.sync_paragraphs();
        state.coalesce();
        state
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn run_spans(&self) -> Vec<CharRange> {
        spans(self.runs.iter().map(|r| r.len))
    }

    fn paragraph_spans(&self) -> Vec<CharRange> {
        let mut lengths = Vec::new();
        let mut current = 0;
        for &c in &self.chars {
            current += 1;
            if c == PARAGRAPH_MARK {
                lengths.push(current);
                current = 0;
            }
        }
        lengths.push(current);
        spans(lengths.into_iter())
    }

    fn sync_paragraphs(&mut self) {
        let count = self.paragraph_spans().len();
        let fill = self.paragraphs.last().cloned().unwrap_or_else(default_paragraph);
        self.paragraphs.resize(count, fill);
    }

    /// Start a new run at character `offset`
    fn split(&mut self, offset: usize) {
        let spans = self.run_spans();
        if let Some(i) = spans.iter().position(|s| s.start < offset && offset < s.end()) {
            let head = offset - spans[i].start;
            let tail = Run { len: self.runs[i].len - head, font: self.runs[i].font.clone() };
            self.runs[i].len = head;
            self.runs.insert(i + 1, tail);
        }
    }

    /// Merge neighbouring runs with equal formats and drop empty ones
    fn coalesce(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(last) if last.font == run.font || run.len == 0 => last.len += run.len,
                Some(last) if last.len == 0 => *last = run,
                _ => merged.push(run),
            }
        }
        if merged.is_empty() {
            merged.push(Run { len: 0, font: default_font() });
        }
        self.runs = merged;
    }

    fn run_indices(&self, range: CharRange) -> Vec<usize> {
        let spans = self.run_spans();
        if range.is_empty() {
            return vec![span_at(&spans, range.start)];
        }
        spans.iter().enumerate().filter(|(_, s)| s.clip(&range).is_some()).map(|(i, _)| i).collect()
    }

    fn paragraph_indices(&self, range: CharRange) -> Vec<usize> {
        let spans = self.paragraph_spans();
        if range.is_empty() {
            return vec![span_at(&spans, range.start)];
        }
        spans
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                p.clip(&range).is_some() || (p.is_empty() && p.start >= range.start && p.start < range.end())
            })
            .map(|(i, _)| i)
            .collect()
    }

    fn replace_text(&mut self, text: &str) {
        let font = self.runs[0].font.clone();
        self.chars = text.chars().collect();
        self.runs = vec![Run { len: self.chars.len(), font }];
        self.sync_paragraphs();
    }
}

fn update_bullet(bullet: &mut Option<BulletSnapshot>, attr: &BulletAttr) {
    let current = bullet.get_or_insert(BulletSnapshot::None);
    match (attr, current) {
        (BulletAttr::Type(kind), current) => {
            if current.bullet_type() != *kind {
                *current = match kind {
                    BulletType::None => BulletSnapshot::None,
                    BulletType::Unnumbered => BulletSnapshot::Unnumbered {
                        character: 0x2022,
                        relative_size: 1.0,
                        font: BulletFont::default(),
                        flags: BulletFlags::default(),
                    },
                    BulletType::Numbered => BulletSnapshot::Numbered {
                        start_value: 1,
                        style: NumberedStyle::ArabicPeriod,
                        relative_size: 1.0,
                        font: BulletFont::default(),
                        flags: BulletFlags::default(),
                    },
                };
            }
        }
        (BulletAttr::Character(value), BulletSnapshot::Unnumbered { character, .. }) => *character = *value,
        (BulletAttr::StartValue(value), BulletSnapshot::Numbered { start_value, .. }) => *start_value = *value,
        (BulletAttr::Style(value), BulletSnapshot::Numbered { style, .. }) => *style = *value,
        (
            BulletAttr::RelativeSize(value),
            BulletSnapshot::Unnumbered { relative_size, .. } | BulletSnapshot::Numbered { relative_size, .. },
        ) => *relative_size = *value,
        (
            BulletAttr::FontName(value),
            BulletSnapshot::Unnumbered { font, .. } | BulletSnapshot::Numbered { font, .. },
        ) => font.name = Some(value.clone()),
        (
            BulletAttr::FontSize(value),
            BulletSnapshot::Unnumbered { font, .. } | BulletSnapshot::Numbered { font, .. },
        ) => font.size = Some(*value),
        (
            BulletAttr::UseTextColor(value),
            BulletSnapshot::Unnumbered { flags, .. } | BulletSnapshot::Numbered { flags, .. },
        ) => flags.use_text_color = *value,
        (
            BulletAttr::UseTextFont(value),
            BulletSnapshot::Unnumbered { flags, .. } | BulletSnapshot::Numbered { flags, .. },
        ) => flags.use_text_font = *value,
        // Fields that do not exist on the current kind are ignored
        _ => {}
    }
}

/// A text frame living in memory.
///
/// Property names passed to [`MemoryText::reject`] make the matching writes
/// fail with [`HostError::Rejected`], the way a host refuses writes to
/// locked or inapplicable properties.
#[derive(Debug)]
pub struct MemoryText {
    state: RefCell<TextState>,
    rejected: RefCell<Vec<&'static str>>,
    bullet_writes: RefCell<Vec<BulletAttr>>,
}

impl Default for MemoryText {
    fn default() -> Self {
        MemoryText::new("")
    }
}

impl MemoryText {
    /// Text in the default format
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let run = Run { len: chars.len(), font: default_font() };
        Self::from_state(TextState::new(chars, vec![run]))
    }

    /// Text made of runs; each font is written over the default format
    pub fn from_runs(runs: &[(&str, FontSnapshot)]) -> Self {
        let base = default_font();
        let mut chars = Vec::new();
        let mut stored = Vec::new();
        for (text, font) in runs {
            let len = text.chars().count();
            chars.extend(text.chars());
            stored.push(Run { len, font: overlay(&base, font) });
        }
        if stored.is_empty() {
            stored.push(Run { len: 0, font: base });
        }
        Self::from_state(TextState::new(chars, stored))
    }

    fn from_state(state: TextState) -> Self {
        MemoryText {
            state: RefCell::new(state),
            rejected: RefCell::new(Vec::new()),
            bullet_writes: RefCell::new(Vec::new()),
        }
    }

    /// Refuse every future write of `property`
    pub fn reject(&self, property: &'static str) {
        self.rejected.borrow_mut().push(property);
    }

    /// Every bullet write received so far
    pub fn bullet_writes(&self) -> Vec<BulletAttr> {
        self.bullet_writes.borrow().clone()
    }

    /// Text and full format of every run
    pub fn font_runs(&self) -> Vec<(String, FontSnapshot)> {
        let state = self.state.borrow();
        state
            .run_spans()
            .into_iter()
            .zip(&state.runs)
            .map(|(span, run)| {
                let text = state.chars[span.start - 1..span.end() - 1].iter().collect();
                (text, run.font.clone())
            })
            .collect()
    }

    pub fn set_paragraph_format(&self, index: usize, format: ParagraphFormatSnapshot) {
        if let Some(slot) = self.state.borrow_mut().paragraphs.get_mut(index) {
            *slot = format;
        }
    }

    pub fn language(&self) -> Option<LanguageId> {
        self.state.borrow().language
    }

    fn check(&self, property: &'static str) -> Result<(), HostError> {
        if self.rejected.borrow().contains(&property) {
            Err(HostError::rejected(property, "write refused"))
        } else {
            Ok(())
        }
    }
}

impl TextContainer for MemoryText {
    fn text(&self) -> Result<String, HostError> {
        Ok(self.state.borrow().chars.iter().collect())
    }

    fn set_text(&self, text: &str) -> Result<(), HostError> {
        self.check("TextRange.Text")?;
        self.state.borrow_mut().replace_text(text);
        Ok(())
    }

    fn delete_text(&self) -> Result<(), HostError> {
        self.set_text("")
    }

    fn insert_after(&self, text: &str) -> Result<(), HostError> {
        self.check("TextRange.Text")?;
        let mut state = self.state.borrow_mut();
        let added = text.chars().count();
        state.chars.extend(text.chars());
        if let Some(last) = state.runs.last_mut() {
            last.len += added;
        }
        state.sync_paragraphs();
        Ok(())
    }

    fn len(&self) -> Result<usize, HostError> {
        Ok(self.state.borrow().len())
    }

    fn runs(&self, range: CharRange) -> Result<Vec<CharRange>, HostError> {
        Ok(self.state.borrow().run_spans().iter().filter_map(|s| s.clip(&range)).collect())
    }

    fn split_at(&self, offset: usize) -> Result<(), HostError> {
        self.state.borrow_mut().split(offset);
        Ok(())
    }

    fn collapse_runs(&self) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        let run = Run { len: state.len(), font: state.runs[0].font.clone() };
        state.runs = vec![run];
        Ok(())
    }

    fn font(&self, range: CharRange) -> Result<FontSnapshot, HostError> {
        let state = self.state.borrow();
        let merged = state
            .run_indices(range)
            .into_iter()
            .map(|i| state.runs[i].font.clone())
            .reduce(|a, b| a.merge(&b));
        Ok(merged.unwrap_or_default())
    }

    fn set_font(&self, range: CharRange, attr: &FontAttr) -> Result<(), HostError> {
        self.check(attr.property())?;
        let mut state = self.state.borrow_mut();
        state.split(range.start);
        state.split(range.end());
        for i in state.run_indices(range) {
            state.runs[i].font.set(attr);
        }
        state.coalesce();
        Ok(())
    }

    fn paragraphs(&self) -> Result<Vec<CharRange>, HostError> {
        Ok(self.state.borrow().paragraph_spans())
    }

    fn paragraph_format(&self, range: CharRange) -> Result<ParagraphFormatSnapshot, HostError> {
        let state = self.state.borrow();
        let merged = state
            .paragraph_indices(range)
            .into_iter()
            .map(|i| state.paragraphs[i].clone())
            .reduce(|a, b| a.merge(&b));
        Ok(merged.unwrap_or_default())
    }

    fn set_paragraph(&self, range: CharRange, attr: &ParagraphAttr) -> Result<(), HostError> {
        self.check(attr.property())?;
        let mut state = self.state.borrow_mut();
        for i in state.paragraph_indices(range) {
            state.paragraphs[i].set(attr);
        }
        Ok(())
    }

    fn set_bullet(&self, range: CharRange, attr: &BulletAttr) -> Result<(), HostError> {
        self.check(attr.property())?;
        self.bullet_writes.borrow_mut().push(attr.clone());
        let mut state = self.state.borrow_mut();
        for i in state.paragraph_indices(range) {
            update_bullet(&mut state.paragraphs[i].bullet, attr);
        }
        Ok(())
    }

    fn clear_tab_stops(&self, range: CharRange) -> Result<(), HostError> {
        self.check("TabStops.Clear")?;
        let mut state = self.state.borrow_mut();
        for i in state.paragraph_indices(range) {
            state.paragraphs[i].tab_stops = Some(TabStopsSnapshot::default());
        }
        Ok(())
    }

    fn add_tab_stop(&self, range: CharRange, stop: TabStop) -> Result<(), HostError> {
        self.check("TabStops.Add")?;
        let mut state = self.state.borrow_mut();
        for i in state.paragraph_indices(range) {
            let tabs = state.paragraphs[i].tab_stops.get_or_insert_with(TabStopsSnapshot::default);
            tabs.stops.push(stop);
            tabs.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        }
        Ok(())
    }

    fn set_language(&self, language: LanguageId) -> Result<(), HostError> {
        self.check("TextRange.LanguageID")?;
        self.state.borrow_mut().language = Some(language);
        Ok(())
    }

    fn margins(&self) -> Result<Margins, HostError> {
        Ok(self.state.borrow().margins)
    }

    fn set_margins(&self, margins: Margins) -> Result<(), HostError> {
        self.check("TextFrame.Margins")?;
        self.state.borrow_mut().margins = margins;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> FontSnapshot {
        FontSnapshot { bold: Some(true), ..Default::default() }
    }

    #[test]
    fn set_font_splits_and_coalesces() {
        let text = MemoryText::new("Hello world");
        text.set_font(CharRange::new(7, 5), &FontAttr::Bold(true)).unwrap();
        assert_eq!(text.runs(CharRange::whole(11)).unwrap(), vec![CharRange::new(1, 6), CharRange::new(7, 5)]);
        text.set_font(CharRange::whole(11), &FontAttr::Bold(true)).unwrap();
        assert_eq!(text.runs(CharRange::whole(11)).unwrap(), vec![CharRange::whole(11)]);
    }

    #[test]
    fn mixed_reads_are_none() {
        let text = MemoryText::from_runs(&[("ab", bold()), ("cd", FontSnapshot::default())]);
        let font = text.font(CharRange::whole(4)).unwrap();
        assert_eq!(font.bold, None);
        assert_eq!(font.name.as_deref(), Some("Calibri"));
        assert_eq!(text.font(CharRange::new(1, 2)).unwrap().bold, Some(true));
    }

    #[test]
    fn paragraphs_split_on_marks() {
        let text = MemoryText::new("one\rtwo\r");
        assert_eq!(
            text.paragraphs().unwrap(),
            vec![CharRange::new(1, 4), CharRange::new(5, 4), CharRange::new(9, 0)]
        );
        assert_eq!(MemoryText::new("").paragraphs().unwrap(), vec![CharRange::new(1, 0)]);
    }

    #[test]
    fn set_text_keeps_first_format() {
        let text = MemoryText::from_runs(&[("ab", bold()), ("cd", FontSnapshot::default())]);
        text.set_text("xyz").unwrap();
        let runs = text.font_runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].0, "xyz");
        assert_eq!(runs[0].1.bold, Some(true));
    }

    #[test]
    fn rejected_properties_fail() {
        let text = MemoryText::new("abc");
        text.reject("ParagraphFormat.LeftIndent");
        let err = text.set_paragraph(CharRange::whole(3), &ParagraphAttr::LeftIndent(4.0)).unwrap_err();
        assert!(err.is_recoverable());
        assert!(text.set_paragraph(CharRange::whole(3), &ParagraphAttr::IndentLevel(2)).is_ok());
    }

    #[test]
    fn bullet_type_switch_resets_fields() {
        let text = MemoryText::new("item");
        text.set_bullet(CharRange::whole(4), &BulletAttr::Type(BulletType::Numbered)).unwrap();
        text.set_bullet(CharRange::whole(4), &BulletAttr::Character(0x25cf)).unwrap();
        let format = text.paragraph_format(CharRange::whole(4)).unwrap();
        assert!(matches!(format.bullet, Some(BulletSnapshot::Numbered { start_value: 1, .. })));
    }
}

//! Text actions: swapping, clearing, proofing language and inner margins

use crate::errors::{DispatchError, HostError};
use crate::format::{self, ApplyOptions, TextFrameSnapshot};
use crate::host::{Host, LanguageId, Margins, TextRef};
use crate::log::debug;
use crate::settings::LayoutSettings;

use super::Action;

fn selected_texts(host: &dyn Host) -> Result<Vec<TextRef>, HostError> {
    Ok(host.selected_shapes()?.iter().filter_map(|s| s.text()).collect())
}

/// Rotates text and formatting through the selection; the last shape's
/// content ends up in the first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapTextAction;

impl Action for SwapTextAction {
    fn id(&self) -> &'static str {
        "swap_text"
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(host.selected_text_shapes()?.len() >= 2)
    }

    fn run(&self, host: &dyn Host, _arg: &str) -> Result<bool, DispatchError> {
        let texts = selected_texts(host)?;
        let Some(last) = texts.last() else {
            return Ok(false);
        };
        if texts.len() < 2 {
            return Ok(false);
        }
        debug!("rotating text through {} shapes", texts.len());

        let snapshot = TextFrameSnapshot::capture(&**last)?;
        for i in (1..texts.len()).rev() {
            format::copy(&*texts[i], &*texts[i - 1])?;
        }
        snapshot.apply(&*texts[0], ApplyOptions::default())?;
        Ok(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTextAction;

impl Action for ClearTextAction {
    fn id(&self) -> &'static str {
        "clear_text"
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(!host.selected_text_shapes()?.is_empty())
    }

    fn run(&self, host: &dyn Host, _arg: &str) -> Result<bool, DispatchError> {
        let texts = selected_texts(host)?;
        debug!("clearing {} text frames", texts.len());
        for text in &texts {
            text.delete_text()?;
        }
        Ok(false)
    }
}

/// `change_language:<de|de-DE|en|en-UK|en-US>`.
///
/// Without a selection the language goes to every text shape of the active
/// slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeLanguageAction;

impl Action for ChangeLanguageAction {
    fn id(&self) -> &'static str {
        "change_language"
    }

    fn is_enabled(&self, host: &dyn Host, arg: &str) -> Result<bool, HostError> {
        if LanguageId::from_arg(arg).is_none() {
            return Ok(false);
        }
        Ok(!host.selected_text_shapes()?.is_empty() || host.active_slide()?.is_some())
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        let Some(language) = LanguageId::from_arg(arg) else {
            return Ok(false);
        };
        let mut texts = selected_texts(host)?;
        if texts.is_empty() {
            if let Some(slide) = host.active_slide()? {
                texts = slide.shapes()?.iter().filter_map(|s| s.text()).collect();
            }
        }
        debug!("setting {:?} on {} text frames", language, texts.len());
        for text in &texts {
            text.set_language(language)?;
        }
        Ok(false)
    }
}

/// `text_margin:<none|small|normal|large>`: uniform inner margins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMarginAction;

impl Action for TextMarginAction {
    fn id(&self) -> &'static str {
        "text_margin"
    }

    fn is_enabled(&self, host: &dyn Host, arg: &str) -> Result<bool, HostError> {
        let settings = LayoutSettings::load(host.settings());
        Ok(settings.default_length(arg).is_some() && !host.selected_text_shapes()?.is_empty())
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        let Some(length) = LayoutSettings::load(host.settings()).default_length(arg) else {
            return Ok(false);
        };
        let texts = selected_texts(host)?;
        debug!("{} margins ({}) on {} text frames", arg, length, texts.len());
        for text in &texts {
            text.set_margins(Margins::uniform(length))?;
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FontSnapshot;
    use crate::host::{AutoShapeType, TextContainer};
    use crate::memory::{MemoryHost, MemoryText};
    use crate::settings::{DEFAULT_SMALL_LENGTH, Settings};
    use crate::types::Rect;

    fn text_host(contents: &[&str]) -> MemoryHost {
        let host = MemoryHost::new();
        let slide = host.slide();
        let shapes: Vec<_> = contents
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let rect = Rect::new(i as f64 * 50.0, 0.0, 40.0, 20.0);
                slide.add_text_shape(AutoShapeType::Rectangle, rect, MemoryText::new(text))
            })
            .collect();
        host.select(&shapes);
        host
    }

    fn texts(host: &MemoryHost) -> Vec<String> {
        host.slide()
            .memory_shapes()
            .iter()
            .map(|s| s.memory_text().map(|t| t.text().unwrap()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn swap_rotates_forward() {
        let host = text_host(&["one", "two", "three"]);
        assert!(SwapTextAction.is_enabled(&host, "").unwrap());
        SwapTextAction.run(&host, "").unwrap();
        assert_eq!(texts(&host), vec!["three", "one", "two"]);
    }

    #[test]
    fn swap_carries_formatting() {
        let host = MemoryHost::new();
        let slide = host.slide();
        let bold = FontSnapshot { bold: Some(true), ..Default::default() };
        let a = slide.add_text_shape(
            AutoShapeType::Rectangle,
            Rect::new(0.0, 0.0, 40.0, 20.0),
            MemoryText::from_runs(&[("bold", bold), (" plain", FontSnapshot::default())]),
        );
        let b = slide.add_text_shape(AutoShapeType::Rectangle, Rect::new(50.0, 0.0, 40.0, 20.0), MemoryText::new("b"));
        host.select(&[a, b.clone()]);
        SwapTextAction.run(&host, "").unwrap();

        let runs = b.memory_text().unwrap().font_runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, "bold");
        assert_eq!(runs[0].1.bold, Some(true));
        assert_eq!(runs[1].1.bold, Some(false));
    }

    #[test]
    fn swap_needs_two_text_shapes() {
        let host = text_host(&["only"]);
        assert!(!SwapTextAction.is_enabled(&host, "").unwrap());
        assert!(!SwapTextAction.run(&host, "").unwrap());
        assert_eq!(texts(&host), vec!["only"]);
    }

    #[test]
    fn clear() {
        let host = text_host(&["one", "two"]);
        ClearTextAction.run(&host, "").unwrap();
        assert_eq!(texts(&host), vec!["", ""]);
    }

    #[test]
    fn language_without_selection_covers_the_slide() {
        let host = text_host(&["one", "two"]);
        host.clear_selection();
        assert!(ChangeLanguageAction.is_enabled(&host, "de").unwrap());
        assert!(!ChangeLanguageAction.is_enabled(&host, "fr").unwrap());
        ChangeLanguageAction.run(&host, "de").unwrap();
        for shape in host.slide().memory_shapes() {
            assert_eq!(shape.memory_text().unwrap().language(), Some(LanguageId::German));
        }
    }

    #[test]
    fn language_needs_a_window() {
        assert!(!ChangeLanguageAction.is_enabled(&MemoryHost::without_slide(), "en").unwrap());
    }

    #[test]
    fn margins_from_settings() {
        let host = text_host(&["one"]);
        host.settings().set(DEFAULT_SMALL_LENGTH, 3.0.into());
        assert!(!TextMarginAction.is_enabled(&host, "huge").unwrap());
        TextMarginAction.run(&host, "small").unwrap();
        let text = host.slide().memory_shapes()[0].memory_text().unwrap();
        assert_eq!(text.margins().unwrap(), Margins::uniform(3.0));
    }
}

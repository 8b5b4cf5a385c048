//! Theme colors for fills and lines

use crate::errors::{DispatchError, HostError};
use crate::format::{ColorFormat, FontAttr, Rgb, ThemeColorIndex};
use crate::host::Host;
use crate::log::debug;

use super::{Action, Icon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeTarget {
    /// Solid fill plus a contrasting text color
    Background,
    Line,
}

/// `apply_background_theme_color:<slot>` and `apply_line_theme_color:<slot>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColorAction {
    target: ThemeTarget,
}

impl ThemeColorAction {
    pub const fn new(target: ThemeTarget) -> Self {
        ThemeColorAction { target }
    }

    /// The color `arg` resolves to on the active slide
    fn resolve(host: &dyn Host, arg: &str) -> Result<Option<(ThemeColorIndex, Rgb)>, HostError> {
        let index = ThemeColorIndex::from_arg(arg);
        let Some(slide) = host.active_slide()? else {
            return Ok(None);
        };
        Ok(slide.theme_color(index)?.map(|rgb| (index, rgb)))
    }
}

impl Action for ThemeColorAction {
    fn id(&self) -> &'static str {
        match self.target {
            ThemeTarget::Background => "apply_background_theme_color",
            ThemeTarget::Line => "apply_line_theme_color",
        }
    }

    fn is_enabled(&self, host: &dyn Host, _arg: &str) -> Result<bool, HostError> {
        Ok(!host.selected_auto_shapes()?.is_empty())
    }

    fn run(&self, host: &dyn Host, arg: &str) -> Result<bool, DispatchError> {
        let Some((index, rgb)) = Self::resolve(host, arg)? else {
            return Ok(false);
        };
        let shapes = host.selected_auto_shapes()?;
        debug!("{} {:?} ({}) on {} shapes", self.id(), index, rgb, shapes.len());

        let color = ColorFormat::scheme(index);
        match self.target {
            ThemeTarget::Background => {
                let text_color = FontAttr::Fill(rgb.contrasting_text().into());
                for shape in &shapes {
                    shape.set_fill(&color)?;
                    if let Some(text) = shape.text() {
                        if !text.is_empty()? {
                            text.set_font(text.full_range()?, &text_color)?;
                        }
                    }
                }
            }
            ThemeTarget::Line => {
                for shape in &shapes {
                    shape.set_line_color(&color)?;
                }
            }
        }
        Ok(false)
    }

    fn icon(&self, host: &dyn Host, control_id: &str, arg: &str) -> Result<Icon, HostError> {
        Ok(match Self::resolve(host, arg)? {
            Some((_, color)) => Icon::Tinted { name: control_id.to_string(), color },
            None => Icon::resource(control_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AutoShapeType, Shape, TextContainer};
    use crate::memory::{MemoryHost, MemoryText};
    use crate::types::Rect;

    fn host() -> MemoryHost {
        let host = MemoryHost::new();
        let shape = host.slide().add_text_shape(
            AutoShapeType::Rectangle,
            Rect::new(0.0, 0.0, 40.0, 20.0),
            MemoryText::new("label"),
        );
        host.select(&[shape]);
        host
    }

    #[test]
    fn dark_background_gets_white_text() {
        let host = host();
        let action = ThemeColorAction::new(ThemeTarget::Background);
        assert!(action.is_enabled(&host, "dark2").unwrap());
        action.run(&host, "dark2").unwrap();

        let shape = &host.slide().memory_shapes()[0];
        assert_eq!(shape.fill().unwrap(), Some(ColorFormat::scheme(ThemeColorIndex::Dark2)));
        let text = shape.memory_text().unwrap();
        let font = text.font(text.full_range().unwrap()).unwrap();
        assert_eq!(font.fill, Some(ColorFormat::Rgb(Rgb::WHITE)));
    }

    #[test]
    fn light_background_gets_black_text() {
        let host = host();
        ThemeColorAction::new(ThemeTarget::Background).run(&host, "light2").unwrap();
        let text = host.slide().memory_shapes()[0].memory_text().unwrap();
        assert_eq!(text.font(text.full_range().unwrap()).unwrap().fill, Some(ColorFormat::Rgb(Rgb::BLACK)));
    }

    #[test]
    fn line_color_leaves_fill_alone() {
        let host = host();
        ThemeColorAction::new(ThemeTarget::Line).run(&host, "bogus").unwrap();
        let shape = &host.slide().memory_shapes()[0];
        assert_eq!(shape.line_color().unwrap(), Some(ColorFormat::scheme(ThemeColorIndex::Dark1)));
        assert_eq!(shape.fill().unwrap(), None);
    }

    #[test]
    fn icon_is_tinted_with_the_theme() {
        let host = host();
        let icon = ThemeColorAction::new(ThemeTarget::Line).icon(&host, "line_accent2", "accent2").unwrap();
        assert_eq!(icon, Icon::Tinted { name: "line_accent2".into(), color: Rgb::new(0xed, 0x7d, 0x31) });
        let detached = MemoryHost::without_slide();
        let icon = ThemeColorAction::new(ThemeTarget::Line).icon(&detached, "line_accent2", "accent2").unwrap();
        assert_eq!(icon, Icon::resource("line_accent2"));
    }
}

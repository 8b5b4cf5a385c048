//! Bullet formats

use crate::errors::HostError;
use crate::host::{CharRange, TextContainer};

use super::best_effort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulletType {
    None,
    Unnumbered,
    Numbered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberedStyle {
    ArabicPeriod,
    ArabicParenRight,
    ArabicParenBoth,
    RomanUpperPeriod,
    RomanLowerPeriod,
    AlphaUpperPeriod,
    AlphaLowerPeriod,
    AlphaLowerParenRight,
}

/// Font of the bullet glyph itself
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulletFont {
    pub name: Option<String>,
    pub size: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulletFlags {
    pub use_text_color: bool,
    pub use_text_font: bool,
}

/// Bullet format of a paragraph, by kind
#[derive(Debug, Clone, PartialEq)]
pub enum BulletSnapshot {
    None,
    Unnumbered {
        /// Unicode code point of the bullet glyph
        character: u32,
        relative_size: f64,
        font: BulletFont,
        flags: BulletFlags,
    },
    Numbered {
        start_value: i32,
        style: NumberedStyle,
        relative_size: f64,
        font: BulletFont,
        flags: BulletFlags,
    },
}

/// A single bullet-format write
#[derive(Debug, Clone, PartialEq)]
pub enum BulletAttr {
    Type(BulletType),
    Character(u32),
    RelativeSize(f64),
    StartValue(i32),
    Style(NumberedStyle),
    FontName(String),
    FontSize(f64),
    UseTextColor(bool),
    UseTextFont(bool),
}

impl BulletAttr {
    pub fn property(&self) -> &'static str {
        match self {
            BulletAttr::Type(_) => "Bullet.Type",
            BulletAttr::Character(_) => "Bullet.Character",
            BulletAttr::RelativeSize(_) => "Bullet.RelativeSize",
            BulletAttr::StartValue(_) => "Bullet.StartValue",
            BulletAttr::Style(_) => "Bullet.Style",
            BulletAttr::FontName(_) => "Bullet.Font.Name",
            BulletAttr::FontSize(_) => "Bullet.Font.Size",
            BulletAttr::UseTextColor(_) => "Bullet.UseTextColor",
            BulletAttr::UseTextFont(_) => "Bullet.UseTextFont",
        }
    }
}

fn push_common(attrs: &mut Vec<BulletAttr>, relative_size: f64, font: &BulletFont, flags: BulletFlags) {
    attrs.push(BulletAttr::RelativeSize(relative_size));
    attrs.extend(font.name.clone().map(BulletAttr::FontName));
    attrs.extend(font.size.map(BulletAttr::FontSize));
    attrs.push(BulletAttr::UseTextColor(flags.use_text_color));
    attrs.push(BulletAttr::UseTextFont(flags.use_text_font));
}

impl BulletSnapshot {
    pub fn bullet_type(&self) -> BulletType {
        match self {
            BulletSnapshot::None => BulletType::None,
            BulletSnapshot::Unnumbered { .. } => BulletType::Unnumbered,
            BulletSnapshot::Numbered { .. } => BulletType::Numbered,
        }
    }

    /// The writes that reproduce this bullet; only fields valid for its kind
    pub fn attrs(&self) -> Vec<BulletAttr> {
        let mut attrs = vec![BulletAttr::Type(self.bullet_type())];
        match self {
            BulletSnapshot::None => {}
            BulletSnapshot::Unnumbered { character, relative_size, font, flags } => {
                attrs.push(BulletAttr::Character(*character));
                push_common(&mut attrs, *relative_size, font, *flags);
            }
            BulletSnapshot::Numbered { start_value, style, relative_size, font, flags } => {
                attrs.push(BulletAttr::StartValue(*start_value));
                attrs.push(BulletAttr::Style(*style));
                push_common(&mut attrs, *relative_size, font, *flags);
            }
        }
        attrs
    }

    pub fn apply(&self, container: &dyn TextContainer, range: CharRange) -> Result<(), HostError> {
        for attr in self.attrs() {
            best_effort(attr.property(), container.set_bullet(range, &attr))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_only_writes_the_type() {
        assert_eq!(BulletSnapshot::None.attrs(), vec![BulletAttr::Type(BulletType::None)]);
    }

    #[test]
    fn numbered_never_writes_a_character() {
        let bullet = BulletSnapshot::Numbered {
            start_value: 3,
            style: NumberedStyle::RomanLowerPeriod,
            relative_size: 1.0,
            font: BulletFont::default(),
            flags: BulletFlags::default(),
        };
        let attrs = bullet.attrs();
        assert_eq!(attrs[0], BulletAttr::Type(BulletType::Numbered));
        assert!(!attrs.iter().any(|a| matches!(a, BulletAttr::Character(_))));
        assert!(attrs.contains(&BulletAttr::StartValue(3)));
    }

    #[test]
    fn unnumbered_never_writes_numbering() {
        let bullet = BulletSnapshot::Unnumbered {
            character: 0x2022,
            relative_size: 0.8,
            font: BulletFont { name: Some("Symbol".into()), size: None },
            flags: BulletFlags { use_text_color: true, use_text_font: false },
        };
        let attrs = bullet.attrs();
        assert!(!attrs.iter().any(|a| matches!(a, BulletAttr::StartValue(_) | BulletAttr::Style(_))));
        assert!(attrs.contains(&BulletAttr::FontName("Symbol".into())));
        assert!(!attrs.iter().any(|a| matches!(a, BulletAttr::FontSize(_))));
    }
}

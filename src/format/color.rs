//! Colors: absolute RGB values and theme scheme references

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// HSL lightness in `[0, 1]`
    pub fn brightness(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (f64::from(max) + f64::from(min)) / 2.0 / 255.0
    }

    /// Black on bright colors, white otherwise
    pub fn contrasting_text(self) -> Rgb {
        if self.brightness() > 0.5 { Rgb::BLACK } else { Rgb::WHITE }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Slot of a document color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColorIndex {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
}

impl ThemeColorIndex {
    pub const ALL: [ThemeColorIndex; 10] = [
        ThemeColorIndex::Dark1,
        ThemeColorIndex::Light1,
        ThemeColorIndex::Dark2,
        ThemeColorIndex::Light2,
        ThemeColorIndex::Accent1,
        ThemeColorIndex::Accent2,
        ThemeColorIndex::Accent3,
        ThemeColorIndex::Accent4,
        ThemeColorIndex::Accent5,
        ThemeColorIndex::Accent6,
    ];

    /// Parse a command argument; anything unknown selects `Dark1`
    pub fn from_arg(arg: &str) -> ThemeColorIndex {
        match arg {
            "light1" => ThemeColorIndex::Light1,
            "dark2" => ThemeColorIndex::Dark2,
            "light2" => ThemeColorIndex::Light2,
            "accent1" => ThemeColorIndex::Accent1,
            "accent2" => ThemeColorIndex::Accent2,
            "accent3" => ThemeColorIndex::Accent3,
            "accent4" => ThemeColorIndex::Accent4,
            "accent5" => ThemeColorIndex::Accent5,
            "accent6" => ThemeColorIndex::Accent6,
            _ => ThemeColorIndex::Dark1,
        }
    }
}

/// A color as stored on a fill, line or font
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorFormat {
    Rgb(Rgb),
    /// Resolved through the theme when rendered; follows theme changes
    Scheme { index: ThemeColorIndex, tint_and_shade: f64 },
}

impl ColorFormat {
    pub fn scheme(index: ThemeColorIndex) -> Self {
        ColorFormat::Scheme { index, tint_and_shade: 0.0 }
    }
}

impl From<Rgb> for ColorFormat {
    fn from(rgb: Rgb) -> Self {
        ColorFormat::Rgb(rgb)
    }
}

//! Key/value settings consumed by the actions.
//!
//! The store itself belongs to the host; the crate only reads and writes
//! individual keys through [`Settings`]. [`LayoutSettings`] is the typed view
//! the layout actions work with.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;
use crate::layout::Gutters;

pub const ARRANGE_HORIZONTAL_GUTTER: &str = "arrange_horizontal_gutter";
pub const ARRANGE_VERTICAL_GUTTER: &str = "arrange_vertical_gutter";
pub const ARRANGE_HORIZONTAL_RESIZE: &str = "arrange_horizontal_resize";
pub const ARRANGE_VERTICAL_RESIZE: &str = "arrange_vertical_resize";
pub const CHANGE_SHAPE_TYPE: &str = "change_shape_type";
pub const DEFAULT_SMALL_LENGTH: &str = "default_small_length";
pub const DEFAULT_NORMAL_LENGTH: &str = "default_normal_length";
pub const DEFAULT_LARGE_LENGTH: &str = "default_large_length";
pub const SPLIT_ROWS: &str = "split_rows";
pub const SPLIT_COLUMNS: &str = "split_columns";

/// A single persisted value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Number(v)
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(v.to_string())
    }
}

/// Host-provided settings store.
///
/// Writes are visible immediately; `save` commits them and `reload` discards
/// everything written since the last commit.
pub trait Settings {
    fn get(&self, key: &str) -> Option<SettingValue>;

    fn set(&self, key: &str, value: SettingValue);

    fn save(&self) -> Result<(), SettingsError> {
        Ok(())
    }

    fn reload(&self) -> Result<(), SettingsError> {
        Ok(())
    }

    fn number(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(|v| v.as_f64()).unwrap_or(default)
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| v.as_str().map(str::to_string))
    }
}

/// In-process settings store persisted as a flat JSON object
#[derive(Debug, Default)]
pub struct MemorySettings {
    current: RefCell<BTreeMap<String, SettingValue>>,
    committed: RefCell<BTreeMap<String, SettingValue>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from its JSON form; the loaded values count as committed
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let values: BTreeMap<String, SettingValue> =
            serde_json::from_str(json).map_err(SettingsError::Parse)?;
        Ok(MemorySettings {
            current: RefCell::new(values.clone()),
            committed: RefCell::new(values),
        })
    }

    /// JSON form of the committed values
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(&*self.committed.borrow()).map_err(SettingsError::Serialize)
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.current.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: SettingValue) {
        self.current.borrow_mut().insert(key.to_string(), value);
    }

    fn save(&self) -> Result<(), SettingsError> {
        *self.committed.borrow_mut() = self.current.borrow().clone();
        Ok(())
    }

    fn reload(&self) -> Result<(), SettingsError> {
        *self.current.borrow_mut() = self.committed.borrow().clone();
        Ok(())
    }
}

/// About 3 mm in points
pub const DEFAULT_GUTTER: f64 = 8.5;

/// Typed view over the layout-related keys, with defaults for missing entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub horizontal_gutter: f64,
    pub vertical_gutter: f64,
    /// Grid alignment gives every shape of a column the column's width
    pub horizontal_resize: bool,
    /// Grid alignment gives every shape of a row the row's height
    pub vertical_resize: bool,
    pub small_length: f64,
    pub normal_length: f64,
    pub large_length: f64,
    pub split_rows: u32,
    pub split_columns: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            horizontal_gutter: DEFAULT_GUTTER,
            vertical_gutter: DEFAULT_GUTTER,
            horizontal_resize: false,
            vertical_resize: false,
            small_length: 2.83,
            normal_length: 7.2,
            large_length: 14.4,
            split_rows: 2,
            split_columns: 2,
        }
    }
}

impl LayoutSettings {
    pub fn load(settings: &dyn Settings) -> Self {
        let d = LayoutSettings::default();
        LayoutSettings {
            horizontal_gutter: settings.number(ARRANGE_HORIZONTAL_GUTTER, d.horizontal_gutter),
            vertical_gutter: settings.number(ARRANGE_VERTICAL_GUTTER, d.vertical_gutter),
            horizontal_resize: settings.flag(ARRANGE_HORIZONTAL_RESIZE, d.horizontal_resize),
            vertical_resize: settings.flag(ARRANGE_VERTICAL_RESIZE, d.vertical_resize),
            small_length: settings.number(DEFAULT_SMALL_LENGTH, d.small_length),
            normal_length: settings.number(DEFAULT_NORMAL_LENGTH, d.normal_length),
            large_length: settings.number(DEFAULT_LARGE_LENGTH, d.large_length),
            split_rows: count(settings, SPLIT_ROWS, d.split_rows),
            split_columns: count(settings, SPLIT_COLUMNS, d.split_columns),
        }
    }

    /// Write the arrange parameters back (the other keys are never edited by actions)
    pub fn store_arrange(&self, settings: &dyn Settings) {
        settings.set(ARRANGE_HORIZONTAL_GUTTER, self.horizontal_gutter.into());
        settings.set(ARRANGE_VERTICAL_GUTTER, self.vertical_gutter.into());
        settings.set(ARRANGE_HORIZONTAL_RESIZE, self.horizontal_resize.into());
        settings.set(ARRANGE_VERTICAL_RESIZE, self.vertical_resize.into());
    }

    pub fn gutters(&self) -> Gutters {
        Gutters { horizontal: self.horizontal_gutter, vertical: self.vertical_gutter }
    }

    /// Named default length used by margin commands
    pub fn default_length(&self, name: &str) -> Option<f64> {
        match name {
            "none" => Some(0.0),
            "small" => Some(self.small_length),
            "normal" => Some(self.normal_length),
            "large" => Some(self.large_length),
            _ => None,
        }
    }
}

/// A positive whole number of rows or columns; anything else is `default`
fn count(settings: &dyn Settings, key: &str, default: u32) -> u32 {
    match settings.get(key).and_then(|v| v.as_f64()) {
        // whole and within range, so the cast is exact
        Some(n) if n >= 1.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => n as u32,
        _ => default,
    }
}

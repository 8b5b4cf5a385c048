//! Shape layout and rich-text format transfer for the H&Z presentation toolbar.
//!
//! The crate is the engine behind a ribbon of slide-editing commands. The
//! presentation application is abstracted as a [`Host`]; the [`Toolbar`]
//! resolves ribbon controls to actions, and the actions do their work through
//! two cores:
//!
//! - [`layout`]: pure functions from rectangles to rectangles (stacking, grid
//!   alignment, magnet snapping, guides, splitting)
//! - [`format`]: snapshots of text formatting that can be captured from one
//!   text frame and re-created on another
//!
//! [`memory`] implements the host in-process.

pub mod actions;
pub mod command;
pub mod errors;
pub mod format;
pub mod host;
pub mod layout;
pub mod log;
pub mod memory;
pub mod resources;
pub mod settings;
pub mod toolbar;
pub mod types;

pub use command::Command;
pub use errors::{CommandError, DispatchError, HostError, LayoutError, SettingsError};
pub use host::Host;
pub use settings::{LayoutSettings, MemorySettings, Settings};
pub use toolbar::{Toolbar, ToolbarImage};
pub use types::{Axis, Guide, NumericError, Orientation, Rect, Side};

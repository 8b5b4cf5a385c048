//! Error types with diagnostics using miette
//!
//! Layout preconditions ("nothing to do") are not errors; they surface as
//! no-op results. These types cover the failures that actually abort work.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors raised by the layout algorithms
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("cannot cluster an empty set of rectangles")]
    #[diagnostic(
        code(hztoolbar::layout::empty_input),
        help("callers must check for at least one shape before clustering")
    )]
    EmptyInput,

    #[error("invalid geometry: {0}")]
    #[diagnostic(code(hztoolbar::layout::invalid_geometry))]
    InvalidGeometry(#[from] NumericError),
}

// ============================================================================
// Host Errors
// ============================================================================

/// Errors reported by the host object model
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum HostError {
    /// A single property write was refused; the object is still usable
    #[error("host rejected {property}: {reason}")]
    #[diagnostic(code(hztoolbar::host::rejected))]
    Rejected { property: &'static str, reason: String },

    /// The object behind a handle no longer exists
    #[error("host object is disconnected")]
    #[diagnostic(code(hztoolbar::host::disconnected))]
    Disconnected,

    #[error("host call failed: {message}")]
    #[diagnostic(code(hztoolbar::host::failed))]
    Failed { message: String },
}

impl HostError {
    pub fn rejected(property: &'static str, reason: impl Into<String>) -> Self {
        HostError::Rejected { property, reason: reason.into() }
    }

    /// Whether the failure only affects the property being written
    pub fn is_recoverable(&self) -> bool {
        matches!(self, HostError::Rejected { .. })
    }
}

// ============================================================================
// Command Errors
// ============================================================================

/// Errors resolving a ribbon control to an action
#[derive(Error, Diagnostic, Debug)]
pub enum CommandError {
    #[error("malformed command tag")]
    #[diagnostic(
        code(hztoolbar::command::malformed_tag),
        help("tags look like `action_id` or `action_id:parameter`")
    )]
    MalformedTag {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("unknown toolbar action {id}")]
    #[diagnostic(code(hztoolbar::command::unknown_action))]
    UnknownAction { id: String },
}

// ============================================================================
// Settings Errors
// ============================================================================

#[derive(Error, Diagnostic, Debug)]
pub enum SettingsError {
    #[error("settings store is not valid JSON")]
    #[diagnostic(code(hztoolbar::settings::parse))]
    Parse(#[source] serde_json::Error),

    #[error("settings could not be serialized")]
    #[diagnostic(code(hztoolbar::settings::serialize))]
    Serialize(#[source] serde_json::Error),
}

// ============================================================================
// Dispatch Errors
// ============================================================================

/// Everything that can abort a single command invocation
#[derive(Error, Diagnostic, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejections_are_recoverable() {
        assert!(HostError::rejected("LeftIndent", "mixed").is_recoverable());
        assert!(!HostError::Disconnected.is_recoverable());
        assert!(!HostError::Failed { message: "boom".into() }.is_recoverable());
    }

    #[test]
    fn layout_error_wraps_numeric() {
        let err: LayoutError = NumericError::NaN.into();
        assert_eq!(err.to_string(), "invalid geometry: value is NaN");
    }
}

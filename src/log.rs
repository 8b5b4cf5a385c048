//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros; without it
//! they compile to nothing. The arguments are still type-checked, so call
//! sites use plain format strings that both expansions accept.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if false {
            let _ = ::std::format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if false {
            let _ = ::std::format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

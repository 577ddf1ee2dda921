//! CPU profiling hooks via Tracy.
//!
//! Enabled with the `profiling` Cargo feature. Without it every macro expands
//! to nothing (or to a plain use of its argument), so instrumented code costs
//! nothing in normal builds.
//!
//! ```ignore
//! use framekit_core::profiling::{frame_mark, profile_scope};
//!
//! fn record_frame() {
//!     profile_scope!("record_frame");
//!     // ... record commands ...
//!     frame_mark!();
//! }
//! ```
//!
//! GPU-side markers (begin/end samples inside a command stream) live in the
//! graphics crate; these macros only cover the CPU timeline.

#[cfg(feature = "profiling")]
pub use tracy_client::{self, Client, Span, frame_mark as tracy_frame_mark, span};

/// Mark the end of a frame for Tracy's frame analysis.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! frame_mark {
    () => {
        $crate::profiling::tracy_frame_mark()
    };
}

/// Mark the end of a frame (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! frame_mark {
    () => {};
}

/// Open a span named by a string literal, closed at the end of the scope.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_span = $crate::profiling::span!($name);
    };
}

/// Open a span (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope {
    ($name:expr) => {};
}

/// Open a span with a runtime name. Heap-allocates the name inside Tracy.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope_dynamic {
    ($name:expr) => {
        let _profile_span = $crate::profiling::Client::running()
            .map(|c| c.span_alloc(Some($name), "", file!(), line!(), 0));
    };
}

/// Open a span with a runtime name (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope_dynamic {
    ($name:expr) => {
        let _ = $name;
    };
}

pub use crate::{frame_mark, profile_scope, profile_scope_dynamic};

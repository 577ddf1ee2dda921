//! Profiling support.
//!
//! CPU-side Tracy macros are re-exported from [`framekit_core::profiling`].
//! This module adds [`ProfilingSample`], which brackets GPU work with named
//! begin/end markers in the command stream.
//!
//! # Enabling Profiling
//!
//! ```toml
//! [dependencies]
//! framekit-graphics = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! Without the feature the markers are still recorded (backends can forward
//! them to their own debug tooling); only the Tracy CPU span is compiled out.

pub use framekit_core::profiling::*;

use crate::backend::RenderContext;

/// Named GPU sample covering a scope.
///
/// Creating the guard submits a `BeginSample` marker; dropping it submits the
/// matching `EndSample`, including on early return and unwinding.
///
/// ```
/// use framekit_graphics::backend::DummyContext;
/// use framekit_graphics::profiling::ProfilingSample;
///
/// let mut ctx = DummyContext::new();
/// {
///     let _sample = ProfilingSample::new(&mut ctx, "Shadows");
/// }
/// assert_eq!(ctx.submission_count(), 2);
/// ```
pub struct ProfilingSample<'a, C: RenderContext> {
    ctx: &'a mut C,
    name: String,
    #[cfg(feature = "profiling")]
    _span: Option<tracy_client::Span>,
}

impl<'a, C: RenderContext> ProfilingSample<'a, C> {
    /// Open a sample named `name` on `ctx`.
    pub fn new(ctx: &'a mut C, name: impl Into<String>) -> Self {
        let name = name.into();
        ctx.submit(|cmd| {
            cmd.set_name(&name);
            cmd.begin_sample(&name);
        });
        Self {
            #[cfg(feature = "profiling")]
            _span: tracy_client::Client::running()
                .map(|c| c.span_alloc(Some(&name), "", file!(), line!(), 0)),
            ctx,
            name,
        }
    }

    /// Sample name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The context the sample was opened on, for recording work inside it.
    pub fn context(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: RenderContext> Drop for ProfilingSample<'_, C> {
    fn drop(&mut self) {
        let name = &self.name;
        self.ctx.submit(|cmd| {
            cmd.set_name(name);
            cmd.end_sample(name);
        });
    }
}

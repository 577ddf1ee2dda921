//! Render context abstraction.
//!
//! A [`RenderContext`] is the command-submission side of a GPU backend: it
//! hands out command buffers, executes them in submission order and takes them
//! back for reuse. Everything in this crate records through it and never talks
//! to a GPU API directly.
//!
//! # Available Contexts
//!
//! - [`DummyContext`]: records every executed command and tracks global shader
//!   state without touching a GPU; used for tests and headless tooling.

pub mod dummy;

pub use dummy::DummyContext;

use crate::command::CommandBuffer;

/// Command-submission interface of a backend.
pub trait RenderContext {
    /// Take a cleared command buffer for recording.
    fn acquire_command_buffer(&mut self) -> CommandBuffer;

    /// Give a command buffer back once it has been executed.
    fn release_command_buffer(&mut self, cmd: CommandBuffer);

    /// Execute every command in `cmd`, in order.
    fn execute_command_buffer(&mut self, cmd: &CommandBuffer);

    /// Record into a pooled command buffer, execute it, then release it.
    ///
    /// The commands recorded by `record` are submitted as one unit.
    fn submit<F>(&mut self, record: F)
    where
        Self: Sized,
        F: FnOnce(&mut CommandBuffer),
    {
        let mut cmd = self.acquire_command_buffer();
        record(&mut cmd);
        self.execute_command_buffer(&cmd);
        self.release_command_buffer(cmd);
    }
}

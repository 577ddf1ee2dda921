//! Dummy render context for testing and development.
//!
//! This context doesn't perform actual GPU operations. It keeps a log of every
//! executed command and applies global parameter writes to a
//! [`ShaderProperties`] block, so callers can inspect exactly what a frame
//! would have submitted.

use crate::command::{Command, CommandBuffer, CommandBufferPool};
use crate::materials::ShaderProperties;

use super::RenderContext;

/// Recording render context.
#[derive(Debug, Default)]
pub struct DummyContext {
    pool: CommandBufferPool,
    executed: Vec<Command>,
    submissions: usize,
    globals: ShaderProperties,
}

impl DummyContext {
    /// Create a new dummy context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the context name.
    pub fn name(&self) -> &'static str {
        "Dummy Context"
    }

    /// Every command executed so far, in submission order.
    pub fn executed(&self) -> &[Command] {
        &self.executed
    }

    /// Number of command buffers executed.
    pub fn submission_count(&self) -> usize {
        self.submissions
    }

    /// Global shader state after all executed commands.
    pub fn globals(&self) -> &ShaderProperties {
        &self.globals
    }

    /// Number of command buffers ever allocated by this context's pool.
    pub fn command_buffers_created(&self) -> usize {
        self.pool.created()
    }

    /// Forget the executed command log. Global state is kept.
    pub fn clear_log(&mut self) {
        self.executed.clear();
        self.submissions = 0;
    }
}

impl RenderContext for DummyContext {
    fn acquire_command_buffer(&mut self) -> CommandBuffer {
        self.pool.acquire()
    }

    fn release_command_buffer(&mut self, cmd: CommandBuffer) {
        self.pool.release(cmd);
    }

    fn execute_command_buffer(&mut self, cmd: &CommandBuffer) {
        log::trace!(
            "{}: executing command buffer '{}' ({} commands)",
            self.name(),
            cmd.name(),
            cmd.len()
        );

        for command in cmd.commands() {
            if let Command::SetGlobal { name, value } = command {
                self.globals.set(name, value.clone());
            }
            self.executed.push(command.clone());
        }
        self.submissions += 1;
    }
}

//! Command FIFO space reservation.
//!
//! The driver writes commands into a window `[current, end)` of a command buffer. When the
//! window runs short, the submission system is asked to make room through a reserve callback it
//! installed on the context. [`CommandContext::reserve_callback`] is the single indirect call into
//! that callback; it adds no retry, ordering or locking of its own.

use std::fmt;

use thiserror::Error;
use tracing::{trace, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FifoError {
    #[error("reserve of {requested} words left only {available} available")]
    InsufficientSpace { requested: u32, available: u32 },

    #[error("advance of {requested} words overruns the {available} reserved")]
    Overrun { requested: u32, available: u32 },

    #[error("reserve callback failed: {0}")]
    Callback(String),
}

/// Word offsets into the command buffer.
///
/// `begin <= current <= end` is maintained by [`CommandContext`]; callbacks that rewrite the
/// window are trusted to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FifoWindow {
    pub begin: u32,
    pub current: u32,
    pub end: u32,
}

impl FifoWindow {
    /// Empty window spanning `[begin, end)`.
    pub fn new(begin: u32, end: u32) -> Self {
        Self {
            begin,
            current: begin,
            end: end.max(begin),
        }
    }

    /// Words that can still be written.
    pub fn available(&self) -> u32 {
        self.end.saturating_sub(self.current)
    }

    /// Words written since `begin`.
    pub fn used(&self) -> u32 {
        self.current.saturating_sub(self.begin)
    }
}

/// Makes at least `count` words available in the window, typically by flushing and rewinding.
pub type ReserveCallback = Box<dyn FnMut(&mut FifoWindow, u32) -> Result<(), FifoError> + Send>;

pub struct CommandContext {
    window: FifoWindow,
    callback: ReserveCallback,
}

impl fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl CommandContext {
    pub fn new(window: FifoWindow, callback: ReserveCallback) -> Self {
        Self { window, callback }
    }

    pub fn window(&self) -> &FifoWindow {
        &self.window
    }

    pub fn set_reserve_callback(&mut self, callback: ReserveCallback) {
        self.callback = callback;
    }

    /// Invokes the installed reserve callback once and returns its result unchanged.
    pub fn reserve_callback(&mut self, count: u32) -> Result<(), FifoError> {
        trace!(
            count,
            current = self.window.current,
            end = self.window.end,
            "fifo reserve callback"
        );
        (self.callback)(&mut self.window, count)
    }

    /// Ensures `count` words can be written at `current`.
    ///
    /// Calls the reserve callback only when the window is short, and at most once.
    pub fn reserve(&mut self, count: u32) -> Result<(), FifoError> {
        if self.window.available() >= count {
            return Ok(());
        }

        self.reserve_callback(count)?;

        let available = self.window.available();
        if available < count {
            warn!(requested = count, available, "fifo reserve callback made no room");
            return Err(FifoError::InsufficientSpace {
                requested: count,
                available,
            });
        }
        Ok(())
    }

    /// Commits `count` words written at `current`.
    pub fn advance(&mut self, count: u32) -> Result<(), FifoError> {
        let available = self.window.available();
        if count > available {
            return Err(FifoError::Overrun {
                requested: count,
                available,
            });
        }
        self.window.current += count;
        Ok(())
    }
}

//! RSX GL state tracker support crates.
//!
//! - [`format`]: GL format negotiation and hardware format introspection.
//! - [`fifo`]: command FIFO reservation.

pub use rsxgl_fifo as fifo;
pub use rsxgl_format as format;

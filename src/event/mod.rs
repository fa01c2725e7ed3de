//! Asynchronous change notification
//!
//! The listener is the event-multiplexing primitive that turns fired change
//! events into callback invocations on its own delivery tasks. Consumers
//! attach a callback to an event source and hold the returned attachment
//! token; dropping or detaching the token stops delivery.

pub mod listener;

pub use listener::{Attachment, Listener};

//! # Event router
//!
//! Turns one normalized inbound event into at most one reply: best-effort
//! rich-menu binding, then intent classification, then the store operation
//! the intent calls for, then reply formatting. Pure logic (classifier,
//! window calculator, formatter) lives beside the orchestrating
//! [`EventRouter`]; external collaborators are injected as trait objects.

mod binding;
mod classifier;
mod formatter;
mod router;
mod window;

pub use binding::MenuBindingTracker;
pub use classifier::classify;
pub use formatter::{format_ack, format_history, QUERY_FAILED_TEXT};
pub use router::EventRouter;
pub use window::window_for;

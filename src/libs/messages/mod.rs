//! User-facing text for folder-sync.
//!
//! All strings printed by the commands live in [`Message`] and are rendered
//! through its `Display` implementation; the `msg_*` macros decide whether
//! they go to the terminal or through `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

//! Application State
//!
//! - [`Slot`] / [`DataSlots`]: per-endpoint payload cells
//! - [`ViewShell`]: active tab plus slots, with the mount-time fetch

pub mod shell;
pub mod slot;

pub use shell::ViewShell;
pub use slot::{DataSlots, Slot};

//! Core value types shared across the crate

pub mod color;
pub mod handle;
pub mod kind;

pub use color::ColorRef;
pub use handle::ObjectId;
pub use kind::{ObjectKind, SelectionSlot};

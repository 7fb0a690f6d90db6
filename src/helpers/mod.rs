//! Helper functions for the rendering layer
//!
//! These are handed to templates through the render context rather than
//! being registered on any shared state.

mod date;
mod meta;

pub use date::*;
pub use meta::*;

//! Gantry: the Rust row mapper. Runs SQL through a synchronous driver and
//! binds the resulting rows onto typed records deriving [`Record`].

pub use gantry_core::*;
pub use gantry_macros::*;

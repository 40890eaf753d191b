//! A library to match the attached displays against saved screen roles.
//!
//! A screen configuration assigns the roles "primary", "prompt" and
//! "electronic-whiteboard" to display device identifiers. This crate checks
//! whether the live displays are covered by such a configuration, resolves
//! roles to display indices and lets an operator re-map the roles manually.

mod config;
mod display;
mod inspect;
mod properties;
mod types;

pub mod dialog;
pub mod json;

pub use config::*;
pub use display::*;
pub use inspect::*;
pub use properties::*;
pub use types::*;

//! Atelier engine crate.
//!
//! This crate owns the toolkit-independent primitives used by the control layer:
//! geometry, the colour/gradient paint model, platform-agnostic input and logging.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;

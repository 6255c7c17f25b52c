//! Headless controls.
//!
//! Each control holds its own state, reacts to [`UiEvent`](crate::event::UiEvent)s
//! through [`Control`](crate::control::Control) and reports changes through
//! boxed `on_change` callbacks set with builder methods.

pub mod angle;
pub mod background;
pub mod blending;
pub mod box_control;
pub mod gradient;
pub mod pivot;

//! Paint model shared between the controls and their hosts.
//!
//! Scope:
//! - color representation (straight-alpha sRGB, CSS parsing, mixing)
//! - gradient stops and CSS gradient serialization
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{GradientKind, GradientStop, GradientStyle, StopId, sorted_stops, stop_list_css};

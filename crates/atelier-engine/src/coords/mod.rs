//! Coordinate and geometry types shared by the controls.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Hosts report control bounds and pointer positions in this space.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;

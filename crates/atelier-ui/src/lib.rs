//! Atelier UI: headless design controls on top of `atelier-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use atelier_ui::prelude::*;
//!
//! let store = AttributeStore::new();
//! store.subscribe(|attrs| println!("{}", atelier_ui::store::style::to_json(attrs)));
//!
//! let mut dispatcher = Dispatcher::new(DragConfig::default());
//! let mut gradient = GradientEditor::new(GradientConfig::default())
//!     .on_change(|css| println!("background: {css}"));
//!
//! // In the host's event callback:
//! dispatcher.dispatch(&event, &mut gradient, track_rect);
//! ```
//!
//! # Extending with custom controls
//!
//! Implement [`Control`](control::Control) for any type, then route events to
//! it with a [`Dispatcher`](dispatch::Dispatcher) like any built-in control.

pub mod control;
pub mod controls;
pub mod dispatch;
pub mod event;
pub mod gesture;
pub mod options;
pub mod store;

/// Everything a host needs to wire controls up. Import this in your glue code.
pub mod prelude {
    pub use crate::control::Control;
    pub use crate::controls::{
        angle::AngleInput,
        background::{BackgroundControls, BackgroundImage},
        blending::BlendingPreview,
        box_control::BoxControl,
        gradient::{GradientConfig, GradientEditor},
        pivot::{PivotControl, PivotPosition, PivotValue},
    };
    pub use crate::dispatch::Dispatcher;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::gesture::{DragConfig, DragGesture};
    pub use crate::options::*;
    pub use crate::store::{
        AttributeKey,
        AttributePath,
        AttributeStore,
        AttributeValue,
        Attributes,
        BoxGroup,
        Edge,
        StoreError,
    };

    // Re-export the engine primitives everyone needs.
    pub use atelier_engine::coords::{Rect, Vec2};
    pub use atelier_engine::input::{InputEvent, Key, Modifiers, MouseButtonState};
    pub use atelier_engine::paint::{Color, GradientKind, GradientStop, StopId};
}

use atelier_engine::coords::Rect;

use crate::event::{EventResult, UiEvent};

/// The trait every interactive control implements.
///
/// Controls are headless: the host lays them out, reports the bounds it gave
/// them as `rect`, and renders from the state they expose.
///
/// # Implementing a custom control
///
/// ```rust,ignore
/// use atelier_ui::prelude::*;
///
/// pub struct Counter { clicks: u32 }
///
/// impl Control for Counter {
///     fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
///         match event {
///             UiEvent::Click { pos } if rect.contains(*pos) => {
///                 self.clicks += 1;
///                 EventResult::Consumed
///             }
///             _ => EventResult::Ignored,
///         }
///     }
/// }
/// ```
pub trait Control {
    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult;
}

impl<C: Control + ?Sized> Control for Box<C> {
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        (**self).on_event(event, rect)
    }
}

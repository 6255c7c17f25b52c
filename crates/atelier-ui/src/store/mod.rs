//! Observable attribute store.
//!
//! [`AttributeStore`] is a cheap, cloneable handle. Every clone sees the same
//! attributes, and every successful write notifies all subscribers
//! synchronously before the write call returns.
//!
//! ```rust,ignore
//! let store = AttributeStore::new();
//! let _sub = store.subscribe(|attrs| println!("margin: {:?}", attrs.margin));
//!
//! store.toggle_margin();
//! let set_top = store.setter(AttributePath::parse("margin.top")?);
//! set_top.set("12px");
//! ```

mod attributes;
mod error;
pub mod style;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub use attributes::{
    AttributeKey,
    AttributePath,
    AttributeValue,
    Attributes,
    BoxEdges,
    BoxGroup,
    Edge,
    FontAttributes,
    FontField,
    StackAttributes,
    StackField,
};
pub use error::StoreError;

use crate::options::{Overflow, TextAlign, TextDecoration};

/// Identifies a subscription for [`AttributeStore::unsubscribe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<RefCell<dyn FnMut(&Attributes)>>;

struct StoreInner {
    attributes: RefCell<Attributes>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Shared handle to the attribute record plus its subscribers.
#[derive(Clone)]
pub struct AttributeStore {
    inner: Rc<StoreInner>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::with_attributes(Attributes::default())
    }

    pub fn with_attributes(attributes: Attributes) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                attributes: RefCell::new(attributes),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    /// Registers `f` to run after every mutation with the new attributes.
    pub fn subscribe(&self, f: impl FnMut(&Attributes) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        let listener: Listener = Rc::new(RefCell::new(f));
        self.inner.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        // Clone the list so listeners may subscribe, unsubscribe or write.
        let listeners: Vec<(SubscriptionId, Listener)> = self.inner.listeners.borrow().clone();
        for (id, listener) in listeners {
            match listener.try_borrow_mut() {
                // Re-read each time: an earlier listener may have written.
                Ok(mut f) => {
                    let current = self.snapshot();
                    f(&current)
                }
                // A listener that writes to the store is already running further up the stack.
                Err(_) => log::trace!("skipping re-entrant notification of {id:?}"),
            }
        }
    }

    // ── Selectors ─────────────────────────────────────────────────────────

    /// Runs `f` against the current attributes without cloning them.
    ///
    /// `f` must not write to the store.
    pub fn read<R>(&self, f: impl FnOnce(&Attributes) -> R) -> R {
        f(&self.inner.attributes.borrow())
    }

    pub fn snapshot(&self) -> Attributes {
        self.inner.attributes.borrow().clone()
    }

    pub fn get(&self, path: AttributePath) -> Option<AttributeValue> {
        self.inner.attributes.borrow().get(path)
    }

    /// True when a value is present at `path`, i.e. its control group is shown.
    pub fn has_attribute(&self, path: impl Into<AttributePath>) -> bool {
        self.inner.attributes.borrow().has(path.into())
    }

    // ── Setters ───────────────────────────────────────────────────────────

    /// Writes `value` at `path` (`None` clears a whole attribute) and notifies.
    pub fn set(&self, path: impl Into<AttributePath>, value: Option<AttributeValue>) -> Result<(), StoreError> {
        let path = path.into();
        self.inner.attributes.borrow_mut().set(path, value)?;
        log::debug!("attribute {path} updated");
        self.notify();
        Ok(())
    }

    /// Curried setter bound to `path`, for wiring into a control's `on_change`.
    pub fn setter(&self, path: impl Into<AttributePath>) -> Setter {
        Setter { store: self.clone(), path: path.into() }
    }

    /// Like [`setter`](Self::setter) for a dot-separated path.
    pub fn setter_for(&self, path: &str) -> Result<Setter, StoreError> {
        Ok(self.setter(AttributePath::parse(path)?))
    }

    /// Sets `path` to `off` when it currently holds a value, else to `on`.
    pub fn toggle_attribute(
        &self,
        path: impl Into<AttributePath>,
        on: AttributeValue,
        off: Option<AttributeValue>,
    ) -> Result<(), StoreError> {
        let path = path.into();
        let next = if self.has_attribute(path) { off } else { Some(on) };
        self.set(path, next)
    }

    // ── Actions ───────────────────────────────────────────────────────────

    /// Toggle with a payload known to match the attribute's type.
    fn toggle_default(&self, key: AttributeKey, on: impl Into<AttributeValue>) {
        if let Err(err) = self.toggle_attribute(key, on.into(), None) {
            log::error!("default toggle for {} rejected: {err}", key.name());
        }
    }

    pub fn toggle_size(&self) {
        for key in [AttributeKey::Height, AttributeKey::Width] {
            if let Err(err) = self.set(key, Some("auto".into())) {
                log::error!("resetting {} rejected: {err}", key.name());
            }
        }
    }

    pub fn toggle_stack(&self) {
        self.toggle_default(AttributeKey::Stack, StackAttributes::default());
    }

    pub fn toggle_padding(&self) {
        self.toggle_default(AttributeKey::Padding, BoxEdges::default());
    }

    pub fn toggle_margin(&self) {
        self.toggle_default(AttributeKey::Margin, BoxEdges::default());
    }

    pub fn toggle_overflow(&self) {
        self.toggle_default(AttributeKey::Overflow, Overflow::Auto);
    }

    pub fn toggle_font(&self) {
        self.toggle_default(AttributeKey::Font, FontAttributes::default());
    }

    /// Letter spacing and line height are shown and hidden together.
    pub fn toggle_letter_spacing(&self) {
        self.toggle_default(AttributeKey::LetterSpacing, "0");
        self.toggle_default(AttributeKey::LineHeight, "1.6em");
    }

    pub fn toggle_text_decoration(&self) {
        self.toggle_default(AttributeKey::TextDecoration, TextDecoration::None);
    }

    pub fn toggle_text_align(&self) {
        self.toggle_default(AttributeKey::TextAlign, TextAlign::Left);
    }

    pub fn toggle_blur(&self) {
        self.toggle_default(AttributeKey::Blur, 0.0);
    }

    pub fn toggle_opacity(&self) {
        self.toggle_default(AttributeKey::Opacity, 100.0);
    }
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AttributeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeStore")
            .field("attributes", &*self.inner.attributes.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// A setter bound to one attribute path.
///
/// Rejected writes are logged at `warn` and leave the store unchanged, so a
/// `Setter` can be handed to a control that has no error channel.
#[derive(Clone, Debug)]
pub struct Setter {
    store: AttributeStore,
    path: AttributePath,
}

impl Setter {
    #[inline]
    pub fn path(&self) -> AttributePath {
        self.path
    }

    /// Returns `true` when the write was accepted.
    pub fn set(&self, value: impl Into<AttributeValue>) -> bool {
        self.apply(Some(value.into()))
    }

    pub fn clear(&self) -> bool {
        self.apply(None)
    }

    fn apply(&self, value: Option<AttributeValue>) -> bool {
        match self.store.set(self.path, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{err}");
                false
            }
        }
    }

    /// Turns the setter into a plain callback.
    pub fn into_fn<V: Into<AttributeValue>>(self) -> impl Fn(V) + 'static {
        move |v| {
            self.set(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn path(s: &str) -> AttributePath {
        AttributePath::parse(s).unwrap()
    }

    // ── set / get ─────────────────────────────────────────────────────────

    #[test]
    fn curried_setter_writes_leaf() {
        let store = AttributeStore::new();
        store.toggle_margin();
        let set_top = store.setter_for("margin.top").unwrap();
        assert!(set_top.set("12px"));
        assert_eq!(store.get(path("margin.top")), Some(AttributeValue::Text("12px".into())));
        assert_eq!(store.get(path("margin.bottom")), Some(AttributeValue::Text("0px".into())));
    }

    #[test]
    fn setter_for_rejects_unknown_path() {
        let store = AttributeStore::new();
        assert!(matches!(store.setter_for("margin.centre"), Err(StoreError::UnknownPath(_))));
    }

    #[test]
    fn rejected_write_does_not_notify() {
        let store = AttributeStore::new();
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        store.subscribe(move |_| c.set(c.get() + 1));

        assert!(!store.setter(AttributeKey::Opacity).set("opaque"));
        assert_eq!(calls.get(), 0);
        assert!(store.setter(AttributeKey::Opacity).set(20.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn non_finite_input_is_refused_and_opacity_clamps() {
        let store = AttributeStore::new();
        assert!(!store.setter(AttributeKey::Opacity).set("NaN"));
        assert!(!store.setter(AttributeKey::Blur).set("-inf"));
        assert!(!store.has_attribute(AttributeKey::Opacity));
        assert!(!store.has_attribute(AttributeKey::Blur));

        assert!(store.setter(AttributeKey::Opacity).set(250.0));
        let decls = store.read(style::box_style);
        assert!(decls.contains(&("--mb--op", "1".to_string())));
        assert_eq!(style::to_json(&store.snapshot())["opacity"], 100.0);
    }

    #[test]
    fn into_fn_forwards_values() {
        let store = AttributeStore::new();
        let on_change = store.setter(AttributeKey::Width).into_fn::<&str>();
        on_change("320px");
        assert_eq!(store.snapshot().width.as_deref(), Some("320px"));
    }

    // ── toggles ───────────────────────────────────────────────────────────

    #[test]
    fn toggle_cycles_back_to_default_payload() {
        let store = AttributeStore::new();
        store.toggle_padding();
        store.setter_for("padding.top").unwrap().set("30px");
        store.toggle_padding();
        assert!(!store.has_attribute(AttributeKey::Padding));
        store.toggle_padding();
        assert_eq!(store.snapshot().padding, Some(BoxEdges::default()));
    }

    #[test]
    fn toggle_attribute_uses_explicit_off_value() {
        let store = AttributeStore::new();
        store.toggle_attribute(AttributeKey::Height, "auto".into(), Some("100px".into())).unwrap();
        assert_eq!(store.snapshot().height.as_deref(), Some("100px"));
    }

    #[test]
    fn convenience_toggles_install_defaults() {
        let store = AttributeStore::new();
        store.toggle_stack();
        store.toggle_font();
        store.toggle_overflow();
        store.toggle_opacity();
        store.toggle_blur();
        store.toggle_text_align();
        store.toggle_text_decoration();

        let a = store.snapshot();
        assert_eq!(a.stack, Some(StackAttributes::default()));
        assert_eq!(a.font.as_ref().map(|f| f.family.as_str()), Some("system-ui"));
        assert_eq!(a.overflow, Some(Overflow::Auto));
        assert_eq!(a.opacity, Some(100.0));
        assert_eq!(a.blur, Some(0.0));
        assert_eq!(a.text_align, Some(TextAlign::Left));
        assert_eq!(a.text_decoration, Some(TextDecoration::None));
    }

    #[test]
    fn letter_spacing_toggles_line_height_too() {
        let store = AttributeStore::new();
        store.toggle_letter_spacing();
        let a = store.snapshot();
        assert_eq!(a.letter_spacing.as_deref(), Some("0"));
        assert_eq!(a.line_height.as_deref(), Some("1.6em"));
        store.toggle_letter_spacing();
        let a = store.snapshot();
        assert!(a.letter_spacing.is_none() && a.line_height.is_none());
    }

    #[test]
    fn toggle_size_resets_dimensions() {
        let store = AttributeStore::new();
        store.setter(AttributeKey::Height).set("10px");
        store.setter(AttributeKey::Width).clear();
        store.toggle_size();
        let a = store.snapshot();
        assert_eq!(a.height.as_deref(), Some("auto"));
        assert_eq!(a.width.as_deref(), Some("auto"));
    }

    // ── subscriptions ─────────────────────────────────────────────────────

    #[test]
    fn subscribers_see_new_state_and_can_unsubscribe() {
        let store = AttributeStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let id = store.subscribe(move |a| s.borrow_mut().push(a.margin.is_some()));

        store.toggle_margin();
        store.toggle_margin();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle_margin();

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let store = AttributeStore::new();
        let other = store.clone();
        other.toggle_font();
        assert!(store.has_attribute(AttributeKey::Font));
    }

    #[test]
    fn listener_may_write_back() {
        let store = AttributeStore::new();
        let handle = store.clone();
        // Mirror margin into padding; the nested notification skips this listener.
        store.subscribe(move |a| {
            if a.margin.is_some() && a.padding.is_none() {
                handle.toggle_padding();
            }
        });
        store.toggle_margin();
        assert!(store.has_attribute(AttributeKey::Padding));
    }

    #[test]
    fn later_listeners_end_on_current_state_after_write_back() {
        let store = AttributeStore::new();
        let handle = store.clone();
        store.subscribe(move |a| {
            if a.margin.is_some() && a.padding.is_none() {
                handle.toggle_padding();
            }
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        store.subscribe(move |a| log.borrow_mut().push(a.padding.is_some()));

        store.toggle_margin();
        assert!(store.has_attribute(AttributeKey::Padding));
        assert_eq!(seen.borrow().last(), Some(&true));
        assert!(seen.borrow().iter().all(|&padded| padded));
    }
}

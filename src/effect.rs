//! Declarative effect system for describing deferred event processing.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use crate::Emitter;

/// Declarative description of events to be processed.
///
/// Effects describe follow-up events that will be enqueued once the current
/// reduction finishes. They are returned from
/// [`StoreLogic::init`](crate::StoreLogic::init) and
/// [`StoreLogic::update`](crate::StoreLogic::update) alongside the new model
/// state, and executed synchronously against the runtime's [`Emitter`]
/// after the render for that turn.
///
/// # Example
///
/// ```rust
/// use theme_swatch::{Effect, ThemeEvent};
///
/// // Trigger a follow-up toggle
/// let effect = Effect::just(ThemeEvent::TogglePressed);
///
/// // Combine multiple effects
/// let effect = Effect::batch(vec![
///     Effect::just(ThemeEvent::TogglePressed),
///     Effect::just(ThemeEvent::TogglePressed),
/// ]);
///
/// // No side effects
/// let effect: Effect<ThemeEvent> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event: Send>(Box<dyn Fn(&Emitter<Event>) + Send + 'static>);

impl<Event: 'static + Send> Effect<Event> {
    /// Create an empty effect.
    ///
    /// This is private - use [`Effect::none()`] instead.
    fn new() -> Self {
        Self(Box::new(|_| {}))
    }

    /// Run the effect, enqueueing its events on the given emitter.
    pub fn execute(&self, emitter: &Emitter<Event>) {
        (self.0)(emitter);
    }

    /// Create an effect from a single event.
    ///
    /// Useful for triggering immediate follow-up events.
    ///
    /// # Example
    ///
    /// ```rust
    /// use theme_swatch::{Effect, ThemeEvent};
    ///
    /// let effect = Effect::just(ThemeEvent::TogglePressed);
    /// ```
    pub fn just(event: Event) -> Self
    where
        Event: Clone + Send + 'static,
    {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            emitter.emit(event.clone());
        }))
    }

    /// Create an empty effect.
    ///
    /// Prefer this when semantically indicating "no side effects".
    pub fn none() -> Self {
        Self::new()
    }

    /// Combine multiple effects into a single effect.
    ///
    /// All events from all effects will be queued for processing, in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use theme_swatch::{Effect, ThemeEvent};
    ///
    /// let combined = Effect::batch(vec![
    ///     Effect::just(ThemeEvent::TogglePressed),
    ///     Effect::just(ThemeEvent::TogglePressed),
    ///     Effect::just(ThemeEvent::TogglePressed),
    /// ]);
    /// ```
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            for effect in &effects {
                effect.execute(emitter);
            }
        }))
    }
}

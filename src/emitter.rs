//! Event emitter for embedding callbacks in props.

use flume::Sender;

/// Event emitter that can be embedded in props.
///
/// Clone this handle to create callbacks in your props that can trigger
/// events when invoked (e.g., by pressing a button).
///
/// `Emitter` wraps a lock-free channel sender, making it cheap to clone
/// and thread-safe without any locking overhead. Events are queued and
/// processed sequentially by the runtime that created the emitter.
///
/// # Example
///
/// ```rust
/// use theme_swatch::{Emitter, SwatchProps, ThemeEvent};
///
/// fn swatch_props(emitter: &Emitter<ThemeEvent>) -> SwatchProps {
///     let emitter = emitter.clone();
///     SwatchProps {
///         background_color: "#ddd".into(),
///         color: "#000".into(),
///         on_toggle: Box::new(move || {
///             emitter.emit(ThemeEvent::TogglePressed);
///         }),
///     }
/// }
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// This queues the event for processing by the runtime. Multiple threads
    /// can safely call this method concurrently via the lock-free channel.
    ///
    /// If the runtime is gone the event is dropped with a warning; emitting
    /// never fails or panics.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            log::warn!("event dropped: the store runtime is no longer receiving");
        }
    }
}

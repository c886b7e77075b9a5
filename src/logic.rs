//! Store logic trait defining the init/update/view contract.

use crate::{Effect, Emitter};

/// Store logic trait defining the reactive contract between a model and
/// the props rendered from it.
///
/// Implementations must provide three pure functions:
/// - [`init`](Self::init): Initialize the model and produce initial effects
/// - [`update`](Self::update): Transform (Event, Model) → (Model, Effect)
/// - [`view`](Self::view): Derive Props from Model with event emitter capability
///
/// Derived values belong in [`view`](Self::view) (or in methods on the model
/// it calls): they are recomputed from the model on every turn, so rendered
/// props can never disagree with the state they were derived from.
///
/// See the [crate-level documentation](crate) for a complete example; the
/// built-in [`ThemeApp`](crate::ThemeApp) is the reference implementation.
pub trait StoreLogic<Event: Send, Model, Props> {
    /// Initialize the runtime from an initial model with effects and state
    /// changes as needed.
    ///
    /// This is called once when the runtime starts. Use it to set up initial
    /// state and trigger any bootstrap events.
    ///
    /// # Arguments
    ///
    /// * `model` - The initial model state
    ///
    /// # Returns
    ///
    /// A tuple of `(Model, Effect<Event>)` containing the initialized model
    /// and any effects to process during startup.
    fn init(&self, model: Model) -> (Model, Effect<Event>);

    /// Reduce an event to an updated model and side effects.
    ///
    /// This function takes an event and the current model, returning
    /// the new model and any effects to process. All state changes must
    /// happen through this function.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to process
    /// * `model` - The current model state
    ///
    /// # Returns
    ///
    /// A tuple of `(Model, Effect<Event>)` containing the updated model
    /// and any effects to process.
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Reduce to Props from the current model.
    ///
    /// This function creates a renderable representation (Props) from
    /// the model. The provided [`Emitter`] allows Props to contain callbacks
    /// that can trigger new events.
    ///
    /// # Arguments
    ///
    /// * `model` - The current model state
    /// * `emitter` - Event emitter for creating callbacks
    ///
    /// # Returns
    ///
    /// Props derived from the model, ready for rendering via
    /// [`Renderer::render`](crate::Renderer::render).
    ///
    /// # Example
    ///
    /// A headless view over the built-in [`Theme`](crate::Theme) model:
    ///
    /// ```rust
    /// use theme_swatch::{Effect, Emitter, StoreLogic, Theme, ThemeEvent};
    ///
    /// struct Colors {
    ///     background: &'static str,
    ///     text: &'static str,
    /// }
    ///
    /// struct Headless;
    ///
    /// impl StoreLogic<ThemeEvent, Theme, Colors> for Headless {
    ///     fn init(&self, model: Theme) -> (Theme, Effect<ThemeEvent>) {
    ///         (model, Effect::none())
    ///     }
    ///
    ///     fn update(&self, event: ThemeEvent, model: &Theme) -> (Theme, Effect<ThemeEvent>) {
    ///         match event {
    ///             ThemeEvent::TogglePressed => (model.toggled(), Effect::none()),
    ///         }
    ///     }
    ///
    ///     fn view(&self, model: &Theme, _emitter: &Emitter<ThemeEvent>) -> Colors {
    ///         Colors {
    ///             background: model.background_color(),
    ///             text: model.color(),
    ///         }
    ///     }
    /// }
    /// ```
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}

//! The store runtime that orchestrates the event loop.

use flume::Receiver;

use crate::{Emitter, Renderer, StoreLogic};

/// The store runtime that orchestrates the event loop.
///
/// This is the core of the crate. It:
/// 1. Initializes the Model and initial Effects via [`StoreLogic::init`]
/// 2. Processes events through [`StoreLogic::update`]
/// 3. Reduces the Model to Props via [`StoreLogic::view`]
/// 4. Delivers Props to the [`Renderer`] for rendering
///
/// The runtime creates a single [`Emitter`] that can send events from any
/// thread. Events are queued via a lock-free channel and processed
/// sequentially on the thread where [`StoreRuntime::run`] was called. All
/// propagation for one event happens within that turn: the model is reduced,
/// props are derived and rendered, and only then is the event's effect
/// executed.
///
/// For testing with manual control, use [`TestStoreRuntime`] with a
/// [`crate::TestRenderer`].
///
/// # Type Parameters
///
/// * `Event` - The event type for your application
/// * `Model` - The model/state type for your application
/// * `Props` - The props type produced by the view function
/// * `Logic` - The logic implementation type (implements [`StoreLogic`])
/// * `Render` - The renderer implementation type (implements [`Renderer`])
pub struct StoreRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send,
    Model: Clone,
    Logic: StoreLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    model: Model,
    emitter: Emitter<Event>,
    _props: core::marker::PhantomData<Props>,
}

impl<Event, Model, Props, Logic, Render> StoreRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: StoreLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Create a new runtime.
    ///
    /// The runtime will not be started until [`StoreRuntime::run`] is called.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The initial state
    /// * `logic` - Application logic implementing [`StoreLogic`]
    /// * `renderer` - Surface implementation for rendering Props
    pub fn new(init_model: Model, logic: Logic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();
        let emitter = Emitter::new(event_sender);

        StoreRuntime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter,
            _props: core::marker::PhantomData,
        }
    }

    /// Initialize the runtime and run the event processing loop.
    ///
    /// - Uses the [`StoreLogic::init`] function to adjust the initial model
    ///   and enqueue initial side effects.
    /// - Reduces the initial Model to Props via [`StoreLogic::view`].
    /// - Renders the initial Props.
    /// - Processes events from the channel in a loop.
    ///
    /// This blocks the calling thread for the lifetime of the session. Events
    /// can be emitted from any thread via cloned [`Emitter`]s embedded in
    /// props callbacks, but are always processed sequentially here. The loop
    /// ends when every emitter has been dropped.
    ///
    /// ```rust,no_run
    /// use theme_swatch::{DemoSurface, StoreRuntime, Theme, ThemeApp};
    ///
    /// let mut runtime = StoreRuntime::new(Theme::default(), ThemeApp, DemoSurface::new());
    /// runtime.run(); // blocks for the session
    /// ```
    pub fn run(&mut self) {
        let (init_model, init_effect) = self.logic.init(self.model.clone());

        let initial_props = {
            let emitter = &self.emitter;
            self.logic.view(&init_model, emitter)
        };

        self.renderer.render(initial_props);
        self.model = init_model;

        // Execute the initial effect
        init_effect.execute(&self.emitter);

        log::trace!("store runtime started");

        // Event processing loop
        loop {
            match self.event_receiver.recv() {
                Ok(event) => self.step(event),
                Err(_) => {
                    // Channel closed
                    log::trace!("all emitters dropped; store runtime stopping");
                    break;
                }
            }
        }
    }

    fn step(&mut self, event: Event) {
        // Update model with event
        let (new_model, effect) = self.logic.update(event, &self.model);

        // Reduce to props and render
        let props = self.logic.view(&new_model, &self.emitter);
        self.renderer.render(props);

        // Update model
        self.model = new_model;

        // Execute the effect
        effect.execute(&self.emitter);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestStoreRuntime::run`]. Provides methods to manually
/// process the event queue, and access to the renderer for inspecting the
/// surface between turns.
///
/// See [`TestStoreRuntime`] for usage.
pub struct TestStoreDriver<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: StoreLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    runtime: StoreRuntime<Event, Model, Props, Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render> TestStoreDriver<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: StoreLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Process all queued events.
    ///
    /// This processes events until the queue is empty, including events
    /// enqueued by effects of events processed in the same call. Call this
    /// after emitting events to drive the event loop in tests.
    pub fn process_events(&mut self) {
        self.runtime.process_queued_events();
    }

    /// Borrow the renderer to inspect the rendered surface.
    pub fn renderer(&self) -> &Render {
        &self.runtime.renderer
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime with manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`StoreRuntime`], this runtime does not block waiting for events.
/// Tests must manually call
/// [`process_events`](TestStoreDriver::process_events) on the returned driver
/// to drain the event queue, which makes the turn boundary explicit.
///
/// ```rust
/// use theme_swatch::{TestRenderer, TestStoreRuntime, Theme, ThemeApp};
///
/// let renderer = TestRenderer::new();
/// let runtime = TestStoreRuntime::new(Theme::default(), ThemeApp, renderer.clone());
///
/// let mut driver = runtime.run();
/// driver.process_events(); // Manually process events
/// ```
pub struct TestStoreRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: StoreLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    runtime: StoreRuntime<Event, Model, Props, Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render> TestStoreRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: StoreLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Create a new test runtime.
    ///
    /// Creates an emitter that enqueues events without automatically
    /// processing them.
    ///
    /// # Arguments
    ///
    /// * `init_model` - The initial state
    /// * `logic` - Application logic implementing [`StoreLogic`]
    /// * `renderer` - Surface implementation for rendering Props
    pub fn new(init_model: Model, logic: Logic, renderer: Render) -> Self {
        TestStoreRuntime {
            runtime: StoreRuntime::new(init_model, logic, renderer),
        }
    }

    /// Initializes the runtime and returns a driver for manual event
    /// processing.
    ///
    /// This executes initial effects and renders the initial state, then
    /// returns a [`TestStoreDriver`] that provides manual control over event
    /// processing.
    pub fn run(mut self) -> TestStoreDriver<Event, Model, Props, Logic, Render> {
        let (init_model, init_effect) = self.runtime.logic.init(self.runtime.model.clone());

        let initial_props = self.runtime.logic.view(&init_model, &self.runtime.emitter);

        self.runtime.renderer.render(initial_props);
        self.runtime.model = init_model;

        // Enqueue the initial effect's events; the driver drains them
        init_effect.execute(&self.runtime.emitter);

        TestStoreDriver {
            runtime: self.runtime,
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Props, Logic, Render> StoreRuntime<Event, Model, Props, Logic, Render>
where
    Event: Send + 'static,
    Model: Clone + 'static,
    Props: 'static,
    Logic: StoreLogic<Event, Model, Props>,
    Render: Renderer<Props>,
{
    /// Process all queued events (for testing).
    ///
    /// This is exposed for [`TestStoreDriver`] to manually drive event
    /// processing.
    fn process_queued_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
        }
    }
}

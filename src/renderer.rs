//! Renderer abstraction for applying props to a surface.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for applying props to a surface.
///
/// Implement this trait to connect the store runtime to your rendering
/// system (a UI toolkit, a terminal, an embedded display, etc.).
///
/// The [`render`](Self::render) method is called whenever the model changes,
/// receiving fresh props derived from the current state via
/// [`StoreLogic::view`](crate::StoreLogic::view). The built-in
/// [`DemoSurface`](crate::DemoSurface) mirrors props into a
/// [`ThemeElement`](crate::ThemeElement) and a toggle button.
///
/// # Example
///
/// ```rust
/// use theme_swatch::{Renderer, SwatchProps};
///
/// struct ConsoleSwatch;
///
/// impl Renderer<SwatchProps> for ConsoleSwatch {
///     fn render(&mut self, props: SwatchProps) {
///         println!("{} on {}", props.color, props.background_color);
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    ///
    /// Props may contain callbacks (via [`Emitter`](crate::Emitter)) that can
    /// trigger new events; a surface that owns interactive controls should
    /// rebind them here.
    ///
    /// # Arguments
    ///
    /// * `props` - The props to render, derived from the current model state
    fn render(&mut self, props: Props);
}

impl<Props, R: Renderer<Props> + ?Sized> Renderer<Props> for Box<R> {
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered props for assertions.
///
/// Only available with the `testing` feature.
///
/// Use this with [`TestStoreRuntime`](crate::TestStoreRuntime) to capture and
/// inspect props in integration tests.
///
/// # Example
///
/// ```rust
/// use theme_swatch::{TestRenderer, TestStoreRuntime, Theme, ThemeApp};
///
/// let renderer = TestRenderer::new();
///
/// let runtime = TestStoreRuntime::new(Theme::default(), ThemeApp, renderer.clone());
/// let driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].background_color, "#ddd");
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
struct InternalTestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for InternalTestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a boxed renderer to pass to the store runtime.
    ///
    /// The returned renderer shares the same capture storage as this
    /// TestRenderer, so you can use [`with_renders`](Self::with_renders) to
    /// inspect captured props.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send> {
        Box::new(InternalTestRenderer {
            renders: self.renders.clone(),
        })
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives a reference to the Vec of all captured props.
    /// This allows you to make assertions on rendered values or execute
    /// embedded callbacks for further testing.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use theme_swatch::{SwatchProps, TestRenderer};
    /// # let renderer = TestRenderer::<SwatchProps>::new();
    /// // Compute render count
    /// let count = renderer.with_renders(|renders| renders.len());
    ///
    /// // Make props assertions, or press a rendered control:
    /// renderer.with_renders(|renders| {
    ///     // assert_eq!(renders[0].background_color, "#ddd");
    ///     // (renders[0].on_toggle)();
    /// });
    /// ```
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}

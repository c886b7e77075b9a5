//! The demo application: theme store, swatch element, toggle button.

#[cfg(feature = "no_std")]
use alloc::{boxed::Box, string::String};

use crate::{Effect, Emitter, Renderer, StoreLogic, StoreRuntime, Theme, ThemeElement};

/// Events the demo application reduces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The toggle button was pressed.
    TogglePressed,
}

/// Props derived from the theme model on every turn.
///
/// The color fields carry the derived palette; `on_toggle` is the button
/// behavior, built from a cloned [`Emitter`].
pub struct SwatchProps {
    pub background_color: String,
    pub color: String,
    pub on_toggle: Box<dyn Fn() + Send>,
}

/// The demo's store logic: reduce [`ThemeEvent`]s over a [`Theme`] model and
/// derive [`SwatchProps`] from it.
pub struct ThemeApp;

impl StoreLogic<ThemeEvent, Theme, SwatchProps> for ThemeApp {
    fn init(&self, model: Theme) -> (Theme, Effect<ThemeEvent>) {
        (model, Effect::none())
    }

    fn update(&self, event: ThemeEvent, model: &Theme) -> (Theme, Effect<ThemeEvent>) {
        match event {
            ThemeEvent::TogglePressed => (model.toggled(), Effect::none()),
        }
    }

    fn view(&self, model: &Theme, emitter: &Emitter<ThemeEvent>) -> SwatchProps {
        let emitter = emitter.clone();
        SwatchProps {
            background_color: model.background_color().into(),
            color: model.color().into(),
            on_toggle: Box::new(move || {
                emitter.emit(ThemeEvent::TogglePressed);
            }),
        }
    }
}

/// The interactive control: a button with a fixed label whose only effect is
/// invoking the toggle callback bound by the latest render.
pub struct ToggleButton {
    handler: Option<Box<dyn Fn() + Send>>,
}

impl ToggleButton {
    /// The fixed button label.
    pub const LABEL: &'static str = "toggle theme";

    pub fn new() -> Self {
        Self { handler: None }
    }

    pub fn label(&self) -> &'static str {
        Self::LABEL
    }

    /// Bind the press behavior. Each render rebinds.
    pub fn bind(&mut self, handler: Box<dyn Fn() + Send>) {
        self.handler = Some(handler);
    }

    /// Press the button.
    ///
    /// A no-op until the first render has bound a handler.
    pub fn press(&self) {
        if let Some(handler) = &self.handler {
            handler();
        }
    }
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self::new()
    }
}

/// The surface the demo renders to: one [`ThemeElement`] and one
/// [`ToggleButton`], the document-body analogue.
///
/// Rendering mirrors the props' color fields into the element (which derives
/// its own text content) and rebinds the button.
pub struct DemoSurface {
    element: ThemeElement,
    button: ToggleButton,
}

impl DemoSurface {
    pub fn new() -> Self {
        let mut element = ThemeElement::new();
        element.connected();
        Self {
            element,
            button: ToggleButton::new(),
        }
    }

    pub fn element(&self) -> &ThemeElement {
        &self.element
    }

    pub fn button(&self) -> &ToggleButton {
        &self.button
    }

    /// Press the toggle button.
    pub fn press_toggle(&self) {
        self.button.press();
    }
}

impl Default for DemoSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<SwatchProps> for DemoSurface {
    fn render(&mut self, props: SwatchProps) {
        self.element.set_background_color(props.background_color);
        self.element.set_color(props.color);
        self.button.bind(props.on_toggle);
    }
}

/// Wire the default theme, the demo logic, and a fresh [`DemoSurface`] into
/// a runtime, ready to [`run`](StoreRuntime::run).
pub fn mount_demo() -> StoreRuntime<ThemeEvent, Theme, SwatchProps, ThemeApp, DemoSurface> {
    StoreRuntime::new(Theme::default(), ThemeApp, DemoSurface::new())
}

/// Mount the demo and run it for the session.
///
/// Blocks the calling thread; presses arrive through callbacks bound to the
/// surface by each render.
pub fn run_demo() {
    let mut runtime = mount_demo();
    runtime.run();
}

#![cfg_attr(feature = "no_std", no_std)]

//! A reactive theme store wired to a custom swatch element, with `no_std` support.
//!
//! One observable flag (`dark`), two derived colors, a swatch element that
//! mirrors those colors into its inline style and text content, and a button
//! whose only effect is toggling the flag. The crate carries the small
//! synchronous store runtime the wiring rides on: events flow through a
//! channel into a reducer, the view derives props from the model, and a
//! renderer applies props to a concrete surface.
//!
//! ## Example
//!
//! ```rust
//! use theme_swatch::{TestRenderer, TestStoreRuntime, Theme, ThemeApp};
//!
//! let renderer = TestRenderer::new();
//! let runtime = TestStoreRuntime::new(Theme::default(), ThemeApp, renderer.clone());
//! let mut driver = runtime.run();
//!
//! // The initial render mirrors the light palette.
//! renderer.with_renders(|renders| {
//!     assert_eq!(renders[0].background_color, "#ddd");
//!     assert_eq!(renders[0].color, "#000");
//!
//!     // Props embed the toggle callback; pressing it enqueues an event.
//!     (renders[0].on_toggle)();
//! });
//!
//! driver.process_events();
//!
//! renderer.with_renders(|renders| {
//!     assert_eq!(renders[1].background_color, "#444");
//!     assert_eq!(renders[1].color, "#fff");
//! });
//! ```
//!
//! For a session-long run against the built-in surface, see [`run_demo`].

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod demo;
mod effect;
mod element;
mod emitter;
mod logic;
mod renderer;
mod runtime;
mod theme;

// Public re-exports
pub use demo::{mount_demo, run_demo, DemoSurface, SwatchProps, ThemeApp, ThemeEvent, ToggleButton};
pub use effect::Effect;
pub use element::{InlineStyle, ThemeElement};
pub use emitter::Emitter;
pub use logic::StoreLogic;
pub use renderer::Renderer;
pub use runtime::StoreRuntime;
pub use theme::{Palette, Theme};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{TestStoreDriver, TestStoreRuntime};

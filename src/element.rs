//! The custom swatch element.

#[cfg(feature = "no_std")]
use alloc::{
    format,
    string::{String, ToString},
};

/// Inline style owned by a [`ThemeElement`].
///
/// The color fields reflect whatever was last assigned; the remaining fields
/// are static presentation applied once on [`ThemeElement::connected`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineStyle {
    pub background_color: String,
    pub color: String,
    pub border: String,
    pub padding: String,
    pub font_family: String,
}

impl Default for InlineStyle {
    fn default() -> Self {
        // Placeholder colors, visible until a binding overwrites them
        Self {
            background_color: "yellow".to_string(),
            color: "black".to_string(),
            border: String::new(),
            padding: String::new(),
            font_family: String::new(),
        }
    }
}

/// A swatch element that renders two color attributes as its inline
/// background, inline text color, and text content.
///
/// The element is unaware of the theme store; its color fields are mirrored
/// from outside (see [`DemoSurface`](crate::DemoSurface)) and it derives its
/// own text content of the form `"<color>/<background_color>"` whenever a
/// color changes.
///
/// ```rust
/// use theme_swatch::ThemeElement;
///
/// let mut element = ThemeElement::new();
/// element.connected();
/// assert_eq!(element.content(), "black/yellow");
///
/// element.set_background_color("#ddd");
/// element.set_color("#000");
/// assert_eq!(element.content(), "#000/#ddd");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeElement {
    style: InlineStyle,
    content: String,
}

impl ThemeElement {
    /// The fixed name the element is registered under.
    pub const TAG: &'static str = "theme-swatch";

    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the element is attached to a surface.
    ///
    /// Applies the static inline presentation and derives the initial text
    /// content from the placeholder colors.
    pub fn connected(&mut self) {
        self.style.border = "1px solid black".to_string();
        self.style.padding = "5px".to_string();
        self.style.font_family = "monospace".to_string();
        self.refresh_content();
    }

    /// Assign the inline background color.
    pub fn set_background_color(&mut self, value: impl Into<String>) {
        self.style.background_color = value.into();
        self.refresh_content();
    }

    /// Assign the inline text color.
    pub fn set_color(&mut self, value: impl Into<String>) {
        self.style.color = value.into();
        self.refresh_content();
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// The rendered text content, `"<color>/<background_color>"`.
    pub fn content(&self) -> &str {
        &self.content
    }

    fn refresh_content(&mut self) {
        self.content = format!("{}/{}", self.style.color, self.style.background_color);
    }
}

//! Theme model: one observable flag, two derived colors.

/// Background/foreground color pair for one theme mode.
///
/// There are exactly two values: [`Palette::light`] and [`Palette::dark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Background color.
    pub background: &'static str,
    /// Text color.
    pub color: &'static str,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#ddd",
            color: "#000",
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#444",
            color: "#fff",
        }
    }

    /// Select the palette for the given mode.
    pub fn for_dark(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// The theme store's model.
///
/// One persisted attribute, `dark` (default `false`). The colors are derived
/// on demand and never stored, so they cannot go stale.
///
/// ```rust
/// use theme_swatch::Theme;
///
/// let theme = Theme::default();
/// assert!(!theme.dark);
/// assert_eq!(theme.background_color(), "#ddd");
///
/// // Toggling twice restores the original state.
/// assert_eq!(theme.toggled().toggled(), theme);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    /// Whether dark mode is active.
    pub dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// A copy of this theme with `dark` negated.
    pub fn toggled(&self) -> Self {
        Self { dark: !self.dark }
    }

    /// The palette derived from the current mode.
    pub fn palette(&self) -> Palette {
        Palette::for_dark(self.dark)
    }

    /// Derived background color: `"#ddd"` light, `"#444"` dark.
    pub fn background_color(&self) -> &'static str {
        self.palette().background
    }

    /// Derived text color: `"#000"` light, `"#fff"` dark.
    pub fn color(&self) -> &'static str {
        self.palette().color
    }
}

use textsel_traits::SpanStyle;

/// Paragraph direction used when laying out text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseDirection {
    /// First strong character of each paragraph decides, Ltr when there is none
    #[default]
    Auto,
    Ltr,
    Rtl,
}

/// Options used when constructing a [`GridTextLayout`](crate::GridTextLayout)
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Advance of every non-newline char
    pub glyph_width: f64,
    /// Height of every line
    pub line_height: f64,
    pub base_direction: BaseDirection,
    /// Style attached to the whole text when laying out a plain string
    pub span_style: Option<SpanStyle>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            glyph_width: 20.0,
            line_height: 20.0,
            base_direction: BaseDirection::Auto,
            span_style: None,
        }
    }
}

impl LayoutConfig {
    /// Square glyph cells of `size`, the shape a monospace test font produces
    pub fn monospace(size: f64) -> Self {
        Self {
            glyph_width: size,
            line_height: size,
            ..Default::default()
        }
    }

    pub fn with_base_direction(mut self, base_direction: BaseDirection) -> Self {
        self.base_direction = base_direction;
        self
    }

    pub fn with_span_style(mut self, span_style: SpanStyle) -> Self {
        self.span_style = Some(span_style);
        self
    }
}

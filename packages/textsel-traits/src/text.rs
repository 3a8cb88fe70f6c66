//! Styled text snapshots and offset ranges.
//!
//! All offsets are indices into the sequence of `char`s of a string, not byte
//! offsets. A valid offset lies in `[0, len]`.

/// A pair of offsets. `start` may be greater than `end` for a reversed range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    #[inline]
    pub fn collapsed(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn reversed(&self) -> bool {
        self.start > self.end
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.start.abs_diff(self.end)
    }

    /// `true` if `offset` lies in `[min, max)`
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.min() && offset < self.max()
    }
}

/// Character level styling attached to a range of an [`AnnotatedString`].
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct SpanStyle {
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
}

impl SpanStyle {
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

/// A [`SpanStyle`] applied to `[start, end)`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleRange {
    pub style: SpanStyle,
    pub start: usize,
    pub end: usize,
}

/// Text with style ranges. Two strings are equal when both text and styles match.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct AnnotatedString {
    text: String,
    span_styles: Vec<StyleRange>,
}

impl AnnotatedString {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            span_styles: Vec::new(),
        }
    }

    /// Text with a single style covering all of it
    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            span_styles: vec![StyleRange {
                style,
                start: 0,
                end,
            }],
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn span_styles(&self) -> &[StyleRange] {
        &self.span_styles
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Copy of `[start, end)`, with style ranges clipped and shifted.
    ///
    /// Offsets past the end are clamped, and a reversed range is normalized.
    pub fn sub_sequence(&self, start: usize, end: usize) -> AnnotatedString {
        let len = self.len();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        let byte_start = char_to_byte(&self.text, start);
        let byte_end = char_to_byte(&self.text, end);

        let span_styles = self
            .span_styles
            .iter()
            .filter_map(|range| {
                let clipped_start = range.start.max(start);
                let clipped_end = range.end.min(end);
                (clipped_start < clipped_end).then(|| StyleRange {
                    style: range.style.clone(),
                    start: clipped_start - start,
                    end: clipped_end - start,
                })
            })
            .collect();

        AnnotatedString {
            text: self.text[byte_start..byte_end].to_string(),
            span_styles,
        }
    }

    /// Appends `other`, shifting its style ranges past the current end.
    pub fn append(&mut self, other: &AnnotatedString) {
        let shift = self.len();
        self.text.push_str(&other.text);
        self.span_styles
            .extend(other.span_styles.iter().map(|range| StyleRange {
                style: range.style.clone(),
                start: range.start + shift,
                end: range.end + shift,
            }));
    }
}

impl From<&str> for AnnotatedString {
    fn from(text: &str) -> Self {
        AnnotatedString::new(text)
    }
}

fn char_to_byte(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

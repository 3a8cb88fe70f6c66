//! The layout oracle a selectable widget consults.
//!
//! Layout itself is owned by the host. The selection engine only asks questions of
//! an immutable snapshot through [`TextLayoutResult`].

use kurbo::{Point, Rect, Size};
use crate::text::{AnnotatedString, TextRange};

/// Bidi-resolved direction of a paragraph or of the run around an offset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ResolvedTextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl ResolvedTextDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == ResolvedTextDirection::Rtl
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            ResolvedTextDirection::Ltr => ResolvedTextDirection::Rtl,
            ResolvedTextDirection::Rtl => ResolvedTextDirection::Ltr,
        }
    }

    /// Direction of an even (Ltr) or odd (Rtl) embedding level
    #[inline]
    pub fn from_level(level: u8) -> Self {
        if level % 2 == 1 {
            ResolvedTextDirection::Rtl
        } else {
            ResolvedTextDirection::Ltr
        }
    }
}

/// Immutable result of laying out one piece of text.
///
/// Offsets are char indices into [`text`](Self::text). Implementations must accept
/// any offset in `[0, text_len]` for the direction, word, line and caret queries;
/// [`bounding_box`](Self::bounding_box) is only asked about offsets that index a
/// character.
pub trait TextLayoutResult {
    /// The laid out text
    fn text(&self) -> &AnnotatedString;

    /// Number of chars in [`text`](Self::text)
    fn text_len(&self) -> usize {
        self.text().len()
    }

    /// Size of the laid out box, origin at `(0, 0)`
    fn size(&self) -> Size;

    /// Nearest caret offset to `position`
    fn offset_for_position(&self, position: Point) -> usize;

    /// Box of the glyph(s) for the char at `offset`
    fn bounding_box(&self, offset: usize) -> Rect;

    /// Direction of the paragraph containing `offset`
    fn paragraph_direction(&self, offset: usize) -> ResolvedTextDirection;

    /// Direction of the bidi run containing the char at `offset`
    fn bidi_run_direction(&self, offset: usize) -> ResolvedTextDirection;

    /// The word around `offset` as `[start, end)`
    fn word_boundary(&self, offset: usize) -> TextRange;

    /// Caret x for `offset`.
    ///
    /// With `use_primary_direction` the caret is placed as if inserting text in the
    /// paragraph direction, otherwise in the opposite direction. The two differ only
    /// at bidi run boundaries.
    fn horizontal_position(&self, offset: usize, use_primary_direction: bool) -> f64;

    /// Index of the line holding `offset`
    fn line_for_offset(&self, offset: usize) -> usize;

    /// Bottom edge of `line`
    fn line_bottom(&self, line: usize) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_level() {
        assert_eq!(ResolvedTextDirection::from_level(0), ResolvedTextDirection::Ltr);
        assert_eq!(ResolvedTextDirection::from_level(1), ResolvedTextDirection::Rtl);
        assert_eq!(ResolvedTextDirection::from_level(2), ResolvedTextDirection::Ltr);
        assert_eq!(
            ResolvedTextDirection::Rtl.opposite(),
            ResolvedTextDirection::Ltr
        );
    }
}

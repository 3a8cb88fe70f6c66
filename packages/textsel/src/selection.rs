//! Selection value types.

use textsel_traits::{ResolvedTextDirection, TextRange};

use crate::id::SelectableId;

/// One end of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AnchorInfo {
    /// Direction of the text on the selected side of the anchor
    pub direction: ResolvedTextDirection,
    /// Char offset into the owning selectable's text
    pub offset: usize,
    /// Widget the offset belongs to
    pub selectable: SelectableId,
}

impl AnchorInfo {
    pub fn new(direction: ResolvedTextDirection, offset: usize, selectable: SelectableId) -> Self {
        Self {
            direction,
            offset,
            selectable,
        }
    }
}

/// A resolved selection, possibly spanning several selectables.
///
/// `start` and `end` name the handles the user dragged, not reading order. When the
/// start handle sits after the end handle in reading order `handles_crossed` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    pub start: AnchorInfo,
    pub end: AnchorInfo,
    #[serde(default)]
    pub handles_crossed: bool,
}

impl Selection {
    pub fn new(start: AnchorInfo, end: AnchorInfo, handles_crossed: bool) -> Self {
        Self {
            start,
            end,
            handles_crossed,
        }
    }

    /// Extends this selection with the selection of the next selectable in reading
    /// order.
    ///
    /// Not crossed, the end moves to `other`'s end. Crossed, the start handle is the
    /// one further along so it takes `other`'s start.
    pub fn merge(self, other: Option<&Selection>) -> Selection {
        let Some(other) = other else {
            return self;
        };
        if self.handles_crossed {
            Selection {
                start: other.start,
                ..self
            }
        } else {
            Selection {
                end: other.end,
                ..self
            }
        }
    }

    /// The anchor offsets as a possibly reversed range
    pub fn to_text_range(&self) -> TextRange {
        TextRange::new(self.start.offset, self.end.offset)
    }

    /// Both anchors in the same selectable at the same offset
    pub fn is_collapsed(&self) -> bool {
        self.start.selectable == self.end.selectable && self.start.offset == self.end.offset
    }
}

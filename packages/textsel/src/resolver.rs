//! Turns pointer coordinates into a [`Selection`] for one selectable.
//!
//! Everything here is a pure function of the layout snapshot, the two coordinates
//! and the previous selection. Coordinates are in the widget's local space.

use textsel_traits::{Point, ResolvedTextDirection, TextLayoutResult};

use crate::id::SelectableId;
use crate::selection::{AnchorInfo, Selection};

/// Where a coordinate landed relative to the laid out text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitPosition {
    /// Before the first char in reading order
    Before,
    Inside(usize),
    /// After the last char in reading order
    After,
}

impl HitPosition {
    fn offset(self, len: usize) -> usize {
        match self {
            HitPosition::Before => 0,
            HitPosition::Inside(offset) => offset,
            HitPosition::After => len,
        }
    }
}

fn hit_test(layout: &dyn TextLayoutResult, point: Point) -> HitPosition {
    let size = layout.size();
    let len = layout.text_len();

    if point.y < 0.0 {
        return HitPosition::Before;
    }
    if point.y >= size.height {
        return HitPosition::After;
    }
    if point.x >= 0.0 && point.x < size.width {
        return HitPosition::Inside(layout.offset_for_position(point).min(len));
    }

    // Beside the text: the paragraph start side comes first in reading order.
    let line_start = layout.offset_for_position(Point::new(0.0, point.y)).min(len);
    let left_side = point.x < 0.0;
    match (layout.paragraph_direction(line_start), left_side) {
        (ResolvedTextDirection::Ltr, true) | (ResolvedTextDirection::Rtl, false) => {
            HitPosition::Before
        }
        _ => HitPosition::After,
    }
}

/// Direction of the char at `offset`, the first char a selection starting there covers
fn direction_after(layout: &dyn TextLayoutResult, offset: usize) -> ResolvedTextDirection {
    let last = layout.text_len().saturating_sub(1);
    layout.bidi_run_direction(offset.min(last))
}

/// Direction of the char before `offset`, the last char a selection ending there covers
fn direction_before(layout: &dyn TextLayoutResult, offset: usize) -> ResolvedTextDirection {
    direction_after(layout, offset.saturating_sub(1))
}

fn anchors(
    layout: &dyn TextLayoutResult,
    start: usize,
    end: usize,
    selectable: SelectableId,
) -> (AnchorInfo, AnchorInfo) {
    let (start_direction, end_direction) = if start <= end {
        (direction_after(layout, start), direction_before(layout, end))
    } else {
        (direction_before(layout, start), direction_after(layout, end))
    };
    (
        AnchorInfo::new(start_direction, start, selectable),
        AnchorInfo::new(end_direction, end, selectable),
    )
}

fn caret_x(layout: &dyn TextLayoutResult, anchor: &AnchorInfo) -> f64 {
    let use_primary = anchor.direction == layout.paragraph_direction(anchor.offset);
    layout.horizontal_position(anchor.offset, use_primary)
}

/// Whether the start handle lies after the end handle in reading order.
///
/// A handle clamped to a border is outside the text, so the border side alone
/// orders it, even when both anchors share an offset. Within one direction
/// reading order is logical order. Across a run boundary the handles are ordered
/// by line, then by caret position along the line.
fn is_crossed(
    layout: &dyn TextLayoutResult,
    start: &AnchorInfo,
    end: &AnchorInfo,
    start_hit: HitPosition,
    end_hit: HitPosition,
) -> bool {
    match (start_hit, end_hit) {
        (HitPosition::After, _) | (_, HitPosition::Before) => return true,
        (HitPosition::Before, _) | (_, HitPosition::After) => return false,
        (HitPosition::Inside(_), HitPosition::Inside(_)) => {}
    }
    if start.offset == end.offset {
        return false;
    }
    let logical = start.offset > end.offset;
    if start.direction == end.direction {
        return logical;
    }

    let start_line = layout.line_for_offset(start.offset);
    let end_line = layout.line_for_offset(end.offset);
    if start_line != end_line {
        return start_line > end_line;
    }

    let start_x = caret_x(layout, start);
    let end_x = caret_x(layout, end);
    if start_x == end_x {
        logical
    } else if layout.paragraph_direction(start.offset).is_rtl() {
        start_x < end_x
    } else {
        start_x > end_x
    }
}

/// Resolves the selection of one selectable for a drag from `start` to `end`.
///
/// - `word_based` snaps both ends outward to word boundaries.
/// - With a `previous` selection and `is_start_handle` set, only the dragged
///   handle moves; the other end stays pinned and the selection never collapses.
///
/// Returns `None` when both coordinates fall on the same side of the text.
pub fn get_text_selection_info(
    layout: &dyn TextLayoutResult,
    selection_coordinates: (Point, Point),
    selectable: SelectableId,
    word_based: bool,
    previous: Option<&Selection>,
    is_start_handle: Option<bool>,
) -> Option<Selection> {
    let (start_point, end_point) = selection_coordinates;

    if let (false, Some(previous), Some(is_start_handle)) = (word_based, previous, is_start_handle)
    {
        let pinned = if is_start_handle {
            previous.end
        } else {
            previous.start
        };
        if pinned.selectable == selectable {
            let point = if is_start_handle { start_point } else { end_point };
            return Some(drag_handle(layout, point, selectable, previous, is_start_handle));
        }
    }

    let start_hit = hit_test(layout, start_point);
    let end_hit = hit_test(layout, end_point);
    log::trace!("selection hit {start_hit:?} .. {end_hit:?} in {selectable}");

    if matches!(
        (start_hit, end_hit),
        (HitPosition::Before, HitPosition::Before) | (HitPosition::After, HitPosition::After)
    ) {
        return None;
    }

    let len = layout.text_len();
    let (start, end) = anchors(layout, start_hit.offset(len), end_hit.offset(len), selectable);
    let handles_crossed = is_crossed(layout, &start, &end, start_hit, end_hit);

    if !word_based {
        return Some(Selection::new(start, end, handles_crossed));
    }

    let last = len.saturating_sub(1);
    let start_word = layout.word_boundary(start.offset.min(last));
    let end_word = layout.word_boundary(end.offset.min(last));
    let (start_offset, end_offset) = if handles_crossed {
        (start_word.end, end_word.start)
    } else {
        (start_word.start, end_word.end)
    };
    log::trace!("word selection {start_offset}..{end_offset}, crossed: {handles_crossed}");

    let (start, end) = anchors(layout, start_offset, end_offset, selectable);
    Some(Selection::new(start, end, handles_crossed))
}

/// Moves one handle of `previous` while the other stays pinned.
fn drag_handle(
    layout: &dyn TextLayoutResult,
    point: Point,
    selectable: SelectableId,
    previous: &Selection,
    is_start_handle: bool,
) -> Selection {
    let len = layout.text_len();
    let (pinned, dragged) = if is_start_handle {
        (previous.end, previous.start)
    } else {
        (previous.start, previous.end)
    };

    let hit = hit_test(layout, point);
    let mut offset = hit.offset(len);
    if dragged.selectable == selectable && dragged.offset == offset {
        return *previous;
    }

    if offset == pinned.offset {
        // Landing on the pinned anchor passes through it by one char.
        let one_char =
            dragged.selectable == selectable && dragged.offset.abs_diff(pinned.offset) == 1;
        let was_before_pinned = is_start_handle != previous.handles_crossed;
        let passed = if was_before_pinned {
            Some(pinned.offset + 1).filter(|&next| next <= len)
        } else {
            pinned.offset.checked_sub(1)
        };
        match passed {
            Some(passed) if !one_char => offset = passed,
            _ => return *previous,
        }
    }

    let direction = if offset < pinned.offset {
        direction_after(layout, offset)
    } else {
        direction_before(layout, offset)
    };
    let moved = AnchorInfo::new(direction, offset, selectable);
    let pinned_hit = HitPosition::Inside(pinned.offset);
    let (start, end, start_hit, end_hit) = if is_start_handle {
        (moved, pinned, hit, pinned_hit)
    } else {
        (pinned, moved, pinned_hit, hit)
    };
    let handles_crossed = is_crossed(layout, &start, &end, start_hit, end_hit);
    log::trace!(
        "dragged {} handle to {offset}, crossed: {handles_crossed}",
        if is_start_handle { "start" } else { "end" }
    );

    Selection::new(start, end, handles_crossed)
}

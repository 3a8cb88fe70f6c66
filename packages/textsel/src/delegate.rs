//! Selectable adapter for a single text widget.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use textsel_traits::{AnnotatedString, LayoutCoordinates, Point, Rect, TextLayoutResult};

use crate::id::SelectableId;
use crate::resolver::get_text_selection_info;
use crate::selectable::Selectable;
use crate::selection::Selection;

/// Receives the resolved selection of one widget whenever it changes
pub type SelectionRangeUpdate = Box<dyn Fn(Option<&Selection>)>;
/// Current on-screen placement of the widget, `None` before it is placed
pub type CoordinatesCallback = Box<dyn Fn() -> Option<Rc<dyn LayoutCoordinates>>>;
/// Current layout of the widget, `None` before it is laid out
pub type LayoutResultCallback = Box<dyn Fn() -> Option<Rc<dyn TextLayoutResult>>>;

/// [`Selectable`] backed by host callbacks.
///
/// Coordinates and layout are pulled on every query so the delegate always sees
/// the host's latest snapshot.
pub struct MultiWidgetSelectionDelegate {
    id: SelectableId,
    selection_range_update: SelectionRangeUpdate,
    coordinates_callback: CoordinatesCallback,
    layout_result_callback: LayoutResultCallback,
    /// This widget's part of the last resolved selection
    last_selection: Cell<Option<Selection>>,
}

impl MultiWidgetSelectionDelegate {
    pub fn new(
        selection_range_update: impl Fn(Option<&Selection>) + 'static,
        coordinates_callback: impl Fn() -> Option<Rc<dyn LayoutCoordinates>> + 'static,
        layout_result_callback: impl Fn() -> Option<Rc<dyn TextLayoutResult>> + 'static,
    ) -> Self {
        Self {
            id: SelectableId::next(),
            selection_range_update: Box::new(selection_range_update),
            coordinates_callback: Box::new(coordinates_callback),
            layout_result_callback: Box::new(layout_result_callback),
            last_selection: Cell::new(None),
        }
    }

    /// Uses an id minted by the host instead of a fresh one
    pub fn with_id(mut self, id: SelectableId) -> Self {
        self.id = id;
        self
    }

    fn attached_coordinates(&self) -> Option<Rc<dyn LayoutCoordinates>> {
        (self.coordinates_callback)().filter(|coordinates| coordinates.is_attached())
    }

    fn layout(&self) -> Option<Rc<dyn TextLayoutResult>> {
        (self.layout_result_callback)()
    }
}

impl fmt::Debug for MultiWidgetSelectionDelegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiWidgetSelectionDelegate")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Selectable for MultiWidgetSelectionDelegate {
    fn id(&self) -> SelectableId {
        self.id
    }

    fn get_selection(
        &self,
        start: Point,
        end: Point,
        container: &dyn LayoutCoordinates,
        long_press: bool,
        previous: Option<&Selection>,
        is_start_handle: Option<bool>,
    ) -> Option<Selection> {
        let Some(coordinates) = self.attached_coordinates() else {
            log::debug!("selectable {} has no attached coordinates", self.id);
            return None;
        };
        let Some(layout) = self.layout() else {
            log::debug!("selectable {} has no layout", self.id);
            return None;
        };

        let start = coordinates.local_position_of(container, start);
        let end = coordinates.local_position_of(container, end);
        let selection = get_text_selection_info(
            layout.as_ref(),
            (start, end),
            self.id,
            long_press,
            previous,
            is_start_handle,
        );

        // `previous` may be a merge across widgets, so compare with our own part.
        if self.last_selection.replace(selection) != selection {
            (self.selection_range_update)(selection.as_ref());
        }
        selection
    }

    fn get_handle_position(&self, selection: &Selection, is_start_handle: bool) -> Point {
        let anchor = if is_start_handle {
            selection.start
        } else {
            selection.end
        };
        if anchor.selectable != self.id {
            return Point::ZERO;
        }
        if self.attached_coordinates().is_none() {
            return Point::ZERO;
        }
        let Some(layout) = self.layout() else {
            return Point::ZERO;
        };

        let len = layout.text_len();
        let offset = anchor.offset.min(len);
        // The handle hugs the char inside the selection.
        let checked = if is_start_handle != selection.handles_crossed {
            offset
        } else {
            offset.saturating_sub(1)
        };
        let run_direction = layout.bidi_run_direction(checked.min(len.saturating_sub(1)));
        let use_primary = run_direction == layout.paragraph_direction(offset);

        Point::new(
            layout.horizontal_position(offset, use_primary),
            layout.line_bottom(layout.line_for_offset(offset)),
        )
    }

    fn get_layout_coordinates(&self) -> Option<Rc<dyn LayoutCoordinates>> {
        self.attached_coordinates()
    }

    fn get_text(&self) -> AnnotatedString {
        self.layout()
            .map(|layout| layout.text().clone())
            .unwrap_or_default()
    }

    fn get_bounding_box(&self, offset: isize) -> Rect {
        let Some(layout) = self.layout() else {
            return Rect::ZERO;
        };
        let Some(last) = layout.text_len().checked_sub(1) else {
            return Rect::ZERO;
        };
        let offset = usize::try_from(offset).unwrap_or(0).min(last);
        layout.bounding_box(offset)
    }
}

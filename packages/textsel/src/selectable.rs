use std::rc::Rc;

use textsel_traits::{AnnotatedString, LayoutCoordinates, Point, Rect};

use crate::id::SelectableId;
use crate::selection::Selection;

/// A widget whose text takes part in selection.
pub trait Selectable {
    fn id(&self) -> SelectableId;

    /// Resolves the part of this widget covered by a drag from `start` to `end`.
    ///
    /// Both points are in `container` space. `long_press` snaps to words.
    /// `previous` and `is_start_handle` describe an in-progress handle drag; with
    /// `is_start_handle == None` the selection is resolved from scratch.
    ///
    /// Returns `None` when this widget is not covered at all.
    fn get_selection(
        &self,
        start: Point,
        end: Point,
        container: &dyn LayoutCoordinates,
        long_press: bool,
        previous: Option<&Selection>,
        is_start_handle: Option<bool>,
    ) -> Option<Selection>;

    /// Position of a handle in this widget's local space, [`Point::ZERO`] when the
    /// handle is not owned by this widget or the widget is not laid out
    fn get_handle_position(&self, selection: &Selection, is_start_handle: bool) -> Point;

    fn get_layout_coordinates(&self) -> Option<Rc<dyn LayoutCoordinates>>;

    /// Full text of the widget, empty when it is not laid out
    fn get_text(&self) -> AnnotatedString;

    /// Box of the char at `offset`, clamped into the text
    fn get_bounding_box(&self, offset: isize) -> Rect;
}

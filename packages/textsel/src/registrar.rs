//! Registry of the selectables inside one selection container.

use std::cmp::Ordering;
use std::rc::Rc;

use textsel_traits::{AnnotatedString, LayoutCoordinates, Point};

use crate::error::SelectionError;
use crate::id::SelectableId;
use crate::selectable::Selectable;
use crate::selection::Selection;

/// Holds every selectable of a container and combines their selections.
#[derive(Default)]
pub struct SelectionRegistrar {
    selectables: Vec<Rc<dyn Selectable>>,
    sorted: bool,
}

impl SelectionRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        selectable: Rc<dyn Selectable>,
    ) -> Result<SelectableId, SelectionError> {
        let id = selectable.id();
        if self.get(id).is_some() {
            return Err(SelectionError::DuplicateSelectable(id));
        }
        self.selectables.push(selectable);
        self.sorted = false;
        log::debug!("subscribed selectable {id}, {} registered", self.selectables.len());
        Ok(id)
    }

    pub fn unsubscribe(&mut self, id: SelectableId) -> Result<Rc<dyn Selectable>, SelectionError> {
        let index = self
            .selectables
            .iter()
            .position(|selectable| selectable.id() == id)
            .ok_or(SelectionError::UnknownSelectable(id))?;
        log::debug!("unsubscribed selectable {id}");
        Ok(self.selectables.remove(index))
    }

    pub fn get(&self, id: SelectableId) -> Option<&Rc<dyn Selectable>> {
        self.selectables
            .iter()
            .find(|selectable| selectable.id() == id)
    }

    pub fn len(&self) -> usize {
        self.selectables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectables.is_empty()
    }

    /// Orders the selectables by where they sit in `container`, top to bottom then
    /// left to right. Selectables that are not placed go last.
    pub fn sort(&mut self, container: &dyn LayoutCoordinates) -> &[Rc<dyn Selectable>] {
        if !self.sorted {
            let position = |selectable: &Rc<dyn Selectable>| {
                selectable.get_layout_coordinates().map(|coordinates| {
                    container.local_position_of(coordinates.as_ref(), Point::ZERO)
                })
            };
            self.selectables.sort_by(|a, b| match (position(a), position(b)) {
                (Some(a), Some(b)) => a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
            self.sorted = true;
        }
        &self.selectables
    }

    /// Forgets the current order, e.g. after the host moved widgets around
    pub fn invalidate_order(&mut self) {
        self.sorted = false;
    }

    /// Resolves the selection over every selectable in reading order.
    ///
    /// Each selectable resolves its own part; the parts are folded with
    /// [`Selection::merge`]. `None` when no selectable is covered.
    pub fn merge_selections(
        &mut self,
        start: Point,
        end: Point,
        container: &dyn LayoutCoordinates,
        long_press: bool,
        previous: Option<&Selection>,
        is_start_handle: Option<bool>,
    ) -> Option<Selection> {
        self.sort(container)
            .iter()
            .filter_map(|selectable| {
                selectable.get_selection(
                    start,
                    end,
                    container,
                    long_press,
                    previous,
                    is_start_handle,
                )
            })
            .fold(None, |merged: Option<Selection>, selection| {
                Some(match merged {
                    Some(merged) => merged.merge(Some(&selection)),
                    None => selection,
                })
            })
    }

    /// Text covered by `selection` across all selectables, in reading order
    pub fn selected_text(
        &mut self,
        selection: &Selection,
        container: &dyn LayoutCoordinates,
    ) -> AnnotatedString {
        let (first, last) = if selection.handles_crossed {
            (selection.end, selection.start)
        } else {
            (selection.start, selection.end)
        };

        let mut text = AnnotatedString::default();
        let mut inside = false;
        for selectable in self.sort(container) {
            let id = selectable.id();
            if id == first.selectable {
                inside = true;
            }
            if !inside {
                continue;
            }

            let full = selectable.get_text();
            let start = if id == first.selectable { first.offset } else { 0 };
            let end = if id == last.selectable { last.offset } else { full.len() };
            text.append(&full.sub_sequence(start, end));

            if id == last.selectable {
                break;
            }
        }
        text
    }
}

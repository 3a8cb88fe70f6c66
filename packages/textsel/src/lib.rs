//! Text selection across one or more laid out text widgets.
//!
//! A host registers every selectable widget with a [`SelectionRegistrar`]. Each
//! widget is wrapped in a [`MultiWidgetSelectionDelegate`], which pulls its layout
//! and on-screen coordinates lazily from the host and turns pointer coordinates
//! into a [`Selection`] through [`get_text_selection_info`].
//!
//! Selections carry the resolved bidi direction of both anchors and whether the
//! handles crossed, so hosts can place handles correctly in mixed Ltr/Rtl text.

mod delegate;
mod error;
mod id;
mod registrar;
mod resolver;
mod selectable;
mod selection;

pub use delegate::{
    CoordinatesCallback, LayoutResultCallback, MultiWidgetSelectionDelegate,
    SelectionRangeUpdate,
};
pub use error::SelectionError;
pub use id::SelectableId;
pub use registrar::SelectionRegistrar;
pub use resolver::get_text_selection_info;
pub use selectable::Selectable;
pub use selection::{AnchorInfo, Selection};

pub use textsel_traits as traits;

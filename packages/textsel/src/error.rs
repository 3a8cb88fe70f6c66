use crate::id::SelectableId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Selectable {0} is already registered")]
    DuplicateSelectable(SelectableId),

    #[error("Selectable {0} is not registered")]
    UnknownSelectable(SelectableId),
}

use multiview_common::{LayoutType, Stream, StreamRef};

#[derive(Debug, Clone, PartialEq)]
pub enum MultiviewCommand {
    Add(Stream),
    Remove(StreamRef),
    Swap(usize, usize),
    Promote(StreamRef),
    SetLayout(LayoutType),
    SetMobile(bool),
    FocusNext,
    FocusPrev,
    ResetGrid,
    Clear,
}

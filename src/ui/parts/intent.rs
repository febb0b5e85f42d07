use crate::services::Part;
use crate::ui::mvi::Intent;

use super::state::{Alert, PageRequest, PartsSort};

#[derive(Debug, Clone)]
pub enum PartsIntent {
    InputChanged(String),
    /// Start a new search generation for `query`: the list and page reset.
    SearchRequested { query: String },
    /// Ask for the next page; ignored while loading or when no more pages.
    LoadMoreRequested,
    PageLoaded {
        request: PageRequest,
        items: Vec<Part>,
        has_more: bool,
    },
    PageFailed { request: PageRequest, message: String },
    SortChanged(Option<PartsSort>),
    SelectNext,
    SelectPrevious,
    DetailRequested { part: Part },
    DetailLoaded { part: Part },
    DetailFailed { part_id: String },
    DetailClosed,
    AddedToCart { quantity: u32 },
    ShowAlert(Alert),
    DismissAlert,
    /// Back to an empty screen; the generation counter keeps counting.
    Reset,
}

impl Intent for PartsIntent {}

use crate::services::{Part, SortBy, SortOrder};
use crate::ui::mvi::UiState;

/// A page fetch that belongs to one search generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartsSort {
    pub by: SortBy,
    pub order: SortOrder,
}

impl PartsSort {
    /// Next entry in the sort menu; `None` means backend default order.
    pub fn cycle(current: Option<PartsSort>) -> Option<PartsSort> {
        use SortBy::{Name, PartNumber, Price};
        use SortOrder::{Asc, Desc};

        let order = [
            (Name, Asc),
            (Name, Desc),
            (Price, Asc),
            (Price, Desc),
            (PartNumber, Asc),
        ];
        let next = match current {
            None => Some(0),
            Some(sort) => order
                .iter()
                .position(|(by, ord)| *by == sort.by && *ord == sort.order)
                .map(|i| i + 1)
                .filter(|i| *i < order.len()),
        };
        next.map(|i| PartsSort {
            by: order[i].0,
            order: order[i].1,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartsState {
    /// Pages received so far, in page order.
    pub items: Vec<Part>,
    /// Last page appended; 0 before the first page arrives.
    pub page: u32,
    pub has_more: bool,
    /// Search text as typed.
    pub input: String,
    /// Search text of the current generation.
    pub query: String,
    pub sort: Option<PartsSort>,
    /// Bumped by every new search; older responses are dropped.
    pub generation: u64,
    pub in_flight: Option<PageRequest>,
    pub error: Option<String>,
    pub selected: usize,
    /// Part shown in the detail panel.
    pub detail: Option<Part>,
    pub detail_loading: bool,
    /// Quantity added to the cart from this screen.
    pub cart_count: u32,
    pub alert: Option<Alert>,
}

impl UiState for PartsState {}

impl PartsState {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn selected_part(&self) -> Option<&Part> {
        self.items.get(self.selected)
    }
}

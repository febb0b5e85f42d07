use crate::services::CartItem;
use crate::ui::mvi::UiState;

/// Server confirmation state of one cart line.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SyncStatus {
    #[default]
    Confirmed,
    /// A request is in flight. `target` is the requested quantity, or
    /// `None` for a delete.
    Pending { target: Option<u32> },
    /// The last request failed; the held quantity is the last confirmed one.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,
    pub sync: SyncStatus,
}

impl CartLine {
    pub fn confirmed(item: CartItem) -> Self {
        Self {
            item,
            sync: SyncStatus::Confirmed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub loading: bool,
    /// Message of the last failed load, shown above the empty list.
    pub load_error: Option<String>,
    pub selected: usize,
    /// Text being typed for a direct quantity edit of the selected line.
    pub edit_buffer: Option<String>,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            loading: true,
            load_error: None,
            selected: 0,
            edit_buffer: None,
        }
    }
}

impl UiState for CartState {}

impl CartState {
    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item.id == item_id)
    }

    pub fn quantity_of(&self, item_id: &str) -> Option<u32> {
        self.line(item_id).map(|line| line.item.quantity)
    }

    pub fn selected_line(&self) -> Option<&CartLine> {
        self.lines.get(self.selected)
    }

    /// Sum of the held subtotals.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|line| line.item.subtotal).sum()
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Quantity after one press of minus, or `None` when already at 1.
pub fn decremented(quantity: u32) -> Option<u32> {
    if quantity > 1 {
        Some(quantity - 1)
    } else {
        None
    }
}

/// Quantity from free text: non-digits are stripped, and an empty, zero
/// or out-of-range result becomes 1.
pub fn sanitize_quantity(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(quantity) => quantity,
    }
}

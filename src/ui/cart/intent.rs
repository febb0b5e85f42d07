use crate::services::CartItem;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    LoadStarted,
    Loaded { items: Vec<CartItem> },
    /// Load failed; the screen shows an empty list.
    LoadFailed { message: String },
    /// A request for this line was sent. `target: None` means delete.
    MutationStarted { item_id: String, target: Option<u32> },
    QuantityConfirmed { item_id: String, quantity: u32 },
    Removed { item_id: String },
    /// Request failed; the line keeps its last confirmed quantity.
    MutationFailed { item_id: String, message: String },
    Cleared,
    SelectNext,
    SelectPrevious,
    BeginEdit,
    EditInput(char),
    EditBackspace,
    /// Leaves edit mode. Sending the edited value is the controller's job.
    EndEdit,
}

impl Intent for CartIntent {}

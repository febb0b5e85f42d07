use crate::services::Part;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuantityIntent {
    Open { part: Part },
    Minus,
    Plus,
    Input(char),
    Backspace,
    Close,
}

impl Intent for QuantityIntent {}

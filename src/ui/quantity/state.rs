use crate::services::{Availability, Part};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuantityDialogState {
    #[default]
    Hidden,
    Visible {
        part: Part,
        /// Digits as typed; may be empty while editing.
        text: String,
    },
}

impl UiState for QuantityDialogState {}

/// What pressing Confirm should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmation {
    Add { part: Part, quantity: u32 },
    NotReady,
}

impl QuantityDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Quantity Confirm would submit: the typed value, or 1 if empty or zero.
    pub fn quantity(&self) -> Option<u32> {
        match self {
            Self::Hidden => None,
            Self::Visible { text, .. } => Some(parse_or(text, 1).max(1)),
        }
    }

    pub fn confirmation(&self) -> Option<Confirmation> {
        match self {
            Self::Hidden => None,
            Self::Visible { part, .. } => {
                if part.availability() != Availability::Ready {
                    return Some(Confirmation::NotReady);
                }
                self.quantity().map(|quantity| Confirmation::Add {
                    part: part.clone(),
                    quantity,
                })
            }
        }
    }
}

pub(super) fn parse_or(text: &str, fallback: u32) -> u32 {
    match text.parse::<u32>() {
        Ok(0) | Err(_) => fallback,
        Ok(value) => value,
    }
}

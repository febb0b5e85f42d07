use crate::ui::mvi::Reducer;

use super::intent::QuantityIntent;
use super::state::{parse_or, QuantityDialogState};

const MAX_DIGITS: usize = 6;

pub struct QuantityReducer;

impl Reducer for QuantityReducer {
    type State = QuantityDialogState;
    type Intent = QuantityIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (intent, state) {
            (QuantityIntent::Open { part }, _) => QuantityDialogState::Visible {
                part,
                text: "1".to_string(),
            },
            (QuantityIntent::Close, _) => QuantityDialogState::Hidden,
            (QuantityIntent::Minus, QuantityDialogState::Visible { part, text }) => {
                let current = parse_or(&text, 1);
                let text = if current > 1 {
                    (current - 1).to_string()
                } else {
                    text
                };
                QuantityDialogState::Visible { part, text }
            }
            (QuantityIntent::Plus, QuantityDialogState::Visible { part, text }) => {
                let current = text.parse::<u32>().unwrap_or(0);
                let next = current.saturating_add(1).min(999_999);
                QuantityDialogState::Visible {
                    part,
                    text: next.to_string(),
                }
            }
            (QuantityIntent::Input(ch), QuantityDialogState::Visible { part, mut text }) => {
                if ch.is_ascii_digit() && text.len() < MAX_DIGITS {
                    text.push(ch);
                }
                QuantityDialogState::Visible { part, text }
            }
            (QuantityIntent::Backspace, QuantityDialogState::Visible { part, mut text }) => {
                text.pop();
                QuantityDialogState::Visible { part, text }
            }
            (_, hidden @ QuantityDialogState::Hidden) => hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Part;
    use crate::ui::quantity::Confirmation;

    fn part(is_ready: Option<bool>) -> Part {
        Part {
            id: "1".to_string(),
            part_number: "17220-K56-N00".to_string(),
            name: "Element Cleaner".to_string(),
            description: String::new(),
            price: 23500,
            image: String::new(),
            category: None,
            is_ready,
            stock: None,
        }
    }

    fn open(is_ready: Option<bool>) -> QuantityDialogState {
        QuantityReducer::reduce(
            QuantityDialogState::Hidden,
            QuantityIntent::Open {
                part: part(is_ready),
            },
        )
    }

    #[test]
    fn minus_stops_at_one() {
        let state = QuantityReducer::reduce_all(
            open(Some(true)),
            [QuantityIntent::Plus, QuantityIntent::Minus, QuantityIntent::Minus],
        );
        assert_eq!(state.quantity(), Some(1));
    }

    #[test]
    fn empty_text_confirms_as_one() {
        let state = QuantityReducer::reduce(open(Some(true)), QuantityIntent::Backspace);
        assert_eq!(
            state.confirmation(),
            Some(Confirmation::Add {
                part: part(Some(true)),
                quantity: 1
            })
        );
    }

    #[test]
    fn typed_digits_only() {
        let state = QuantityReducer::reduce_all(
            open(Some(true)),
            [
                QuantityIntent::Backspace,
                QuantityIntent::Input('2'),
                QuantityIntent::Input('-'),
                QuantityIntent::Input('4'),
            ],
        );
        assert_eq!(state.quantity(), Some(24));
    }

    #[test]
    fn not_ready_part_cannot_be_added() {
        assert_eq!(open(Some(false)).confirmation(), Some(Confirmation::NotReady));
        assert_eq!(open(None).confirmation(), Some(Confirmation::NotReady));
    }

    #[test]
    fn hidden_ignores_edits() {
        let state = QuantityReducer::reduce(QuantityDialogState::Hidden, QuantityIntent::Plus);
        assert_eq!(state, QuantityDialogState::Hidden);
        assert_eq!(state.confirmation(), None);
    }
}

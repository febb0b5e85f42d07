use crate::api::ApiError;
use crate::services::CartService;
use crate::ui::mvi::Store;

use super::intent::CartIntent;
use super::reducer::CartReducer;
use super::sequencer::ItemSequencer;
use super::state::{decremented, sanitize_quantity};

/// Result of one cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// Server confirmed; local state updated.
    Applied,
    /// Nothing was sent (unknown line, or minus at quantity 1).
    Skipped,
    /// Server or transport failure; local state unchanged.
    Failed(ApiError),
}

/// Screen controller for the cart.
///
/// Every mutation is a server round trip, and local state only changes
/// after the server confirms it.
#[derive(Clone)]
pub struct CartController {
    service: CartService,
    store: Store<CartReducer>,
    sequencer: ItemSequencer,
}

impl CartController {
    pub fn new(service: CartService, store: Store<CartReducer>) -> Self {
        Self {
            service,
            store,
            sequencer: ItemSequencer::new(),
        }
    }

    pub fn store(&self) -> &Store<CartReducer> {
        &self.store
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    /// Fetch the cart. Any failure leaves an empty list and `loading == false`.
    pub async fn load(&self) {
        self.store.dispatch(CartIntent::LoadStarted);
        match self.service.get_cart().await.into_result() {
            Ok(cart) => {
                let items = cart.map(|cart| cart.items).unwrap_or_default();
                self.store.dispatch(CartIntent::Loaded { items });
            }
            Err(error) => {
                tracing::warn!(code = %error.code, message = %error.message, "Failed to load cart");
                self.store.dispatch(CartIntent::LoadFailed {
                    message: error.message,
                });
            }
        }
    }

    pub async fn increment(&self, item_id: &str) -> MutationOutcome {
        self.mutate_quantity(item_id, |quantity| quantity.checked_add(1))
            .await
    }

    /// Decrement; a line at quantity 1 is left alone and nothing is sent.
    pub async fn decrement(&self, item_id: &str) -> MutationOutcome {
        self.mutate_quantity(item_id, decremented).await
    }

    /// Direct edit from free text (see [`sanitize_quantity`]).
    pub async fn set_quantity(&self, item_id: &str, text: &str) -> MutationOutcome {
        let quantity = sanitize_quantity(text);
        self.mutate_quantity(item_id, move |_| Some(quantity)).await
    }

    pub async fn delete(&self, item_id: &str) -> MutationOutcome {
        let outcome = {
            let _turn = self.sequencer.acquire(item_id).await;
            if self.store.read(|s| s.line(item_id).is_none()) {
                return MutationOutcome::Skipped;
            }

            self.store.dispatch(CartIntent::MutationStarted {
                item_id: item_id.to_string(),
                target: None,
            });
            match self.service.remove(item_id).await.into_result() {
                Ok(_) => {
                    self.store.dispatch(CartIntent::Removed {
                        item_id: item_id.to_string(),
                    });
                    MutationOutcome::Applied
                }
                Err(error) => self.fail(item_id, error, "Failed to delete cart item"),
            }
        };
        self.sequencer.forget(item_id);
        outcome
    }

    /// `DELETE /cart/clear`, emptying the list once confirmed.
    pub async fn clear(&self) -> MutationOutcome {
        match self.service.clear().await.into_result() {
            Ok(_) => {
                self.store.dispatch(CartIntent::Cleared);
                MutationOutcome::Applied
            }
            Err(error) => {
                tracing::warn!(code = %error.code, message = %error.message, "Failed to clear cart");
                MutationOutcome::Failed(error)
            }
        }
    }

    /// Waits for earlier mutations of the same line, then computes the
    /// target from the quantity they left behind.
    async fn mutate_quantity(
        &self,
        item_id: &str,
        next: impl FnOnce(u32) -> Option<u32>,
    ) -> MutationOutcome {
        let _turn = self.sequencer.acquire(item_id).await;

        let Some(current) = self.store.read(|s| s.quantity_of(item_id)) else {
            return MutationOutcome::Skipped;
        };
        let Some(target) = next(current) else {
            return MutationOutcome::Skipped;
        };

        self.store.dispatch(CartIntent::MutationStarted {
            item_id: item_id.to_string(),
            target: Some(target),
        });
        match self.service.update(item_id, target).await.into_result() {
            Ok(_) => {
                self.store.dispatch(CartIntent::QuantityConfirmed {
                    item_id: item_id.to_string(),
                    quantity: target,
                });
                MutationOutcome::Applied
            }
            Err(error) => self.fail(item_id, error, "Failed to update cart"),
        }
    }

    fn fail(&self, item_id: &str, error: ApiError, context: &'static str) -> MutationOutcome {
        tracing::warn!(item_id = %item_id, code = %error.code, message = %error.message, "{}", context);
        self.store.dispatch(CartIntent::MutationFailed {
            item_id: item_id.to_string(),
            message: error.message.clone(),
        });
        MutationOutcome::Failed(error)
    }
}

use crate::api::ApiError;
use crate::services::{Availability, CartService, Part, PartsQuery, PartsService};
use crate::ui::mvi::Store;

use super::intent::PartsIntent;
use super::reducer::PartsReducer;
use super::state::{Alert, PageRequest};

/// Result of confirming the quantity dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added { quantity: u32 },
    /// The part is not (known to be) in stock; nothing was sent.
    NotReady,
    Failed(ApiError),
}

/// Screen controller for the parts catalogue.
#[derive(Clone)]
pub struct PartsController {
    parts: PartsService,
    cart: CartService,
    store: Store<PartsReducer>,
    page_size: u32,
}

impl PartsController {
    pub fn new(
        parts: PartsService,
        cart: CartService,
        store: Store<PartsReducer>,
        page_size: u32,
    ) -> Self {
        Self {
            parts,
            cart,
            store,
            page_size,
        }
    }

    pub fn store(&self) -> &Store<PartsReducer> {
        &self.store
    }

    /// Forget the list, search text and badge count.
    pub fn reset(&self) {
        self.store.dispatch(PartsIntent::Reset);
    }

    /// Start a new search: the list and page counter reset before page 1 is fetched.
    pub async fn search(&self, query: &str) {
        let request = self.store.dispatch_then(
            PartsIntent::SearchRequested {
                query: query.to_string(),
            },
            |s| s.in_flight,
        );
        if let Some(request) = request {
            self.fetch(request).await;
        }
    }

    /// Re-run the current search from page 1.
    pub async fn refresh(&self) {
        let query = self.store.read(|s| s.query.clone());
        self.search(&query).await;
    }

    /// Append the next page, if there is one and nothing is loading.
    pub async fn load_more(&self) {
        let request = self.store.dispatch_when(
            |s| s.in_flight.is_none() && s.has_more,
            PartsIntent::LoadMoreRequested,
            |s| s.in_flight,
        );
        if let Some(Some(request)) = request {
            self.fetch(request).await;
        }
    }

    async fn fetch(&self, request: PageRequest) {
        let query = self.store.read(|s| PartsQuery {
            page: Some(request.page),
            limit: Some(self.page_size),
            search: Some(s.query.clone()),
            category: None,
            sort_by: s.sort.map(|sort| sort.by),
            order: s.sort.map(|sort| sort.order),
        });

        match self.parts.list(&query).await.into_data() {
            Ok(page) => {
                let has_more = page.has_more();
                self.store.dispatch(PartsIntent::PageLoaded {
                    request,
                    items: page.items,
                    has_more,
                });
            }
            Err(error) => {
                tracing::warn!(
                    page = request.page,
                    code = %error.code,
                    message = %error.message,
                    "Failed to load parts"
                );
                self.store.dispatch(PartsIntent::PageFailed {
                    request,
                    message: error.message,
                });
            }
        }
    }

    /// Open the detail panel and fetch the detail record for availability.
    pub async fn open_detail(&self, part: Part) {
        let part_id = part.id.clone();
        self.store.dispatch(PartsIntent::DetailRequested { part });
        match self.parts.detail(&part_id).await.into_data() {
            Ok(detail) => self.store.dispatch(PartsIntent::DetailLoaded { part: detail }),
            Err(error) => {
                tracing::warn!(part_id = %part_id, code = %error.code, "Failed to load part detail");
                self.store.dispatch(PartsIntent::DetailFailed { part_id });
            }
        }
    }

    pub fn alert_not_ready(&self) {
        self.store.dispatch(PartsIntent::ShowAlert(Alert {
            title: "Stock not available".to_string(),
            message: "Sorry, this part is currently out of stock.".to_string(),
        }));
    }

    /// Add `quantity` of `part` to the cart, refusing parts not known to be ready.
    pub async fn add_to_cart(&self, part: &Part, quantity: u32) -> AddOutcome {
        if part.availability() != Availability::Ready {
            self.alert_not_ready();
            return AddOutcome::NotReady;
        }

        match self.cart.add(&part.id, quantity).await.into_result() {
            Ok(_) => {
                tracing::info!(part_id = %part.id, quantity, "Added to cart");
                self.store.dispatch(PartsIntent::AddedToCart { quantity });
                AddOutcome::Added { quantity }
            }
            Err(error) => {
                tracing::warn!(part_id = %part.id, code = %error.code, "Failed to add to cart");
                self.store.dispatch(PartsIntent::ShowAlert(Alert {
                    title: "Could not add to cart".to_string(),
                    message: error.message.clone(),
                }));
                AddOutcome::Failed(error)
            }
        }
    }
}

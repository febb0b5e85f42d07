use crate::api::ApiError;
use crate::services::NotificationService;
use crate::ui::mvi::Store;

use super::intent::NotificationsIntent;
use super::reducer::NotificationsReducer;

#[derive(Clone)]
pub struct NotificationsController {
    service: NotificationService,
    store: Store<NotificationsReducer>,
}

impl NotificationsController {
    pub fn new(service: NotificationService, store: Store<NotificationsReducer>) -> Self {
        Self { service, store }
    }

    pub fn store(&self) -> &Store<NotificationsReducer> {
        &self.store
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    pub async fn load(&self) {
        self.store.dispatch(NotificationsIntent::LoadStarted);
        match self.service.list(None, None).await.into_data() {
            Ok(page) => self.store.dispatch(NotificationsIntent::Loaded(page)),
            Err(error) => {
                tracing::warn!(code = %error.code, message = %error.message, "Failed to load notifications");
                self.store.dispatch(NotificationsIntent::LoadFailed {
                    message: error.message,
                });
            }
        }
    }

    /// Marks locally only after the backend confirms.
    pub async fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        self.service.mark_read(id).await.into_result().map_err(|error| {
            tracing::warn!(notification_id = id, code = %error.code, "Failed to mark notification read");
            error
        })?;
        self.store.dispatch(NotificationsIntent::MarkedRead { id: id.to_string() });
        Ok(())
    }
}

use std::collections::HashMap;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::controller::{CartController, MutationOutcome};

/// One key press on a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartPress {
    Increment,
    Decrement,
    SetQuantity(String),
    Delete,
}

/// Queue of cart presses fed from the UI thread.
///
/// [`press`](Self::press) enqueues synchronously, so presses on one line
/// reach the server in the order the keys were hit. Each line drains on its
/// own task; different lines proceed concurrently.
#[derive(Clone)]
pub struct CartPresses {
    tx: UnboundedSender<(String, CartPress)>,
}

impl CartPresses {
    pub fn start(cart: CartController, runtime: &Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        runtime.spawn(route(cart, rx));
        Self { tx }
    }

    pub fn press(&self, item_id: impl Into<String>, press: CartPress) {
        if self.tx.send((item_id.into(), press)).is_err() {
            tracing::warn!("Cart press queue is closed");
        }
    }
}

async fn route(cart: CartController, mut rx: UnboundedReceiver<(String, CartPress)>) {
    let mut lanes: HashMap<String, UnboundedSender<CartPress>> = HashMap::new();

    while let Some((item_id, press)) = rx.recv().await {
        lanes.retain(|_, lane| !lane.is_closed());
        let lane = lanes
            .entry(item_id.clone())
            .or_insert_with(|| open_lane(cart.clone(), item_id.clone()));

        if let Err(mpsc::error::SendError(press)) = lane.send(press) {
            // The lane finished (line deleted) between the check and the send.
            let fresh = open_lane(cart.clone(), item_id.clone());
            let _ = fresh.send(press);
            lanes.insert(item_id, fresh);
        }
    }
}

fn open_lane(cart: CartController, item_id: String) -> UnboundedSender<CartPress> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(drain_lane(cart, item_id, rx));
    tx
}

async fn drain_lane(cart: CartController, item_id: String, mut rx: UnboundedReceiver<CartPress>) {
    while let Some(press) = rx.recv().await {
        let outcome = match &press {
            CartPress::Increment => cart.increment(&item_id).await,
            CartPress::Decrement => cart.decrement(&item_id).await,
            CartPress::SetQuantity(text) => cart.set_quantity(&item_id, text).await,
            CartPress::Delete => cart.delete(&item_id).await,
        };
        tracing::debug!(item_id = %item_id, ?press, ?outcome, "Cart press handled");
        if press == CartPress::Delete && outcome == MutationOutcome::Applied {
            break;
        }
    }
}

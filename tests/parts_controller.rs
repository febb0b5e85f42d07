//! Parts catalogue controller: paging, searching and adding to the cart.

mod common;

use std::time::Duration;

use common::mock_backend::{MockBackend, MockResponse};
use partorder::services::{Part, SortBy, SortOrder};
use partorder::ui::mvi::Store;
use partorder::ui::parts::{AddOutcome, PartsController, PartsIntent, PartsSort, PartsState};
use serde_json::json;

fn controller(backend: &MockBackend) -> PartsController {
    let services = common::services(&backend.base_url(), common::logged_in_session());
    PartsController::new(
        services.parts,
        services.cart,
        Store::new(PartsState::default()),
        20,
    )
}

fn part(id: u32, is_ready: Option<bool>, stock: Option<u32>) -> Part {
    let mut part: Part = serde_json::from_value(common::part_json(id, true)).unwrap();
    part.is_ready = is_ready;
    part.stock = stock;
    part
}

#[tokio::test]
async fn pages_are_appended_in_order() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(1..=20, 1, true)))
        .await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(21..=25, 2, false)))
        .await;
    let controller = controller(&backend);

    controller.search("").await;
    controller.load_more().await;
    // No further pages: nothing is requested.
    controller.load_more().await;

    let state = controller.store().snapshot();
    assert_eq!(state.items.len(), 25);
    assert_eq!(state.items[0].id, "1");
    assert_eq!(state.items[24].id, "25");
    assert_eq!(state.page, 2);
    assert!(!state.has_more);
    assert!(!state.is_loading());

    let requests = backend.requests_to("GET", "/parts").await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query_param("page").as_deref(), Some("1"));
    assert_eq!(requests[1].query_param("page").as_deref(), Some("2"));
    assert_eq!(requests[1].query_param("limit").as_deref(), Some("20"));
    assert_eq!(requests[0].query_param("search"), None);
}

#[tokio::test]
async fn new_search_resets_list() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(1..=20, 1, true)))
        .await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(100..=102, 1, false)))
        .await;
    let controller = controller(&backend);

    controller.search("").await;
    controller.search("brake pad").await;

    let state = controller.store().snapshot();
    let ids: Vec<&str> = state.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["100", "101", "102"]);
    assert_eq!(state.page, 1);
    assert_eq!(state.query, "brake pad");

    let requests = backend.requests_to("GET", "/parts").await;
    assert_eq!(requests[1].query_param("search").as_deref(), Some("brake pad"));
    assert_eq!(requests[1].query_param("page").as_deref(), Some("1"));
}

/// A slow response for an older search must not land in the newer list.
#[tokio::test]
async fn stale_search_results_are_dropped() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(1..=2, 1, false)).with_delay(150))
        .await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(50..=51, 1, false)))
        .await;
    let controller = controller(&backend);

    let slow = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.search("old").await })
    };
    tokio::time::sleep(Duration::from_millis(40)).await;
    controller.search("new").await;
    slow.await.unwrap();

    let state = controller.store().snapshot();
    let ids: Vec<&str> = state.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["50", "51"]);
    assert_eq!(state.query, "new");
    assert!(!state.is_loading());
}

#[tokio::test]
async fn sort_is_sent_as_query() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(1..=1, 1, false)))
        .await;
    let controller = controller(&backend);

    controller.store().dispatch(PartsIntent::SortChanged(Some(PartsSort {
        by: SortBy::Price,
        order: SortOrder::Desc,
    })));
    controller.refresh().await;

    let requests = backend.requests_to("GET", "/parts").await;
    assert_eq!(requests[0].query_param("sortBy").as_deref(), Some("het"));
    assert_eq!(requests[0].query_param("order").as_deref(), Some("desc"));
}

#[tokio::test]
async fn failed_page_keeps_earlier_items() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(1..=20, 1, true)))
        .await;
    backend
        .enqueue_response(MockResponse::failure(503, "UNAVAILABLE", "Try again later"))
        .await;
    let controller = controller(&backend);

    controller.search("").await;
    controller.load_more().await;

    let state = controller.store().snapshot();
    assert_eq!(state.items.len(), 20);
    assert_eq!(state.page, 1);
    assert_eq!(state.error.as_deref(), Some("Try again later"));
    assert!(!state.is_loading());
}

/// Parts not known to be ready raise an alert and never reach the backend.
#[tokio::test]
async fn not_ready_part_is_not_added() {
    let backend = MockBackend::start().await;
    let controller = controller(&backend);

    for unavailable in [part(1, Some(false), None), part(2, None, Some(0)), part(3, None, None)] {
        let outcome = controller.add_to_cart(&unavailable, 2).await;
        assert_eq!(outcome, AddOutcome::NotReady);
    }

    assert!(backend.captured_requests().await.is_empty());
    let state = controller.store().snapshot();
    assert_eq!(state.alert.map(|a| a.title).as_deref(), Some("Stock not available"));
    assert_eq!(state.cart_count, 0);
}

#[tokio::test]
async fn ready_part_is_added() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({"cartItemId": "line-9", "totalItems": 4})))
        .await;
    let controller = controller(&backend);

    let outcome = controller.add_to_cart(&part(5, None, Some(12)), 4).await;

    assert_eq!(outcome, AddOutcome::Added { quantity: 4 });
    let adds = backend.requests_to("POST", "/cart/add").await;
    assert_eq!(adds[0].body_json(), json!({"partId": "5", "quantity": 4}));
    assert_eq!(controller.store().snapshot().cart_count, 4);
}

#[tokio::test]
async fn add_failure_shows_backend_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::failure(400, "INSUFFICIENT_STOCK", "Only 2 left"))
        .await;
    let controller = controller(&backend);

    let outcome = controller.add_to_cart(&part(5, Some(true), None), 9).await;

    assert!(matches!(outcome, AddOutcome::Failed(ref e) if e.code == "INSUFFICIENT_STOCK"));
    let state = controller.store().snapshot();
    assert_eq!(state.alert.map(|a| a.message).as_deref(), Some("Only 2 left"));
    assert_eq!(state.cart_count, 0);
}

/// The detail record fills in availability the list entry lacked.
#[tokio::test]
async fn detail_merges_availability() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(common::parts_page_json(1..=1, 1, false)))
        .await;
    let mut detail = common::part_json(1, true);
    detail["stock"] = json!(7);
    backend.enqueue_response(MockResponse::data(detail)).await;
    let controller = controller(&backend);

    controller.search("").await;
    let listed = part(1, None, None);
    controller.open_detail(listed).await;

    let state = controller.store().snapshot();
    let shown = state.detail.expect("detail open");
    assert_eq!(shown.is_ready, Some(true));
    assert_eq!(shown.stock, Some(7));
    assert!(!state.detail_loading);
    assert_eq!(backend.requests_to("GET", "/parts/1").await.len(), 1);
}

use crate::ui::mvi::Reducer;

use super::intent::PartsIntent;
use super::state::{PageRequest, PartsState};

pub struct PartsReducer;

impl Reducer for PartsReducer {
    type State = PartsState;
    type Intent = PartsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PartsIntent::InputChanged(text) => {
                state.input = text;
                state
            }
            PartsIntent::SearchRequested { query } => {
                state.generation += 1;
                state.query = query;
                state.items.clear();
                state.page = 0;
                state.has_more = false;
                state.selected = 0;
                state.error = None;
                state.in_flight = Some(PageRequest {
                    generation: state.generation,
                    page: 1,
                });
                state
            }
            PartsIntent::LoadMoreRequested => {
                if state.in_flight.is_none() && state.has_more {
                    state.in_flight = Some(PageRequest {
                        generation: state.generation,
                        page: state.page + 1,
                    });
                }
                state
            }
            PartsIntent::PageLoaded {
                request,
                items,
                has_more,
            } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                state.items.extend(items);
                state.page = request.page;
                state.has_more = has_more;
                state.in_flight = None;
                state
            }
            PartsIntent::PageFailed { request, message } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                state.in_flight = None;
                state.error = Some(message);
                state
            }
            PartsIntent::SortChanged(sort) => {
                state.sort = sort;
                state
            }
            PartsIntent::SelectNext => {
                if state.selected + 1 < state.items.len() {
                    state.selected += 1;
                }
                state
            }
            PartsIntent::SelectPrevious => {
                state.selected = state.selected.saturating_sub(1);
                state
            }
            PartsIntent::DetailRequested { part } => {
                state.detail = Some(part);
                state.detail_loading = true;
                state
            }
            PartsIntent::DetailLoaded { part } => {
                if let Some(current) = state.detail.as_mut().filter(|d| d.id == part.id) {
                    current.merge_detail(&part);
                    state.detail_loading = false;
                }
                let id = part.id.clone();
                if let Some(listed) = state.items.iter_mut().find(|p| p.id == id) {
                    listed.merge_detail(&part);
                }
                state
            }
            PartsIntent::DetailFailed { part_id } => {
                if state.detail.as_ref().is_some_and(|d| d.id == part_id) {
                    state.detail_loading = false;
                }
                state
            }
            PartsIntent::DetailClosed => {
                state.detail = None;
                state.detail_loading = false;
                state
            }
            PartsIntent::AddedToCart { quantity } => {
                state.cart_count = state.cart_count.saturating_add(quantity);
                state
            }
            PartsIntent::ShowAlert(alert) => {
                state.alert = Some(alert);
                state
            }
            PartsIntent::DismissAlert => {
                state.alert = None;
                state
            }
            PartsIntent::Reset => PartsState {
                generation: state.generation,
                ..PartsState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Part;

    fn part(id: &str) -> Part {
        Part {
            id: id.to_string(),
            part_number: format!("PN-{}", id),
            name: format!("Part {}", id),
            description: String::new(),
            price: 1000,
            image: String::new(),
            category: None,
            is_ready: None,
            stock: None,
        }
    }

    fn search(state: PartsState, query: &str) -> (PartsState, PageRequest) {
        let state = PartsReducer::reduce(
            state,
            PartsIntent::SearchRequested {
                query: query.to_string(),
            },
        );
        let request = state.in_flight.unwrap();
        (state, request)
    }

    #[test]
    fn next_page_appends_after_previous() {
        let (state, first) = search(PartsState::default(), "");
        let state = PartsReducer::reduce(
            state,
            PartsIntent::PageLoaded {
                request: first,
                items: vec![part("1"), part("2")],
                has_more: true,
            },
        );
        let state = PartsReducer::reduce(state, PartsIntent::LoadMoreRequested);
        let second = state.in_flight.unwrap();
        assert_eq!(second.page, 2);

        let state = PartsReducer::reduce(
            state,
            PartsIntent::PageLoaded {
                request: second,
                items: vec![part("3")],
                has_more: false,
            },
        );
        let ids: Vec<_> = state.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(state.page, 2);

        let state = PartsReducer::reduce(state, PartsIntent::LoadMoreRequested);
        assert!(state.in_flight.is_none(), "no more pages to request");
    }

    #[test]
    fn new_search_resets_and_drops_stale_pages() {
        let (state, first) = search(PartsState::default(), "filter");
        let (state, second) = search(state, "coolant");
        assert!(state.items.is_empty());
        assert_eq!(second.page, 1);

        let state = PartsReducer::reduce(
            state,
            PartsIntent::PageLoaded {
                request: first,
                items: vec![part("stale")],
                has_more: true,
            },
        );
        assert!(state.items.is_empty());
        assert_eq!(state.in_flight, Some(second));

        let state = PartsReducer::reduce(
            state,
            PartsIntent::PageLoaded {
                request: second,
                items: vec![part("fresh")],
                has_more: false,
            },
        );
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "fresh");
        assert_eq!(state.query, "coolant");
    }

    #[test]
    fn load_more_ignored_while_loading() {
        let (state, first) = search(PartsState::default(), "");
        let state = PartsReducer::reduce(state, PartsIntent::LoadMoreRequested);
        assert_eq!(state.in_flight, Some(first));
    }

    #[test]
    fn detail_merges_availability_into_list() {
        let (state, first) = search(PartsState::default(), "");
        let state = PartsReducer::reduce_all(
            state,
            [
                PartsIntent::PageLoaded {
                    request: first,
                    items: vec![part("1")],
                    has_more: false,
                },
                PartsIntent::DetailRequested { part: part("1") },
            ],
        );
        let mut detail = part("1");
        detail.is_ready = Some(true);
        let state = PartsReducer::reduce(state, PartsIntent::DetailLoaded { part: detail });

        assert!(!state.detail_loading);
        assert_eq!(state.detail.unwrap().is_ready, Some(true));
        assert_eq!(state.items[0].is_ready, Some(true));
    }

    /// A page requested before the reset never lands in the next search.
    #[test]
    fn reset_keeps_generation_counting() {
        let (state, before) = search(PartsState::default(), "brake");
        let state = PartsReducer::reduce_all(
            state,
            [
                PartsIntent::AddedToCart { quantity: 2 },
                PartsIntent::Reset,
            ],
        );
        assert!(state.items.is_empty());
        assert!(state.query.is_empty());
        assert_eq!(state.cart_count, 0);
        assert!(state.in_flight.is_none());

        let (state, after) = search(state, "brake");
        assert_ne!(before, after);
        let state = PartsReducer::reduce(
            state,
            PartsIntent::PageLoaded {
                request: before,
                items: vec![part("stale")],
                has_more: false,
            },
        );
        assert!(state.items.is_empty());
        assert_eq!(state.in_flight, Some(after));
    }
}

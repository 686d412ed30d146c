mod common;

use std::time::{Duration, Instant};

use common::{fetch_id, init_logging, load, page_of, record};
use pretty_assertions::assert_eq;
use recipes_core::{
    update, BodyView, Effect, FilterKey, InputId, Msg, QueryMode, TableBody, ViewState,
};

fn edit(state: ViewState, input: InputId, text: &str, at: Instant) -> ViewState {
    let (state, effects) = update(
        state,
        Msg::FilterEdited {
            input,
            text: text.to_string(),
            at,
        },
    );
    assert!(effects.is_empty());
    state
}

fn request_of(effects: &[Effect]) -> &recipes_core::RequestDescriptor {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchPage { request, .. } => Some(request),
            _ => None,
        })
        .expect("fetch effect")
}

#[test]
fn typing_burst_fetches_once_with_last_value() {
    init_logging();
    let start = Instant::now();
    let title = InputId::Filter(FilterKey::Title);
    let mut state = ViewState::default();
    for (i, text) in ["p", "pa", "pas", "pasta "].iter().enumerate() {
        state = edit(state, title, text, start + Duration::from_millis(100 * i as u64));
    }

    let (state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(550),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.filters().get(FilterKey::Title), "");

    let (state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(600),
        },
    );
    assert_eq!(effects.len(), 1);
    let request = request_of(&effects);
    assert_eq!(request.mode, QueryMode::Search);
    assert_eq!(state.filters().get(FilterKey::Title), "pasta");

    let (_state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_secs(5),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn search_params_include_only_set_filters() {
    init_logging();
    let start = Instant::now();
    let state = load(ViewState::default(), page_of(40, vec![record("a", None)]));
    let (state, _) = update(state, Msg::NextPageClicked);
    let (state, _) = update(
        state,
        Msg::FetchSettled {
            request_id: 2,
            outcome: Ok(page_of(40, vec![record("b", None)])),
        },
    );
    assert_eq!(state.page(), 2);

    let state = edit(state, InputId::Filter(FilterKey::Cuisine), "italian", start);
    let (state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(300),
        },
    );

    assert_eq!(state.page(), 1);
    let request = request_of(&effects);
    assert_eq!(request.mode, QueryMode::Search);
    assert_eq!(
        request.params(),
        vec![
            ("cuisine", "italian".to_string()),
            ("page", "1".to_string()),
            ("limit", "20".to_string()),
        ]
    );
}

#[test]
fn whitespace_only_filters_stay_in_list_mode() {
    init_logging();
    let start = Instant::now();
    let state = edit(ViewState::default(), InputId::Filter(FilterKey::Title), "   ", start);
    let (_state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(300),
        },
    );

    let request = request_of(&effects);
    assert_eq!(request.mode, QueryMode::List);
    assert_eq!(
        request.params(),
        vec![("page", "1".to_string()), ("limit", "20".to_string())]
    );
}

#[test]
fn second_filter_in_same_tick_is_coalesced() {
    init_logging();
    let start = Instant::now();
    let state = edit(ViewState::default(), InputId::Filter(FilterKey::Title), "soup", start);
    let state = edit(state, InputId::Filter(FilterKey::Cuisine), "thai", start);

    let (state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(300),
        },
    );

    assert_eq!(effects.len(), 1);
    assert_eq!(request_of(&effects).filters.get(FilterKey::Cuisine), "");
    assert_eq!(state.filters().get(FilterKey::Cuisine), "thai");
}

#[test]
fn serves_filter_narrows_cached_rows_without_fetching() {
    init_logging();
    let start = Instant::now();
    let state = load(
        ViewState::default(),
        page_of(2, vec![record("a", Some("4-6")), record("b", Some("2"))]),
    );
    let cache_before = state.cache().to_vec();

    let state = edit(state, InputId::Serves, " 4 ", start);
    let (state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(200),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.body(), &TableBody::Rows(vec![0]));
    assert_eq!(state.cache(), cache_before.as_slice());
    assert_eq!(state.total(), 2);
    assert_eq!(state.page(), 1);
    match state.view().body {
        BodyView::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].serves, "4-6");
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn page_size_change_resets_page() {
    init_logging();
    let state = load(ViewState::default(), page_of(100, vec![record("a", None)]));
    let (state, effects) = update(state, Msg::NextPageClicked);
    let request_id = fetch_id(&effects);
    let (state, _) = update(
        state,
        Msg::FetchSettled {
            request_id,
            outcome: Ok(page_of(100, vec![record("b", None)])),
        },
    );
    assert_eq!(state.page(), 2);

    let (state, effects) = update(state, Msg::PageSizeChanged(50));
    assert_eq!(state.page(), 1);
    assert_eq!(state.limit(), 50);
    assert_eq!(request_of(&effects).limit, 50);

    let (state, effects) = update(state, Msg::PageSizeChanged(33));
    assert!(effects.is_empty());
    assert_eq!(state.limit(), 50);
}

#[test]
fn pager_clicks_respect_bounds() {
    init_logging();
    let state = load(ViewState::default(), page_of(20, vec![record("a", None)]));

    let (state, effects) = update(state, Msg::PrevPageClicked);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::NextPageClicked);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 1);
}

#[test]
fn next_click_while_loading_does_not_move_page() {
    init_logging();
    let state = load(ViewState::default(), page_of(100, vec![record("a", None)]));
    let (state, _) = update(state, Msg::FetchRequested);

    let (state, effects) = update(state, Msg::NextPageClicked);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 1);
}

#[test]
fn reset_clears_filters_and_pending_edits() {
    init_logging();
    let start = Instant::now();
    let state = edit(ViewState::default(), InputId::Filter(FilterKey::Title), "soup", start);
    let (state, effects) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(300),
        },
    );
    let request_id = fetch_id(&effects);
    let (state, _) = update(
        state,
        Msg::FetchSettled {
            request_id,
            outcome: Ok(page_of(1, vec![record("soup", None)])),
        },
    );
    let state = edit(state, InputId::Filter(FilterKey::Cuisine), "thai", start);

    let (state, effects) = update(state, Msg::ResetFiltersClicked);
    assert!(!state.filters().has_any());
    assert!(!state.has_pending_input());
    assert_eq!(request_of(&effects).mode, QueryMode::List);
}

#[test]
fn detail_opens_from_visible_row_with_times_collapsed() {
    init_logging();
    let start = Instant::now();
    let state = load(
        ViewState::default(),
        page_of(2, vec![record("Soup", Some("2")), record("Stew", Some("6"))]),
    );
    let state = edit(state, InputId::Serves, "6", start);
    let (state, _) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(200),
        },
    );

    let (state, _) = update(state, Msg::RowActivated(0));
    let detail = state.view().detail.expect("detail open");
    assert_eq!(detail.title, "Stew");
    assert!(!detail.times_expanded);

    let (state, _) = update(state, Msg::TimesToggled);
    assert!(state.view().detail.unwrap().times_expanded);

    let (state, _) = update(state, Msg::DetailClosed);
    assert!(state.view().detail.is_none());

    let (state, _) = update(state, Msg::RowActivated(5));
    assert!(state.detail().is_none());
}

#[test]
fn numeric_filters_flag_unparseable_values() {
    init_logging();
    let start = Instant::now();
    let state = edit(ViewState::default(), InputId::Filter(FilterKey::Rating), "great", start);
    let state = edit(state, InputId::Filter(FilterKey::TotalTime), "<= 30", start);
    let (state, _) = update(
        state,
        Msg::Tick {
            now: start + Duration::from_millis(300),
        },
    );

    let view = state.view();
    let flagged: Vec<_> = view
        .filters
        .iter()
        .filter(|filter| filter.ignored)
        .map(|filter| filter.key)
        .collect();
    assert_eq!(flagged, vec![FilterKey::Rating]);
}

#[test]
fn idle_tick_leaves_state_untouched() {
    init_logging();
    let state = ViewState::default();
    let (mut next, effects) = update(state.clone(), Msg::Tick { now: Instant::now() });
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, state);
}

#![allow(dead_code)]

use std::sync::Once;

use recipes_core::{update, Effect, Msg, Record, RecordPage, RequestId, ViewState};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipes_logging::initialize_for_tests);
}

pub fn record(title: &str, serves: Option<&str>) -> Record {
    Record {
        title: Some(title.to_string()),
        serves: serves.map(str::to_string),
        ..Record::default()
    }
}

pub fn page_of(total: u64, rows: Vec<Record>) -> RecordPage {
    RecordPage {
        total: Some(total),
        data: Some(rows),
    }
}

pub fn fetch_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchPage { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect")
}

/// Requests a fetch and settles it successfully with `page`.
pub fn load(state: ViewState, page: RecordPage) -> ViewState {
    let (state, effects) = update(state, Msg::FetchRequested);
    let request_id = fetch_id(&effects);
    let (state, effects) = update(
        state,
        Msg::FetchSettled {
            request_id,
            outcome: Ok(page),
        },
    );
    assert!(effects.is_empty());
    state
}

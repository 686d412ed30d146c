use recipes_logging::recipes_debug;

use crate::{Effect, InputId, Msg, ViewState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let mut effects = request_page(&mut state);
            effects.push(Effect::FetchStats);
            effects
        }
        Msg::FilterEdited { input, text, at } => {
            state.schedule_input(input, text, at);
            Vec::new()
        }
        Msg::Tick { now } => {
            let mut effects = Vec::new();
            for (input, text) in state.take_due_inputs(now) {
                match input {
                    InputId::Filter(key) => {
                        recipes_debug!("Filter {:?} settled on {:?}", key, text);
                        state.set_filter(key, &text);
                        // A second filter firing in the same tick is coalesced.
                        effects.extend(request_page(&mut state));
                    }
                    InputId::Serves => state.apply_serves_filter(&text),
                }
            }
            effects
        }
        Msg::PageSizeChanged(limit) => {
            if state.set_page_size(limit) {
                request_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::PrevPageClicked => {
            if state.can_go_prev() {
                state.go_prev();
                request_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::NextPageClicked => {
            if state.can_go_next() {
                state.go_next();
                request_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ResetFiltersClicked => {
            state.reset_filters();
            request_page(&mut state)
        }
        Msg::FetchRequested => request_page(&mut state),
        Msg::FetchSettled {
            request_id,
            outcome,
        } => {
            state.settle_fetch(request_id, outcome);
            Vec::new()
        }
        Msg::StatsLoaded(statistics) => {
            state.set_statistics(statistics);
            Vec::new()
        }
        Msg::RowActivated(row) => {
            state.open_detail(row);
            Vec::new()
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::TimesToggled => {
            state.toggle_times();
            Vec::new()
        }
    };

    (state, effects)
}

fn request_page(state: &mut ViewState) -> Vec<Effect> {
    state
        .begin_fetch()
        .map(|ticket| Effect::FetchPage {
            request_id: ticket.request_id,
            request: ticket.request,
        })
        .into_iter()
        .collect()
}

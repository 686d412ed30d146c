use recipes_core::{BodyView, DetailView, InputId, RowView, TableViewModel};

use super::constants::*;
use super::surface::{Severity, TableContent, UiCommand};

pub const LOADING_TEXT: &str = "Loading recipes...";

/// Maps the view model onto control updates. Input texts are owned by the
/// controls and never written here.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &TableViewModel) -> Vec<UiCommand> {
    let mut cmds = Vec::new();

    cmds.push(UiCommand::PopulateTable {
        control_id: TABLE_RECIPES,
        content: table_content(view),
    });

    cmds.push(UiCommand::SetControlText {
        control_id: LABEL_PAGE_INFO,
        text: view.pager.label.clone(),
    });
    cmds.push(UiCommand::SetControlEnabled {
        control_id: BUTTON_PREV,
        enabled: view.pager.prev_enabled,
    });
    cmds.push(UiCommand::SetControlEnabled {
        control_id: BUTTON_NEXT,
        enabled: view.pager.next_enabled,
    });

    cmds.push(UiCommand::SetControlVisible {
        control_id: LABEL_NO_DATA,
        visible: view.empty_state.no_data_visible(),
    });
    cmds.push(UiCommand::SetControlVisible {
        control_id: LABEL_NO_RESULTS,
        visible: view.empty_state.no_results_visible(),
    });

    cmds.push(UiCommand::SetSelectOptions {
        control_id: SELECT_PAGE_SIZE,
        options: view
            .page_size_options
            .iter()
            .map(|size| size.to_string())
            .collect(),
        selected: view
            .page_size_options
            .iter()
            .position(|size| *size == view.page_size)
            .unwrap_or(0),
    });

    for filter in &view.filters {
        cmds.push(UiCommand::SetControlSeverity {
            control_id: input_control(InputId::Filter(filter.key)),
            severity: if filter.ignored {
                Severity::Warning
            } else {
                Severity::Normal
            },
        });
    }

    let status = match (&view.body, &view.status) {
        (BodyView::Loading, _) => LOADING_TEXT.to_string(),
        (_, Some(stats)) => stats.clone(),
        (_, None) => "Ready".to_string(),
    };
    cmds.push(UiCommand::SetControlText {
        control_id: LABEL_STATUS,
        text: status,
    });

    cmds.push(UiCommand::SetControlVisible {
        control_id: PANEL_DRAWER,
        visible: view.detail.is_some(),
    });
    if let Some(detail) = &view.detail {
        cmds.extend(render_detail(detail));
    }

    cmds
}

fn table_content(view: &TableViewModel) -> TableContent {
    match &view.body {
        BodyView::Loading => TableContent::Message {
            text: LOADING_TEXT.to_string(),
            severity: Severity::Normal,
        },
        BodyView::Error(message) => TableContent::Message {
            text: message.clone(),
            severity: Severity::Error,
        },
        BodyView::Rows(rows) => TableContent::Rows(rows.iter().map(row_cells).collect()),
    }
}

fn row_cells(row: &RowView) -> Vec<String> {
    vec![
        row.title.clone(),
        row.cuisine.clone(),
        row.stars.glyphs(),
        row.total_time.clone(),
        row.serves.clone(),
    ]
}

fn render_detail(detail: &DetailView) -> Vec<UiCommand> {
    let texts = [
        (LABEL_DRAWER_TITLE, &detail.title),
        (LABEL_DRAWER_CUISINE, &detail.cuisine),
        (LABEL_DRAWER_DESC, &detail.description),
        (LABEL_TOTAL_TIME, &detail.total_time_text),
        (LABEL_PREP_TIME, &detail.prep_time_text),
        (LABEL_COOK_TIME, &detail.cook_time_text),
    ];
    let mut cmds: Vec<UiCommand> = texts
        .into_iter()
        .map(|(control_id, text)| UiCommand::SetControlText {
            control_id,
            text: text.clone(),
        })
        .collect();

    cmds.push(UiCommand::SetControlVisible {
        control_id: PANEL_TIMES,
        visible: detail.times_expanded,
    });
    cmds.push(UiCommand::PopulateTable {
        control_id: TABLE_NUTRIENTS,
        content: TableContent::Rows(
            detail
                .nutrients
                .iter()
                .map(|row| vec![row.name.clone(), row.value.clone()])
                .collect(),
        ),
    });
    cmds
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use recipes_core::{update, FilterKey, Msg, Record, RecordPage, ViewState};

    use super::*;
    use crate::platform::ui::layout::initial_commands;
    use crate::platform::ui::surface::{ControlStore, ControlSurface};

    fn surface_for(state: &ViewState) -> ControlStore {
        let mut store = ControlStore::new();
        for command in initial_commands().into_iter().chain(render(&state.view())) {
            store.apply(command);
        }
        store
    }

    fn settled(total: u64, rows: Vec<Record>) -> ViewState {
        let (state, _) = update(ViewState::default(), Msg::FetchRequested);
        let (state, _) = update(
            state,
            Msg::FetchSettled {
                request_id: 1,
                outcome: Ok(RecordPage {
                    total: Some(total),
                    data: Some(rows),
                }),
            },
        );
        state
    }

    #[test]
    fn loading_shows_indicator_and_disables_pager() {
        let (state, _) = update(ViewState::default(), Msg::FetchRequested);
        let store = surface_for(&state);

        assert_eq!(
            store.control(TABLE_RECIPES).unwrap().table,
            TableContent::Message {
                text: LOADING_TEXT.to_string(),
                severity: Severity::Normal,
            }
        );
        assert!(!store.control(BUTTON_PREV).unwrap().enabled);
        assert!(!store.control(BUTTON_NEXT).unwrap().enabled);
    }

    #[test]
    fn rows_render_stars_and_blank_absent_fields() {
        let record = Record {
            title: Some("Soup".into()),
            rating: Some(3.6),
            total_time: Some(0),
            ..Record::default()
        };
        let store = surface_for(&settled(1, vec![record]));

        assert_eq!(
            store.control(TABLE_RECIPES).unwrap().table,
            TableContent::Rows(vec![vec![
                "Soup".to_string(),
                String::new(),
                "★★★☆☆".to_string(),
                "0".to_string(),
                String::new(),
            ]])
        );
        assert_eq!(store.text(LABEL_PAGE_INFO), "Page 1 of 1 - 1 results");
    }

    #[test]
    fn banners_follow_empty_state() {
        let store = surface_for(&settled(0, Vec::new()));
        assert!(store.is_shown(LABEL_NO_DATA));
        assert!(!store.is_shown(LABEL_NO_RESULTS));

        let store = surface_for(&settled(12, Vec::new()));
        assert!(!store.is_shown(LABEL_NO_DATA));
        assert!(store.is_shown(LABEL_NO_RESULTS));
    }

    #[test]
    fn failure_shows_error_row_and_hides_banners() {
        let state = settled(0, Vec::new());
        let (state, _) = update(state, Msg::FetchRequested);
        let (state, _) = update(
            state,
            Msg::FetchSettled {
                request_id: 2,
                outcome: Err("HTTP error! status: 502".into()),
            },
        );
        let store = surface_for(&state);

        match &store.control(TABLE_RECIPES).unwrap().table {
            TableContent::Message { text, severity } => {
                assert_eq!(*severity, Severity::Error);
                assert!(text.contains("HTTP error! status: 502"));
            }
            other => panic!("unexpected table {other:?}"),
        }
        assert!(!store.is_shown(LABEL_NO_DATA));
        assert!(!store.is_shown(LABEL_NO_RESULTS));
    }

    #[test]
    fn detail_panel_tracks_selection_and_times_toggle() {
        let record = Record {
            title: Some("Stew".into()),
            prep_time: Some(15),
            total_time: Some(90),
            ..Record::default()
        };
        let (state, _) = update(settled(1, vec![record]), Msg::RowActivated(0));
        let store = surface_for(&state);
        assert!(store.is_shown(LABEL_DRAWER_TITLE));
        assert_eq!(store.text(LABEL_DRAWER_TITLE), "Stew");
        assert_eq!(store.text(LABEL_TOTAL_TIME), "90 mins");
        assert!(!store.is_shown(LABEL_PREP_TIME));

        let (state, _) = update(state, Msg::TimesToggled);
        let store = surface_for(&state);
        assert!(store.is_shown(LABEL_PREP_TIME));
        assert_eq!(store.text(LABEL_PREP_TIME), "15");
    }

    #[test]
    fn ignored_numeric_filter_is_flagged() {
        let start = Instant::now();
        let (state, _) = update(
            ViewState::default(),
            Msg::FilterEdited {
                input: InputId::Filter(FilterKey::Calories),
                text: "lots".into(),
                at: start,
            },
        );
        let (state, _) = update(
            state,
            Msg::Tick {
                now: start + Duration::from_secs(1),
            },
        );
        let store = surface_for(&state);
        assert_eq!(
            store.control(INPUT_CALORIES).unwrap().severity,
            Severity::Warning
        );
        assert_eq!(store.control(INPUT_TITLE).unwrap().severity, Severity::Normal);
    }
}

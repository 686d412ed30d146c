use ratatui::layout::{Constraint, Flex, Layout, Rect};
use recipes_core::InputId;

use super::constants::*;
use super::surface::{ControlId, ControlKind, UiCommand};

fn create(
    commands: &mut Vec<UiCommand>,
    control_id: ControlId,
    parent: Option<ControlId>,
    kind: ControlKind,
    label: &str,
) {
    commands.push(UiCommand::CreateControl {
        control_id,
        parent,
        kind,
        label: label.to_string(),
    });
}

fn hide(commands: &mut Vec<UiCommand>, control_id: ControlId) {
    commands.push(UiCommand::SetControlVisible {
        control_id,
        visible: false,
    });
}

/// Creates every control in its initial state: banners and detail view hidden,
/// pager disabled until the first page settles.
pub fn initial_commands() -> Vec<UiCommand> {
    let mut commands = Vec::new();

    create(&mut commands, PANEL_FILTERS, None, ControlKind::Panel, "Filters");
    for input in InputId::ALL {
        create(
            &mut commands,
            input_control(input),
            Some(PANEL_FILTERS),
            ControlKind::Input,
            input_label(input),
        );
    }
    create(
        &mut commands,
        SELECT_PAGE_SIZE,
        Some(PANEL_FILTERS),
        ControlKind::Select,
        "Per page",
    );

    create(&mut commands, TABLE_RECIPES, None, ControlKind::Table, "Recipes");
    create(&mut commands, BUTTON_PREV, None, ControlKind::Button, "Prev");
    create(&mut commands, BUTTON_NEXT, None, ControlKind::Button, "Next");
    create(&mut commands, BUTTON_RESET, None, ControlKind::Button, "Reset filters");
    create(&mut commands, LABEL_PAGE_INFO, None, ControlKind::Label, "");
    create(&mut commands, LABEL_NO_DATA, None, ControlKind::Label, "");
    create(&mut commands, LABEL_NO_RESULTS, None, ControlKind::Label, "");
    create(&mut commands, LABEL_STATUS, None, ControlKind::Label, "");

    create(&mut commands, PANEL_DRAWER, None, ControlKind::Panel, "Recipe");
    create(&mut commands, LABEL_DRAWER_TITLE, Some(PANEL_DRAWER), ControlKind::Label, "");
    create(&mut commands, LABEL_DRAWER_CUISINE, Some(PANEL_DRAWER), ControlKind::Label, "Cuisine");
    create(&mut commands, LABEL_DRAWER_DESC, Some(PANEL_DRAWER), ControlKind::Label, "");
    create(&mut commands, LABEL_TOTAL_TIME, Some(PANEL_DRAWER), ControlKind::Label, "Total time");
    create(&mut commands, PANEL_TIMES, Some(PANEL_DRAWER), ControlKind::Panel, "Times");
    create(&mut commands, LABEL_PREP_TIME, Some(PANEL_TIMES), ControlKind::Label, "Prep time");
    create(&mut commands, LABEL_COOK_TIME, Some(PANEL_TIMES), ControlKind::Label, "Cook time");
    create(&mut commands, TABLE_NUTRIENTS, Some(PANEL_DRAWER), ControlKind::Table, "Nutrients");

    commands.push(UiCommand::SetControlText {
        control_id: LABEL_NO_DATA,
        text: "No recipes in the collection yet.".to_string(),
    });
    commands.push(UiCommand::SetControlText {
        control_id: LABEL_NO_RESULTS,
        text: "No recipes match the current filters.".to_string(),
    });
    commands.push(UiCommand::SetControlText {
        control_id: LABEL_STATUS,
        text: "Ready".to_string(),
    });
    for control_id in [BUTTON_PREV, BUTTON_NEXT] {
        commands.push(UiCommand::SetControlEnabled {
            control_id,
            enabled: false,
        });
    }
    for control_id in [LABEL_NO_DATA, LABEL_NO_RESULTS, PANEL_DRAWER, PANEL_TIMES] {
        hide(&mut commands, control_id);
    }

    commands
}

/// Screen regions of the main view.
pub struct MainAreas {
    pub filters: Rect,
    pub table: Rect,
    pub pager: Rect,
    pub status: Rect,
    pub help: Rect,
}

pub fn main_areas(area: Rect) -> MainAreas {
    let [filters, table, pager, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    MainAreas {
        filters,
        table,
        pager,
        status,
        help,
    }
}

/// One cell per filter input plus the page-size selector.
pub fn filter_cells(area: Rect) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Ratio(1, 7); InputId::ALL.len()];
    constraints.push(Constraint::Length(14));
    Layout::horizontal(constraints).split(area).to_vec()
}

/// Centered overlay for the detail view.
pub fn drawer_area(area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [drawer] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(vertical);
    drawer
}

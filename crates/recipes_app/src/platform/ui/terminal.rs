//! Draws the control store with ratatui.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;
use recipes_core::InputId;

use super::constants::*;
use super::input::Focus;
use super::layout::{drawer_area, filter_cells, main_areas};
use super::surface::{ControlId, ControlStore, ControlSurface, Severity, TableContent};

const HELP: &str =
    "Tab focus · PgUp/PgDn page · Enter details · Ctrl-R reset · F5 reload · Esc quit";

pub fn draw(frame: &mut Frame, store: &ControlStore, focus: Focus, table_state: &mut TableState) {
    let areas = main_areas(frame.area());

    let cells = filter_cells(areas.filters);
    for (input, cell) in InputId::ALL.iter().zip(cells.iter()) {
        draw_input(frame, store, input_control(*input), *cell, focus == Focus::Input(*input));
    }
    if let Some(cell) = cells.last() {
        draw_select(frame, store, *cell, focus == Focus::PageSize);
    }

    draw_recipes(frame, store, areas.table, focus == Focus::Table, table_state);
    draw_pager(frame, store, areas.pager);
    frame.render_widget(
        Paragraph::new(store.text(LABEL_STATUS).to_string()).style(Style::default().fg(Color::Gray)),
        areas.status,
    );
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        areas.help,
    );

    if store.is_shown(PANEL_DRAWER) {
        draw_drawer(frame, store, drawer_area(frame.area()));
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn draw_input(frame: &mut Frame, store: &ControlStore, control_id: ControlId, area: Rect, focused: bool) {
    let Some(props) = store.control(control_id) else {
        return;
    };
    let mut title = vec![Span::raw(props.label.clone())];
    if props.severity == Severity::Warning {
        title.push(Span::styled(" (ignored)", Style::default().fg(Color::Red)));
    }
    let mut text = props.text.clone();
    if focused {
        text.push('▏');
    }
    frame.render_widget(
        Paragraph::new(text).block(
            Block::bordered()
                .title(Line::from(title))
                .border_style(focus_style(focused)),
        ),
        area,
    );
}

fn draw_select(frame: &mut Frame, store: &ControlStore, area: Rect, focused: bool) {
    let Some(props) = store.control(SELECT_PAGE_SIZE) else {
        return;
    };
    let current = props
        .options
        .get(props.selected)
        .cloned()
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(format!("◂ {current} ▸")).block(
            Block::bordered()
                .title(props.label.clone())
                .border_style(focus_style(focused)),
        ),
        area,
    );
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Normal => Style::default().add_modifier(Modifier::ITALIC),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default().fg(Color::Red),
    }
}

fn draw_recipes(
    frame: &mut Frame,
    store: &ControlStore,
    area: Rect,
    focused: bool,
    table_state: &mut TableState,
) {
    let Some(props) = store.control(TABLE_RECIPES) else {
        return;
    };
    let rows: Vec<Row> = match &props.table {
        TableContent::Rows(rows) => rows
            .iter()
            .map(|cells| Row::new(cells.iter().cloned().map(Cell::from)))
            .collect(),
        TableContent::Message { text, severity } => {
            vec![Row::new(vec![Cell::from(text.clone())]).style(severity_style(*severity))]
        }
    };
    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(TABLE_HEADERS).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::bordered()
                .title(props.label.clone())
                .border_style(focus_style(focused)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");

    if props.row_count() == 0 {
        table_state.select(None);
    }
    frame.render_stateful_widget(table, area, table_state);
}

fn draw_pager(frame: &mut Frame, store: &ControlStore, area: Rect) {
    let button = |control_id: ControlId, text: &str| {
        let enabled = store.control(control_id).is_some_and(|props| props.enabled);
        let style = if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("[{text}]"), style)
    };

    let mut spans = vec![
        button(BUTTON_PREV, "◂ Prev"),
        Span::raw(" "),
        Span::raw(store.text(LABEL_PAGE_INFO).to_string()),
        Span::raw(" "),
        button(BUTTON_NEXT, "Next ▸"),
        Span::raw("  "),
        button(BUTTON_RESET, "Reset filters"),
    ];
    for banner in [LABEL_NO_DATA, LABEL_NO_RESULTS] {
        if store.is_shown(banner) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                store.text(banner).to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_drawer(frame: &mut Frame, store: &ControlStore, area: Rect) {
    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .title(store.text(LABEL_DRAWER_TITLE).to_string())
        .title_bottom("t times · Esc close");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let times_height = if store.is_shown(PANEL_TIMES) { 2 } else { 0 };
    let [summary, times, nutrients] = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(times_height),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let labelled = |control_id: ControlId| {
        let label = store
            .control(control_id)
            .map(|props| props.label.clone())
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(store.text(control_id).to_string()),
        ])
    };

    let summary_lines = vec![
        labelled(LABEL_DRAWER_CUISINE),
        labelled(LABEL_TOTAL_TIME),
        Line::raw(""),
        Line::raw(store.text(LABEL_DRAWER_DESC).to_string()),
    ];
    frame.render_widget(
        Paragraph::new(summary_lines).wrap(Wrap { trim: true }),
        summary,
    );

    if store.is_shown(PANEL_TIMES) {
        frame.render_widget(
            Paragraph::new(vec![labelled(LABEL_PREP_TIME), labelled(LABEL_COOK_TIME)]),
            times,
        );
    }

    if let Some(props) = store.control(TABLE_NUTRIENTS) {
        let rows: Vec<Row> = match &props.table {
            TableContent::Rows(rows) => rows
                .iter()
                .map(|cells| Row::new(cells.iter().cloned().map(Cell::from)))
                .collect(),
            TableContent::Message { text, .. } => vec![Row::new(vec![Cell::from(text.clone())])],
        };
        frame.render_widget(
            Table::new(rows, [Constraint::Fill(1), Constraint::Fill(1)])
                .block(Block::bordered().title(props.label.clone())),
            nutrients,
        );
    }
}

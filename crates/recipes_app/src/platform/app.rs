use std::path::Path;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::widgets::TableState;
use ratatui::DefaultTerminal;
use recipes_core::{update, InputId, Msg, ViewState, PAGE_SIZE_OPTIONS};
use recipes_logging::{recipes_error, recipes_info, recipes_warn};
use thiserror::Error;

use super::config::{self, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::{input_control, BUTTON_NEXT, BUTTON_PREV, SELECT_PAGE_SIZE, TABLE_RECIPES};
use super::ui::input::{apply_edit, map_key, Focus, UiAction};
use super::ui::layout::initial_commands;
use super::ui::render::render;
use super::ui::surface::{ControlId, ControlStore, ControlSurface};
use super::ui::terminal::draw;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start the fetch engine: {0}")]
    Engine(#[source] std::io::Error),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match config::load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(&config.log_file, config.log_level());
    if let Some(err) = config_error {
        recipes_warn!("{}; using defaults", err);
    }

    let runner = EffectRunner::new(config.fetch_settings()).map_err(AppError::Engine)?;
    let app = App::new(&config, runner);

    let terminal = ratatui::try_init()?;
    let result = app.run(terminal, &config);
    ratatui::restore();

    if let Err(err) = &result {
        recipes_error!("Application stopped: {}", err);
    }
    Ok(result?)
}

struct App {
    state: ViewState,
    surface: ControlStore,
    focus: Focus,
    table_state: TableState,
    runner: EffectRunner,
    quit: bool,
}

impl App {
    fn new(config: &AppConfig, runner: EffectRunner) -> Self {
        let state = ViewState::new(config.table_settings());
        let mut surface = ControlStore::new();
        for command in initial_commands().into_iter().chain(render(&state.view())) {
            surface.apply(command);
        }
        Self {
            state,
            surface,
            focus: Focus::Input(InputId::ALL[0]),
            table_state: TableState::default(),
            runner,
            quit: false,
        }
    }

    fn run(mut self, mut terminal: DefaultTerminal, config: &AppConfig) -> Result<(), AppError> {
        recipes_info!("UI ready");
        self.dispatch(Msg::Started);

        while !self.quit {
            terminal.draw(|frame| {
                draw(frame, &self.surface, self.focus, &mut self.table_state)
            })?;

            if event::poll(config.tick())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let detail_open = self.state.detail().is_some();
                        self.handle_action(map_key(key, self.focus, detail_open));
                    }
                }
            }

            for msg in self.runner.drain_events() {
                self.dispatch(msg);
            }
            self.dispatch(Msg::Tick { now: Instant::now() });
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.execute(effects);
        if state.consume_dirty() {
            for command in render(&state.view()) {
                self.surface.apply(command);
            }
        }
        self.state = state;
    }

    fn enabled(&self, control_id: ControlId) -> bool {
        self.surface
            .control(control_id)
            .is_some_and(|props| props.enabled)
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Quit => self.quit = true,
            UiAction::FocusNext => self.focus = self.focus.next(),
            UiAction::FocusPrev => self.focus = self.focus.prev(),
            UiAction::Edit(input, op) => {
                let text = self
                    .surface
                    .edit_text(input_control(input), |text| apply_edit(text, op));
                self.dispatch(Msg::FilterEdited {
                    input,
                    text,
                    at: Instant::now(),
                });
            }
            UiAction::PageSizeStep(step) => {
                let current = self
                    .surface
                    .control(SELECT_PAGE_SIZE)
                    .map_or(0, |props| props.selected);
                let last = PAGE_SIZE_OPTIONS.len() - 1;
                let target = current.saturating_add_signed(step).min(last);
                if target != current {
                    self.dispatch(Msg::PageSizeChanged(PAGE_SIZE_OPTIONS[target]));
                }
            }
            UiAction::MoveSelection(step) => {
                let rows = self
                    .surface
                    .control(TABLE_RECIPES)
                    .map_or(0, |props| props.row_count());
                if rows == 0 {
                    self.table_state.select(None);
                } else {
                    let current = self.table_state.selected().unwrap_or(0);
                    let target = current.saturating_add_signed(step).min(rows - 1);
                    self.table_state.select(Some(target));
                }
            }
            UiAction::ActivateRow => {
                if let Some(row) = self.table_state.selected() {
                    self.dispatch(Msg::RowActivated(row));
                }
            }
            UiAction::PrevPage => {
                if self.enabled(BUTTON_PREV) {
                    self.table_state.select(None);
                    self.dispatch(Msg::PrevPageClicked);
                }
            }
            UiAction::NextPage => {
                if self.enabled(BUTTON_NEXT) {
                    self.table_state.select(None);
                    self.dispatch(Msg::NextPageClicked);
                }
            }
            UiAction::ResetFilters => {
                for input in InputId::ALL {
                    self.surface.edit_text(input_control(input), String::clear);
                }
                self.table_state.select(None);
                self.dispatch(Msg::ResetFiltersClicked);
            }
            UiAction::Reload => self.dispatch(Msg::FetchRequested),
            UiAction::CloseDetail => self.dispatch(Msg::DetailClosed),
            UiAction::ToggleTimes => self.dispatch(Msg::TimesToggled),
            UiAction::Ignore => {}
        }
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use recipes_core::InputId;

/// Which control receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(InputId),
    PageSize,
    Table,
}

impl Focus {
    const ORDER: [Focus; 8] = [
        Focus::Input(InputId::ALL[0]),
        Focus::Input(InputId::ALL[1]),
        Focus::Input(InputId::ALL[2]),
        Focus::Input(InputId::ALL[3]),
        Focus::Input(InputId::ALL[4]),
        Focus::Input(InputId::ALL[5]),
        Focus::PageSize,
        Focus::Table,
    ];

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(Self::ORDER.len() - 1)
    }

    fn step(self, by: usize) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + by) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    FocusNext,
    FocusPrev,
    Edit(InputId, EditOp),
    PageSizeStep(isize),
    MoveSelection(isize),
    ActivateRow,
    PrevPage,
    NextPage,
    ResetFilters,
    Reload,
    CloseDetail,
    ToggleTimes,
    Ignore,
}

/// Translates a key press into an action for the focused control.
pub fn map_key(key: KeyEvent, focus: Focus, detail_open: bool) -> UiAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return UiAction::Quit;
    }

    if detail_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => UiAction::CloseDetail,
            KeyCode::Char('t') | KeyCode::Enter => UiAction::ToggleTimes,
            _ => UiAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Tab => return UiAction::FocusNext,
        KeyCode::BackTab => return UiAction::FocusPrev,
        KeyCode::PageUp => return UiAction::PrevPage,
        KeyCode::PageDown => return UiAction::NextPage,
        KeyCode::F(5) => return UiAction::Reload,
        KeyCode::Esc => return UiAction::Quit,
        KeyCode::Char('r') if ctrl => return UiAction::ResetFilters,
        _ => {}
    }

    match focus {
        Focus::Input(input) => match key.code {
            KeyCode::Char('u') if ctrl => UiAction::Edit(input, EditOp::Clear),
            KeyCode::Char(c) if !ctrl => UiAction::Edit(input, EditOp::Insert(c)),
            KeyCode::Backspace => UiAction::Edit(input, EditOp::Backspace),
            _ => UiAction::Ignore,
        },
        Focus::PageSize => match key.code {
            KeyCode::Up | KeyCode::Left => UiAction::PageSizeStep(-1),
            KeyCode::Down | KeyCode::Right => UiAction::PageSizeStep(1),
            _ => UiAction::Ignore,
        },
        Focus::Table => match key.code {
            KeyCode::Up | KeyCode::Char('k') => UiAction::MoveSelection(-1),
            KeyCode::Down | KeyCode::Char('j') => UiAction::MoveSelection(1),
            KeyCode::Enter => UiAction::ActivateRow,
            KeyCode::Left => UiAction::PrevPage,
            KeyCode::Right => UiAction::NextPage,
            KeyCode::Char('q') => UiAction::Quit,
            _ => UiAction::Ignore,
        },
    }
}

pub fn apply_edit(text: &mut String, op: EditOp) {
    match op {
        EditOp::Insert(c) => text.push(c),
        EditOp::Backspace => {
            text.pop();
        }
        EditOp::Clear => text.clear(),
    }
}

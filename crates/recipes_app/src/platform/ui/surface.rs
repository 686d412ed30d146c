//! Addressable controls the renderer writes to and event wiring reads from.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u32);

impl ControlId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Panel,
    Label,
    Input,
    Select,
    Button,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableContent {
    Rows(Vec<Vec<String>>),
    /// A single full-width message row (loading indicator, error banner).
    Message { text: String, severity: Severity },
}

impl Default for TableContent {
    fn default() -> Self {
        TableContent::Rows(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    CreateControl {
        control_id: ControlId,
        parent: Option<ControlId>,
        kind: ControlKind,
        label: String,
    },
    SetControlText {
        control_id: ControlId,
        text: String,
    },
    SetControlEnabled {
        control_id: ControlId,
        enabled: bool,
    },
    SetControlVisible {
        control_id: ControlId,
        visible: bool,
    },
    SetControlSeverity {
        control_id: ControlId,
        severity: Severity,
    },
    SetSelectOptions {
        control_id: ControlId,
        options: Vec<String>,
        selected: usize,
    },
    PopulateTable {
        control_id: ControlId,
        content: TableContent,
    },
}

/// Display capability. Rendering goes through `apply`; wiring reads values back.
pub trait ControlSurface {
    fn apply(&mut self, command: UiCommand);

    fn control(&self, control_id: ControlId) -> Option<&ControlProps>;

    fn text(&self, control_id: ControlId) -> &str {
        self.control(control_id)
            .map(|props| props.text.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlProps {
    pub kind: ControlKind,
    pub parent: Option<ControlId>,
    pub label: String,
    pub text: String,
    pub enabled: bool,
    pub visible: bool,
    pub severity: Severity,
    pub options: Vec<String>,
    pub selected: usize,
    pub table: TableContent,
}

impl ControlProps {
    fn new(kind: ControlKind, parent: Option<ControlId>, label: String) -> Self {
        Self {
            kind,
            parent,
            label,
            text: String::new(),
            enabled: true,
            visible: true,
            severity: Severity::Normal,
            options: Vec::new(),
            selected: 0,
            table: TableContent::default(),
        }
    }

    pub fn row_count(&self) -> usize {
        match &self.table {
            TableContent::Rows(rows) => rows.len(),
            TableContent::Message { .. } => 0,
        }
    }
}

/// In-memory control tree; the terminal draws from it.
#[derive(Debug, Default)]
pub struct ControlStore {
    controls: BTreeMap<ControlId, ControlProps>,
}

impl ControlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutates an input's text in place and returns the new value. Other
    /// control kinds are only written through `apply`.
    pub fn edit_text(&mut self, control_id: ControlId, edit: impl FnOnce(&mut String)) -> String {
        match self.controls.get_mut(&control_id) {
            Some(props) if props.kind == ControlKind::Input => {
                edit(&mut props.text);
                props.text.clone()
            }
            _ => String::new(),
        }
    }

    /// A control is shown only if it and every ancestor are visible.
    pub fn is_shown(&self, control_id: ControlId) -> bool {
        let mut current = Some(control_id);
        while let Some(id) = current {
            match self.controls.get(&id) {
                Some(props) if props.visible => current = props.parent,
                _ => return false,
            }
        }
        true
    }
}

impl ControlSurface for ControlStore {
    fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::CreateControl {
                control_id,
                parent,
                kind,
                label,
            } => {
                self.controls
                    .insert(control_id, ControlProps::new(kind, parent, label));
            }
            UiCommand::SetControlText { control_id, text } => {
                if let Some(props) = self.controls.get_mut(&control_id) {
                    props.text = text;
                }
            }
            UiCommand::SetControlEnabled {
                control_id,
                enabled,
            } => {
                if let Some(props) = self.controls.get_mut(&control_id) {
                    props.enabled = enabled;
                }
            }
            UiCommand::SetControlVisible {
                control_id,
                visible,
            } => {
                if let Some(props) = self.controls.get_mut(&control_id) {
                    props.visible = visible;
                }
            }
            UiCommand::SetControlSeverity {
                control_id,
                severity,
            } => {
                if let Some(props) = self.controls.get_mut(&control_id) {
                    props.severity = severity;
                }
            }
            UiCommand::SetSelectOptions {
                control_id,
                options,
                selected,
            } => {
                if let Some(props) = self.controls.get_mut(&control_id) {
                    props.options = options;
                    props.selected = selected;
                }
            }
            UiCommand::PopulateTable {
                control_id,
                content,
            } => {
                if let Some(props) = self.controls.get_mut(&control_id) {
                    props.table = content;
                }
            }
        }
    }

    fn control(&self, control_id: ControlId) -> Option<&ControlProps> {
        self.controls.get(&control_id)
    }
}

use std::fmt;

use crate::document::{Document, NodeId, NodeKind, NodeVisitor, WalkStatus};
use crate::models::{Endpoint, Parameter, to_openapi_data_type};

use super::table::is_table_body_cell;

/// Which column of the current parameter row text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamState {
    /// Row entered, no cell yet.
    #[default]
    Unknown,
    Name,
    Type,
    Description,
    Default,
    /// Fifth cell onwards.
    Trailing,
}

/// Events that move a [`ParamState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamEvent {
    RowEntered,
    CellEntered,
}

impl ParamState {
    /// The transition table of the parameter row machine.
    pub fn next(self, event: ParamEvent) -> Self {
        match (self, event) {
            (_, ParamEvent::RowEntered) => ParamState::Unknown,
            (ParamState::Unknown, ParamEvent::CellEntered) => ParamState::Name,
            (ParamState::Name, ParamEvent::CellEntered) => ParamState::Type,
            (ParamState::Type, ParamEvent::CellEntered) => ParamState::Description,
            (ParamState::Description, ParamEvent::CellEntered) => ParamState::Default,
            (ParamState::Default | ParamState::Trailing, ParamEvent::CellEntered) => {
                ParamState::Trailing
            }
        }
    }
}

impl fmt::Display for ParamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamState::Unknown => "Unknown",
            ParamState::Name => "Name",
            ParamState::Type => "Type",
            ParamState::Description => "Description",
            ParamState::Default => "Default",
            ParamState::Trailing => "Trailing",
        };
        f.write_str(name)
    }
}

/// Turns the rows of one parameter table into [`Parameter`]s on an endpoint.
///
/// Columns are positional: name, type, description and an optional default.
/// Every row produces a parameter, even one without any text. Header rows
/// are never descended into.
pub struct ParamExtractor<'a> {
    endpoint: &'a mut Endpoint,
    required: bool,
    state: ParamState,
    current: Option<usize>,
}

impl<'a> ParamExtractor<'a> {
    pub fn new(endpoint: &'a mut Endpoint, required: bool) -> Self {
        Self {
            endpoint,
            required,
            state: ParamState::Unknown,
            current: None,
        }
    }

    pub fn state(&self) -> ParamState {
        self.state
    }

    fn enter_row(&mut self) {
        self.state = self.state.next(ParamEvent::RowEntered);
        self.endpoint
            .body_parameters
            .push(Parameter::new(self.required));
        self.current = Some(self.endpoint.body_parameters.len() - 1);
    }

    fn enter_cell(&mut self) {
        self.state = self.state.next(ParamEvent::CellEntered);
    }

    fn text(&mut self, run: &str) {
        let Some(param) = self
            .current
            .and_then(|index| self.endpoint.body_parameters.get_mut(index))
        else {
            return;
        };

        match self.state {
            ParamState::Name => param.name.push_str(run),
            // First run wins: later runs are footnote markers and the like.
            ParamState::Type if param.param_type.is_empty() && !run.is_empty() => {
                param.param_type = to_openapi_data_type(run).to_string();
            }
            ParamState::Description => param.description.push_str(run),
            ParamState::Default => param.default.push_str(run),
            ParamState::Unknown | ParamState::Type | ParamState::Trailing => {}
        }
    }

    /// Defaults are usually written as code spans (`` `{}` ``, `` `STOPPED` ``).
    fn code(&mut self, literal: &str) {
        if self.state != ParamState::Default {
            return;
        }
        if let Some(param) = self
            .current
            .and_then(|index| self.endpoint.body_parameters.get_mut(index))
        {
            param.default.push_str(literal);
        }
    }
}

impl NodeVisitor for ParamExtractor<'_> {
    fn visit(&mut self, doc: &Document, node: NodeId, entering: bool) -> WalkStatus {
        let Some(kind) = doc.kind(node) else {
            return WalkStatus::GoToNext;
        };

        match kind {
            NodeKind::TableHeader if entering => return WalkStatus::SkipChildren,
            NodeKind::TableRow if entering => self.enter_row(),
            NodeKind::TableCell if entering && is_table_body_cell(doc, node) => self.enter_cell(),
            NodeKind::Text(run) => self.text(run),
            NodeKind::Code(literal) => self.code(literal),
            _ => {}
        }
        WalkStatus::GoToNext
    }
}

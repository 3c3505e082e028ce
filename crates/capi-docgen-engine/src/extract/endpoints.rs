use std::fmt;

use crate::document::{Document, NodeId, NodeKind, NodeVisitor, WalkStatus, walk};
use crate::models::Endpoint;

use super::params::ParamExtractor;

/// A documentation section the extractor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Definition,
    RequiredParameters,
    OptionalParameters,
    PermittedRoles,
}

/// Heading text that opens each [`Section`]. Matched exactly.
pub const SECTION_HEADINGS: &[(&str, Section)] = &[
    ("Definition", Section::Definition),
    ("Required Parameters", Section::RequiredParameters),
    ("Optional Parameters", Section::OptionalParameters),
    ("Permitted Roles", Section::PermittedRoles),
];

impl Section {
    pub fn from_heading(text: &str) -> Option<Self> {
        SECTION_HEADINGS
            .iter()
            .find(|(heading, _)| *heading == text)
            .map(|&(_, section)| section)
    }
}

/// Where in an endpoint's documentation the walk currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointState {
    #[default]
    Default,
    StartEndpoint,
    RequiredParameters,
    OptionalParameters,
    PermittedRoles,
}

impl EndpointState {
    /// `Some(required)` in states whose tables list body parameters.
    pub fn parameters_required(self) -> Option<bool> {
        match self {
            EndpointState::RequiredParameters => Some(true),
            EndpointState::OptionalParameters => Some(false),
            EndpointState::Default
            | EndpointState::StartEndpoint
            | EndpointState::PermittedRoles => None,
        }
    }
}

impl From<Section> for EndpointState {
    fn from(section: Section) -> Self {
        match section {
            Section::Definition => EndpointState::StartEndpoint,
            Section::RequiredParameters => EndpointState::RequiredParameters,
            Section::OptionalParameters => EndpointState::OptionalParameters,
            Section::PermittedRoles => EndpointState::PermittedRoles,
        }
    }
}

impl fmt::Display for EndpointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndpointState::Default => "Default",
            EndpointState::StartEndpoint => "StartEndpoint",
            EndpointState::RequiredParameters => "RequiredParameters",
            EndpointState::OptionalParameters => "OptionalParameters",
            EndpointState::PermittedRoles => "PermittedRoles",
        };
        f.write_str(name)
    }
}

/// Collects the endpoints documented in one resource document.
///
/// A `METHOD /path` code span in a paragraph under a "Definition" heading
/// starts an endpoint. Parameter table bodies that follow are handed to a
/// [`ParamExtractor`] and not descended into again.
#[derive(Debug)]
pub struct EndpointExtractor {
    resource_name: String,
    endpoints: Vec<Endpoint>,
    current: Option<usize>,
    state: EndpointState,
}

impl EndpointExtractor {
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            endpoints: Vec::new(),
            current: None,
            state: EndpointState::Default,
        }
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn state(&self) -> EndpointState {
        self.state
    }

    /// Endpoints in the order their definitions appear.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn into_endpoints(self) -> Vec<Endpoint> {
        self.endpoints
    }

    fn text(&mut self, doc: &Document, node: NodeId, text: &str) {
        if !has_parent_kind(doc, node, |kind| matches!(kind, NodeKind::Heading { .. })) {
            return;
        }
        if let Some(section) = Section::from_heading(text) {
            self.state = section.into();
        }
    }

    fn code(&mut self, doc: &Document, node: NodeId, code: &str) {
        if self.state != EndpointState::StartEndpoint
            || !has_parent_kind(doc, node, |kind| *kind == NodeKind::Paragraph)
        {
            return;
        }
        self.endpoints
            .push(Endpoint::from_definition(self.resource_name.as_str(), code));
        self.current = Some(self.endpoints.len() - 1);
    }

    fn table_body(&mut self, doc: &Document, node: NodeId) -> WalkStatus {
        let Some(required) = self.state.parameters_required() else {
            return WalkStatus::GoToNext;
        };
        if let Some(endpoint) = self.current.and_then(|index| self.endpoints.get_mut(index)) {
            walk(doc, node, &mut ParamExtractor::new(endpoint, required));
        }
        WalkStatus::SkipChildren
    }
}

impl NodeVisitor for EndpointExtractor {
    fn visit(&mut self, doc: &Document, node: NodeId, entering: bool) -> WalkStatus {
        if !entering {
            return WalkStatus::GoToNext;
        }
        match doc.kind(node) {
            Some(NodeKind::Text(text)) => self.text(doc, node, text),
            Some(NodeKind::Code(code)) => self.code(doc, node, code),
            Some(NodeKind::TableBody) => return self.table_body(doc, node),
            _ => {}
        }
        WalkStatus::GoToNext
    }
}

fn has_parent_kind(doc: &Document, node: NodeId, pred: impl Fn(&NodeKind) -> bool) -> bool {
    doc.parent(node)
        .and_then(|parent| doc.kind(parent))
        .is_some_and(pred)
}

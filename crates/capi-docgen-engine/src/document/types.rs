/// Index of a node inside its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The `Document` node every tree starts with.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// The kind of a document node.
///
/// `Text` and `Code` are leaves carrying their literal; everything else is a
/// container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading {
        /// 1 for `#`, 2 for `##`, ...
        level: u8,
    },
    Paragraph,
    /// A run of plain text.
    Text(String),
    /// An inline code span (backticks stripped).
    Code(String),
    CodeBlock,
    Table,
    TableHeader,
    TableBody,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Link {
        url: String,
    },
    List,
    ListItem,
    BlockQuote,
    /// Any construct the extractors have no interest in.
    Other,
}

impl NodeKind {
    /// Leaves are visited once; containers get an entering and a leaving visit.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeKind::Text(_) | NodeKind::Code(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Text(_) => "Text",
            NodeKind::Code(_) => "Code",
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::Table => "Table",
            NodeKind::TableHeader => "TableHeader",
            NodeKind::TableBody => "TableBody",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Link { .. } => "Link",
            NodeKind::List => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::Other => "Other",
        }
    }
}

/// A node with its parent and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// A parsed markdown document.
///
/// Nodes live in a flat arena and refer to each other by [`NodeId`], so
/// parent links need no shared ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates a document holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Appends a new last child of `parent` and returns its id.
    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|node| &node.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Indented one-node-per-line rendering of the tree, for debugging.
    ///
    /// Leaves show their literal: `Text "name"`, `Code "POST /v3/apps"`.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = pending.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            out.push_str(&"  ".repeat(depth));
            out.push_str(node.kind.name());
            match &node.kind {
                NodeKind::Text(literal) | NodeKind::Code(literal) => {
                    out.push_str(&format!(" {literal:?}"));
                }
                NodeKind::Heading { level } => out.push_str(&format!("({level})")),
                _ => {}
            }
            out.push('\n');
            pending.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

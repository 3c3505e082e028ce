use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, TextMergeStream};

use super::types::{Document, NodeId, NodeKind};

/// Builds a [`Document`] from a stream of `pulldown-cmark` events.
///
/// Keeps a stack of open containers; leaves are attached to the top of the
/// stack. The root is never popped, so unbalanced input cannot underflow.
pub struct DocumentBuilder {
    doc: Document,
    open: Vec<NodeId>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            open: vec![NodeId::ROOT],
        }
    }

    pub fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::TableHead) => {
                self.open(NodeKind::TableHeader);
                self.open(NodeKind::TableRow);
            }
            Event::Start(Tag::TableRow) => {
                if self.current_kind() == Some(&NodeKind::Table) {
                    self.open(NodeKind::TableBody);
                }
                self.open(NodeKind::TableRow);
            }
            Event::Start(tag) => self.open(container_kind(tag)),
            Event::End(TagEnd::TableHead) => {
                self.close(); // row
                self.close(); // header
            }
            Event::End(TagEnd::Table) => {
                if self.current_kind() == Some(&NodeKind::TableBody) {
                    self.close();
                }
                self.close();
            }
            Event::End(_) => self.close(),
            Event::Text(text) => self.leaf(NodeKind::Text(text.into_string())),
            Event::Code(code) => self.leaf(NodeKind::Code(code.into_string())),
            // Breaks, rules, html and the rest carry nothing the extractors read.
            _ => {}
        }
    }

    pub fn finish(self) -> Document {
        self.doc
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn current_kind(&self) -> Option<&NodeKind> {
        self.doc.kind(self.current())
    }

    fn open(&mut self, kind: NodeKind) {
        let id = self.doc.push(self.current(), kind);
        self.open.push(id);
    }

    fn close(&mut self) {
        if self.open.len() > 1 {
            self.open.pop();
        }
    }

    fn leaf(&mut self, kind: NodeKind) {
        self.doc.push(self.current(), kind);
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn container_kind(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Heading { level, .. } => NodeKind::Heading { level: level as u8 },
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::CodeBlock(_) => NodeKind::CodeBlock,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Link { dest_url, .. } => NodeKind::Link {
            url: dest_url.into_string(),
        },
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::ListItem,
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        _ => NodeKind::Other,
    }
}

impl Document {
    /// Parses GitHub-flavoured markdown (tables enabled) into a tree.
    ///
    /// Adjacent text events are merged, so a plain run of text is one `Text`
    /// node. Never fails: unsupported constructs become `Other` or are dropped.
    pub fn parse(markdown: &str) -> Self {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
        let mut builder = DocumentBuilder::new();
        for event in TextMergeStream::new(parser) {
            builder.push(event);
        }
        builder.finish()
    }
}

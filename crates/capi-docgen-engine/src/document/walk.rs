use super::types::{Document, NodeId, NodeKind};

/// What the walk should do after a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Continue with the children (entering) or the next node (leaving).
    GoToNext,
    /// Do not descend into this node. Its leaving visit still happens.
    SkipChildren,
    /// Stop the whole walk.
    Terminate,
}

/// Receives one call per node and phase during a depth-first walk.
pub trait NodeVisitor {
    /// Called once before the walk starts.
    fn header(&mut self, _doc: &Document) {}

    /// `entering` is true on the pre-order visit and false on the post-order
    /// visit. Leaves only get the pre-order visit.
    fn visit(&mut self, doc: &Document, node: NodeId, entering: bool) -> WalkStatus;

    /// Called once after the walk finished.
    fn footer(&mut self, _doc: &Document) {}
}

/// Walks the subtree rooted at `node` depth-first.
///
/// A container that asked to terminate on entry still gets its leaving visit.
/// Uses an explicit stack, so nesting depth is bounded by memory only.
pub fn walk<V: NodeVisitor + ?Sized>(doc: &Document, node: NodeId, visitor: &mut V) -> WalkStatus {
    // (node, entering)
    let mut pending = vec![(node, true)];

    while let Some((id, entering)) = pending.pop() {
        if !entering {
            if visitor.visit(doc, id, false) == WalkStatus::Terminate {
                return WalkStatus::Terminate;
            }
            continue;
        }

        let is_leaf = doc.kind(id).is_none_or(NodeKind::is_leaf);
        let status = visitor.visit(doc, id, true);
        if status == WalkStatus::Terminate {
            if !is_leaf {
                visitor.visit(doc, id, false);
            }
            return WalkStatus::Terminate;
        }
        if is_leaf {
            continue;
        }

        pending.push((id, false));
        if status != WalkStatus::SkipChildren {
            pending.extend(doc.children(id).iter().rev().map(|&child| (child, true)));
        }
    }

    WalkStatus::GoToNext
}

/// Runs `visitor` over the whole document: header, walk from the root, footer.
pub fn render<V: NodeVisitor + ?Sized>(doc: &Document, visitor: &mut V) {
    visitor.header(doc);
    walk(doc, doc.root(), visitor);
    visitor.footer(doc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records every call as `kind:phase`.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        skip: Option<&'static str>,
        stop: Option<&'static str>,
    }

    impl NodeVisitor for Recorder {
        fn header(&mut self, _doc: &Document) {
            self.calls.push("header".into());
        }

        fn visit(&mut self, doc: &Document, node: NodeId, entering: bool) -> WalkStatus {
            let name = doc.kind(node).map_or("?", NodeKind::name);
            let phase = if entering { "in" } else { "out" };
            self.calls.push(format!("{name}:{phase}"));
            if entering && self.skip == Some(name) {
                return WalkStatus::SkipChildren;
            }
            if entering && self.stop == Some(name) {
                return WalkStatus::Terminate;
            }
            WalkStatus::GoToNext
        }

        fn footer(&mut self, _doc: &Document) {
            self.calls.push("footer".into());
        }
    }

    fn sample() -> Document {
        let mut doc = Document::new();
        let para = doc.push(doc.root(), NodeKind::Paragraph);
        let strong = doc.push(para, NodeKind::Strong);
        doc.push(strong, NodeKind::Text("a".into()));
        doc.push(para, NodeKind::Code("b".into()));
        doc
    }

    #[test]
    fn test_render_visits_pre_and_post_order() {
        let doc = sample();
        let mut recorder = Recorder::default();

        render(&doc, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                "header",
                "Document:in",
                "Paragraph:in",
                "Strong:in",
                "Text:in",
                "Strong:out",
                "Code:in",
                "Paragraph:out",
                "Document:out",
                "footer",
            ]
        );
    }

    #[test]
    fn test_skip_children_still_leaves_node() {
        let doc = sample();
        let mut recorder = Recorder {
            skip: Some("Strong"),
            ..Recorder::default()
        };

        walk(&doc, doc.root(), &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                "Document:in",
                "Paragraph:in",
                "Strong:in",
                "Strong:out",
                "Code:in",
                "Paragraph:out",
                "Document:out",
            ]
        );
    }

    #[test]
    fn test_terminate_stops_walk() {
        let doc = sample();
        let mut recorder = Recorder {
            stop: Some("Strong"),
            ..Recorder::default()
        };

        let status = walk(&doc, doc.root(), &mut recorder);

        assert_eq!(status, WalkStatus::Terminate);
        assert_eq!(
            recorder.calls,
            vec!["Document:in", "Paragraph:in", "Strong:in", "Strong:out"]
        );
    }

    #[test]
    fn test_walk_deeply_nested_tree() {
        let mut doc = Document::new();
        let mut parent = doc.root();
        for _ in 0..50_000 {
            parent = doc.push(parent, NodeKind::BlockQuote);
        }
        doc.push(parent, NodeKind::Text("x".into()));
        let mut recorder = Recorder::default();

        let status = walk(&doc, doc.root(), &mut recorder);

        assert_eq!(status, WalkStatus::GoToNext);
        // 50_001 containers visited twice, one leaf once
        assert_eq!(recorder.calls.len(), 100_003);
        assert_eq!(recorder.calls[50_001], "Text:in");
        assert_eq!(recorder.calls.last().map(String::as_str), Some("Document:out"));
    }

    #[test]
    fn test_walk_subtree_only() {
        let doc = sample();
        let para = doc.children(doc.root())[0];
        let mut recorder = Recorder::default();

        walk(&doc, para, &mut recorder);

        assert_eq!(recorder.calls.first().map(String::as_str), Some("Paragraph:in"));
        assert_eq!(recorder.calls.last().map(String::as_str), Some("Paragraph:out"));
        assert!(!recorder.calls.iter().any(|call| call.starts_with("Document")));
    }
}

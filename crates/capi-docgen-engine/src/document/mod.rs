//! # Document Tree
//!
//! An owned, arena-backed markdown tree with parent links, plus the generic
//! depth-first walk the extractors are driven by.
//!
//! ## Modules
//!
//! - **`types`**: `Document`, `Node`, `NodeId`, `NodeKind`
//! - **`builder`**: `DocumentBuilder` turning `pulldown-cmark` events into a `Document`
//! - **`walk`**: `NodeVisitor`, `WalkStatus`, `walk` and `render`
//!
//! ## Tree Shape
//!
//! Tables always come out as `Table > (TableHeader | TableBody) > TableRow > TableCell`.
//! `pulldown-cmark` has no table-body tag and puts header cells straight under
//! the head, so the builder inserts the missing `TableBody` and header `TableRow`.

pub mod builder;
pub mod types;
pub mod walk;

pub use builder::DocumentBuilder;
pub use types::{Document, Node, NodeId, NodeKind};
pub use walk::{NodeVisitor, WalkStatus, render, walk};

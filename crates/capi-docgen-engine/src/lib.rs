pub mod document;
pub mod extract;
pub mod io;
pub mod models;

// Re-export key types for easier usage
pub use document::{Document, NodeId, NodeKind, NodeVisitor, WalkStatus, render, walk};
pub use extract::{EndpointExtractor, ParamExtractor, extract_endpoints, is_table_body_cell};
pub use io::*;
pub use models::{Endpoint, Parameter, Request, to_openapi_data_type};

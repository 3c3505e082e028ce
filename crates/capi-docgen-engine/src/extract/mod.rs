//! # Endpoint Extraction
//!
//! Two state machines driven by the document walk:
//!
//! - **`endpoints`**: `EndpointExtractor` follows section headings across the
//!   whole document and starts an `Endpoint` per `METHOD /path` definition
//! - **`params`**: `ParamExtractor` turns the rows of one parameter table body
//!   into `Parameter`s; the endpoint extractor runs it as a sub-walk and then
//!   skips that subtree
//! - **`table`**: tells table-body cells from header cells
//!
//! Extraction never fails. Missing cells, short definitions and unknown types
//! degrade to empty or fallback values.

pub mod endpoints;
pub mod params;
pub mod table;

pub use endpoints::{EndpointExtractor, EndpointState, SECTION_HEADINGS, Section};
pub use params::{ParamEvent, ParamExtractor, ParamState};
pub use table::is_table_body_cell;

use crate::document::{Document, render};
use crate::models::Endpoint;

/// Parses `markdown` and returns the endpoints it documents for `resource_name`.
pub fn extract_endpoints(resource_name: &str, markdown: &str) -> Vec<Endpoint> {
    let doc = Document::parse(markdown);
    let mut extractor = EndpointExtractor::new(resource_name);
    render(&doc, &mut extractor);
    extractor.into_endpoints()
}

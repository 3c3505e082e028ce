use serde::{Deserialize, Serialize};

use super::Parameter;

/// One documented HTTP operation of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Owning resource, derived from the directory the doc lives in.
    pub resource: String,
    pub http_method: String,
    pub route: String,
    /// Request body fields in table row order.
    pub body_parameters: Vec<Parameter>,
    /// Worked request/response examples. Never filled in by the extractors.
    pub requests: Vec<Request>,
}

impl Endpoint {
    pub fn new(
        resource: impl Into<String>,
        http_method: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            resource: resource.into(),
            http_method: http_method.into(),
            route: route.into(),
            body_parameters: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Builds an endpoint from a `METHOD /path` definition code span.
    ///
    /// Only the first two space separated tokens are used. Missing tokens
    /// leave the corresponding field empty.
    pub fn from_definition(resource: impl Into<String>, definition: &str) -> Self {
        let mut tokens = definition.split(' ');
        let http_method = tokens.next().unwrap_or_default();
        let route = tokens.next().unwrap_or_default();
        Self::new(resource, http_method, route)
    }
}

/// A worked HTTP request/response example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub http_method: String,
    pub path: String,
    pub request_body: String,
    pub request_headers: String,
    pub request_query_parameters: Vec<Parameter>,
    pub request_content_type: String,
    pub response_status_code: u16,
    pub response_status_text: String,
    pub response_body: String,
    pub response_headers: String,
    pub response_content_type: String,
    pub curl: String,
}

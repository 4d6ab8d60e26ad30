//! DTOs for the API index served at `/docs`.

use serde::Serialize;

/// Machine-readable index of the public endpoints.
#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointDoc>,
}

/// One documented endpoint.
#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

//! Handler for the API index.

use axum::Json;

use crate::api::dto::docs::{DocsResponse, EndpointDoc};

/// Describes the public endpoints.
///
/// `GET /docs`
pub async fn docs_handler() -> Json<DocsResponse> {
    Json(DocsResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            EndpointDoc {
                method: "POST",
                path: "/shorten/",
                description: "Shorten {\"original_url\": ...}; returns the short code as shorten_url",
            },
            EndpointDoc {
                method: "GET",
                path: "/{short_code}",
                description: "Redirect to the original URL and count the click",
            },
            EndpointDoc {
                method: "GET",
                path: "/stats/",
                description: "List every record with its click count",
            },
            EndpointDoc {
                method: "GET",
                path: "/stats/{short_code}",
                description: "Show one record without counting a click",
            },
            EndpointDoc {
                method: "GET",
                path: "/health",
                description: "Database health check",
            },
        ],
    })
}

//! Document-management dashboard backend.
//!
//! Hexagonal layout: `domain` holds entities, ports, and services; `inbound`
//! exposes them over HTTP; `outbound` implements persistence with Diesel;
//! `server` wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

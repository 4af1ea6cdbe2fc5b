//! Client for the undocumented Rapportive contact-lookup API.
//!
//! # Overview
//! A lookup is two GETs: the status endpoint exchanges an email for a session
//! token, then the contacts endpoint returns the profile for that email when
//! shown the token in `X-Session-Token`.
//!
//! # Design
//! - `RapportiveClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `Transport` is the I/O seam; `UreqTransport` is the blocking default.
//! - `Rapportive` pairs the two and exposes `query`, the single entry point.
//! - Endpoint URLs are templates in `Endpoints`, so tests can aim the client
//!   at the mock server.
//! - Wire types are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod rapportive;
pub mod transport;
pub mod types;

pub use client::RapportiveClient;
pub use config::Endpoints;
pub use error::{RapportiveError, Result};
pub use http::{HttpRequest, HttpResponse, SESSION_TOKEN_HEADER};
pub use rapportive::{query, Rapportive};
pub use transport::{Transport, UreqTransport};
pub use types::{Contact, Membership, Occupation, SessionToken};

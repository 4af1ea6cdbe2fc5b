//! Stateless request builder and response parser for the Rapportive API.
//!
//! # Design
//! `RapportiveClient` holds only its `Endpoints` and carries no mutable state
//! between calls. Each of the two lookup steps is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. A `Transport` executes the round-trip in between.

use tracing::warn;

use crate::config::Endpoints;
use crate::error::{RapportiveError, Result};
use crate::http::{HttpRequest, HttpResponse, SESSION_TOKEN_HEADER};
use crate::types::{Contact, ContactsResult, LoginStatus, SessionToken};

#[derive(Debug, Clone, Default)]
pub struct RapportiveClient {
    endpoints: Endpoints,
}

impl RapportiveClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Step one: ask the status endpoint for a session token.
    pub fn build_login_status(&self, email: &str) -> HttpRequest {
        HttpRequest {
            url: self.endpoints.status_url_for(email),
            headers: Vec::new(),
        }
    }

    pub fn parse_login_status(&self, response: HttpResponse) -> Result<SessionToken> {
        check_status(&response)?;
        let status: LoginStatus = decode(&response.body)?;
        if !status.error.is_empty() {
            warn!(error = %status.error, "login status reported an error");
        }
        Ok(SessionToken::new(status.session_token))
    }

    /// Step two: look up the contact, authorized by the session token.
    pub fn build_get_contact(&self, token: &SessionToken, email: &str) -> HttpRequest {
        HttpRequest {
            url: self.endpoints.contacts_url_for(email),
            headers: vec![(SESSION_TOKEN_HEADER.to_string(), token.as_str().to_string())],
        }
    }

    pub fn parse_get_contact(&self, response: HttpResponse) -> Result<Contact> {
        if response.status == 429 {
            return Err(RapportiveError::RateLimited);
        }
        check_status(&response)?;
        let result: ContactsResult = decode(&response.body)?;
        Ok(result.contact)
    }
}

/// Anything but 200 is a failure.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.status == 200 {
        return Ok(());
    }
    Err(RapportiveError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| RapportiveError::Deserialization(e.to_string()))
}

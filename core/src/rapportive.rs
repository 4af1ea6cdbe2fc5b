//! Two-step contact lookup: session token, then contact.

use tracing::{debug, instrument, warn};

use crate::client::RapportiveClient;
use crate::config::Endpoints;
use crate::error::Result;
use crate::transport::{Transport, UreqTransport};
use crate::types::Contact;

/// A `RapportiveClient` paired with the transport that runs its requests.
///
/// Holds no per-query state; concurrent `query` calls are fine whenever the
/// transport is `Sync`.
#[derive(Debug, Clone)]
pub struct Rapportive<T = UreqTransport> {
    client: RapportiveClient,
    transport: T,
}

impl Rapportive<UreqTransport> {
    /// Public endpoints over a fresh ureq agent.
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self::with_transport(RapportiveClient::new(endpoints), UreqTransport::new())
    }
}

impl Default for Rapportive<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Rapportive<T> {
    pub fn with_transport(client: RapportiveClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &RapportiveClient {
        &self.client
    }

    /// Look up the contact profile for `email`.
    ///
    /// The contacts endpoint is only called once a session token was
    /// obtained. Errors from either step are returned as-is.
    #[instrument(skip(self))]
    pub fn query(&self, email: &str) -> Result<Contact> {
        let request = self.client.build_login_status(email);
        let token = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_login_status(response))
            .inspect_err(|e| warn!(error = %e, "login status failed"))?;

        let request = self.client.build_get_contact(&token, email);
        let contact = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_get_contact(response))
            .inspect_err(|e| warn!(error = %e, "contact lookup failed"))?;

        debug!(
            name = %contact.name,
            occupations = contact.occupations.len(),
            memberships = contact.memberships.len(),
            "contact found"
        );
        Ok(contact)
    }
}

/// Look up `email` against the public endpoints.
pub fn query(email: &str) -> Result<Contact> {
    Rapportive::new().query(email)
}

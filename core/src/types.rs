//! Wire types for the Rapportive API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. The remote API
//! is undocumented and tends to send `null` or omit fields, so every field
//! tolerates both.

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque credential from the status endpoint, good for one contacts lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Structured profile returned for a queried email.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub occupations: Vec<Occupation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub memberships: Vec<Membership>,
}

/// One job entry on a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Occupation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
}

/// One social or site affiliation on a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Membership {
    #[serde(default, deserialize_with = "null_as_default")]
    pub site_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_url: String,
}

/// Body of `GET /login_status`.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_token: String,
}

/// Body of `GET /contacts/email/{email}`. The top-level `name` is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ContactsResult {
    pub contact: Contact,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

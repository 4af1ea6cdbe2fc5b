//! Endpoint configuration.
//!
//! Both endpoints are URL templates with an `{email}` placeholder. The
//! defaults point at the public Rapportive hosts; tests point them at a mock
//! server with `Endpoints::with_base_url`.

/// Placeholder substituted with the percent-encoded subject email.
pub const EMAIL_PLACEHOLDER: &str = "{email}";

pub const DEFAULT_STATUS_URL: &str = "https://rapportive.com/login_status?user_email={email}";
pub const DEFAULT_CONTACTS_URL: &str = "https://profiles.rapportive.com/contacts/email/{email}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub status_url: String,
    pub contacts_url: String,
}

impl Endpoints {
    pub fn new(status_url: impl Into<String>, contacts_url: impl Into<String>) -> Self {
        Self {
            status_url: status_url.into(),
            contacts_url: contacts_url.into(),
        }
    }

    /// Serve both endpoints from one host, e.g. `http://127.0.0.1:3000`.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self::new(
            format!("{base}/login_status?user_email={EMAIL_PLACEHOLDER}"),
            format!("{base}/contacts/email/{EMAIL_PLACEHOLDER}"),
        )
    }

    pub fn status_url_for(&self, email: &str) -> String {
        expand(&self.status_url, email)
    }

    pub fn contacts_url_for(&self, email: &str) -> String {
        expand(&self.contacts_url, email)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_URL, DEFAULT_CONTACTS_URL)
    }
}

fn expand(template: &str, email: &str) -> String {
    template.replace(EMAIL_PLACEHOLDER, &urlencoding::encode(email))
}

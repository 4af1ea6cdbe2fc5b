use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub twitter_username: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub occupations: Vec<Occupation>,
    pub memberships: Vec<Membership>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Occupation {
    pub job_title: String,
    pub company: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Membership {
    pub site_name: String,
    pub username: String,
    pub profile_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginStatus {
    pub error: String,
    pub session_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactsResult {
    pub name: String,
    pub contact: Contact,
}

#[derive(Deserialize)]
pub struct LoginParams {
    pub user_email: String,
}

/// What the mock knows and how it misbehaves.
#[derive(Clone, Debug, Default)]
pub struct Fixture {
    pub contacts: HashMap<String, Contact>,
    /// Answer every `/login_status` call with this status.
    pub login_status: Option<StatusCode>,
    /// Answer every `/contacts/email/{email}` call with this status.
    pub contacts_status: Option<StatusCode>,
    /// Successful lookups allowed before the server answers 429.
    pub lookup_quota: Option<usize>,
}

impl Fixture {
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.insert(contact.email.to_lowercase(), contact);
        self
    }

    /// A directory holding the single "Alice at Acme" profile.
    pub fn alice() -> Self {
        Self::default().with_contact(Contact {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            occupations: vec![Occupation {
                job_title: "Engineer".to_string(),
                company: "Acme".to_string(),
            }],
            ..Contact::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct MockState {
    pub fixture: Fixture,
    sessions: RwLock<HashSet<String>>,
    login_calls: AtomicUsize,
    contact_calls: AtomicUsize,
    lookups: AtomicUsize,
}

impl MockState {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture,
            ..Self::default()
        }
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn contact_calls(&self) -> usize {
        self.contact_calls.load(Ordering::SeqCst)
    }
}

pub type Shared = Arc<MockState>;

pub fn app(state: Shared) -> Router {
    Router::new()
        .route("/login_status", get(login_status))
        .route("/contacts/email/{email}", get(get_contact))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: Shared) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn login_status(
    State(state): State<Shared>,
    Query(params): Query<LoginParams>,
) -> Result<Json<LoginStatus>, StatusCode> {
    state.login_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = state.fixture.login_status {
        return Err(status);
    }

    let token = Uuid::new_v4().to_string();
    state.sessions.write().await.insert(token.clone());
    tracing::debug!(email = %params.user_email, "issued session token");
    Ok(Json(LoginStatus {
        error: String::new(),
        session_token: token,
    }))
}

async fn get_contact(
    State(state): State<Shared>,
    Path(email): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ContactsResult>, StatusCode> {
    state.contact_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = state.fixture.contacts_status {
        return Err(status);
    }

    let token = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::FORBIDDEN)?;
    if !state.sessions.read().await.contains(token) {
        return Err(StatusCode::FORBIDDEN);
    }

    if let Some(quota) = state.fixture.lookup_quota {
        if state.lookups.fetch_add(1, Ordering::SeqCst) >= quota {
            return Err(StatusCode::TOO_MANY_REQUESTS);
        }
    }

    let contact = state
        .fixture
        .contacts
        .get(&email.to_lowercase())
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(ContactsResult {
        name: contact.name.clone(),
        contact,
    }))
}

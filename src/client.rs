use std::borrow::Cow;

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};

use crate::config::{ClientConfig, Credential};
use crate::error::{HubSpotError, Result};
use crate::models::{ContactBody, ListBody, Property, SendEmailRequest};
use crate::transport::{Request, Response, Transport};

// ---------------------------------------------------------------------------
// Internal request building
// ---------------------------------------------------------------------------

/// Credential in the form it is attached to each request.
#[derive(Clone)]
enum Auth {
    Header(HeaderValue),
    QueryKey(String),
}

/// Shared logic for building descriptors and handing them to the transport.
struct BaseClient {
    base_url: String,
    auth: Auth,
    transport: Transport,
}

impl BaseClient {
    fn new(config: ClientConfig) -> Result<Self> {
        let auth = match config.credential {
            Credential::Bearer(tok) => {
                let mut val = HeaderValue::from_str(&format!("Bearer {tok}"))
                    .map_err(|e| HubSpotError::InvalidCredential(e.to_string()))?;
                val.set_sensitive(true);
                Auth::Header(val)
            }
            Credential::ApiKey(key) => Auth::QueryKey(key),
        };

        let http = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            auth,
            transport: Transport::new(http),
        })
    }

    /// Descriptor for `endpoint` with authentication already applied.
    fn request(&self, method: Method, endpoint: &str, ok_status: StatusCode) -> Request {
        let mut req = Request::new(method, format!("{}{endpoint}", self.base_url), ok_status);
        match &self.auth {
            Auth::Header(val) => {
                req.headers.insert(AUTHORIZATION, val.clone());
            }
            Auth::QueryKey(key) => req.query.push(("hapikey", key.clone())),
        }
        req
    }

    fn execute(&self, request: Request) -> Result<Response> {
        self.transport.execute(request)
    }
}

/// Percent-encode `raw` so it stays a single path segment.
fn path_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Main entry point for interacting with the HubSpot API.
///
/// ```no_run
/// use hubspot_client::{HubSpotClient, DEFAULT_BASE_URL};
///
/// let client = HubSpotClient::with_token(DEFAULT_BASE_URL, "pat-na1-...").unwrap();
/// client.email().single_email(12345678, "tyler.durden@gmail.com").unwrap();
/// ```
pub struct HubSpotClient {
    base: BaseClient,
}

impl HubSpotClient {
    /// Create a client from a full configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(config)?,
        })
    }

    /// Client authenticating with `Authorization: Bearer <token>`.
    pub fn with_token(base_url: &str, token: &str) -> Result<Self> {
        Self::new(ClientConfig::new(
            base_url,
            Credential::Bearer(token.to_string()),
        ))
    }

    /// Client authenticating with a `hapikey` query parameter.
    pub fn with_api_key(base_url: &str, api_key: &str) -> Result<Self> {
        Self::new(ClientConfig::new(
            base_url,
            Credential::ApiKey(api_key.to_string()),
        ))
    }

    // -- sub-client accessors ------------------------------------------------

    pub fn email(&self) -> EmailClient<'_> {
        EmailClient { base: &self.base }
    }

    pub fn contacts(&self) -> ContactsClient<'_> {
        ContactsClient { base: &self.base }
    }

    pub fn lists(&self) -> ListsClient<'_> {
        ListsClient { base: &self.base }
    }

    pub fn workflows(&self) -> WorkflowsClient<'_> {
        WorkflowsClient { base: &self.base }
    }
}

// ===========================================================================
// Sub-clients
// ===========================================================================

// ---- Transactional email --------------------------------------------------

pub struct EmailClient<'a> {
    base: &'a BaseClient,
}

impl EmailClient<'_> {
    /// Send template `email_id` to `to` with no personalization.
    pub fn single_email(&self, email_id: u64, to: &str) -> Result<()> {
        self.send(&SendEmailRequest::new(email_id, to))
    }

    /// Send a transactional email.
    ///
    /// Only success or failure is reported; the send result body is dropped.
    pub fn send(&self, email: &SendEmailRequest) -> Result<()> {
        let req = self
            .base
            .request(
                Method::POST,
                "/email/public/v1/singleEmail/send",
                StatusCode::OK,
            )
            .json(email)?;
        self.base.execute(req)?;
        Ok(())
    }
}

// ---- Contacts -------------------------------------------------------------

pub struct ContactsClient<'a> {
    base: &'a BaseClient,
}

impl ContactsClient<'_> {
    /// Create the contact keyed by `email`, or update it if it exists.
    /// `email` is percent-encoded into the path.
    ///
    /// The returned body decodes into
    /// [`ContactUpsertResult`](crate::models::ContactUpsertResult).
    pub fn create_or_update(&self, email: &str, properties: &[Property]) -> Result<Response> {
        let body = ContactBody {
            properties: properties.to_vec(),
        };
        let req = self
            .base
            .request(
                Method::POST,
                &format!(
                    "/contacts/v1/contact/createOrUpdate/email/{}",
                    path_segment(email)
                ),
                StatusCode::OK,
            )
            .json(&body)?;
        self.base.execute(req)
    }
}

// ---- Lists ----------------------------------------------------------------

pub struct ListsClient<'a> {
    base: &'a BaseClient,
}

impl ListsClient<'_> {
    /// Add contacts to static list `list_id`.
    pub fn add_contacts(&self, list_id: u64, emails: &[String]) -> Result<Response> {
        self.update_membership(list_id, emails, "add")
    }

    /// Remove contacts from static list `list_id`.
    pub fn remove_contacts(&self, list_id: u64, emails: &[String]) -> Result<Response> {
        self.update_membership(list_id, emails, "remove")
    }

    fn update_membership(&self, list_id: u64, emails: &[String], action: &str) -> Result<Response> {
        let body = ListBody {
            emails: emails.to_vec(),
        };
        let req = self
            .base
            .request(
                Method::POST,
                &format!("/contacts/v1/lists/{list_id}/{action}"),
                StatusCode::OK,
            )
            .json(&body)?;
        self.base.execute(req)
    }
}

// ---- Workflows ------------------------------------------------------------

pub struct WorkflowsClient<'a> {
    base: &'a BaseClient,
}

impl WorkflowsClient<'_> {
    /// Enroll the contact `email` in `workflow_id`.
    ///
    /// An unknown contact or workflow fails with an API error whose message
    /// contains `404 Not Found`.
    pub fn enroll(&self, email: &str, workflow_id: u64) -> Result<()> {
        self.update_enrollment(email, workflow_id, Method::POST)
    }

    /// Remove the contact `email` from `workflow_id`.
    pub fn unenroll(&self, email: &str, workflow_id: u64) -> Result<()> {
        self.update_enrollment(email, workflow_id, Method::DELETE)
    }

    fn update_enrollment(&self, email: &str, workflow_id: u64, method: Method) -> Result<()> {
        let req = self.base.request(
            method,
            &format!(
                "/automation/v2/workflows/{workflow_id}/enrollments/contacts/{}",
                path_segment(email)
            ),
            StatusCode::NO_CONTENT,
        );
        self.base.execute(req)?;
        Ok(())
    }
}

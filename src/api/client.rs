//! Authenticated request gateway for the Handraise backend.
//!
//! Every outbound call goes through `ApiClient`: relative paths are joined
//! onto the backend origin resolved at startup, the bearer credential is
//! attached, and the response runs through the unauthorized interceptor.
//! A 401 anywhere clears the credential store and emits a single
//! session-invalidated event; no call site carries its own logout logic.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::auth::{CredentialStore, SessionEvents};
use crate::models::{
    Application, Conversation, CurrentUser, MatchEntry, Message, Opportunity, OrgOpportunityRow,
    Role,
};
use crate::notify::Notifier;

use super::ApiError;

/// HTTP request timeout in seconds.
/// Generous enough for the match ranking endpoint, which embeds on demand.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    content: &'a str,
}

/// API client for the Handraise backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    origin: String,
    store: Arc<CredentialStore>,
    events: SessionEvents,
    notifier: Notifier,
}

impl ApiClient {
    /// Create a new API client against the given backend origin.
    ///
    /// The origin is resolved once at startup and is immutable afterwards.
    pub fn new(
        origin: impl Into<String>,
        store: Arc<CredentialStore>,
        events: SessionEvents,
        notifier: Notifier,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
            store,
            events,
            notifier,
        })
    }

    /// Resolve a request target: absolute URLs pass through, relative paths
    /// are joined onto the backend origin.
    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.origin, path)
        }
    }

    /// Start a request against the backend.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.endpoint(path))
    }

    /// Dispatch a request with the credential attached.
    ///
    /// The bearer header is injected only when the caller has not supplied
    /// its own Authorization header. The raw response is returned even for
    /// non-2xx statuses; callers inspect the status themselves. The one
    /// exception in behavior is the unauthorized interceptor: a 401 clears
    /// the credential store and emits the session-invalidated event before
    /// the response is handed back.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let mut request = builder.build()?;

        if !request.headers().contains_key(header::AUTHORIZATION) {
            if let Some(token) = self.store.get() {
                let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::InvalidResponse(format!("Invalid bearer token: {e}")))?;
                request.headers_mut().insert(header::AUTHORIZATION, value);
            }
        }

        let url = request.url().clone();
        let response = self.client.execute(request).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // Centralized interceptor. clear() reports whether a credential
            // was present, so concurrent 401s produce exactly one event and
            // one notice.
            debug!(url = %url, "Authorization failure; invalidating session");
            if self.store.clear() {
                self.events.invalidated();
                self.notifier.error("Session expired, please sign in again");
            }
        }

        Ok(response)
    }

    /// Map a non-2xx response to `ApiError`, surfacing the server-supplied
    /// detail on the advisory channel.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        // The interceptor already announced 401s.
        if !matches!(err, ApiError::Unauthorized) {
            self.notifier.error(err.notice());
        }
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    // ===== Authentication =====

    /// Exchange credentials for a bearer token and store it.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let token: TokenResponse = self
            .post_json("/auth/login", &CredentialsBody { email, password })
            .await?;
        self.store.set(&token.access_token);
        Ok(())
    }

    /// Create an account. The backend issues a token on registration, which
    /// is stored like a login.
    pub async fn register(&self, email: &str, password: &str, role: Role) -> Result<(), ApiError> {
        let token: TokenResponse = self
            .post_json(
                "/auth/register",
                &RegisterBody {
                    email,
                    password,
                    role,
                },
            )
            .await?;
        self.store.set(&token.access_token);
        Ok(())
    }

    /// Resolve the identity behind the current credential.
    pub async fn fetch_me(&self) -> Result<CurrentUser, ApiError> {
        self.get_json("/auth/me").await
    }

    // ===== Opportunities =====

    pub async fn search_opportunities(&self) -> Result<Vec<Opportunity>, ApiError> {
        self.get_json("/opportunity/search").await
    }

    pub async fn fetch_opportunity(&self, id: &str) -> Result<Opportunity, ApiError> {
        self.get_json(&format!("/opportunity/{}", id)).await
    }

    // ===== Matching =====

    /// Ranked matches for the signed-in volunteer.
    ///
    /// The endpoint answers with SSE-style `data: id|title|score` lines;
    /// the body is buffered and parsed tolerantly.
    pub async fn fetch_my_matches(&self) -> Result<Vec<MatchEntry>, ApiError> {
        let response = self.execute(self.request(Method::GET, "/match/me")).await?;
        let response = self.check(response).await?;
        let body = response.text().await?;
        Ok(MatchEntry::parse_stream(&body))
    }

    // ===== Applications =====

    pub async fn apply_to_opportunity(&self, opportunity_id: &str) -> Result<Application, ApiError> {
        self.post_json(
            &format!("/application/{}/apply", opportunity_id),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn fetch_my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get_json("/applications/me").await
    }

    // ===== Conversations =====

    pub async fn fetch_conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        self.get_json("/conversation").await
    }

    pub async fn fetch_messages(&self, conversation_id: &str) -> Result<Vec<Message>, ApiError> {
        self.get_json(&format!("/conversation/{}/messages", conversation_id))
            .await
    }

    pub async fn send_message(
        &self,
        conversation_id: &str,
        content: &str,
    ) -> Result<Message, ApiError> {
        self.post_json(
            &format!("/conversation/{}/message", conversation_id),
            &MessageBody { content },
        )
        .await
    }

    // ===== Organization =====

    pub async fn fetch_org_opportunities(&self) -> Result<Vec<OrgOpportunityRow>, ApiError> {
        self.get_json("/org/opportunities").await
    }
}

//! Application state management for the Handraise client.
//!
//! The `App` struct owns the core session machinery (credential store,
//! request gateway, session query, navigator) plus per-screen data and
//! form state. Network work runs on background tasks whose results come
//! back over an mpsc channel and are applied between frames; the
//! session-invalidated signal from the gateway is consumed the same way,
//! so a 401 anywhere lands the user on the login screen within one turn
//! of the loop.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::auth::{CredentialStore, SessionEvents, SessionQuery, SessionState};
use crate::config::Config;
use crate::models::{
    Application, Conversation, CurrentUser, MatchEntry, Message, Opportunity, OrgOpportunityRow,
    Role,
};
use crate::notify::{Notice, Notifier};
use crate::routes::{Navigator, Route, RouteGuard};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// 32 covers a full screen refresh (a handful of fetches) with headroom.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for email input.
pub const MAX_EMAIL_LENGTH: usize = 50;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum length for a chat message draft.
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Number of items to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    Composing,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    Button,
}

/// Signup form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupFocus {
    Email,
    Password,
    Role,
    Button,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginFocus,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for LoginFocus {
    fn default() -> Self {
        LoginFocus::Email
    }
}

impl Default for SignupFocus {
    fn default() -> Self {
        SignupFocus::Email
    }
}

impl LoginForm {
    pub fn push_email(&mut self, c: char) {
        if self.email.len() < MAX_EMAIL_LENGTH && !c.is_control() {
            self.email.push(c);
        }
    }

    pub fn push_password(&mut self, c: char) {
        if self.password.len() < MAX_PASSWORD_LENGTH && !c.is_control() {
            self.password.push(c);
        }
    }
}

#[derive(Debug)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub focus: SignupFocus,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: Role::Volunteer,
            focus: SignupFocus::default(),
            error: None,
            submitting: false,
        }
    }
}

impl SignupForm {
    pub fn push_email(&mut self, c: char) {
        if self.email.len() < MAX_EMAIL_LENGTH && !c.is_control() {
            self.email.push(c);
        }
    }

    pub fn push_password(&mut self, c: char) {
        if self.password.len() < MAX_PASSWORD_LENGTH && !c.is_control() {
            self.password.push(c);
        }
    }
}

/// Per-fetch in-flight flags. A hung request leaves its flag set; there is
/// no cancellation model.
#[derive(Debug, Default)]
pub struct LoadingFlags {
    pub identity: bool,
    pub opportunities: bool,
    pub opportunity_detail: bool,
    pub matches: bool,
    pub applications: bool,
    pub conversations: bool,
    pub messages: bool,
    pub org: bool,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Results delivered from background fetch tasks.
///
/// `None` payloads mean the fetch failed: the advisory notice was already
/// emitted by the gateway, the loading flag is dropped, and existing data
/// is kept as the fallback value.
enum RefreshResult {
    Identity(Option<CurrentUser>),
    Opportunities(Option<Vec<Opportunity>>),
    OpportunityDetail(Option<Box<Opportunity>>),
    Matches(Option<Vec<MatchEntry>>),
    Applications(Option<Vec<Application>>),
    Conversations(Option<Vec<Conversation>>),
    Messages(String, Option<Vec<Message>>),
    MessageSent(String, Option<Message>),
    OrgOpportunities(Option<Vec<OrgOpportunityRow>>),
    Applied(Option<Box<Application>>),
    LoginFinished(Result<Option<CurrentUser>, String>),
    SignupFinished(Result<Option<CurrentUser>, String>),
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub store: Arc<CredentialStore>,
    pub api: ApiClient,
    pub session: Arc<SessionQuery>,
    pub navigator: Navigator,

    // Session resolution as seen by the UI
    pub session_state: SessionState,
    events: SessionEvents,
    session_rx: watch::Receiver<u64>,

    // Notifications
    notifier: Notifier,
    notice_rx: mpsc::UnboundedReceiver<Notice>,
    pub status_message: Option<String>,

    // UI state
    pub state: AppState,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,

    // Screen data
    pub opportunities: Vec<Opportunity>,
    pub opportunity_selection: usize,
    pub opportunity_query: String,
    pub selected_opportunity: Option<Opportunity>,
    pub matches: Vec<MatchEntry>,
    pub match_selection: usize,
    pub applications: Vec<Application>,
    pub conversations: Vec<Conversation>,
    pub conversation_selection: usize,
    pub messages: HashMap<String, Vec<Message>>,
    pub compose_input: String,
    pub org_rows: Vec<OrgOpportunityRow>,
    pub org_selection: usize,
    pub loading: LoadingFlags,

    // Background task channel
    refresh_rx: mpsc::Receiver<RefreshResult>,
    refresh_tx: mpsc::Sender<RefreshResult>,
}

impl App {
    /// Create a new application instance.
    ///
    /// The credential store is injected so tests can run against an
    /// in-memory slot; production passes the keychain-backed store.
    pub fn new(config: Config, store: Arc<CredentialStore>) -> Result<Self> {
        let events = SessionEvents::new();
        let session_rx = events.subscribe();
        let (notifier, notice_rx) = Notifier::channel();

        let api = ApiClient::new(
            config.backend_origin(),
            store.clone(),
            events.clone(),
            notifier.clone(),
        )?;
        let session = Arc::new(SessionQuery::new(api.clone(), store.clone()));

        // With a persisted credential, start on the dashboard and let the
        // session resolve; without one, there is nothing to resolve.
        let (initial_route, session_state) = if store.get().is_some() {
            (Route::Dashboard, SessionState::Loading)
        } else {
            (Route::Landing, SessionState::Anonymous)
        };

        let (refresh_tx, refresh_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let login_form = LoginForm {
            email: config.last_email.clone().unwrap_or_default(),
            ..LoginForm::default()
        };

        Ok(Self {
            config,
            store,
            api,
            session,
            navigator: Navigator::new(initial_route),
            session_state,
            events,
            session_rx,
            notifier,
            notice_rx,
            status_message: None,
            state: AppState::Normal,
            login_form,
            signup_form: SignupForm::default(),
            opportunities: Vec::new(),
            opportunity_selection: 0,
            opportunity_query: String::new(),
            selected_opportunity: None,
            matches: Vec::new(),
            match_selection: 0,
            applications: Vec::new(),
            conversations: Vec::new(),
            conversation_selection: 0,
            messages: HashMap::new(),
            compose_input: String::new(),
            org_rows: Vec::new(),
            org_selection: 0,
            loading: LoadingFlags::default(),
            refresh_rx,
            refresh_tx,
        })
    }

    /// Kick off the initial identity resolution.
    pub fn start(&mut self) {
        if matches!(self.session_state, SessionState::Loading) {
            self.resolve_identity();
        }
    }

    // =========================================================================
    // Session & guard
    // =========================================================================

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::evaluate(&self.session_state)
    }

    /// Replace a protected route with the login view once the session has
    /// resolved absent. Loading never redirects.
    pub fn enforce_route_guard(&mut self) {
        if self.navigator.current().is_protected()
            && matches!(self.guard(), RouteGuard::Unauthorized)
        {
            self.navigator.replace(Route::Login);
        }
    }

    /// React to the gateway's session-invalidated signal.
    fn handle_session_invalidated(&mut self) {
        info!("Session invalidated; returning to login");
        self.session.invalidate();
        self.session_state = SessionState::Anonymous;
        self.enforce_route_guard();
    }

    /// Apply everything that arrived since the last frame: the invalidation
    /// signal, background fetch results, and advisory notices.
    pub fn tick(&mut self) {
        if self.session_rx.has_changed().unwrap_or(false) {
            self.session_rx.borrow_and_update();
            self.handle_session_invalidated();
        }

        while let Ok(result) = self.refresh_rx.try_recv() {
            self.apply_refresh(result);
        }

        while let Ok(notice) = self.notice_rx.try_recv() {
            self.status_message = Some(notice.text);
        }

        self.enforce_route_guard();
    }

    fn resolve_identity(&mut self) {
        if self.loading.identity {
            return;
        }
        self.loading.identity = true;

        let session = self.session.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let user = session.current().await;
            let _ = tx.send(RefreshResult::Identity(user)).await;
        });
    }

    /// Explicit logout: clear the credential through the store API and
    /// force the session query to re-evaluate. Rides the same invalidation
    /// signal as a gateway-detected 401 so both paths converge.
    pub fn logout(&mut self) {
        let session = self.session.clone();
        tokio::spawn(async move {
            session.logout().await;
        });
        self.events.invalidated();
        self.session_state = SessionState::Anonymous;
        self.navigator.replace(Route::Login);
        self.notifier.info("Signed out");
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Switch top-level screens (replace semantics, like a tab bar).
    pub fn goto(&mut self, route: Route) {
        self.navigator.replace(route.clone());
        self.load_route_data(&route);
    }

    /// Re-fetch whatever the current screen shows.
    pub fn refresh_current(&mut self) {
        let route = self.navigator.current().clone();
        self.load_route_data(&route);
    }

    /// Drill into an opportunity (push semantics so Esc returns).
    pub fn open_opportunity(&mut self, id: String) {
        self.selected_opportunity = None;
        self.navigator.push(Route::OpportunityDetail(id.clone()));
        self.fetch_opportunity_detail(id);
    }

    /// Fetches needed by a screen the user just landed on.
    fn load_route_data(&mut self, route: &Route) {
        match route {
            Route::Dashboard => {
                self.refresh_matches();
                self.refresh_applications();
            }
            Route::Opportunities => self.refresh_opportunities(),
            Route::OpportunityDetail(id) => self.fetch_opportunity_detail(id.clone()),
            Route::Messages => self.refresh_conversations(),
            Route::OrgDashboard => self.refresh_org_opportunities(),
            Route::Landing | Route::Login | Route::Signup => {}
        }
    }

    // =========================================================================
    // Authentication flows
    // =========================================================================

    /// Attempt login with the credentials from the login form
    pub fn attempt_login(&mut self) {
        if self.login_form.submitting {
            return;
        }
        if self.login_form.email.is_empty() || self.login_form.password.is_empty() {
            self.login_form.error = Some("Email and password required".to_string());
            return;
        }
        self.login_form.error = None;
        self.login_form.submitting = true;

        let api = self.api.clone();
        let session = self.session.clone();
        let tx = self.refresh_tx.clone();
        let email = self.login_form.email.clone();
        let password = self.login_form.password.clone();
        tokio::spawn(async move {
            let outcome = match api.login(&email, &password).await {
                Ok(()) => Ok(session.refresh().await),
                Err(e) => Err(Self::login_error_message(&e)),
            };
            let _ = tx.send(RefreshResult::LoginFinished(outcome)).await;
        });
    }

    /// Attempt account creation with the signup form
    pub fn attempt_signup(&mut self) {
        if self.signup_form.submitting {
            return;
        }
        if self.signup_form.email.is_empty() || self.signup_form.password.is_empty() {
            self.signup_form.error = Some("Email and password required".to_string());
            return;
        }
        self.signup_form.error = None;
        self.signup_form.submitting = true;

        let api = self.api.clone();
        let session = self.session.clone();
        let tx = self.refresh_tx.clone();
        let email = self.signup_form.email.clone();
        let password = self.signup_form.password.clone();
        let role = self.signup_form.role;
        tokio::spawn(async move {
            let outcome = match api.register(&email, &password, role).await {
                Ok(()) => Ok(session.refresh().await),
                Err(e) => Err(Self::login_error_message(&e)),
            };
            let _ = tx.send(RefreshResult::SignupFinished(outcome)).await;
        });
    }

    /// User-facing message for a failed login or signup exchange.
    fn login_error_message(err: &ApiError) -> String {
        match err {
            ApiError::Unauthorized => "Invalid email or password".to_string(),
            ApiError::Validation(detail) if !detail.is_empty() => detail.clone(),
            ApiError::Network(_) => {
                "Unable to connect to server. Check your internet connection.".to_string()
            }
            other => format!("Sign in failed: {}", other),
        }
    }

    fn finish_signin(&mut self, user: Option<CurrentUser>) {
        match user {
            Some(user) => {
                self.session_state = SessionState::Authenticated(user);
                self.config.last_email = Some(self.login_form.email.clone());
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }
                self.login_form.password.clear();
                self.login_form.error = None;
                self.signup_form = SignupForm::default();
                self.navigator.replace(Route::Dashboard);
                self.load_route_data(&Route::Dashboard);
                info!("Signed in");
            }
            None => {
                // Token exchange succeeded but the identity call failed;
                // treat as unauthenticated and let the user retry.
                self.session_state = SessionState::Anonymous;
                self.login_form.error = Some("Signed in, but the session could not be resolved".to_string());
            }
        }
    }

    // =========================================================================
    // Data fetches
    // =========================================================================

    fn refresh_opportunities(&mut self) {
        if self.loading.opportunities {
            return;
        }
        self.loading.opportunities = true;

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.search_opportunities().await.ok();
            let _ = tx.send(RefreshResult::Opportunities(result)).await;
        });
    }

    fn fetch_opportunity_detail(&mut self, id: String) {
        if self.loading.opportunity_detail {
            return;
        }
        self.loading.opportunity_detail = true;

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_opportunity(&id).await.ok().map(Box::new);
            let _ = tx.send(RefreshResult::OpportunityDetail(result)).await;
        });
    }

    fn refresh_matches(&mut self) {
        if self.loading.matches {
            return;
        }
        self.loading.matches = true;

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_my_matches().await.ok();
            let _ = tx.send(RefreshResult::Matches(result)).await;
        });
    }

    fn refresh_applications(&mut self) {
        if self.loading.applications {
            return;
        }
        self.loading.applications = true;

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_my_applications().await.ok();
            let _ = tx.send(RefreshResult::Applications(result)).await;
        });
    }

    fn refresh_conversations(&mut self) {
        if self.loading.conversations {
            return;
        }
        self.loading.conversations = true;

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_conversations().await.ok();
            let _ = tx.send(RefreshResult::Conversations(result)).await;
        });
    }

    pub fn fetch_messages_for_selected(&mut self) {
        let Some(conversation) = self.conversations.get(self.conversation_selection) else {
            return;
        };
        if self.loading.messages {
            return;
        }
        self.loading.messages = true;

        let id = conversation.id.clone();
        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_messages(&id).await.ok();
            let _ = tx.send(RefreshResult::Messages(id, result)).await;
        });
    }

    pub fn send_current_message(&mut self) {
        let content = self.compose_input.trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(conversation) = self.conversations.get(self.conversation_selection) else {
            return;
        };

        let id = conversation.id.clone();
        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.send_message(&id, &content).await.ok();
            let _ = tx.send(RefreshResult::MessageSent(id, result)).await;
        });
        self.compose_input.clear();
    }

    fn refresh_org_opportunities(&mut self) {
        if self.loading.org {
            return;
        }
        self.loading.org = true;

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_org_opportunities().await.ok();
            let _ = tx.send(RefreshResult::OrgOpportunities(result)).await;
        });
    }

    /// Apply to the opportunity currently open in the detail view.
    pub fn apply_to_selected(&mut self) {
        let Some(opportunity) = &self.selected_opportunity else {
            return;
        };

        let id = opportunity.id.clone();
        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            let result = api.apply_to_opportunity(&id).await.ok().map(Box::new);
            let _ = tx.send(RefreshResult::Applied(result)).await;
        });
    }

    fn apply_refresh(&mut self, result: RefreshResult) {
        match result {
            RefreshResult::Identity(user) => {
                self.loading.identity = false;
                match user {
                    Some(user) => {
                        self.session_state = SessionState::Authenticated(user);
                        let route = self.navigator.current().clone();
                        self.load_route_data(&route);
                    }
                    None => self.session_state = SessionState::Anonymous,
                }
            }
            RefreshResult::Opportunities(list) => {
                self.loading.opportunities = false;
                if let Some(list) = list {
                    self.opportunities = list;
                    self.opportunity_selection = self
                        .opportunity_selection
                        .min(self.opportunities.len().saturating_sub(1));
                }
            }
            RefreshResult::OpportunityDetail(detail) => {
                self.loading.opportunity_detail = false;
                if let Some(detail) = detail {
                    self.selected_opportunity = Some(*detail);
                }
            }
            RefreshResult::Matches(list) => {
                self.loading.matches = false;
                if let Some(list) = list {
                    self.matches = list;
                    self.match_selection =
                        self.match_selection.min(self.matches.len().saturating_sub(1));
                }
            }
            RefreshResult::Applications(list) => {
                self.loading.applications = false;
                if let Some(list) = list {
                    self.applications = list;
                }
            }
            RefreshResult::Conversations(list) => {
                self.loading.conversations = false;
                if let Some(list) = list {
                    self.conversations = list;
                    self.conversation_selection = self
                        .conversation_selection
                        .min(self.conversations.len().saturating_sub(1));
                    self.fetch_messages_for_selected();
                }
            }
            RefreshResult::Messages(conversation_id, list) => {
                self.loading.messages = false;
                if let Some(list) = list {
                    self.messages.insert(conversation_id, list);
                }
            }
            RefreshResult::MessageSent(conversation_id, message) => {
                if let Some(message) = message {
                    self.messages
                        .entry(conversation_id)
                        .or_default()
                        .push(message);
                } else {
                    debug!("Message send failed");
                }
            }
            RefreshResult::OrgOpportunities(rows) => {
                self.loading.org = false;
                if let Some(rows) = rows {
                    self.org_rows = rows;
                    self.org_selection =
                        self.org_selection.min(self.org_rows.len().saturating_sub(1));
                }
            }
            RefreshResult::Applied(application) => {
                if let Some(application) = application {
                    self.applications.push(*application);
                    self.notifier.info("Application submitted");
                }
            }
            RefreshResult::LoginFinished(outcome) => {
                self.login_form.submitting = false;
                match outcome {
                    Ok(user) => self.finish_signin(user),
                    Err(message) => self.login_form.error = Some(message),
                }
            }
            RefreshResult::SignupFinished(outcome) => {
                self.signup_form.submitting = false;
                match outcome {
                    Ok(user) => {
                        // Registration issues a token just like login.
                        self.login_form.email = self.signup_form.email.clone();
                        self.finish_signin(user);
                    }
                    Err(message) => self.signup_form.error = Some(message),
                }
            }
        }
    }

    // =========================================================================
    // Screen helpers
    // =========================================================================

    /// Opportunities matching the current search query.
    pub fn filtered_opportunities(&self) -> Vec<&Opportunity> {
        if self.opportunity_query.is_empty() {
            self.opportunities.iter().collect()
        } else {
            self.opportunities
                .iter()
                .filter(|o| {
                    crate::utils::contains_ignore_case(&o.title, &self.opportunity_query)
                        || crate::utils::contains_ignore_case(&o.description, &self.opportunity_query)
                })
                .collect()
        }
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.conversations.get(self.conversation_selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let config = Config {
            backend_url: Some("http://127.0.0.1:9".to_string()),
            last_email: None,
        };
        App::new(config, Arc::new(CredentialStore::unbacked())).expect("build app")
    }

    fn volunteer() -> CurrentUser {
        CurrentUser {
            id: "u-1".to_string(),
            email: "vol@example.org".to_string(),
            role: Role::Volunteer,
        }
    }

    #[test]
    fn test_starts_on_landing_without_credential() {
        let app = test_app();
        assert_eq!(*app.navigator.current(), Route::Landing);
        assert_eq!(app.session_state, SessionState::Anonymous);
    }

    #[test]
    fn test_starts_on_dashboard_with_persisted_credential() {
        let store = Arc::new(CredentialStore::unbacked());
        store.set("persisted");
        let config = Config {
            backend_url: Some("http://127.0.0.1:9".to_string()),
            last_email: None,
        };
        let app = App::new(config, store).expect("build app");

        assert_eq!(*app.navigator.current(), Route::Dashboard);
        assert_eq!(app.session_state, SessionState::Loading);
    }

    #[tokio::test]
    async fn test_invalidation_event_redirects_within_one_tick() {
        let mut app = test_app();
        app.session_state = SessionState::Authenticated(volunteer());
        app.navigator.replace(Route::Dashboard);

        app.events.invalidated();
        app.tick();

        assert_eq!(*app.navigator.current(), Route::Login);
        assert_eq!(app.session_state, SessionState::Anonymous);
    }

    #[test]
    fn test_loading_session_does_not_redirect() {
        let mut app = test_app();
        app.session_state = SessionState::Loading;
        app.navigator.replace(Route::Dashboard);

        app.enforce_route_guard();
        assert_eq!(*app.navigator.current(), Route::Dashboard);
    }

    #[test]
    fn test_unauthorized_guard_leaves_public_routes_alone() {
        let mut app = test_app();
        app.session_state = SessionState::Anonymous;
        app.navigator.replace(Route::Signup);

        app.enforce_route_guard();
        assert_eq!(*app.navigator.current(), Route::Signup);
    }

    #[tokio::test]
    async fn test_notices_drain_into_status_message() {
        let mut app = test_app();
        app.notifier.error("Something went sideways");
        app.tick();
        assert_eq!(app.status_message.as_deref(), Some("Something went sideways"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut app = test_app();
        app.login_form.email = "vol@example.org".to_string();
        app.attempt_login();

        assert!(!app.login_form.submitting);
        assert_eq!(
            app.login_form.error.as_deref(),
            Some("Email and password required")
        );
    }

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            App::login_error_message(&ApiError::Unauthorized),
            "Invalid email or password"
        );
        assert_eq!(
            App::login_error_message(&ApiError::Validation("Invalid credentials".to_string())),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_filtered_opportunities() {
        let mut app = test_app();
        app.opportunities = vec![
            Opportunity {
                id: "1".to_string(),
                org_id: None,
                title: "Food bank sorter".to_string(),
                description: String::new(),
                skills_required: vec![],
                min_hours: 2,
                start_date: None,
                end_date: None,
                is_remote: false,
                status: crate::models::OpportunityStatus::Open,
            },
            Opportunity {
                id: "2".to_string(),
                org_id: None,
                title: "Garden helper".to_string(),
                description: "weeding and watering".to_string(),
                skills_required: vec![],
                min_hours: 2,
                start_date: None,
                end_date: None,
                is_remote: false,
                status: crate::models::OpportunityStatus::Open,
            },
        ];

        app.opportunity_query = "garden".to_string();
        let filtered = app.filtered_opportunities();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }
}

//! Route table, navigation history, and the route guard.
//!
//! Which screens require a session is a static property of the route, not
//! runtime state. The guard itself is a three-state tagged value derived
//! from the session resolution every frame; it holds nothing of its own.

use crate::auth::SessionState;

/// Addressable screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Opportunities,
    OpportunityDetail(String),
    Messages,
    OrgDashboard,
}

impl Route {
    /// Whether this screen requires a resolved session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Landing | Route::Login | Route::Signup)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Login => "Sign in",
            Route::Signup => "Create account",
            Route::Dashboard => "Dashboard",
            Route::Opportunities => "Opportunities",
            Route::OpportunityDetail(_) => "Opportunity",
            Route::Messages => "Messages",
            Route::OrgDashboard => "Organization",
        }
    }
}

/// Admission decision for the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// Session not yet resolved: render nothing protected, do not redirect.
    Loading,
    /// Session present: children render.
    Authorized,
    /// Session resolved absent: replace with the login view.
    Unauthorized,
}

impl RouteGuard {
    pub fn evaluate(state: &SessionState) -> Self {
        match state {
            SessionState::Loading => RouteGuard::Loading,
            SessionState::Authenticated(_) => RouteGuard::Authorized,
            SessionState::Anonymous => RouteGuard::Unauthorized,
        }
    }
}

/// Navigation history.
///
/// `replace` swaps the current entry so a guard redirect cannot be backed
/// out of; navigation to the already-active route is a no-op.
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn push(&mut self, route: Route) {
        if self.current == route {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    pub fn replace(&mut self, route: Route) {
        if self.current == route {
            return;
        }
        self.current = route;
    }

    /// Pop back one entry. Returns false at the root.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentUser, Role};

    fn authenticated() -> SessionState {
        SessionState::Authenticated(CurrentUser {
            id: "u-1".to_string(),
            email: "vol@example.org".to_string(),
            role: Role::Volunteer,
        })
    }

    #[test]
    fn test_protected_classification() {
        assert!(!Route::Landing.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Signup.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Opportunities.is_protected());
        assert!(Route::OpportunityDetail("x".to_string()).is_protected());
        assert!(Route::Messages.is_protected());
        assert!(Route::OrgDashboard.is_protected());
    }

    #[test]
    fn test_guard_follows_session_resolution() {
        assert_eq!(
            RouteGuard::evaluate(&SessionState::Loading),
            RouteGuard::Loading
        );
        assert_eq!(
            RouteGuard::evaluate(&authenticated()),
            RouteGuard::Authorized
        );
        assert_eq!(
            RouteGuard::evaluate(&SessionState::Anonymous),
            RouteGuard::Unauthorized
        );
    }

    #[test]
    fn test_guard_never_authorizes_while_loading() {
        // The no-flash invariant: Loading is its own state, not a weaker
        // form of Authorized.
        assert_ne!(
            RouteGuard::evaluate(&SessionState::Loading),
            RouteGuard::Authorized
        );
    }

    #[test]
    fn test_replace_is_not_back_navigable() {
        let mut nav = Navigator::new(Route::Landing);
        nav.push(Route::Dashboard);
        nav.replace(Route::Login);

        assert_eq!(*nav.current(), Route::Login);
        assert!(nav.back());
        // Back lands on what preceded the replaced entry, never the
        // protected view that was evicted.
        assert_eq!(*nav.current(), Route::Landing);
    }

    #[test]
    fn test_navigation_to_active_route_is_noop() {
        let mut nav = Navigator::new(Route::Login);
        nav.replace(Route::Login);
        nav.replace(Route::Login);
        nav.push(Route::Login);

        assert_eq!(*nav.current(), Route::Login);
        assert!(!nav.back(), "stack should still be a single entry");
    }

    #[test]
    fn test_back_stops_at_root() {
        let mut nav = Navigator::new(Route::Landing);
        assert!(!nav.back());
        assert_eq!(*nav.current(), Route::Landing);
    }

    #[test]
    fn test_push_and_back_roundtrip() {
        let mut nav = Navigator::new(Route::Opportunities);
        nav.push(Route::OpportunityDetail("o-1".to_string()));
        assert_eq!(*nav.current(), Route::OpportunityDetail("o-1".to_string()));
        assert!(nav.back());
        assert_eq!(*nav.current(), Route::Opportunities);
    }
}

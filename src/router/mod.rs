use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Role, User};

const STUDENT_ONLY: &[Role] = &[Role::Student];
const OWNERS: &[Role] = &[Role::Owner, Role::Agent];

/// Every view the client can show
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Welcome,
    Login,
    StudentSignup,
    OwnerSignup,
    StudentDashboard,
    OwnerDashboard,
    AddProperty,
    HostelDetail(String),
    PaymentSetup,
}

impl Route {
    /// Parse a path; `None` for paths outside the route table.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match segments.as_slice() {
            [] => Route::Welcome,
            ["login"] => Route::Login,
            ["signup", "student"] => Route::StudentSignup,
            ["signup", "owner"] => Route::OwnerSignup,
            ["student", "dashboard"] => Route::StudentDashboard,
            ["owner", "dashboard"] => Route::OwnerDashboard,
            ["owner", "add-property"] => Route::AddProperty,
            ["hostel", id] if !id.is_empty() => Route::HostelDetail((*id).to_string()),
            ["payments", "setup"] => Route::PaymentSetup,
            _ => return None,
        };
        if !path.starts_with('/') {
            return None;
        }
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Welcome => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::StudentSignup => "/signup/student".to_string(),
            Route::OwnerSignup => "/signup/owner".to_string(),
            Route::StudentDashboard => "/student/dashboard".to_string(),
            Route::OwnerDashboard => "/owner/dashboard".to_string(),
            Route::AddProperty => "/owner/add-property".to_string(),
            Route::HostelDetail(id) => format!("/hostel/{id}"),
            Route::PaymentSetup => "/payments/setup".to_string(),
        }
    }

    /// Roles allowed to view this route, `None` when it is public.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Welcome | Route::Login | Route::StudentSignup | Route::OwnerSignup => None,
            Route::StudentDashboard | Route::HostelDetail(_) | Route::PaymentSetup => {
                Some(STUDENT_ONLY)
            }
            Route::OwnerDashboard | Route::AddProperty => Some(OWNERS),
        }
    }

    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Student => Route::StudentDashboard,
            Role::Owner | Role::Agent => Route::OwnerDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether `requested` may be shown to `user`.
pub fn guard(user: Option<&User>, allowed: &[Role], requested: &Route) -> GuardDecision {
    let Some(user) = user else {
        debug!(route = %requested, "no session, redirecting to login");
        return GuardDecision::Redirect(Route::Login);
    };
    if !allowed.contains(&user.role()) {
        debug!(route = %requested, role = user.role().as_str(), "role not allowed");
        return GuardDecision::Redirect(Route::Welcome);
    }
    GuardDecision::Render
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

impl Resolution {
    pub fn route(&self) -> &Route {
        match self {
            Resolution::Render(r) | Resolution::Redirect(r) => r,
        }
    }
}

/// One navigation step for `path` given the current identity.
pub fn resolve(path: &str, user: Option<&User>) -> Resolution {
    let Some(route) = Route::parse(path) else {
        return Resolution::Redirect(Route::Welcome);
    };
    if route == Route::Welcome {
        if let Some(user) = user {
            return Resolution::Redirect(Route::dashboard_for(user.role()));
        }
    }
    match route.allowed_roles() {
        None => Resolution::Render(route),
        Some(allowed) => match guard(user, allowed, &route) {
            GuardDecision::Render => Resolution::Render(route),
            GuardDecision::Redirect(to) => Resolution::Redirect(to),
        },
    }
}

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::{ListingCatalog, ListingFilter};
use crate::config::AppConfig;
use crate::detail::ListingDetail;
use crate::error::AppError;
use crate::models::{Hostel, Role};
use crate::router::{self, Resolution, Route};
use crate::session::{Authenticator, Credentials, MockAuthenticator, PendingLogin, SessionStore};
use crate::wizard::{OwnerSignupForm, PropertyForm, StudentSignupForm, Wizard};

const MAX_REDIRECTS: usize = 4;

/// The running client: session, listings and navigation
pub struct App {
    config: AppConfig,
    session: SessionStore,
    catalog: ListingCatalog,
    authenticator: Arc<dyn Authenticator>,
}

impl App {
    /// Client with the mock login and the seed listings
    pub fn new(config: AppConfig) -> Self {
        let authenticator = Arc::new(MockAuthenticator::with_delay(config.login_delay()));
        Self::with_parts(config, ListingCatalog::seeded(), authenticator)
    }

    pub fn with_parts(
        config: AppConfig,
        catalog: ListingCatalog,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            config,
            session: SessionStore::new(),
            catalog,
            authenticator,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    /// Follow redirects for `path` until a view renders.
    pub fn navigate(&self, path: &str) -> Route {
        let mut path = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            match router::resolve(&path, self.session.current()) {
                Resolution::Render(route) => return route,
                Resolution::Redirect(route) => {
                    info!(from = %path, to = %route, "redirect");
                    path = route.path();
                }
            }
        }
        warn!(%path, "too many redirects, falling back to welcome");
        Route::Welcome
    }

    pub fn complete_student_signup(
        &mut self,
        wizard: &mut Wizard<StudentSignupForm>,
    ) -> Result<Route, AppError> {
        let submission = wizard.submit()?;
        self.session.login(submission.record);
        Ok(submission.destination)
    }

    pub fn complete_owner_signup(
        &mut self,
        wizard: &mut Wizard<OwnerSignupForm>,
    ) -> Result<Route, AppError> {
        let submission = wizard.submit()?;
        self.session.login(submission.record);
        Ok(submission.destination)
    }

    /// Start a listing draft for the signed-in owner or agent.
    pub fn new_listing(&self) -> Result<Wizard<PropertyForm>, AppError> {
        let owner = self.require_owner()?;
        Ok(Wizard::new(PropertyForm::with_photo_limit(
            owner,
            self.config.max_photos,
        )))
    }

    pub fn publish_listing(
        &mut self,
        wizard: &mut Wizard<PropertyForm>,
    ) -> Result<(Hostel, Route), AppError> {
        let owner = self.require_owner()?;
        if wizard.form().owner_id() != owner {
            let role = self.session.current().map_or(Role::Owner, |u| u.role());
            return Err(AppError::NotAuthorized(role));
        }

        let submission = wizard.submit()?;
        self.catalog.insert(submission.record.clone())?;
        Ok((submission.record, submission.destination))
    }

    /// Run the login flow to completion and install the identity.
    pub async fn login(&mut self, credentials: Credentials) -> Result<Route, AppError> {
        let pending = PendingLogin::start(self.authenticator.clone(), credentials);
        let user = pending.resolve().await.map_err(AppError::Login)?;
        let destination = Route::dashboard_for(user.role());
        self.session.login(user);
        Ok(destination)
    }

    pub fn logout(&mut self) -> Route {
        self.session.logout();
        Route::Welcome
    }

    /// Browse filter with the configured price ceiling
    pub fn default_filter(&self) -> ListingFilter {
        ListingFilter {
            max_annual_price: self.config.max_annual_price,
            ..Default::default()
        }
    }

    pub fn search(&self, filter: &ListingFilter) -> Vec<&Hostel> {
        self.catalog.filter(filter)
    }

    pub fn open_listing(&self, id: &str) -> Result<ListingDetail, AppError> {
        self.catalog
            .get(id)
            .cloned()
            .map(ListingDetail::new)
            .ok_or_else(|| AppError::UnknownListing(id.to_string()))
    }

    fn require_owner(&self) -> Result<String, AppError> {
        let user = self.session.current().ok_or(AppError::NotSignedIn)?;
        if !user.role().manages_property() {
            return Err(AppError::NotAuthorized(user.role()));
        }
        Ok(user.id.clone())
    }
}

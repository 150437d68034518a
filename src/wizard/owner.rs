use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WizardError;
use crate::models::{ApprovalStatus, FileRef, OwnerProfile, Profile, Role, User};
use crate::reference;
use crate::router::Route;
use crate::wizard::{toggle_selection, WizardForm};

/// Which kind of property account is being opened
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AccountKind {
    #[default]
    Owner,
    Agent,
}

impl AccountKind {
    pub fn role(&self) -> Role {
        match self {
            AccountKind::Owner => Role::Owner,
            AccountKind::Agent => Role::Agent,
        }
    }
}

/// Owner/agent registration: account, property location, KYC documents, review.
#[derive(Debug, Clone, Default)]
pub struct OwnerSignupForm {
    pub kind: AccountKind,
    pub full_name: String,
    pub business_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,

    region: String,
    pub city: String,
    served_institutions: Vec<String>,
    pub address: String,

    government_id: Option<FileRef>,
    business_document: Option<FileRef>,
}

impl OwnerSignupForm {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Changing region drops the city and institutions chosen for the old one.
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if region != self.region {
            self.city.clear();
            self.served_institutions.clear();
        }
        self.region = region;
    }

    pub fn served_institutions(&self) -> &[String] {
        &self.served_institutions
    }

    /// Select or deselect an institution of the current region.
    /// Returns false for institutions outside the region.
    pub fn toggle_institution(&mut self, institution: &str) -> bool {
        if !reference::institutions_for(&self.region).contains(&institution) {
            return false;
        }
        toggle_selection(&mut self.served_institutions, institution);
        true
    }

    pub fn government_id(&self) -> Option<&FileRef> {
        self.government_id.as_ref()
    }

    pub fn attach_government_id(&mut self, file: Option<FileRef>) {
        self.government_id = file;
    }

    pub fn business_document(&self) -> Option<&FileRef> {
        self.business_document.as_ref()
    }

    pub fn attach_business_document(&mut self, file: Option<FileRef>) {
        self.business_document = file;
    }
}

impl WizardForm for OwnerSignupForm {
    type Output = User;

    const NAME: &'static str = "owner-signup";

    fn missing_fields(&self, step: u8) -> Vec<&'static str> {
        let is_agent = self.kind == AccountKind::Agent;
        let mut missing = Vec::new();
        match step {
            1 => {
                if self.full_name.is_empty() {
                    missing.push("full_name");
                }
                if is_agent && self.business_name.trim().is_empty() {
                    missing.push("business_name");
                }
                if self.email.is_empty() {
                    missing.push("email");
                }
                if self.password.is_empty() {
                    missing.push("password");
                }
                if self.password != self.confirm_password {
                    missing.push("confirm_password");
                }
            }
            2 => {
                if self.region.is_empty() {
                    missing.push("region");
                }
                if self.city.is_empty() {
                    missing.push("city");
                }
                if self.address.is_empty() {
                    missing.push("address");
                }
                if self.served_institutions.is_empty() {
                    missing.push("served_institutions");
                }
            }
            3 => {
                if self.government_id.is_none() {
                    missing.push("government_id");
                }
                if is_agent && self.business_document.is_none() {
                    missing.push("business_document");
                }
            }
            _ => {}
        }
        missing
    }

    fn finish(&self) -> Result<User, WizardError> {
        let mut user = User::new(
            Uuid::new_v4().to_string(),
            self.email.clone(),
            self.full_name.clone(),
            self.kind.role(),
        );
        user.profile_complete = true;

        let business_name = Some(self.business_name.trim().to_string()).filter(|n| !n.is_empty());
        let kyc_documents = self
            .government_id
            .iter()
            .chain(self.business_document.iter())
            .cloned()
            .collect();

        user.profile = Profile::Owner(OwnerProfile {
            business_name,
            region: self.region.clone(),
            city: self.city.clone(),
            served_institutions: self.served_institutions.clone(),
            address: self.address.clone(),
            kyc_documents,
            approval_status: ApprovalStatus::Pending,
        });
        Ok(user)
    }

    fn exit_route(&self) -> Route {
        Route::Welcome
    }

    fn destination(&self, _: &User) -> Route {
        Route::OwnerDashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Wizard;

    fn account(kind: AccountKind) -> OwnerSignupForm {
        let mut form = OwnerSignupForm::new(kind);
        form.full_name = "Tunde Bakare".into();
        form.email = "tunde@homes.ng".into();
        form.password = "secret".into();
        form.confirm_password = "secret".into();
        form
    }

    fn located(mut form: OwnerSignupForm) -> OwnerSignupForm {
        form.set_region("Lagos");
        form.city = "Yaba".into();
        form.address = "3 Commercial Ave".into();
        assert!(form.toggle_institution("Yaba College of Technology (YABATECH)"));
        form
    }

    #[test]
    fn agents_need_a_business_name() {
        let owner = account(AccountKind::Owner);
        assert!(owner.step_ready(1));

        let mut agent = account(AccountKind::Agent);
        assert_eq!(agent.missing_fields(1), vec!["business_name"]);
        agent.business_name = "Prime Lets".into();
        assert!(agent.step_ready(1));
    }

    #[test]
    fn region_change_resets_city_and_institutions() {
        let mut form = located(account(AccountKind::Owner));
        assert!(form.step_ready(2));

        form.set_region("Kano");
        assert!(form.city.is_empty());
        assert!(form.served_institutions().is_empty());
        assert_eq!(form.missing_fields(2), vec!["city", "served_institutions"]);
    }

    #[test]
    fn institution_toggle_is_scoped_to_region() {
        let mut form = account(AccountKind::Owner);
        assert!(!form.toggle_institution("University of Lagos (UNILAG)"));

        form.set_region("Lagos");
        assert!(form.toggle_institution("University of Lagos (UNILAG)"));
        assert!(form.toggle_institution("Lagos State University (LASU)"));
        assert!(form.toggle_institution("University of Lagos (UNILAG)"));
        assert_eq!(form.served_institutions(), ["Lagos State University (LASU)"]);
    }

    #[test]
    fn kyc_step_requirements_depend_on_kind() {
        let mut owner = located(account(AccountKind::Owner));
        assert_eq!(owner.missing_fields(3), vec!["government_id"]);
        owner.attach_government_id(Some(FileRef::new("nin.pdf")));
        assert!(owner.step_ready(3));

        let mut agent = located(account(AccountKind::Agent));
        agent.attach_government_id(Some(FileRef::new("nin.pdf")));
        assert_eq!(agent.missing_fields(3), vec!["business_document"]);
        agent.attach_business_document(Some(FileRef::new("cac.pdf")));
        assert!(agent.step_ready(3));
    }

    #[test]
    fn submission_is_pending_approval_with_documents() {
        let mut form = located(account(AccountKind::Agent));
        form.business_name = "  Prime Lets ".into();
        form.attach_government_id(Some(FileRef::new("nin.pdf")));
        form.attach_business_document(Some(FileRef::new("cac.pdf")));

        let mut wizard = Wizard::new(form);
        while wizard.advance() {}
        assert!(wizard.is_final_step());

        let submission = wizard.submit().unwrap();
        assert_eq!(submission.destination, Route::OwnerDashboard);
        let user = submission.record;
        assert_eq!(user.role(), Role::Agent);

        let profile = user.owner_profile().unwrap();
        assert_eq!(profile.business_name.as_deref(), Some("Prime Lets"));
        assert_eq!(profile.approval_status, ApprovalStatus::Pending);
        assert_eq!(
            profile.kyc_documents,
            vec![FileRef::new("nin.pdf"), FileRef::new("cac.pdf")]
        );
    }
}

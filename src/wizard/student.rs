use uuid::Uuid;

use crate::error::WizardError;
use crate::models::{FileRef, Gender, GenderRestriction, Profile, Role, StudentProfile, User};
use crate::reference;
use crate::router::Route;
use crate::wizard::WizardForm;

/// Student registration: institution, personal details, verification
/// documents, review.
#[derive(Debug, Clone, Default)]
pub struct StudentSignupForm {
    region: String,
    institution: String,
    pub academic_level: String,
    pub interested_in_monthly_rent: bool,

    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: Gender,
    pub preferred_housing: GenderRestriction,

    student_id: Option<FileRef>,
    admission_letter: Option<FileRef>,
}

impl StudentSignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Changing region drops the institution picked for the old one.
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if region != self.region {
            self.institution.clear();
        }
        self.region = region;
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    /// Pick an institution of the current region. Returns false and keeps
    /// the previous pick for institutions outside the region.
    pub fn set_institution(&mut self, institution: &str) -> bool {
        if !reference::institutions_for(&self.region).contains(&institution) {
            return false;
        }
        self.institution = institution.to_string();
        true
    }

    pub fn student_id(&self) -> Option<&FileRef> {
        self.student_id.as_ref()
    }

    pub fn attach_student_id(&mut self, file: Option<FileRef>) {
        self.student_id = file;
    }

    pub fn admission_letter(&self) -> Option<&FileRef> {
        self.admission_letter.as_ref()
    }

    pub fn attach_admission_letter(&mut self, file: Option<FileRef>) {
        self.admission_letter = file;
    }
}

impl WizardForm for StudentSignupForm {
    type Output = User;

    const NAME: &'static str = "student-signup";

    fn missing_fields(&self, step: u8) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            1 => {
                if self.region.is_empty() {
                    missing.push("region");
                }
                if self.institution.is_empty() {
                    missing.push("institution");
                }
            }
            2 => {
                if self.full_name.is_empty() {
                    missing.push("full_name");
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
            _ => {}
        }
        missing
    }

    fn finish(&self) -> Result<User, WizardError> {
        let mut user = User::new(
            Uuid::new_v4().to_string(),
            self.email.clone(),
            self.full_name.clone(),
            Role::Student,
        );
        user.profile_complete = true;
        user.profile = Profile::Student(StudentProfile {
            region: self.region.clone(),
            institution: self.institution.clone(),
            academic_level: Some(self.academic_level.clone()).filter(|l| !l.is_empty()),
            gender: self.gender,
            preferred_housing: self.preferred_housing,
            interested_in_monthly_rent: self.interested_in_monthly_rent,
        });
        Ok(user)
    }

    fn exit_route(&self) -> Route {
        Route::Welcome
    }

    fn destination(&self, _: &User) -> Route {
        Route::StudentDashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Wizard;

    fn filled_location() -> StudentSignupForm {
        let mut form = StudentSignupForm::new();
        form.set_region("Lagos");
        form.set_institution("University of Lagos (UNILAG)");
        form
    }

    #[test]
    fn step_one_needs_region_and_institution() {
        let mut form = StudentSignupForm::new();
        assert_eq!(form.missing_fields(1), vec!["region", "institution"]);
        form.set_region("Lagos");
        assert_eq!(form.missing_fields(1), vec!["institution"]);
        form.set_institution("Lagos State University (LASU)");
        assert!(form.step_ready(1));
    }

    #[test]
    fn changing_region_clears_institution() {
        let mut form = filled_location();
        form.set_region("Lagos");
        assert_eq!(form.institution(), "University of Lagos (UNILAG)");

        form.set_region("Oyo");
        assert_eq!(form.institution(), "");
        assert!(!form.step_ready(1));
    }

    #[test]
    fn institution_must_belong_to_region() {
        let mut form = StudentSignupForm::new();
        assert!(!form.set_institution("University of Lagos (UNILAG)"));
        assert_eq!(form.institution(), "");

        form.set_region("Oyo");
        assert!(!form.set_institution("University of Lagos (UNILAG)"));
        assert!(form.set_institution("University of Ibadan (UI)"));
        assert!(!form.set_institution("Covenant University"));
        assert_eq!(form.institution(), "University of Ibadan (UI)");
    }

    #[test]
    fn password_must_match_confirmation() {
        let mut form = filled_location();
        form.full_name = "Jane Doe".into();
        form.email = "jane@x.com".into();
        form.password = "pw1".into();
        form.confirm_password = "pw2".into();
        assert_eq!(form.missing_fields(2), vec!["confirm_password"]);

        form.confirm_password = "pw1".into();
        assert!(form.step_ready(2));
    }

    #[test]
    fn document_and_review_steps_never_block() {
        let form = StudentSignupForm::new();
        assert!(form.step_ready(3));
        assert!(form.step_ready(4));
    }

    #[test]
    fn uploads_replace_previous_file() {
        let mut form = StudentSignupForm::new();
        form.attach_student_id(Some(FileRef::new("id-front.jpg")));
        form.attach_student_id(Some(FileRef::new("id-rescan.jpg")));
        assert_eq!(form.student_id().map(FileRef::name), Some("id-rescan.jpg"));
        form.attach_student_id(None);
        assert!(form.student_id().is_none());
    }

    #[test]
    fn submission_builds_student_identity() {
        let mut form = filled_location();
        form.full_name = "Jane Doe".into();
        form.email = "jane@x.com".into();
        form.password = "pw1".into();
        form.confirm_password = "pw1".into();
        form.academic_level = "300L".into();

        let mut wizard = Wizard::new(form);
        for _ in 0..3 {
            assert!(wizard.advance());
        }
        let submission = wizard.submit().unwrap();
        let user = submission.record;

        assert_eq!(submission.destination, Route::StudentDashboard);
        assert_eq!(user.role(), Role::Student);
        assert!(!user.verified);
        assert!(user.profile_complete);
        let profile = user.student_profile().unwrap();
        assert_eq!(profile.academic_level.as_deref(), Some("300L"));
        assert_eq!(profile.preferred_housing, GenderRestriction::Mixed);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod hostel;

pub use hostel::{GenderRestriction, Hostel, RentType};

/// Role an identity signs up with. Fixed for the lifetime of the identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Student,
    Owner,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Owner => "owner",
            Role::Agent => "agent",
        }
    }

    /// Owners and agents share the property-management side of the app.
    pub fn manages_property(&self) -> bool {
        matches!(self, Role::Owner | Role::Agent)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Reference to a user-selected file (an upload slot only ever holds the name).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRef(pub String);

impl FileRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub region: String,
    pub institution: String,
    pub academic_level: Option<String>,
    pub gender: Gender,
    pub preferred_housing: GenderRestriction,
    pub interested_in_monthly_rent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub business_name: Option<String>,
    pub region: String,
    pub city: String,
    pub served_institutions: Vec<String>,
    pub address: String,
    pub kyc_documents: Vec<FileRef>,
    pub approval_status: ApprovalStatus,
}

/// Role-specific part of an identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Profile {
    /// Signed in through the login screen, no signup details known
    Basic,
    Student(StudentProfile),
    Owner(OwnerProfile),
}

/// An authenticated identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    role: Role,
    pub verified: bool,
    pub profile_complete: bool,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            full_name: full_name.into(),
            role,
            verified: false,
            profile_complete: false,
            profile: Profile::Basic,
            created_at: Utc::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn student_profile(&self) -> Option<&StudentProfile> {
        match &self.profile {
            Profile::Student(p) => Some(p),
            _ => None,
        }
    }

    pub fn owner_profile(&self) -> Option<&OwnerProfile> {
        match &self.profile {
            Profile::Owner(p) => Some(p),
            _ => None,
        }
    }
}

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::RecruiterId;
use crate::error::{Result, SplitsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the caller viewing an application.
///
/// `PlatformAdmin` satisfies both the recruiter and the company predicate.
/// `RecruiterAndCompany` does too, but without the admin note privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Recruiter,
    CompanyUser,
    RecruiterAndCompany,
    PlatformAdmin,
    #[default]
    Other,
}

impl ActorRole {
    pub const ALL: [Self; 5] = [
        Self::Recruiter,
        Self::CompanyUser,
        Self::RecruiterAndCompany,
        Self::PlatformAdmin,
        Self::Other,
    ];

    /// Maps the legacy flag triple onto a single role. Admin wins over the
    /// other two flags; every combination is accepted.
    #[must_use]
    pub const fn from_flags(
        is_recruiter: bool,
        is_company_user: bool,
        is_platform_admin: bool,
    ) -> Self {
        match (is_recruiter, is_company_user, is_platform_admin) {
            (_, _, true) => Self::PlatformAdmin,
            (true, true, false) => Self::RecruiterAndCompany,
            (true, false, false) => Self::Recruiter,
            (false, true, false) => Self::CompanyUser,
            (false, false, false) => Self::Other,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recruiter => "recruiter",
            Self::CompanyUser => "company_user",
            Self::RecruiterAndCompany => "recruiter_and_company",
            Self::PlatformAdmin => "platform_admin",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn acts_as_recruiter(&self) -> bool {
        matches!(
            self,
            Self::Recruiter | Self::RecruiterAndCompany | Self::PlatformAdmin
        )
    }

    #[must_use]
    pub const fn acts_as_company(&self) -> bool {
        matches!(
            self,
            Self::CompanyUser | Self::RecruiterAndCompany | Self::PlatformAdmin
        )
    }

    #[must_use]
    pub const fn is_platform_admin(&self) -> bool {
        matches!(self, Self::PlatformAdmin)
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorRole {
    type Err = SplitsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "recruiter" => Ok(Self::Recruiter),
            "company_user" | "company" => Ok(Self::CompanyUser),
            "recruiter_and_company" => Ok(Self::RecruiterAndCompany),
            "platform_admin" | "admin" => Ok(Self::PlatformAdmin),
            "other" | "none" => Ok(Self::Other),
            _ => Err(SplitsError::InvalidInput(format!("Unknown role: {s}"))),
        }
    }
}

/// Who is looking at the application, and whether it has a recruiter of record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActorContext {
    pub role: ActorRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_recruiter_id: Option<RecruiterId>,
}

impl ActorContext {
    #[must_use]
    pub const fn new(role: ActorRole, candidate_recruiter_id: Option<RecruiterId>) -> Self {
        Self {
            role,
            candidate_recruiter_id,
        }
    }

    #[must_use]
    pub fn from_flags(
        is_recruiter: bool,
        is_company_user: bool,
        is_platform_admin: bool,
        candidate_recruiter_id: Option<&str>,
    ) -> Self {
        Self::new(
            ActorRole::from_flags(is_recruiter, is_company_user, is_platform_admin),
            RecruiterId::from_optional(candidate_recruiter_id),
        )
    }

    #[must_use]
    pub const fn has_recruiter_of_record(&self) -> bool {
        self.candidate_recruiter_id.is_some()
    }

    #[must_use]
    pub const fn recruiter_of_record(&self) -> Option<&RecruiterId> {
        self.candidate_recruiter_id.as_ref()
    }
}

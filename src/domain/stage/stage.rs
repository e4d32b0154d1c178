#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::error::SplitsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of an application in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStage {
    Draft,
    AiReview,
    AiReviewed,
    RecruiterRequest,
    RecruiterProposed,
    RecruiterReview,
    Screen,
    Submitted,
    CompanyReview,
    CompanyFeedback,
    Interview,
    Offer,
    Hired,
    Rejected,
    Withdrawn,
    Expired,
}

impl ApplicationStage {
    pub const ALL: [Self; 16] = [
        Self::Draft,
        Self::AiReview,
        Self::AiReviewed,
        Self::RecruiterRequest,
        Self::RecruiterProposed,
        Self::RecruiterReview,
        Self::Screen,
        Self::Submitted,
        Self::CompanyReview,
        Self::CompanyFeedback,
        Self::Interview,
        Self::Offer,
        Self::Hired,
        Self::Rejected,
        Self::Withdrawn,
        Self::Expired,
    ];

    pub const TERMINAL: [Self; 4] = [Self::Hired, Self::Rejected, Self::Withdrawn, Self::Expired];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::AiReview => "ai_review",
            Self::AiReviewed => "ai_reviewed",
            Self::RecruiterRequest => "recruiter_request",
            Self::RecruiterProposed => "recruiter_proposed",
            Self::RecruiterReview => "recruiter_review",
            Self::Screen => "screen",
            Self::Submitted => "submitted",
            Self::CompanyReview => "company_review",
            Self::CompanyFeedback => "company_feedback",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
            Self::Expired => "expired",
        }
    }

    /// Human-readable name shown in the pipeline UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::AiReview => "AI Review",
            Self::AiReviewed => "AI Reviewed",
            Self::RecruiterRequest => "Recruiter Request",
            Self::RecruiterProposed => "Recruiter Proposed",
            Self::RecruiterReview => "Recruiter Review",
            Self::Screen => "Screening",
            Self::Submitted => "Submitted",
            Self::CompanyReview => "Company Review",
            Self::CompanyFeedback => "Company Feedback",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
            Self::Expired => "Expired",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Hired | Self::Rejected | Self::Withdrawn | Self::Expired
        )
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for ApplicationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ApplicationStage {
    type Error = SplitsError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| SplitsError::InvalidStage(s.to_string()))
    }
}

impl FromStr for ApplicationStage {
    type Err = SplitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

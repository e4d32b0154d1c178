#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

//! Stage permission engine for the Splits Network application pipeline.
//!
//! Given an application's stage and the caller's role, the engine decides
//! which review actions the portal offers, what their buttons say, and where
//! an approval moves the application next. Everything here is pure and
//! advisory; the applications API remains the authority.

pub mod domain;
pub mod error;
pub mod protocol_envelope;

pub use domain::{
    categorize_documents, next_stage_on_approve, plan_stage_update, resolve_permissions,
    resolve_stage_permissions, ActorContext, ActorRole, ApplicationAction, ApplicationStage,
    CategorizedDocuments, Document, DocumentLike, RecruiterId, StagePermissions, StageRef,
    StageUpdatePlan,
};
pub use error::{code, Result, SplitsError};
pub use protocol_envelope::ProtocolEnvelope;

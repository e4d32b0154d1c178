#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod actions;
pub mod actor;
pub mod documents;
pub mod permissions;
pub mod stage;

pub use actions::{plan_stage_update, ApplicationAction, StageUpdatePlan};
pub use actor::{ActorContext, ActorRole, RecruiterId};
pub use documents::{categorize_documents, CategorizedDocuments, Document, DocumentLike};
pub use permissions::{resolve_permissions, resolve_stage_permissions, StagePermissions};
pub use stage::{next_stage_on_approve, ApplicationStage, StageRef};

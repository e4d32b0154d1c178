#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod resolver;
mod stage_permissions;

pub use resolver::{
    resolve_permissions, resolve_stage_permissions, NO_APPLICATION_LABEL,
    NO_APPLICATION_MESSAGE, TERMINAL_FALLBACK_MESSAGE,
};
pub use stage_permissions::StagePermissions;

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod action;
mod stage_update;

pub use action::ApplicationAction;
pub use stage_update::{plan_stage_update, StageUpdatePlan};

#[cfg(test)]
mod tests;

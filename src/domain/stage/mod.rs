#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod next_stage;
mod stage;
mod stage_ref;

pub use next_stage::next_stage_on_approve;
pub use stage::ApplicationStage;
pub use stage_ref::StageRef;

#[cfg(test)]
mod tests;

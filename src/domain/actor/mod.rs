#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod ids;
mod role;

pub use ids::RecruiterId;
pub use role::{ActorContext, ActorRole};

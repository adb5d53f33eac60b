//! Core 256-round block transformation: key schedule, padding/framing,
//! quarter split/join, round-key application, and the round engine.

mod apply;
mod engine;
pub(crate) mod pad;
pub(crate) mod quarter;
pub(crate) mod schedule;
mod util;

pub(crate) use engine::{decrypt_rounds, encrypt_rounds};
pub(crate) use schedule::Schedule;

//! Release workflow helpers for Scribe

mod changelog;
mod release;

pub use changelog::*;
pub use release::*;

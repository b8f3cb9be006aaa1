//! Quadfall (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package re-exports
//! them as `quadfall::{core,input,io,term,types}` and ships the terminal binary.

pub use quadfall_core as core;
pub use quadfall_input as input;
pub use quadfall_io as io;
pub use quadfall_term as term;
pub use quadfall_types as types;
